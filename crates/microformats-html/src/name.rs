//! Structured name rendering.

use microformats_core::constants::{
    P_ADDITIONAL_NAME, P_FAMILY_NAME, P_GIVEN_NAME, P_HONORIFIC_PREFIX, P_HONORIFIC_SUFFIX,
    P_MAIDEN_NAME, P_NAME, P_NICKNAME,
};
use microformats_model::Name;

use crate::escape::escape_html;
use crate::format::Format;

/// Renders a [`Name`] as a `p-name` span with one span per part.
///
/// A maiden name appears twice: once as a bare `p-maiden-name` span in part
/// order, then again in a trailing `(née …)` group.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameFormatter;

impl NameFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Format<Name> for NameFormatter {
    fn format(&self, name: &Name) -> String {
        let parts = [
            (P_HONORIFIC_PREFIX, name.prefix()),
            (P_NICKNAME, name.nick()),
            (P_GIVEN_NAME, Some(name.given())),
            (P_ADDITIONAL_NAME, Some(name.middle())),
            (P_FAMILY_NAME, Some(name.surname())),
            (P_HONORIFIC_SUFFIX, name.suffix()),
            (P_MAIDEN_NAME, name.maiden()),
        ];

        let mut tags: Vec<String> = parts
            .into_iter()
            .filter_map(|(class, value)| value.filter(|v| !v.is_empty()).map(|v| (class, v)))
            .map(|(class, value)| format!(r#"<span class="{class}">{}</span>"#, escape_html(value)))
            .collect();

        if let Some(maiden) = name.maiden().filter(|m| !m.is_empty()) {
            tags.push(format!(
                r#"(née <span class="{P_MAIDEN_NAME}">{}</span>)"#,
                escape_html(maiden)
            ));
        }

        format!(r#"<span class="{P_NAME}">{}</span>"#, tags.join(" "))
    }
}
