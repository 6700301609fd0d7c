//! h-card rendering.
//!
//! A card becomes a definition list: one `<dt>` label and `<dd>` value per
//! populated field, in a fixed order. Blank text fields are skipped; photo
//! and logo rows only need the field to be present.

use std::fmt::Write as _;

use chrono::NaiveDate;
use microformats_core::config::FormatConfig;
use microformats_core::constants::{
    DT_ANNIVERSARY, DT_BDAY, H_CARD, P_ADR, P_CATEGORY, P_GENDER, P_JOB_TITLE, P_NAME, P_NOTE,
    P_ORG, P_ORGANIZATION_NAME, P_ROLE, P_SEX, P_TEL, U_EMAIL, U_IMPP, U_KEY, U_LOGO, U_PHOTO,
    U_URL,
};
use microformats_model::{Address, Card, CardName, Name, Organization};

use crate::address::AddressFormatter;
use crate::escape::escape_html;
use crate::format::Format;
use crate::name::NameFormatter;

/// Renders a [`Card`] as an `h-card` definition list.
///
/// Addresses go through `A`, structured names through `N`, and an
/// organisation card is rendered by this formatter again.
#[derive(Debug, Clone, Default)]
pub struct CardFormatter<A = AddressFormatter, N = NameFormatter> {
    address_formatter: A,
    name_formatter: N,
    config: FormatConfig,
}

impl CardFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A, N> CardFormatter<A, N>
where
    A: Format<Address>,
    N: Format<Name>,
{
    /// Uses the given nested formatters with the default configuration.
    #[must_use]
    pub fn with_formatters(address_formatter: A, name_formatter: N) -> Self {
        Self {
            address_formatter,
            name_formatter,
            config: FormatConfig::default(),
        }
    }

    /// Replaces the date patterns and field separator.
    #[must_use]
    pub fn with_config(self, config: FormatConfig) -> Self {
        Self { config, ..self }
    }

    #[must_use]
    pub const fn config(&self) -> &FormatConfig {
        &self.config
    }

    fn name_row(&self, card: &Card) -> Option<String> {
        match card.card_name()? {
            CardName::Structured(name) => Some(row(
                "Name",
                &format!(
                    r#"<span class="{P_NAME}">{}</span>"#,
                    self.name_formatter.format(name)
                ),
            )),
            CardName::Formatted(full) => non_empty(Some(full.as_str())).map(|full| {
                row(
                    "Name",
                    &format!(r#"<span class="{P_NAME}">{}</span>"#, escape_html(full)),
                )
            }),
        }
    }

    fn org_row(&self, card: &Card) -> Option<String> {
        match card.organization()? {
            Organization::Card(org) => {
                let org: &Card = org;
                Some(format!(
                    r#"<dt>Organization</dt><dd class="{P_ORG}">{}</dd>"#,
                    self.format(org)
                ))
            }
            Organization::Name(name) => non_empty(Some(name.as_str())).map(|name| {
                row(
                    "Organization",
                    &format!(
                        r#"<span class="{P_ORG} {P_ORGANIZATION_NAME}">{}</span>"#,
                        escape_html(name)
                    ),
                )
            }),
        }
    }

    fn date_row(&self, label: &str, class: &str, date: Option<NaiveDate>) -> Option<String> {
        let date = date?;
        let machine = format_date(date, &self.config.date_attribute);
        let human = format_date(date, &self.config.date_display);
        Some(row(
            label,
            &format!(
                r#"<time class="{class}" datetime="{}">{}</time>"#,
                escape_html(&machine),
                escape_html(&human)
            ),
        ))
    }
}

impl<A, N> Format<Card> for CardFormatter<A, N>
where
    A: Format<Address>,
    N: Format<Name>,
{
    fn format(&self, card: &Card) -> String {
        tracing::trace!(name = ?card.card_name(), "Formatting h-card");

        let text = |label: &str, class: &str, value: Option<&str>| {
            non_empty(value).map(|v| {
                row(label, &format!(r#"<span class="{class}">{}</span>"#, escape_html(v)))
            })
        };
        let link = |label: &str, class: &str, scheme: &str, value: Option<&str>| {
            non_empty(value).map(|v| {
                let v = escape_html(v);
                row(label, &format!(r#"<a href="{scheme}{v}" class="{class}">{v}</a>"#))
            })
        };
        // Image rows end with a stray `</span>` after the `</dd>`.
        let image = |label: &str, class: &str, value: Option<&str>| {
            value.map(|v| {
                let body = format!(
                    r#"<img class="{class}" src="{}" alt="{label}" />"#,
                    escape_html(v)
                );
                format!("{}</span>", row(label, &body))
            })
        };

        let rows = [
            self.name_row(card),
            image("Photo", U_PHOTO, card.photo()),
            image("Logo", U_LOGO, card.logo()),
            card.address().map(|address| {
                format!(
                    r#"<dt>Address</dt><dd class="{P_ADR}">{}</dd>"#,
                    self.address_formatter.format(address)
                )
            }),
            non_empty(card.tel()).map(|tel| {
                let dial: String = tel
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '+')
                    .collect();
                row(
                    "Phone",
                    &format!(
                        r#"<a href="tel:{dial}" class="{P_TEL}">{}</a>"#,
                        escape_html(tel)
                    ),
                )
            }),
            link("Email", U_EMAIL, "mailto:", card.email()),
            link("Homepage", U_URL, "", card.url()),
            link("IMPP", U_IMPP, "", card.impp()),
            self.org_row(card),
            text("Title", P_JOB_TITLE, card.title()),
            text("Role", P_ROLE, card.role()),
            // The Sex row is keyed on sex but displays the role.
            non_empty(card.sex()).map(|_| {
                row(
                    "Sex",
                    &format!(
                        r#"<span class="{P_SEX}">{}</span>"#,
                        escape_html(card.role().unwrap_or_default())
                    ),
                )
            }),
            text("Gender", P_GENDER, card.gender()),
            self.date_row("Birthday", DT_BDAY, card.birthday()),
            self.date_row("Anniversary", DT_ANNIVERSARY, card.anniversary()),
            text("Public Key", U_KEY, card.key()),
            text("Category", P_CATEGORY, card.category()),
            non_empty(card.note()).map(|note| {
                row(
                    "Note",
                    &format!(r#"<div class="{P_NOTE}">{}</div>"#, escape_html(note)),
                )
            }),
        ];

        let body = rows
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(self.config.separator.as_str());

        format!(r#"<dl class="{H_CARD}">{body}</dl>"#)
    }
}

fn row(label: &str, body: &str) -> String {
    format!("<dt>{label}</dt><dd>{body}</dd>")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Formats `date` with a `strftime` pattern, falling back to ISO 8601 when
/// the pattern cannot be rendered.
fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        tracing::warn!(pattern = %pattern, "Unusable date pattern, falling back to ISO 8601");
        return date.to_string();
    }
    out
}

#[cfg(test)]
mod tests;
