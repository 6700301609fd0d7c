//! h-adr rendering.

use microformats_core::constants::{
    H_ADR, P_COUNTRY, P_EXTENDED_ADDRESS, P_GEO, P_LOCALITY, P_POST_OFFICE_BOX, P_POSTAL_CODE,
    P_REGION, P_STREET_ADDRESS,
};
use microformats_model::{Address, Geo, Location};

use crate::escape::escape_html;
use crate::format::Format;
use crate::geo::GeoFormatter;

/// Renders an [`Address`] as an `h-adr` span, delegating coordinates to `G`.
#[derive(Debug, Clone, Default)]
pub struct AddressFormatter<G = GeoFormatter> {
    geo_formatter: G,
}

impl AddressFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G: Format<Geo>> AddressFormatter<G> {
    /// Uses `geo_formatter` for the nested `p-geo` part.
    #[must_use]
    pub const fn with_geo_formatter(geo_formatter: G) -> Self {
        Self { geo_formatter }
    }
}

impl<G: Format<Geo>> Format<Address> for AddressFormatter<G> {
    fn format(&self, address: &Address) -> String {
        let fields = [
            (P_STREET_ADDRESS, address.street()),
            (P_EXTENDED_ADDRESS, address.extended()),
            (P_POST_OFFICE_BOX, address.pobox()),
            (P_LOCALITY, address.locality()),
            (P_REGION, address.region()),
            (P_POSTAL_CODE, address.postal()),
            (P_COUNTRY, address.country()),
        ];

        let mut tags: Vec<String> = fields
            .into_iter()
            .filter_map(|(class, value)| value.filter(|v| !v.is_empty()).map(|v| (class, v)))
            .map(|(class, value)| format!(r#"<span class="{class}">{}</span>"#, escape_html(value)))
            .collect();

        if let Some(geo) = address.geo() {
            tags.push(format!(
                r#"<span class="{P_GEO}">{}</span>"#,
                self.geo_formatter.format(geo)
            ));
        }

        format!(r#"<span class="{H_ADR}">{}</span>"#, tags.join(" "))
    }
}
