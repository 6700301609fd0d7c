//! h-geo rendering.

use microformats_core::constants::{H_GEO, P_ALTITUDE, P_LATITUDE, P_LONGITUDE};
use microformats_model::Geo;

use crate::format::Format;

/// Renders coordinates as an `h-geo` span.
///
/// Numbers use the shortest `f64` form that round-trips, never exponent
/// notation: `1e-5` renders as `0.00001`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoFormatter;

impl GeoFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Format<Geo> for GeoFormatter {
    fn format(&self, geo: &Geo) -> String {
        let mut html = format!(
            r#"<span class="{H_GEO}"><span class="{P_LATITUDE}">{}</span>, <span class="{P_LONGITUDE}">{}</span>"#,
            geo.latitude(),
            geo.longitude()
        );
        if let Some(altitude) = geo.altitude() {
            html.push_str(&format!(
                r#" (elevation <span class="{P_ALTITUDE}">{altitude}</span>)"#
            ));
        }
        html.push_str("</span>");
        html
    }
}
