//! The "has coordinates" capability shared by places.

use crate::geo::Geo;

/// Something that may be pinned to a point on the globe.
pub trait Location {
    /// Returns the coordinates, if known.
    fn geo(&self) -> Option<&Geo>;
}
