//! Geographic points (h-geo).

use std::fmt;

use crate::location::Location;

/// Kilometres per degree of great-circle arc.
pub const DEG_KM: f64 = 111.133_84;

/// A point given as latitude and longitude in degrees, plus an optional
/// altitude (presumably metres).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geo {
    latitude: f64,
    longitude: f64,
    altitude: Option<f64>,
}

impl Geo {
    /// Creates a new point.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, altitude: Option<f64>) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    #[must_use]
    pub const fn altitude(&self) -> Option<f64> {
        self.altitude
    }

    /// Great-circle distance to `other` in kilometres.
    ///
    /// The central angle comes from the spherical law of cosines and is scaled
    /// by [`DEG_KM`] after converting it back to degrees. A point compared with
    /// itself is exactly `0.0`.
    ///
    /// Two separate points with the same latitude and longitude also return
    /// `0.0` without evaluating the formula, so altitude is ignored and the
    /// result never drifts from rounding in `acos`.
    #[must_use]
    #[expect(clippy::float_cmp, reason = "identical coordinates short-circuit")]
    pub fn distance(&self, other: &Self) -> f64 {
        if std::ptr::eq(self, other)
            || (self.latitude == other.latitude && self.longitude == other.longitude)
        {
            return 0.0;
        }

        let (lat1, lat2) = (self.latitude.to_radians(), other.latitude.to_radians());
        let delta = (self.longitude - other.longitude).to_radians();
        let cosine = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * delta.cos();

        // Rounding can push the cosine a hair past ±1
        DEG_KM * cosine.clamp(-1.0, 1.0).acos().to_degrees()
    }
}

impl Location for Geo {
    fn geo(&self) -> Option<&Geo> {
        Some(self)
    }
}

/// Renders the `geo:` URI form, e.g. `geo:37.786971,-122.399677`.
impl fmt::Display for Geo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "geo:{},{}", self.latitude, self.longitude)?;
        if let Some(altitude) = self.altitude {
            write!(f, ",{altitude}")?;
        }
        Ok(())
    }
}
