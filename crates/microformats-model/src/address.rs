//! Postal addresses (h-adr).

use crate::geo::Geo;
use crate::location::Location;
use crate::value::trim_opt;

/// A postal address. Every component is optional and stored trimmed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    street: Option<String>,
    extended: Option<String>,
    pobox: Option<String>,
    locality: Option<String>,
    region: Option<String>,
    postal: Option<String>,
    country: Option<String>,
    geo: Option<Geo>,
}

impl Address {
    /// Starts an address with every component absent.
    #[must_use]
    pub fn builder() -> AddressBuilder {
        AddressBuilder::default()
    }

    /// Street address.
    #[must_use]
    pub fn street(&self) -> Option<&str> {
        self.street.as_deref()
    }

    /// Extended address (e.g., apartment or suite number).
    #[must_use]
    pub fn extended(&self) -> Option<&str> {
        self.extended.as_deref()
    }

    /// Post office box.
    #[must_use]
    pub fn pobox(&self) -> Option<&str> {
        self.pobox.as_deref()
    }

    /// Locality (city).
    #[must_use]
    pub fn locality(&self) -> Option<&str> {
        self.locality.as_deref()
    }

    /// Region (state or province).
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Postal code.
    #[must_use]
    pub fn postal(&self) -> Option<&str> {
        self.postal.as_deref()
    }

    /// Country name.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

impl Location for Address {
    fn geo(&self) -> Option<&Geo> {
        self.geo.as_ref()
    }
}

/// Collects address components; text is trimmed when the address is built.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct AddressBuilder {
    street: Option<String>,
    extended: Option<String>,
    pobox: Option<String>,
    locality: Option<String>,
    region: Option<String>,
    postal: Option<String>,
    country: Option<String>,
    geo: Option<Geo>,
}

impl AddressBuilder {
    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    pub fn extended(mut self, extended: impl Into<String>) -> Self {
        self.extended = Some(extended.into());
        self
    }

    pub fn pobox(mut self, pobox: impl Into<String>) -> Self {
        self.pobox = Some(pobox.into());
        self
    }

    pub fn locality(mut self, locality: impl Into<String>) -> Self {
        self.locality = Some(locality.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn postal(mut self, postal: impl Into<String>) -> Self {
        self.postal = Some(postal.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn geo(mut self, geo: Geo) -> Self {
        self.geo = Some(geo);
        self
    }

    #[must_use]
    pub fn build(self) -> Address {
        Address {
            street: trim_opt(self.street),
            extended: trim_opt(self.extended),
            pobox: trim_opt(self.pobox),
            locality: trim_opt(self.locality),
            region: trim_opt(self.region),
            postal: trim_opt(self.postal),
            country: trim_opt(self.country),
            geo: self.geo,
        }
    }
}
