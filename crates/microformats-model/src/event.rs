//! Events (h-event), used for résumé education and experience entries.

use crate::address::Address;
use crate::card::Card;
use crate::date_range::DateRange;
use crate::geo::Geo;
use crate::location::Location;
use crate::value::trim_opt;

/// Where an event happened.
#[derive(Debug, Clone, PartialEq)]
pub enum Place {
    Address(Address),
    Card(Box<Card>),
    Geo(Geo),
}

impl Location for Place {
    fn geo(&self) -> Option<&Geo> {
        match self {
            Self::Address(address) => address.geo(),
            Self::Card(card) => card.geo(),
            Self::Geo(geo) => geo.geo(),
        }
    }
}

impl From<Address> for Place {
    fn from(address: Address) -> Self {
        Self::Address(address)
    }
}

impl From<Card> for Place {
    fn from(card: Card) -> Self {
        Self::Card(Box::new(card))
    }
}

impl From<Geo> for Place {
    fn from(geo: Geo) -> Self {
        Self::Geo(geo)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    name: String,
    summary: Option<String>,
    date: Option<DateRange>,
    description: Option<String>,
    url: Option<String>,
    category: Option<String>,
    location: Option<Place>,
}

impl Event {
    /// Starts an event with the given name or title.
    pub fn builder(name: &str) -> EventBuilder {
        EventBuilder {
            name: name.to_string(),
            ..EventBuilder::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    #[must_use]
    pub const fn date(&self) -> Option<&DateRange> {
        self.date.as_ref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Permalink.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[must_use]
    pub const fn location(&self) -> Option<&Place> {
        self.location.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct EventBuilder {
    name: String,
    summary: Option<String>,
    date: Option<DateRange>,
    description: Option<String>,
    url: Option<String>,
    category: Option<String>,
    location: Option<Place>,
}

impl EventBuilder {
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn date(mut self, date: DateRange) -> Self {
        self.date = Some(date);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn location(mut self, location: impl Into<Place>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Event {
        Event {
            name: self.name.trim().to_string(),
            summary: trim_opt(self.summary),
            date: self.date,
            description: trim_opt(self.description),
            url: trim_opt(self.url),
            category: trim_opt(self.category),
            location: self.location,
        }
    }
}
