//! Contact cards (h-card).

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::address::Address;
use crate::geo::Geo;
use crate::location::Location;
use crate::name::Name;
use crate::value::Value;

/// A card's name: structured parts or a single formatted string.
#[derive(Debug, Clone, PartialEq)]
pub enum CardName {
    Structured(Name),
    Formatted(String),
}

/// A card's organisation: a full card of its own or just a name.
#[derive(Debug, Clone, PartialEq)]
pub enum Organization {
    Card(Box<Card>),
    Name(String),
}

/// Input keys for each logical field: microformat-prefixed first, then bare.
mod keys {
    pub(super) const NAME: (&str, &str) = ("p-name", "name");
    pub(super) const EMAIL: (&str, &str) = ("u-email", "email");
    pub(super) const LOGO: (&str, &str) = ("u-logo", "logo");
    pub(super) const PHOTO: (&str, &str) = ("u-photo", "photo");
    pub(super) const URL: (&str, &str) = ("u-url", "url");
    pub(super) const UID: (&str, &str) = ("u-uid", "uid");
    pub(super) const CATEGORY: (&str, &str) = ("p-category", "category");
    pub(super) const TEL: (&str, &str) = ("p-tel", "tel");
    pub(super) const NOTE: (&str, &str) = ("p-note", "note");
    pub(super) const KEY: (&str, &str) = ("u-key", "key");
    pub(super) const ORG_NAME: (&str, &str) = ("p-organization-name", "orgName");
    pub(super) const TITLE: (&str, &str) = ("p-job-title", "title");
    pub(super) const ROLE: (&str, &str) = ("p-role", "role");
    pub(super) const IMPP: (&str, &str) = ("u-impp", "impp");
    pub(super) const SEX: (&str, &str) = ("p-sex", "sex");
    pub(super) const GENDER: (&str, &str) = ("p-gender-identity", "gender");
    pub(super) const BIRTHDAY: (&str, &str) = ("dt-bday", "birthday");
    pub(super) const ANNIVERSARY: (&str, &str) = ("dt-anniversary", "anniversary");
    pub(super) const ADDRESS: (&str, &str) = ("p-adr", "address");
    pub(super) const ORG: (&str, &str) = ("p-org", "org");
}

/// A person or organisation's contact details.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Card {
    name: Option<CardName>,
    email: Option<String>,
    logo: Option<String>,
    photo: Option<String>,
    url: Option<String>,
    uid: Option<String>,
    category: Option<String>,
    address: Option<Address>,
    tel: Option<String>,
    note: Option<String>,
    birthday: Option<NaiveDate>,
    key: Option<String>,
    org: Option<Organization>,
    title: Option<String>,
    role: Option<String>,
    impp: Option<String>,
    sex: Option<String>,
    gender: Option<String>,
    anniversary: Option<NaiveDate>,
}

/// Pulls one logical field out of the input bag.
///
/// The prefixed key wins whenever it is present, even if its value turns
/// out to be unusable; the bare key is then discarded unread.
fn take(values: &mut HashMap<String, Value>, (prefixed, bare): (&str, &str)) -> Option<Value> {
    match values.remove(prefixed) {
        Some(value) => {
            values.remove(bare);
            Some(value)
        }
        None => values.remove(bare),
    }
}

fn take_text(values: &mut HashMap<String, Value>, keys: (&str, &str)) -> Option<String> {
    take(values, keys).and_then(|value| value.to_text())
}

fn take_date(values: &mut HashMap<String, Value>, keys: (&str, &str)) -> Option<NaiveDate> {
    take(values, keys).and_then(|value| value.to_date())
}

impl Card {
    /// ## Summary
    /// Builds a card from `(key, value)` pairs.
    ///
    /// Each field answers to a microformat-prefixed key (`p-name`, `u-email`,
    /// `dt-bday`, ...) and a bare key (`name`, `email`, `birthday`, ...); the
    /// prefixed key takes precedence. `p-name` holding a [`Name`] and `p-org`
    /// holding a [`Card`] are stored structured; other values are coerced to
    /// text. Unrecognised keys are ignored.
    #[must_use]
    pub fn new<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut values: HashMap<String, Value> = values
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let name = take(&mut values, keys::NAME).and_then(|value| match value {
            Value::Name(name) => Some(CardName::Structured(name)),
            other => other.to_text().map(CardName::Formatted),
        });

        let org_name = take_text(&mut values, keys::ORG_NAME);
        let org = match take(&mut values, keys::ORG) {
            Some(Value::Card(card)) => Some(Organization::Card(card)),
            Some(other) => other.to_text().map(Organization::Name),
            None => None,
        }
        .or_else(|| org_name.map(Organization::Name));

        let address = match take(&mut values, keys::ADDRESS) {
            Some(Value::Address(address)) => Some(address),
            _ => None,
        };

        let card = Self {
            name,
            email: take_text(&mut values, keys::EMAIL),
            logo: take_text(&mut values, keys::LOGO),
            photo: take_text(&mut values, keys::PHOTO),
            url: take_text(&mut values, keys::URL),
            uid: take_text(&mut values, keys::UID),
            category: take_text(&mut values, keys::CATEGORY),
            address,
            tel: take_text(&mut values, keys::TEL),
            note: take_text(&mut values, keys::NOTE),
            birthday: take_date(&mut values, keys::BIRTHDAY),
            key: take_text(&mut values, keys::KEY),
            org,
            title: take_text(&mut values, keys::TITLE),
            role: take_text(&mut values, keys::ROLE),
            impp: take_text(&mut values, keys::IMPP),
            sex: take_text(&mut values, keys::SEX),
            gender: take_text(&mut values, keys::GENDER),
            anniversary: take_date(&mut values, keys::ANNIVERSARY),
        };

        for key in values.keys() {
            tracing::debug!(key = %key, "Ignoring unrecognised card field");
        }

        card
    }

    /// Either form of the name.
    #[must_use]
    pub const fn card_name(&self) -> Option<&CardName> {
        self.name.as_ref()
    }

    /// The formatted name, when no structured name was given.
    #[must_use]
    pub fn full_name(&self) -> Option<&str> {
        match &self.name {
            Some(CardName::Formatted(full)) => Some(full.as_str()),
            _ => None,
        }
    }

    /// The structured name, if one was given.
    #[must_use]
    pub fn name(&self) -> Option<&Name> {
        match &self.name {
            Some(CardName::Structured(name)) => Some(name),
            _ => None,
        }
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref()
    }

    #[must_use]
    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[must_use]
    pub const fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    #[must_use]
    pub fn tel(&self) -> Option<&str> {
        self.tel.as_deref()
    }

    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    #[must_use]
    pub const fn birthday(&self) -> Option<NaiveDate> {
        self.birthday
    }

    /// Public key or a URL pointing at one.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Either form of the organisation.
    #[must_use]
    pub const fn organization(&self) -> Option<&Organization> {
        self.org.as_ref()
    }

    /// The organisation's own card, if one was given.
    #[must_use]
    pub fn org(&self) -> Option<&Card> {
        match &self.org {
            Some(Organization::Card(card)) => Some(card.as_ref()),
            _ => None,
        }
    }

    /// The organisation name, when no organisation card was given.
    #[must_use]
    pub fn org_name(&self) -> Option<&str> {
        match &self.org {
            Some(Organization::Name(name)) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Job title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Instant-messaging URI.
    #[must_use]
    pub fn impp(&self) -> Option<&str> {
        self.impp.as_deref()
    }

    #[must_use]
    pub fn sex(&self) -> Option<&str> {
        self.sex.as_deref()
    }

    /// Gender identity.
    #[must_use]
    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    #[must_use]
    pub const fn anniversary(&self) -> Option<NaiveDate> {
        self.anniversary
    }
}

impl Location for Card {
    fn geo(&self) -> Option<&Geo> {
        self.address.as_ref().and_then(|address| address.geo())
    }
}
