//! Loosely typed constructor input.
//!
//! Several constructors accept "whatever the caller has": a keyed bag for
//! [`Card`], mixed lists for [`Resume`] and [`SkillHeading`], a name that may
//! be a [`Tag`] or plain text for [`Skill`]. [`Value`] carries those inputs
//! and [`filter_kind`] narrows a list to the one kind a field expects.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

use crate::address::Address;
use crate::card::Card;
use crate::date_range::DateRange;
use crate::event::Event;
use crate::geo::Geo;
use crate::name::Name;
use crate::skill::{Skill, SkillHeading};
use crate::tag::Tag;

/// A constructor input of any supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Explicitly absent.
    Null,
    Text(String),
    Integer(i64),
    Float(f64),
    Date(NaiveDate),
    DateTime(DateTime<FixedOffset>),
    Name(Name),
    Tag(Tag),
    Geo(Geo),
    Address(Address),
    Card(Box<Card>),
    DateRange(DateRange),
    Event(Box<Event>),
    Skill(Skill),
    SkillHeading(SkillHeading),
}

impl Value {
    /// Names the variant, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Date(_) => "date",
            Self::DateTime(_) => "date-time",
            Self::Name(_) => "name",
            Self::Tag(_) => "tag",
            Self::Geo(_) => "geo",
            Self::Address(_) => "address",
            Self::Card(_) => "card",
            Self::DateRange(_) => "date-range",
            Self::Event(_) => "event",
            Self::Skill(_) => "skill",
            Self::SkillHeading(_) => "skill-heading",
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Coerces a scalar to trimmed text.
    ///
    /// `Null` and structured values yield `None`; numbers use their decimal
    /// form.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s.trim().to_string()),
            Self::Integer(i) => Some(i.to_string()),
            Self::Float(f) => Some(f.to_string()),
            _ => None,
        }
    }

    /// Reads a calendar date from a date, the date part of a date-time, or
    /// `YYYY-MM-DD` text.
    #[must_use]
    pub fn to_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            Self::DateTime(dt) => Some(dt.date_naive()),
            Self::Text(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                .inspect_err(|e| tracing::debug!(error = %e, value = %s, "Unparseable date text"))
                .ok(),
            _ => None,
        }
    }
}

/// Keeps the elements of `items` that are a `T`, in their original order.
///
/// Anything else is dropped without error; each drop is logged at debug level.
pub fn filter_kind<T, I>(items: I) -> Vec<T>
where
    T: TryFrom<Value, Error = Value>,
    I: IntoIterator,
    I::Item: Into<Value>,
{
    items
        .into_iter()
        .filter_map(|item| {
            T::try_from(item.into())
                .inspect_err(|rejected| {
                    tracing::debug!(
                        expected = std::any::type_name::<T>(),
                        found = rejected.kind(),
                        "Dropping element of unexpected kind"
                    );
                })
                .ok()
        })
        .collect()
}

/// Trims an optional string without turning `None` into `""`.
pub(crate) fn trim_opt(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string())
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::DateTime(dt)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt.fixed_offset())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Wires a value object into [`Value`] both ways.
macro_rules! value_kind {
    (boxed $variant:ident, $ty:ty) => {
        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Self::$variant(Box::new(v))
            }
        }

        impl TryFrom<Value> for $ty {
            type Error = Value;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                match value {
                    Value::$variant(v) => Ok(*v),
                    other => Err(other),
                }
            }
        }
    };
    ($variant:ident, $ty:ty) => {
        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Self::$variant(v)
            }
        }

        impl TryFrom<Value> for $ty {
            type Error = Value;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(other),
                }
            }
        }
    };
}

value_kind!(Name, Name);
value_kind!(Tag, Tag);
value_kind!(Geo, Geo);
value_kind!(Address, Address);
value_kind!(DateRange, DateRange);
value_kind!(Skill, Skill);
value_kind!(SkillHeading, SkillHeading);
value_kind!(boxed Card, Card);
value_kind!(boxed Event, Event);
