//! Immutable contact, résumé and event value objects.
//!
//! ## Overview
//!
//! Every type here is built once and only read afterwards. Constructors trim
//! text, keep absent fields as `None`, and accept loosely typed input through
//! [`Value`] where a field may hold more than one kind of thing.
//!
//! ## Usage
//!
//! ```rust
//! use microformats_model::{Card, Value};
//!
//! let card = Card::new([
//!     ("p-name", Value::from(" Jane Doe ")),
//!     ("u-email", Value::from("jane@example.com")),
//! ]);
//!
//! assert_eq!(card.full_name(), Some("Jane Doe"));
//! assert_eq!(card.email(), Some("jane@example.com"));
//! ```

pub mod address;
pub mod card;
pub mod date_range;
pub mod error;
pub mod event;
pub mod geo;
pub mod location;
pub mod name;
pub mod resume;
pub mod skill;
pub mod tag;
pub mod value;

// Re-export commonly used types
pub use address::{Address, AddressBuilder};
pub use card::{Card, CardName, Organization};
pub use date_range::DateRange;
pub use error::{ModelError, ModelResult};
pub use event::{Event, EventBuilder, Place};
pub use geo::Geo;
pub use location::Location;
pub use name::{Name, NameBuilder};
pub use resume::{Resume, ResumeBuilder};
pub use skill::{Skill, SkillHeading, SkillName};
pub use tag::Tag;
pub use value::{Value, filter_kind};
