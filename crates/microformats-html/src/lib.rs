//! Microformats2 HTML rendering for the value objects in
//! `microformats-model`.
//!
//! ## Usage
//!
//! ```rust
//! use microformats_html::{CardFormatter, Format};
//! use microformats_model::Card;
//!
//! let card = Card::new([("p-name", "Jane Doe"), ("u-email", "jane@example.com")]);
//! let html = CardFormatter::new().format(&card);
//!
//! assert!(html.starts_with(r#"<dl class="h-card">"#));
//! assert!(html.contains(r#"<span class="p-name">Jane Doe</span>"#));
//! ```
//!
//! ## Submodules
//!
//! - [`escape`] - HTML text escaping
//! - [`format`] - The [`Format`] trait formatters are injected through
//! - [`address`], [`card`], [`geo`], [`name`] - One formatter per value object

pub mod address;
pub mod card;
pub mod escape;
pub mod format;
pub mod geo;
pub mod name;

// Re-export commonly used types
pub use address::AddressFormatter;
pub use card::CardFormatter;
pub use escape::escape_html;
pub use format::Format;
pub use geo::GeoFormatter;
pub use name::NameFormatter;
