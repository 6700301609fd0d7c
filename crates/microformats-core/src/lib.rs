//! Shared building blocks for the microformats crates: errors, configuration,
//! logging setup and the microformat class names used in rendered markup.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
