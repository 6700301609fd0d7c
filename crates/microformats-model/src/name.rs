//! Structured personal names.

use std::fmt;

use crate::value::trim_opt;

/// A structured personal name.
///
/// Given, middle and surname are always present (possibly empty); the
/// honorifics, nickname and maiden name are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Name {
    prefix: Option<String>,
    given: String,
    middle: String,
    surname: String,
    suffix: Option<String>,
    nick: Option<String>,
    maiden: Option<String>,
}

impl Name {
    /// Creates a name with no honorifics, nickname or maiden name.
    #[must_use]
    pub fn new(given: &str, middle: &str, surname: &str) -> Self {
        Self::builder(given, middle, surname).build()
    }

    /// Starts a name from its required parts.
    pub fn builder(given: &str, middle: &str, surname: &str) -> NameBuilder {
        NameBuilder {
            given: given.to_string(),
            middle: middle.to_string(),
            surname: surname.to_string(),
            ..NameBuilder::default()
        }
    }

    /// Honorific prefix (e.g., "Mr.", "Dr.").
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[must_use]
    pub fn given(&self) -> &str {
        &self.given
    }

    #[must_use]
    pub fn middle(&self) -> &str {
        &self.middle
    }

    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Honorific suffix (e.g., "Jr.", "Esq.").
    #[must_use]
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    #[must_use]
    pub fn nick(&self) -> Option<&str> {
        self.nick.as_deref()
    }

    #[must_use]
    pub fn maiden(&self) -> Option<&str> {
        self.maiden.as_deref()
    }
}

/// Space-joined display form: prefix, quoted nickname, given, middle,
/// surname, suffix, then `(née maiden)`. Empty parts are skipped.
impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nick = self.nick.as_ref().map(|nick| format!("\"{nick}\""));
        let maiden = self.maiden.as_ref().map(|maiden| format!("(née {maiden})"));

        let parts = [
            self.prefix.as_deref(),
            nick.as_deref(),
            Some(self.given.as_str()),
            Some(self.middle.as_str()),
            Some(self.surname.as_str()),
            self.suffix.as_deref(),
            maiden.as_deref(),
        ];

        let mut first = true;
        for part in parts.into_iter().flatten().filter(|part| !part.is_empty()) {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(part)?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct NameBuilder {
    given: String,
    middle: String,
    surname: String,
    prefix: Option<String>,
    suffix: Option<String>,
    nick: Option<String>,
    maiden: Option<String>,
}

impl NameBuilder {
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn nick(mut self, nick: impl Into<String>) -> Self {
        self.nick = Some(nick.into());
        self
    }

    pub fn maiden(mut self, maiden: impl Into<String>) -> Self {
        self.maiden = Some(maiden.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Name {
        Name {
            prefix: trim_opt(self.prefix),
            given: self.given.trim().to_string(),
            middle: self.middle.trim().to_string(),
            surname: self.surname.trim().to_string(),
            suffix: trim_opt(self.suffix),
            nick: trim_opt(self.nick),
            maiden: trim_opt(self.maiden),
        }
    }
}
