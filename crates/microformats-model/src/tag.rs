//! Linked tags.

/// A named tag pointing at a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    url: String,
    name: String,
}

impl Tag {
    /// Creates a tag; both parts are trimmed.
    #[must_use]
    pub fn new(url: &str, name: &str) -> Self {
        Self {
            url: url.trim().to_string(),
            name: name.trim().to_string(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
