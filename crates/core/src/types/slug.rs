use std::fmt;

use crate::error::CoreError;

/// A post slug as it appears in `/posts/{slug}` paths and API routes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn post_path(&self) -> String {
        format!("/posts/{}", self.0)
    }
}

impl TryFrom<&str> for Slug {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidSlug("empty slug".to_string()));
        }
        if !trimmed
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_')
        {
            return Err(CoreError::InvalidSlug(trimmed.to_string()));
        }
        Ok(Slug(trimmed.to_string()))
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
