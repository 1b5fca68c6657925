//! Mail type tags.

use std::fmt;

/// The type tag of a mail package — an opaque string label ("A", "fragile",
/// …).  Conveyors declare which tags they produce and storages which they
/// accept; routing keeps one pheromone field per distinct tag.
#[derive(Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MailType(String);

impl MailType {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MailType {
    fn from(tag: &str) -> Self {
        Self(tag.to_owned())
    }
}

impl From<String> for MailType {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl fmt::Display for MailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
