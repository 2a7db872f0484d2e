//! Canonical names.
//!
//! A canonical name is the identity of an element within a model: the
//! kind's root followed by the element's ancestry, outermost first, e.g.
//! `Component://Internet Banking/API/Accounts Controller`. Canonical names
//! are derived from the current names each time they are needed and are
//! never stored on the element itself.

use crate::kind::ElementKind;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Separator between the segments of a canonical name.
pub const CANONICAL_NAME_SEPARATOR: char = '/';

/// The ancestry-qualified identity of an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalName(String);

impl CanonicalName {
    /// Builds a canonical name from name segments, outermost first.
    pub fn new<'a, I>(kind: ElementKind, segments: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut name = format!("{}:{}", kind.canonical_prefix(), CANONICAL_NAME_SEPARATOR);
        for segment in segments {
            name.push(CANONICAL_NAME_SEPARATOR);
            name.push_str(&format_segment(segment));
        }
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CanonicalName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CanonicalName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Formats a single name for use as a canonical-name segment.
///
/// The separator is stripped so a name can never forge extra ancestry.
pub fn format_segment(name: &str) -> String {
    name.replace(CANONICAL_NAME_SEPARATOR, "")
}
