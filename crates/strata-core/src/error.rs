//! Error types for model construction.
//!
//! Only precondition violations are errors. Absent optional input is a
//! no-op and lookups that find nothing return `None`.

use crate::canonical::CanonicalName;
use crate::id::ElementId;
use crate::kind::ElementKind;
use thiserror::Error;

/// A request the model refuses because it would corrupt the graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("element {0} belongs to a different model")]
    ForeignElement(ElementId),

    #[error("element {0} is not registered in this model")]
    UnknownElement(ElementId),

    #[error("{kind} name must not be empty")]
    EmptyName { kind: ElementKind },

    #[error("a {kind} must be added to a {expected}, not a {found}")]
    InvalidParent {
        kind: ElementKind,
        expected: ElementKind,
        found: ElementKind,
    },

    #[error("'{verb}' cannot connect a {from} to a {to}")]
    InvalidRelationship {
        verb: &'static str,
        from: ElementKind,
        to: ElementKind,
    },

    #[error("an element named {0} already exists")]
    DuplicateName(CanonicalName),
}

pub type Result<T> = std::result::Result<T, ModelError>;
