//! Element kinds and the small enums attached to elements and relationships.
//!
//! The C4 model has a closed set of element kinds. Everything that differs
//! between them (required tags, canonical-name root, where they may be
//! placed) is data on [`ElementKind`] rather than behaviour spread across
//! types.

use crate::tags;
use serde::{Deserialize, Serialize};

/// The kind of an element in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    /// A human user of software systems.
    Person,

    /// The highest level of abstraction; delivers value to people.
    SoftwareSystem,

    /// Something that runs or stores data inside a software system.
    Container,

    /// A grouping of related functionality inside a container.
    Component,
}

impl ElementKind {
    /// Tags every element of this kind always carries, in order.
    pub fn required_tags(&self) -> &'static [&'static str] {
        match self {
            Self::Person => &[tags::ELEMENT, tags::PERSON],
            Self::SoftwareSystem => &[tags::ELEMENT, tags::SOFTWARE_SYSTEM],
            Self::Container => &[tags::ELEMENT, tags::CONTAINER],
            Self::Component => &[tags::ELEMENT, tags::COMPONENT],
        }
    }

    /// Root segment of canonical names for this kind.
    pub fn canonical_prefix(&self) -> &'static str {
        match self {
            Self::Person => "Person",
            Self::SoftwareSystem => "SoftwareSystem",
            Self::Container => "Container",
            Self::Component => "Component",
        }
    }

    /// The kind an element of this kind must be nested in, if any.
    pub fn parent_kind(&self) -> Option<ElementKind> {
        match self {
            Self::Person | Self::SoftwareSystem => None,
            Self::Container => Some(Self::SoftwareSystem),
            Self::Component => Some(Self::Container),
        }
    }

    /// Whether elements of this kind sit directly under the model.
    pub fn is_root(&self) -> bool {
        self.parent_kind().is_none()
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Person => "person",
            Self::SoftwareSystem => "software system",
            Self::Container => "container",
            Self::Component => "component",
        };
        write!(f, "{}", s)
    }
}

/// Whether an element sits inside or outside the scope of analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Location {
    Internal,
    External,
    #[default]
    Unspecified,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Internal => "internal",
            Self::External => "external",
            Self::Unspecified => "unspecified",
        };
        write!(f, "{}", s)
    }
}

/// How the source of a relationship interacts with its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InteractionStyle {
    #[default]
    Synchronous,
    Asynchronous,
}

impl InteractionStyle {
    /// Tags every relationship with this style always carries, in order.
    pub fn required_tags(&self) -> &'static [&'static str] {
        match self {
            Self::Synchronous => &[tags::RELATIONSHIP, tags::SYNCHRONOUS],
            Self::Asynchronous => &[tags::RELATIONSHIP, tags::ASYNCHRONOUS],
        }
    }
}

impl std::fmt::Display for InteractionStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Synchronous => write!(f, "synchronous"),
            Self::Asynchronous => write!(f, "asynchronous"),
        }
    }
}
