//! Strata Core - value types for the C4 model graph
//!
//! This crate holds the small, copyable building blocks that the model
//! graph in `strata-graph` is made of: identifiers, element kinds, tags,
//! canonical names and the error type raised on precondition violations.
//!
//! # Example
//!
//! ```
//! use strata_core::{CanonicalName, ElementKind};
//!
//! let name = CanonicalName::new(ElementKind::Container, ["Internet Banking", "Web App"]);
//! assert_eq!(name.as_str(), "Container://Internet Banking/Web App");
//! ```

pub mod canonical;
pub mod error;
pub mod id;
pub mod kind;
pub mod tags;

pub use canonical::{format_segment, CanonicalName, CANONICAL_NAME_SEPARATOR};
pub use error::{ModelError, Result};
pub use id::{ElementId, ModelId, RelationshipId};
pub use kind::{ElementKind, InteractionStyle, Location};
pub use tags::{IntoTag, TagSet, Taggable};
