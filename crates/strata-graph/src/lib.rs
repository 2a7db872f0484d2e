//! Strata Graph - C4 model management
//!
//! This crate manages the graph of architecture elements and the
//! relationships between them. It enforces the naming rules that give
//! every element a unique canonical name, and answers the queries views
//! need: containment, relationships between two elements, and reach.
//!
//! # Architecture
//!
//! The model uses petgraph internally with additional indexes for:
//! - Id-based lookups (elements and relationships)
//! - Canonical-name lookups (get-or-create factories)
//!
//! # Example
//!
//! ```
//! use strata_core::Location;
//! use strata_graph::Model;
//!
//! let mut model = Model::new();
//! let user = model.add_person(Location::External, "User", "A user").unwrap();
//! let system = model.add_software_system(Location::Internal, "Shop", "").unwrap();
//! model.uses(user, system, "Buys things").unwrap();
//!
//! let shop = model.software_system_with_name("Shop").unwrap();
//! assert_eq!(shop.canonical_name().as_str(), "SoftwareSystem://Shop");
//! assert!(model.element(user).unwrap().has_efferent_relationship_with(system));
//! ```

mod document;
mod element;
mod import;
mod model;
mod name_index;
mod reach;
mod relationship;
mod store;
mod workspace;

pub use document::{
    DocumentError, ElementDocument, ModelDocument, RelationshipDocument, WorkspaceDocument,
};
pub use element::{Element, ElementRef};
pub use import::ModelImporter;
pub use model::{Ensured, Model, ModelStats};
pub use reach::{ReachAnalysis, ReachDirection, ReachedElement};
pub use relationship::{Interaction, Relationship};
pub use store::{StoreError, WorkspaceStore};
pub use workspace::Workspace;
