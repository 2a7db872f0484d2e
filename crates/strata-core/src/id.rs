//! Identifiers handed out by a model.
//!
//! Every element and relationship gets a numeric id from its model's
//! counter. The id is opaque to callers and prints as a plain string,
//! which is what documents use to reference elements.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_MODEL: AtomicU64 = AtomicU64::new(1);

/// Stamp identifying a single model instance.
///
/// Handles carry the stamp of the model that minted them, so a model can
/// reject handles that belong to another model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(u64);

impl ModelId {
    /// Returns a stamp not used by any other model in this process.
    pub fn fresh() -> Self {
        Self(NEXT_MODEL.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to an element registered in a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId {
    model: ModelId,
    value: u64,
}

impl ElementId {
    pub fn new(model: ModelId, value: u64) -> Self {
        Self { model, value }
    }

    /// The model this handle belongs to.
    pub fn model(&self) -> ModelId {
        self.model
    }

    /// The raw value of the id.
    pub fn value(&self) -> u64 {
        self.value
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Handle to a relationship registered in a model.
///
/// Relationships draw from the same counter as elements, so an element
/// and a relationship never share an id within one model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelationshipId {
    model: ModelId,
    value: u64,
}

impl RelationshipId {
    pub fn new(model: ModelId, value: u64) -> Self {
        Self { model, value }
    }

    pub fn model(&self) -> ModelId {
        self.model
    }

    pub fn value(&self) -> u64 {
        self.value
    }
}

impl fmt::Display for RelationshipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
