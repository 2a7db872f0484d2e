//! The serialized form of a workspace.
//!
//! A document lists every element (parents before children, each tagged
//! with its kind) and every relationship, referencing elements by id.
//! Export reads the model through its public getters only, so the same
//! graph always produces the same document.

use crate::model::Model;
use serde::{Deserialize, Serialize};
use strata_core::{ElementKind, InteractionStyle, Location, ModelError, Taggable};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("invalid id '{0}'")]
    InvalidId(String),
    #[error("duplicate id '{0}'")]
    DuplicateId(String),
    #[error("{kind} '{element}' must be nested in a parent")]
    MissingParent { element: String, kind: ElementKind },
    #[error("{kind} '{element}' cannot have a parent")]
    UnexpectedParent { element: String, kind: ElementKind },
    #[error("element '{element}' references unknown parent '{parent}'")]
    UnknownParent { element: String, parent: String },
    #[error("relationship '{relationship}' references unknown element '{element}'")]
    UnknownElement {
        relationship: String,
        element: String,
    },
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A whole workspace: its name and its model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceDocument {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub model: ModelDocument,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDocument {
    #[serde(default)]
    pub elements: Vec<ElementDocument>,
    #[serde(default)]
    pub relationships: Vec<RelationshipDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDocument {
    pub id: String,
    pub kind: ElementKind,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technology: Option<String>,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Comma-joined, required tags first.
    #[serde(default)]
    pub tags: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipDocument {
    pub id: String,
    pub source_id: String,
    pub destination_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technology: Option<String>,
    #[serde(default)]
    pub interaction_style: InteractionStyle,
    #[serde(default)]
    pub tags: String,
}

impl Model {
    /// Reduces the model to its document form.
    pub fn to_document(&self) -> ModelDocument {
        let elements = self
            .elements()
            .map(|element| ElementDocument {
                id: element.id().to_string(),
                kind: element.kind(),
                name: element.name().to_string(),
                description: element.description().to_string(),
                technology: element.technology().map(str::to_string),
                location: element.location(),
                parent_id: element.parent_id().map(|id| id.to_string()),
                tags: element.tags(),
            })
            .collect();

        let relationships = self
            .relationships()
            .map(|relationship| RelationshipDocument {
                id: relationship.id().to_string(),
                source_id: relationship.source().to_string(),
                destination_id: relationship.destination().to_string(),
                description: relationship.description().to_string(),
                technology: relationship.technology().map(str::to_string),
                interaction_style: relationship.interaction_style(),
                tags: relationship.tags(),
            })
            .collect();

        ModelDocument {
            elements,
            relationships,
        }
    }
}
