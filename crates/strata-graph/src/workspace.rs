//! The workspace: a named model.

use crate::document::{DocumentError, WorkspaceDocument};
use crate::model::Model;

/// Root handle for a model and its metadata.
#[derive(Debug, Default)]
pub struct Workspace {
    name: String,
    description: String,
    model: Model,
}

impl Workspace {
    /// Creates a workspace with an empty model.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            model: Model::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    /// Exports the workspace into its document form.
    pub fn to_document(&self) -> WorkspaceDocument {
        WorkspaceDocument {
            name: self.name.clone(),
            description: self.description.clone(),
            model: self.model.to_document(),
        }
    }

    /// Rebuilds a workspace from a document.
    pub fn from_document(document: WorkspaceDocument) -> Result<Self, DocumentError> {
        Ok(Self {
            name: document.name,
            description: document.description,
            model: Model::from_document(document.model)?,
        })
    }

    /// Serializes the workspace as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }

    /// Parses a workspace from JSON.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let document: WorkspaceDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }
}
