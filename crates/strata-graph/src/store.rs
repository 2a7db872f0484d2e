use crate::document::{DocumentError, WorkspaceDocument};
use crate::workspace::Workspace;
use sled::Db;
use std::path::Path;
use thiserror::Error;
use tracing::info;

const WORKSPACE_KEY: &str = "workspace";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sled(#[from] sled::Error),
    #[error("Serialization error: {0}")]
    Bincode(#[from] bincode::Error),
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),
}

pub struct WorkspaceStore {
    db: Db,
}

impl WorkspaceStore {
    /// Opens or creates a workspace store at the specified path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// Saves the whole workspace to the store.
    ///
    /// The workspace document is serialized using bincode and stored under a fixed key.
    pub fn save_workspace(&self, workspace: &Workspace) -> Result<(), StoreError> {
        let bytes = bincode::serialize(&workspace.to_document())?;
        self.db.insert(WORKSPACE_KEY, bytes)?;
        self.db.flush()?;
        info!(
            workspace = workspace.name(),
            elements = workspace.model().element_count(),
            "saved workspace"
        );
        Ok(())
    }

    /// Loads the workspace from the store.
    pub fn load_workspace(&self) -> Result<Option<Workspace>, StoreError> {
        if let Some(bytes) = self.db.get(WORKSPACE_KEY)? {
            let document: WorkspaceDocument = bincode::deserialize(&bytes)?;
            let workspace = Workspace::from_document(document)?;
            info!(workspace = workspace.name(), "loaded workspace");
            Ok(Some(workspace))
        } else {
            Ok(None)
        }
    }

    /// Clears the stored workspace.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.db.remove(WORKSPACE_KEY)?;
        self.db.flush()?;
        Ok(())
    }
}
