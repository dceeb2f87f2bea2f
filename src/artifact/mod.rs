//! Artifact storage - binary outputs persisted by name within a session scope
//!
//! Every save of a name appends a new version; nothing is overwritten or refused.

mod file;
mod memory;

pub use file::{ArtifactMetadata, FileArtifactStore};
pub use memory::InMemoryArtifactStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Binary payload plus its MIME type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl Artifact {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Where an artifact lands: app / user / session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactScope {
    pub app: String,
    pub user: String,
    pub session: String,
}

impl ArtifactScope {
    pub fn new(app: impl Into<String>, user: impl Into<String>, session: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            user: user.into(),
            session: session.into(),
        }
    }
}

/// Artifact persistence collaborator
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Persist an artifact under `name`, returning the version assigned (0-based)
    async fn save(&self, scope: &ArtifactScope, name: &str, artifact: &Artifact) -> Result<u32>;
}
