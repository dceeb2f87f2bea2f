//! In-memory artifact store

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{Artifact, ArtifactScope, ArtifactStore};
use crate::error::Result;

type Key = (ArtifactScope, String);

/// Keeps every saved version in memory for the life of the process
#[derive(Debug, Default)]
pub struct InMemoryArtifactStore {
    artifacts: Mutex<HashMap<Key, Vec<Artifact>>>,
    saves: Mutex<usize>,
}

impl InMemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest version of an artifact
    pub async fn load(&self, scope: &ArtifactScope, name: &str) -> Option<Artifact> {
        let artifacts = self.artifacts.lock().await;
        artifacts
            .get(&(scope.clone(), name.to_string()))
            .and_then(|versions| versions.last().cloned())
    }

    /// Number of versions stored for a name
    pub async fn versions(&self, scope: &ArtifactScope, name: &str) -> usize {
        let artifacts = self.artifacts.lock().await;
        artifacts.get(&(scope.clone(), name.to_string())).map_or(0, Vec::len)
    }

    /// Total saves across all scopes and names
    pub async fn save_count(&self) -> usize {
        *self.saves.lock().await
    }
}

#[async_trait]
impl ArtifactStore for InMemoryArtifactStore {
    async fn save(&self, scope: &ArtifactScope, name: &str, artifact: &Artifact) -> Result<u32> {
        let mut artifacts = self.artifacts.lock().await;
        let versions = artifacts.entry((scope.clone(), name.to_string())).or_default();
        versions.push(artifact.clone());
        *self.saves.lock().await += 1;
        Ok((versions.len() - 1) as u32)
    }
}
