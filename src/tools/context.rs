//! Tool execution context - scoped to a single session

use std::sync::Arc;

use crate::artifact::{Artifact, ArtifactScope, ArtifactStore};
use crate::error::Result;

/// Execution context handed to every tool call
#[derive(Clone)]
pub struct ToolContext {
    /// Where artifacts produced by this call are saved
    pub scope: ArtifactScope,

    artifacts: Arc<dyn ArtifactStore>,
}

impl ToolContext {
    pub fn new(scope: ArtifactScope, artifacts: Arc<dyn ArtifactStore>) -> Self {
        Self { scope, artifacts }
    }

    /// Save an artifact in this context's scope, returning its version
    pub async fn save_artifact(&self, name: &str, artifact: &Artifact) -> Result<u32> {
        self.artifacts.save(&self.scope, name, artifact).await
    }
}

impl std::fmt::Debug for ToolContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolContext").field("scope", &self.scope).finish()
    }
}
