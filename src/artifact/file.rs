//! Filesystem artifact store
//!
//! Layout: `<root>/<app>/<user>/<session>/<name>/<version>` with a
//! `<version>.meta.json` sidecar next to each payload.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::{Artifact, ArtifactScope, ArtifactStore};
use crate::error::{GenieError, Result};

const META_SUFFIX: &str = ".meta.json";

/// Sidecar written next to every stored version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub name: String,
    pub version: u32,
    pub mime_type: String,
    pub size: usize,
    pub saved_at: DateTime<Utc>,
}

/// Stores artifacts under a root directory
#[derive(Debug)]
pub struct FileArtifactStore {
    root: PathBuf,
    // Serializes version allocation within this process
    write_lock: Mutex<()>,
}

impl FileArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding every version of `name` in `scope`
    pub fn artifact_dir(&self, scope: &ArtifactScope, name: &str) -> Result<PathBuf> {
        for component in [scope.app.as_str(), scope.user.as_str(), scope.session.as_str(), name] {
            validate_component(component)?;
        }
        Ok(self.root.join(&scope.app).join(&scope.user).join(&scope.session).join(name))
    }

    /// Read back a stored version's payload and metadata
    pub async fn load(&self, scope: &ArtifactScope, name: &str, version: u32) -> Result<(Artifact, ArtifactMetadata)> {
        let dir = self.artifact_dir(scope, name)?;
        let bytes = tokio::fs::read(dir.join(version.to_string()))
            .await
            .map_err(|e| GenieError::Artifact(format!("Failed to read {} v{}: {}", name, version, e)))?;
        let meta_text = tokio::fs::read_to_string(dir.join(format!("{}{}", version, META_SUFFIX)))
            .await
            .map_err(|e| GenieError::Artifact(format!("Failed to read metadata for {} v{}: {}", name, version, e)))?;
        let meta: ArtifactMetadata = serde_json::from_str(&meta_text)?;

        Ok((Artifact::new(bytes, meta.mime_type.clone()), meta))
    }

    /// Complete versions (payload plus metadata) on disk for `name`, ascending
    pub async fn list_versions(&self, scope: &ArtifactScope, name: &str) -> Result<Vec<u32>> {
        let dir = self.artifact_dir(scope, name)?;
        let mut versions: Vec<u32> = scan_entries(&dir)
            .await?
            .into_iter()
            .filter_map(|(version, is_meta)| is_meta.then_some(version))
            .collect();
        versions.sort_unstable();
        Ok(versions)
    }

    /// Next free slot; a payload left without metadata still claims its slot
    async fn next_version(&self, dir: &Path) -> Result<u32> {
        let highest = scan_entries(dir).await?.into_iter().map(|(version, _)| version).max();
        Ok(highest.map_or(0, |v| v + 1))
    }
}

/// Numbered entries in an artifact directory, flagged when they are metadata sidecars
async fn scan_entries(dir: &Path) -> Result<Vec<(u32, bool)>> {
    if !tokio::fs::try_exists(dir).await? {
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        let (stem, is_meta) = match file_name.strip_suffix(META_SUFFIX) {
            Some(stem) => (stem, true),
            None => (file_name, false),
        };
        if let Ok(version) = stem.parse::<u32>() {
            found.push((version, is_meta));
        }
    }
    Ok(found)
}

fn validate_component(component: &str) -> Result<()> {
    let invalid = component.is_empty()
        || component == "."
        || component == ".."
        || component.contains('/')
        || component.contains('\\');
    if invalid {
        return Err(GenieError::Artifact(format!("Invalid path component: '{}'", component)));
    }
    Ok(())
}

#[async_trait]
impl ArtifactStore for FileArtifactStore {
    async fn save(&self, scope: &ArtifactScope, name: &str, artifact: &Artifact) -> Result<u32> {
        let _guard = self.write_lock.lock().await;

        let dir = self.artifact_dir(scope, name)?;
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| GenieError::Artifact(format!("Failed to create {}: {}", dir.display(), e)))?;

        let version = self.next_version(&dir).await?;

        tokio::fs::write(dir.join(version.to_string()), &artifact.bytes)
            .await
            .map_err(|e| GenieError::Artifact(format!("Failed to write {} v{}: {}", name, version, e)))?;

        let meta = ArtifactMetadata {
            name: name.to_string(),
            version,
            mime_type: artifact.mime_type.clone(),
            size: artifact.len(),
            saved_at: Utc::now(),
        };
        tokio::fs::write(
            dir.join(format!("{}{}", version, META_SUFFIX)),
            serde_json::to_vec_pretty(&meta)?,
        )
        .await
        .map_err(|e| GenieError::Artifact(format!("Failed to write metadata for {} v{}: {}", name, version, e)))?;

        log::info!("Saved artifact {} v{} ({} bytes) to {}", name, version, artifact.len(), dir.display());
        Ok(version)
    }
}
