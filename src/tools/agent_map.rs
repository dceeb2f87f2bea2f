//! generate_agent_map tool - render an agent blueprint as an infographic image
//!
//! One `generateContent` call per invocation. The first inline-data part of
//! the first candidate is saved as an artifact; every other outcome is
//! returned as a [`GenerationFailure`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::context::ToolContext;
use super::result::{GenerationFailure, ImageOutcome};
use crate::artifact::Artifact;
use crate::genai::{
    ContentGenerator, GenerateContentRequest, GenerateContentResponse, GenerationConfig, HarmBlockThreshold,
    HarmCategory, SafetySetting,
};

/// Default image model
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";

/// Artifact name the map is saved under
pub const AGENT_MAP_FILENAME: &str = "agent_map.png";

/// Detail reported on success
pub const AGENT_MAP_DETAIL: &str = "Agent map generated";

const FALLBACK_MIME_TYPE: &str = "image/png";

/// Reason reported when the endpoint gives no candidate or no finish reason
const UNKNOWN_REASON: &str = "Unknown";

/// Image generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    pub model: String,
    pub aspect_ratio: String,
    pub artifact_name: String,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_IMAGE_MODEL.to_string(),
            aspect_ratio: "1:1".to_string(),
            artifact_name: AGENT_MAP_FILENAME.to_string(),
        }
    }
}

/// Generates agent maps through an injected content generator
pub struct AgentMapGenerator {
    generator: Arc<dyn ContentGenerator>,
    settings: ImageSettings,
}

impl AgentMapGenerator {
    pub fn new(generator: Arc<dyn ContentGenerator>, settings: ImageSettings) -> Self {
        Self { generator, settings }
    }

    pub fn settings(&self) -> &ImageSettings {
        &self.settings
    }

    /// Wrap the blueprint in the fixed infographic style template
    pub fn build_prompt(blueprint: &str) -> String {
        format!(
            r#"Create a clean, simple infographic diagram in a friendly chibi cartoon style.

The image explains the design of an AI agent using labeled sections and arrows.

Agent description:
{blueprint}

Diagram layout:
- Center: a friendly AI agent labeled "ADK Agent"
- Left: inputs (user requests, documents, data)
- Right: outputs (responses, summaries, decisions)
- Bottom: tools the agent uses
- Clear arrows showing the flow between them
- Flat design with light pastel colors on a white background
- Educational and presentation-ready
"#
        )
    }

    /// One square image, sexually explicit content blocked from low probability up
    pub fn build_request(&self, blueprint: &str) -> GenerateContentRequest {
        GenerateContentRequest::from_prompt(Self::build_prompt(blueprint))
            .with_generation_config(GenerationConfig::single_image(&self.settings.aspect_ratio))
            .with_safety_setting(SafetySetting::new(
                HarmCategory::SexuallyExplicit,
                HarmBlockThreshold::BlockLowAndAbove,
            ))
    }

    /// Generate the map and save it in the context's artifact scope
    pub async fn generate(&self, blueprint: &str, ctx: &ToolContext) -> ImageOutcome {
        log::info!("Generating agent map with {}", self.settings.model);

        let request = self.build_request(blueprint);
        let response = match self.generator.generate_content(&self.settings.model, request).await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Agent map generation failed: {}", e);
                return ImageOutcome::Failed(GenerationFailure::Fault(e.to_string()));
            }
        };

        let artifact = match extract_image(&response) {
            Ok(artifact) => artifact,
            Err(failure) => {
                log::warn!("Agent map not produced: {}", failure);
                return ImageOutcome::Failed(failure);
            }
        };

        match ctx.save_artifact(&self.settings.artifact_name, &artifact).await {
            Ok(version) => {
                log::info!(
                    "Agent map saved as {} v{} ({} bytes)",
                    self.settings.artifact_name,
                    version,
                    artifact.len()
                );
                ImageOutcome::Saved {
                    filename: self.settings.artifact_name.clone(),
                    detail: AGENT_MAP_DETAIL.to_string(),
                    version,
                }
            }
            Err(e) => {
                log::warn!("Failed to save agent map: {}", e);
                ImageOutcome::Failed(GenerationFailure::Fault(e.to_string()))
            }
        }
    }
}

/// Pull the first inline image out of a response
fn extract_image(response: &GenerateContentResponse) -> Result<Artifact, GenerationFailure> {
    let candidate = response.first_candidate().ok_or_else(|| GenerationFailure::Stopped {
        reason: UNKNOWN_REASON.to_string(),
    })?;

    if !candidate.stopped_normally() {
        let reason = candidate
            .finish_reason
            .as_ref()
            .map_or_else(|| UNKNOWN_REASON.to_string(), |r| r.to_string());
        return Err(GenerationFailure::Stopped { reason });
    }

    let blob = candidate.first_inline_data().ok_or(GenerationFailure::NoImagePart)?;
    let mime_type = if blob.mime_type.is_empty() {
        FALLBACK_MIME_TYPE
    } else {
        blob.mime_type.as_str()
    };

    Ok(Artifact::new(blob.data.clone(), mime_type))
}
