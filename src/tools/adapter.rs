//! Tool adapter - decodes host calls and dispatches them

use std::sync::Arc;

use futures::future::join_all;

use super::agent_map::{AgentMapGenerator, ImageSettings};
use super::context::ToolContext;
use super::cost::{CostEstimate, estimate_agent_cost};
use super::industry::{IndustryContext, lookup_industry_context};
use super::request::ToolRequest;
use super::result::{ImageOutcome, ToolResult};
use super::{ToolCall, ToolDefinition};
use crate::genai::ContentGenerator;

/// Bridges host tool calls to the tool operations.
///
/// Holds no per-call state; concurrent calls share only the injected generator.
pub struct ToolAdapter {
    agent_map: AgentMapGenerator,
}

impl ToolAdapter {
    pub fn new(generator: Arc<dyn ContentGenerator>, settings: ImageSettings) -> Self {
        Self {
            agent_map: AgentMapGenerator::new(generator, settings),
        }
    }

    /// Definitions for every tool
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        ToolRequest::definitions()
    }

    /// Definitions for the named tools, skipping names the adapter doesn't know
    pub fn definitions_for(&self, tool_names: &[&str]) -> Vec<ToolDefinition> {
        tool_names.iter().filter_map(|name| ToolRequest::definition(name)).collect()
    }

    pub fn has_tool(&self, name: &str) -> bool {
        ToolRequest::NAMES.iter().any(|n| *n == name)
    }

    pub fn image_settings(&self) -> &ImageSettings {
        self.agent_map.settings()
    }

    pub async fn lookup_industry_context(&self, industry: &str) -> IndustryContext {
        log::debug!("Looking up industry context for '{}'", industry);
        lookup_industry_context(industry)
    }

    pub async fn estimate_agent_cost(&self, agent_description: &str) -> CostEstimate {
        log::debug!("Estimating agent cost");
        estimate_agent_cost(agent_description)
    }

    pub async fn generate_agent_map(&self, agent_blueprint: &str, ctx: &ToolContext) -> ImageOutcome {
        self.agent_map.generate(agent_blueprint, ctx).await
    }

    /// Run a decoded request
    pub async fn dispatch(&self, request: ToolRequest, ctx: &ToolContext) -> ToolResult {
        match request {
            ToolRequest::IndustryLookup { industry } => ToolResult::Industry(self.lookup_industry_context(&industry).await),
            ToolRequest::CostEstimate { description } => ToolResult::Cost(self.estimate_agent_cost(&description).await),
            ToolRequest::ImageGeneration { prompt } => ToolResult::Image(self.generate_agent_map(&prompt, ctx).await),
        }
    }

    /// Execute a host tool call. Never fails; undecodable calls are rejected as data.
    pub async fn invoke(&self, call: &ToolCall, ctx: &ToolContext) -> ToolResult {
        match ToolRequest::from_call(call) {
            Ok(request) => {
                log::info!("Invoking tool {} ({})", request.tool_name(), call.id);
                self.dispatch(request, ctx).await
            }
            Err(e) => {
                log::warn!("Rejected tool call {}: {}", call.id, e);
                ToolResult::Rejected(e.to_string())
            }
        }
    }

    /// Execute several calls concurrently, returning (call id, result) in call order
    pub async fn invoke_all(&self, calls: &[ToolCall], ctx: &ToolContext) -> Vec<(String, ToolResult)> {
        let results = join_all(calls.iter().map(|call| self.invoke(call, ctx))).await;
        calls.iter().map(|c| c.id.clone()).zip(results).collect()
    }
}
