//! Declarative agent definitions.
//!
//! Each definition binds a role, goal, and backstory to a set of tool
//! identifiers and an LLM model name. Execution, delegation, and inter-agent
//! communication belong to the hosting orchestration framework; this module
//! only produces the definitions that framework consumes.

mod content;
mod research;

pub use content::{
    content_analyzer, content_creator, content_generation_agents, fact_checker,
    research_coordinator, trend_analyzer,
};
pub use research::{company_research_agent, company_research_agents, research_manager};

use serde::{Deserialize, Serialize};

/// A role-bound agent specification for the hosting framework.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSpec {
    /// Short role title, e.g. "Trend Analyzer".
    pub role: String,
    /// What the agent is expected to accomplish.
    pub goal: String,
    /// Persona context handed to the model.
    pub backstory: String,
    /// Identifiers of tools from the registry this agent may invoke.
    pub tools: Vec<String>,
    /// LLM model name bound as the agent's backend.
    pub model: String,
    /// Whether the framework should log the agent's steps.
    pub verbose: bool,
    /// Whether the agent may delegate work to other agents.
    pub allow_delegation: bool,
}

impl AgentSpec {
    /// Create a specification with no tools, verbose logging on, and
    /// delegation off.
    pub fn new(role: &str, goal: &str, backstory: &str, model: &str) -> Self {
        Self {
            role: role.to_string(),
            goal: goal.to_string(),
            backstory: backstory.to_string(),
            tools: Vec::new(),
            model: model.to_string(),
            verbose: true,
            allow_delegation: false,
        }
    }

    /// Grant the agent a tool by registry identifier.
    pub fn with_tool(mut self, tool: &str) -> Self {
        self.tools.push(tool.to_string());
        self
    }

    /// Allow the agent to delegate work.
    pub fn with_delegation(mut self) -> Self {
        self.allow_delegation = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::names;

    #[test]
    fn test_spec_builder_defaults() {
        let spec = AgentSpec::new("Tester", "Test things", "You test.", "gpt-4-turbo-preview");
        assert!(spec.tools.is_empty());
        assert!(spec.verbose);
        assert!(!spec.allow_delegation);
    }

    #[test]
    fn test_spec_serializes_for_framework_handoff() {
        let spec = AgentSpec::new("Tester", "Test things", "You test.", "gpt-4-turbo-preview")
            .with_tool(names::GOOGLE_TRENDS)
            .with_delegation();

        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["role"], "Tester");
        assert_eq!(json["tools"][0], "google_trends");
        assert_eq!(json["allow_delegation"], true);
    }
}
