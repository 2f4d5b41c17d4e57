//! Agents command implementation.

use crate::agents::{company_research_agents, content_generation_agents};
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the agents command.
pub fn run_agents(
    json: bool,
    companies: &[String],
    positions: &[String],
    settings: Settings,
) -> Result<()> {
    let model = &settings.llm.model;

    let mut specs = content_generation_agents(model);
    specs.extend(company_research_agents(companies, positions, model));

    if json {
        println!("{}", serde_json::to_string_pretty(&specs)?);
        return Ok(());
    }

    Output::header("Agent definitions");
    for spec in &specs {
        Output::agent_summary(&spec.role, &spec.tools);
    }
    Output::info(&format!("Model: {}", model));
    Output::info("Use --json for full definitions.");

    Ok(())
}
