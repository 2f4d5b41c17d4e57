//! Content generation agent definitions.

use super::AgentSpec;
use crate::tools::names;

/// Identifies current trending topics within an industry.
pub fn trend_analyzer(model: &str) -> AgentSpec {
    AgentSpec::new(
        "Trend Analyzer",
        "Identify current trending topics within the specified industry",
        "You are an expert at analyzing market trends and identifying hot topics.",
        model,
    )
    .with_tool(names::GOOGLE_TRENDS)
    .with_tool(names::SEARCH_INTERNET)
}

/// Gathers relevant information on an identified topic.
pub fn research_coordinator(model: &str) -> AgentSpec {
    AgentSpec::new(
        "Research Coordinator",
        "Gather relevant information from selected sources on the identified topic",
        "You excel at finding and compiling information from various online sources.",
        model,
    )
    .with_tool(names::SEARCH_INTERNET)
    .with_tool(names::YOUTUBE_VIDEO_SEARCH)
}

/// Summarizes and extracts key information from aggregated content.
pub fn content_analyzer(model: &str) -> AgentSpec {
    AgentSpec::new(
        "Content Analyzer",
        "Summarize and extract key information from the aggregated content",
        "You are skilled at distilling complex information into clear, concise summaries.",
        model,
    )
}

/// Generates original content from research and user inputs. The model
/// itself is the primary tool.
pub fn content_creator(model: &str) -> AgentSpec {
    AgentSpec::new(
        "Content Creator",
        "Generate original content based on the research and user inputs",
        "You are a talented writer capable of creating engaging content in various formats.",
        model,
    )
}

/// Verifies generated content and provides source attribution.
pub fn fact_checker(model: &str) -> AgentSpec {
    AgentSpec::new(
        "Fact Checker",
        "Ensure accuracy of the generated content and provide source attribution",
        "You have a keen eye for detail and are committed to maintaining high \
         standards of accuracy.",
        model,
    )
    .with_tool(names::SEARCH_INTERNET)
}

/// The full content generation crew, in pipeline order.
pub fn content_generation_agents(model: &str) -> Vec<AgentSpec> {
    vec![
        trend_analyzer(model),
        research_coordinator(model),
        content_analyzer(model),
        content_creator(model),
        fact_checker(model),
    ]
}
