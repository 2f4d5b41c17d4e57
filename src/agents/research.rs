//! Company research agent definitions.

use super::AgentSpec;
use crate::tools::names;

/// Manager agent that aggregates per-position research across companies
/// into a single list. May delegate to the research agent.
pub fn research_manager(companies: &[String], positions: &[String], model: &str) -> AgentSpec {
    let goal = format!(
        "Generate a list of JSON objects containing the urls for 3 recent blog articles and \
         the url and title for 3 recent YouTube interviews, for each position in each company.\n\n\
         Companies: {:?}\nPositions: {:?}\n\n\
         Important:\n\
         - The final list of JSON objects must include all companies and positions. Do not leave any out.\n\
         - If you can't find information for a specific position, fill in the information with the word \"MISSING\".\n\
         - Do not generate fake information. Only return the information you find. Nothing else!\n\
         - Do not stop researching until you find the requested information for each position in each company.",
        companies, positions
    );

    AgentSpec::new(
        "Company Research Manager",
        &goal,
        "As a Company Research Manager, you are responsible for aggregating all the \
         researched information into a list.",
        model,
    )
    .with_tool(names::SEARCH_INTERNET)
    .with_tool(names::YOUTUBE_VIDEO_SEARCH)
    .with_delegation()
}

/// Worker agent that researches one company's positions.
pub fn company_research_agent(model: &str) -> AgentSpec {
    AgentSpec::new(
        "Company Research Agent",
        "Look up the specific positions for a given company and find urls for 3 recent \
         blog articles and the url and title for 3 recent YouTube interviews for each \
         person in the specified positions. Return the collected information in a JSON \
         object, and nothing else.",
        "As a Company Research Agent, you are responsible for looking up specific \
         positions within a company and gathering relevant information. Once you've \
         found the information, stop searching. Make sure you find the name of the \
         person who holds each position, and never fabricate information.",
        model,
    )
    .with_tool(names::SEARCH_INTERNET)
    .with_tool(names::YOUTUBE_VIDEO_SEARCH)
}

/// The full company research crew, manager first.
pub fn company_research_agents(
    companies: &[String],
    positions: &[String],
    model: &str,
) -> Vec<AgentSpec> {
    vec![
        research_manager(companies, positions, model),
        company_research_agent(model),
    ]
}
