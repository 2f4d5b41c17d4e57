//! Search command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::tools::SerperSearchTool;
use anyhow::Result;

/// Run the search command.
pub async fn run_search(query: &str, settings: Settings) -> Result<()> {
    let tool = SerperSearchTool::new(settings.search.resolve_api_key());

    match tool.search(query).await {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            Output::error(&format!("Search failed: {}", e));
            return Err(anyhow::anyhow!("{}", e));
        }
    }

    Ok(())
}
