//! Videos command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::tools::YoutubeSearchTool;
use anyhow::Result;

/// Run the videos command.
pub async fn run_videos(query: &str, limit: u32, settings: Settings) -> Result<()> {
    let tool = YoutubeSearchTool::new(settings.youtube.resolve_api_key());

    match tool.search(query, limit).await {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            Output::error(&format!("Video search failed: {}", e));
            return Err(anyhow::anyhow!("{}", e));
        }
    }

    Ok(())
}
