//! CLI command implementations.

mod agents;
mod config;
mod search;
mod trends;
mod videos;

pub use agents::run_agents;
pub use config::run_config;
pub use search::run_search;
pub use trends::run_trends;
pub use videos::run_videos;
