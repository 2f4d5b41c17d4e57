//! CLI module for Spana.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Spana - Research Agents and Trend Lookup
///
/// A CLI for exercising research tools (web search, video search, Google
/// Trends) and inspecting the agent definitions that wire them together.
/// The name "Spana" comes from the Scandinavian slang word for "scout."
#[derive(Parser, Debug)]
#[command(name = "spana")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up the top related queries for a keyword on Google Trends
    Trends {
        /// The keyword or topic to look up
        keyword: String,

        /// Provider timeframe string (default: 'today 3-m', the last 3 months)
        #[arg(short, long)]
        timeframe: Option<String>,
    },

    /// Search the internet
    Search {
        /// Search query
        query: String,
    },

    /// Search YouTube for videos
    Videos {
        /// Search query
        query: String,

        /// Maximum number of videos
        #[arg(short, long, default_value = "5")]
        limit: u32,
    },

    /// List agent definitions
    Agents {
        /// Print full definitions as JSON
        #[arg(long)]
        json: bool,

        /// Company to interpolate into the research manager's goal (repeatable)
        #[arg(long = "company")]
        companies: Vec<String>,

        /// Position to interpolate into the research manager's goal (repeatable)
        #[arg(long = "position")]
        positions: Vec<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a default configuration file
    Init,

    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
