//! Spana - Research Agents and Trend Lookup
//!
//! A library and CLI for wiring up research agents with external lookup tools.
//!
//! The name "Spana" comes from the Scandinavian slang word for "scout" or
//! "keep watch."
//!
//! # Overview
//!
//! Spana provides:
//! - A Google Trends "related queries" lookup with a typed result
//! - Web search (Serper) and YouTube video search tools
//! - A tool registry that exposes each tool with a name, description, and
//!   JSON input schema for LLM tool calling
//! - Declarative agent definitions (role, goal, backstory, tools, model)
//!   for handing to a hosting orchestration framework
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `trends` - Google Trends client and related-queries lookup
//! - `tools` - Tool trait, registry, and tool implementations
//! - `agents` - Declarative agent definitions
//! - `llm` - OpenAI client construction
//! - `cli` - Command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use spana::trends::{TrendQuery, TrendsClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = TrendsClient::new();
//!     let result = client
//!         .related_queries(&TrendQuery::new("electric vehicles"))
//!         .await?;
//!     println!("{:?}", result);
//!
//!     Ok(())
//! }
//! ```

pub mod agents;
pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod tools;
pub mod trends;

pub use error::{Result, SpanaError};
