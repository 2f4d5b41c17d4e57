//! CLI output formatting utilities.

use console::style;

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print a warning message.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    /// Print an error message.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    /// Print a header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a key-value pair.
    pub fn kv(key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print one related-query entry with its rank and score.
    pub fn trend_entry(rank: usize, query: &str, formatted_value: &str) {
        println!(
            "  {} {} ({})",
            style(format!("{}.", rank)).cyan(),
            style(query).bold(),
            style(formatted_value).dim()
        );
    }

    /// Print an agent definition summary line.
    pub fn agent_summary(role: &str, tools: &[String]) {
        let tool_list = if tools.is_empty() {
            "no tools".to_string()
        } else {
            tools.join(", ")
        };
        println!(
            "  {} {} [{}]",
            style("*").cyan(),
            style(role).bold(),
            style(tool_list).dim()
        );
    }
}
