//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use bazaar_core::AppResult;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => println!("{}", render_json(items)?),
    }
    Ok(())
}

/// Print a single item as JSON regardless of format
pub fn print_json<T: Serialize + ?Sized>(item: &T) -> AppResult<()> {
    println!("{}", render_json(item)?);
    Ok(())
}

fn render_json<T: Serialize + ?Sized>(item: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(item)?)
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}

/// Render a boolean as a check mark
pub fn mark(value: bool) -> &'static str {
    if value { "✓" } else { "✗" }
}
