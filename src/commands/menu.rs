//! Menu CLI command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bazaar_core::error::AppError;

use super::Context;
use crate::output::{self, OutputFormat};

/// Arguments for the menu command
#[derive(Debug, Args)]
pub struct MenuArgs {
    /// Show the unfiltered definition instead
    #[arg(long)]
    pub full: bool,
}

/// Flattened menu row
#[derive(Debug, Serialize, Tabled)]
struct MenuRow {
    /// Category title
    category: String,
    /// Item label, indented for children
    label: String,
    /// Route path
    path: String,
    /// Required permission
    permission: String,
}

/// Execute the menu command
pub fn execute(args: &MenuArgs, ctx: &Context) -> Result<(), AppError> {
    ctx.provider.resolve();
    let menu = if args.full {
        ctx.menu.definition().clone()
    } else {
        ctx.menu
            .visible(&ctx.provider)
            .map(|m| (*m).clone())
            .ok_or_else(|| AppError::session("Session is still loading"))?
    };

    if ctx.format == OutputFormat::Json {
        output::print_json(&menu)?;
        return Ok(());
    }

    let mut rows = Vec::new();
    for category in &menu.categories {
        for item in &category.items {
            let children = item.children.iter().map(|child| (child, true));
            let entries = std::iter::once((item, false)).chain(children);
            for (entry, nested) in entries {
                rows.push(MenuRow {
                    category: category.title.clone(),
                    label: if nested {
                        format!("  └ {}", entry.label)
                    } else {
                        entry.label.clone()
                    },
                    path: entry.path.clone().unwrap_or_default(),
                    permission: entry
                        .required_permission
                        .map(|p| p.to_string())
                        .unwrap_or_default(),
                });
            }
        }
    }

    output::print_list(&rows, ctx.format)?;
    Ok(())
}
