//! Permission evaluation CLI command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bazaar_auth::permission::{Permission, PermissionGroup};
use bazaar_core::error::AppError;

use super::Context;
use crate::output::{self, OutputFormat};

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Permission keys, e.g. `orders.view`
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Require every key rather than any
    #[arg(long)]
    pub all: bool,
}

/// Per-key result row
#[derive(Debug, Serialize, Tabled)]
struct KeyRow {
    /// Permission key
    key: String,
    /// Vocabulary group, blank for unknown keys
    group: String,
    /// Known to the vocabulary
    known: String,
    /// Granted to the session
    granted: String,
}

/// Overall verdict
#[derive(Debug, Serialize)]
struct Verdict<'a> {
    mode: &'a str,
    super_admin: bool,
    wildcard: bool,
    allowed: bool,
}

/// Execute the check command
pub fn execute(args: &CheckArgs, ctx: &Context) -> Result<(), AppError> {
    let session = ctx.provider.resolve();
    let eval = session.evaluator();

    let (mode, allowed) = match (args.keys.as_slice(), args.all) {
        ([key], _) => ("has_permission", eval.has_permission_key(key)),
        (keys, true) => ("has_all_permissions", eval.has_all_permission_keys(keys)),
        (keys, false) => ("has_any_permission", eval.has_any_permission_key(keys)),
    };

    let rows: Vec<KeyRow> = args
        .keys
        .iter()
        .map(|key| {
            let permission = key.parse::<Permission>().ok();
            KeyRow {
                key: key.clone(),
                group: permission
                    .and_then(PermissionGroup::of)
                    .map(|g| g.name.to_string())
                    .unwrap_or_default(),
                known: output::mark(permission.is_some()).to_string(),
                granted: output::mark(eval.has_permission_key(key)).to_string(),
            }
        })
        .collect();

    let verdict = Verdict {
        mode,
        super_admin: eval.is_super_admin(),
        wildcard: session.permissions.is_wildcard(),
        allowed,
    };

    match ctx.format {
        OutputFormat::Json => output::print_json(&serde_json::json!({
            "verdict": verdict,
            "keys": rows,
        }))?,
        OutputFormat::Table => {
            output::print_list(&rows, ctx.format)?;
            output::print_kv(mode, output::mark(allowed));
        }
    }

    if !allowed {
        return Err(AppError::authorization(format!(
            "{} denied for role '{}'",
            mode, session.role
        )));
    }
    Ok(())
}
