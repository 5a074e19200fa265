//! Permission vocabulary CLI command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bazaar_auth::permission::PermissionGroup;
use bazaar_auth::rbac::PermissionEvaluator;
use bazaar_core::error::AppError;

use super::Context;
use crate::output;

/// Arguments for the permissions command
#[derive(Debug, Args)]
pub struct PermissionsArgs {
    /// Only list the group with this display name, e.g. `"Orders Management"`
    #[arg(long)]
    pub group: Option<String>,
}

/// Permission display row
#[derive(Debug, Serialize, Tabled)]
struct PermissionRow {
    /// Group name
    group: String,
    /// Permission key
    key: String,
    /// Resource half of the key
    resource: String,
    /// Action half of the key
    action: String,
    /// Granted to the current session
    granted: String,
}

/// Execute the permissions command
pub fn execute(args: &PermissionsArgs, ctx: &Context) -> Result<(), AppError> {
    let groups = select_groups(args.group.as_deref())?;
    let session = ctx.provider.resolve();
    let rows = permission_rows(groups, &session.evaluator());

    output::print_list(&rows, ctx.format)?;
    Ok(())
}

fn select_groups(name: Option<&str>) -> Result<Vec<&'static PermissionGroup>, AppError> {
    match name {
        None => Ok(PermissionGroup::all().iter().collect()),
        Some(name) => PermissionGroup::by_name(name).map(|g| vec![g]).ok_or_else(|| {
            let known: Vec<_> = PermissionGroup::all().iter().map(|g| g.name).collect();
            AppError::configuration(format!(
                "Unknown permission group '{}' (expected one of: {})",
                name,
                known.join(", ")
            ))
        }),
    }
}

fn permission_rows(
    groups: Vec<&'static PermissionGroup>,
    eval: &PermissionEvaluator<'_>,
) -> Vec<PermissionRow> {
    groups
        .into_iter()
        .flat_map(|group| {
            group.permissions.iter().map(move |p| PermissionRow {
                group: group.name.to_string(),
                key: p.to_string(),
                resource: p.resource().to_string(),
                action: p.action().to_string(),
                granted: output::mark(eval.has_permission(*p)).to_string(),
            })
        })
        .collect()
}
