//! Route guard CLI command.

use clap::Args;

use bazaar_auth::guard::{DenialOutcome, GuardDecision, RouteDeclaration};
use bazaar_core::error::AppError;

use super::Context;
use crate::output::{self, OutputFormat};

/// Arguments for the route command
#[derive(Debug, Args)]
pub struct RouteArgs {
    /// Dashboard path, e.g. `/orders/42`
    pub path: String,
}

/// Execute the route command
pub fn execute(args: &RouteArgs, ctx: &Context) -> Result<(), AppError> {
    // Paths outside the table carry no declaration of their own.
    let fallback = RouteDeclaration::new(args.path.as_str());
    let route = ctx.routes.lookup(&args.path).unwrap_or(&fallback);

    ctx.provider.resolve();
    let decision = ctx.guard.check(route, &ctx.provider);

    match ctx.format {
        OutputFormat::Json => output::print_json(&serde_json::json!({
            "path": args.path,
            "route": route,
            "decision": decision,
        }))?,
        OutputFormat::Table => {
            output::print_kv("Route", &route.path);
            output::print_kv(
                "Requires",
                route
                    .required_permission
                    .map(|p| p.as_str())
                    .unwrap_or("-"),
            );
            output::print_kv("Super admin only", output::mark(route.require_super_admin));
            match &decision {
                GuardDecision::Loading => output::print_kv("Decision", "loading"),
                GuardDecision::Granted => output::print_kv("Decision", "granted"),
                GuardDecision::Denied(denial) => {
                    output::print_kv("Decision", &format!("denied ({:?})", denial.reason));
                    match &denial.outcome {
                        DenialOutcome::Redirect(to) => output::print_kv("Redirect to", to),
                        DenialOutcome::AccessDenied => output::print_kv("Shows", "access denied"),
                    }
                }
            }
        }
    }

    Ok(())
}
