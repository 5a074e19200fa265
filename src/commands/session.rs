//! Session management CLI commands.

use clap::{Args, Subcommand};

use bazaar_auth::permission::{Permission, PermissionSet, WILDCARD};
use bazaar_auth::session::SessionRecord;
use bazaar_core::error::AppError;

use super::Context;
use crate::output::{self, OutputFormat};

/// Arguments for session commands
#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Session subcommand
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Session subcommands
#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// Show the persisted session
    Show,
    /// Write a session record, as the login flow does
    Login {
        /// Admin display name
        #[arg(long, default_value = "")]
        name: String,
        /// Admin email
        #[arg(long, default_value = "")]
        email: String,
        /// Role identifier
        #[arg(long)]
        role: String,
        /// Role display name
        #[arg(long, default_value = "")]
        role_name: String,
        /// Granted permission key; repeat for several, `*` for all
        #[arg(short, long = "permission")]
        permissions: Vec<String>,
        /// Mark the admin as super admin
        #[arg(long)]
        super_admin: bool,
    },
    /// Erase the persisted session
    Clear {
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
}

/// Execute session commands
pub fn execute(args: &SessionArgs, ctx: &Context) -> Result<(), AppError> {
    match &args.command {
        SessionCommand::Show => {
            let session = ctx.provider.resolve();
            match ctx.format {
                OutputFormat::Json => output::print_json(&*session)?,
                OutputFormat::Table => {
                    if !session.is_authenticated {
                        output::print_warning("No authenticated session");
                        return Ok(());
                    }
                    let eval = session.evaluator();
                    output::print_kv("Name", &session.name);
                    output::print_kv("Email", &session.email);
                    output::print_kv(
                        "Role",
                        &format!("{} ({})", session.role_display_name, session.role),
                    );
                    output::print_kv("Super admin", output::mark(eval.is_super_admin()));
                    output::print_kv("Wildcard", output::mark(session.permissions.is_wildcard()));
                    output::print_kv("Permissions", &session.permissions.to_keys().join(", "));
                    if let Some(at) = session.logged_in_at {
                        let at = at.format("%Y-%m-%d %H:%M:%S UTC").to_string();
                        output::print_kv("Logged in", &at);
                    }
                }
            }
        }
        SessionCommand::Login {
            name,
            email,
            role,
            role_name,
            permissions,
            super_admin,
        } => {
            let dropped = permissions
                .iter()
                .filter(|k| k.as_str() != WILDCARD && k.parse::<Permission>().is_err())
                .count();
            if dropped > 0 {
                output::print_warning(&format!("{dropped} unknown permission key(s) ignored"));
            }

            let record = SessionRecord {
                name: name.clone(),
                email: email.clone(),
                role: role.clone(),
                role_name: role_name.clone(),
                permissions: PermissionSet::from_keys(permissions).to_keys(),
                is_super_admin: *super_admin,
                logged_in_at: None,
            };
            let session = ctx.provider.login(record)?;
            output::print_success(&format!(
                "Session written to '{}' for role '{}'",
                ctx.config.session.path, session.role
            ));
        }
        SessionCommand::Clear { force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt("Erase the persisted admin session?")
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            ctx.provider.logout()?;
            output::print_success("Session cleared");
        }
    }

    Ok(())
}
