//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use bazaar_core::error::AppError;

use super::Context;
use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration file
    Validate,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, ctx: &Context, config_path: &str) -> Result<(), AppError> {
    let config = &ctx.config;
    match &args.command {
        ConfigCommand::Show => match ctx.format {
            OutputFormat::Json => output::print_json(config)?,
            OutputFormat::Table => println!("{:#?}", config),
        },
        ConfigCommand::Validate => {
            config.validate()?;
            output::print_success(&format!("Configuration '{}' is valid", config_path));
            output::print_kv("Session record", &config.session.path);
            output::print_kv("Landing page", &config.guard.landing_path);
            output::print_kv("Login page", &config.guard.login_path);
            output::print_kv("On denied", &format!("{:?}", config.guard.on_denied));
            output::print_kv(
                "Menu",
                config
                    .menu
                    .definition_path
                    .as_deref()
                    .unwrap_or("built-in"),
            );
            output::print_kv("Routes", &ctx.routes.routes().len().to_string());
        }
    }

    Ok(())
}
