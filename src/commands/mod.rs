//! CLI command definitions and dispatch.

pub mod check;
pub mod config;
pub mod menu;
pub mod permissions;
pub mod route;
pub mod session;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use bazaar_auth::guard::{RouteGuard, RouteTable};
use bazaar_auth::menu::{MenuDefinition, MenuFilter};
use bazaar_auth::session::{FileSessionStore, SessionProvider};
use bazaar_core::config::AppConfig;
use bazaar_core::error::AppError;

use crate::output::OutputFormat;

/// Bazaar: admin dashboard authorization tools
#[derive(Debug, Parser)]
#[command(name = "bazaar-admin", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Persisted admin session management
    Session(session::SessionArgs),
    /// Evaluate permission keys against the current session
    Check(check::CheckArgs),
    /// Run the route guard for a dashboard path
    Route(route::RouteArgs),
    /// Show the menu visible to the current session
    Menu(menu::MenuArgs),
    /// List the permission vocabulary by group
    Permissions(permissions::PermissionsArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        let ctx = Context::build(config, self.format)?;
        match &self.command {
            Commands::Session(args) => session::execute(args, &ctx),
            Commands::Check(args) => check::execute(args, &ctx),
            Commands::Route(args) => route::execute(args, &ctx),
            Commands::Menu(args) => menu::execute(args, &ctx),
            Commands::Permissions(args) => permissions::execute(args, &ctx),
            Commands::Config(args) => config::execute(args, &ctx, &self.config),
        }
    }
}

/// Everything a command needs, wired from configuration.
pub struct Context {
    /// Merged configuration
    pub config: AppConfig,
    /// Session provider over the configured record file
    pub provider: SessionProvider,
    /// Route guard
    pub guard: RouteGuard,
    /// Dashboard routes
    pub routes: RouteTable,
    /// Menu filter over the configured definition
    pub menu: MenuFilter,
    /// Output format
    pub format: OutputFormat,
}

impl Context {
    /// Wire the library components from configuration
    pub fn build(config: AppConfig, format: OutputFormat) -> Result<Self, AppError> {
        let store = FileSessionStore::new(&config.session.path);
        let provider = SessionProvider::new(Arc::new(store));

        let definition = match &config.menu.definition_path {
            Some(path) => MenuDefinition::load(path)?,
            None => MenuDefinition::dashboard(),
        };
        tracing::debug!(
            session = %config.session.path,
            categories = definition.categories.len(),
            "Context ready"
        );

        Ok(Self {
            guard: RouteGuard::new(config.guard.clone()),
            routes: RouteTable::dashboard(&config.guard.landing_path),
            menu: MenuFilter::new(definition),
            provider,
            config,
            format,
        })
    }
}
