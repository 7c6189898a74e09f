//! CLI command definitions and dispatch.

pub mod config;
pub mod password;
pub mod token;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use studio_core::config::AppConfig;
use studio_core::result::AppResult;
use studio_core::traits::{Clock, ManualClock, SystemClock};

/// Studio admin gate tooling
#[derive(Debug, Parser)]
#[command(name = "studio", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Environment overlay (`config/<env>.toml`)
    #[arg(short, long, env = "STUDIO_ENV")]
    pub env: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Hash an admin password for `auth.admin_password_hash`
    HashPassword(password::HashPasswordArgs),
    /// Mint an admin session token with the configured secret
    IssueToken(token::IssueTokenArgs),
    /// Check an admin session token against the configured secret
    VerifyToken(token::VerifyTokenArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> AppResult<()> {
        match &self.command {
            Commands::HashPassword(args) => password::execute(args, self.format),
            Commands::IssueToken(args) => token::issue(args, &self.load_config()?, self.format),
            Commands::VerifyToken(args) => token::verify(args, &self.load_config()?, self.format),
            Commands::Config(args) => config::execute(args, self, self.format),
        }
    }

    /// Helper: load configuration from file and environment
    pub fn load_config(&self) -> AppResult<AppConfig> {
        AppConfig::load(&self.config, self.env.as_deref())
    }
}

/// Real clock, or one pinned to `at` (Unix seconds) when given.
pub fn clock_at(at: Option<i64>) -> Arc<dyn Clock> {
    match at {
        Some(unix_seconds) => Arc::new(ManualClock::new(unix_seconds)),
        None => Arc::new(SystemClock),
    }
}
