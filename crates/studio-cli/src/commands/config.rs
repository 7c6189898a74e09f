//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use studio_core::result::AppResult;

use crate::output::{self, OutputFormat};

use super::Cli;

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
    /// Show the merged configuration with credentials masked
    Show,
    /// Validate configuration and report whether admin login is enabled
    Validate,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, cli: &Cli, format: OutputFormat) -> AppResult<()> {
    match &args.command {
        ConfigCommand::Show => {
            let config = cli.load_config()?;
            output::print_item(&config.redacted(), format);
        }
        ConfigCommand::Validate => {
            let config = match cli.load_config() {
                Ok(config) => config,
                Err(e) => {
                    output::print_error(&format!("Configuration invalid: {}", e));
                    return Err(e);
                }
            };

            output::print_success(&format!("Configuration '{}' is valid", cli.config));
            output::print_kv("server", &config.server.bind_address());
            output::print_kv("session_ttl", &format!("{}s", config.auth.session_ttl_seconds));
            output::print_kv("cookie", &config.auth.cookie_name);

            if !config.auth.is_session_secret_set() {
                output::print_warning("auth.session_secret is empty: admin login is disabled");
            }
            if config.auth.admin_password_hash.is_empty() {
                output::print_warning("auth.admin_password_hash is empty: admin login is disabled");
            } else {
                studio_auth::AdminPassword::from_hash(&config.auth.admin_password_hash)?;
            }
        }
    }

    Ok(())
}
