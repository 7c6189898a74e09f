//! Admin password hashing command.

use clap::Args;

use studio_auth::hash_password;
use studio_core::error::AppError;
use studio_core::result::AppResult;

use crate::output::{self, OutputFormat};

/// Arguments for `hash-password`
#[derive(Debug, Args)]
pub struct HashPasswordArgs {
    /// Password (will prompt if not provided)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Execute `hash-password`
pub fn execute(args: &HashPasswordArgs, format: OutputFormat) -> AppResult<()> {
    let password = match &args.password {
        Some(p) => p.clone(),
        None => dialoguer::Password::new()
            .with_prompt("Admin password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
    };

    let hash = hash_password(&password)?;

    match format {
        OutputFormat::Json => output::print_item(&serde_json::json!({ "hash": hash }), format),
        OutputFormat::Text => {
            println!("{hash}");
            output::print_warning("Set this as auth.admin_password_hash (or STUDIO__AUTH__ADMIN_PASSWORD_HASH)");
        }
    }

    Ok(())
}
