//! Session token minting and inspection commands.

use chrono::DateTime;
use clap::Args;
use serde::Serialize;

use studio_auth::{SessionIssuer, SessionSecret, SessionVerifier};
use studio_core::config::AppConfig;
use studio_core::error::AppError;
use studio_core::result::AppResult;

use crate::output::{self, OutputFormat};

use super::clock_at;

/// Arguments for `issue-token`
#[derive(Debug, Args)]
pub struct IssueTokenArgs {
    /// Lifetime in seconds (defaults to `auth.session_ttl_seconds`)
    #[arg(long)]
    pub ttl: Option<u64>,
    /// Pretend the current time is this Unix timestamp
    #[arg(long)]
    pub at: Option<i64>,
}

/// Arguments for `verify-token`
#[derive(Debug, Args)]
pub struct VerifyTokenArgs {
    /// Token string (cookie value)
    pub token: String,
    /// Pretend the current time is this Unix timestamp
    #[arg(long)]
    pub at: Option<i64>,
}

/// Token details printed by both commands
#[derive(Debug, Serialize)]
struct TokenReport {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_at_utc: Option<String>,
}

fn configured_secret(config: &AppConfig) -> AppResult<SessionSecret> {
    let secret = SessionSecret::from(config.auth.session_secret.as_str());
    if !secret.is_configured() {
        return Err(AppError::configuration(
            "auth.session_secret is empty; set it in the config file or STUDIO__AUTH__SESSION_SECRET",
        ));
    }
    Ok(secret)
}

fn utc(expires_at: i64) -> Option<String> {
    DateTime::from_timestamp(expires_at, 0).map(|dt| dt.to_rfc3339())
}

/// Execute `issue-token`
pub fn issue(args: &IssueTokenArgs, config: &AppConfig, format: OutputFormat) -> AppResult<()> {
    let ttl = args.ttl.unwrap_or(config.auth.session_ttl_seconds);
    if ttl == 0 {
        return Err(AppError::validation("--ttl must be greater than zero"));
    }

    let issued = SessionIssuer::new(configured_secret(config)?)
        .with_ttl_seconds(ttl)
        .with_clock(clock_at(args.at))
        .issue()?;

    match format {
        OutputFormat::Json => output::print_item(
            &TokenReport {
                valid: true,
                token: Some(issued.value),
                expires_at: Some(issued.expires_at),
                expires_at_utc: utc(issued.expires_at),
            },
            format,
        ),
        OutputFormat::Text => {
            println!("{}", issued.value);
            output::print_kv("expires_at", &issued.expires_at.to_string());
        }
    }

    Ok(())
}

/// Execute `verify-token`
pub fn verify(args: &VerifyTokenArgs, config: &AppConfig, format: OutputFormat) -> AppResult<()> {
    let verifier = SessionVerifier::new(configured_secret(config)?).with_clock(clock_at(args.at));
    let expires_at = verifier.verified_expiry(Some(args.token.trim()))?;

    let report = TokenReport {
        valid: expires_at.is_some(),
        token: None,
        expires_at,
        expires_at_utc: expires_at.and_then(utc),
    };

    match format {
        OutputFormat::Json => output::print_item(&report, format),
        OutputFormat::Text => match (report.expires_at, report.expires_at_utc.as_deref()) {
            (Some(exp), utc) => {
                output::print_success("Token is valid");
                output::print_kv("expires_at", &exp.to_string());
                if let Some(utc) = utc {
                    output::print_kv("expires_at_utc", utc);
                }
            }
            (None, _) => output::print_error("Token is invalid or expired"),
        },
    }

    if report.valid {
        Ok(())
    } else {
        Err(AppError::authentication("Token rejected"))
    }
}
