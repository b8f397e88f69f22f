//! Generator settings.
//!
//! Every value can come from a flag, the environment (a `.env` file is loaded
//! by the binaries before parsing) or the built-in default, in that order.

use clap::{Args, Parser};
use tracing::warn;

use crate::error::TokenError;

/// Matches `JWT_SECRET` in the notification service's docker-compose.yml.
pub const DEFAULT_SECRET: &str = "super-secret-key-change-in-production";
pub const DEFAULT_SUBJECT: &str = "user123";
pub const DEFAULT_EMAIL: &str = "user@example.com";
pub const DEFAULT_VALIDITY_DAYS: i64 = 365;
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/notifications/health";
pub const DEFAULT_SCRIPT: &str = "simple-test.ps1";

/// Shared signing secret, used by both binaries.
#[derive(Debug, Clone, Args)]
pub struct SecretArg {
    /// HS256 shared secret (must match the service's JWT_SECRET)
    #[arg(long, env = "JWT_SECRET", default_value = DEFAULT_SECRET, hide_env_values = true)]
    pub secret: String,
}

impl SecretArg {
    /// The secret, rejecting empty values and warning on the built-in default.
    pub fn resolve(self) -> Result<String, TokenError> {
        if self.secret.is_empty() {
            return Err(TokenError::Config("signing secret is empty".to_string()));
        }
        if self.secret == DEFAULT_SECRET {
            warn!("using the development default secret");
        }
        Ok(self.secret)
    }
}

/// Generate a valid JWT token for testing the Notification Engine API
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub secret: SecretArg,

    /// Subject claim
    #[arg(long, env = "TOKEN_SUBJECT", default_value = DEFAULT_SUBJECT)]
    pub subject: String,

    /// Email claim
    #[arg(long, env = "TOKEN_EMAIL", default_value = DEFAULT_EMAIL)]
    pub email: String,

    /// Token validity in days
    #[arg(long, env = "TOKEN_VALIDITY_DAYS", default_value_t = DEFAULT_VALIDITY_DAYS)]
    pub days: i64,

    /// Endpoint used in the usage instructions
    #[arg(long, env = "NOTIFICATIONS_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Test script named in the usage instructions
    #[arg(long, default_value = DEFAULT_SCRIPT)]
    pub script: String,

    /// Print only the token
    #[arg(long)]
    pub token_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub secret: String,
    pub subject: String,
    pub email: String,
    pub validity: chrono::Duration,
    pub endpoint: String,
    pub script: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            secret: DEFAULT_SECRET.to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            validity: chrono::Duration::days(DEFAULT_VALIDITY_DAYS),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            script: DEFAULT_SCRIPT.to_string(),
        }
    }
}

impl TryFrom<GenerateArgs> for GeneratorConfig {
    type Error = TokenError;

    fn try_from(args: GenerateArgs) -> Result<Self, Self::Error> {
        if args.days < 1 {
            return Err(TokenError::Config(format!(
                "validity must be at least 1 day, got {}",
                args.days
            )));
        }
        let validity = chrono::Duration::try_days(args.days).ok_or_else(|| {
            TokenError::Config(format!("validity of {} days is out of range", args.days))
        })?;

        if args.endpoint.trim().is_empty() {
            return Err(TokenError::Config("endpoint is empty".to_string()));
        }

        Ok(GeneratorConfig {
            secret: args.secret.resolve()?,
            subject: args.subject,
            email: args.email,
            validity,
            endpoint: args.endpoint,
            script: args.script,
        })
    }
}
