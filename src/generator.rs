use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::claims::Claims;
use crate::config::GeneratorConfig;
use crate::error::TokenError;
use crate::report::Report;
use crate::token;

/// Build the claims, sign them and render the report, using the current time.
pub fn generate_and_report(config: &GeneratorConfig) -> Result<Report, TokenError> {
    generate_at(config, Utc::now())
}

/// Same as [`generate_and_report`] with an explicit issue time.
pub fn generate_at(config: &GeneratorConfig, now: DateTime<Utc>) -> Result<Report, TokenError> {
    let claims = Claims::issued_at(&config.subject, &config.email, now, config.validity)?;
    debug!(sub = %claims.sub, iat = claims.iat, exp = claims.exp, "signing claims");

    let token = token::sign(&claims, &config.secret)?;
    info!(sub = %claims.sub, "generated token");

    Report::new(token, &claims, &config.endpoint, &config.script)
}
