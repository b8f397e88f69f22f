use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// Claims structure for the test JWT.
///
/// Field order is the serialization order, which is what ends up in the
/// printed payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (test principal id)
    pub sub: String,
    /// Contact address, illustrative only
    pub email: String,
    /// Issued at (as UTC timestamp)
    pub iat: i64,
    /// Expiration time (as UTC timestamp)
    pub exp: i64,
}

impl Claims {
    /// Claims issued now, valid for `validity`.
    pub fn new(sub: &str, email: &str, validity: Duration) -> Result<Self, TokenError> {
        Self::issued_at(sub, email, Utc::now(), validity)
    }

    /// Claims issued at `now`. Both timestamps come from the same reading, so
    /// `exp - iat` is exactly the validity period.
    pub fn issued_at(
        sub: &str,
        email: &str,
        now: DateTime<Utc>,
        validity: Duration,
    ) -> Result<Self, TokenError> {
        if validity.num_seconds() <= 0 {
            return Err(TokenError::Config(format!(
                "validity period must be positive, got {}s",
                validity.num_seconds()
            )));
        }

        let expiration = now.checked_add_signed(validity).ok_or_else(|| {
            TokenError::Config("validity period overflows the timestamp range".to_string())
        })?;

        Ok(Claims {
            sub: sub.to_owned(),
            email: email.to_owned(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        })
    }

    /// Seconds between issue and expiry.
    pub fn lifetime(&self) -> i64 {
        self.exp - self.iat
    }

    /// Time left before expiry, negative once expired.
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        Duration::seconds(self.exp - now.timestamp())
    }
}
