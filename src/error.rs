use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("token verification failed: {0}")]
    Verification(#[source] jsonwebtoken::errors::Error),

    #[error("malformed token: {0}")]
    Malformed(String),

    #[error("invalid base64url segment: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("failed to serialize payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl TokenError {
    /// True when verification failed because the signature did not match the secret.
    pub fn is_invalid_signature(&self) -> bool {
        matches!(
            self,
            TokenError::Verification(e)
                if matches!(e.kind(), jsonwebtoken::errors::ErrorKind::InvalidSignature)
        )
    }
}
