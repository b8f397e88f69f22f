use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use jsonwebtoken::{crypto, decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::Value;

use crate::claims::Claims;
use crate::error::TokenError;

/// Helper to sign claims into a compact HS256 JWT
pub fn sign(claims: &Claims, secret: &str) -> Result<String, TokenError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(TokenError::Signing)
}

/// Helper to verify a JWT token against `secret`, including its expiry
pub fn verify(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_required_spec_claims(&["exp", "sub"]);

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(TokenError::Verification)?;
    Ok(token_data.claims)
}

/// HS256 signature segment for a `header.payload` signing input.
pub fn signature_for(signing_input: &str, secret: &str) -> Result<String, TokenError> {
    crypto::sign(
        signing_input.as_bytes(),
        &EncodingKey::from_secret(secret.as_bytes()),
        Algorithm::HS256,
    )
    .map_err(TokenError::Signing)
}

/// The decoded pieces of a token. Nothing here has been verified.
#[derive(Debug, Clone)]
pub struct TokenParts {
    pub header: Value,
    pub payload: Value,
    /// `header.payload`, the bytes the signature covers
    pub signing_input: String,
    pub signature: String,
}

/// Split a token into its three segments and decode header and payload.
pub fn inspect(token: &str) -> Result<TokenParts, TokenError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    let [header, payload, signature] = segments.as_slice() else {
        return Err(TokenError::Malformed(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    };

    if segments.iter().any(|s| s.is_empty()) {
        return Err(TokenError::Malformed("empty segment".to_string()));
    }

    // The signature is raw MAC bytes, only check that it decodes.
    URL_SAFE_NO_PAD.decode(signature)?;

    Ok(TokenParts {
        header: decode_segment(header)?,
        payload: decode_segment(payload)?,
        signing_input: format!("{header}.{payload}"),
        signature: (*signature).to_string(),
    })
}

fn decode_segment(segment: &str) -> Result<Value, TokenError> {
    let bytes = URL_SAFE_NO_PAD.decode(segment)?;
    serde_json::from_slice(&bytes)
        .map_err(|e| TokenError::Malformed(format!("segment is not JSON: {e}")))
}
