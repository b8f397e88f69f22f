use std::fmt;

use crate::claims::Claims;
use crate::error::TokenError;

const RULE_WIDTH: usize = 50;

/// Human-readable output of one generator run.
#[derive(Debug, Clone)]
pub struct Report {
    token: String,
    payload: String,
    endpoint: String,
    script: String,
}

impl Report {
    pub fn new(
        token: String,
        claims: &Claims,
        endpoint: &str,
        script: &str,
    ) -> Result<Self, TokenError> {
        Ok(Report {
            token,
            payload: serde_json::to_string_pretty(claims)?,
            endpoint: endpoint.to_string(),
            script: script.to_string(),
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        let token = &self.token;
        let endpoint = &self.endpoint;

        writeln!(f, "\n{rule}")?;
        writeln!(f, "VALID JWT TOKEN FOR TESTING")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "\nToken:\n{token}\n")?;
        writeln!(f, "Payload:")?;
        writeln!(f, "{}", self.payload)?;
        writeln!(f, "\n{rule}\n")?;

        writeln!(f, "USAGE INSTRUCTIONS:\n")?;
        writeln!(f, "1. PowerShell:")?;
        writeln!(f, "   $token = \"{token}\"")?;
        writeln!(
            f,
            "   $headers = @{{ \"Authorization\" = \"Bearer $token\"; \"Content-Type\" = \"application/json\" }}"
        )?;
        writeln!(f, "   Invoke-WebRequest {endpoint} -Headers $headers")?;
        writeln!(f, "\n2. Linux/Mac (curl):")?;
        writeln!(f, "   curl -H \"Authorization: Bearer {token}\" {endpoint}")?;
        writeln!(f, "\n3. Update {}:", self.script)?;
        writeln!(f, "   Change line: [string]$Token = \"{token}\"")?;
        writeln!(f, "\n{rule}\n")
    }
}
