use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Token lifetime used when none is configured.
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 45;

/// Issues and validates bearer tokens.
///
/// Credential hashing lives in [`crate::PasswordHasher`]; this type only deals
/// with tokens.
pub struct Authenticator {
    jwt_handler: JwtHandler,
    token_ttl: Duration,
}

/// Bearer token handed back to a client after a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_at: i64,
}

/// Authentication operation errors.
///
/// Token validation failures of any kind collapse into `Unauthenticated` so
/// callers cannot tell a bad signature from an expired token.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Could not validate credentials")]
    Unauthenticated,

    #[error("Token issuance failed: {0}")]
    TokenIssuance(JwtError),
}

impl Authenticator {
    /// Create an authenticator issuing tokens with the default 45 minute ttl.
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self::with_token_ttl(jwt_secret, Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES))
    }

    /// Create an authenticator with an explicit token lifetime.
    pub fn with_token_ttl(jwt_secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            jwt_handler: JwtHandler::new(jwt_secret),
            token_ttl,
        }
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Issue a signed token for `subject` using the configured lifetime.
    ///
    /// # Errors
    /// * `TokenIssuance` - Token signing failed
    pub fn issue_token(&self, subject: &str) -> Result<IssuedToken, AuthenticationError> {
        self.issue_token_with_ttl(subject, self.token_ttl)
    }

    /// Issue a signed token for `subject` that expires `ttl` from now.
    ///
    /// # Errors
    /// * `TokenIssuance` - Token signing failed
    pub fn issue_token_with_ttl(
        &self,
        subject: &str,
        ttl: Duration,
    ) -> Result<IssuedToken, AuthenticationError> {
        let claims = Claims::for_subject(subject, ttl);
        let access_token = self
            .jwt_handler
            .encode(&claims)
            .map_err(AuthenticationError::TokenIssuance)?;

        Ok(IssuedToken {
            access_token,
            token_type: "bearer",
            expires_at: claims.exp,
        })
    }

    /// Validate a bearer token and return its subject.
    ///
    /// # Errors
    /// * `Unauthenticated` - Signature, expiry, or subject check failed
    pub fn validate_token(&self, token: &str) -> Result<String, AuthenticationError> {
        let claims = self.jwt_handler.decode(token).map_err(|e| {
            tracing::debug!(error = %e, "Token rejected");
            AuthenticationError::Unauthenticated
        })?;

        claims
            .sub
            .ok_or(AuthenticationError::Unauthenticated)
    }
}
