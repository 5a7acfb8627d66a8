//! Authentication utilities library
//!
//! Provides the credential primitives used by the clinic service:
//! - Password hashing (Argon2id)
//! - Signed, time-limited bearer tokens (HS256 JWT)
//! - Token issuance and validation through [`Authenticator`]
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("my_password", "not-a-phc-string"));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//! let issued = auth.issue_token("alice").unwrap();
//! assert_eq!(auth.validate_token(&issued.access_token).unwrap(), "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::IssuedToken;
pub use authenticator::DEFAULT_TOKEN_TTL_MINUTES;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
