use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::vet::errors::EmailError;
use crate::domain::vet::errors::UsernameError;
use crate::domain::vet::errors::VetIdError;

/// Registered clinic staff account.
///
/// The username is the tenant key: animals and treatments record the
/// username (and id) of the vet that created them. It is fixed at
/// registration.
#[derive(Debug, Clone)]
pub struct Vet {
    pub id: VetId,
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Vet unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VetId(pub Uuid);

impl VetId {
    /// Generate a new random vet ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a vet ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, VetIdError> {
        Uuid::parse_str(s)
            .map(VetId)
            .map_err(|e| VetIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for VetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Any non-blank text up to 64 characters without control characters.
/// Punctuation such as `dr.smith` is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    const MAX_LENGTH: usize = 64;

    /// Create a new valid username. The value is kept exactly as given.
    ///
    /// # Errors
    /// * `Blank` - Empty or whitespace only
    /// * `TooLong` - Longer than 64 characters
    /// * `InvalidCharacters` - Contains control characters
    pub fn new(username: String) -> Result<Self, UsernameError> {
        if username.trim().is_empty() {
            return Err(UsernameError::Blank);
        }

        let length = username.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        if username.chars().any(char::is_control) {
            return Err(UsernameError::InvalidCharacters);
        }

        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The vet on whose behalf an operation runs.
///
/// Records compare both fields, so a username freed by a deleted account and
/// registered again does not inherit the old account's records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VetIdentity {
    pub id: VetId,
    pub username: Username,
}

impl From<&Vet> for VetIdentity {
    fn from(vet: &Vet) -> Self {
        Self {
            id: vet.id,
            username: vet.username.clone(),
        }
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to register a new vet.
#[derive(Debug)]
pub struct RegisterVetCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: String,
}

impl RegisterVetCommand {
    /// # Arguments
    /// * `password` - Plain text password (hashed by the service, never stored)
    pub fn new(username: Username, email: EmailAddress, password: String) -> Self {
        Self {
            username,
            email,
            password,
        }
    }
}

/// Command replacing every editable vet field.
///
/// `username` must equal the current one; usernames cannot be changed.
#[derive(Debug)]
pub struct UpdateVetCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: String,
}
