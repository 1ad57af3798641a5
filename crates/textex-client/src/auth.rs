//! # Authentication
//!
//! Password hashing and Basic-Auth header construction.
//!
//! The backend never sees a plaintext password: the client hashes it with
//! SHA-256 and sends the lowercase hex digest, both as the login query
//! parameter and as the password half of the Basic-Auth pair.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Hashes a plaintext password to its lowercase SHA-256 hex digest.
///
/// # Examples
///
/// ```
/// let digest = textex_client::auth::hash_password("secret");
/// assert_eq!(digest.len(), 64);
/// ```
#[must_use]
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Credentials for authenticating API requests.
///
/// Holds the username and the *hashed* password. Stored in the session file
/// and attached to every request as a Basic-Auth header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// The user's username.
    pub username: String,

    /// SHA-256 hex digest of the password.
    pub password_hash: String,
}

impl Credentials {
    /// Creates credentials from a username and a *plaintext* password.
    #[must_use]
    pub fn from_plaintext(username: impl Into<String>, password: &str) -> Self {
        Self {
            username: username.into(),
            password_hash: hash_password(password),
        }
    }

    /// Creates credentials from a username and an already-hashed password.
    ///
    /// Used when restoring a session from disk, where only the hash is kept.
    #[must_use]
    pub fn from_hash(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Returns the value for the `Authorization` header:
    /// `Basic base64(username:sha256hex)`.
    #[must_use]
    pub fn basic_header(&self) -> String {
        let pair = format!("{}:{}", self.username, self.password_hash);
        format!("Basic {}", STANDARD.encode(pair.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_known_vector() {
        // SHA-256("password")
        assert_eq!(
            hash_password("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn test_hash_password_empty() {
        // SHA-256("")
        assert_eq!(
            hash_password(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_basic_header_shape() {
        let creds = Credentials::from_hash("alice", "abc123");
        // base64("alice:abc123")
        assert_eq!(creds.basic_header(), "Basic YWxpY2U6YWJjMTIz");
    }

    #[test]
    fn test_from_plaintext_hashes() {
        let creds = Credentials::from_plaintext("bob", "password");
        assert_eq!(creds.username, "bob");
        assert_eq!(creds.password_hash.len(), 64);
        assert!(creds.password_hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
