//! # Session Persistence
//!
//! Stores the active login session in a per-user file so relaunching the
//! application restores login state.
//!
//! ## File format
//!
//! Newline-delimited fields in fixed order: username, email, role, password
//! hash, last-login timestamp. Each field is run through a fixed 8-byte
//! repeating-XOR keystream and then hex-encoded. This is obfuscation for
//! casual inspection only, not confidentiality; the format is kept for
//! compatibility with files written by earlier releases.
//!
//! The file lives at `$HOME/.text-extraction-login` and is written with mode
//! 0600 on Unix. There is no locking: a second process instance racing on the
//! same file results in last-writer-wins, as it always has.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::auth::Credentials;

/// File name under the user's home directory.
const STORAGE_FILE: &str = ".text-extraction-login";

/// Fixed keystream for the repeating-XOR obfuscation.
const XOR_KEY: [u8; 8] = *b"TxLogin1";

/// The active login session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSession {
    /// The user's username.
    pub username: String,

    /// The user's email address.
    pub email: String,

    /// The user's role (defaults to `User`).
    pub role: String,

    /// SHA-256 hex digest of the password, kept for re-authentication.
    pub password_hash: String,

    /// RFC 3339 timestamp of the last login.
    pub last_login: String,
}

impl LoginSession {
    /// Creates a session for a fresh login, stamping `last_login` with the
    /// current time. An empty role falls back to `User`.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let role = role.into();
        Self {
            username: username.into(),
            email: email.into(),
            role: if role.is_empty() {
                "User".to_string()
            } else {
                role
            },
            password_hash: password_hash.into(),
            last_login: Utc::now().to_rfc3339(),
        }
    }

    /// Returns the credentials needed to authenticate API requests.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::from_hash(self.username.clone(), self.password_hash.clone())
    }

    /// Returns true if the user has the administrator role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("admin")
    }

    /// Refreshes the last-login timestamp.
    pub fn touch(&mut self) {
        self.last_login = Utc::now().to_rfc3339();
    }
}

/// Applies the fixed repeating-XOR keystream and hex-encodes the result.
#[must_use]
pub fn obfuscate(value: &str) -> String {
    let bytes: Vec<u8> = value
        .bytes()
        .enumerate()
        .map(|(i, b)| b ^ XOR_KEY[i % XOR_KEY.len()])
        .collect();
    hex::encode(bytes)
}

/// Reverses [`obfuscate`]: hex-decode, then XOR with the same keystream.
///
/// Returns an empty string when the input is not valid hex or the result is
/// not UTF-8; a corrupt field degrades to "not set" rather than failing.
#[must_use]
pub fn deobfuscate(value: &str) -> String {
    let Ok(bytes) = hex::decode(value.trim()) else {
        return String::new();
    };
    let plain: Vec<u8> = bytes
        .iter()
        .enumerate()
        .map(|(i, b)| b ^ XOR_KEY[i % XOR_KEY.len()])
        .collect();
    String::from_utf8(plain).unwrap_or_default()
}

/// Loads and saves [`LoginSession`]s at a fixed per-user path.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at the default location, `$HOME/.text-extraction-login`.
    ///
    /// Falls back to the current directory when no home directory can be
    /// determined.
    #[must_use]
    pub fn new() -> Self {
        let base = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join(STORAGE_FILE),
        }
    }

    /// Store at an explicit path (used by tests).
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted session, if any.
    ///
    /// A missing file, unreadable file, or empty username all mean
    /// "logged out" and return `None`; corruption is logged, never fatal.
    #[must_use]
    pub fn load(&self) -> Option<LoginSession> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "Failed to read session file");
                return None;
            }
        };

        let mut lines = contents.lines();
        let mut next = || deobfuscate(lines.next().unwrap_or(""));

        let username = next();
        let email = next();
        let role = next();
        let password_hash = next();
        let last_login = next();

        if username.is_empty() {
            return None;
        }

        tracing::info!(%username, "Restored login session");
        Some(LoginSession {
            username,
            email,
            role: if role.is_empty() {
                "User".to_string()
            } else {
                role
            },
            password_hash,
            last_login,
        })
    }

    /// Writes the session to disk, replacing any previous contents.
    pub fn save(&self, session: &LoginSession) -> std::io::Result<()> {
        let contents = format!(
            "{}\n{}\n{}\n{}\n{}\n",
            obfuscate(&session.username),
            obfuscate(&session.email),
            obfuscate(&session.role),
            obfuscate(&session.password_hash),
            obfuscate(&session.last_login),
        );

        fs::write(&self.path, contents)?;
        self.restrict_permissions()?;

        tracing::info!(username = %session.username, "Saved login session");
        Ok(())
    }

    /// Clears the stored session (logout). The file is rewritten with empty
    /// fields rather than removed, matching the historical behavior.
    pub fn clear(&self) -> std::io::Result<()> {
        fs::write(&self.path, "\n\n\n\n\n")?;
        self.restrict_permissions()?;
        tracing::info!("Cleared login session");
        Ok(())
    }

    #[cfg(unix)]
    fn restrict_permissions(&self) -> std::io::Result<()> {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
    }

    #[cfg(not(unix))]
    fn restrict_permissions(&self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obfuscate_round_trip() {
        for value in [
            "",
            "alice",
            "alice@example.com",
            "Admin",
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8",
            "emoji ✓ and spaces",
        ] {
            assert_eq!(deobfuscate(&obfuscate(value)), value);
        }
    }

    #[test]
    fn test_obfuscate_is_hex() {
        let encoded = obfuscate("alice");
        assert!(encoded.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(encoded.len(), 10);
    }

    #[test]
    fn test_deobfuscate_garbage_is_empty() {
        assert_eq!(deobfuscate("not hex!"), "");
        assert_eq!(deobfuscate("abc"), ""); // odd length
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::with_path(dir.path().join("login"));

        let session = LoginSession::new("alice", "alice@example.com", "Admin", "deadbeef");
        store.save(&session).unwrap();

        let restored = store.load().unwrap();
        assert_eq!(restored, session);
        assert!(restored.is_admin());
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::with_path(dir.path().join("absent"));
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clear_logs_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::with_path(dir.path().join("login"));

        let session = LoginSession::new("bob", "", "", "cafe");
        store.save(&session).unwrap();
        assert!(store.load().is_some());

        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_touch_refreshes_last_login() {
        let mut session = LoginSession::new("alice", "", "", "deadbeef");
        session.last_login = "2020-01-01T00:00:00+00:00".to_string();

        session.touch();

        assert_ne!(session.last_login, "2020-01-01T00:00:00+00:00");
        let stamped = chrono::DateTime::parse_from_rfc3339(&session.last_login).unwrap();
        assert!(stamped.with_timezone(&Utc) > Utc::now() - chrono::Duration::minutes(1));
    }

    #[test]
    fn test_empty_role_defaults_to_user() {
        let session = LoginSession::new("bob", "", "", "cafe");
        assert_eq!(session.role, "User");
        assert!(!session.is_admin());
    }

    #[cfg(unix)]
    #[test]
    fn test_file_permissions_are_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::with_path(dir.path().join("login"));
        store
            .save(&LoginSession::new("carol", "", "", ""))
            .unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
