//! Session capability: who is currently signed in.
//!
//! The original system delegated this to a hosted auth provider. Here the
//! seam is a trait, with a file-backed implementation that keeps a small
//! JSON document on disk. No file means anonymous.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, ShiftpadError};

/// The signed-in identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub user_id: Uuid,
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
}

impl SessionIdentity {
    pub fn new(user_id: Uuid, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
            signed_in_at: Utc::now(),
        }
    }
}

/// Resolve, establish, and clear the current identity.
pub trait SessionProvider: Send + Sync {
    /// The current identity, or `None` when anonymous.
    fn current(&self) -> Result<Option<SessionIdentity>>;

    /// Establish a session for the given identity.
    fn sign_in(&self, identity: &SessionIdentity) -> Result<()>;

    /// Clear the session. Succeeds when no session exists.
    fn sign_out(&self) -> Result<()>;
}

/// File-backed session provider.
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionProvider for FileSession {
    fn current(&self) -> Result<Option<SessionIdentity>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let identity = serde_json::from_str(&contents).map_err(|e| {
            ShiftpadError::Auth(format!(
                "Session file {} is corrupt: {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(Some(identity))
    }

    fn sign_in(&self, identity: &SessionIdentity) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(identity)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    fn sign_out(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_anonymous() {
        let dir = tempdir().unwrap();
        let session = FileSession::new(dir.path().join("session.json"));
        assert!(session.current().unwrap().is_none());
    }

    #[test]
    fn test_sign_in_out_round_trip() {
        let dir = tempdir().unwrap();
        let session = FileSession::new(dir.path().join("nested").join("session.json"));

        let identity = SessionIdentity::new(Uuid::new_v4(), "user@example.com");
        session.sign_in(&identity).unwrap();

        let current = session.current().unwrap().expect("signed in");
        assert_eq!(current.user_id, identity.user_id);
        assert_eq!(current.email, "user@example.com");

        session.sign_out().unwrap();
        assert!(session.current().unwrap().is_none());
    }

    #[test]
    fn test_sign_out_is_idempotent() {
        let dir = tempdir().unwrap();
        let session = FileSession::new(dir.path().join("session.json"));
        session.sign_out().unwrap();
        session.sign_out().unwrap();
    }

    #[test]
    fn test_corrupt_file_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let session = FileSession::new(path);
        assert!(session.current().is_err());
    }
}
