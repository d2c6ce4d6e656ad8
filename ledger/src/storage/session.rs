//! Local login session
//!
//! A small JSON file `{"db": ..., "user": ...}` that spares the user from
//! re-authenticating on every command. Deleted on logout.

use crate::config::SESSION_FILE_NAME;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Who is logged in, and against which database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub db: String,
    pub user: String,
}

/// File-backed session storage
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `~/.ledger_session.json`, or the working directory when there is no home
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(SESSION_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn save(&self, session: &SessionData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string(session)?;
        fs::write(&self.path, json).await?;

        tracing::debug!("Saved session for {} at {:?}", session.user, self.path);
        Ok(())
    }

    /// Missing or unreadable session files count as "not logged in"
    pub async fn load(&self) -> Option<SessionData> {
        let contents = fs::read_to_string(&self.path).await.ok()?;

        match serde_json::from_str(&contents) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("Ignoring corrupt session file {:?}: {}", self.path, e);
                None
            }
        }
    }

    /// Remove the session file. Succeeds when there is none.
    pub async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// The session, if it exists and belongs to `db`
    pub async fn require(&self, db: &str) -> Result<SessionData> {
        let session = self.load().await.ok_or_else(|| {
            AppError::Session(format!(
                "not logged in. run: ledger login --db {} --username <name> --password <pw>",
                db
            ))
        })?;

        if session.db != db {
            return Err(AppError::Session(format!(
                "logged in for a different DB: {}. please login again with --db {}.",
                session.db, db
            )));
        }

        Ok(session)
    }
}
