//! Single-value files standing in for the browser's local storage.
//!
//! One file holds the bearer token, another the chat session id, each on a
//! single line. A missing or blank file means "not set".

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored token, or `None` when absent or blank.
    pub fn load(&self) -> io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                Ok((!token.is_empty()).then(|| token.to_owned()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn save(&self, token: &str) -> io::Result<()> {
        std::fs::write(&self.path, format!("{}\n", token.trim()))
    }

    /// Remove the token file. Clearing an absent file is not an error.
    pub fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }

    /// Stored value, or one produced by `fresh` and persisted for next time.
    ///
    /// The flag is true when `fresh` was used.
    pub fn load_or_else(&self, fresh: impl FnOnce() -> String) -> io::Result<(String, bool)> {
        if let Some(existing) = self.load()? {
            return Ok((existing, false));
        }
        let value = fresh();
        self.save(&value)?;
        Ok((value.trim().to_owned(), true))
    }
}
