// SPDX-License-Identifier: MPL-2.0
//! Path-based active-document access.
//!
//! Hosts with a real vault API implement [`DocumentVault`] themselves;
//! [`FsVault`] covers hosts (and tests) where "the active document" is
//! simply a path on disk. The host updates the active path as the user
//! navigates; reads go through `tokio::fs`.

use crate::application::port::vault::DocumentVault;
use crate::error::FetchError;
use std::path::PathBuf;
use std::sync::RwLock;

/// Filesystem-backed [`DocumentVault`].
#[derive(Debug, Default)]
pub struct FsVault {
    active: RwLock<Option<PathBuf>>,
}

impl FsVault {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets (or clears) the active document path.
    pub fn set_active(&self, path: Option<PathBuf>) {
        if let Ok(mut active) = self.active.write() {
            *active = path;
        }
    }

    /// Current active document path, if any.
    #[must_use]
    pub fn active(&self) -> Option<PathBuf> {
        self.active.read().ok().and_then(|active| active.clone())
    }
}

impl DocumentVault for FsVault {
    type Handle = PathBuf;

    fn active_file(&self) -> Option<Self::Handle> {
        self.active()
    }

    async fn read_binary(&self, handle: &Self::Handle) -> Result<Vec<u8>, FetchError> {
        tokio::fs::read(handle)
            .await
            .map_err(|e| FetchError::UnreadableFile(e.to_string()))
    }
}
