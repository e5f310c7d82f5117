// SPDX-License-Identifier: MPL-2.0
//! Image-reference classification.

use std::fmt;

/// Where an image's bytes come from.
///
/// Classification is total over all strings and looks only at the
/// scheme prefix. A `Local` reference does not name a file: local mode
/// reads the currently active document's backing binary and ignores the
/// reference payload entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Read the active document's bytes through the vault.
    Local,
    /// Issue a GET for this URL.
    Remote(String),
}

impl ImageSource {
    /// Classifies an image reference.
    ///
    /// `Remote` iff the reference starts with `http://` or `https://`;
    /// everything else routes to the active document.
    #[must_use]
    pub fn classify(reference: &str) -> Self {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            ImageSource::Remote(reference.to_string())
        } else {
            ImageSource::Local
        }
    }

    /// Short label used in log lines.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            ImageSource::Local => "local",
            ImageSource::Remote(_) => "remote",
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Local => write!(f, "local (active document)"),
            ImageSource::Remote(url) => write!(f, "remote ({url})"),
        }
    }
}
