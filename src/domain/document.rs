// SPDX-License-Identifier: MPL-2.0
//! Display-ready metadata, derived from a [`MetadataTree`].
//!
//! A [`RenderedDocument`] has no identity of its own: it is a pure
//! function of the tree it was rendered from, and every value is already
//! a display string. The types serialize so a host can ship them across
//! a UI bridge unchanged.
//!
//! [`MetadataTree`]: crate::domain::metadata::MetadataTree

use serde::{Deserialize, Serialize};

/// One rendered section: a title plus ordered (key, display value) rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedSection {
    pub title: String,
    pub rows: Vec<(String, String)>,
}

/// Ordered sections ready for the host's panel surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub sections: Vec<RenderedSection>,
}

impl RenderedDocument {
    /// A document with zero sections; the controller maps this to a
    /// cleared panel rather than rendering it.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
