// SPDX-License-Identifier: MPL-2.0
//! Pure transformation from a decoded tree to a display document.

use crate::domain::document::{RenderedDocument, RenderedSection};
use crate::domain::metadata::{MetadataTree, TagValue};
use std::fmt::Write as _;

/// Renders a metadata tree into a display-ready document.
///
/// Deterministic and order-preserving: section order is the tree's
/// section order, row order is each section's tag order. Values are
/// format-agnostic; no truncation, no unit conversion, no tag
/// interpretation. An empty tree yields a zero-section document.
#[must_use]
pub fn render(tree: &MetadataTree) -> RenderedDocument {
    let sections = tree
        .sections()
        .map(|section| RenderedSection {
            title: section.name().to_string(),
            rows: section
                .tags()
                .map(|(tag, value)| (tag.to_string(), display_value(value)))
                .collect(),
        })
        .collect();
    RenderedDocument { sections }
}

// One formatting rule per value kind.
fn display_value(value: &TagValue) -> String {
    match value {
        TagValue::Text(text) => text.clone(),
        TagValue::Number(number) => number.to_string(),
        TagValue::Bytes(bytes) => hex(bytes),
    }
}

/// Lowercase hexadecimal, no separators.
fn hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
    out
}
