// SPDX-License-Identifier: MPL-2.0
//! Byte-level metadata decoding port.

use crate::domain::metadata::MetadataTree;

/// Outcome of one decode attempt.
///
/// The decoder's two distinct "nothing to show" signals stay separate
/// here so the controller can log them apart, even though both clear
/// the panel identically.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeOutcome {
    /// The buffer carried embedded metadata.
    Tree(MetadataTree),

    /// The buffer is a valid image without a metadata segment.
    /// Not an error; the panel simply clears.
    Empty,

    /// The decoder could not make sense of the binary layout
    /// (corrupt or unsupported). Displayed like [`DecodeOutcome::Empty`],
    /// logged differently.
    ParseFailure(String),
}

/// Port for the external byte-format decoder.
///
/// The core performs no byte-level parsing of its own; implementations
/// wrap a decoder library and normalize its result into a
/// [`DecodeOutcome`] without interpreting individual tags.
#[allow(async_fn_in_trait)]
pub trait MetadataDecoder {
    /// Decodes a raw image buffer into hierarchical metadata.
    async fn decode(&self, bytes: &[u8]) -> DecodeOutcome;
}
