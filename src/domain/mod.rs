// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure metadata value types.
//!
//! These types carry decoded metadata from the decoder adapter to the
//! host's panel surface. They hold no behavior beyond ordered-map
//! bookkeeping and are free of I/O, host, and decoder concerns.
//!
//! # Modules
//!
//! - [`metadata`]: decoder-side structure ([`MetadataTree`](metadata::MetadataTree),
//!   [`TagValue`](metadata::TagValue))
//! - [`document`]: display-side structure ([`RenderedDocument`](document::RenderedDocument),
//!   [`RenderedSection`](document::RenderedSection))

pub mod document;
pub mod metadata;
