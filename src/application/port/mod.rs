// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the abstract interfaces the core consumes. Hosts
//! implement [`vault`] and [`panel`] against their own environment;
//! the [`crate::infrastructure`] module ships adapters for [`http`],
//! [`decoder`], and a filesystem-backed [`vault`].
//!
//! # Available Ports
//!
//! - [`vault`]: active-document access ([`DocumentVault`])
//! - [`http`]: remote byte fetch ([`RemoteFetch`])
//! - [`decoder`]: byte-level metadata decoding ([`MetadataDecoder`])
//! - [`panel`]: the docked panel surface ([`PanelHost`])
//!
//! # Design Notes
//!
//! - All traits use domain types only (no reqwest responses, no raw
//!   decoder fields)
//! - Fetch and decode are suspension points, so those traits expose
//!   `async fn`; callers stay generic over the implementation rather
//!   than boxing futures
//! - Methods return `Result` with the error types from [`crate::error`]

pub mod decoder;
pub mod http;
pub mod panel;
pub mod vault;

// Re-export main types for convenience
pub use decoder::{DecodeOutcome, MetadataDecoder};
pub use http::RemoteFetch;
pub use panel::PanelHost;
pub use vault::DocumentVault;
