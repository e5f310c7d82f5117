// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits
//! defined in `application::port`. These adapters wrap external
//! dependencies: the `kamadak-exif` parser, a `reqwest` HTTP client,
//! and filesystem access.
//!
//! # Available Adapters
//!
//! - [`exif`]: metadata decoding (implements [`MetadataDecoder`])
//! - [`http`]: remote byte fetch (implements [`RemoteFetch`])
//! - [`vault`]: path-based active-document access (implements
//!   [`DocumentVault`]) for hosts without a vault API of their own
//!
//! [`MetadataDecoder`]: crate::application::port::MetadataDecoder
//! [`RemoteFetch`]: crate::application::port::RemoteFetch
//! [`DocumentVault`]: crate::application::port::DocumentVault

pub mod exif;
pub mod http;
pub mod vault;

// Re-export main types for convenience
pub use self::exif::ExifDecoder;
pub use self::http::HttpFetcher;
pub use self::vault::FsVault;
