// SPDX-License-Identifier: MPL-2.0
//! Remote byte-fetch port.

use crate::error::NetworkError;

/// Port for fetching a remote image's bytes.
///
/// One conceptual GET per call: the full response body as a byte buffer
/// or a [`NetworkError`]. No caching and no retries at this layer; a
/// hung request is bounded only by whatever timeout the implementation
/// itself applies.
#[allow(async_fn_in_trait)]
pub trait RemoteFetch {
    /// Fetches the resource at `url`.
    ///
    /// # Errors
    ///
    /// [`NetworkError::Transport`] on transport failure,
    /// [`NetworkError::Status`] on a non-success response.
    async fn get(&self, url: &str) -> Result<Vec<u8>, NetworkError>;
}
