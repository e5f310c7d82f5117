// SPDX-License-Identifier: MPL-2.0
//! Byte fetching for a classified image reference.

use crate::application::port::{DocumentVault, RemoteFetch};
use crate::application::source::ImageSource;
use crate::error::FetchError;

/// Obtains the raw byte buffer for one image reference.
///
/// One conceptual operation per call, no caching: every invocation
/// re-fetches. The only side effect is the read itself.
///
/// # Errors
///
/// - Remote: [`FetchError::Network`] on transport failure or a
///   non-success status.
/// - Local: [`FetchError::NoActiveFile`] when no document is open
///   (terminal for this call), [`FetchError::UnreadableFile`] when the
///   host cannot produce bytes.
pub async fn fetch_bytes<V, N>(
    source: &ImageSource,
    vault: &V,
    net: &N,
) -> Result<Vec<u8>, FetchError>
where
    V: DocumentVault,
    N: RemoteFetch,
{
    match source {
        ImageSource::Remote(url) => net.get(url).await.map_err(FetchError::Network),
        ImageSource::Local => {
            let handle = vault.active_file().ok_or(FetchError::NoActiveFile)?;
            vault.read_binary(&handle).await
        }
    }
}
