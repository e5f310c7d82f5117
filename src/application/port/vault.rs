// SPDX-License-Identifier: MPL-2.0
//! Active-document access port.

use crate::error::FetchError;

/// Port for the host's vault/file-access API.
///
/// "Local" image references do not name a file; they mean "the currently
/// active document's backing binary". The handle type is opaque to the
/// core: hosts use whatever identifies an open document in their world
/// (a path, a vault entry, an id).
///
/// # Example
///
/// ```ignore
/// use metadata_lens::application::port::DocumentVault;
///
/// async fn active_bytes(vault: &impl DocumentVault) -> Option<Vec<u8>> {
///     let handle = vault.active_file()?;
///     vault.read_binary(&handle).await.ok()
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait DocumentVault {
    /// Opaque identifier for an open document.
    type Handle;

    /// Returns a handle for the currently active document, if any.
    fn active_file(&self) -> Option<Self::Handle>;

    /// Reads the document's full contents as bytes.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::UnreadableFile`] when the host cannot
    /// produce a byte buffer for the document.
    async fn read_binary(&self, handle: &Self::Handle) -> Result<Vec<u8>, FetchError>;
}
