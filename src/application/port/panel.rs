// SPDX-License-Identifier: MPL-2.0
//! Panel-surface port.

use crate::domain::document::RenderedDocument;

/// Port for the host's docked panel surface.
///
/// The host owns the actual widget/leaf; the core only ever addresses
/// it through an opaque handle. Exactly one panel exists at a time:
/// [`create_or_reuse`](PanelHost::create_or_reuse) must return the
/// existing panel when one is already present.
pub trait PanelHost {
    /// Opaque identifier for the panel.
    type Handle;

    /// Returns the panel, creating it first if none exists.
    fn create_or_reuse(&mut self) -> Self::Handle;

    /// Brings the panel into view (e.g. expands a collapsed sidebar).
    fn reveal(&mut self, panel: &Self::Handle);

    /// Replaces the panel's content. `None` clears it.
    fn set_content(&mut self, panel: &Self::Handle, content: Option<&RenderedDocument>);
}
