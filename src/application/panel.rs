// SPDX-License-Identifier: MPL-2.0
//! The single metadata-panel state machine.
//!
//! A [`PanelController`] owns the one panel the host shows and is the
//! only writer of its state. Clicks and layout changes arrive through
//! [`on_image_activated`](PanelController::on_image_activated) and
//! [`on_context_changed`](PanelController::on_context_changed); each
//! runs resolve → fetch → decode → render → apply strictly in order.
//!
//! Overlapping calls are neither queued nor cancelled: whichever call's
//! chain completes last overwrites the panel ("last-to-finish wins").
//! The apply step never suspends, so a settled state always reflects
//! exactly one completed call, never a torn mix of two.

use std::cell::RefCell;

use crate::application::fetch::fetch_bytes;
use crate::application::port::{
    DecodeOutcome, DocumentVault, MetadataDecoder, PanelHost, RemoteFetch,
};
use crate::application::presenter;
use crate::application::source::ImageSource;
use crate::domain::document::RenderedDocument;

// =============================================================================
// PanelState
// =============================================================================

/// Where the panel currently stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PanelPhase {
    /// No panel has been activated yet (or the workspace tore down).
    #[default]
    Closed,
    /// The panel exists but shows nothing.
    OpenEmpty,
    /// The panel shows this document.
    OpenShowing(RenderedDocument),
}

/// The panel's state. One per controller, mutated only by the
/// controller's operations, always in a single non-suspending step.
#[derive(Debug, Default)]
struct PanelState {
    phase: PanelPhase,
}

// =============================================================================
// PanelController
// =============================================================================

/// Ties click events to the metadata panel.
///
/// Generic over the four ports so hosts and tests supply their own
/// collaborators. All methods take `&self`: the controller is built for
/// a single-threaded, cooperative host event loop, where overlapping
/// `show` futures interleave only at fetch/decode suspension points.
pub struct PanelController<V, N, D, H>
where
    H: PanelHost,
{
    vault: V,
    net: N,
    decoder: D,
    host: RefCell<H>,
    state: RefCell<PanelState>,
}

impl<V, N, D, H> PanelController<V, N, D, H>
where
    V: DocumentVault,
    N: RemoteFetch,
    D: MetadataDecoder,
    H: PanelHost,
{
    pub fn new(vault: V, net: N, decoder: D, host: H) -> Self {
        Self {
            vault,
            net,
            decoder,
            host: RefCell::new(host),
            state: RefCell::new(PanelState::default()),
        }
    }

    /// Reveals the panel, creating it on first activation.
    ///
    /// `Closed` becomes `OpenEmpty`; an already-open panel keeps its
    /// content.
    pub fn activate(&self) {
        let mut host = self.host.borrow_mut();
        let panel = host.create_or_reuse();
        host.reveal(&panel);

        let mut state = self.state.borrow_mut();
        if state.phase == PanelPhase::Closed {
            state.phase = PanelPhase::OpenEmpty;
        }
    }

    /// Resolves, fetches, decodes, and displays one image reference.
    ///
    /// A non-empty result reveals the panel and moves it to
    /// `OpenShowing`; an empty result or any fetch/decode error clears
    /// the panel to `OpenEmpty` without revealing it. Errors are logged,
    /// never surfaced.
    pub async fn show(&self, reference: &str) {
        self.run(ImageSource::classify(reference), true).await;
    }

    /// Re-reads the active document's metadata without revealing the
    /// panel. Used for passive context changes, not explicit clicks.
    pub async fn refresh_for_current_context(&self) {
        self.run(ImageSource::Local, false).await;
    }

    /// Entry point for the host's click dispatch.
    pub async fn on_image_activated(&self, reference: &str) {
        self.show(reference).await;
    }

    /// Entry point for the host's layout/navigation notifications.
    pub async fn on_context_changed(&self) {
        self.refresh_for_current_context().await;
    }

    /// Returns the panel to `Closed` on workspace teardown. The host
    /// destroys the actual panel surface itself.
    pub fn teardown(&self) {
        self.state.borrow_mut().phase = PanelPhase::Closed;
    }

    /// Current phase (cloned snapshot).
    pub fn phase(&self) -> PanelPhase {
        self.state.borrow().phase.clone()
    }

    /// Currently displayed document, if any.
    pub fn document(&self) -> Option<RenderedDocument> {
        match &self.state.borrow().phase {
            PanelPhase::OpenShowing(document) => Some(document.clone()),
            _ => None,
        }
    }

    async fn run(&self, source: ImageSource, reveal: bool) {
        let outcome = match fetch_bytes(&source, &self.vault, &self.net).await {
            Ok(bytes) => self.decoder.decode(&bytes).await,
            Err(err) => {
                log::warn!("fetch failed for {source}: {} ({err})", err.kind());
                self.clear_panel();
                return;
            }
        };

        match outcome {
            DecodeOutcome::Tree(tree) if !tree.is_empty() => {
                let document = presenter::render(&tree);
                self.show_document(document, reveal);
            }
            DecodeOutcome::Tree(_) | DecodeOutcome::Empty => {
                log::debug!("no metadata in {source}");
                self.clear_panel();
            }
            DecodeOutcome::ParseFailure(reason) => {
                log::warn!("metadata parse failure for {source}: {reason}");
                self.clear_panel();
            }
        }
    }

    // Apply steps below never suspend; each writes host and state as
    // one unit, which is what keeps overlapping calls from tearing.

    fn show_document(&self, document: RenderedDocument, reveal: bool) {
        let mut host = self.host.borrow_mut();
        let panel = host.create_or_reuse();
        host.set_content(&panel, Some(&document));
        if reveal {
            host.reveal(&panel);
        }
        self.state.borrow_mut().phase = PanelPhase::OpenShowing(document);
    }

    fn clear_panel(&self) {
        let mut host = self.host.borrow_mut();
        let panel = host.create_or_reuse();
        host.set_content(&panel, None);
        self.state.borrow_mut().phase = PanelPhase::OpenEmpty;
    }
}

// =============================================================================
// Tests
// =============================================================================
