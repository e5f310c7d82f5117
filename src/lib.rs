// SPDX-License-Identifier: MPL-2.0
//! `metadata_lens` is the embeddable core of an "image click → metadata
//! panel" feature for document viewers.
//!
//! A host embeds this crate, wires its own environment to the port traits
//! in [`application::port`], and forwards image clicks and layout changes
//! to a [`PanelController`](application::panel::PanelController). The
//! controller resolves where the image's bytes live (local active document
//! or remote URL), fetches them, decodes the embedded metadata, and hands
//! the host a sectioned, display-ready document for its panel surface.
//!
//! The crate owns no UI, no CLI, and no wire format; those belong to the
//! host and to the external decoder.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
