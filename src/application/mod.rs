// SPDX-License-Identifier: MPL-2.0
//! Application layer - resolution, fetch, presentation, and panel
//! orchestration.
//!
//! # Architecture
//!
//! The application layer sits between the domain layer (pure metadata
//! types) and the infrastructure/host layers. It defines:
//!
//! - **Ports (Traits)**: abstract interfaces the host or infrastructure
//!   adapters implement ([`port`])
//! - **Pure steps**: reference classification ([`source`]) and tree
//!   rendering ([`presenter`])
//! - **Orchestration**: byte fetching ([`fetch`]) and the single-panel
//!   state machine ([`panel`])
//!
//! # Dependency Rule
//!
//! - Application code depends only on domain types and its own ports
//! - Infrastructure adapters implement the ports
//! - The host's UI glue calls into [`panel::PanelController`]

pub mod fetch;
pub mod panel;
pub mod port;
pub mod presenter;
pub mod source;
