//! wharf - CLI for inspecting artifacts pushed to a deployment registry
//!
//! The registry service is the system of record: wharf queries it, never
//! mutates it. Each command is one request/response cycle followed by
//! deterministic client-side ordering and table rendering.
//!
//! # Modules
//!
//! - `registry`: registry service client (HTTP) behind a trait seam
//! - `domain`: artifact records, scoping refs, ordering policy
//! - `output`: status classification, relative times, table rendering
//! - `cli`: command-line interface
//!
//! # Usage
//!
//! ```bash
//! # List pushed artifacts in the current workspace
//! wharf artifact list
//!
//! # Across all workspaces, newest first
//! wharf artifact list --workspace-all
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod output;
pub mod registry;

// Re-export main types at crate root for convenience
pub use domain::{AppRef, OrderDirective, OrderKey, PushedArtifact, Status, StatusState, WorkspaceRef};
pub use errors::Reported;
pub use registry::{HttpRegistry, Registry};
