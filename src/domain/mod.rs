//! Domain types for the wharf CLI.
//!
//! This module contains the core data structures:
//! - PushedArtifact: registry records and their lifecycle status
//! - Refs: application/workspace scoping and the order directive

pub mod artifact;
pub mod refs;

// Re-export commonly used types
pub use artifact::{sort_start_desc, PushedArtifact, Status, StatusState};
pub use refs::{AppRef, OrderDirective, OrderKey, WorkspaceRef};
