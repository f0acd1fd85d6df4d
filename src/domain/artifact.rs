//! Pushed-artifact records as returned by the registry service.
//!
//! These are immutable snapshots: the CLI reads them, orders them, and
//! renders them. It never mutates artifact state.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::refs::WorkspaceRef;

/// An artifact that a deployment pipeline pushed to a registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushedArtifact {
    /// Opaque server-assigned identifier
    pub id: String,

    /// Monotonic sequence number within the application (display only)
    #[serde(default)]
    pub sequence: u64,

    /// Workspace the artifact belongs to
    pub workspace: WorkspaceRef,

    /// Name of the component that produced the artifact
    pub component: String,

    /// Registry plugin the artifact was pushed to
    pub registry: String,

    /// Lifecycle status of the push operation
    #[serde(default)]
    pub status: Status,
}

/// Lifecycle status of a push operation.
///
/// Timestamps arrive as RFC 3339 strings on the wire. Either may be absent
/// (operation not yet started/completed) or unparseable; both cases read as
/// `None` through the instant accessors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub state: StatusState,

    #[serde(default)]
    pub start_time: Option<String>,

    #[serde(default)]
    pub complete_time: Option<String>,
}

impl Status {
    /// Parsed start instant, `None` if absent or malformed.
    pub fn start_instant(&self) -> Option<DateTime<Utc>> {
        parse_instant(self.start_time.as_deref())
    }

    /// Parsed completion instant, `None` if absent or malformed.
    pub fn complete_instant(&self) -> Option<DateTime<Utc>> {
        parse_instant(self.complete_time.as_deref())
    }
}

fn parse_instant(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// Lifecycle state of a push operation.
///
/// The wire value is an open set; anything outside the three known states
/// deserializes to `Unknown` so downstream classification stays total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusState {
    Running,
    Success,
    Error,

    #[serde(other)]
    Unknown,
}

impl Default for StatusState {
    fn default() -> Self {
        Self::Unknown
    }
}

/// Sort artifacts by start time, most recent first.
///
/// Records with an absent or unparseable start time sink to the bottom.
/// The sort is stable, so repeated application never reorders ties.
pub fn sort_start_desc(artifacts: &mut [PushedArtifact]) {
    artifacts.sort_by_key(|a| Reverse(a.status.start_instant()));
}
