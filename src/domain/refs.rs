//! Scoping references and the query order directive.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reference to an application within a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppRef(String);

impl AppRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to a workspace. Queries take `Option<WorkspaceRef>`;
/// `None` means all workspaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceRef(String);

impl WorkspaceRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkspaceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Advisory ordering hint passed through to the registry query.
///
/// The server may honor it or not; the client always re-sorts the
/// result set before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDirective {
    pub key: OrderKey,
    pub desc: bool,
    pub limit: Option<u32>,
}

impl Default for OrderDirective {
    fn default() -> Self {
        Self {
            key: OrderKey::StartTime,
            desc: true,
            limit: None,
        }
    }
}

/// Field the registry should order by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderKey {
    StartTime,
    CompleteTime,
}

impl OrderKey {
    /// Wire name used in query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StartTime => "start_time",
            Self::CompleteTime => "complete_time",
        }
    }
}
