//! Registry service interface.
//!
//! The registry is the external system of record for pushed artifacts. This
//! crate only queries it; the trait seam here lets the list command run
//! against a fake registry in tests.

pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{AppRef, OrderDirective, PushedArtifact, WorkspaceRef};

// Re-export the HTTP client
pub use http::HttpRegistry;

/// A query for pushed artifacts.
///
/// `workspace: None` means all workspaces. The order directive is advisory;
/// callers must not rely on the response being sorted.
#[derive(Debug, Clone, Serialize)]
pub struct ListPushedArtifactsRequest {
    pub application: AppRef,
    pub workspace: Option<WorkspaceRef>,
    pub order: OrderDirective,
}

/// Response envelope from the registry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPushedArtifactsResponse {
    #[serde(default)]
    pub artifacts: Vec<PushedArtifact>,
}

/// Errors surfaced by a registry query.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The request never produced a usable response
    #[error("could not reach the registry server: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with an error status
    #[error("registry error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The server answered 2xx but the body did not match the schema
    #[error("could not decode registry response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Trait for registry backends.
#[async_trait]
pub trait Registry: Send + Sync {
    /// List artifacts pushed for an application, optionally scoped to
    /// a single workspace.
    async fn list_pushed_artifacts(
        &self,
        req: &ListPushedArtifactsRequest,
    ) -> Result<ListPushedArtifactsResponse, RegistryError>;
}
