//! HTTP registry client.
//!
//! Endpoint: GET {server}/v1/project/{project}/app/{app}/artifacts
//! Auth: Bearer token

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{
    ListPushedArtifactsRequest, ListPushedArtifactsResponse, Registry, RegistryError,
};

/// Registry client speaking the server's JSON API.
pub struct HttpRegistry {
    server: String,
    project: String,
    token: String,
    client: reqwest::Client,
}

/// Error body the server returns on non-2xx responses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

impl HttpRegistry {
    /// Create a new client
    pub fn new(server: String, project: String, token: String) -> Self {
        Self {
            server,
            project,
            token,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Registry for HttpRegistry {
    async fn list_pushed_artifacts(
        &self,
        req: &ListPushedArtifactsRequest,
    ) -> Result<ListPushedArtifactsResponse, RegistryError> {
        let url = format!(
            "{}/v1/project/{}/app/{}/artifacts",
            self.server.trim_end_matches('/'),
            self.project,
            req.application
        );

        let mut query: Vec<(&str, String)> = vec![
            ("order_by", req.order.key.as_str().to_string()),
            ("desc", req.order.desc.to_string()),
        ];
        if let Some(ws) = &req.workspace {
            query.push(("workspace", ws.as_str().to_string()));
        }
        if let Some(limit) = req.order.limit {
            query.push(("limit", limit.to_string()));
        }

        debug!(%url, workspace = ?req.workspace, "querying registry");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .map(|b| b.message)
                .unwrap_or_default();
            return Err(RegistryError::Api {
                status: status.as_u16(),
                message: if message.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("unexpected response")
                        .to_string()
                } else {
                    message
                },
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(RegistryError::Decode)
    }
}
