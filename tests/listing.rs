//! Artifact Listing Integration Tests
//!
//! Drives the list operation end-to-end against a fake registry and an
//! in-memory output sink: render order, classification glyphs, the empty
//! table, and the query-failure path.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use wharf::cli::artifact::{resolve_workspace, run_list, ListContext};
use wharf::domain::{AppRef, OrderDirective, PushedArtifact, Status, StatusState, WorkspaceRef};
use wharf::errors::Reported;
use wharf::registry::{
    ListPushedArtifactsRequest, ListPushedArtifactsResponse, Registry, RegistryError,
};

/// Fake registry returning a canned response and recording the request.
struct FakeRegistry {
    artifacts: Vec<PushedArtifact>,
    fail_with: Option<(u16, String)>,
    seen: Mutex<Option<ListPushedArtifactsRequest>>,
}

impl FakeRegistry {
    fn returning(artifacts: Vec<PushedArtifact>) -> Self {
        Self {
            artifacts,
            fail_with: None,
            seen: Mutex::new(None),
        }
    }

    fn failing(status: u16, message: &str) -> Self {
        Self {
            artifacts: vec![],
            fail_with: Some((status, message.to_string())),
            seen: Mutex::new(None),
        }
    }

    fn seen_request(&self) -> ListPushedArtifactsRequest {
        self.seen.lock().unwrap().clone().expect("no query issued")
    }
}

#[async_trait]
impl Registry for FakeRegistry {
    async fn list_pushed_artifacts(
        &self,
        req: &ListPushedArtifactsRequest,
    ) -> Result<ListPushedArtifactsResponse, RegistryError> {
        *self.seen.lock().unwrap() = Some(req.clone());

        if let Some((status, message)) = &self.fail_with {
            return Err(RegistryError::Api {
                status: *status,
                message: message.clone(),
            });
        }

        Ok(ListPushedArtifactsResponse {
            artifacts: self.artifacts.clone(),
        })
    }
}

fn artifact(id: &str, state: StatusState, start: Option<String>, complete: Option<String>) -> PushedArtifact {
    PushedArtifact {
        id: id.to_string(),
        sequence: 0,
        workspace: WorkspaceRef::new("default"),
        component: "docker".to_string(),
        registry: "ecr".to_string(),
        status: Status {
            state,
            start_time: start,
            complete_time: complete,
        },
    }
}

fn context<'a>(registry: &'a FakeRegistry, workspace: Option<WorkspaceRef>) -> ListContext<'a> {
    ListContext {
        registry,
        app: AppRef::new("api"),
        workspace,
        order: OrderDirective::default(),
    }
}

async fn render(ctx: &ListContext<'_>) -> (anyhow::Result<()>, String) {
    let mut sink: Vec<u8> = Vec::new();
    let result = run_list(ctx, &mut sink).await;
    (result, String::from_utf8(sink).unwrap())
}

#[tokio::test]
async fn test_three_record_scenario() {
    let now = Utc::now();
    // Deliberately out of display order: the server hint is not trusted
    let registry = FakeRegistry::returning(vec![
        artifact(
            "push-r2",
            StatusState::Success,
            Some((now - Duration::hours(3)).to_rfc3339()),
            Some((now - Duration::hours(2)).to_rfc3339()),
        ),
        artifact("push-r3", StatusState::Error, None, None),
        artifact(
            "push-r1",
            StatusState::Running,
            Some((now - Duration::hours(1)).to_rfc3339()),
            None,
        ),
    ]);

    let ctx = context(&registry, Some(WorkspaceRef::new("default")));
    let (result, out) = render(&ctx).await;

    assert!(result.is_ok());

    // Running artifact first, then completed, then the never-started one
    let r1 = out.find("push-r1").unwrap();
    let r2 = out.find("push-r2").unwrap();
    let r3 = out.find("push-r3").unwrap();
    assert!(r1 < r2 && r2 < r3, "render order was not r1, r2, r3:\n{out}");

    // One glyph per lifecycle state
    assert!(out.contains('●'));
    assert!(out.contains('✔'));
    assert!(out.contains('✖'));

    // The never-started record renders blank time columns
    let r3_line = out
        .lines()
        .find(|line| line.contains("push-r3"))
        .unwrap();
    assert!(!r3_line.contains("ago"), "expected blank times: {r3_line}");
}

#[tokio::test]
async fn test_empty_result_renders_header_only() {
    let registry = FakeRegistry::returning(vec![]);
    let ctx = context(&registry, Some(WorkspaceRef::new("default")));

    let (result, out) = render(&ctx).await;

    assert!(result.is_ok());
    assert!(out.contains("ID"));
    assert!(out.contains("Workspace"));
    assert!(out.contains("Registry"));
    assert!(!out.contains("push-"));
}

#[tokio::test]
async fn test_query_failure_reports_once() {
    let registry = FakeRegistry::failing(500, "storage backend unavailable");
    let ctx = context(&registry, Some(WorkspaceRef::new("default")));

    let (result, out) = render(&ctx).await;

    // Humanized message in the output, no table
    assert!(out.contains("registry error (500): storage backend unavailable"));
    assert!(!out.contains("Workspace"));

    // Sentinel failure: the caller must exit non-zero without re-printing
    let err = result.unwrap_err();
    assert!(err.downcast_ref::<Reported>().is_some());
}

#[tokio::test]
async fn test_workspace_all_sends_unscoped_query() {
    let registry = FakeRegistry::returning(vec![]);
    let current = WorkspaceRef::new("staging");

    let ctx = context(&registry, resolve_workspace(true, &current));
    let (result, _) = render(&ctx).await;

    assert!(result.is_ok());
    assert_eq!(registry.seen_request().workspace, None);
}

#[tokio::test]
async fn test_default_query_is_workspace_scoped() {
    let registry = FakeRegistry::returning(vec![]);
    let current = WorkspaceRef::new("staging");

    let ctx = context(&registry, resolve_workspace(false, &current));
    let (result, _) = render(&ctx).await;

    assert!(result.is_ok());
    assert_eq!(
        registry.seen_request().workspace,
        Some(WorkspaceRef::new("staging"))
    );
}

#[tokio::test]
async fn test_order_hint_is_passed_through() {
    let registry = FakeRegistry::returning(vec![]);
    let mut ctx = context(&registry, None);
    ctx.order = OrderDirective {
        key: wharf::domain::OrderKey::CompleteTime,
        desc: false,
        limit: Some(5),
    };

    let (result, _) = render(&ctx).await;

    assert!(result.is_ok());
    let seen = registry.seen_request();
    assert_eq!(seen.order.key, wharf::domain::OrderKey::CompleteTime);
    assert!(!seen.order.desc);
    assert_eq!(seen.order.limit, Some(5));
}
