//! Artifact subcommands.
//!
//! `wharf artifact list` queries the registry for pushed artifacts, orders
//! them most-recent-first, and renders one status table to stdout.

use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Subcommand, ValueEnum};
use tracing::debug;

use crate::config;
use crate::domain::{sort_start_desc, AppRef, OrderDirective, OrderKey, WorkspaceRef};
use crate::errors::{humanize, Reported};
use crate::output;
use crate::registry::{HttpRegistry, ListPushedArtifactsRequest, Registry};

/// Artifact-related subcommands
#[derive(Subcommand, Debug)]
pub enum ArtifactCommands {
    /// List artifacts pushed to the registry
    ///
    /// Lists the artifacts that are pushed to a registry. This does not
    /// list artifacts that are only part of local builds.
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// List artifacts in all workspaces for this application
    #[arg(long)]
    pub workspace_all: bool,

    /// Application to list artifacts for (overrides the configured default)
    #[arg(short, long)]
    pub app: Option<String>,

    #[command(flatten)]
    pub filter: FilterFlags,
}

/// Generic filter/order flags shared by listing commands.
#[derive(Args, Debug)]
pub struct FilterFlags {
    /// Field the server should order by (advisory hint)
    #[arg(long, value_enum, default_value_t = OrderByField::StartTime)]
    pub order_by: OrderByField,

    /// Ask the server for ascending order instead of descending
    #[arg(long)]
    pub asc: bool,

    /// Maximum number of records the server should return
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderByField {
    StartTime,
    CompleteTime,
}

impl FilterFlags {
    /// Assemble the order directive sent with the query.
    pub fn order_directive(&self) -> OrderDirective {
        OrderDirective {
            key: match self.order_by {
                OrderByField::StartTime => OrderKey::StartTime,
                OrderByField::CompleteTime => OrderKey::CompleteTime,
            },
            desc: !self.asc,
            limit: self.limit,
        }
    }
}

/// Resolve the workspace scope for a query.
///
/// `all == true` removes the scope entirely; otherwise the query is pinned
/// to the current workspace.
pub fn resolve_workspace(all: bool, current: &WorkspaceRef) -> Option<WorkspaceRef> {
    if all {
        None
    } else {
        Some(current.clone())
    }
}

/// Everything the list operation needs, passed explicitly so tests can
/// substitute a fake registry and capture the output.
pub struct ListContext<'a> {
    pub registry: &'a dyn Registry,
    pub app: AppRef,
    pub workspace: Option<WorkspaceRef>,
    pub order: OrderDirective,
}

/// Run the list operation: one query, one table (or one error message).
///
/// On query failure the humanized message is written to `ui` and the
/// `Reported` sentinel is returned, so the caller exits non-zero without
/// printing the error a second time.
pub async fn run_list(ctx: &ListContext<'_>, ui: &mut dyn io::Write) -> Result<()> {
    let request = ListPushedArtifactsRequest {
        application: ctx.app.clone(),
        workspace: ctx.workspace.clone(),
        order: ctx.order.clone(),
    };

    let response = match ctx.registry.list_pushed_artifacts(&request).await {
        Ok(response) => response,
        Err(err) => {
            let err = anyhow::Error::from(err);
            writeln!(ui, "{}", output::error_line(&humanize(&err)))?;
            return Err(Reported.into());
        }
    };

    // The server-side order hint is advisory; the client owns the final
    // presentation order.
    let mut artifacts = response.artifacts;
    sort_start_desc(&mut artifacts);

    debug!(count = artifacts.len(), "rendering artifact listing");

    let table = output::artifact_table(&artifacts, Utc::now());
    writeln!(ui, "{table}")?;

    Ok(())
}

/// Execute an artifact subcommand against the configured registry.
pub async fn execute(command: ArtifactCommands) -> Result<()> {
    match command {
        ArtifactCommands::List(args) => {
            let cfg = config::config()?;
            let project = cfg.require_project()?;
            let app = args
                .app
                .clone()
                .or_else(|| cfg.app.clone())
                .context("no application configured; pass --app or set WHARF_APP")?;

            let registry =
                HttpRegistry::new(cfg.server.clone(), project.to_string(), cfg.token.clone());
            let ctx = ListContext {
                registry: &registry,
                app: AppRef::new(app),
                workspace: resolve_workspace(args.workspace_all, &cfg.workspace),
                order: args.filter.order_directive(),
            };

            run_list(&ctx, &mut io::stdout()).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_all_unscopes_query() {
        let current = WorkspaceRef::new("staging");
        assert_eq!(resolve_workspace(true, &current), None);
    }

    #[test]
    fn test_default_scope_is_current_workspace() {
        let current = WorkspaceRef::new("staging");
        assert_eq!(
            resolve_workspace(false, &current),
            Some(WorkspaceRef::new("staging"))
        );
    }

    #[test]
    fn test_order_directive_from_flags() {
        let flags = FilterFlags {
            order_by: OrderByField::CompleteTime,
            asc: true,
            limit: Some(25),
        };

        let directive = flags.order_directive();
        assert_eq!(directive.key, OrderKey::CompleteTime);
        assert!(!directive.desc);
        assert_eq!(directive.limit, Some(25));
    }

    #[test]
    fn test_order_directive_defaults_descending() {
        let flags = FilterFlags {
            order_by: OrderByField::StartTime,
            asc: false,
            limit: None,
        };

        let directive = flags.order_directive();
        assert_eq!(directive.key, OrderKey::StartTime);
        assert!(directive.desc);
        assert_eq!(directive.limit, None);
    }
}
