//! Error humanization and the already-reported sentinel.

use thiserror::Error;

use crate::registry::RegistryError;

/// Sentinel error meaning the failure was already shown to the operator.
///
/// Command handlers return this after printing a humanized message
/// themselves; the top level must exit non-zero without printing again.
/// Match it with `anyhow::Error::downcast_ref::<Reported>()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("error already reported")]
pub struct Reported;

/// Render an error chain as a single operator-readable line.
///
/// Registry errors carry their own phrasing; anything else falls back to
/// the outermost message in the chain.
pub fn humanize(err: &anyhow::Error) -> String {
    for cause in err.chain() {
        if let Some(registry_err) = cause.downcast_ref::<RegistryError>() {
            return registry_err.to_string();
        }
    }
    err.to_string()
}
