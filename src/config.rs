//! Configuration for the wharf CLI.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (WHARF_SERVER, WHARF_TOKEN, WHARF_PROJECT,
//!    WHARF_APP, WHARF_WORKSPACE)
//! 2. Config file (.wharf/config.yaml)
//! 3. Defaults (local server, "default" workspace)
//!
//! Config file discovery walks from the current directory up through its
//! parents, then falls back to ~/.wharf/config.yaml.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::WorkspaceRef;

const DEFAULT_SERVER: &str = "http://localhost:9701";
const DEFAULT_WORKSPACE: &str = "default";

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub server: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub app: Option<String>,
    #[serde(default)]
    pub workspace: Option<String>,
}

/// Resolved configuration after merging all sources
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Registry server base URL
    pub server: String,
    /// Bearer token for the registry API (may be empty for open servers)
    pub token: String,
    /// Project name, if configured
    pub project: Option<String>,
    /// Default application, if configured
    pub app: Option<String>,
    /// Current workspace
    pub workspace: WorkspaceRef,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl ResolvedConfig {
    /// Project name, or an error telling the operator how to set one.
    pub fn require_project(&self) -> Result<&str> {
        self.project.as_deref().context(
            "no project configured; set WHARF_PROJECT or add `project:` to .wharf/config.yaml",
        )
    }
}

/// Find config file by searching current directory and parents,
/// falling back to ~/.wharf/config.yaml
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".wharf").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    let home_config = dirs::home_dir()?.join(".wharf").join("config.yaml");
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

fn env_or(var: &str, fallback: Option<String>) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.is_empty()).or(fallback)
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let config_file = find_config_file();
    let file = match &config_file {
        Some(path) => load_config_file(path)?,
        None => ConfigFile::default(),
    };

    Ok(resolve(file, config_file))
}

/// Merge the file layer with environment variables and defaults
fn resolve(file: ConfigFile, config_file: Option<PathBuf>) -> ResolvedConfig {
    ResolvedConfig {
        server: env_or("WHARF_SERVER", file.server)
            .unwrap_or_else(|| DEFAULT_SERVER.to_string()),
        token: env_or("WHARF_TOKEN", file.token).unwrap_or_default(),
        project: env_or("WHARF_PROJECT", file.project),
        app: env_or("WHARF_APP", file.app),
        workspace: WorkspaceRef::new(
            env_or("WHARF_WORKSPACE", file.workspace)
                .unwrap_or_else(|| DEFAULT_WORKSPACE.to_string()),
        ),
        config_file,
    }
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}
