//! Configuration file support for siteverify.
//!
//! Loads optional `siteverify.toml` from the project root. Every field has a
//! default matching the CyberQRG suite layout, so the file is only needed
//! when a project deviates from it.

use serde::Deserialize;
use std::path::Path;

use crate::error::VerifyError;
use crate::types::AppRole;

pub const CONFIG_FILE_NAME: &str = "siteverify.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    pub apps: AppsConfig,
    pub links: LinksConfig,
    pub walk: WalkConfig,
    pub deps: DepsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppsConfig {
    /// Apps root, relative to the project root.
    pub dir: String,
    /// Published directory inside each app.
    pub public_dir: String,
    /// Subdirectories of the apps root that are not apps.
    pub reserved: Vec<String>,
    /// App that serves `/trust/` pages as `.html` files.
    pub primary: String,
    /// Apps whose `/trust/` links redirect to the primary app.
    pub satellites: Vec<String>,
}

impl Default for AppsConfig {
    fn default() -> Self {
        Self {
            dir: "apps".to_string(),
            public_dir: "public".to_string(),
            reserved: vec!["shared".to_string()],
            primary: "web".to_string(),
            satellites: vec!["sentinel".to_string(), "privacy".to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Path prefixes satisfied by `_redirects` rules in every app.
    pub redirected_prefixes: Vec<String>,
    pub trust_prefix: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            redirected_prefixes: vec!["/sentinel/".to_string(), "/privacy/".to_string()],
            trust_prefix: "/trust/".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Directory names skipped at any depth.
    pub skip_dirs: Vec<String>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            skip_dirs: ["node_modules", ".git", "dist", "build"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DepsConfig {
    /// Hosts an absolute URL may start with. Compared as prefixes of the
    /// text after `://`, case-insensitively.
    pub allowed_hosts: Vec<String>,
}

impl Default for DepsConfig {
    fn default() -> Self {
        Self {
            allowed_hosts: [
                "localhost",
                "127.0.0.1",
                "cyberqrgai.com",
                "sentinel.cyberqrgai.com",
                "privacy.cyberqrgai.com",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl VerifyConfig {
    /// Load config from `siteverify.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load_from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Load config from a specific path. Errors are returned, not swallowed.
    pub fn load_from_path(path: &Path) -> Result<Self, VerifyError> {
        let content = std::fs::read_to_string(path).map_err(|source| VerifyError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| VerifyError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn role_of(&self, app_name: &str) -> AppRole {
        if app_name == self.apps.primary {
            AppRole::Primary
        } else if self.apps.satellites.iter().any(|s| s == app_name) {
            AppRole::Satellite
        } else {
            AppRole::Other
        }
    }

    pub fn is_reserved(&self, dir_name: &str) -> bool {
        self.apps.reserved.iter().any(|r| r == dir_name)
    }
}
