//! Verification driver.
//!
//! Walks every app's public directory app by app, depth-first, and collects
//! findings as returned values. Nothing is global: each app yields its own
//! [`Findings`], which the caller may print before the next app starts.
//!
//! # Submodules
//!
//! - [`extract`] - `href`/`src` reference extraction
//! - [`links`] - reference classification and filesystem resolution
//! - [`theme`] - light-theme color warnings
//! - [`deps`] - external dependency errors
//! - [`platform`] - `_headers` / `_redirects` checks

pub mod deps;
pub mod extract;
pub mod links;
pub mod platform;
pub(crate) mod regexes;
pub mod theme;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::VerifyConfig;
use crate::error::VerifyError;
use crate::fs_utils::{discover_apps, matches_extension, site_files};
use crate::types::{App, Findings};

use deps::DependencyChecker;

const HTML_EXTENSIONS: [&str; 2] = ["html", "htm"];
const CSS_EXTENSIONS: [&str; 1] = ["css"];

/// Result of a full pass.
#[derive(Debug, Serialize)]
pub struct Report {
    pub ok: bool,
    pub apps: Vec<App>,
    #[serde(flatten)]
    pub findings: Findings,
}

impl Report {
    pub fn exit_code(&self) -> i32 {
        self.findings.exit_code()
    }
}

pub struct Verifier {
    config: VerifyConfig,
    apps_root: PathBuf,
    deps: DependencyChecker,
}

impl Verifier {
    /// `project_root` is where the apps directory (from config) lives.
    pub fn new(project_root: &Path, config: VerifyConfig) -> Self {
        let apps_root = project_root.join(&config.apps.dir);
        Self::with_apps_root(apps_root, config)
    }

    pub fn with_apps_root(apps_root: PathBuf, config: VerifyConfig) -> Self {
        Self {
            deps: DependencyChecker::new(&config.deps),
            apps_root,
            config,
        }
    }

    pub fn apps_root(&self) -> &Path {
        &self.apps_root
    }

    pub fn apps(&self) -> Result<Vec<App>, VerifyError> {
        discover_apps(&self.apps_root, &self.config)
    }

    /// Verify every app, calling `on_app` with each app's findings as soon as
    /// that app is done.
    pub fn run(&self, mut on_app: impl FnMut(&App, &Findings)) -> Result<Report, VerifyError> {
        let apps = self.apps()?;
        let mut findings = Findings::new();
        for app in &apps {
            tracing::info!(app = %app.name, role = ?app.role, "verifying app");
            let app_findings = self.verify_app(app);
            on_app(app, &app_findings);
            findings.merge(app_findings);
        }
        Ok(Report {
            ok: !findings.has_errors(),
            apps,
            findings,
        })
    }

    pub fn verify_app(&self, app: &App) -> Findings {
        let mut findings = Findings::new();
        if !app.public_dir.exists() {
            findings.error(format!("Missing public directory for {}", app.name));
            return findings;
        }

        findings.merge(platform::check_headers(app));
        findings.merge(platform::check_redirects(app));

        for entry in site_files(&app.public_dir, &self.config.walk.skip_dirs) {
            match entry {
                Ok(path) => findings.merge(self.verify_file(&path, app)),
                Err(err) => {
                    let path = err.path().unwrap_or(app.public_dir.as_path()).to_path_buf();
                    let reason = err
                        .io_error()
                        .map(ToString::to_string)
                        .unwrap_or_else(|| err.to_string());
                    findings.error(format!("Failed to process {}: {}", path.display(), reason));
                }
            }
        }
        findings
    }

    /// Dispatch one file by extension. Unknown extensions are ignored.
    pub fn verify_file(&self, path: &Path, app: &App) -> Findings {
        let is_html = matches_extension(path, &HTML_EXTENSIONS);
        let is_css = matches_extension(path, &CSS_EXTENSIONS);
        let mut findings = Findings::new();
        if !is_html && !is_css {
            return findings;
        }
        tracing::debug!(file = %path.display(), "checking file");

        let content = match fs::read(path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                findings.error(format!("Failed to process {}: {}", path.display(), e));
                return findings;
            }
        };

        if is_html {
            findings.extend(
                extract::extract_references(&content, path)
                    .filter_map(|reference| links::check_reference(&reference, app, &self.config)),
            );
        }
        findings.extend(theme::check_light_theme(&content, path));
        findings.extend(self.deps.check(&content, path));
        findings
    }
}
