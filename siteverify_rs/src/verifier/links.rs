//! Link resolution and classification.
//!
//! Rules are applied in order and the first match wins. Only the last two
//! ever touch the filesystem.

use std::path::{Path, PathBuf};

use crate::config::VerifyConfig;
use crate::fs_utils::normalize_lexically;
use crate::types::{App, AppRole, Finding, Reference};

/// Outcome of classifying one reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkClass {
    External,
    Anchor,
    Contact,
    /// Served by a `_redirects` rule rather than a file.
    Redirected,
    /// Primary-app `/trust/x/` satisfied by `trust/x.html`.
    TrustPage(PathBuf),
    /// Resolved to an existing file or directory.
    Present(PathBuf),
    Broken(PathBuf),
}

impl LinkClass {
    pub fn is_broken(&self) -> bool {
        matches!(self, LinkClass::Broken(_))
    }
}

pub fn classify(reference: &Reference, app: &App, config: &VerifyConfig) -> LinkClass {
    let target = reference.target.as_str();

    if target.starts_with("http") {
        return LinkClass::External;
    }
    if target.starts_with('#') {
        return LinkClass::Anchor;
    }
    if target.starts_with("mailto:") || target.starts_with("tel:") {
        return LinkClass::Contact;
    }
    if config
        .links
        .redirected_prefixes
        .iter()
        .any(|prefix| target.starts_with(prefix.as_str()))
    {
        return LinkClass::Redirected;
    }

    let trust_prefix = config.links.trust_prefix.as_str();
    if target.starts_with(trust_prefix) {
        match app.role {
            AppRole::Satellite => return LinkClass::Redirected,
            AppRole::Primary => {
                let page = trust_page_path(target, &app.public_dir);
                if page.exists() {
                    return LinkClass::TrustPage(page);
                }
                // Not terminal: a missing page still gets the ordinary check.
            }
            AppRole::Other => {}
        }
    }

    let resolved = resolve_target(target, &reference.source_file, &app.public_dir);
    if resolved.exists() {
        LinkClass::Present(resolved)
    } else {
        LinkClass::Broken(resolved)
    }
}

/// Classify and turn a broken reference into an Error.
pub fn check_reference(reference: &Reference, app: &App, config: &VerifyConfig) -> Option<Finding> {
    let class = classify(reference, app, config);
    tracing::debug!(
        link = %reference.target,
        file = %reference.source_file.display(),
        line = reference.line,
        attr = reference.kind.attribute(),
        ?class,
        "classified reference"
    );
    class.is_broken().then(|| {
        Finding::Error(format!(
            "Broken link in {}: {} (line {})",
            reference.source_file.display(),
            reference.target,
            reference.line
        ))
    })
}

/// `/trust/about/` -> `<public>/trust/about.html`
fn trust_page_path(target: &str, public_dir: &Path) -> PathBuf {
    let trimmed = target.strip_suffix('/').unwrap_or(target);
    let page = format!("{trimmed}.html");
    normalize_lexically(&public_dir.join(page.trim_start_matches('/')))
}

/// Root-relative targets resolve against the public dir, everything else
/// against the directory holding the source file.
fn resolve_target(target: &str, source_file: &Path, public_dir: &Path) -> PathBuf {
    let joined = match target.strip_prefix('/') {
        Some(rest) => public_dir.join(rest.trim_start_matches('/')),
        None => source_file
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(target),
    };
    normalize_lexically(&joined)
}
