//! Hosting-platform declaration files: `_headers` and `_redirects`.
//!
//! Checked per app, independently of the file walk. Only presence and
//! content are validated; the platform enforces them at serve time.

use std::fs;
use std::path::Path;

use crate::types::{App, Findings};

pub const HEADERS_FILE: &str = "_headers";
pub const REDIRECTS_FILE: &str = "_redirects";

pub const REQUIRED_HEADERS: [&str; 3] = [
    "X-Content-Type-Options: nosniff",
    "X-Frame-Options: DENY",
    "Referrer-Policy: strict-origin-when-cross-origin",
];

const CSP_HEADER: &str = "Content-Security-Policy";

fn read_declaration(path: &Path, findings: &mut Findings) -> Option<String> {
    match fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            findings.error(format!("Failed to process {}: {}", path.display(), e));
            None
        }
    }
}

pub fn check_headers(app: &App) -> Findings {
    let mut findings = Findings::new();
    let path = app.public_dir.join(HEADERS_FILE);
    if !path.exists() {
        findings.error(format!("Missing _headers file in {}", app.name));
        return findings;
    }
    let Some(content) = read_declaration(&path, &mut findings) else {
        return findings;
    };

    for header in REQUIRED_HEADERS {
        if !content.contains(header) {
            findings.error(format!(
                "Missing security header in {}/_headers: {}",
                app.name, header
            ));
        }
    }
    if !content.contains(CSP_HEADER) {
        findings.error(format!(
            "Missing Content-Security-Policy in {}/_headers",
            app.name
        ));
    }
    findings
}

pub fn check_redirects(app: &App) -> Findings {
    let mut findings = Findings::new();
    let path = app.public_dir.join(REDIRECTS_FILE);
    if !path.exists() {
        findings.error(format!("Missing _redirects file in {}", app.name));
        return findings;
    }
    let blank = read_declaration(&path, &mut findings).is_some_and(|c| c.trim().is_empty());
    if blank {
        findings.error(format!("Empty _redirects file in {}", app.name));
    }
    findings
}
