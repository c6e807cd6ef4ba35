use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OutputMode {
    Human,
    Json,
}

/// How an app participates in cross-app `/trust/` routing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppRole {
    /// Owns the `/trust/*.html` pages.
    Primary,
    /// Redirects `/trust/` to the primary app.
    Satellite,
    Other,
}

/// One independently deployed static site.
#[derive(Clone, Debug, Serialize)]
pub struct App {
    pub name: String,
    pub public_dir: PathBuf,
    pub role: AppRole,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RefKind {
    Href,
    Src,
}

impl RefKind {
    pub fn attribute(&self) -> &'static str {
        match self {
            RefKind::Href => "href",
            RefKind::Src => "src",
        }
    }
}

/// A link or asset mention pulled out of markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    pub target: String,
    pub source_file: PathBuf,
    /// 1-based line of the attribute.
    pub line: usize,
    pub kind: RefKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Finding {
    /// Must be fixed; fails the run.
    Error(String),
    /// Advisory only.
    Warning(String),
}

impl Finding {
    pub fn message(&self) -> &str {
        match self {
            Finding::Error(msg) | Finding::Warning(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Finding::Error(_))
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Ordered, append-only error and warning sequences for a run (or part of one).
#[derive(Clone, Debug, Default, Serialize)]
pub struct Findings {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Both severities interleaved in the order they were recorded.
    #[serde(skip)]
    recorded: Vec<Finding>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, finding: Finding) {
        match &finding {
            Finding::Error(msg) => self.errors.push(msg.clone()),
            Finding::Warning(msg) => self.warnings.push(msg.clone()),
        }
        self.recorded.push(finding);
    }

    pub fn error(&mut self, msg: impl Into<String>) {
        self.push(Finding::Error(msg.into()));
    }

    pub fn warning(&mut self, msg: impl Into<String>) {
        self.push(Finding::Warning(msg.into()));
    }

    pub fn merge(&mut self, other: Findings) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.recorded.extend(other.recorded);
    }

    /// Every finding in recording order, errors and warnings interleaved.
    pub fn in_order(&self) -> &[Finding] {
        &self.recorded
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Warnings never fail the run.
    pub fn exit_code(&self) -> i32 {
        if self.has_errors() { 1 } else { 0 }
    }
}

impl Extend<Finding> for Findings {
    fn extend<I: IntoIterator<Item = Finding>>(&mut self, iter: I) {
        for finding in iter {
            self.push(finding);
        }
    }
}
