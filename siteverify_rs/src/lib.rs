//! # siteverify
//!
//! **Build-time verifier for static site suites.** Walks each app's published
//! directory and reports:
//!
//! - **Broken links** - `href`/`src` references that resolve to nothing
//! - **External dependencies** - off-site URLs and CDN mentions
//! - **Light theme colors** - white text/backgrounds in a dark-only suite
//! - **Platform files** - missing security headers, missing or empty redirects
//!
//! Warnings never fail a run; any error does.
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use siteverify::{config::VerifyConfig, verifier::Verifier};
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let verifier = Verifier::new(root, VerifyConfig::load(root));
//! let report = verifier.run(|app, found| {
//!     println!("{}: {} error(s)", app.name, found.errors.len());
//! })?;
//! std::process::exit(report.exit_code());
//! # Ok::<(), siteverify::error::VerifyError>(())
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! siteverify                 # verify ./apps/*/public
//! siteverify --root site     # verify site/apps/*/public
//! siteverify --json          # machine-readable report
//! ```

/// ANSI painting for the human report.
pub mod colors;

/// Optional `siteverify.toml` loading.
pub mod config;

/// Fatal error type.
pub mod error;

/// App discovery, the pruned file walk, and lexical path normalization.
pub mod fs_utils;

/// Console and JSON output.
pub mod report;

/// Shared data types: apps, references, findings.
pub mod types;

/// The checks and the driver that runs them.
pub mod verifier;

pub use types::{App, AppRole, ColorMode, Finding, Findings, OutputMode, RefKind, Reference};
pub use verifier::{Report, Verifier};
