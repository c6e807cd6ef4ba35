//! Terminal color utilities for the verification report.
//!
//! Only stdout gets painted; tracing diagnostics on stderr are left to
//! `tracing-subscriber`'s own ANSI handling.

use std::io::IsTerminal;

use crate::types::ColorMode;

// ============================================================================
// ANSI Color Codes
// ============================================================================

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

pub const DIM: &str = "\x1b[2m";
pub const RESET: &str = "\x1b[0m";

pub const BRIGHT_CYAN: &str = "\x1b[96m";

// ============================================================================
// Color State
// ============================================================================

/// Determines if colors should be used based on ColorMode and terminal detection.
pub fn is_enabled(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

/// Colorizer passed to the report printers.
#[derive(Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            enabled: is_enabled(mode),
        }
    }

    /// Errors, broken links - RED
    pub fn error(&self, s: &str) -> String {
        self.wrap(s, RED)
    }

    /// Warnings, theme hits - YELLOW
    pub fn warn(&self, s: &str) -> String {
        self.wrap(s, YELLOW)
    }

    pub fn ok(&self, s: &str) -> String {
        self.wrap(s, GREEN)
    }

    pub fn info(&self, s: &str) -> String {
        self.wrap(s, BLUE)
    }

    /// App names, file paths - CYAN
    pub fn path(&self, s: &str) -> String {
        self.wrap(s, CYAN)
    }

    pub fn dim(&self, s: &str) -> String {
        self.wrap(s, DIM)
    }

    pub fn number(&self, n: impl std::fmt::Display) -> String {
        self.wrap(&n.to_string(), BRIGHT_CYAN)
    }

    // === Status indicators ===

    pub fn status_ok(&self, msg: &str) -> String {
        format!("{} {}", self.ok("[OK]"), msg)
    }

    pub fn status_warn(&self, msg: &str) -> String {
        format!("{} {}", self.warn("[WARN]"), msg)
    }

    pub fn status_error(&self, msg: &str) -> String {
        format!("{} {}", self.error("[ERROR]"), msg)
    }

    pub fn status_info(&self, msg: &str) -> String {
        format!("{} {}", self.info("[INFO]"), msg)
    }

    pub fn wrap(&self, s: &str, code: &str) -> String {
        if self.enabled {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}
