//! Console and JSON rendering of verification results.
//!
//! Human output goes through [`Painter`] so `--color never` yields plain text.

use std::io::{self, Write};

use crate::colors::Painter;
use crate::types::{App, Finding, Findings};
use crate::verifier::Report;

const RULE_WIDTH: usize = 50;

pub struct ConsoleReporter<W: Write> {
    out: W,
    painter: Painter,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, painter: Painter) -> Self {
        Self { out, painter }
    }

    pub fn start(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "{}",
            self.painter.status_info("Starting site verification...")
        )
    }

    /// Per-app header followed by each finding recorded for that app.
    pub fn app_done(&mut self, app: &App, findings: &Findings) -> io::Result<()> {
        writeln!(self.out)?;
        let title = format!("Validating {}...", self.painter.path(&app.name));
        writeln!(self.out, "{}", self.painter.status_info(&title))?;
        for finding in findings.in_order() {
            let line = finding.to_string();
            let line = match finding {
                Finding::Error(_) => self.painter.status_error(&line),
                Finding::Warning(_) => self.painter.status_warn(&line),
            };
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    pub fn summary(&mut self, report: &Report) -> io::Result<()> {
        let findings = &report.findings;
        writeln!(self.out)?;
        writeln!(self.out, "{}", self.painter.dim(&"=".repeat(RULE_WIDTH)))?;
        writeln!(self.out, "{}", self.painter.status_info("Verification complete!"))?;

        if findings.is_clean() {
            let msg = format!("All checks passed across {} app(s)", report.apps.len());
            writeln!(self.out, "{}", self.painter.status_ok(&msg))?;
            return Ok(());
        }

        if findings.has_errors() {
            writeln!(self.out)?;
            writeln!(
                self.out,
                "{} {}",
                self.painter.number(findings.errors.len()),
                self.painter.error("error(s) found:")
            )?;
            for msg in &findings.errors {
                writeln!(self.out, "  {msg}")?;
            }
        }
        if !findings.warnings.is_empty() {
            writeln!(self.out)?;
            writeln!(
                self.out,
                "{} {}",
                self.painter.number(findings.warnings.len()),
                self.painter.warn("warning(s) found:")
            )?;
            for msg in &findings.warnings {
                writeln!(self.out, "  {msg}")?;
            }
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// A reader that stops early (`siteverify | head`) is not a failure of the run.
pub fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AppRole, ColorMode};
    use std::path::PathBuf;

    fn report(findings: Findings) -> Report {
        Report {
            ok: !findings.has_errors(),
            apps: vec![App {
                name: "web".to_string(),
                public_dir: PathBuf::from("apps/web/public"),
                role: AppRole::Primary,
            }],
            findings,
        }
    }

    fn render(findings: Findings) -> String {
        let mut reporter = ConsoleReporter::new(Vec::new(), Painter::new(ColorMode::Never));
        let report = report(findings);
        reporter
            .app_done(&report.apps[0], &report.findings)
            .expect("app");
        reporter.summary(&report).expect("summary");
        String::from_utf8(reporter.into_inner()).expect("utf8")
    }

    #[test]
    fn clean_run_says_all_passed() {
        let text = render(Findings::new());
        assert!(text.contains("[INFO] Validating web..."));
        assert!(text.contains("[OK] All checks passed"));
        assert!(!text.contains("error(s)"));
    }

    #[test]
    fn summary_lists_messages_by_severity() {
        let mut findings = Findings::new();
        findings.error("Missing _redirects file in web");
        findings.warning("Potential light theme color in a.css: color:\\s*white");
        let text = render(findings);

        assert!(text.contains("[ERROR] Missing _redirects file in web"));
        assert!(text.contains("[WARN] Potential light theme color"));
        assert!(text.contains("1 error(s) found:\n  Missing _redirects file in web"));
        assert!(text.contains("1 warning(s) found:"));
        assert!(!text.contains("All checks passed"));
    }

    #[test]
    fn app_lines_keep_recording_order() {
        let mut findings = Findings::new();
        findings.warning("Potential light theme color in index.html: color:\\s*white");
        findings.error("External dependency found in index.html: cdn\\.");
        let text = render(findings);
        let warn_at = text.find("[WARN]").expect("warn line");
        let error_at = text.find("[ERROR]").expect("error line");
        assert!(warn_at < error_at);
    }

    /// Writer whose reader has gone away.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn closed_reader_is_tolerated_but_other_errors_are_not() {
        let mut reporter = ConsoleReporter::new(ClosedPipe, Painter::new(ColorMode::Never));
        let err = reporter.start().expect_err("pipe closed");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(ignore_broken_pipe(Err(err)).is_ok());

        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        assert!(ignore_broken_pipe(Err(denied)).is_err());
    }

    #[test]
    fn json_flattens_findings() {
        let mut findings = Findings::new();
        findings.error("boom");
        let json = render_json(&report(findings)).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["ok"], false);
        assert_eq!(value["errors"][0], "boom");
        assert_eq!(value["apps"][0]["role"], "primary");
        assert!(value["warnings"].as_array().expect("array").is_empty());
    }
}
