//! End-to-End CLI Tests for siteverify
//!
//! Each test builds an apps tree in a temp dir and runs the binary against it.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const HEADERS: &str = "/*
  X-Content-Type-Options: nosniff
  X-Frame-Options: DENY
  Referrer-Policy: strict-origin-when-cross-origin
  Content-Security-Policy: default-src 'self'
";

fn siteverify() -> Command {
    let mut cmd = cargo_bin_cmd!("siteverify");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write(path: &Path, content: &str) {
    std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    std::fs::write(path, content).expect("write");
}

/// App with valid platform files and a page that links to itself.
fn healthy_app(root: &Path, name: &str) -> PathBuf {
    let public = root.join("apps").join(name).join("public");
    write(&public.join("_headers"), HEADERS);
    write(&public.join("_redirects"), "/trust/* https://cyberqrgai.com/trust/:splat 301\n");
    write(
        &public.join("index.html"),
        "<!doctype html>\n<link rel=\"stylesheet\" href=\"styles.css\">\n<a href=\"#main\">skip</a>\n",
    );
    write(&public.join("styles.css"), "body { background: #0a0a0a; color: #e0e0e0; }\n");
    public
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        siteverify()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--json"))
            .stdout(predicate::str::contains("--root"));
    }

    #[test]
    fn shows_version() {
        siteverify()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn zero_arguments_uses_current_directory() {
        let tmp = TempDir::new().expect("tmp");
        healthy_app(tmp.path(), "web");

        siteverify()
            .current_dir(tmp.path())
            .args(["--color", "never"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Validating web..."))
            .stdout(predicate::str::contains("[OK] All checks passed"));
    }

    #[test]
    fn missing_apps_dir_is_fatal() {
        let tmp = TempDir::new().expect("tmp");
        siteverify()
            .arg("--root")
            .arg(tmp.path())
            .assert()
            .code(2)
            .stderr(predicate::str::contains("cannot read apps directory"));
    }
}

// ============================================
// Verification Runs
// ============================================

mod verification {
    use super::*;

    #[test]
    fn broken_link_and_missing_redirects_fail_run() {
        let tmp = TempDir::new().expect("tmp");
        healthy_app(tmp.path(), "web");
        let sentinel = healthy_app(tmp.path(), "sentinel");
        std::fs::remove_file(sentinel.join("_redirects")).expect("rm redirects");
        let privacy = healthy_app(tmp.path(), "privacy");
        write(
            &privacy.join("index.html"),
            "<p>Policy</p>\n<a href=\"/missing.html\">gone</a>\n",
        );

        siteverify()
            .arg("--root")
            .arg(tmp.path())
            .args(["--color", "never"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Missing _redirects file in sentinel"))
            .stdout(predicate::str::contains("/missing.html (line 2)"))
            .stdout(predicate::str::contains("2 error(s) found:"));
    }

    #[test]
    fn warnings_alone_exit_zero() {
        let tmp = TempDir::new().expect("tmp");
        let web = healthy_app(tmp.path(), "web");
        write(&web.join("styles.css"), ".card { background: #fff; }\n");

        siteverify()
            .arg("--root")
            .arg(tmp.path())
            .args(["--color", "never"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[WARN] Potential light theme color"))
            .stdout(predicate::str::contains("1 warning(s) found:"));
    }

    #[test]
    fn trust_routes_follow_app_roles() {
        let tmp = TempDir::new().expect("tmp");
        let web = healthy_app(tmp.path(), "web");
        write(&web.join("trust/about.html"), "<h1>About</h1>\n");
        write(
            &web.join("index.html"),
            "<a href=\"/trust/about/\">about</a>\n<a href=\"/sentinel/\">sentinel</a>\n",
        );
        let sentinel = healthy_app(tmp.path(), "sentinel");
        write(&sentinel.join("index.html"), "<a href=\"/trust/about/\">about</a>\n");
        std::fs::create_dir_all(tmp.path().join("apps/shared")).expect("shared");

        siteverify()
            .arg("--root")
            .arg(tmp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("shared").not());
    }

    #[test]
    fn external_dependency_is_an_error() {
        let tmp = TempDir::new().expect("tmp");
        let web = healthy_app(tmp.path(), "web");
        write(
            &web.join("index.html"),
            "<script src=\"https://cdnjs.com/ajax/libs/lib.js\"></script>\n",
        );

        siteverify()
            .arg("--root")
            .arg(tmp.path())
            .args(["--color", "never"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("External dependency found in"))
            .stdout(predicate::str::contains("cdnjs\\.com"));
    }

    #[test]
    fn json_report() {
        let tmp = TempDir::new().expect("tmp");
        let web = healthy_app(tmp.path(), "web");
        std::fs::remove_file(web.join("_headers")).expect("rm headers");

        let output = siteverify()
            .arg("--root")
            .arg(tmp.path())
            .arg("--json")
            .output()
            .expect("run");
        assert_eq!(output.status.code(), Some(1));

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
        assert_eq!(value["ok"], false);
        assert_eq!(value["errors"][0], "Missing _headers file in web");
        assert_eq!(value["apps"][0]["name"], "web");
    }

    #[test]
    fn config_file_changes_roles_and_apps_dir() {
        let tmp = TempDir::new().expect("tmp");
        let public = tmp.path().join("sites/main/public");
        write(&public.join("_headers"), HEADERS);
        write(&public.join("_redirects"), "/ /index.html 200\n");
        write(&public.join("trust/security.html"), "<h1>Security</h1>\n");
        write(
            &public.join("index.html"),
            "<a href=\"/trust/security/\">security</a>\n",
        );
        write(
            &tmp.path().join("siteverify.toml"),
            "[apps]\ndir = \"sites\"\nprimary = \"main\"\n",
        );

        siteverify()
            .arg("--root")
            .arg(tmp.path())
            .assert()
            .success();
    }
}
