use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use siteverify::colors::Painter;
use siteverify::config::VerifyConfig;
use siteverify::report::{ConsoleReporter, ignore_broken_pipe, render_json};
use siteverify::{ColorMode, OutputMode, Verifier};

/// Exit code for a run that could not start (bad config, no apps dir).
const EXIT_FATAL: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "siteverify")]
#[command(about = "Verify static site output: links, theme, external deps, platform headers")]
#[command(version)]
struct Args {
    /// Project root containing the apps directory
    #[arg(long, default_value = ".")]
    root: PathBuf,
    /// Apps directory (overrides `[apps] dir`; relative to --root)
    #[arg(long)]
    apps_dir: Option<PathBuf>,
    /// Config file (default: <root>/siteverify.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output machine-readable JSON
    #[arg(long)]
    json: bool,
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
    /// Log level for diagnostics on stderr (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();
}

fn load_config(args: &Args) -> Result<VerifyConfig> {
    match &args.config {
        Some(path) => VerifyConfig::load_from_path(path)
            .with_context(|| format!("loading --config {}", path.display())),
        None => Ok(VerifyConfig::load(&args.root)),
    }
}

fn run(args: &Args) -> Result<i32> {
    let config = load_config(args)?;
    let verifier = match &args.apps_dir {
        Some(dir) => Verifier::with_apps_root(args.root.join(dir), config),
        None => Verifier::new(&args.root, config),
    };
    tracing::debug!(apps_root = %verifier.apps_root().display(), "starting verification");

    let output = if args.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let report = match output {
        OutputMode::Json => {
            let report = verifier.run(|_, _| {})?;
            let json = render_json(&report)?;
            ignore_broken_pipe(writeln!(io::stdout().lock(), "{json}"))
                .context("writing report")?;
            report
        }
        OutputMode::Human => {
            // Keep verifying after stdout closes; the exit code comes from the findings.
            let mut console = ConsoleReporter::new(io::stdout().lock(), Painter::new(args.color));
            let mut written = console.start();
            let report = verifier.run(|app, found| {
                if written.is_ok() {
                    written = console.app_done(app, found);
                }
            })?;
            if written.is_ok() {
                written = console.summary(&report);
            }
            ignore_broken_pipe(written).context("writing report")?;
            report
        }
    };

    Ok(report.exit_code())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match run(&args) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("[siteverify] Error: {:#}", e);
            ExitCode::from(EXIT_FATAL)
        }
    }
}
