use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use sizewise::cli::Cli;
use sizewise::config::{Config, SizeUnits};
use sizewise::scanner::{self, ScanResult};
use sizewise::tui::{self, Session};

const SPINNER_TEMPLATE: &str = "{spinner} {msg}";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(path) = cli.path.as_deref() else {
        println!("{}", Cli::command().render_usage());
        std::process::exit(1);
    };

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    // Load configuration, then let flags override it
    let mut config = Config::load(cli.config.as_deref())?;
    if cli.no_color {
        config.tui.color = false;
    }
    if cli.binary {
        config.tui.size_units = SizeUnits::Binary;
    }

    tracing::debug!(?config, "Loaded configuration");

    let show_progress = config.scanner.show_progress && !cli.quiet;
    let scan = scan_with_spinner(path, show_progress)?;

    tracing::info!(root = %scan.root.display(), "Starting TUI");
    tui::run(Session::new(scan), &config)?;

    Ok(())
}

fn scan_with_spinner(path: &Path, show_progress: bool) -> sizewise::Result<ScanResult> {
    if !show_progress {
        return scanner::scan(path);
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template(SPINNER_TEMPLATE) {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Scanning {}", path.display()));

    let result = scanner::scan_with_progress(path, |visited| {
        spinner.set_message(format!("Scanning {} ({} entries)", path.display(), visited));
    });

    spinner.finish_and_clear();
    result
}

fn init_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sizewise={}", level)));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Cannot open log file '{}'", path.display()))?;
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .with(filter)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    }

    Ok(())
}
