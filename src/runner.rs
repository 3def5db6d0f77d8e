use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tokio_util::sync::CancellationToken;

use crate::cli::Cli;
use subhunter::config::{FetchPolicy, ScanConfig};
use subhunter::discover::subdomain::SubdomainScanner;
use subhunter::output::finish_scan;
use subhunter::utils::read_target;

fn print_ascii_logo() {
    println!(r#"
              ____  _   _ ____  _   _ _   _ _   _ _____ _____ ____
             / ___|| | | | __ )| | | | | | | \ | |_   _| ____|  _ \
             \___ \| | | |  _ \| |_| | | | |  \| | | | |  _| | |_) |
              ___) | |_| | |_) |  _  | |_| | |\  | | | | |___|  _ <
             |____/ \___/|____/|_| |_|\___/|_| \_| |_| |_____|_| \_\

                      Passive Subdomain Finder v0.1.0
    "#);
}

fn init_logging(cli: &Cli) {
    // Keep reqwest/hyper at INFO so --debug shows our requests without transport noise.
    use tracing_subscriber::EnvFilter;
    let crate_level = if cli.debug { "debug" } else if cli.verbose { "info" } else { "warn" };
    let filter_str = format!("subhunter={level},reqwest=info,hyper=info,h2=info", level = crate_level);
    let env_filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .init();
}

/// Merge the config file (if any) with command line overrides.
fn build_config(cli: &Cli) -> anyhow::Result<ScanConfig> {
    let mut cfg = match &cli.config {
        Some(path) => ScanConfig::from_file(&PathBuf::from(path))?,
        None => ScanConfig::default(),
    };
    if let Some(t) = cli.timeout {
        cfg.request_timeout_secs = t;
    }
    if let Some(t) = cli.scan_timeout {
        cfg.scan_timeout_secs = t;
    }
    if cli.best_effort {
        cfg.fetch_policy = FetchPolicy::BestEffort;
    }
    if cli.dedup {
        cfg.dedup = true;
    }
    if let Some(out) = &cli.out {
        cfg.out_dir = PathBuf::from(out);
    }
    Ok(cfg)
}

/// Prompt for a domain and read one whitespace-delimited token.
fn prompt_target() -> anyhow::Result<String> {
    print!("Enter a domain: ");
    std::io::stdout().flush()?;
    Ok(read_target(std::io::stdin().lock())?)
}

pub async fn run_from_cli(cli: Cli) -> anyhow::Result<ExitCode> {
    init_logging(&cli);
    let cfg = build_config(&cli)?;

    print_ascii_logo();

    let target = match cli.target.clone() {
        Some(t) => t,
        None => prompt_target()?,
    };

    tracing::info!(
        target = %target,
        request_timeout = cfg.request_timeout_secs,
        scan_timeout = cfg.scan_timeout_secs,
        policy = ?cfg.fetch_policy,
        dedup = cfg.dedup,
        "Starting scan"
    );

    let scanner = SubdomainScanner::new(cfg.clone())?;

    let token = CancellationToken::new();
    let ctrl_c = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Querying sources for {}", target));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = scanner.scan_with_cancel(&target, token).await;
    spinner.finish_and_clear();

    let summary = finish_scan(&target, result, &cfg.out_dir);
    for line in &summary.lines {
        println!("{}", line);
    }
    Ok(summary.exit_code())
}
