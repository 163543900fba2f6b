//! Feed Backup - CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use feed_backup::{
    cli::Args,
    config::{validate_config, Config},
    download::{run_backup, RunContext},
    error::{exit_codes, Error, Result},
    feed::parse_feed,
    fs::prepare_backup_dirs,
    net::HttpFetcher,
    output::{print_banner, print_config_summary, print_error, print_report, print_warning},
    video::{VideoResolver, YtDlpResolver},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::FeedNotFound(_) | Error::FeedParse(_) => {
                    ExitCode::from(exit_codes::FEED_ERROR as u8)
                }
                Error::Io(_) => ExitCode::from(exit_codes::SETUP_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    print_config_summary(
        &config.options.feed_path.display().to_string(),
        &config.options.backup_directory.display().to_string(),
        config.options.concurrency,
        config.options.download_videos,
    );

    // Read and parse the feed; both failures are fatal to the whole run
    let feed_path = &config.options.feed_path;
    let bytes = std::fs::read(feed_path)
        .map_err(|_| Error::FeedNotFound(feed_path.display().to_string()))?;
    let entries = parse_feed(&bytes)?;

    if entries.is_empty() {
        print_warning("Feed contains no entries, nothing to do");
    }

    // Prepare destination directories before any worker starts
    prepare_backup_dirs(&config)?;

    // One-time collaborator setup, outside the queue-draining loop
    let ctx = Arc::new(RunContext::from_config(&config));
    let fetcher = Arc::new(HttpFetcher::new()?);
    let resolver: Option<Arc<dyn VideoResolver>> = if config.options.download_videos {
        Some(Arc::new(YtDlpResolver::new()))
    } else {
        None
    };

    let report = run_backup(entries, ctx, fetcher, resolver).await;

    print_report(&report);

    Ok(())
}
