//! Instagrab - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use instagrab::{
    cli::Args,
    config::load_cookie_header,
    download::download_post,
    error::{exit_codes, Error, Result},
    extract::RegexExtractor,
    output::{
        print_banner, print_batch_stats, print_config_summary, print_error, print_info,
        print_warning,
    },
    PageClient,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::Startup(_) | Error::InvalidPrefix(_)
                | Error::UrlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Network(_) | Error::HttpStatus { .. } => {
                    ExitCode::from(exit_codes::NETWORK_ERROR as u8)
                }
                Error::Download(_) | Error::Io(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
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

    // Build configuration
    let config = args.into_config()?;

    // Load the cookie header once; a missing file means no Cookie header
    let cookie_header = load_cookie_header(&config.cookie_file)?;
    if cookie_header.is_some() {
        print_info(&format!(
            "Using cookies from {}",
            config.cookie_file.display()
        ));
    }

    print_config_summary(
        config.page_url.as_str(),
        &config.output_dir.display().to_string(),
        cookie_header.is_some(),
    );

    let client = PageClient::new(&config.user_agent, cookie_header)?;
    let extractor = RegexExtractor::new();

    let state = download_post(&client, &extractor, &config).await?;

    print_batch_stats(&state);

    if !state.failed.is_empty() {
        print_warning(&format!(
            "{} of {} media item(s) failed to download",
            state.failed.len(),
            state.found_count
        ));
        return Err(Error::Download(format!(
            "{} download(s) failed",
            state.failed.len()
        )));
    }

    Ok(())
}
