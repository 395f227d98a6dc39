//! Fetch, decode, parse, merge and emit a subscription.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use log::{info, warn};
use url::Url;

use crate::cli::Args;
use crate::error::AppError;
use crate::generator::{render_output, OutputMode};
use crate::parser::parse_clash_config;
use crate::utils::{decode_subscription, SubscriptionFetcher};

/// Read the subscription URL from `path`, ignoring surrounding whitespace.
pub fn read_subscription_url(path: &Path) -> Result<Url, AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::ReadUrlFile {
        path: path.to_path_buf(),
        source,
    })?;

    let url = content.trim();
    if url.is_empty() {
        return Err(AppError::EmptyUrlFile(path.to_path_buf()));
    }

    Url::parse(url).map_err(|source| AppError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}

/// Turn a fetched subscription body into the text to emit.
///
/// Bodies that are not base64 are treated as plain YAML. Parsing always
/// happens, so a malformed document fails in raw mode as well.
pub fn process_content(content: &str, mode: OutputMode) -> Result<String, AppError> {
    info!("Decoding base64 content...");
    let decoded = match decode_subscription(content) {
        Ok(decoded) => decoded,
        Err(e) => {
            warn!("Content is not base64 encoded, trying raw YAML... ({})", e);
            content.to_string()
        }
    };

    info!("Parsing Clash configuration...");
    let config = parse_clash_config(&decoded)?;
    info!(
        "Configuration loaded: {} proxies, {} groups, {} rules",
        config.proxy_count(),
        config.proxy_group_count(),
        config.rule_count()
    );

    render_output(&config, &decoded, mode).map_err(AppError::Serialize)
}

/// Write `content` to `output`, or to stdout when no path is given.
fn emit(output: Option<&Path>, content: &str) -> Result<(), AppError> {
    match output {
        Some(path) => {
            info!("Writing configuration to: {}", path.display());
            let write_err = |source| AppError::WriteOutput {
                path: path.to_path_buf(),
                source,
            };
            let mut file = File::create(path).map_err(write_err)?;
            file.write_all(content.as_bytes()).map_err(write_err)?;
            file.flush().map_err(write_err)
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(AppError::Stdout)
        }
    }
}

/// Run the whole conversion for one set of command line arguments.
pub fn run<F: SubscriptionFetcher>(args: &Args, fetcher: &F) -> Result<(), AppError> {
    info!("Reading URL from file: {}", args.url_file.display());
    let url = read_subscription_url(&args.url_file)?;

    info!("Fetching subscription from: {}", url);
    let content = fetcher.fetch(&url)?;

    let rendered = process_content(&content, args.output_mode())?;
    emit(args.output.as_deref(), &rendered)?;

    info!("Done!");
    Ok(())
}
