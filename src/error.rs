use std::path::PathBuf;

use thiserror::Error;

/// The fetched content could not be decoded under any supported base64 variant.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("content is not base64: {0}")]
    NotBase64(#[source] base64::DecodeError),
}

/// The decoded document is not a valid Clash configuration.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to parse Clash YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to send request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP {code}: {status}")]
    Status { code: u16, status: String },

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Errors that end a run. Decode failures never reach this type, the
/// pipeline falls back to the raw text instead.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("error reading URL file {}: {source}", .path.display())]
    ReadUrlFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("URL file {} is empty", .0.display())]
    EmptyUrlFile(PathBuf),

    #[error("invalid subscription URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("error fetching content: {0}")]
    Fetch(#[from] FetchError),

    #[error("error parsing config: {0}")]
    Parse(#[from] ParseError),

    #[error("error marshaling YAML: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("error writing output {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}
