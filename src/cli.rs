use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::generator::OutputMode;

/// Fetch a base64 encoded Clash subscription and merge it with built-in defaults
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "base64-subscription-config", version, about, long_about = None)]
pub struct Args {
    /// File containing the subscription URL
    #[arg(value_name = "URL_FILE")]
    pub url_file: PathBuf,

    /// Output file path (default: stdout)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Merge with the defaults and pretty print; `-pretty=false` emits the decoded document as is
    #[arg(
        long,
        value_name = "BOOL",
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub pretty: bool,
}

impl Args {
    /// Parse arguments, accepting Go style single-dash long flags such as
    /// `-output out.yaml` and `-pretty=false` next to the usual `--output`.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Args::try_parse_from(normalize_flags(args))
    }

    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from(self.pretty)
    }
}

/// Rewrite `-name` and `-name=value` into `--name` / `--name=value`.
///
/// Single-letter short flags, a lone `-` and everything after a literal
/// `--` are passed through untouched. The first item is the program name.
fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut options_done = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(index, arg)| {
            if index == 0 || options_done {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                options_done = true;
                return arg;
            }
            let name = text.split('=').next().unwrap_or(text);
            if name.starts_with('-') && !name.starts_with("--") && name.len() > 2 {
                let mut long = OsString::from("-");
                long.push(text);
                return long;
            }
            arg
        })
        .collect()
}
