// mensa-cli: shared utilities for CLI tools.

use std::io::{self, Read};
use std::path::Path;
use std::process;

use mensa_core::{Language, LanguageError};

/// Environment variable holding the default render language.
pub const LANG_ENV: &str = "MENSA_LANG";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "MENSA_LOG";

/// Log filter used when `MENSA_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Errors surfaced by the command-line tools.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Language(#[from] LanguageError),
    #[error("{flag} requires a value")]
    MissingValue { flag: String },
    #[error("failed to read {source_name}: {source}")]
    Io {
        source_name: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Install the `tracing` subscriber for a CLI tool.
///
/// Events go to stderr, filtered by `MENSA_LOG` (default `warn`).
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Parse a `--lang=CODE` or `-l CODE` argument from command line args.
///
/// Falls back to `MENSA_LANG`, then to German. Returns `(lang, remaining_args)`.
pub fn parse_lang(args: &[String]) -> Result<(Language, Vec<String>), CliError> {
    let mut lang = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--lang=") {
            lang = Some(val.parse::<Language>()?);
        } else if arg == "--lang" || arg == "-l" {
            let val = iter.next().ok_or_else(|| CliError::MissingValue { flag: arg.clone() })?;
            lang = Some(val.parse::<Language>()?);
        } else {
            remaining.push(arg.clone());
        }
    }

    let lang = match lang {
        Some(lang) => lang,
        None => default_lang()?,
    };
    Ok((lang, remaining))
}

/// Language from `MENSA_LANG`, or German if unset.
pub fn default_lang() -> Result<Language, LanguageError> {
    match std::env::var(LANG_ENV) {
        Ok(code) if !code.trim().is_empty() => code.parse(),
        _ => Ok(Language::default()),
    }
}

/// Read a whole file, or stdin if `path` is `None` or `-`.
pub fn read_input(path: Option<&str>) -> Result<String, CliError> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| CliError::Io {
                    source_name: "stdin".to_string(),
                    source,
                })?;
            Ok(buf)
        }
        Some(path) => std::fs::read_to_string(Path::new(path)).map_err(|source| CliError::Io {
            source_name: path.to_string(),
            source,
        }),
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
