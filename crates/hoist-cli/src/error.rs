//! Errors surfaced by the `hoist` binary and their stderr rendering.
//!
//! Core failures keep their [`ErrorKind`]; an aggregate prints each wrapped
//! failure on its own line beneath the summary.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use hoist_core::error::{ErrorKind, HoistError};
use hoist_core::messages::{DefaultMessages, MessageCatalog};

pub use hoist_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `hoist-core` or `hoist-adapters`.
    #[error(transparent)]
    Core(#[from] HoistError),

    /// A configuration value could not be read or used.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Hints printed under the report.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core) => core.suggestions(),
            Self::ConfigError { .. } => vec![
                "Inspect the effective values with `hoist config list`".into(),
                "Locate the default file with `hoist config path`".into(),
            ],
            Self::IoError { .. } => {
                vec!["Check that the terminal or target file is writable".into()]
            }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Compatibility => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Process exit status; see the table in `main.rs`.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// First line of the report.  An aggregate shows only its summary here;
    /// its leaves are listed by [`Self::details`].
    pub fn headline(&self) -> String {
        match self {
            Self::Core(core) => DefaultMessages.render(core.kind(), &core.context()),
            other => other.to_string(),
        }
    }

    /// One line per wrapped failure, empty for single errors.
    pub fn details(&self) -> Vec<String> {
        match self {
            Self::Core(core) if core.is(ErrorKind::ServicesInvalid) => {
                core.leaves().iter().map(ToString::to_string).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Full stderr report: headline, leaves, suggestions, and (unless
    /// `verbose`) a hint about `-v`. `color` adds ANSI styling.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if color { style(text) } else { text.to_owned() }
        };

        let mut out = format!(
            "\n{} {}\n",
            paint("Error:", |t| t.red().bold().to_string()),
            paint(&self.headline(), |t| t.red().to_string()),
        );
        for detail in self.details() {
            out.push_str(&format!("  - {detail}\n"));
        }

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                let line = format!("Caused by: {err}");
                out.push_str(&format!("  {}\n", paint(&line, |t| t.dimmed().to_string())));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!(
                "\n{}\n",
                paint("Suggestions:", |t| t.yellow().bold().to_string())
            ));
            for suggestion in suggestions {
                out.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            let hint = "Use -v / --verbose for more details.";
            out.push_str(&format!("\n{}\n", paint(hint, |t| t.dimmed().to_string())));
        }

        out
    }

    /// Emit one structured event at a level matching the category.
    pub fn log(&self) {
        let code = self.exit_code();
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(exit_code = code, error = %self, "Command failed")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(exit_code = code, error = %self, "Command failed")
            }
        }
    }
}

/// Coarse grouping that decides the exit status and log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad manifest or bad arguments.
    UserError,
    /// No readable manifest at the given location.
    NotFound,
    Configuration,
    Internal,
}
