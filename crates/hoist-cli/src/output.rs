//! Terminal output for command results.
//!
//! Status lines (`✓ valid`, `⚠ ...`) respect `--quiet`; [`OutputManager::data`]
//! is reserved for what the user asked to see (a manifest, a JSON report, a
//! config value) and is always written.

use std::io;

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Kind of status line; selects the symbol and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Warning,
    Heading,
}

/// Writes command results to stdout.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Requested output; written even with `--quiet`.
    pub fn data(&self, text: &str) -> io::Result<()> {
        self.term.write_str(text)?;
        if !text.ends_with('\n') {
            self.term.write_line("")?;
        }
        Ok(())
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Warning, msg)
    }

    pub fn header(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Heading, msg)
    }

    /// Indented `key: value` line under a status line.
    pub fn detail(&self, key: &str, value: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let key = if self.no_color {
            key.to_owned()
        } else {
            key.dimmed().to_string()
        };
        self.term.write_line(&format!("  {key}: {value}"))
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    fn status(&self, tone: Tone, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.styled(tone, msg))
    }

    fn styled(&self, tone: Tone, msg: &str) -> String {
        let symbol = match tone {
            Tone::Success => "\u{2713} ", // ✓
            Tone::Warning => "\u{26a0} ", // ⚠
            Tone::Heading => "",
        };
        if self.no_color {
            return format!("{symbol}{msg}");
        }
        match tone {
            Tone::Success => format!("{}{}", symbol.green().bold(), msg.green()),
            Tone::Warning => format!("{}{}", symbol.yellow().bold(), msg.yellow()),
            Tone::Heading => msg.cyan().bold().to_string(),
        }
    }
}
