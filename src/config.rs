//! Configuration for the converter CLI.
//!
//! Handles:
//! - Command-line argument parsing
//! - Marker dialect loading (which attributes mark slots and groups)

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Command-line arguments for the template converter
#[derive(Debug, Parser)]
#[command(name = "svg-tc")]
#[command(about = "Convert a draw.io SVG export into a web-component template")]
#[command(version)]
pub struct Args {
    /// SVG file exported by the diagram tool
    pub input: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Marker dialect TOML file
    #[arg(long, help = "TOML file naming the slot/group marker attributes")]
    pub dialect: Option<PathBuf>,

    /// Write single-line output instead of indented output
    #[arg(long)]
    pub compact: bool,

    /// Log level for the converter
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Marker attribute names recognized during conversion
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Dialect {
    /// Attribute naming a content slot
    pub slot_attribute: String,
    /// Attribute naming a visibility group
    pub group_attribute: String,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            slot_attribute: "data-slot".to_string(),
            group_attribute: "data-group".to_string(),
        }
    }
}

impl Dialect {
    /// Load a dialect from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading dialect file {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing dialect file {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Input SVG path
    pub input: PathBuf,
    /// Output path, or stdout when absent
    pub output: Option<PathBuf>,
    /// Dialect file explicitly set via command line
    pub dialect_file: Option<PathBuf>,
    /// Single-line output
    pub compact: bool,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        Ok(Config {
            input: args.input,
            output: args.output,
            dialect_file: args.dialect,
            compact: args.compact,
            log_level: args.log_level,
        })
    }

    /// Resolve the marker dialect.
    ///
    /// Precedence: explicit `--dialect` file, then `svg-tc/dialect.toml`
    /// under the user config directory, then built-in defaults.
    pub fn load_dialect(&self) -> Result<Dialect> {
        if let Some(path) = &self.dialect_file {
            return Dialect::from_file(path);
        }
        if let Some(config_dir) = dirs::config_dir() {
            let default_path = config_dir.join("svg-tc").join("dialect.toml");
            if default_path.exists() {
                return Dialect::from_file(&default_path);
            }
        }
        Ok(Dialect::default())
    }
}
