//! Showcase CLI: inspect and route the demo catalog.
//!
//! # Usage
//!
//! ```text
//! showcase list [--section <name>] [--json]
//! showcase show <name> [--section <name>]
//! showcase resolve <url>
//! showcase export [--section <name>] [--format yaml|json] [--out <dir>]
//! ```

mod catalog;
mod commands;
mod config;

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    export::ExportArgs, list::ListArgs, resolve::ResolveArgs, show::ShowArgs, Showcase,
};
use showcase_core::ManifestFormat;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "showcase",
    version,
    about = "Browse, resolve and export the component showcase catalog",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List demo entries across sections.
    List(ListArgs),

    /// Show one demo entry with item previews.
    Show(ShowArgs),

    /// Resolve a URL to a mini-app or named demo entry.
    Resolve(ResolveArgs),

    /// Export component-free catalog manifests.
    Export(ExportArgs),
}

// ---------------------------------------------------------------------------
// Shared format argument, parsed from CLI strings, converts to core type
// ---------------------------------------------------------------------------

/// Thin wrapper so clap can parse `ManifestFormat` from CLI args.
#[derive(Debug, Clone, Copy)]
pub struct FormatArg(pub ManifestFormat);

impl FromStr for FormatArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self(ManifestFormat::Yaml)),
            "json" => Ok(Self(ManifestFormat::Json)),
            other => Err(format!("unknown format '{other}'; expected: yaml, json")),
        }
    }
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<FormatArg> for ManifestFormat {
    fn from(f: FormatArg) -> Self {
        f.0
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let showcase = Showcase::load()?;
    match cli.command {
        Commands::List(args) => args.run(&showcase),
        Commands::Show(args) => args.run(&showcase),
        Commands::Resolve(args) => args.run(&showcase),
        Commands::Export(args) => args.run(&showcase),
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
