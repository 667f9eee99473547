//! hrgt: Human Readable Glossary generation CLI.
//!
//! # Usage
//!
//! ```text
//! hrgt [-c <config.yaml>] [-s <scopedir>] [-o <output>] [-m html|mustache]
//!      [-t <template>] [-v...] [<globpattern>]
//! ```
//!
//! `<globpattern>` selects MRG files relative to the scope directory. When it
//! is omitted the scope's default MRG (from `saf.yaml`) is used.

mod context;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use colored::Colorize;

use context::AppContext;
use hrgt_core::ConfigOptions;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "hrgt",
    version,
    about = "Generate a human-readable glossary document from machine-readable glossaries",
    long_about = None,
)]
pub struct Cli {
    /// Glob pattern selecting the MRG files to process.
    pub input: Option<String>,

    /// Path of the tool's YAML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base name of the output file (written as `<name>.html`).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Scope directory: base for inputs, `saf.yaml` and the output file.
    #[arg(short, long)]
    pub scopedir: Option<PathBuf>,

    /// Template file used by the `html` method [default: template.mustache].
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Rendering method: `html` (default) or `mustache`.
    #[arg(short, long)]
    pub method: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Flags that override config-file values.
    pub fn overrides(&self) -> ConfigOptions {
        ConfigOptions {
            method: self.method.clone(),
            scopedir: self.scopedir.clone(),
            input: self.input.clone(),
            output: self.output.clone(),
            template: self.template.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let ctx = match AppContext::load(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("E011 {e:#}");
            eprintln!("{} {e:#}", "E011".red());
            return ExitCode::FAILURE;
        }
    };

    run(&ctx).await
}

async fn run(ctx: &AppContext) -> ExitCode {
    match ctx.generator.generate().await {
        Ok(report) => {
            println!(
                "{} {} ({} entries → {})",
                "✓".green(),
                report,
                report.entry_count,
                report.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!(
                "{} Something unexpected went wrong while generating {}: {e}",
                "E012".red(),
                ctx.config().output_path().display()
            );
            ExitCode::FAILURE
        }
    }
}
