//! The `glyphgen` binary: scan a package for vector icons and export each
//! one as a standalone SVG file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use glyphgen::runner::{self, RunConfig};
use glyphgen::IconRegistry;

/// Export every vector icon in a package as standalone SVG files.
///
/// Unknown flags are tolerated rather than rejected so shared build
/// scripts can pass their common flag sets through unchanged.
#[derive(Parser, Debug)]
#[command(name = "glyphgen", version, about, ignore_errors = true)]
struct Cli {
    /// Namespace to scan for icon declarations.
    #[arg(long, default_value = runner::DEFAULT_PACKAGE)]
    package: String,

    /// Directory receiving one .svg file per icon.
    #[arg(long, default_value = runner::DEFAULT_OUT_DIR)]
    out: PathBuf,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let config = RunConfig {
        package: cli.package,
        out_dir: cli.out,
    };

    let mut registry = IconRegistry::new();
    glyphgen_icons::register(&mut registry);

    println!(
        "Generating SVGs from package: {} -> {}",
        config.package,
        config.out_dir.display()
    );

    match runner::run(&registry, &config) {
        Ok(summary) => {
            println!("{}", summary);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
