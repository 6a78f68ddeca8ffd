// webgl-gunzip-cli/src/main.rs

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use webgl_gunzip_common::{decompress_manifest, survey_manifest, CONFIG};

#[derive(Parser)]
#[command(name = "webgl-gunzip")]
#[command(about = "Unpack the gzip-compressed artifacts of a Unity WebGL build", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decompress every manifest entry found in the build directory (default)
    Decompress,

    /// Show which manifest entries are present and what they unpack to
    List,
}

fn enter_build_dir() -> Result<()> {
    std::env::set_current_dir(&CONFIG.build_dir)
        .with_context(|| format!("failed to change into build directory {}", CONFIG.build_dir.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    enter_build_dir()?;
    let dir = Path::new(".");

    match cli.command.unwrap_or(Commands::Decompress) {
        Commands::Decompress => {
            let mut stdout = io::stdout().lock();
            let report = decompress_manifest(dir, &CONFIG.manifest, &mut stdout)?;
            stdout.flush()?;
            log::info!(
                "{} entries: {} decompressed ({} bytes), {} not found, {} failed",
                report.total_entries(),
                report.succeeded(),
                report.decompressed_bytes(),
                report.absent(),
                report.failed()
            );
        }

        Commands::List => {
            for (entry, present) in survey_manifest(dir, &CONFIG.manifest) {
                let status = if present { "present" } else { "missing" };
                println!("{:<30} {:<8} -> {}", entry.name(), status, entry.output_name());
            }
        }
    }

    Ok(())
}
