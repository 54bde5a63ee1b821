use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use fix_client_profile::{document::Document, migration, report};

#[derive(Parser)]
#[command(
    name = "fix-client-profile",
    version,
    about = "Deduplicate the documents tab in ClientProfile.tsx"
)]
struct Cli {
    /// File to migrate
    #[arg(default_value = migration::DEFAULT_TARGET)]
    path: PathBuf,

    /// Locate every region and print the diff without writing
    #[arg(long)]
    dry_run: bool,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    fix_client_profile::init_logging(cli.verbose)?;

    let mut document = Document::load(&cli.path)
        .with_context(|| format!("Failed to load {}", cli.path.display()))?;
    let original = document.render();

    let migration_report = migration::apply(&mut document)
        .with_context(|| format!("Migration failed for {}", cli.path.display()))?;

    if cli.dry_run {
        print!("{}", report::render_diff(&original, &document.render()));
        info!("Dry run: {} left unmodified", cli.path.display());
        return Ok(());
    }

    document
        .save()
        .with_context(|| format!("Failed to write {}", cli.path.display()))?;
    print!("{}", report::render_summary(&migration_report, &cli.path));

    Ok(())
}
