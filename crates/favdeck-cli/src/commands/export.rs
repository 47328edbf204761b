use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use favdeck_store::paths;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(long, conflicts_with = "stdout")]
    pub out: Option<PathBuf>,
    /// Write the export to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Debug, Serialize)]
struct ExportReport {
    format: String,
    count: usize,
    output: String,
}

pub fn export(ctx: &Context<'_>, args: ExportArgs) -> Result<()> {
    let favorites = ctx.store.favorites();

    if args.stdout {
        let data = favorites.export_json().with_context(|| "serialize favorites")?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", data)?;
        return Ok(());
    }

    let out = match args.out.or_else(|| ctx.config.export.path.clone()) {
        Some(path) => path,
        None => paths::export_path()?,
    };
    let count = favorites
        .export_to(&out)
        .with_context(|| format!("export favorites to {}", out.display()))?;

    if ctx.json {
        return print_json(&ExportReport {
            format: "json".to_string(),
            count,
            output: out.display().to_string(),
        });
    }

    println!("Exported {} favorites to {}", count, out.display());
    Ok(())
}
