use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use sheet_sync::config::{DEFAULT_PUBLICATIONS_GID, DEFAULT_SHEET_ID};
use sheet_sync::fetch::read_csv_file;
use sheet_sync::{normalize_column_name, HttpSheetSource, SheetSource, SheetTab, SyncConfig, Table};

#[derive(Parser, Debug)]
#[command(name = "preview_sheet")]
#[command(about = "Print a sheet tab the way the sync sees it")]
struct Args {
    /// Spreadsheet identifier
    #[arg(short, long, default_value = DEFAULT_SHEET_ID)]
    sheet_id: String,

    /// Tab identifier (gid)
    #[arg(short, long, default_value = DEFAULT_PUBLICATIONS_GID)]
    gid: String,

    /// Read this CSV file instead of fetching
    #[arg(long)]
    file: Option<PathBuf>,

    /// Maximum rows to print
    #[arg(short, long, default_value_t = 10)]
    rows: usize,

    /// Also list normalized column names
    #[arg(long)]
    normalized: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();

    let args = Args::parse();

    let table = load_table(&args)?;

    println!("{}", table.preview(args.rows));

    if args.normalized {
        println!();
        for header in &table.headers {
            println!("{:<30} -> {}", header, normalize_column_name(header));
        }
    }

    Ok(())
}

fn load_table(args: &Args) -> Result<Table> {
    if let Some(ref path) = args.file {
        if !path.exists() {
            anyhow::bail!("Local file does not exist: {}", path.display());
        }
        info!("Using local file: {}", path.display());
        return read_csv_file(path).context("Failed to read local CSV");
    }

    let config = SyncConfig::from_env()?;
    let tab = SheetTab::new(args.sheet_id.clone(), args.gid.clone());
    let source = remote_source(&config)?;

    source
        .fetch(&tab)
        .with_context(|| format!("Failed to fetch gid {}", tab.gid))
}

/// Always the export endpoint; a configured local directory is ignored
/// since `--file` covers local input.
fn remote_source(config: &SyncConfig) -> Result<HttpSheetSource> {
    if let Some(ref dir) = config.local_dir {
        info!("Ignoring local directory {} (use --file)", dir.display());
    }
    HttpSheetSource::new(config.export_base.clone(), config.timeout).context("Failed to set up HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_source_ignores_local_dir() {
        let config = SyncConfig {
            local_dir: Some(PathBuf::from("/definitely/not/here")),
            ..SyncConfig::default()
        };
        assert!(config.source().is_err());
        assert!(remote_source(&config).is_ok());
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["preview_sheet", "--sheet-id", "abc"]);
        assert_eq!(args.sheet_id, "abc");
        assert_eq!(args.gid, DEFAULT_PUBLICATIONS_GID);
        assert_eq!(args.rows, 10);
        assert!(args.file.is_none());
    }
}
