use std::path::{Path, PathBuf};

use shopgen_generate::{GenerationEngine, GenerationResult};
use shopgen_store::{
    Adapter, LoadSummary, PREVIEW_ROWS, ReportRow, SqliteAdapter, render_preview,
    resolve_row_set_paths,
};
use tracing::info;

use crate::config::ShopgenConfig;
use crate::error::CliResult;

/// Generate every row-set into `out_dir`.
pub fn run_generate(out_dir: PathBuf, config: &ShopgenConfig) -> CliResult<GenerationResult> {
    let options = config.generate.to_options(out_dir)?;
    let result = GenerationEngine::new(options).run()?;
    Ok(result)
}

/// Load the row-sets found in `base_dir` into the database file next to them.
///
/// All row-sets are located before the database file is created, so a
/// missing CSV leaves the directory untouched.
pub async fn run_load(base_dir: &Path, config: &ShopgenConfig) -> CliResult<(PathBuf, LoadSummary)> {
    let options = config.store.to_options()?;
    resolve_row_set_paths(base_dir)?;

    let db_path = base_dir.join(&options.database_file);
    let adapter = SqliteAdapter::create(&db_path, options).await?;
    adapter.create_tables().await?;
    let summary = adapter.load_row_sets(base_dir).await?;
    adapter.close().await;

    info!(path = %db_path.display(), tables = summary.tables.len(), "load finished");
    Ok((db_path, summary))
}

/// Run the order-line report against an existing database.
pub async fn run_report(db_path: &Path) -> CliResult<Vec<ReportRow>> {
    let adapter = SqliteAdapter::open_existing(db_path).await?;
    let rows = adapter.report().await?;
    adapter.close().await;
    Ok(rows)
}

/// Preview of the leading rows followed by the total row count.
pub fn format_report(rows: &[ReportRow]) -> String {
    format!(
        "{}{} rows returned.",
        render_preview(rows, PREVIEW_ROWS),
        rows.len()
    )
}

/// Absolute form of `path` for user-facing messages.
pub fn display_path(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
