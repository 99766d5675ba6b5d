use std::path::{Path, PathBuf};

use clap::Parser;
use shopgen_cli::{CliError, display_path, init_logging, load_config, run_load};

#[derive(Parser, Debug)]
#[command(
    name = "shopgen-load",
    version,
    about = "Load generated CSV row-sets into a SQLite database"
)]
struct Cli {
    /// Directory holding the CSV files; the database is written here too.
    #[arg(value_name = "BASE_DIR", default_value = ".")]
    base_dir: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging()?;

    let config = load_config(Path::new("."))?;
    let (db_path, summary) = run_load(&cli.base_dir, &config).await?;

    for table in &summary.tables {
        println!("Inserted {} rows into {}.", table.rows, table.table);
    }
    println!("SQLite database ready at {}", display_path(&db_path).display());
    Ok(())
}
