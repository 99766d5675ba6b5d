use std::path::{Path, PathBuf};

use clap::Parser;
use shopgen_cli::{CliError, format_report, init_logging, load_config, run_report};

#[derive(Parser, Debug)]
#[command(
    name = "shopgen-report",
    version,
    about = "Print the order-line report from a loaded database"
)]
struct Cli {
    /// Database file to query; defaults to `store.database_file`.
    #[arg(value_name = "DB_PATH")]
    db_path: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging()?;

    let db_path = match cli.db_path {
        Some(path) => path,
        None => {
            let config = load_config(Path::new("."))?;
            PathBuf::from(config.store.to_options()?.database_file)
        }
    };

    let rows = run_report(&db_path).await?;
    println!("{}", format_report(&rows));
    Ok(())
}
