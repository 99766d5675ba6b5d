use std::path::{Path, PathBuf};

use clap::Parser;
use shopgen_cli::{CliError, display_path, init_logging, load_config, run_generate};

#[derive(Parser, Debug)]
#[command(
    name = "shopgen-generate",
    version,
    about = "Generate synthetic e-commerce CSV row-sets"
)]
struct Cli {
    /// Directory the CSV files are written to.
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging()?;

    let config = load_config(Path::new("."))?;
    let result = run_generate(cli.output_dir, &config)?;

    println!(
        "Synthetic datasets saved to {}",
        display_path(&result.out_dir).display()
    );
    Ok(())
}
