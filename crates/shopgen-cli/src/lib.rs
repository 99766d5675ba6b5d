//! Shared plumbing for the `shopgen-generate`, `shopgen-load`, and
//! `shopgen-report` binaries.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use commands::{display_path, format_report, run_generate, run_load, run_report};
pub use config::{CONFIG_FILE_NAME, GenerateSettings, ShopgenConfig, StoreSettings, load_config};
pub use error::{CliError, CliResult};
pub use logging::{LOG_FORMAT_ENV, init_logging};
