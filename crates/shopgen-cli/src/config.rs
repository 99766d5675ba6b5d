use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use shopgen_generate::GenerateOptions;
use shopgen_store::StoreOptions;

use crate::error::{CliError, CliResult};

/// Optional settings file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "shopgen.toml";

/// Contents of `shopgen.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShopgenConfig {
    #[serde(default)]
    pub generate: GenerateSettings,
    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateSettings {
    pub seed: Option<u64>,
    pub reference_date: Option<NaiveDate>,
    pub customers: Option<u64>,
    pub products: Option<u64>,
    pub orders: Option<u64>,
    pub max_attempts_row: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSettings {
    pub database_file: Option<String>,
    pub batch_size: Option<usize>,
}

impl GenerateSettings {
    /// Overlay the configured values on the engine defaults.
    pub fn to_options(&self, out_dir: PathBuf) -> CliResult<GenerateOptions> {
        let mut options = GenerateOptions {
            out_dir,
            ..GenerateOptions::default()
        };
        if let Some(seed) = self.seed {
            options.seed = seed;
        }
        if let Some(reference_date) = self.reference_date {
            options.reference_date = reference_date;
        }
        if let Some(customers) = self.customers {
            options.counts.customers = customers;
        }
        if let Some(products) = self.products {
            options.counts.products = products;
        }
        if let Some(orders) = self.orders {
            options.counts.orders = orders;
        }
        if let Some(max_attempts_row) = self.max_attempts_row {
            if max_attempts_row == 0 {
                return Err(CliError::InvalidConfig(
                    "generate.max_attempts_row must be at least 1".to_string(),
                ));
            }
            options.max_attempts_row = max_attempts_row;
        }
        Ok(options)
    }
}

impl StoreSettings {
    pub fn to_options(&self) -> CliResult<StoreOptions> {
        let mut options = StoreOptions::default();
        if let Some(database_file) = &self.database_file {
            if database_file.trim().is_empty() {
                return Err(CliError::InvalidConfig(
                    "store.database_file must not be empty".to_string(),
                ));
            }
            options.database_file = database_file.clone();
        }
        if let Some(batch_size) = self.batch_size {
            if batch_size == 0 {
                return Err(CliError::InvalidConfig(
                    "store.batch_size must be at least 1".to_string(),
                ));
            }
            options.batch_size = batch_size;
        }
        Ok(options)
    }
}

/// Read `shopgen.toml` from `dir`, falling back to defaults when absent.
pub fn load_config(dir: &Path) -> CliResult<ShopgenConfig> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok(ShopgenConfig::default());
    }

    let content = std::fs::read_to_string(&path)?;
    let config = toml::from_str(&content).map_err(|source| CliError::Config { path, source })?;
    Ok(config)
}
