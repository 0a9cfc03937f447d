use crate::error::{RigError, RigResult};
use crate::shop::DEFAULT_PAGE_SIZE;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub paths: Paths,
    #[command(flatten)]
    pub shop: ShopParams,
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paths {
    /// Directory holding the per-category catalog files and prebuilds.json
    #[arg(global = true, long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Storage file backing the cart and theme preference
    #[arg(global = true, long, default_value = ".rigvisor/storage.json")]
    pub storage: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            storage: PathBuf::from(".rigvisor/storage.json"),
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopParams {
    #[arg(global = true, long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
}

impl Default for ShopParams {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Reads a JSON settings file; omitted fields keep their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RigError::Config(format!("Failed to read settings file {}: {}", path.display(), e))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> RigResult<()> {
        if self.shop.page_size == 0 {
            return Err(RigError::Config("page_size must be at least 1".into()));
        }
        Ok(())
    }

    /// Copies values the user typed on the command line over `self`.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(paths.data_dir);
        update_if_present!(paths.storage);
        update_if_present!(shop.page_size);
    }
}
