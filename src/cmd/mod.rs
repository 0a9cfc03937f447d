pub mod build;
pub mod cart;
pub mod categories;
pub mod parts;
pub mod shop;
pub mod theme;

use clap::Args;
use rigvisor::api::AppState;
use rigvisor::catalog::Category;
use rigvisor::error::{RigError, RigResult};
use rigvisor::storage::KeyValueStore;
use tracing::{info, warn};

/// How a command assembles the build it works on.
#[derive(Args, Debug, Clone, Default)]
pub struct BuildSelection {
    /// Prebuild id from prebuilds.json, applied before any picks
    #[arg(long)]
    pub prebuild: Option<String>,

    /// Part to select, as `category=id`; repeat for more slots
    #[arg(short, long = "pick", value_name = "CATEGORY=ID")]
    pub picks: Vec<String>,
}

pub fn parse_pick(raw: &str) -> RigResult<(Category, String)> {
    let (category, id) = raw
        .split_once('=')
        .ok_or_else(|| RigError::Config(format!("Pick '{}' must look like category=id", raw)))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(RigError::Config(format!("Pick '{}' has no part id", raw)));
    }
    Ok((Category::parse(category)?, id.to_string()))
}

impl BuildSelection {
    pub fn apply<S: KeyValueStore>(&self, state: &mut AppState<S>) -> RigResult<()> {
        if let Some(id) = &self.prebuild {
            let applied = state.apply_prebuild(id);
            if applied == 0 {
                warn!("Prebuild '{}' selected no parts", id);
            } else {
                info!("Prebuild '{}' selected {} parts", id, applied);
            }
        }
        for raw in &self.picks {
            let (category, id) = parse_pick(raw)?;
            state.select_compatible(category, &id)?;
        }
        Ok(())
    }
}
