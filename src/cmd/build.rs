use super::BuildSelection;
use crate::reports;
use clap::Args;
use rigvisor::api::AppState;
use rigvisor::catalog::Category;
use rigvisor::error::RigResult;
use rigvisor::export;
use rigvisor::storage::KeyValueStore;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    #[command(flatten)]
    pub selection: BuildSelection,

    /// Category to clear after picks are applied; repeatable
    #[arg(short, long = "remove", value_name = "CATEGORY")]
    pub removals: Vec<String>,

    /// Write a plain-text summary (default name: rigvisor-build.txt)
    #[arg(long, num_args = 0..=1, default_missing_value = export::EXPORT_FILE_NAME)]
    pub export: Option<PathBuf>,

    /// Push every selected part into the cart
    #[arg(long, default_value_t = false)]
    pub add_to_cart: bool,
}

pub fn run<S: KeyValueStore>(args: BuildArgs, state: &mut AppState<S>, debug: bool) -> RigResult<()> {
    args.selection.apply(state)?;
    for raw in &args.removals {
        let category = Category::parse(raw)?;
        state.remove(category);
    }

    reports::print_build(&state.build);
    reports::print_scores(&state.score_details(), debug);

    if let Some(path) = &args.export {
        export::export_to_file(&state.build, path)?;
    }

    if args.add_to_cart {
        let added = state.add_build_to_cart()?;
        info!("All parts added to cart! ({} items)", added);
        reports::print_cart(&state.cart);
    }
    Ok(())
}
