use super::BuildSelection;
use crate::reports;
use clap::Args;
use rigvisor::api::AppState;
use rigvisor::catalog::Category;
use rigvisor::compat;
use rigvisor::error::RigResult;
use rigvisor::shop::SortMode;
use rigvisor::storage::KeyValueStore;

#[derive(Args, Debug, Clone)]
pub struct PartsArgs {
    /// Category to shop for (cpu, motherboard, gpu, ...)
    pub category: String,

    #[command(flatten)]
    pub selection: BuildSelection,

    #[arg(short, long, default_value = "")]
    pub search: String,

    #[arg(long, default_value = "default")]
    pub sort: SortMode,

    /// Also list parts hidden by the compatibility rules, with the failing rule
    #[arg(long, default_value_t = false)]
    pub show_hidden: bool,
}

pub fn run<S: KeyValueStore>(args: PartsArgs, state: &mut AppState<S>) -> RigResult<()> {
    let category = Category::parse(&args.category)?;
    args.selection.apply(state)?;

    let choices = state.part_choices(category, &args.search, args.sort);

    let hidden: Vec<_> = if args.show_hidden {
        state
            .catalog
            .parts(category)
            .iter()
            .map(|p| {
                let rules: Vec<&'static str> = compat::failed_rules(category, p, &state.build)
                    .iter()
                    .map(|r| r.name)
                    .collect();
                (p, rules)
            })
            .filter(|(_, rules)| !rules.is_empty())
            .collect()
    } else {
        Vec::new()
    };

    reports::print_part_choices(category, &choices, &hidden);
    Ok(())
}
