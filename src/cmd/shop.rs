use crate::reports;
use clap::Args;
use rigvisor::api::AppState;
use rigvisor::error::RigResult;
use rigvisor::shop::{CategoryFilter, SortMode};
use rigvisor::storage::KeyValueStore;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct ShopArgs {
    /// Category id, or `all`
    #[arg(short, long, default_value = "all")]
    pub category: String,

    #[arg(short, long, default_value = "")]
    pub search: String,

    #[arg(long, default_value = "default")]
    pub sort: SortMode,

    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

pub fn run<S: KeyValueStore>(args: ShopArgs, state: &AppState<S>) -> RigResult<()> {
    let filter = CategoryFilter::parse(&args.category)?;
    let mut pager = state.shop(filter, &args.search, args.sort);

    if args.page != 1 && !pager.go_to(args.page) {
        warn!(
            "Page {} is out of range (1..={}); showing page 1",
            args.page,
            pager.total_pages()
        );
    }

    reports::print_shop_page(filter.title(), &pager);
    Ok(())
}
