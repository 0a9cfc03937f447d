use crate::reports;
use rigvisor::api::AppState;
use rigvisor::error::RigResult;
use rigvisor::storage::KeyValueStore;

pub fn run<S: KeyValueStore>(state: &AppState<S>) -> RigResult<()> {
    reports::print_categories(&state.catalog);
    Ok(())
}
