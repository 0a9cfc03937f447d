use crate::reports;
use clap::{Args, Subcommand};
use rigvisor::api::AppState;
use rigvisor::catalog::Category;
use rigvisor::error::RigResult;
use rigvisor::storage::KeyValueStore;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct CartArgs {
    #[command(subcommand)]
    pub action: Option<CartAction>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CartAction {
    /// Show the cart (default)
    List,
    /// Add a catalog part
    Add { category: String, id: String },
    /// Remove the entry at a position shown by `list`
    Remove { index: usize },
    /// Empty the cart
    Clear,
}

pub fn run<S: KeyValueStore>(args: CartArgs, state: &mut AppState<S>) -> RigResult<()> {
    match args.action.unwrap_or(CartAction::List) {
        CartAction::List => {}
        CartAction::Add { category, id } => {
            let category = Category::parse(&category)?;
            state.add_to_cart(category, &id)?;
        }
        CartAction::Remove { index } => match state.remove_from_cart(index)? {
            Some(part) => info!("Removed {} from cart", part.name),
            None => warn!("No cart entry at position {}", index),
        },
        CartAction::Clear => {
            state.clear_cart()?;
            info!("Cart cleared");
        }
    }
    reports::print_cart(&state.cart);
    Ok(())
}
