use crate::reports;
use clap::{Args, Subcommand};
use rigvisor::error::RigResult;
use rigvisor::storage::{KeyValueStore, Theme};

#[derive(Args, Debug, Clone)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub action: Option<ThemeAction>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ThemeAction {
    Show,
    Toggle,
    Set { theme: Theme },
}

/// Works on the store alone; no catalog is needed.
pub fn run(args: ThemeArgs, store: &mut dyn KeyValueStore) -> RigResult<()> {
    let theme = match args.action.unwrap_or(ThemeAction::Show) {
        ThemeAction::Show => Theme::load(store),
        ThemeAction::Toggle => Theme::toggle(store)?,
        ThemeAction::Set { theme } => {
            theme.save(store)?;
            theme
        }
    };
    reports::print_theme(theme);
    Ok(())
}
