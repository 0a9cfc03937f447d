use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use rigvisor::api::AppState;
use rigvisor::config::Config;
use rigvisor::error::RigResult;
use rigvisor::storage::FileStore;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "PC build configurator and parts shop", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    config: Config,

    /// JSON settings file; flags given on the command line win
    #[arg(global = true, long)]
    settings: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List categories and how many parts each has
    Categories,
    /// List parts for a category that fit the given build
    Parts(cmd::parts::PartsArgs),
    /// Assemble a build, score it, export it or send it to the cart
    Build(cmd::build::BuildArgs),
    /// Browse the storefront
    Shop(cmd::shop::ShopArgs),
    /// Inspect or change the saved cart
    Cart(cmd::cart::CartArgs),
    /// Show or change the saved theme preference
    Theme(cmd::theme::ThemeArgs),
}

fn resolve_config(cli: &Cli, matches: &clap::ArgMatches) -> RigResult<Config> {
    match &cli.settings {
        Some(path) => {
            info!("⚙️  Loading settings from: {}", path);
            let mut config = Config::load_from_file(path)?;
            config.merge_from_cli(&cli.config, matches);
            Ok(config)
        }
        None => Ok(cli.config.clone()),
    }
}

fn execute(cli: Cli, config: Config) -> RigResult<()> {
    let debug = cli.debug;
    match cli.command {
        Commands::Theme(args) => {
            let mut store = FileStore::open(&config.paths.storage);
            cmd::theme::run(args, &mut store)
        }
        Commands::Categories => cmd::categories::run(&AppState::open(config)?),
        Commands::Parts(args) => cmd::parts::run(args, &mut AppState::open(config)?),
        Commands::Build(args) => cmd::build::run(args, &mut AppState::open(config)?, debug),
        Commands::Shop(args) => cmd::shop::run(args, &AppState::open(config)?),
        Commands::Cart(args) => cmd::cart::run(args, &mut AppState::open(config)?),
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .init();

    let config = resolve_config(&cli, &matches).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    if let Err(e) = execute(cli, config) {
        error!("❌ {}", e);
        process::exit(1);
    }
}
