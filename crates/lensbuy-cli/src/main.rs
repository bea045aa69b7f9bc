mod browse;
mod order;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lensbuy_core::{AppConfig, ConfigError};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "lensbuy")]
#[command(about = "Contact-lens group-purchase ordering tools")]
struct Cli {
    /// Catalog file; overrides LENSBUY_CATALOG_PATH.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Evaluate promotional rule text at a quantity.
    Promo {
        /// Rule text, e.g. "買3送1,5盒折100".
        #[arg(long)]
        rules: String,
        /// Boxes on the line.
        #[arg(long, default_value_t = 1)]
        qty: u32,
    },
    /// List diopter options, optionally narrowed by range text.
    Diopters {
        /// Range text, e.g. "-1.00~-4.00, -6.00". Omit for the full list.
        #[arg(long, allow_hyphen_values = true)]
        range: Option<String>,
    },
    /// Browse the catalog: brands, then styles, then colors.
    Catalog {
        #[arg(long)]
        brand: Option<String>,
        #[arg(long, requires = "brand")]
        style: Option<String>,
    },
    /// Build a group order from a YAML draft.
    Order {
        /// Draft file listing the user, sub-buyers and their lines.
        #[arg(long)]
        draft: PathBuf,
        /// Append the order to the outbox after building it.
        #[arg(long)]
        submit: bool,
    },
    /// List a user's past orders from the outbox.
    History {
        #[arg(long)]
        user: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loaded = lensbuy_core::load_app_config();

    let log_level = loaded.as_ref().map_or("info", |config| config.log_level.as_str());
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    run(cli, loaded)
}

/// Dispatches a parsed command. `promo` and `diopters` only read their
/// arguments, so a bad environment does not stop them.
fn run(cli: Cli, loaded: Result<AppConfig, ConfigError>) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Promo { rules, qty } => return browse::run_promo(rules, *qty),
        Commands::Diopters { range } => return browse::run_diopters(range.as_deref()),
        _ => {}
    }

    let mut config = loaded?;
    if let Some(path) = cli.catalog {
        config.catalog_path = path;
    }
    tracing::debug!(env = %config.env, catalog = %config.catalog_path.display(), "config loaded");

    match cli.command {
        Commands::Catalog { brand, style } => {
            browse::run_catalog(&config, brand.as_deref(), style.as_deref())
        }
        Commands::Order { draft, submit } => order::run_order(&config, &draft, submit),
        Commands::History { user } => order::run_history(&config, &user),
        Commands::Promo { .. } | Commands::Diopters { .. } => Ok(()),
    }
}
