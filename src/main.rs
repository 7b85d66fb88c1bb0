use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use tamboon::api::ReqwestClient;
use tamboon::config::Config;
use tamboon::donate::selectors::{all_donation, charities_with_amounts, is_home_loading};
use tamboon::donate::{CharityId, DonationRequest, HomeOrchestrator, OrchestratorSettings};
use tamboon::format::{AmountFormatter, NumberFormatter};
use tamboon::logging::init_tracing;
use tamboon::notify::TracingNotifier;
use tamboon::store::Store;

#[derive(Debug, Parser)]
#[command(name = "tamboon", version, about = "Browse charities and donate")]
struct Cli {
    /// Path to config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show every charity with the amount raised so far
    List,
    /// Donate to a charity
    Donate {
        #[arg(long)]
        charity: u64,
        #[arg(long)]
        amount: f64,
    },
}

fn load_config(cli: &Cli) -> Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
        config.validate()?;
    }
    Ok(config)
}

fn render(store: &Store, formatter: &dyn AmountFormatter) {
    if store.select(is_home_loading) {
        println!("Loading...");
        return;
    }
    println!("All donations: {}", formatter.format(store.select(all_donation)));
    for charity in store.select(charities_with_amounts) {
        println!(
            "  [{}] {} - {}",
            charity.id,
            charity.name,
            formatter.format(charity.amount)
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let store = Store::default();
    let formatter = Arc::new(NumberFormatter::from_config(&config.format));
    let orchestrator = HomeOrchestrator::new(
        store.clone(),
        Arc::new(ReqwestClient::new(&config.api)?),
        Arc::new(TracingNotifier),
        formatter.clone(),
        OrchestratorSettings::from_config(&config),
    );

    // Partial data is still worth showing.
    if let Err(err) = orchestrator.init_home_data().await {
        warn!(error = %err, "Showing partial data");
    }

    match cli.command {
        Command::List => render(&store, formatter.as_ref()),
        Command::Donate { charity, amount } => {
            let charity_id = CharityId::from(charity);
            let charity_name = store
                .snapshot()
                .charities
                .iter()
                .find(|c| c.id == charity_id)
                .map(|c| c.name.clone())
                .with_context(|| format!("unknown charity {}", charity_id))?;

            let receipt = orchestrator
                .submit_donation(DonationRequest {
                    charity_id,
                    charity_name,
                    amount,
                })
                .await?;
            if let Some(id) = receipt.id {
                println!("Payment {} recorded", id);
            }
            render(&store, formatter.as_ref());
        }
    }

    Ok(())
}
