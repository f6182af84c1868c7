//! # RocketShoes Cart CLI
//!
//! Drives the cart store from the command line against a running storefront API, keeping
//! the cart in a local JSON file between runs.
//!
//! ```bash
//! rocketshoes-cart add 3
//! rocketshoes-cart update 3 2
//! rocketshoes-cart remove 3
//! rocketshoes-cart show
//! RUST_LOG=debug rocketshoes-cart --config cart.toml summary
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use rocketshoes_cart::cart_actor::UpdateProductAmount;
use rocketshoes_cart::config::CartConfig;
use rocketshoes_cart::lifecycle::CartSystem;
use rocketshoes_cart::model::ProductId;
use state_actor::tracing::setup_tracing;
use std::path::PathBuf;
use tracing::{info, Instrument};

#[derive(Parser)]
#[command(name = "rocketshoes-cart", version, about = "RocketShoes shopping cart")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the cart as JSON
    Show,
    /// Print line count, item count and total
    Summary,
    /// Add one unit of a product
    Add { id: u32 },
    /// Remove a product from the cart
    Remove { id: u32 },
    /// Set the amount of a product already in the cart
    Update {
        id: u32,
        #[arg(allow_hyphen_values = true)]
        amount: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing("warn");
    let cli = Cli::parse();

    let config = CartConfig::load(cli.config.as_deref()).context("loading configuration")?;
    let system = CartSystem::from_config(&config).context("building storefront client")?;
    let cart = system.cart_client.clone();

    let span = tracing::info_span!("cart_command");
    let outcome = async {
        match cli.command {
            Command::Show => cart.cart().await.map(|c| to_json(&c)),
            Command::Summary => cart.summary().await.map(|s| to_json(&s)),
            Command::Add { id } => cart.add_product(ProductId(id)).await.map(|c| to_json(&c)),
            Command::Remove { id } => cart
                .remove_product(ProductId(id))
                .await
                .map(|c| to_json(&c)),
            Command::Update { id, amount } => cart
                .update_product_amount(UpdateProductAmount {
                    product_id: ProductId(id),
                    amount,
                })
                .await
                .map(|c| to_json(&c)),
        }
    }
    .instrument(span)
    .await;

    drop(cart);
    system
        .shutdown()
        .await
        .map_err(anyhow::Error::msg)?;

    let output = outcome?;
    println!("{output}");
    info!("Done");
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}
