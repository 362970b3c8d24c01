//! # skipper
//!
//! Command-line access to the Skipper billing API.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables (or pass --config skipper.toml)
//! export SKIPPER_URI=https://api.skipper.dev
//! export SKIPPER_TOKEN=tok_...
//!
//! skipper products
//! skipper coupon-valid SAVE10
//! skipper checkout --price price_pro --company Acme --project rockets
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use skipper_client::{ClientConfig, SkipperClient};
use skipper_core::{CheckoutRequest, CreateApiKeyRequest};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "skipper", version, about = "Query the Skipper billing API")]
struct Cli {
    /// TOML config file with `uri` and `token`; defaults to SKIPPER_* env vars
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all prices
    Products,
    /// Show one price by external id
    Product { id: String },
    /// Look up a coupon
    Coupon { code: String },
    /// Check whether a coupon is redeemable
    CouponValid { code: String },
    /// Find a customer by company and project
    Customer {
        #[arg(long)]
        company: String,
        #[arg(long)]
        project: String,
    },
    /// Check whether the configured token is accepted
    TokenValid,
    /// Create a new API key
    CreateApiKey {
        #[arg(long, default_value = "*")]
        origin: String,
        #[arg(long, default_value = "new_api_key")]
        name: String,
        #[arg(long, default_value = "general")]
        purpose: String,
    },
    /// Start a checkout session and print the payment URL
    Checkout {
        /// External id of the price
        #[arg(long)]
        price: String,
        #[arg(long)]
        company: String,
        #[arg(long)]
        project: String,
        #[arg(long)]
        coupon: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::WARN.into())
                .from_env_lossy(),
        )
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match cli.config {
        Some(ref path) => ClientConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ClientConfig::from_env().context("loading config from environment")?,
    };
    let client = SkipperClient::new(config)?;
    debug!(config = ?client.config(), "client ready");

    match cli.command {
        Command::Products => print_json(&client.products()?),
        Command::Product { id } => match client.product(&id)? {
            Some(price) => print_json(&price),
            None => anyhow::bail!("no price with external id {}", id),
        },
        Command::Coupon { code } => print_json(&client.coupon(&code)?),
        Command::CouponValid { code } => print_json(&client.valid_coupon(&code)),
        Command::Customer { company, project } => {
            print_json(&client.customer_by_company_and_project(&company, &project))
        }
        Command::TokenValid => print_json(&client.token_valid()),
        Command::CreateApiKey {
            origin,
            name,
            purpose,
        } => {
            let request = CreateApiKeyRequest::new(origin, name, purpose)?;
            print_json(&client.create_api_key(&request)?)
        }
        Command::Checkout {
            price,
            company,
            project,
            coupon,
            email,
        } => {
            let mut request = CheckoutRequest::new(price, company, project)?;
            if let Some(coupon) = coupon {
                request = request.with_coupon(coupon);
            }
            if let Some(email) = email {
                request = request.with_email(email);
            }
            print_json(&client.checkout(&request)?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
