//! DhanRakshak CLI
//!
//! Usage:
//!   dhanrakshak serve --port 8080          Start the JSON API
//!   dhanrakshak emi --principal ... ...    One-shot calculators (emi, sip,
//!                                          fd, ppf, retirement, tax, savings)
//!   dhanrakshak topics [SLUG]              Tutorial catalog

mod cli;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use dhanrakshak::api::{
    self, EmiPayload, FdPayload, PpfPayload, RetirementPayload, SavingsPayload, SipPayload,
    TaxPayload,
};
use dhanrakshak::coach::CoachClient;
use dhanrakshak::core::{fraud_scenarios, get_topic, topic_overviews};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Serve { port } => {
            api::run_http_server(port, CoachClient::from_env()).await?;
        }
        Commands::Emi {
            principal,
            rate,
            tenure,
        } => print_json(&api::emi(EmiPayload {
            principal: Some(principal),
            rate: Some(rate),
            tenure: Some(tenure),
        })?)?,
        Commands::Sip {
            monthly_investment,
            return_rate,
            period,
        } => print_json(&api::sip(SipPayload {
            monthly_investment: Some(monthly_investment),
            return_rate: Some(return_rate),
            period: Some(period),
        })?)?,
        Commands::Fd {
            principal,
            rate,
            tenure,
            compounding,
        } => print_json(&api::fd(FdPayload {
            principal: Some(principal),
            rate: Some(rate),
            tenure: Some(tenure),
            compounding,
        })?)?,
        Commands::Ppf {
            yearly_investment,
            rate,
            period,
        } => print_json(&api::ppf(PpfPayload {
            yearly_investment: Some(yearly_investment),
            rate,
            period,
        })?)?,
        Commands::Retirement {
            current_age,
            retirement_age,
            monthly_savings,
            return_rate,
        } => print_json(&api::retirement(RetirementPayload {
            current_age: Some(current_age),
            retirement_age: Some(retirement_age),
            monthly_savings: Some(monthly_savings),
            return_rate: Some(return_rate),
        })?)?,
        Commands::Tax { annual_income } => print_json(&api::tax(TaxPayload {
            annual_income: Some(annual_income),
        })?)?,
        Commands::Savings {
            goal_amount,
            initial_amount,
            years,
        } => print_json(&api::savings(SavingsPayload {
            goal_amount: Some(goal_amount),
            initial_amount,
            years: Some(years),
        })?)?,
        Commands::Topics { slug: Some(slug) } => print_json(get_topic(&slug)?)?,
        Commands::Topics { slug: None } => print_json(&topic_overviews())?,
        Commands::Fraud => print_json(fraud_scenarios())?,
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
