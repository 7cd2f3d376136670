// src/main.rs
//
// Prices the reference at-the-money option (S0=100, K=100, T=1, r=5%,
// sigma=20%) and prints the call and put to stdout. Logs go to stderr.

use anyhow::Result;
use bsm_pricer::{format_report, price_with_config, PricerConfig};
use log::debug;

fn main() -> Result<()> {
    env_logger::init();

    let config = PricerConfig::default();
    debug!("pricing {:?}", config.inputs);

    let result = price_with_config(&config)?;
    println!("{}", format_report(&result, &config.display));

    Ok(())
}
