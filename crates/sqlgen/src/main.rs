//! Jobly statement generator.
//!
//! Prints `{"sql": ..., "params": [...]}` for a filter or update request.

use clap::Parser;
use jobly_sqlgen::{CliConfig, init_logging, render};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let stmt = render(&config.command, config.resolver_config())?;
    info!(params = stmt.params.len(), "statement rendered");

    println!("{}", serde_json::to_string_pretty(&stmt)?);
    Ok(())
}
