//! @acp:module "Sum Command"
//! @acp:summary "Sum comma-delimited input and persist prime results"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;
use serde::Serialize;

use crate::calculator::{is_prime, Calculator};
use crate::config::Config;
use crate::store::{JsonFileStore, Store};

/// Options for the sum command
#[derive(Debug, Clone)]
pub struct SumOptions {
    /// Input to sum (reads from stdin if None)
    pub input: Option<String>,
    /// Skip persistence even when the config enables it
    pub no_store: bool,
    /// Output as JSON
    pub json: bool,
}

/// Outcome of one sum invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SumReport {
    pub input: String,
    pub sum: i64,
    pub prime: bool,
    pub persisted: bool,
}

/// @acp:summary "Run one calculation against an optional store"
pub fn run_sum(input: &str, store: Option<&dyn Store>) -> crate::Result<SumReport> {
    let calc = Calculator::from_option(store);
    let sum = calc.sum(input)?;
    let prime = is_prime(sum);

    Ok(SumReport {
        input: input.to_string(),
        sum,
        prime,
        persisted: calc.has_store() && prime,
    })
}

/// Execute the sum command
pub fn execute_sum(options: SumOptions, config: &Config) -> Result<()> {
    let input = match options.input {
        Some(text) => text,
        None => {
            use std::io::Read;
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf.trim_end_matches(['\n', '\r']).to_string()
        }
    };

    let file_store = (config.store.enabled && !options.no_store)
        .then(|| JsonFileStore::new(config.store_path()));
    let store = file_store.as_ref().map(|s| s as &dyn Store);

    tracing::debug!(input = %input, persist = store.is_some(), "Summing input");

    let report = match run_sum(&input, store) {
        Ok(report) => report,
        Err(e) if e.is_format_error() => {
            eprintln!("{} {}", style("✗").red(), e);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.sum);
    if report.persisted {
        if let Some(store) = &file_store {
            println!(
                "{} Prime result saved to {}",
                style("✓").green(),
                store.path().display()
            );
        }
    } else if report.prime {
        println!("{} Prime result (not persisted)", style("→").cyan());
    }

    Ok(())
}
