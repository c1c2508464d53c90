//! @acp:module "History Command"
//! @acp:summary "List and clear persisted prime results"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::store::JsonFileStore;

/// Options for the history command
#[derive(Debug, Clone)]
pub struct HistoryOptions {
    /// Output as JSON
    pub json: bool,
    /// Show only the most recent N entries
    pub limit: Option<usize>,
}

/// Execute the history command
pub fn execute_history(options: HistoryOptions, config: &Config) -> Result<()> {
    let store = JsonFileStore::new(config.store_path());
    let mut log = store.load()?;

    if let Some(limit) = options.limit {
        log.keep_last(limit);
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&log)?);
        return Ok(());
    }

    if log.is_empty() {
        println!("{} No persisted results in {}", style("→").cyan(), store.path().display());
        return Ok(());
    }

    println!("{}", style("Persisted results:").bold());
    for entry in &log.results {
        println!(
            "  {}  {}",
            style(entry.recorded_at.format("%Y-%m-%d %H:%M:%S")).dim(),
            entry.value
        );
    }
    println!("  Total: {}", log.len());

    Ok(())
}

/// Execute the clear command
pub fn execute_clear(config: &Config) -> Result<()> {
    let store = JsonFileStore::new(config.store_path());
    if store.clear()? {
        println!("{} Removed {}", style("✓").green(), store.path().display());
    } else {
        println!("{} Nothing to remove", style("→").cyan());
    }
    Ok(())
}
