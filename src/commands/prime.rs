//! @acp:module "Prime Command"
//! @acp:summary "Report whether a value would be persisted as prime"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::calculator::is_prime;

/// Options for the prime command
#[derive(Debug, Clone)]
pub struct PrimeOptions {
    pub value: i64,
}

/// Execute the prime command
pub fn execute_prime(options: PrimeOptions) -> Result<()> {
    if is_prime(options.value) {
        println!("{} {} is prime", style("✓").green(), options.value);
    } else {
        println!("{} {} is not prime", style("✗").red(), options.value);
    }
    Ok(())
}
