//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Each command is in its own submodule.

pub mod history;
pub mod prime;
pub mod sum;

pub use history::{execute_clear, execute_history, HistoryOptions};
pub use prime::{execute_prime, PrimeOptions};
pub use sum::{execute_sum, run_sum, SumOptions, SumReport};
