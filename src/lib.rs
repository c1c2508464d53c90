#![forbid(unsafe_code)]

//! @acp:module "String Calculator Library"
//! @acp:summary "Sums comma-delimited integers and persists prime results"
//! @acp:domain calculator
//! @acp:layer api
//! @acp:stability stable
//!
//! # strcalc
//!
//! Parses text like `"3,8, 10"`, sums the integer tokens and hands prime
//! sums to an injected [`Store`].
//!
//! ## Features
//!
//! - **Whitespace tolerant**: tokens may carry surrounding whitespace
//! - **All-or-nothing**: one malformed token aborts the call, nothing is persisted
//! - **Pluggable persistence**: any `Fn(i64) -> Result<()>` is a store
//!
//! ## Example
//!
//! ```rust,no_run
//! use strcalc::{Calculator, JsonFileStore};
//!
//! fn main() -> strcalc::Result<()> {
//!     let store = JsonFileStore::new(".strcalc/results.json");
//!     let calc = Calculator::with_store(&store);
//!
//!     // 23 is prime, so it lands in the result log
//!     let sum = calc.sum("10, 10, 3")?;
//!     assert_eq!(sum, 23);
//!
//!     Ok(())
//! }
//! ```

pub mod calculator;
pub mod commands;
pub mod config;
pub mod error;
pub mod store;

// Re-exports
pub use calculator::{is_prime, Calculator};
pub use config::Config;
pub use error::{CalcError, Result};
pub use store::{JsonFileStore, MemoryStore, PersistedResult, ResultLog, Store};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
