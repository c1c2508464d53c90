//! @acp:module "Calculator"
//! @acp:summary "Sums comma-delimited integers and persists prime results"
//! @acp:domain calculator
//! @acp:layer service
//! @acp:stability stable
//!
//! # Calculator
//!
//! The calculator turns text such as `"3,8, 10"` into a sum. When a
//! [`Store`] is attached and the sum is prime, the sum is written to the
//! store exactly once before it is returned.
//!
//! ## Usage
//!
//! ```rust
//! use strcalc::{Calculator, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let calc = Calculator::with_store(&store);
//!
//! assert_eq!(calc.sum("5,6").unwrap(), 11);
//! assert_eq!(store.values(), vec![11]);
//! ```

pub mod parse;
pub mod prime;

pub use parse::{parse_token, sum_tokens, tokenize, DELIMITER};
pub use prime::is_prime;

use crate::error::Result;
use crate::store::Store;

/// @acp:summary "Stateless string calculator with an optional injected store"
#[derive(Clone, Copy, Default)]
pub struct Calculator<'a> {
    store: Option<&'a dyn Store>,
}

impl<'a> Calculator<'a> {
    /// Calculator without persistence
    pub fn new() -> Self {
        Self { store: None }
    }

    /// Calculator that persists prime sums to `store`
    pub fn with_store(store: &'a dyn Store) -> Self {
        Self { store: Some(store) }
    }

    /// @acp:summary "Build from an optional store reference"
    pub fn from_option(store: Option<&'a dyn Store>) -> Self {
        Self { store }
    }

    /// Whether a store is attached
    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    /// @acp:summary "Sum comma-delimited integers, persisting prime results"
    ///
    /// Empty input yields 0 without touching the store. Any malformed token
    /// aborts the call before the store is consulted.
    pub fn sum(&self, input: &str) -> Result<i64> {
        if input.is_empty() {
            return Ok(0);
        }

        let total = sum_tokens(input)?;

        if let Some(store) = self.store {
            if is_prime(total) {
                store.persist(total)?;
            }
        }

        Ok(total)
    }

    /// Same as [`Calculator::sum`], treating `None` like empty input
    pub fn sum_opt(&self, input: Option<&str>) -> Result<i64> {
        match input {
            Some(text) => self.sum(text),
            None => Ok(0),
        }
    }
}

impl std::fmt::Debug for Calculator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("has_store", &self.has_store())
            .finish()
    }
}
