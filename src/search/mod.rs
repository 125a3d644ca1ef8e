//! Best-of-N trial selection.
//!
//! - [`BestResult`] — accumulator keeping the trial with the fewest leftovers
//! - [`best_of_n`] — sequential multi-start with one threaded RNG
//! - [`best_of_n_parallel`] — rayon multi-start with one RNG per trial
//! - [`ChainSearch`] — validated entry point used by the binary

mod best;
mod chain_search;
mod multi_start;

pub use best::BestResult;
pub use chain_search::{ChainSearch, DEFAULT_TRIALS};
pub use multi_start::{best_of_n, best_of_n_parallel};
