//! Randomized chain construction.
//!
//! - [`build_chain`] — one trial: random seed booking, then bounded rounds of
//!   forward and backward greedy extension
//! - [`extend_forward`] / [`extend_backward`] — single half-round steps

mod greedy_chain;

pub use greedy_chain::{build_chain, extend_backward, extend_forward};
