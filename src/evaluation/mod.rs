//! Chain verification and relocation reporting.

mod evaluator;

pub use evaluator::{evaluate_chain, ChainEvaluator, ChainReport};
