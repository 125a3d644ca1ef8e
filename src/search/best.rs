//! Best result accumulator.

use crate::models::{Label, TrialResult};

/// The best chain seen across trials.
///
/// Starts as a sentinel (empty chain, leftover one more than the input
/// size) that any real trial improves on. Only a strictly lower leftover
/// replaces the current best, so ties keep the earliest result.
///
/// # Examples
///
/// ```
/// use u_chain::models::{Label, TrialResult};
/// use u_chain::search::BestResult;
///
/// let mut best = BestResult::sentinel(3);
/// assert!(best.is_sentinel());
///
/// assert!(best.offer(TrialResult::new(vec![Label::Int(1)], 2)));
/// assert!(!best.offer(TrialResult::new(vec![Label::Int(2)], 2)));
/// assert_eq!(best.chain(), &[Label::Int(1)]);
/// assert!(!best.is_sentinel());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestResult {
    chain: Vec<Label>,
    leftover: usize,
    input_size: usize,
}

impl BestResult {
    /// Creates the sentinel for an input of `input_size` bookings.
    pub fn sentinel(input_size: usize) -> Self {
        Self {
            chain: Vec::new(),
            leftover: input_size + 1,
            input_size,
        }
    }

    /// Replaces the best result if `trial` has strictly fewer leftovers.
    ///
    /// Returns `true` on improvement.
    pub fn offer(&mut self, trial: TrialResult) -> bool {
        if trial.leftover() >= self.leftover {
            return false;
        }
        self.leftover = trial.leftover();
        self.chain = trial.into_chain();
        true
    }

    /// Returns `true` if no trial has been recorded.
    pub fn is_sentinel(&self) -> bool {
        self.leftover > self.input_size
    }

    /// Ids of the best chain in order.
    pub fn chain(&self) -> &[Label] {
        &self.chain
    }

    /// Consumes the result, returning the chain ids.
    pub fn into_chain(self) -> Vec<Label> {
        self.chain
    }

    /// Leftover count (relocations) of the best chain.
    pub fn leftover(&self) -> usize {
        self.leftover
    }

    /// Number of bookings the search ran over.
    pub fn input_size(&self) -> usize {
        self.input_size
    }
}
