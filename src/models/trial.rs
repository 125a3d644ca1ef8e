//! Trial outcome type.

use super::Label;

/// Outcome of one randomized chain-building trial.
///
/// `leftover` is the number of bookings that could not be placed in the
/// chain, i.e. the relocations this ordering would require.
///
/// # Examples
///
/// ```
/// use u_chain::models::{Label, TrialResult};
///
/// let r = TrialResult::new(vec![Label::Int(1), Label::Int(3)], 1);
/// assert_eq!(r.chain().len(), 2);
/// assert_eq!(r.leftover(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialResult {
    chain: Vec<Label>,
    leftover: usize,
}

impl TrialResult {
    /// Creates a trial result.
    pub fn new(chain: Vec<Label>, leftover: usize) -> Self {
        Self { chain, leftover }
    }

    /// Ids of the chain in order.
    pub fn chain(&self) -> &[Label] {
        &self.chain
    }

    /// Consumes the result, returning the chain ids.
    pub fn into_chain(self) -> Vec<Label> {
        self.chain
    }

    /// Number of bookings left out of the chain.
    pub fn leftover(&self) -> usize {
        self.leftover
    }
}
