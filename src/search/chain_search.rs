//! Validated chain search entry point.

use crate::io::validate_bookings;
use crate::models::Booking;
use crate::random::create_rng;
use crate::{Error, Result};

use super::{best_of_n, best_of_n_parallel, BestResult};

/// Trial count used when none is configured.
pub const DEFAULT_TRIALS: usize = 500;

/// Configured best-of-N chain search.
///
/// Unlike [`best_of_n`], [`ChainSearch::run`] validates its input and
/// configuration before any randomized work and never returns the sentinel.
///
/// # Examples
///
/// ```
/// use u_chain::models::{Booking, Label};
/// use u_chain::search::ChainSearch;
///
/// let bookings = vec![
///     Booking::new(1, 23, 42),
///     Booking::new(2, 77, 45),
///     Booking::new(3, 42, 77),
/// ];
/// let best = ChainSearch::new(50).with_seed(42).run(&bookings).unwrap();
/// assert_eq!(best.chain(), &[Label::Int(1), Label::Int(3), Label::Int(2)]);
///
/// assert!(ChainSearch::new(0).run(&bookings).is_err());
/// assert!(ChainSearch::new(50).run(&[]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainSearch {
    trials: usize,
    seed: Option<u64>,
    threads: Option<usize>,
}

impl ChainSearch {
    /// Creates a sequential search running `trials` trials.
    pub fn new(trials: usize) -> Self {
        Self {
            trials,
            seed: None,
            threads: None,
        }
    }

    /// Fixes the random seed. Without one, a fresh seed is drawn and logged.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Runs trials on a rayon pool of `threads` workers (0 = rayon default).
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Configured trial count.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Configured seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Configured worker count, if running in parallel.
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Searches for the chain with the fewest leftover bookings.
    ///
    /// # Errors
    ///
    /// - [`Error::ZeroTrials`] if the trial count is zero
    /// - [`Error::EmptyInput`] or [`Error::DuplicateBooking`] for invalid input
    /// - [`Error::Other`] if the worker pool cannot be built
    pub fn run(&self, bookings: &[Booking]) -> Result<BestResult> {
        if self.trials == 0 {
            return Err(Error::ZeroTrials);
        }
        validate_bookings(bookings)?;

        let seed = self.seed.unwrap_or_else(rand::random);

        let best = match self.threads {
            None => {
                log::info!(
                    "search: start n={} trials={} seed={seed} mode=sequential",
                    bookings.len(),
                    self.trials
                );
                let mut rng = create_rng(seed);
                best_of_n(bookings, self.trials, &mut rng)
            }
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| Error::other(format!("rayon pool: {e}")))?;
                log::info!(
                    "search: start n={} trials={} seed={seed} mode=parallel threads={}",
                    bookings.len(),
                    self.trials,
                    pool.current_num_threads()
                );
                pool.install(|| best_of_n_parallel(bookings, self.trials, seed))
            }
        };

        if best.is_sentinel() {
            return Err(Error::other("search produced no trial result"));
        }

        log::info!(
            "search: complete n={} chain={} leftover={}",
            best.input_size(),
            best.chain().len(),
            best.leftover()
        );
        Ok(best)
    }
}

impl Default for ChainSearch {
    fn default() -> Self {
        Self::new(DEFAULT_TRIALS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Label;

    fn sample() -> Vec<Booking> {
        vec![
            Booking::new(1, 23, 42),
            Booking::new(2, 77, 45),
            Booking::new(3, 42, 77),
        ]
    }

    #[test]
    fn test_default_config() {
        let search = ChainSearch::default();
        assert_eq!(search.trials(), DEFAULT_TRIALS);
        assert!(search.seed().is_none());
        assert!(search.threads().is_none());
    }

    #[test]
    fn test_sequential_sample() {
        let best = ChainSearch::new(5)
            .with_seed(3)
            .run(&sample())
            .expect("valid search");
        assert_eq!(best.chain(), &[Label::Int(1), Label::Int(3), Label::Int(2)]);
        assert_eq!(best.leftover(), 0);
    }

    #[test]
    fn test_parallel_sample() {
        let best = ChainSearch::new(5)
            .with_seed(3)
            .with_threads(2)
            .run(&sample())
            .expect("valid search");
        assert_eq!(best.chain(), &[Label::Int(1), Label::Int(3), Label::Int(2)]);
    }

    #[test]
    fn test_unseeded_run_still_succeeds() {
        let best = ChainSearch::new(3).run(&sample()).expect("valid search");
        assert_eq!(best.leftover(), 0);
    }

    #[test]
    fn test_zero_trials_rejected() {
        let err = ChainSearch::new(0).run(&sample()).unwrap_err();
        assert!(matches!(err, Error::ZeroTrials));
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = ChainSearch::new(10).run(&[]).unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let bookings = vec![Booking::new(1, 1, 2), Booking::new(1, 2, 3)];
        let err = ChainSearch::new(10).run(&bookings).unwrap_err();
        assert!(matches!(err, Error::DuplicateBooking(Label::Int(1))));
    }
}
