//! Multi-start drivers over the randomized chain builder.

use rand::Rng;
use rayon::prelude::*;

use crate::constructive::build_chain;
use crate::models::Booking;
use crate::random::trial_rng;

use super::BestResult;

/// Runs `trials` chain-building trials and keeps the best one.
///
/// The RNG is threaded through every trial in order, so a run with more
/// trials repeats the trials of a shorter run with the same seed before
/// continuing. Returns the sentinel if `trials` is zero or `bookings` is
/// empty.
///
/// # Examples
///
/// ```
/// use u_chain::models::{Booking, Label};
/// use u_chain::search::best_of_n;
/// use u_chain::random::create_rng;
///
/// let bookings = vec![
///     Booking::new(1, 23, 42),
///     Booking::new(2, 77, 45),
///     Booking::new(3, 42, 77),
/// ];
/// let mut rng = create_rng(42);
/// let best = best_of_n(&bookings, 10, &mut rng);
/// assert_eq!(best.chain(), &[Label::Int(1), Label::Int(3), Label::Int(2)]);
/// assert_eq!(best.leftover(), 0);
///
/// let none = best_of_n(&bookings, 0, &mut rng);
/// assert!(none.is_sentinel());
/// ```
pub fn best_of_n<R: Rng>(bookings: &[Booking], trials: usize, rng: &mut R) -> BestResult {
    let mut best = BestResult::sentinel(bookings.len());

    for t in 0..trials {
        let Some(trial) = build_chain(bookings, rng) else {
            break;
        };
        let leftover = trial.leftover();
        if best.offer(trial) {
            log::debug!("search: improved trial={t} leftover={leftover}");
        }
    }

    best
}

/// Runs `trials` chain-building trials on the rayon pool and keeps the best.
///
/// Trial `t` owns an RNG derived from `(seed, t)`. Results are reduced by
/// lowest leftover, then lowest trial index, so the outcome does not depend
/// on how many threads ran the trials.
///
/// # Examples
///
/// ```
/// use u_chain::models::{Booking, Label};
/// use u_chain::search::best_of_n_parallel;
///
/// let bookings = vec![
///     Booking::new(1, 23, 42),
///     Booking::new(2, 77, 45),
///     Booking::new(3, 42, 77),
/// ];
/// let best = best_of_n_parallel(&bookings, 16, 7);
/// assert_eq!(best.chain(), &[Label::Int(1), Label::Int(3), Label::Int(2)]);
/// ```
pub fn best_of_n_parallel(bookings: &[Booking], trials: usize, seed: u64) -> BestResult {
    let winner = (0..trials)
        .into_par_iter()
        .filter_map(|t| {
            let mut rng = trial_rng(seed, t);
            build_chain(bookings, &mut rng).map(|trial| (t, trial))
        })
        .min_by_key(|(t, trial)| (trial.leftover(), *t));

    let mut best = BestResult::sentinel(bookings.len());
    if let Some((t, trial)) = winner {
        log::debug!("search: best trial={t} leftover={}", trial.leftover());
        best.offer(trial);
    }
    best
}
