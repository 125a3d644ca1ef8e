//! Randomized greedy chain builder.
//!
//! A trial picks a random seed booking and grows a single contiguous chain
//! from it. Each round first tries to append a booking whose pickup matches
//! the chain's back location, then tries to prepend one whose drop-off
//! matches the front location. Ties between several candidates are broken
//! uniformly at random.
//!
//! The number of rounds is the pool size at the start of the trial. A round
//! that extends neither end leaves the chain stable, so every later round
//! would be a no-op as well.
//!
//! # Complexity
//!
//! O(n²) per trial where n = number of bookings (two linear scans per round).

use rand::Rng;

use crate::matching::{backward_matches, forward_matches};
use crate::models::{Booking, Chain, Pool, TrialResult};

/// Runs one randomized chain-building trial.
///
/// Returns `None` if `bookings` is empty.
///
/// # Examples
///
/// ```
/// use u_chain::models::{Booking, Label};
/// use u_chain::constructive::build_chain;
/// use u_chain::random::create_rng;
///
/// let bookings = vec![
///     Booking::new(1, 23, 42),
///     Booking::new(2, 77, 45),
///     Booking::new(3, 42, 77),
/// ];
/// let mut rng = create_rng(42);
/// let trial = build_chain(&bookings, &mut rng).unwrap();
/// assert_eq!(trial.chain(), &[Label::Int(1), Label::Int(3), Label::Int(2)]);
/// assert_eq!(trial.leftover(), 0);
/// ```
pub fn build_chain<R: Rng>(bookings: &[Booking], rng: &mut R) -> Option<TrialResult> {
    if bookings.is_empty() {
        return None;
    }

    let seed = rng.random_range(0..bookings.len() as u64) as usize;
    let mut chain = Chain::seed(&bookings[seed]);
    let mut pool = Pool::without(bookings, seed);

    let rounds = pool.len();
    for _ in 0..rounds {
        let appended = extend_forward(&mut chain, &mut pool, rng);
        let prepended = extend_backward(&mut chain, &mut pool, rng);
        if !appended && !prepended {
            break;
        }
    }

    debug_assert!(chain.is_linked());
    Some(TrialResult::new(chain.ids(), pool.len()))
}

/// Appends one randomly chosen forward match to the chain.
///
/// Returns `false` (leaving both chain and pool untouched) if no pooled
/// booking starts where the chain ends.
pub fn extend_forward<'a, R: Rng>(
    chain: &mut Chain<'a>,
    pool: &mut Pool<'a>,
    rng: &mut R,
) -> bool {
    let matches = forward_matches(chain, pool);
    match pick(&matches, rng) {
        Some(pos) => {
            chain.push_back(pool.take(pos));
            true
        }
        None => false,
    }
}

/// Prepends one randomly chosen backward match to the chain.
///
/// Returns `false` (leaving both chain and pool untouched) if no pooled
/// booking ends where the chain starts.
pub fn extend_backward<'a, R: Rng>(
    chain: &mut Chain<'a>,
    pool: &mut Pool<'a>,
    rng: &mut R,
) -> bool {
    let matches = backward_matches(chain, pool);
    match pick(&matches, rng) {
        Some(pos) => {
            chain.push_front(pool.take(pos));
            true
        }
        None => false,
    }
}

/// Draws a pool position uniformly from the match list.
fn pick<R: Rng>(matches: &[usize], rng: &mut R) -> Option<usize> {
    if matches.is_empty() {
        return None;
    }
    let i = rng.random_range(0..matches.len() as u64) as usize;
    Some(matches[i])
}
