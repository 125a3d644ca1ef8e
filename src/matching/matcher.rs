//! Forward and backward match scans.

use crate::models::{Chain, Pool};

/// Returns every pool position whose pickup equals the chain's back location.
///
/// Positions are in pool order. An empty result means no booking can be
/// appended.
///
/// # Examples
///
/// ```
/// use u_chain::models::{Booking, Chain, Pool};
/// use u_chain::matching::forward_matches;
///
/// let bookings = vec![
///     Booking::new(1, 23, 42),
///     Booking::new(2, 77, 45),
///     Booking::new(3, 42, 77),
/// ];
/// let chain = Chain::seed(&bookings[0]);
/// let pool = Pool::without(&bookings, 0);
/// assert_eq!(forward_matches(&chain, &pool), vec![1]);
/// ```
pub fn forward_matches(chain: &Chain<'_>, pool: &Pool<'_>) -> Vec<usize> {
    let back = chain.back_location();
    pool.iter()
        .enumerate()
        .filter(|(_, b)| b.start() == back)
        .map(|(pos, _)| pos)
        .collect()
}

/// Returns every pool position whose drop-off equals the chain's front location.
///
/// Positions are in pool order. An empty result means no booking can be
/// prepended.
///
/// # Examples
///
/// ```
/// use u_chain::models::{Booking, Chain, Pool};
/// use u_chain::matching::backward_matches;
///
/// let bookings = vec![
///     Booking::new(1, 23, 42),
///     Booking::new(2, 77, 45),
///     Booking::new(3, 42, 77),
/// ];
/// let chain = Chain::seed(&bookings[2]);
/// let pool = Pool::without(&bookings, 2);
/// assert_eq!(backward_matches(&chain, &pool), vec![0]);
/// ```
pub fn backward_matches(chain: &Chain<'_>, pool: &Pool<'_>) -> Vec<usize> {
    let front = chain.front_location();
    pool.iter()
        .enumerate()
        .filter(|(_, b)| b.end() == front)
        .map(|(pos, _)| pos)
        .collect()
}
