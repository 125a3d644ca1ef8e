//! Pool of bookings not yet placed in a chain.

use super::Booking;

/// The bookings still available to extend a chain during one trial.
///
/// Positions refer to the pool's current order, which is the input order
/// with placed bookings removed.
///
/// # Examples
///
/// ```
/// use u_chain::models::{Booking, Pool};
///
/// let bookings = vec![
///     Booking::new(1, 23, 42),
///     Booking::new(2, 77, 45),
///     Booking::new(3, 42, 77),
/// ];
/// let mut pool = Pool::without(&bookings, 0);
/// assert_eq!(pool.len(), 2);
///
/// let taken = pool.take(1);
/// assert_eq!(taken.id(), bookings[2].id());
/// assert_eq!(pool.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Pool<'a> {
    bookings: Vec<&'a Booking>,
}

impl<'a> Pool<'a> {
    /// Creates a pool holding every booking except the one at `seed`.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is out of bounds.
    pub fn without(bookings: &'a [Booking], seed: usize) -> Self {
        assert!(seed < bookings.len(), "seed index out of bounds");
        Self {
            bookings: bookings
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != seed)
                .map(|(_, b)| b)
                .collect(),
        }
    }

    /// Number of bookings left.
    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    /// Returns `true` if every booking has been placed.
    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Removes and returns the booking at `pos`, keeping the order of the rest.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn take(&mut self, pos: usize) -> &'a Booking {
        self.bookings.remove(pos)
    }

    /// Remaining bookings in pool order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Booking> + '_ {
        self.bookings.iter().copied()
    }
}
