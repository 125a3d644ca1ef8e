//! Chain (block) type.

use std::collections::VecDeque;

use super::{Booking, Label};

/// An ordered run of bookings where each drop-off matches the next pickup.
///
/// A chain always holds at least one booking. It grows at both ends in O(1)
/// and exposes the locations at which it can be extended.
///
/// # Examples
///
/// ```
/// use u_chain::models::{Booking, Chain, Label};
///
/// let a = Booking::new(1, 23, 42);
/// let b = Booking::new(3, 42, 77);
/// let c = Booking::new(9, 10, 23);
///
/// let mut chain = Chain::seed(&b);
/// chain.push_front(&a);
/// chain.push_front(&c);
/// assert_eq!(chain.front_location(), &Label::Int(10));
/// assert_eq!(chain.back_location(), &Label::Int(77));
/// assert_eq!(chain.ids(), vec![Label::Int(9), Label::Int(1), Label::Int(3)]);
/// ```
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    bookings: VecDeque<&'a Booking>,
}

impl<'a> Chain<'a> {
    /// Starts a chain from a single seed booking.
    pub fn seed(booking: &'a Booking) -> Self {
        Self {
            bookings: VecDeque::from([booking]),
        }
    }

    fn first(&self) -> &'a Booking {
        self.bookings[0]
    }

    fn last(&self) -> &'a Booking {
        self.bookings[self.bookings.len() - 1]
    }

    /// Pickup location of the first booking.
    pub fn front_location(&self) -> &'a Label {
        self.first().start()
    }

    /// Drop-off location of the last booking.
    pub fn back_location(&self) -> &'a Label {
        self.last().end()
    }

    /// Appends a booking whose pickup matches the back location.
    pub fn push_back(&mut self, booking: &'a Booking) {
        debug_assert!(self.last().links_to(booking));
        self.bookings.push_back(booking);
    }

    /// Prepends a booking whose drop-off matches the front location.
    pub fn push_front(&mut self, booking: &'a Booking) {
        debug_assert!(booking.links_to(self.first()));
        self.bookings.push_front(booking);
    }

    /// Number of bookings in the chain.
    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    /// Always `false`: a chain starts from a seed booking.
    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Booking ids in chain order.
    pub fn ids(&self) -> Vec<Label> {
        self.bookings.iter().map(|b| b.id().clone()).collect()
    }

    /// Returns `true` if every adjacent pair is linked.
    pub fn is_linked(&self) -> bool {
        self.bookings
            .iter()
            .zip(self.bookings.iter().skip(1))
            .all(|(a, b)| a.links_to(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_seed() {
        let b = Booking::new(1, 5, 6);
        let chain = Chain::seed(&b);
        assert_eq!(chain.len(), 1);
        assert!(!chain.is_empty());
        assert_eq!(chain.front_location(), &Label::Int(5));
        assert_eq!(chain.back_location(), &Label::Int(6));
        assert!(chain.is_linked());
    }

    #[test]
    fn test_chain_grows_both_ends() {
        let mid = Booking::new(2, 2, 3);
        let tail = Booking::new(3, 3, 4);
        let head = Booking::new(1, 1, 2);
        let mut chain = Chain::seed(&mid);
        chain.push_back(&tail);
        chain.push_front(&head);
        assert_eq!(chain.ids(), vec![Label::Int(1), Label::Int(2), Label::Int(3)]);
        assert_eq!(chain.front_location(), &Label::Int(1));
        assert_eq!(chain.back_location(), &Label::Int(4));
        assert!(chain.is_linked());
    }

    #[test]
    fn test_chain_cycle_keeps_seed_first() {
        let a = Booking::new(1, 1, 2);
        let b = Booking::new(2, 2, 1);
        let mut chain = Chain::seed(&a);
        chain.push_back(&b);
        assert_eq!(chain.ids(), vec![Label::Int(1), Label::Int(2)]);
        assert_eq!(chain.front_location(), chain.back_location());
        assert!(chain.is_linked());
    }

    #[test]
    fn test_chain_is_linked_detects_gap() {
        let a = Booking::new(1, 1, 2);
        let b = Booking::new(2, 5, 6);
        let chain = Chain {
            bookings: VecDeque::from([&a, &b]),
        };
        assert!(!chain.is_linked());
    }
}
