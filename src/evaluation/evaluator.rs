//! Chain evaluator that checks links and lists relocations.

use std::collections::{HashMap, HashSet};

use crate::models::{Booking, Label};
use crate::{Error, Result};

/// Summary of a chain checked against its input bookings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainReport {
    chain_len: usize,
    relocations: Vec<Label>,
}

impl ChainReport {
    /// Number of bookings in the chain.
    pub fn chain_len(&self) -> usize {
        self.chain_len
    }

    /// Ids of input bookings absent from the chain, in input order.
    pub fn relocations(&self) -> &[Label] {
        &self.relocations
    }

    /// Number of relocations.
    pub fn num_relocations(&self) -> usize {
        self.relocations.len()
    }
}

/// Checks chains of booking ids against an input booking set.
///
/// # Examples
///
/// ```
/// use u_chain::models::{Booking, Label};
/// use u_chain::evaluation::ChainEvaluator;
///
/// let bookings = vec![
///     Booking::new(1, 23, 42),
///     Booking::new(2, 77, 45),
///     Booking::new(3, 42, 77),
/// ];
/// let eval = ChainEvaluator::new(&bookings);
///
/// let report = eval.evaluate(&[Label::Int(1), Label::Int(3)]).unwrap();
/// assert_eq!(report.chain_len(), 2);
/// assert_eq!(report.relocations(), &[Label::Int(2)]);
///
/// assert!(eval.evaluate(&[Label::Int(3), Label::Int(1)]).is_err());
/// ```
pub struct ChainEvaluator<'a> {
    bookings: &'a [Booking],
    by_id: HashMap<&'a Label, &'a Booking>,
}

impl<'a> ChainEvaluator<'a> {
    /// Creates an evaluator over the given bookings.
    pub fn new(bookings: &'a [Booking]) -> Self {
        Self {
            bookings,
            by_id: bookings.iter().map(|b| (b.id(), b)).collect(),
        }
    }

    /// Verifies `ids` as a chain and reports the bookings it leaves out.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownBooking`] if an id is not in the input
    /// - [`Error::DuplicateBooking`] if an id appears twice
    /// - [`Error::BrokenLink`] if a drop-off does not match the next pickup
    pub fn evaluate(&self, ids: &[Label]) -> Result<ChainReport> {
        let mut placed: HashSet<&Label> = HashSet::with_capacity(ids.len());
        let mut prev: Option<&Booking> = None;

        for id in ids {
            let booking = *self
                .by_id
                .get(id)
                .ok_or_else(|| Error::UnknownBooking(id.clone()))?;
            if !placed.insert(booking.id()) {
                return Err(Error::DuplicateBooking(id.clone()));
            }
            if let Some(p) = prev {
                if !p.links_to(booking) {
                    return Err(Error::BrokenLink {
                        from: p.id().clone(),
                        to: booking.id().clone(),
                    });
                }
            }
            prev = Some(booking);
        }

        let relocations = self
            .bookings
            .iter()
            .filter(|b| !placed.contains(b.id()))
            .map(|b| b.id().clone())
            .collect();

        Ok(ChainReport {
            chain_len: ids.len(),
            relocations,
        })
    }
}

/// Verifies `ids` as a chain over `bookings`.
///
/// Shorthand for [`ChainEvaluator::new`] followed by
/// [`ChainEvaluator::evaluate`].
pub fn evaluate_chain(bookings: &[Booking], ids: &[Label]) -> Result<ChainReport> {
    ChainEvaluator::new(bookings).evaluate(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> Vec<Booking> {
        vec![
            Booking::new(1, 23, 42),
            Booking::new(2, 77, 45),
            Booking::new(3, 42, 77),
            Booking::new(4, 90, 91),
        ]
    }

    fn ids(v: &[i64]) -> Vec<Label> {
        v.iter().map(|&i| Label::Int(i)).collect()
    }

    #[test]
    fn test_full_chain() {
        let bookings = setup();
        let report = evaluate_chain(&bookings, &ids(&[1, 3, 2])).expect("linked");
        assert_eq!(report.chain_len(), 3);
        assert_eq!(report.relocations(), ids(&[4]).as_slice());
        assert_eq!(report.num_relocations(), 1);
    }

    #[test]
    fn test_empty_chain_relocates_everything() {
        let bookings = setup();
        let report = evaluate_chain(&bookings, &[]).expect("empty chain is linked");
        assert_eq!(report.chain_len(), 0);
        assert_eq!(report.relocations(), ids(&[1, 2, 3, 4]).as_slice());
    }

    #[test]
    fn test_broken_link() {
        let bookings = setup();
        let err = evaluate_chain(&bookings, &ids(&[1, 2])).unwrap_err();
        assert!(matches!(
            err,
            Error::BrokenLink { from: Label::Int(1), to: Label::Int(2) }
        ));
    }

    #[test]
    fn test_unknown_id() {
        let bookings = setup();
        let err = evaluate_chain(&bookings, &ids(&[1, 99])).unwrap_err();
        assert!(matches!(err, Error::UnknownBooking(Label::Int(99))));
    }

    #[test]
    fn test_duplicate_id() {
        let bookings = vec![Booking::new(1, 5, 5)];
        let err = evaluate_chain(&bookings, &ids(&[1, 1])).unwrap_err();
        assert!(matches!(err, Error::DuplicateBooking(Label::Int(1))));
    }
}
