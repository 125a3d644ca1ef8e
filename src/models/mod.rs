//! Domain model types for booking chaining.
//!
//! Provides the core abstractions: bookings with opaque pickup and drop-off
//! labels, chains of linked bookings, the pool of bookings still to place,
//! and the outcome of a single construction trial.

mod booking;
mod chain;
mod pool;
mod trial;

pub use booking::{Booking, Label};
pub use chain::Chain;
pub use pool::Pool;
pub use trial::TrialResult;
