//! # u-chain
//!
//! Single-vehicle booking chaining: reorders pickup/drop-off bookings so that
//! as many as possible run end-to-end without relocating the vehicle.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Label, Booking, Chain, Pool, TrialResult)
//! - [`matching`] — Forward and backward match scans over the pool
//! - [`constructive`] — Randomized greedy chain builder (one trial)
//! - [`search`] — Best-of-N trial selection, sequential and parallel
//! - [`evaluation`] — Chain verification and relocation reporting
//! - [`io`] — JSON booking store
//! - [`random`] — Seeded RNG helpers
//!
//! ## Example
//!
//! ```
//! use u_chain::io::parse_bookings;
//! use u_chain::models::Label;
//! use u_chain::search::ChainSearch;
//!
//! let bookings = parse_bookings(r#"[
//!     { "id": 1, "start": 23, "end": 42 },
//!     { "id": 2, "start": 77, "end": 45 },
//!     { "id": 3, "start": 42, "end": 77 }
//! ]"#).unwrap();
//!
//! let best = ChainSearch::new(500).with_seed(1).run(&bookings).unwrap();
//! assert_eq!(best.chain(), &[Label::Int(1), Label::Int(3), Label::Int(2)]);
//! assert_eq!(best.leftover(), 0);
//! ```

pub mod constructive;
mod error;
pub mod evaluation;
pub mod io;
pub mod logging;
pub mod matching;
pub mod models;
pub mod options;
pub mod random;
pub mod search;

pub use error::{Error, Result};
