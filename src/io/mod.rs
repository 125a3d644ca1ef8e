//! JSON booking store.
//!
//! Reads a JSON array of `{ "id", "start", "end" }` objects into bookings and
//! writes chain orderings back out as a JSON array of ids.

mod store;

pub use store::{export_ids, load_bookings, parse_bookings, to_json, validate_bookings};
