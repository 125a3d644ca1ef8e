//! Chain matching queries.
//!
//! - [`forward_matches`] — pool positions that can be appended to a chain
//! - [`backward_matches`] — pool positions that can be prepended to a chain
//!
//! Both scan the whole pool; no index is maintained between calls.

mod matcher;

pub use matcher::{backward_matches, forward_matches};
