//! Loading, validating and exporting bookings.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use crate::models::{Booking, Label};
use crate::{Error, Result};

/// Checks that `bookings` is non-empty and that no id repeats.
///
/// # Examples
///
/// ```
/// use u_chain::models::Booking;
/// use u_chain::io::validate_bookings;
///
/// assert!(validate_bookings(&[Booking::new(1, 2, 3)]).is_ok());
/// assert!(validate_bookings(&[]).is_err());
/// ```
pub fn validate_bookings(bookings: &[Booking]) -> Result<()> {
    if bookings.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut seen = HashSet::with_capacity(bookings.len());
    for b in bookings {
        if !seen.insert(b.id()) {
            return Err(Error::DuplicateBooking(b.id().clone()));
        }
    }
    Ok(())
}

/// Parses and validates bookings from a JSON array.
///
/// Extra fields on each object are ignored.
///
/// # Examples
///
/// ```
/// use u_chain::io::parse_bookings;
///
/// let bookings = parse_bookings(r#"[
///     { "id": 1, "start": 23, "end": 42 },
///     { "id": 2, "start": 77, "end": 45 }
/// ]"#).unwrap();
/// assert_eq!(bookings.len(), 2);
///
/// assert!(parse_bookings("[]").is_err());
/// assert!(parse_bookings(r#"[{ "id": 1, "start": 23 }]"#).is_err());
/// ```
pub fn parse_bookings(json: &str) -> Result<Vec<Booking>> {
    let bookings: Vec<Booking> = serde_json::from_str(json)?;
    validate_bookings(&bookings)?;
    Ok(bookings)
}

/// Reads and validates bookings from a JSON file.
pub fn load_bookings(path: impl AsRef<Path>) -> Result<Vec<Booking>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let bookings: Vec<Booking> = serde_json::from_reader(reader)?;
    validate_bookings(&bookings)?;
    log::debug!("store: loaded n={} from {}", bookings.len(), path.display());
    Ok(bookings)
}

/// Serializes an id sequence as a JSON array.
///
/// # Examples
///
/// ```
/// use u_chain::models::Label;
/// use u_chain::io::to_json;
///
/// let ids = vec![Label::Int(1), Label::Int(3), Label::from("x")];
/// assert_eq!(to_json(&ids).unwrap(), r#"[1,3,"x"]"#);
/// ```
pub fn to_json(ids: &[Label]) -> Result<String> {
    Ok(serde_json::to_string(ids)?)
}

/// Writes an id sequence to `path` as a JSON array.
pub fn export_ids(ids: &[Label], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, to_json(ids)?)?;
    log::debug!("store: wrote n={} to {}", ids.len(), path.display());
    Ok(())
}
