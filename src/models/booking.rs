//! Booking and label types.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// 2^63, the first `f64` above `i64::MAX`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
/// 2^64, the first `f64` above `u64::MAX`.
const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;

/// An opaque token naming a booking or a location.
///
/// Labels are only ever compared for equality; no ordering or distance is
/// derived from them. Every JSON number is accepted: integers map to
/// [`Label::Int`] (or [`Label::UInt`] above `i64::MAX`), integral floats are
/// folded into the same integer variants so `42` and `42.0` are one label,
/// and any other float becomes [`Label::Float`]. JSON strings map to
/// [`Label::Text`].
///
/// # Examples
///
/// ```
/// use u_chain::models::Label;
///
/// assert_eq!(Label::from(42), Label::Int(42));
/// assert_eq!(Label::from(42.0), Label::Int(42));
/// assert_eq!(Label::from("depot"), Label::Text("depot".to_string()));
/// assert_ne!(Label::from(1), Label::from("1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    /// Integer token in `i64` range.
    Int(i64),
    /// Integer token above `i64::MAX`.
    UInt(u64),
    /// Non-integral number, kept as its `f64` bit pattern.
    Float(u64),
    /// String token.
    Text(String),
}

impl Label {
    fn from_u64(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => Self::Int(v),
            Err(_) => Self::UInt(value),
        }
    }

    fn from_f64(value: f64) -> Self {
        if value.fract() == 0.0 {
            if (-I64_BOUND..I64_BOUND).contains(&value) {
                return Self::Int(value as i64);
            }
            if (0.0..U64_BOUND).contains(&value) {
                return Self::UInt(value as u64);
            }
        }
        Self::Float(value.to_bits())
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(bits) => write!(f, "{}", f64::from_bits(*bits)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for Label {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for Label {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<f64> for Label {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl Serialize for Label {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::UInt(v) => serializer.serialize_u64(*v),
            Self::Float(bits) => serializer.serialize_f64(f64::from_bits(*bits)),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

struct LabelVisitor;

impl<'de> Visitor<'de> for LabelVisitor {
    type Value = Label;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a booking id or location (JSON number or string)")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Label, E> {
        Ok(Label::Int(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Label, E> {
        Ok(Label::from_u64(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Label, E> {
        if !value.is_finite() {
            return Err(E::custom("non-finite number is not a valid label"));
        }
        Ok(Label::from_f64(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Label, E> {
        Ok(Label::from(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Label, E> {
        Ok(Label::Text(value))
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D>(deserializer: D) -> Result<Label, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LabelVisitor)
    }
}

/// A single vehicle booking from a pickup location to a drop-off location.
///
/// # Examples
///
/// ```
/// use u_chain::models::{Booking, Label};
///
/// let a = Booking::new(1, 23, 42);
/// let b = Booking::new(3, 42, 77);
/// assert_eq!(a.id(), &Label::Int(1));
/// assert!(a.links_to(&b));
/// assert!(!b.links_to(&a));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    id: Label,
    start: Label,
    end: Label,
}

impl Booking {
    /// Creates a new booking.
    pub fn new(id: impl Into<Label>, start: impl Into<Label>, end: impl Into<Label>) -> Self {
        Self {
            id: id.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    /// Booking identifier.
    pub fn id(&self) -> &Label {
        &self.id
    }

    /// Pickup location.
    pub fn start(&self) -> &Label {
        &self.start
    }

    /// Drop-off location.
    pub fn end(&self) -> &Label {
        &self.end
    }

    /// Returns `true` if `next` can follow this booking without relocating.
    pub fn links_to(&self, next: &Booking) -> bool {
        self.end == next.start
    }
}
