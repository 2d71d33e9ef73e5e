//! `<number><unit>` tokens.
//!
//! Grammar (ASCII, surrounding whitespace ignored):
//!   `-? digit* ( '.' )? digit+ unit?`   with `unit = [A-Za-z%]+`
//!
//! Units are stored lower-cased. A missing unit (`"0"`, `"1.5"`) is `None`, which is
//! compatible with any unit on the other endpoint of an interpolation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValueError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Magnitude {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Magnitude {
    pub fn new(value: f64, unit: Option<&str>) -> Self {
        Self {
            value,
            unit: unit.map(str::to_ascii_lowercase),
        }
    }

    pub fn unitless(value: f64) -> Self {
        Self { value, unit: None }
    }

    pub fn zero() -> Self {
        Self::unitless(0.0)
    }

    /// Unit suffix, or `""` when unitless.
    #[inline]
    pub fn unit_str(&self) -> &str {
        self.unit.as_deref().unwrap_or("")
    }
}

/// Split a raw CSS token into its magnitude and unit.
pub fn split_magnitude(raw: &str) -> Result<Magnitude> {
    let token = raw.trim();
    let bytes = token.as_bytes();
    let mut i = 0;

    if bytes.first() == Some(&b'-') {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            return Err(ValueError::malformed(raw));
        }
    } else if int_digits == 0 {
        return Err(ValueError::malformed(raw));
    }

    let (number, unit) = token.split_at(i);
    if !unit.bytes().all(|b| b.is_ascii_alphabetic() || b == b'%') {
        return Err(ValueError::malformed(raw));
    }
    let value: f64 = number.parse().map_err(|_| ValueError::malformed(raw))?;
    let unit = (!unit.is_empty()).then_some(unit);

    Ok(Magnitude::new(value, unit))
}

/// Format a number the way CSS serializers expect: shortest form, no `-0`.
pub fn format_number(value: f64) -> String {
    // `+ 0.0` folds -0.0 into 0.0
    format!("{}", value + 0.0)
}

/// Output unit for an axis interpolated between `from` and `to`.
///
/// Differing explicit units are rejected; a unitless side adopts the other side's unit.
pub fn resolve_unit(axis: &str, from: &Magnitude, to: &Magnitude) -> Result<Option<String>> {
    match (&from.unit, &to.unit) {
        (Some(f), Some(t)) if f != t => Err(ValueError::UnitMismatch {
            axis: axis.to_string(),
            from: from.unit.clone(),
            to: to.unit.clone(),
        }),
        _ => Ok(to.unit.clone().or_else(|| from.unit.clone())),
    }
}

/// Like [`resolve_unit`], but both sides must carry the same concrete unit.
pub fn resolve_unit_strict(axis: &str, from: &Magnitude, to: &Magnitude) -> Result<String> {
    match (&from.unit, &to.unit) {
        (Some(f), Some(t)) if f == t => Ok(t.clone()),
        _ => Err(ValueError::UnitMismatch {
            axis: axis.to_string(),
            from: from.unit.clone(),
            to: to.unit.clone(),
        }),
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit_str())
    }
}

impl FromStr for Magnitude {
    type Err = ValueError;
    fn from_str(s: &str) -> Result<Self> {
        split_magnitude(s)
    }
}
