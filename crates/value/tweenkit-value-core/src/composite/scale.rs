use std::fmt;

use serde::{Deserialize, Serialize};

use super::{is_identity, parse_number, tokens};
use crate::error::{Result, ValueError};
use crate::magnitude::format_number;

/// `scale`: bare x/y factors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    pub fn identity() -> Self {
        Self { x: 1.0, y: 1.0 }
    }

    /// A single factor scales x only; y stays at 1.
    pub fn single(x: f64) -> Self {
        Self { x, y: 1.0 }
    }
}

/// Parse `none` | `<x>` | `<x> <y>`.
pub fn parse_scale(value: &str) -> Result<Scale> {
    if is_identity(value) {
        return Ok(Scale::identity());
    }
    match tokens(value).as_slice() {
        [x] => Ok(Scale::single(parse_number(x)?)),
        [x, y] => Ok(Scale {
            x: parse_number(x)?,
            y: parse_number(y)?,
        }),
        parts => Err(ValueError::unsupported(
            "scale",
            value,
            format!("expected 1 or 2 factors, got {}", parts.len()),
        )),
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_number(self.x), format_number(self.y))
    }
}
