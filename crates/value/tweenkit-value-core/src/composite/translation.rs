use std::fmt;

use serde::{Deserialize, Serialize};

use super::{is_identity, tokens};
use crate::error::{Result, ValueError};
use crate::magnitude::{split_magnitude, Magnitude};

/// `translate`: x, y, z offsets; absent axes are zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub x: Magnitude,
    pub y: Magnitude,
    pub z: Magnitude,
}

impl Translation {
    pub fn identity() -> Self {
        Self {
            x: Magnitude::zero(),
            y: Magnitude::zero(),
            z: Magnitude::zero(),
        }
    }

    pub fn axes(&self) -> [&Magnitude; 3] {
        [&self.x, &self.y, &self.z]
    }
}

/// Parse `none` | `<x> [<y> [<z>]]`.
pub fn parse_translation(value: &str) -> Result<Translation> {
    if is_identity(value) {
        return Ok(Translation::identity());
    }

    let parts = tokens(value);
    if parts.len() > 3 {
        return Err(ValueError::unsupported(
            "translate",
            value,
            format!("expected at most 3 components, got {}", parts.len()),
        ));
    }

    let axis = |i: usize| -> Result<Magnitude> {
        parts.get(i).map_or_else(|| Ok(Magnitude::zero()), |t| split_magnitude(t))
    };
    Ok(Translation {
        x: axis(0)?,
        y: axis(1)?,
        z: axis(2)?,
    })
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}
