use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::magnitude::{split_magnitude, Magnitude};

/// `top`/`right`/`bottom`/`left` offsets, each its own property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Inset {
    pub top: Magnitude,
    pub right: Magnitude,
    pub bottom: Magnitude,
    pub left: Magnitude,
}

impl Inset {
    /// Property names in the order of [`Inset::sides`].
    pub const PROPERTIES: [&'static str; 4] = ["top", "right", "bottom", "left"];

    pub fn sides(&self) -> [&Magnitude; 4] {
        [&self.top, &self.right, &self.bottom, &self.left]
    }
}

/// Parse one inset side. `auto` and the empty string are treated as `0`.
pub fn parse_inset_side(value: &str) -> Result<Magnitude> {
    let v = value.trim();
    if v.is_empty() || v.eq_ignore_ascii_case("auto") {
        return Ok(Magnitude::zero());
    }
    split_magnitude(v)
}

/// Parse the four sides, in `top, right, bottom, left` order.
pub fn parse_inset(sides: [&str; 4]) -> Result<Inset> {
    let [top, right, bottom, left] = sides;
    Ok(Inset {
        top: parse_inset_side(top)?,
        right: parse_inset_side(right)?,
        bottom: parse_inset_side(bottom)?,
        left: parse_inset_side(left)?,
    })
}
