//! `border-radius` shorthand.
//!
//! Two accepted spellings:
//! - per-corner: `10px 20px/5px` (each token may carry its own `h/v` pair)
//! - CSS list form: `10px 20px / 5px` (a standalone `/` splits horizontal and
//!   vertical lists, each expanded on its own)
//!
//! Expansion follows CSS corner order TL, TR, BR, BL:
//! 1 value -> all; 2 -> TL=BR, TR=BL; 3 -> TL, TR=BL, BR; 4 -> TL, TR, BR, BL.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::tokens;
use crate::error::{Result, ValueError};
use crate::magnitude::{split_magnitude, Magnitude};

/// One corner's elliptical radii.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Corner {
    pub horizontal: Magnitude,
    pub vertical: Magnitude,
}

impl Corner {
    pub fn circular(radius: Magnitude) -> Self {
        Self {
            horizontal: radius.clone(),
            vertical: radius,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BorderRadius {
    pub top_left: Corner,
    pub top_right: Corner,
    pub bottom_right: Corner,
    pub bottom_left: Corner,
}

impl BorderRadius {
    /// Corners in CSS order: TL, TR, BR, BL.
    pub fn corners(&self) -> [&Corner; 4] {
        [
            &self.top_left,
            &self.top_right,
            &self.bottom_right,
            &self.bottom_left,
        ]
    }

    fn from_corners([top_left, top_right, bottom_right, bottom_left]: [Corner; 4]) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }
}

/// Expand 1-4 shorthand values into TL, TR, BR, BL.
fn expand<T: Clone>(values: &[T], input: &str) -> Result<[T; 4]> {
    match values {
        [all] => Ok([all.clone(), all.clone(), all.clone(), all.clone()]),
        [tl_br, tr_bl] => Ok([tl_br.clone(), tr_bl.clone(), tl_br.clone(), tr_bl.clone()]),
        [tl, tr_bl, br] => Ok([tl.clone(), tr_bl.clone(), br.clone(), tr_bl.clone()]),
        [tl, tr, br, bl] => Ok([tl.clone(), tr.clone(), br.clone(), bl.clone()]),
        _ => Err(ValueError::unsupported(
            "border-radius",
            input,
            format!("expected 1 to 4 radii, got {}", values.len()),
        )),
    }
}

fn parse_corner(token: &str) -> Result<Corner> {
    match token.split_once('/') {
        Some((h, v)) => Ok(Corner {
            horizontal: split_magnitude(h)?,
            vertical: split_magnitude(v)?,
        }),
        None => Ok(Corner::circular(split_magnitude(token)?)),
    }
}

pub fn parse_border_radius(value: &str) -> Result<BorderRadius> {
    let parts = tokens(value);

    if let Some(slash) = parts.iter().position(|t| *t == "/") {
        let (h, v) = (&parts[..slash], &parts[slash + 1..]);
        if v.contains(&"/") {
            return Err(ValueError::unsupported(
                "border-radius",
                value,
                "more than one '/' separator",
            ));
        }
        let parse_list = |list: &[&str]| -> Result<Vec<Magnitude>> {
            list.iter().map(|t| split_magnitude(t)).collect()
        };
        let horizontal = expand(&parse_list(h)?, value)?;
        let vertical = expand(&parse_list(v)?, value)?;
        let corners = std::array::from_fn(|i| Corner {
            horizontal: horizontal[i].clone(),
            vertical: vertical[i].clone(),
        });
        return Ok(BorderRadius::from_corners(corners));
    }

    let corners = parts
        .iter()
        .map(|t| parse_corner(t))
        .collect::<Result<Vec<_>>>()?;
    Ok(BorderRadius::from_corners(expand(&corners, value)?))
}

impl fmt::Display for BorderRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [tl, tr, br, bl] = self.corners();
        write!(
            f,
            "{} {} {} {} / {} {} {} {}",
            tl.horizontal,
            tr.horizontal,
            br.horizontal,
            bl.horizontal,
            tl.vertical,
            tr.vertical,
            br.vertical,
            bl.vertical
        )
    }
}
