//! Integer RGBA colors and the CSS color syntaxes drivers consume.
//!
//! Accepted:
//! * `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! * `rgb(r, g, b)` (alpha 255)
//! * `rgba(r, g, b[, a])`
//!
//! Output is always `rgba(r,g,b,a)` with integer channels in `0..=255`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValueError};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    #[inline]
    pub fn channels(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = ValueError;
    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ColorSyntax {
    Hex,
    Rgb,
    Rgba,
}

fn detect_syntax(value: &str) -> Option<ColorSyntax> {
    let lower = value.get(..5).unwrap_or(value).to_ascii_lowercase();
    if value.starts_with('#') {
        Some(ColorSyntax::Hex)
    } else if lower.starts_with("rgb(") {
        Some(ColorSyntax::Rgb)
    } else if lower.starts_with("rgba(") {
        Some(ColorSyntax::Rgba)
    } else {
        None
    }
}

/// Parse a CSS color string into integer RGBA.
pub fn parse_color(raw: &str) -> Result<Rgba> {
    let value = raw.trim();
    match detect_syntax(value) {
        Some(ColorSyntax::Hex) => parse_hex(&value[1..]).ok_or_else(|| ValueError::malformed(raw)),
        Some(ColorSyntax::Rgb) => parse_function(value, raw, false),
        Some(ColorSyntax::Rgba) => parse_function(value, raw, true),
        None => Err(ValueError::UnsupportedColorSyntax {
            input: raw.to_string(),
        }),
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    let nibble = |c: u8| -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    };
    let byte = |hi: u8, lo: u8| -> Option<u8> { Some(nibble(hi)? << 4 | nibble(lo)?) };

    let bytes = hex.as_bytes();
    let [r, g, b, a] = match bytes.len() {
        // #rgb / #rgba: each nibble doubled
        3 | 4 => {
            let mut out = [255u8; 4];
            for (slot, &c) in out.iter_mut().zip(bytes) {
                *slot = nibble(c)? * 17;
            }
            out
        }
        6 | 8 => {
            let mut out = [255u8; 4];
            for (slot, pair) in out.iter_mut().zip(bytes.chunks_exact(2)) {
                *slot = byte(pair[0], pair[1])?;
            }
            out
        }
        _ => return None,
    };
    Some(Rgba::new(r, g, b, a))
}

/// `rgb(...)` / `rgba(...)` with 3 or 4 comma-separated arguments.
///
/// `rgb` always yields alpha 255; a fourth argument must still be a number.
/// `rgba` may omit alpha.
fn parse_function(value: &str, raw: &str, keep_alpha: bool) -> Result<Rgba> {
    let open = value.find('(').ok_or_else(|| ValueError::malformed(raw))?;
    let close = value.rfind(')').ok_or_else(|| ValueError::malformed(raw))?;
    if close < open || !value[close + 1..].trim().is_empty() {
        return Err(ValueError::malformed(raw));
    }

    let args: Vec<&str> = value[open + 1..close].split(',').map(str::trim).collect();
    if !(3..=4).contains(&args.len()) {
        return Err(ValueError::malformed(raw));
    }

    let number = |arg: &str| -> Result<f64> {
        arg.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ValueError::malformed(raw))
    };
    let channel = |arg: &str| -> Result<u8> { Ok(to_byte(number(arg)?)) };

    let r = channel(args[0])?;
    let g = channel(args[1])?;
    let b = channel(args[2])?;
    let a = match args.get(3) {
        Some(arg) if !keep_alpha => {
            number(arg)?;
            255
        }
        // CSS alpha is a fraction; values above 1 are already on the byte scale.
        Some(arg) => {
            let alpha = number(arg)?;
            if alpha <= 1.0 {
                to_byte(alpha * 255.0)
            } else {
                to_byte(alpha)
            }
        }
        None => 255,
    };
    Ok(Rgba::new(r, g, b, a))
}

#[inline]
fn to_byte(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
