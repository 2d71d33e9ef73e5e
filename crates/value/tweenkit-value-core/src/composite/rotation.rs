use std::fmt;

use serde::{Deserialize, Serialize};

use super::{is_identity, parse_number, tokens};
use crate::error::{Result, ValueError};
use crate::magnitude::{format_number, split_magnitude, Magnitude};

/// `rotate`: axis vector plus angle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub axis: [f64; 3],
    pub angle: Magnitude,
}

impl Rotation {
    /// `none`: zero turn about z.
    pub fn identity() -> Self {
        Self {
            axis: [0.0, 0.0, 1.0],
            angle: Magnitude::zero(),
        }
    }
}

/// Parse `none` | `<angle>` | `x|y|z <angle>` | `<x> <y> <z> <angle>`.
pub fn parse_rotation(value: &str) -> Result<Rotation> {
    if is_identity(value) {
        return Ok(Rotation::identity());
    }

    let parts = tokens(value);
    let angle = split_magnitude(parts[parts.len() - 1])?;
    let axis = match parts.len() {
        1 => [0.0, 0.0, 1.0],
        2 => match parts[0].to_ascii_lowercase().as_str() {
            "x" => [1.0, 0.0, 0.0],
            "y" => [0.0, 1.0, 0.0],
            "z" => [0.0, 0.0, 1.0],
            other => {
                return Err(ValueError::unsupported(
                    "rotate",
                    value,
                    format!("unknown axis {other:?}"),
                ))
            }
        },
        4 => [
            parse_number(parts[0])?,
            parse_number(parts[1])?,
            parse_number(parts[2])?,
        ],
        n => {
            return Err(ValueError::unsupported(
                "rotate",
                value,
                format!("expected 1, 2 or 4 components, got {n}"),
            ))
        }
    };

    Ok(Rotation { axis, angle })
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.axis;
        write!(
            f,
            "{} {} {} {}",
            format_number(x),
            format_number(y),
            format_number(z),
            self.angle
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_identity() {
        assert_eq!(parse_rotation("none").unwrap(), Rotation::identity());
        assert_eq!(parse_rotation("").unwrap(), Rotation::identity());
    }

    #[test]
    fn single_angle_is_about_z() {
        let r = parse_rotation("90deg").unwrap();
        assert_eq!(r.axis, [0.0, 0.0, 1.0]);
        assert_eq!(r.angle, Magnitude::new(90.0, Some("deg")));
    }

    #[test]
    fn named_axis() {
        let r = parse_rotation("x 45deg").unwrap();
        assert_eq!(r.axis, [1.0, 0.0, 0.0]);
        assert_eq!(r.angle.value, 45.0);
        assert_eq!(r.angle.unit.as_deref(), Some("deg"));
        assert_eq!(parse_rotation("Y 1turn").unwrap().axis, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn explicit_axis() {
        let r = parse_rotation("1 0.5 0 30deg").unwrap();
        assert_eq!(r.axis, [1.0, 0.5, 0.0]);
        assert_eq!(r.to_string(), "1 0.5 0 30deg");
    }

    #[test]
    fn unsupported_shapes() {
        for bad in ["w 10deg", "1 2 10deg", "1 2 3 4 5deg"] {
            assert!(
                matches!(parse_rotation(bad), Err(ValueError::UnsupportedSyntax { .. })),
                "{bad:?}"
            );
        }
        assert!(matches!(
            parse_rotation("1px 0 0 10deg"),
            Err(ValueError::MalformedValue { .. })
        ));
    }
}
