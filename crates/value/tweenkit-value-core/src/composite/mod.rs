//! Composite values: CSS properties whose value is a tuple of numeric components.
//!
//! Each parser accepts the forms a host reads back from computed style as well as
//! the shorthand forms callers write, and each type serializes back to a string the
//! host can write straight into the matching style property.

pub mod border_radius;
pub mod inset;
pub mod rotation;
pub mod scale;
pub mod translation;

pub use border_radius::{parse_border_radius, BorderRadius, Corner};
pub use inset::{parse_inset, parse_inset_side, Inset};
pub use rotation::{parse_rotation, Rotation};
pub use scale::{parse_scale, Scale};
pub use translation::{parse_translation, Translation};

/// Whitespace-separated tokens of a property value.
pub(crate) fn tokens(value: &str) -> Vec<&str> {
    value.split_whitespace().collect()
}

/// `none` or an empty value: the property's identity.
pub(crate) fn is_identity(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v.eq_ignore_ascii_case("none")
}

/// Parse a bare number (no unit allowed).
pub(crate) fn parse_number(token: &str) -> crate::Result<f64> {
    let m = crate::split_magnitude(token)?;
    match m.unit {
        None => Ok(m.value),
        Some(_) => Err(crate::ValueError::malformed(token)),
    }
}
