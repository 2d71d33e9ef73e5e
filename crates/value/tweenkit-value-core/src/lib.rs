//! tweenkit-value-core: CSS value parsing and interpolation (host-agnostic).
//!
//! Leaves of the property-driver stack:
//! - `magnitude`: `<number><unit>` tokens
//! - `color`: hex / `rgb()` / `rgba()` colors as integer RGBA
//! - `composite`: rotation, translation, scale, inset and border-radius tuples
//! - `interpolate`: rounded/clamped scalar, color and angle interpolators
//!
//! Everything here is pure: parse once, sample many times.

pub mod color;
pub mod composite;
pub mod error;
pub mod interpolate;
pub mod magnitude;

pub use color::{parse_color, Rgba};
pub use composite::{
    parse_border_radius, parse_inset, parse_inset_side, parse_rotation, parse_scale,
    parse_translation, BorderRadius, Corner, Inset, Rotation, Scale, Translation,
};
pub use error::{Result, ValueError};
pub use interpolate::{
    make_angle_interpolator, make_color_interpolator, make_interpolator, AngleInterpolator,
    ColorInterpolator, InterpolateOptions, NumberInterpolator,
};
pub use magnitude::{
    format_number, resolve_unit, resolve_unit_strict, split_magnitude, Magnitude,
};
