//! Interpolators:
//! - `NumberInterpolator` (linear, optional rounding then clamping)
//! - `ColorInterpolator` (four independent byte channels)
//! - `AngleInterpolator` (`deg` output clamped to one turn)
//!
//! Progress is not restricted to `[0, 1]`; values outside extrapolate linearly so
//! overshooting easings keep working. Only `min`/`max` bound the output.

use serde::{Deserialize, Serialize};

use crate::color::{parse_color, Rgba};
use crate::error::Result;
use crate::magnitude::{format_number, split_magnitude};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpolateOptions {
    /// Round the output to this many fractional digits.
    #[serde(default)]
    pub decimal_places: Option<u32>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl InterpolateOptions {
    pub fn rounded(decimal_places: u32) -> Self {
        Self {
            decimal_places: Some(decimal_places),
            ..Self::default()
        }
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// f64 carries no more reliable fractional digits than this.
pub const MAX_DECIMAL_PLACES: u32 = 15;

/// Round half away from zero to `places` fractional digits (at most
/// [`MAX_DECIMAL_PLACES`]). Always finite for finite input.
#[inline]
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places.min(MAX_DECIMAL_PLACES) as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumberInterpolator {
    start: f64,
    end: f64,
    options: InterpolateOptions,
}

pub fn make_interpolator(start: f64, end: f64, options: InterpolateOptions) -> NumberInterpolator {
    NumberInterpolator {
        start,
        end,
        options,
    }
}

impl NumberInterpolator {
    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn sample(&self, progress: f64) -> f64 {
        let mut value = lerp_f64(self.start, self.end, progress);
        if let Some(places) = self.options.decimal_places {
            value = round_to(value, places);
        }
        if let Some(max) = self.options.max {
            value = value.min(max);
        }
        if let Some(min) = self.options.min {
            value = value.max(min);
        }
        value
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColorInterpolator {
    channels: [NumberInterpolator; 4],
}

/// Parse both endpoints once and interpolate each RGBA channel independently.
pub fn make_color_interpolator(start: &str, end: &str) -> Result<ColorInterpolator> {
    let from = parse_color(start)?;
    let to = parse_color(end)?;
    Ok(ColorInterpolator::between(from, to))
}

impl ColorInterpolator {
    pub fn between(from: Rgba, to: Rgba) -> Self {
        let options = InterpolateOptions::rounded(0).with_min(0.0).with_max(255.0);
        let (f, t) = (from.channels(), to.channels());
        let channel = |i: usize| make_interpolator(f64::from(f[i]), f64::from(t[i]), options);
        Self {
            channels: [channel(0), channel(1), channel(2), channel(3)],
        }
    }

    pub fn sample(&self, progress: f64) -> Rgba {
        // Rounded and clamped to 0..=255 by the channel options.
        let [r, g, b, a] = self.channels.map(|c| c.sample(progress) as u8);
        Rgba::new(r, g, b, a)
    }

    pub fn sample_css(&self, progress: f64) -> String {
        self.sample(progress).to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleInterpolator {
    inner: NumberInterpolator,
}

/// Interpolate two angle tokens (`"30deg"`), emitting degrees within one turn.
///
/// Units on the inputs are not converted; only the magnitudes are used.
pub fn make_angle_interpolator(start: &str, end: &str) -> Result<AngleInterpolator> {
    let from = split_magnitude(start)?;
    let to = split_magnitude(end)?;
    let options = InterpolateOptions::rounded(2).with_min(0.0).with_max(360.0);
    Ok(AngleInterpolator {
        inner: make_interpolator(from.value, to.value, options),
    })
}

impl AngleInterpolator {
    pub fn sample(&self, progress: f64) -> f64 {
        self.inner.sample(progress)
    }

    pub fn sample_css(&self, progress: f64) -> String {
        format!("{}deg", format_number(self.sample(progress)))
    }
}
