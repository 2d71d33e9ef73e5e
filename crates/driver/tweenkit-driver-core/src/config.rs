//! Driver configuration.

use serde::{Deserialize, Serialize};
use tweenkit_value::InterpolateOptions;

/// Output precision for the drivers. `None` disables rounding for that family.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DriverConfig {
    /// Lengths and percentages: size, inset, translate, border-radius.
    pub length_decimal_places: Option<u32>,
    /// Rotation angle and axis components.
    pub angle_decimal_places: Option<u32>,
    /// Scale factors.
    pub scale_decimal_places: Option<u32>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            length_decimal_places: Some(2),
            angle_decimal_places: Some(2),
            scale_decimal_places: Some(2),
        }
    }
}

impl DriverConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn length_options(&self) -> InterpolateOptions {
        options(self.length_decimal_places)
    }

    pub fn angle_options(&self) -> InterpolateOptions {
        options(self.angle_decimal_places)
    }

    /// Scale factors never go negative.
    pub fn scale_options(&self) -> InterpolateOptions {
        options(self.scale_decimal_places).with_min(0.0)
    }
}

fn options(decimal_places: Option<u32>) -> InterpolateOptions {
    InterpolateOptions {
        decimal_places,
        ..InterpolateOptions::default()
    }
}
