//! Built-in property drivers.

pub mod background_color;
pub mod border_radius;
pub mod inset;
pub mod rotate;
pub mod scale;
pub mod size;
pub mod translate;

pub use background_color::BackgroundColorFactory;
pub use border_radius::BorderRadiusFactory;
pub use inset::InsetFactory;
pub use rotate::RotateFactory;
pub use scale::ScaleFactory;
pub use size::{LengthFactory, SizeFactory};
pub use translate::TranslateFactory;

use log::debug;
use tweenkit_value::{
    make_interpolator, resolve_unit, resolve_unit_strict, InterpolateOptions, Magnitude,
    NumberInterpolator, Result,
};

use crate::driver::read_raw;
use crate::endpoints::{resolve_endpoint, Endpoints};
use crate::target::AnimationTarget;

/// Resolved `(from, to)` text for one property.
///
/// A side that is neither supplied nor readable from the target becomes `""`,
/// which each parser maps to its identity or rejects.
pub(crate) fn endpoint_texts(
    endpoints: &Endpoints,
    target: &dyn AnimationTarget,
    property: &str,
) -> (String, String) {
    let from = endpoints.from_text(property);
    let to = endpoints.to_text(property);
    let raw = read_raw(target, property, from, to);

    let resolve = |side: &str, explicit: Option<&str>| {
        let resolved = resolve_endpoint(explicit.map(str::to_owned), raw.clone());
        if resolved.is_raw() {
            debug!("{property}: {side} falls back to computed value");
        }
        resolved.into_option().unwrap_or_default()
    };
    (resolve("from", from), resolve("to", to))
}

/// One interpolated `<number><unit>` axis with its output unit frozen.
#[derive(Clone, Debug)]
pub(crate) struct MagnitudeChannel {
    interp: NumberInterpolator,
    unit: Option<String>,
}

impl MagnitudeChannel {
    /// A unitless side adopts the other side's unit.
    pub(crate) fn between(
        axis: &str,
        from: &Magnitude,
        to: &Magnitude,
        options: InterpolateOptions,
    ) -> Result<Self> {
        let unit = resolve_unit(axis, from, to)?;
        Ok(Self {
            interp: make_interpolator(from.value, to.value, options),
            unit,
        })
    }

    /// Both sides must carry the same unit.
    pub(crate) fn strict(
        axis: &str,
        from: &Magnitude,
        to: &Magnitude,
        options: InterpolateOptions,
    ) -> Result<Self> {
        let unit = resolve_unit_strict(axis, from, to)?;
        Ok(Self {
            interp: make_interpolator(from.value, to.value, options),
            unit: Some(unit),
        })
    }

    pub(crate) fn sample(&self, progress: f64) -> Magnitude {
        Magnitude {
            value: self.interp.sample(progress),
            unit: self.unit.clone(),
        }
    }
}
