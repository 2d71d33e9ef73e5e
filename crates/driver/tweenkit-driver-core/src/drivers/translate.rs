//! `translate`: x, y, z each with its own unit.

use tweenkit_value::{parse_translation, Result, Translation};

use super::{endpoint_texts, MagnitudeChannel};
use crate::config::DriverConfig;
use crate::driver::{PropertyDriver, PropertyDriverFactory};
use crate::endpoints::Endpoints;
use crate::target::TargetRef;

const AXES: [&str; 3] = ["translate-x", "translate-y", "translate-z"];

struct TranslateDriver {
    target: TargetRef,
    axes: [MagnitudeChannel; 3],
}

impl PropertyDriver for TranslateDriver {
    fn apply(&self, progress: f64) {
        let [x, y, z] = &self.axes;
        let value = Translation {
            x: x.sample(progress),
            y: y.sample(progress),
            z: z.sample(progress),
        };
        self.target.set_style("translate", &value.to_string());
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TranslateFactory;

impl PropertyDriverFactory for TranslateFactory {
    fn name(&self) -> &'static str {
        "translate"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["translate"]
    }

    fn build(
        &self,
        endpoints: &Endpoints,
        target: TargetRef,
        config: &DriverConfig,
    ) -> Result<Box<dyn PropertyDriver>> {
        let (from, to) = endpoint_texts(endpoints, target.as_ref(), "translate");
        let from = parse_translation(&from)?;
        let to = parse_translation(&to)?;

        let options = config.length_options();
        let (f, t) = (from.axes(), to.axes());
        let axes = [
            MagnitudeChannel::between(AXES[0], f[0], t[0], options)?,
            MagnitudeChannel::between(AXES[1], f[1], t[1], options)?,
            MagnitudeChannel::between(AXES[2], f[2], t[2], options)?,
        ];
        Ok(Box::new(TranslateDriver { target, axes }))
    }
}
