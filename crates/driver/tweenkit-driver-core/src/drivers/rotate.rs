//! `rotate`: axis components and angle interpolate independently.

use tweenkit_value::{make_interpolator, parse_rotation, NumberInterpolator, Result, Rotation};

use super::{endpoint_texts, MagnitudeChannel};
use crate::config::DriverConfig;
use crate::driver::{PropertyDriver, PropertyDriverFactory};
use crate::endpoints::Endpoints;
use crate::target::TargetRef;

struct RotateDriver {
    target: TargetRef,
    axis: [NumberInterpolator; 3],
    angle: MagnitudeChannel,
}

impl RotateDriver {
    fn value_at(&self, progress: f64) -> Rotation {
        Rotation {
            axis: self.axis.map(|i| i.sample(progress)),
            angle: self.angle.sample(progress),
        }
    }
}

impl PropertyDriver for RotateDriver {
    fn apply(&self, progress: f64) {
        self.target
            .set_style("rotate", &self.value_at(progress).to_string());
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RotateFactory;

impl PropertyDriverFactory for RotateFactory {
    fn name(&self) -> &'static str {
        "rotate"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["rotate"]
    }

    fn build(
        &self,
        endpoints: &Endpoints,
        target: TargetRef,
        config: &DriverConfig,
    ) -> Result<Box<dyn PropertyDriver>> {
        let (from, to) = endpoint_texts(endpoints, target.as_ref(), "rotate");
        let from = parse_rotation(&from)?;
        let to = parse_rotation(&to)?;

        let options = config.angle_options();
        let angle = MagnitudeChannel::between("rotate", &from.angle, &to.angle, options)?;
        let axis = std::array::from_fn(|i| make_interpolator(from.axis[i], to.axis[i], options));
        Ok(Box::new(RotateDriver {
            target,
            axis,
            angle,
        }))
    }
}
