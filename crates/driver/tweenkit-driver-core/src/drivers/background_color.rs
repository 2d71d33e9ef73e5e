//! `background-color`, channel-wise in integer RGBA.

use tweenkit_value::{make_color_interpolator, ColorInterpolator, Result};

use super::endpoint_texts;
use crate::config::DriverConfig;
use crate::driver::{PropertyDriver, PropertyDriverFactory};
use crate::endpoints::Endpoints;
use crate::target::TargetRef;

struct BackgroundColorDriver {
    target: TargetRef,
    color: ColorInterpolator,
}

impl PropertyDriver for BackgroundColorDriver {
    fn apply(&self, progress: f64) {
        self.target
            .set_style("background-color", &self.color.sample_css(progress));
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BackgroundColorFactory;

impl PropertyDriverFactory for BackgroundColorFactory {
    fn name(&self) -> &'static str {
        "background-color"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["background-color"]
    }

    fn build(
        &self,
        endpoints: &Endpoints,
        target: TargetRef,
        _config: &DriverConfig,
    ) -> Result<Box<dyn PropertyDriver>> {
        let (from, to) = endpoint_texts(endpoints, target.as_ref(), "background-color");
        let color = make_color_interpolator(&from, &to)?;
        Ok(Box::new(BackgroundColorDriver { target, color }))
    }
}
