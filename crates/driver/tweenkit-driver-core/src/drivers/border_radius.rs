//! `border-radius`: 4 corners x (horizontal, vertical), written in long form.

use tweenkit_value::{parse_border_radius, BorderRadius, Corner, Result};

use super::{endpoint_texts, MagnitudeChannel};
use crate::config::DriverConfig;
use crate::driver::{PropertyDriver, PropertyDriverFactory};
use crate::endpoints::Endpoints;
use crate::target::TargetRef;

const CORNERS: [&str; 4] = ["top-left", "top-right", "bottom-right", "bottom-left"];

struct CornerChannels {
    horizontal: MagnitudeChannel,
    vertical: MagnitudeChannel,
}

impl CornerChannels {
    fn sample(&self, progress: f64) -> Corner {
        Corner {
            horizontal: self.horizontal.sample(progress),
            vertical: self.vertical.sample(progress),
        }
    }
}

struct BorderRadiusDriver {
    target: TargetRef,
    // TL, TR, BR, BL
    corners: Vec<CornerChannels>,
}

impl PropertyDriver for BorderRadiusDriver {
    fn apply(&self, progress: f64) {
        let [tl, tr, br, bl] = [0, 1, 2, 3].map(|i| self.corners[i].sample(progress));
        let value = BorderRadius {
            top_left: tl,
            top_right: tr,
            bottom_right: br,
            bottom_left: bl,
        };
        self.target.set_style("border-radius", &value.to_string());
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BorderRadiusFactory;

impl PropertyDriverFactory for BorderRadiusFactory {
    fn name(&self) -> &'static str {
        "border-radius"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["border-radius"]
    }

    fn build(
        &self,
        endpoints: &Endpoints,
        target: TargetRef,
        config: &DriverConfig,
    ) -> Result<Box<dyn PropertyDriver>> {
        let (from, to) = endpoint_texts(endpoints, target.as_ref(), "border-radius");
        let from = parse_border_radius(&from)?;
        let to = parse_border_radius(&to)?;

        let options = config.length_options();
        let corners = CORNERS
            .iter()
            .zip(from.corners().into_iter().zip(to.corners()))
            .map(|(name, (f, t))| {
                Ok(CornerChannels {
                    horizontal: MagnitudeChannel::between(
                        &format!("{name} horizontal"),
                        &f.horizontal,
                        &t.horizontal,
                        options,
                    )?,
                    vertical: MagnitudeChannel::between(
                        &format!("{name} vertical"),
                        &f.vertical,
                        &t.vertical,
                        options,
                    )?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Box::new(BorderRadiusDriver { target, corners }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::test_support::{as_target, FakeElement};
    use crate::endpoints::TweenProperties;
    use tweenkit_value::ValueError;

    fn radius(v: &str) -> Option<TweenProperties> {
        Some(TweenProperties {
            border_radius: Some(v.to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn every_component_interpolates() {
        let el = FakeElement::with(&[("border-radius", "0px")]);
        let driver = BorderRadiusFactory
            .create(
                &Endpoints::new(None, radius("10px 20px 30px 40px / 2px 4px 6px 8px")),
                &as_target(&el),
                &DriverConfig::default(),
            )
            .unwrap()
            .unwrap();
        driver.apply(0.5);
        assert_eq!(
            el.last("border-radius").as_deref(),
            Some("5px 10px 15px 20px / 1px 2px 3px 4px")
        );
    }

    #[test]
    fn shorthand_expansion_feeds_corners() {
        let el = FakeElement::with(&[]);
        let driver = BorderRadiusFactory
            .create(
                &Endpoints::new(radius("0"), radius("10% 20%")),
                &as_target(&el),
                &DriverConfig::default(),
            )
            .unwrap()
            .unwrap();
        driver.apply(1.0);
        assert_eq!(
            el.last("border-radius").as_deref(),
            Some("10% 20% 10% 20% / 10% 20% 10% 20%")
        );
    }

    #[test]
    fn corner_unit_mismatch() {
        let el = FakeElement::with(&[]);
        let result = BorderRadiusFactory.create(
            &Endpoints::new(radius("1px 1px 1px 1px/2px"), radius("1px 1px 1px 1px/2em")),
            &as_target(&el),
            &DriverConfig::default(),
        );
        assert!(matches!(
            result,
            Err(ValueError::UnitMismatch { ref axis, .. }) if axis == "bottom-left vertical"
        ));
    }
}
