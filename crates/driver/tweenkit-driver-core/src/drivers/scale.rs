//! `scale`: two bare factors, floored at zero.

use log::debug;
use tweenkit_value::{make_interpolator, parse_scale, NumberInterpolator, Result, Scale};

use crate::config::DriverConfig;
use crate::driver::{read_raw, PropertyDriver, PropertyDriverFactory};
use crate::endpoints::{resolve_endpoint, Endpoints, Resolved};
use crate::target::TargetRef;

struct ScaleDriver {
    target: TargetRef,
    x: NumberInterpolator,
    y: NumberInterpolator,
}

impl PropertyDriver for ScaleDriver {
    fn apply(&self, progress: f64) {
        let value = Scale {
            x: self.x.sample(progress),
            y: self.y.sample(progress),
        };
        self.target.set_style("scale", &value.to_string());
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ScaleFactory;

impl PropertyDriverFactory for ScaleFactory {
    fn name(&self) -> &'static str {
        "scale"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["scale"]
    }

    fn build(
        &self,
        endpoints: &Endpoints,
        target: TargetRef,
        config: &DriverConfig,
    ) -> Result<Box<dyn PropertyDriver>> {
        let from = endpoints.from.as_ref().and_then(|p| p.scale);
        let to = endpoints.to.as_ref().and_then(|p| p.scale);

        // Raw text is only read (and parsed) when a side is missing.
        let raw = read_raw(
            target.as_ref(),
            "scale",
            from.map(|_| ""),
            to.map(|_| ""),
        );
        let raw = raw.as_deref().map(parse_scale).transpose()?;

        let resolve = |side: &str, explicit: Option<Scale>| {
            match resolve_endpoint(explicit, raw) {
                Resolved::Explicit(s) | Resolved::Raw(s) => s,
                Resolved::Missing => {
                    debug!("scale: {side} unreadable, using identity");
                    Scale::identity()
                }
            }
        };
        let from = resolve("from", from.map(|s| s.to_scale()));
        let to = resolve("to", to.map(|s| s.to_scale()));

        let options = config.scale_options();
        Ok(Box::new(ScaleDriver {
            target,
            x: make_interpolator(from.x, to.x, options),
            y: make_interpolator(from.y, to.y, options),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::test_support::{as_target, FakeElement};
    use crate::endpoints::{ScaleInput, TweenProperties};

    fn scale(v: ScaleInput) -> Option<TweenProperties> {
        Some(TweenProperties {
            scale: Some(v),
            ..Default::default()
        })
    }

    #[test]
    fn single_factor_keeps_y_at_one() {
        let el = FakeElement::with(&[("scale", "none")]);
        let driver = ScaleFactory
            .create(
                &Endpoints::new(None, scale(ScaleInput::Single(3.0))),
                &as_target(&el),
                &DriverConfig::default(),
            )
            .unwrap()
            .unwrap();
        driver.apply(0.5);
        assert_eq!(el.last("scale").as_deref(), Some("2 1"));
    }

    #[test]
    fn factors_never_go_negative() {
        let el = FakeElement::with(&[]);
        let driver = ScaleFactory
            .create(
                &Endpoints::new(
                    scale(ScaleInput::Pair([1.0, 1.0])),
                    scale(ScaleInput::Pair([0.0, 0.5])),
                ),
                &as_target(&el),
                &DriverConfig::default(),
            )
            .unwrap()
            .unwrap();
        driver.apply(1.5);
        assert_eq!(el.last("scale").as_deref(), Some("0 0.25"));
        assert!(el.reads.borrow().is_empty());
    }

    #[test]
    fn raw_pair_is_parsed() {
        let el = FakeElement::with(&[("scale", "2 4")]);
        let driver = ScaleFactory
            .create(
                &Endpoints::new(scale(ScaleInput::Single(0.0)), None),
                &as_target(&el),
                &DriverConfig::default(),
            )
            .unwrap()
            .unwrap();
        driver.apply(0.25);
        assert_eq!(el.last("scale").as_deref(), Some("0.5 1.75"));
    }
}
