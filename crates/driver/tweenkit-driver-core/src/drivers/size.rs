//! `width` / `height`.
//!
//! [`SizeFactory`] drives both axes and tolerates one unitless side.
//! [`LengthFactory`] drives a single axis and requires the same concrete unit on
//! both sides, so `"100"` -> `"200px"` is rejected.

use tweenkit_value::{split_magnitude, Result};

use super::{endpoint_texts, MagnitudeChannel};
use crate::config::DriverConfig;
use crate::driver::{PropertyDriver, PropertyDriverFactory};
use crate::endpoints::Endpoints;
use crate::target::TargetRef;

struct LengthDriver {
    target: TargetRef,
    axes: Vec<(&'static str, MagnitudeChannel)>,
}

impl PropertyDriver for LengthDriver {
    fn apply(&self, progress: f64) {
        for (property, channel) in &self.axes {
            self.target
                .set_style(property, &channel.sample(progress).to_string());
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SizeFactory;

impl PropertyDriverFactory for SizeFactory {
    fn name(&self) -> &'static str {
        "size"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["width", "height"]
    }

    fn build(
        &self,
        endpoints: &Endpoints,
        target: TargetRef,
        config: &DriverConfig,
    ) -> Result<Box<dyn PropertyDriver>> {
        let mut axes = Vec::with_capacity(2);
        for &property in self.properties() {
            let (from, to) = endpoint_texts(endpoints, target.as_ref(), property);
            let channel = MagnitudeChannel::between(
                property,
                &split_magnitude(&from)?,
                &split_magnitude(&to)?,
                config.length_options(),
            )?;
            axes.push((property, channel));
        }
        Ok(Box::new(LengthDriver { target, axes }))
    }
}

/// Single-axis strict driver; see [`LengthFactory::width`] / [`LengthFactory::height`].
#[derive(Debug, Clone, Copy)]
pub struct LengthFactory {
    property: &'static str,
}

impl LengthFactory {
    pub fn width() -> Self {
        Self { property: "width" }
    }

    pub fn height() -> Self {
        Self { property: "height" }
    }
}

impl PropertyDriverFactory for LengthFactory {
    fn name(&self) -> &'static str {
        self.property
    }

    fn properties(&self) -> &'static [&'static str] {
        match self.property {
            "width" => &["width"],
            _ => &["height"],
        }
    }

    fn build(
        &self,
        endpoints: &Endpoints,
        target: TargetRef,
        config: &DriverConfig,
    ) -> Result<Box<dyn PropertyDriver>> {
        let (from, to) = endpoint_texts(endpoints, target.as_ref(), self.property);
        let channel = MagnitudeChannel::strict(
            self.property,
            &split_magnitude(&from)?,
            &split_magnitude(&to)?,
            config.length_options(),
        )?;
        Ok(Box::new(LengthDriver {
            target,
            axes: vec![(self.property, channel)],
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::test_support::{as_target, FakeElement};
    use crate::endpoints::TweenProperties;
    use tweenkit_value::ValueError;

    fn widths(from: Option<&str>, to: Option<&str>) -> Endpoints {
        let side = |w: Option<&str>| {
            w.map(|w| TweenProperties {
                width: Some(w.to_string()),
                ..Default::default()
            })
        };
        Endpoints::new(side(from), side(to))
    }

    #[test]
    fn size_interpolates_both_axes() {
        let el = FakeElement::with(&[("width", "100px"), ("height", "50px")]);
        let driver = SizeFactory
            .create(&widths(None, Some("200px")), &as_target(&el), &DriverConfig::default())
            .unwrap()
            .unwrap();

        driver.apply(0.5);
        assert_eq!(el.last("width").as_deref(), Some("150px"));
        assert_eq!(el.last("height").as_deref(), Some("50px"));
    }

    #[test]
    fn size_adopts_the_only_unit() {
        let el = FakeElement::with(&[("height", "0")]);
        let driver = SizeFactory
            .create(&widths(Some("0"), Some("10em")), &as_target(&el), &DriverConfig::default())
            .unwrap()
            .unwrap();
        driver.apply(0.25);
        assert_eq!(el.last("width").as_deref(), Some("2.5em"));
        assert_eq!(el.last("height").as_deref(), Some("0"));
    }

    #[test]
    fn huge_precision_still_writes_finite_lengths() {
        let cfg = DriverConfig::from_json_str(r#"{ "lengthDecimalPlaces": 400 }"#).unwrap();
        let el = FakeElement::with(&[("height", "0px")]);
        let driver = SizeFactory
            .create(&widths(Some("0px"), Some("100px")), &as_target(&el), &cfg)
            .unwrap()
            .unwrap();
        driver.apply(0.5);
        assert_eq!(el.last("width").as_deref(), Some("50px"));
        assert_eq!(el.last("height").as_deref(), Some("0px"));
    }

    #[test]
    fn size_rejects_mixed_units() {
        let el = FakeElement::with(&[("height", "0px")]);
        let err = SizeFactory
            .create(&widths(Some("10px"), Some("50%")), &as_target(&el), &DriverConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, ValueError::UnitMismatch { .. }));
    }

    #[test]
    fn width_requires_matching_concrete_units() {
        let el = FakeElement::with(&[]);
        let target = as_target(&el);
        let cfg = DriverConfig::default();

        let mismatch =
            LengthFactory::width().create(&widths(Some("10px"), Some("50%")), &target, &cfg);
        assert!(matches!(mismatch, Err(ValueError::UnitMismatch { .. })));

        let unitless =
            LengthFactory::width().create(&widths(Some("0"), Some("50px")), &target, &cfg);
        assert!(matches!(unitless, Err(ValueError::UnitMismatch { .. })));

        let ok = LengthFactory::width()
            .create(&widths(Some("10px"), Some("20px")), &target, &cfg)
            .unwrap()
            .unwrap();
        ok.apply(1.0 / 3.0);
        assert_eq!(el.last("width").as_deref(), Some("13.33px"));
        assert_eq!(el.last("height"), None);
    }

    #[test]
    fn height_reads_raw_once_for_missing_side() {
        let el = FakeElement::with(&[("height", "40px")]);
        let to = TweenProperties {
            height: Some("80px".into()),
            ..Default::default()
        };
        let driver = LengthFactory::height()
            .create(&Endpoints::new(None, Some(to)), &as_target(&el), &DriverConfig::default())
            .unwrap()
            .unwrap();
        driver.apply(0.0);
        driver.apply(0.75);
        driver.apply(0.75);
        assert_eq!(el.reads.borrow().as_slice(), ["height".to_string()]);
        assert_eq!(el.last("height").as_deref(), Some("70px"));
    }

    #[test]
    fn unreadable_raw_width_is_malformed() {
        let el = FakeElement::with(&[]);
        let to = TweenProperties {
            width: Some("80px".into()),
            ..Default::default()
        };
        let result = LengthFactory::width().create(
            &Endpoints::new(None, Some(to)),
            &as_target(&el),
            &DriverConfig::default(),
        );
        assert!(matches!(result, Err(ValueError::MalformedValue { .. })));
    }
}
