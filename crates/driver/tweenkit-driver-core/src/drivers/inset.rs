//! `top` / `right` / `bottom` / `left`.

use tweenkit_value::{parse_inset_side, Inset, Result};

use super::{endpoint_texts, MagnitudeChannel};
use crate::config::DriverConfig;
use crate::driver::{PropertyDriver, PropertyDriverFactory};
use crate::endpoints::Endpoints;
use crate::target::TargetRef;

struct InsetDriver {
    target: TargetRef,
    sides: Vec<(&'static str, MagnitudeChannel)>,
}

impl PropertyDriver for InsetDriver {
    fn apply(&self, progress: f64) {
        for (property, channel) in &self.sides {
            self.target
                .set_style(property, &channel.sample(progress).to_string());
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct InsetFactory;

impl PropertyDriverFactory for InsetFactory {
    fn name(&self) -> &'static str {
        "inset"
    }

    fn properties(&self) -> &'static [&'static str] {
        &Inset::PROPERTIES
    }

    fn build(
        &self,
        endpoints: &Endpoints,
        target: TargetRef,
        config: &DriverConfig,
    ) -> Result<Box<dyn PropertyDriver>> {
        let sides = Inset::PROPERTIES
            .iter()
            .map(|&property| {
                // `auto` and unreadable sides start from 0
                let (from, to) = endpoint_texts(endpoints, target.as_ref(), property);
                let channel = MagnitudeChannel::between(
                    property,
                    &parse_inset_side(&from)?,
                    &parse_inset_side(&to)?,
                    config.length_options(),
                )?;
                Ok((property, channel))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Box::new(InsetDriver { target, sides }))
    }
}
