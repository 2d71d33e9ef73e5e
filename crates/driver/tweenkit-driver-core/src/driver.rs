//! Property driver protocol.
//!
//! A factory turns `{from, to}` plus a target into one of:
//! - `Ok(None)`: declined (unsupported target, or nothing to animate)
//! - `Ok(Some(driver))`: active; `apply` never fails
//! - `Err(_)`: construction failed (malformed value, unit mismatch, ...)

use log::{debug, trace};
use tweenkit_value::Result;

use crate::config::DriverConfig;
use crate::endpoints::Endpoints;
use crate::target::{AnimationTarget, Support, TargetRef};

pub type Construction = Result<Option<Box<dyn PropertyDriver>>>;

/// An active driver. Holds only values fixed at construction, so `apply` is a pure
/// function of `progress` followed by a style write; calls may come in any order.
pub trait PropertyDriver {
    fn apply(&self, progress: f64);
}

pub trait PropertyDriverFactory {
    /// Registry key.
    fn name(&self) -> &'static str;

    /// CSS properties this driver reads and writes.
    fn properties(&self) -> &'static [&'static str];

    fn supports(&self, target: &TargetRef) -> Support {
        crate::target::style_support(target)
    }

    /// Parse, validate and freeze both endpoints. Called only for supported targets
    /// with at least one owned property set on either side.
    fn build(
        &self,
        endpoints: &Endpoints,
        target: TargetRef,
        config: &DriverConfig,
    ) -> Result<Box<dyn PropertyDriver>>;

    fn create(
        &self,
        endpoints: &Endpoints,
        target: &TargetRef,
        config: &DriverConfig,
    ) -> Construction {
        let target = match self.supports(target) {
            Support::Supported(target) => target,
            Support::Unsupported => {
                debug!("{}: target kind {:?} unsupported", self.name(), target.kind());
                return Ok(None);
            }
        };
        if endpoints.all_absent(self.properties()) {
            debug!("{}: no endpoint set, skipping", self.name());
            return Ok(None);
        }
        let driver = self.build(endpoints, target, config)?;
        trace!("{}: driver active", self.name());
        Ok(Some(driver))
    }
}

/// Read the target's computed value once, only when one side is missing.
pub(crate) fn read_raw(
    target: &dyn AnimationTarget,
    property: &str,
    from: Option<&str>,
    to: Option<&str>,
) -> Option<String> {
    if from.is_some() && to.is_some() {
        return None;
    }
    let raw = target.computed_value(property);
    debug!("{property}: raw endpoint {raw:?}");
    raw
}
