//! Caller-owned driver registry.
//!
//! A host builds one registry (usually [`DriverRegistry::with_defaults`]), then per
//! tween calls [`DriverRegistry::create_all`] once and [`DriverSet::apply`] per frame.
//! Factories are keyed by name; registering an existing name replaces the factory.

use hashbrown::HashMap;
use log::{debug, trace};
use tweenkit_value::Result;

use crate::config::DriverConfig;
use crate::driver::{Construction, PropertyDriver, PropertyDriverFactory};
use crate::drivers::{
    BackgroundColorFactory, BorderRadiusFactory, InsetFactory, RotateFactory, ScaleFactory,
    SizeFactory, TranslateFactory,
};
use crate::endpoints::Endpoints;
use crate::target::TargetRef;

pub struct DriverRegistry {
    factories: HashMap<&'static str, Box<dyn PropertyDriverFactory>>,
    // Registration order; drives `names` and `create_all`.
    order: Vec<&'static str>,
    config: DriverConfig,
}

impl DriverRegistry {
    /// Empty registry.
    pub fn new(config: DriverConfig) -> Self {
        Self {
            factories: HashMap::new(),
            order: Vec::new(),
            config,
        }
    }

    /// Registry holding every built-in driver except the single-axis `width` and
    /// `height` factories, whose properties `size` already owns.
    pub fn with_defaults(config: DriverConfig) -> Self {
        let mut registry = Self::new(config);
        registry.register(Box::new(SizeFactory));
        registry.register(Box::new(InsetFactory));
        registry.register(Box::new(ScaleFactory));
        registry.register(Box::new(RotateFactory));
        registry.register(Box::new(TranslateFactory));
        registry.register(Box::new(BackgroundColorFactory));
        registry.register(Box::new(BorderRadiusFactory));
        registry
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Insert a factory under its name. Returns the factory it replaced, if any.
    pub fn register(
        &mut self,
        factory: Box<dyn PropertyDriverFactory>,
    ) -> Option<Box<dyn PropertyDriverFactory>> {
        let name = factory.name();
        let previous = self.factories.insert(name, factory);
        if previous.is_some() {
            debug!("registry: replaced driver factory '{name}'");
        } else {
            self.order.push(name);
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&dyn PropertyDriverFactory> {
        self.factories.get(name).map(|f| f.as_ref())
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.order.clone()
    }

    /// Construct a single named driver. Unknown names decline.
    pub fn create(&self, name: &str, endpoints: &Endpoints, target: &TargetRef) -> Construction {
        match self.get(name) {
            Some(factory) => factory.create(endpoints, target, &self.config),
            None => {
                debug!("registry: no driver factory named '{name}'");
                Ok(None)
            }
        }
    }

    /// Run every factory against one tween. Declined drivers are skipped; the first
    /// construction error aborts the whole set.
    pub fn create_all(&self, endpoints: &Endpoints, target: &TargetRef) -> Result<DriverSet> {
        let mut drivers = Vec::new();
        for &name in &self.order {
            if let Some(driver) = self.create(name, endpoints, target)? {
                drivers.push(ActiveDriver { name, driver });
            }
        }
        trace!("registry: {} active driver(s)", drivers.len());
        Ok(DriverSet { drivers })
    }
}

impl Default for DriverRegistry {
    fn default() -> Self {
        Self::with_defaults(DriverConfig::default())
    }
}

/// A constructed driver tagged with the factory name that produced it.
pub struct ActiveDriver {
    pub name: &'static str,
    pub driver: Box<dyn PropertyDriver>,
}

/// Drivers active for one tween.
#[derive(Default)]
pub struct DriverSet {
    drivers: Vec<ActiveDriver>,
}

impl DriverSet {
    /// Drive every active property to `progress`.
    pub fn apply(&self, progress: f64) {
        for active in &self.drivers {
            active.driver.apply(progress);
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.drivers.iter().map(|d| d.name).collect()
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveDriver> {
        self.drivers.iter()
    }
}

impl IntoIterator for DriverSet {
    type Item = ActiveDriver;
    type IntoIter = std::vec::IntoIter<ActiveDriver>;

    fn into_iter(self) -> Self::IntoIter {
        self.drivers.into_iter()
    }
}
