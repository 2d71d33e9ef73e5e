//! tweenkit-driver-core: per-property drivers plugged into a host animation engine.
//!
//! Flow:
//!   host -> `PropertyDriverFactory::create` (capability guard, falsy short-circuit,
//!   endpoint resolution, parsing and unit validation, all once)
//!   -> `PropertyDriver::apply(progress)` per frame (pure compute + style write)
//!
//! Hosts own a `DriverRegistry`; there is no global registration.

pub mod config;
pub mod driver;
pub mod drivers;
pub mod endpoints;
pub mod registry;
pub mod target;

pub use config::DriverConfig;
pub use driver::{Construction, PropertyDriver, PropertyDriverFactory};
pub use drivers::{
    BackgroundColorFactory, BorderRadiusFactory, InsetFactory, LengthFactory, RotateFactory,
    ScaleFactory, SizeFactory, TranslateFactory,
};
pub use endpoints::{resolve_endpoint, Endpoints, Resolved, ScaleInput, TweenProperties};
pub use registry::{ActiveDriver, DriverRegistry, DriverSet};
pub use target::{style_support, AnimationTarget, Support, TargetKind, TargetRef};
pub use tweenkit_value::{Result, ValueError};
