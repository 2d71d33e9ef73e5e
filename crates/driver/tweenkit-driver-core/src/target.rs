//! Rendering-target seam.
//!
//! Hosts implement [`AnimationTarget`] for their element handle. Drivers read
//! computed style only while being constructed and write inline style once per
//! owned property per frame. Both calls take `&self`: element handles are
//! shared between the drivers animating different properties of one target.

use std::rc::Rc;

/// Coarse node type reported by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// Element with a writable inline style (HTML element).
    Element,
    /// SVG graphics element; presentation attributes differ from CSS style.
    Svg,
    /// Text nodes, documents, or anything else without style.
    Other,
}

pub trait AnimationTarget {
    fn kind(&self) -> TargetKind;

    /// Current resolved (computed) value of a CSS property, e.g. `"100px"`.
    fn computed_value(&self, property: &str) -> Option<String>;

    /// Write a CSS property to the target's inline style.
    fn set_style(&self, property: &str, value: &str);
}

/// Shared handle to a host target.
pub type TargetRef = Rc<dyn AnimationTarget>;

/// Result of a capability check.
#[derive(Clone)]
pub enum Support {
    Supported(TargetRef),
    Unsupported,
}

impl Support {
    pub fn is_supported(&self) -> bool {
        matches!(self, Support::Supported(_))
    }
}

/// Style-writing drivers accept element targets only.
pub fn style_support(target: &TargetRef) -> Support {
    match target.kind() {
        TargetKind::Element => Support::Supported(Rc::clone(target)),
        TargetKind::Svg | TargetKind::Other => Support::Unsupported,
    }
}
