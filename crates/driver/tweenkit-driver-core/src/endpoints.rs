//! Endpoint descriptors and endpoint resolution.
//!
//! JSON shape (camelCase keys, every field optional):
//!   { "from": { "width": "10px", "scale": [1, 2] }, "to": { "backgroundColor": "#fff" } }

use serde::{Deserialize, Serialize};
use tweenkit_value::Scale;

/// `scale` as callers write it: one factor or an `[x, y]` pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleInput {
    Single(f64),
    Pair([f64; 2]),
}

impl ScaleInput {
    /// A single factor leaves y at 1.
    pub fn to_scale(self) -> Scale {
        match self {
            ScaleInput::Single(x) => Scale::single(x),
            ScaleInput::Pair([x, y]) => Scale { x, y },
        }
    }
}

/// One side (`from` or `to`) of a tween.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TweenProperties {
    pub width: Option<String>,
    pub height: Option<String>,
    pub top: Option<String>,
    pub right: Option<String>,
    pub bottom: Option<String>,
    pub left: Option<String>,
    pub rotate: Option<String>,
    pub translate: Option<String>,
    pub scale: Option<ScaleInput>,
    pub background_color: Option<String>,
    pub border_radius: Option<String>,
}

impl TweenProperties {
    /// String-valued property by CSS name.
    pub fn text(&self, property: &str) -> Option<&str> {
        let slot = match property {
            "width" => &self.width,
            "height" => &self.height,
            "top" => &self.top,
            "right" => &self.right,
            "bottom" => &self.bottom,
            "left" => &self.left,
            "rotate" => &self.rotate,
            "translate" => &self.translate,
            "background-color" => &self.background_color,
            "border-radius" => &self.border_radius,
            _ => return None,
        };
        slot.as_deref()
    }

    /// Present and non-empty.
    pub fn is_set(&self, property: &str) -> bool {
        match property {
            "scale" => self.scale.is_some(),
            _ => self.text(property).is_some_and(|v| !v.is_empty()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub from: Option<TweenProperties>,
    pub to: Option<TweenProperties>,
}

impl Endpoints {
    pub fn new(from: Option<TweenProperties>, to: Option<TweenProperties>) -> Self {
        Self { from, to }
    }

    pub fn from_text(&self, property: &str) -> Option<&str> {
        self.from.as_ref().and_then(|p| p.text(property))
    }

    pub fn to_text(&self, property: &str) -> Option<&str> {
        self.to.as_ref().and_then(|p| p.text(property))
    }

    /// True when none of `properties` is set on either side.
    pub fn all_absent(&self, properties: &[&str]) -> bool {
        let set = |side: &Option<TweenProperties>, prop: &str| {
            side.as_ref().is_some_and(|p| p.is_set(prop))
        };
        !properties
            .iter()
            .any(|prop| set(&self.from, prop) || set(&self.to, prop))
    }
}

/// Where an endpoint value came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved<T> {
    /// Supplied by the caller.
    Explicit(T),
    /// Target's computed value read at construction.
    Raw(T),
    /// Neither was available.
    Missing,
}

impl<T> Resolved<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Resolved::Explicit(v) | Resolved::Raw(v) => Some(v),
            Resolved::Missing => None,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Resolved::Raw(_))
    }
}

/// Precedence: explicit, then raw, then missing.
///
/// An explicit empty string still counts as explicit; parsers decide what it means.
pub fn resolve_endpoint<T>(explicit: Option<T>, raw: Option<T>) -> Resolved<T> {
    match (explicit, raw) {
        (Some(v), _) => Resolved::Explicit(v),
        (None, Some(v)) => Resolved::Raw(v),
        (None, None) => Resolved::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_beats_raw() {
        assert_eq!(resolve_endpoint(Some("a"), Some("b")), Resolved::Explicit("a"));
        assert_eq!(resolve_endpoint(None, Some("b")), Resolved::Raw("b"));
        assert_eq!(resolve_endpoint::<&str>(None, None), Resolved::Missing);
        assert_eq!(resolve_endpoint(Some(""), Some("b")).into_option(), Some(""));
    }

    #[test]
    fn descriptor_json() {
        let e: Endpoints = serde_json::from_str(
            r##"{ "from": { "backgroundColor": "#000", "scale": 2 },
                  "to": { "borderRadius": "4px", "scale": [1, 3] } }"##,
        )
        .unwrap();
        assert_eq!(e.from_text("background-color"), Some("#000"));
        assert_eq!(e.to_text("border-radius"), Some("4px"));
        let from = e.from.as_ref().unwrap();
        let to = e.to.as_ref().unwrap();
        assert_eq!(from.scale.unwrap().to_scale(), Scale { x: 2.0, y: 1.0 });
        assert_eq!(to.scale.unwrap().to_scale(), Scale { x: 1.0, y: 3.0 });
    }

    #[test]
    fn empty_strings_are_absent() {
        let from = TweenProperties {
            top: Some(String::new()),
            ..Default::default()
        };
        let e = Endpoints::new(Some(from), None);
        assert!(e.all_absent(&["top", "right", "bottom", "left"]));
        assert!(Endpoints::default().all_absent(&["scale"]));

        let to = TweenProperties {
            left: Some("0".into()),
            ..Default::default()
        };
        let e = Endpoints::new(None, Some(to));
        assert!(!e.all_absent(&["top", "right", "bottom", "left"]));
    }
}
