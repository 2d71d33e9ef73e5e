#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tweenkit_driver::{AnimationTarget, TargetKind, TargetRef};

/// Host element double: serves computed style, records every write and read.
pub struct RecordingElement {
    pub kind: TargetKind,
    pub computed: HashMap<String, String>,
    pub reads: RefCell<Vec<String>>,
    pub writes: RefCell<Vec<(String, String)>>,
}

impl RecordingElement {
    pub fn element(computed: &HashMap<String, String>) -> Rc<Self> {
        Self::of_kind(TargetKind::Element, computed)
    }

    pub fn of_kind(kind: TargetKind, computed: &HashMap<String, String>) -> Rc<Self> {
        Rc::new(Self {
            kind,
            computed: computed.clone(),
            reads: RefCell::new(Vec::new()),
            writes: RefCell::new(Vec::new()),
        })
    }

    pub fn last(&self, property: &str) -> Option<String> {
        self.writes
            .borrow()
            .iter()
            .rev()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.clone())
    }

    pub fn take_writes(&self) -> Vec<(String, String)> {
        self.writes.borrow_mut().drain(..).collect()
    }
}

impl AnimationTarget for RecordingElement {
    fn kind(&self) -> TargetKind {
        self.kind
    }

    fn computed_value(&self, property: &str) -> Option<String> {
        self.reads.borrow_mut().push(property.to_string());
        self.computed.get(property).cloned()
    }

    fn set_style(&self, property: &str, value: &str) {
        self.writes
            .borrow_mut()
            .push((property.to_string(), value.to_string()));
    }
}

pub fn target(element: &Rc<RecordingElement>) -> TargetRef {
    element.clone()
}

pub fn computed(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
