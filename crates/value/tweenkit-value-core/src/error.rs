use thiserror::Error;

/// Construction-time failures. Nothing in this crate fails while sampling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// A scalar token does not match `-?\d*\.?\d+<unit>?`.
    #[error("malformed value: {input:?}")]
    MalformedValue { input: String },

    /// A composite value has a token count or shape this property cannot expand.
    #[error("unsupported {property} syntax {input:?}: {reason}")]
    UnsupportedSyntax {
        property: &'static str,
        input: String,
        reason: String,
    },

    /// The color string starts with none of `#`, `rgb(`, `rgba(`.
    #[error("unsupported color syntax: {input:?}")]
    UnsupportedColorSyntax { input: String },

    /// Both endpoints name a unit for the same axis and the units differ.
    #[error("unit mismatch on {axis}: from {} to {}", show_unit(.from), show_unit(.to))]
    UnitMismatch {
        axis: String,
        from: Option<String>,
        to: Option<String>,
    },
}

fn show_unit(unit: &Option<String>) -> &str {
    unit.as_deref().unwrap_or("(none)")
}

impl ValueError {
    pub(crate) fn malformed(input: &str) -> Self {
        ValueError::MalformedValue {
            input: input.to_string(),
        }
    }

    pub(crate) fn unsupported(
        property: &'static str,
        input: &str,
        reason: impl Into<String>,
    ) -> Self {
        ValueError::UnsupportedSyntax {
            property,
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ValueError>;
