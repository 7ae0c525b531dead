//! Generation modes and idea field identifiers.
//!
//! `Mode` serializes in lowercase (`research`, `business`, `python`), the same
//! spelling clients send in the generate request. `IdeaField` serializes as the
//! camelCase JSON key of the corresponding `Idea` field.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Selects a prompt template and the set of fields the model should fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Research,
    Business,
    Python,
}

impl Mode {
    /// Every mode, in catalog order.
    pub const ALL: [Self; 3] = [Self::Research, Self::Business, Self::Python];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Research => "research",
            Self::Business => "business",
            Self::Python => "python",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| CoreError::InvalidMode { mode: s.to_string() })
    }
}

// ---------------------------------------------------------------------------
// IdeaField
// ---------------------------------------------------------------------------

/// A field of an idea that the model may be asked to populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum IdeaField {
    Category,
    Title,
    Description,
    RefinedPrompt,
    MoneyValue,
    EffortValue,
    MonetizationStrategies,
}

impl IdeaField {
    /// Fields every draft must carry.
    pub const REQUIRED: [Self; 3] = [Self::Category, Self::Title, Self::Description];

    /// Fields the model may leave out.
    pub const OPTIONAL: [Self; 4] = [
        Self::RefinedPrompt,
        Self::MoneyValue,
        Self::EffortValue,
        Self::MonetizationStrategies,
    ];

    /// JSON key of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Title => "title",
            Self::Description => "description",
            Self::RefinedPrompt => "refinedPrompt",
            Self::MoneyValue => "moneyValue",
            Self::EffortValue => "effortValue",
            Self::MonetizationStrategies => "monetizationStrategies",
        }
    }

    #[must_use]
    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }
}

impl fmt::Display for IdeaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("research", Mode::Research)]
    #[case("business", Mode::Business)]
    #[case("python", Mode::Python)]
    fn mode_parses_registered_keys(#[case] raw: &str, #[case] expected: Mode) {
        assert_eq!(raw.parse::<Mode>().unwrap(), expected);
        assert_eq!(expected.to_string(), raw);
    }

    #[rstest]
    #[case("nonexistent")]
    #[case("Research")]
    #[case("")]
    fn mode_rejects_unknown_keys(#[case] raw: &str) {
        let err = raw.parse::<Mode>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidMode { ref mode } if mode == raw));
    }

    #[test]
    fn mode_serde_matches_as_str() {
        for mode in Mode::ALL {
            let json = serde_json::to_value(mode).unwrap();
            assert_eq!(json, serde_json::Value::String(mode.as_str().into()));
        }
    }

    #[test]
    fn idea_field_serde_matches_as_str() {
        for field in IdeaField::REQUIRED.into_iter().chain(IdeaField::OPTIONAL) {
            let json = serde_json::to_value(field).unwrap();
            assert_eq!(json, serde_json::Value::String(field.as_str().into()));
        }
    }

    #[test]
    fn required_and_optional_are_disjoint() {
        for field in IdeaField::OPTIONAL {
            assert!(!field.is_required());
        }
        for field in IdeaField::REQUIRED {
            assert!(field.is_required());
        }
    }
}
