//! Named counters and their presentation tags

use serde::{Deserialize, Serialize};

/// Counters offered by the settings dropdown unless configured otherwise
pub const PRESET_COUNTERS: [&str; 5] = ["Poison", "Charge", "Energy", "Experience", "Blight"];

/// How a counter was created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterKind {
    Preset,
    #[default]
    Custom,
}

/// A user-named tally, never below zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    pub name: String,
    pub value: i64,
    pub kind: CounterKind,
}

impl Counter {
    /// Create a counter starting at zero
    pub fn new(name: impl Into<String>, kind: CounterKind) -> Self {
        Self {
            name: name.into(),
            value: 0,
            kind,
        }
    }

    /// Return a copy with `amount` applied, floored at zero
    pub fn adjusted(self, amount: i64) -> Self {
        Self {
            value: self.value.saturating_add(amount).max(0),
            ..self
        }
    }

    pub fn style(&self) -> StyleTag {
        StyleTag::for_counter(&self.name)
    }
}

/// Presentation tag for whatever the display currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleTag {
    #[serde(rename = "life")]
    Life,
    #[serde(rename = "commander-damage")]
    CommanderDamage,
    #[serde(rename = "poison-counter")]
    Poison,
    #[serde(rename = "charge-counter")]
    Charge,
    #[serde(rename = "energy-counter")]
    Energy,
    #[serde(rename = "experience-counter")]
    Experience,
    #[serde(rename = "blight-counter")]
    Blight,
    #[serde(rename = "custom-counter")]
    Custom,
}

impl StyleTag {
    /// Map a counter name to its tag; unrecognized names fall back to `Custom`
    pub fn for_counter(name: &str) -> Self {
        match name {
            "Poison" => Self::Poison,
            "Charge" => Self::Charge,
            "Energy" => Self::Energy,
            "Experience" => Self::Experience,
            "Blight" => Self::Blight,
            _ => Self::Custom,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Life => "life",
            Self::CommanderDamage => "commander-damage",
            Self::Poison => "poison-counter",
            Self::Charge => "charge-counter",
            Self::Energy => "energy-counter",
            Self::Experience => "experience-counter",
            Self::Blight => "blight-counter",
            Self::Custom => "custom-counter",
        }
    }
}

impl std::fmt::Display for StyleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
