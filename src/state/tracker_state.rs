//! Tracker state: life, commander damage, named counters and the display selector

use serde::{Deserialize, Serialize};

use super::{Counter, CounterKind, DisplayTarget, StyleTag};

/// Starting life outside commander mode
pub const DEFAULT_LIFE: i64 = 20;
/// Starting life in commander mode
pub const COMMANDER_LIFE: i64 = 40;
/// Commander damage that knocks a player out
pub const MAX_COMMANDER_DAMAGE: i64 = 21;

const LIFE_LABEL: &str = "Life";
const COMMANDER_LABEL: &str = "CMDR";

/// Snapshot of everything the counter display shows.
///
/// Every transition consumes the snapshot and returns the next one, so a caller
/// holding the previous value can compare the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerState {
    /// Primary value, never below zero
    pub life: i64,
    /// Value `reset` restores
    pub starting_life: i64,
    pub commander_mode: bool,
    /// Secondary value, clamped to `0..=MAX_COMMANDER_DAMAGE`
    pub commander_damage: i64,
    /// Named counters in insertion (and display-cycle) order
    pub counters: Vec<Counter>,
    pub target: DisplayTarget,
}

/// What the display renders for the current target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayView {
    pub target: DisplayTarget,
    pub label: String,
    pub value: i64,
    pub style: StyleTag,
}

impl TrackerState {
    /// Create a fresh tracker in the given mode
    pub fn new(commander_mode: bool) -> Self {
        let life = Self::mode_default(commander_mode);
        Self {
            life,
            starting_life: life,
            commander_mode,
            commander_damage: 0,
            counters: Vec::new(),
            target: DisplayTarget::Primary,
        }
    }

    /// Default starting life for a mode
    pub fn mode_default(commander_mode: bool) -> i64 {
        if commander_mode {
            COMMANDER_LIFE
        } else {
            DEFAULT_LIFE
        }
    }

    /// Commit a starting life from raw text.
    ///
    /// Unparseable text leaves the tracker unchanged. In commander mode any valid
    /// number starts at `COMMANDER_LIFE`.
    pub fn set_starting_value(self, raw: &str) -> Self {
        let Ok(value) = raw.trim().parse::<i64>() else {
            return self;
        };
        let starting_life = if self.commander_mode {
            COMMANDER_LIFE
        } else {
            value.max(0)
        };

        Self {
            life: starting_life,
            starting_life,
            ..self
        }
    }

    /// Append a counter unless the trimmed name is empty or already taken
    pub fn add_counter(mut self, name: &str, kind: CounterKind) -> Self {
        let name = name.trim();
        if name.is_empty() || self.has_counter(name) {
            return self;
        }
        self.counters.push(Counter::new(name, kind));
        self
    }

    /// Remove a counter by exact name.
    ///
    /// Removing the selected counter sends the selector back to `Primary`; removing
    /// an earlier one keeps the selector on the same counter.
    pub fn remove_counter(mut self, name: &str) -> Self {
        let Some(index) = self.counters.iter().position(|c| c.name == name) else {
            return self;
        };
        self.counters.remove(index);

        self.target = match self.target {
            DisplayTarget::Counter(i) if i == index => DisplayTarget::Primary,
            DisplayTarget::Counter(i) if i > index => DisplayTarget::Counter(i - 1),
            other => other,
        };
        self
    }

    pub fn has_counter(&self, name: &str) -> bool {
        self.counters.iter().any(|c| c.name == name)
    }

    /// Flip commander mode, restoring the new mode's defaults. Counters survive.
    pub fn toggle_mode(self) -> Self {
        let commander_mode = !self.commander_mode;
        let life = Self::mode_default(commander_mode);
        Self {
            life,
            starting_life: life,
            commander_mode,
            commander_damage: 0,
            target: DisplayTarget::Primary,
            ..self
        }
    }

    /// Restore the starting life and drop damage and counters
    pub fn reset(self) -> Self {
        Self {
            life: self.starting_life,
            commander_damage: 0,
            counters: Vec::new(),
            target: DisplayTarget::Primary,
            ..self
        }
    }

    /// Move the selector to the next target
    pub fn advance(self) -> Self {
        let target = self.target.next(self.commander_mode, self.counters.len());
        Self { target, ..self }
    }

    /// Selector resolved against the current structure
    pub fn current_target(&self) -> DisplayTarget {
        self.target.resolve(self.commander_mode, self.counters.len())
    }

    pub fn current_value(&self) -> i64 {
        match self.current_target() {
            DisplayTarget::Secondary => self.commander_damage,
            DisplayTarget::Counter(i) => self.counters[i].value,
            DisplayTarget::Primary => self.life,
        }
    }

    pub fn current_label(&self) -> &str {
        match self.current_target() {
            DisplayTarget::Secondary => COMMANDER_LABEL,
            DisplayTarget::Counter(i) => &self.counters[i].name,
            DisplayTarget::Primary => LIFE_LABEL,
        }
    }

    pub fn current_style(&self) -> StyleTag {
        match self.current_target() {
            DisplayTarget::Secondary => StyleTag::CommanderDamage,
            DisplayTarget::Counter(i) => self.counters[i].style(),
            DisplayTarget::Primary => StyleTag::Life,
        }
    }

    /// Apply `amount` to the displayed value only, within that value's bounds
    pub fn adjust(mut self, amount: i64) -> Self {
        match self.current_target() {
            DisplayTarget::Secondary => {
                self.commander_damage = self
                    .commander_damage
                    .saturating_add(amount)
                    .clamp(0, MAX_COMMANDER_DAMAGE);
            }
            DisplayTarget::Counter(i) => {
                self.counters[i] = self.counters[i].clone().adjusted(amount);
            }
            DisplayTarget::Primary => {
                self.life = self.life.saturating_add(amount).max(0);
            }
        }
        self
    }

    pub fn display(&self) -> DisplayView {
        DisplayView {
            target: self.current_target(),
            label: self.current_label().to_string(),
            value: self.current_value(),
            style: self.current_style(),
        }
    }
}

impl Default for TrackerState {
    fn default() -> Self {
        Self::new(false)
    }
}
