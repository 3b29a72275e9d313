//! Display selector: which value is shown and receives +/- adjustments

use serde::{Deserialize, Serialize};

/// Cursor over the displayable values.
///
/// The cycle order is `Primary -> [Secondary] -> Counter(0) -> ... -> Counter(last) -> Primary`,
/// where `Secondary` only participates while commander mode is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "lowercase")]
pub enum DisplayTarget {
    #[default]
    Primary,
    Secondary,
    Counter(usize),
}

impl DisplayTarget {
    /// Number of targets the cycle visits
    pub fn total_targets(commander_mode: bool, counter_count: usize) -> usize {
        1 + usize::from(commander_mode) + counter_count
    }

    /// Step to the next target in the cycle.
    ///
    /// A stale target (a counter index past the end, or `Secondary` with the mode
    /// off) steps back to `Primary`.
    pub fn next(self, commander_mode: bool, counter_count: usize) -> Self {
        if Self::total_targets(commander_mode, counter_count) == 1 {
            return Self::Primary;
        }

        match self {
            Self::Primary if commander_mode => Self::Secondary,
            Self::Primary if counter_count > 0 => Self::Counter(0),
            Self::Secondary if commander_mode && counter_count > 0 => Self::Counter(0),
            Self::Counter(i) if i + 1 < counter_count => Self::Counter(i + 1),
            _ => Self::Primary,
        }
    }

    /// Resolve to a target that currently exists, falling back to `Primary`
    pub fn resolve(self, commander_mode: bool, counter_count: usize) -> Self {
        match self {
            Self::Secondary if !commander_mode => Self::Primary,
            Self::Counter(i) if i >= counter_count => Self::Primary,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn cycle(commander_mode: bool, counter_count: usize) -> Vec<DisplayTarget> {
        let total = DisplayTarget::total_targets(commander_mode, counter_count);
        let mut seen = Vec::with_capacity(total);
        let mut target = DisplayTarget::Primary;
        for _ in 0..total {
            seen.push(target);
            target = target.next(commander_mode, counter_count);
        }
        assert_eq!(target, DisplayTarget::Primary, "cycle must wrap to primary");
        seen
    }

    #[test]
    fn single_target_stays_on_primary() {
        assert_eq!(DisplayTarget::Primary.next(false, 0), DisplayTarget::Primary);
    }

    #[test]
    fn visits_every_target_once_per_cycle() {
        for commander_mode in [false, true] {
            for count in 0..5 {
                let seen = cycle(commander_mode, count);
                let distinct: HashSet<_> = seen.iter().copied().collect();
                assert_eq!(seen.len(), DisplayTarget::total_targets(commander_mode, count));
                assert_eq!(distinct.len(), seen.len());
                for target in &seen {
                    assert_eq!(target.resolve(commander_mode, count), *target);
                }
            }
        }
    }

    #[test]
    fn commander_cycle_order() {
        assert_eq!(
            cycle(true, 2),
            vec![
                DisplayTarget::Primary,
                DisplayTarget::Secondary,
                DisplayTarget::Counter(0),
                DisplayTarget::Counter(1),
            ]
        );
    }

    #[test]
    fn secondary_without_counters_returns_to_primary() {
        assert_eq!(DisplayTarget::Secondary.next(true, 0), DisplayTarget::Primary);
    }

    #[test]
    fn stale_targets_step_back_to_primary() {
        assert_eq!(DisplayTarget::Counter(4).next(false, 2), DisplayTarget::Primary);
        assert_eq!(DisplayTarget::Secondary.next(false, 2), DisplayTarget::Primary);
        assert_eq!(DisplayTarget::Counter(4).resolve(false, 2), DisplayTarget::Primary);
        assert_eq!(DisplayTarget::Secondary.resolve(false, 2), DisplayTarget::Primary);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(DisplayTarget::Counter(1)).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "counter", "index": 1 }));
        let json = serde_json::to_value(DisplayTarget::Primary).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "primary" }));
    }
}
