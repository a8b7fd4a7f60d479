use crate::selector::in_category;
use crate::types::{Character, TargetCategory, Trigger};

impl Trigger {
    /// Whether this clause holds for `evaluator` against `roster`
    pub fn is_satisfied(&self, evaluator: &Character, roster: &[Character]) -> bool {
        match *self {
            Trigger::Always => true,
            Trigger::EnemyInRange(range) => any_within(TargetCategory::Enemy, range, evaluator, roster),
            Trigger::AllyInRange(range) => any_within(TargetCategory::Ally, range, evaluator, roster),
            Trigger::HpBelow(percent) => evaluator.hp_at_most_percent(percent),
            Trigger::MyCellTargetedByEnemy => roster.iter().any(|c| {
                in_category(TargetCategory::Enemy, evaluator, c)
                    && c.current_action
                        .as_ref()
                        .map_or(false, |action| action.target_cell == evaluator.position)
            }),
        }
    }
}

fn any_within(category: TargetCategory, range: u32, evaluator: &Character, roster: &[Character]) -> bool {
    roster
        .iter()
        .filter(|c| in_category(category, evaluator, c))
        .any(|c| evaluator.position.distance(&c.position) <= range)
}

/// Check a clause list as a conjunction; `Err` carries the first failing
/// clause's index
pub fn all_satisfied(triggers: &[Trigger], evaluator: &Character, roster: &[Character]) -> Result<(), usize> {
    match triggers.iter().position(|t| !t.is_satisfied(evaluator, roster)) {
        Some(index) => Err(index),
        None => Ok(()),
    }
}
