//! Selector Evaluator
//!
//! Maps a character and a `Selector` onto a concrete target. Every ranking
//! ends in an explicit `(r, q)` comparison so the result never depends on
//! roster order.

use crate::hex::Hex;
use crate::limits::NEARBY_RADIUS;
use crate::types::{Character, CharacterId, Selector, Strategy, TargetCategory, TargetFilter};

/// Pick a target for `evaluator`, or `None` when the candidate pool is empty
pub fn evaluate<'a>(
    selector: Selector,
    evaluator: &'a Character,
    roster: &'a [Character],
) -> Option<&'a Character> {
    evaluate_filtered(selector, evaluator, roster, None)
}

/// Like `evaluate`, with candidates pre-filtered before ranking. Neighbourhood
/// counts still see the whole roster.
pub fn evaluate_filtered<'a>(
    selector: Selector,
    evaluator: &'a Character,
    roster: &'a [Character],
    filter: Option<&TargetFilter>,
) -> Option<&'a Character> {
    if !evaluator.is_alive() {
        return None;
    }
    let passes = |c: &Character| filter.map_or(true, |f| f.matches(c));

    if selector.category == TargetCategory::SelfUnit {
        return passes(evaluator).then_some(evaluator);
    }

    roster
        .iter()
        .filter(|c| in_category(selector.category, evaluator, c))
        .filter(|c| passes(*c))
        .min_by_key(|c| rank_key(selector.strategy, evaluator, c, roster))
}

/// Living members of `category` as seen from `evaluator`
pub fn in_category(category: TargetCategory, evaluator: &Character, candidate: &Character) -> bool {
    if !candidate.is_alive() {
        return false;
    }
    match category {
        TargetCategory::Enemy => candidate.faction != evaluator.faction,
        TargetCategory::Ally => candidate.faction == evaluator.faction && candidate.id != evaluator.id,
        TargetCategory::SelfUnit => candidate.id == evaluator.id,
    }
}

/// Lower sorts first. Ties fall through to reading order, then id.
fn rank_key(
    strategy: Strategy,
    evaluator: &Character,
    candidate: &Character,
    roster: &[Character],
) -> (i64, Hex, CharacterId) {
    let primary = match strategy {
        Strategy::Nearest => evaluator.position.distance(&candidate.position) as i64,
        Strategy::Furthest => -(evaluator.position.distance(&candidate.position) as i64),
        Strategy::LowestHp => candidate.hp as i64,
        Strategy::HighestHp => -(candidate.hp as i64),
        Strategy::MostEnemiesNearby => -(enemies_near(evaluator, candidate, roster) as i64),
    };
    (primary, candidate.position, candidate.id)
}

/// Living enemies of `evaluator` within `NEARBY_RADIUS` of `candidate`,
/// the candidate itself excluded
pub fn enemies_near(evaluator: &Character, candidate: &Character, roster: &[Character]) -> usize {
    roster
        .iter()
        .filter(|c| c.is_alive() && c.faction != evaluator.faction && c.id != candidate.id)
        .filter(|c| c.position.distance(&candidate.position) <= NEARBY_RADIUS)
        .count()
}
