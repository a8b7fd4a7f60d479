//! Action Resolver
//!
//! Turns decisions into committed actions and applies matured actions to
//! the roster.

use alloc::format;
use alloc::vec::Vec;

use crate::decision::DecidedAction;
use crate::events::BattleEvent;
use crate::log;
use crate::types::*;

/// Lock a decision in as an action starting at `tick`
pub fn commit(decided: &DecidedAction, tick: Tick) -> Action {
    let action = Action {
        action_type: decided.action_type,
        skill: decided.skill.clone(),
        target_cell: decided.target_cell,
        target_character: decided.target.clone(),
        focus: Some(decided.focus),
        started_at_tick: tick,
        resolves_at_tick: tick + decided.skill.tick_cost.max(1),
    };
    debug_assert!(
        action.resolves_at_tick > action.started_at_tick,
        "action resolves before it starts"
    );
    action
}

/// Apply a matured action of `actor`
pub fn resolve(
    roster: &mut [Character],
    actor: CharacterId,
    action: &Action,
    tick: Tick,
    events: &mut Vec<BattleEvent>,
) {
    debug_assert!(action.resolves_at_tick >= action.started_at_tick);
    match action.skill.effect {
        SkillEffect::Movement { .. } => resolve_move(roster, actor, action, tick, events),
        SkillEffect::Damage { amount } => resolve_attack(roster, actor, action, amount, tick, events),
        SkillEffect::Healing { amount } => resolve_heal(roster, actor, action, amount, tick, events),
    }
}

/// Relocate the actor onto the locked cell, unless it became occupied or
/// lies off the board
fn resolve_move(
    roster: &mut [Character],
    actor: CharacterId,
    action: &Action,
    tick: Tick,
    events: &mut Vec<BattleEvent>,
) {
    let destination = action.target_cell;
    let blocked = !destination.in_bounds()
        || roster.iter().any(|c| c.id != actor && c.is_alive() && c.position == destination);

    let Some(mover) = roster.iter_mut().find(|c| c.id == actor) else {
        return;
    };

    if blocked {
        log::debug("move", &format!("{} blocked at {:?}", mover.name, destination));
        events.push(BattleEvent::MoveBlocked {
            tick,
            character_id: actor,
            destination,
        });
        return;
    }

    let from = mover.position;
    mover.position = destination;
    events.push(BattleEvent::Movement {
        tick,
        character_id: actor,
        from,
        to: destination,
    });
}

/// Damage whoever stands on the locked cell now
fn resolve_attack(
    roster: &mut [Character],
    actor: CharacterId,
    action: &Action,
    amount: i32,
    tick: Tick,
    events: &mut Vec<BattleEvent>,
) {
    let target_cell = action.target_cell;
    let Some(target) = roster
        .iter_mut()
        .find(|c| c.id != actor && c.is_alive() && c.position == target_cell)
    else {
        events.push(BattleEvent::Miss {
            tick,
            source_id: actor,
            target_cell,
        });
        return;
    };

    target.hp -= amount;
    events.push(BattleEvent::Damage {
        tick,
        source_id: actor,
        target_id: target.id,
        amount,
        remaining_hp: target.hp,
    });

    if !target.is_alive() {
        log::info(&format!("{} falls at tick {}", target.name, tick));
        target.current_action = None;
        events.push(BattleEvent::Death {
            tick,
            character_id: target.id,
        });
    }
}

/// Heal the snapshot's character, looked up live by id. Dead targets stay
/// dead.
fn resolve_heal(
    roster: &mut [Character],
    actor: CharacterId,
    action: &Action,
    amount: i32,
    tick: Tick,
    events: &mut Vec<BattleEvent>,
) {
    let Some(target_id) = action.target_character.as_ref().map(|t| t.id) else {
        return;
    };
    let Some(target) = roster.iter_mut().find(|c| c.id == target_id && c.is_alive()) else {
        log::debug("heal", &format!("target {:?} no longer alive", target_id));
        return;
    };

    let before = target.hp;
    target.hp = (target.hp + amount).min(target.max_hp);
    events.push(BattleEvent::Heal {
        tick,
        source_id: actor,
        target_id,
        amount: target.hp - before,
        new_hp: target.hp,
    });
}
