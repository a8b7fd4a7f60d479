//! Battle Clock
//!
//! Owns the tick loop. Every decision of a tick reads the roster as it
//! stood when the tick began; matured actions land afterwards, so nothing
//! decided at tick T has seen the effects of tick T.

use alloc::format;
use alloc::vec::Vec;

use crate::decision::{decide, Decision};
use crate::events::BattleEvent;
use crate::log;
use crate::resolver::{commit, resolve};
use crate::state::{BattleState, BattleStatus, DEFAULT_SEED};
use crate::types::*;

/// Start a battle from `characters` with the default seed
pub fn init_battle(characters: Vec<Character>) -> BattleState {
    BattleState::new(characters, DEFAULT_SEED)
}

pub fn init_battle_with_seed(characters: Vec<Character>, seed: u64) -> BattleState {
    BattleState::new(characters, seed)
}

/// Restore the battle to its snapshot
pub fn reset(state: &mut BattleState) {
    state.reset();
}

/// Run one tick. Does nothing once the battle is no longer active.
pub fn advance(state: &mut BattleState) {
    if !state.battle_status.is_active() {
        return;
    }

    let tick = state.tick;
    let mut events = Vec::new();

    // One read for every decision of this tick
    let snapshot = state.characters.clone();
    let decisions: Vec<(CharacterId, Decision)> = snapshot
        .iter()
        .filter(|c| c.is_alive() && c.current_action.is_none())
        .map(|c| (c.id, decide(c, &snapshot)))
        .collect();

    // Actors alive at the start of the tick all get to resolve
    let mut matured: Vec<(CharacterId, Action)> = Vec::new();
    for character in state.characters.iter_mut() {
        if !character.is_alive() {
            continue;
        }
        if character.current_action.as_ref().map_or(false, |a| a.matures_by(tick)) {
            if let Some(action) = character.current_action.take() {
                matured.push((character.id, action));
            }
        }
    }

    for (actor, action) in matured.iter().filter(|(_, a)| a.action_type == ActionType::Move) {
        resolve(&mut state.characters, *actor, action, tick, &mut events);
    }
    for (actor, action) in matured.iter().filter(|(_, a)| a.action_type != ActionType::Move) {
        resolve(&mut state.characters, *actor, action, tick, &mut events);
    }

    for character in state.characters.iter_mut().filter(|c| c.is_alive()) {
        for skill in character.skills.iter_mut() {
            skill.cooldown_remaining = skill.cooldown_remaining.saturating_sub(1);
        }
    }

    // Decisions of characters killed this tick are dropped, and nobody
    // commits once a side is wiped out
    let decisions = if BattleStatus::from_roster(&state.characters).is_active() {
        decisions
    } else {
        Vec::new()
    };
    for (actor, decision) in decisions {
        let Decision::Act(decided) = decision else {
            continue;
        };
        let Some(character) = state.characters.iter_mut().find(|c| c.id == actor && c.is_alive()) else {
            continue;
        };

        let action = commit(&decided, tick);
        log::action(
            &character.name,
            &format!("{} -> {:?} (resolves at {})", action.skill.name, action.target_cell, action.resolves_at_tick),
        );
        if let Some(skill) = character.skill_mut(decided.skill.instance_id) {
            skill.cooldown_remaining = skill.cooldown;
        }
        events.push(BattleEvent::ActionStarted {
            tick,
            actor_id: actor,
            action_type: action.action_type,
            skill_instance_id: action.skill.instance_id,
            skill_name: action.skill.name.clone(),
            target_cell: action.target_cell,
            resolves_at_tick: action.resolves_at_tick,
        });
        character.current_action = Some(action);
    }

    state.tick += 1;
    let status = state.recompute_status();
    if !status.is_active() {
        events.push(BattleEvent::BattleEnded { tick, status });
    }

    let in_flight = state.characters.iter().filter(|c| c.current_action.is_some()).count();
    let living = state.characters.iter().filter(|c| c.is_alive()).count();
    log::tick_summary(tick, status, living, in_flight, events.len());
    state.history.extend(events);
}

/// Advance until the battle ends or `max_ticks` is reached
pub fn run_to_end(state: &mut BattleState, max_ticks: Tick) -> BattleStatus {
    while state.battle_status.is_active() && state.tick < max_ticks {
        advance(state);
    }
    if state.battle_status.is_active() {
        log::warn("tick cap reached with the battle still active");
    }
    state.battle_status
}
