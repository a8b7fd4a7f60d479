//! Read-only query surface for the UI
//!
//! Nothing here mutates the battle. Previews reuse the decision walk, so
//! an idle character's preview is exactly what it commits on its next tick.

use alloc::string::String;
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::decision::{decide, evaluate_skill, DecidedAction, Decision, SkillRejection};
use crate::hex::Hex;
use crate::state::BattleState;
use crate::types::*;

/// Outcome of one skill in the priority walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "camelCase")]
pub enum SkillVerdict {
    Selected,
    Rejected(SkillRejection),
    /// A higher-priority skill was selected first
    NotReached,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEvaluation {
    pub skill_instance_id: SkillInstanceId,
    pub skill_id: SkillDefId,
    pub skill_name: String,
    pub verdict: SkillVerdict,
}

/// Per-character summary of the decision walk
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterEvaluation {
    pub character_id: CharacterId,
    pub is_mid_action: bool,
    /// Index of the skill the walk settles on, if any
    pub selected_index: Option<u32>,
    pub skills: Vec<SkillEvaluation>,
}

/// What a character is doing, or would do next
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub character_id: CharacterId,
    pub action_type: ActionType,
    pub skill_instance_id: SkillInstanceId,
    pub skill_name: String,
    /// Mechanical target, locked at decision time
    pub target_cell: Hex,
    /// Where to draw the target: the live position for character-targeted
    /// skills, the locked cell otherwise
    pub target_position: Hex,
    pub ticks_remaining: u32,
    /// Not yet committed
    pub is_preview: bool,
}

/// Pairs for drawing movement arrows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementTarget {
    pub character_id: CharacterId,
    pub target_id: Option<CharacterId>,
    pub destination: Hex,
}

pub fn evaluate_character(state: &BattleState, id: CharacterId) -> Option<CharacterEvaluation> {
    let character = state.character(id)?;
    let roster = &state.characters;

    let mut selected_index = None;
    let skills = character
        .skills
        .iter()
        .enumerate()
        .map(|(index, skill)| {
            let verdict = if selected_index.is_some() || !character.is_alive() {
                SkillVerdict::NotReached
            } else {
                match evaluate_skill(index, skill, character, roster) {
                    Ok(_) => {
                        selected_index = Some(index as u32);
                        SkillVerdict::Selected
                    }
                    Err(reason) => SkillVerdict::Rejected(reason),
                }
            };
            SkillEvaluation {
                skill_instance_id: skill.instance_id,
                skill_id: skill.id.clone(),
                skill_name: skill.name.clone(),
                verdict,
            }
        })
        .collect();

    Some(CharacterEvaluation {
        character_id: id,
        is_mid_action: character.current_action.is_some(),
        selected_index,
        skills,
    })
}

pub fn evaluate_all(state: &BattleState) -> Vec<CharacterEvaluation> {
    state
        .characters
        .iter()
        .filter_map(|c| evaluate_character(state, c.id))
        .collect()
}

/// The in-flight action, or a preview of the next decision for idle
/// characters of an active battle
pub fn character_intent(state: &BattleState, id: CharacterId) -> Option<Intent> {
    let character = state.character(id)?;
    if !character.is_alive() {
        return None;
    }

    if let Some(action) = &character.current_action {
        let ticks_remaining = action.ticks_remaining(state.tick)?;
        let target_position = action
            .target_character
            .as_ref()
            .map(|snapshot| {
                state
                    .character(snapshot.id)
                    .map_or(snapshot.position, |live| live.position)
            })
            .unwrap_or(action.target_cell);
        return Some(Intent {
            character_id: id,
            action_type: action.action_type,
            skill_instance_id: action.skill.instance_id,
            skill_name: action.skill.name.clone(),
            target_cell: action.target_cell,
            target_position,
            ticks_remaining,
            is_preview: false,
        });
    }

    if !state.battle_status.is_active() {
        return None;
    }
    let decided = decide(character, &state.characters).action().cloned()?;
    Some(preview_intent(id, &decided))
}

fn preview_intent(id: CharacterId, decided: &DecidedAction) -> Intent {
    Intent {
        character_id: id,
        action_type: decided.action_type,
        skill_instance_id: decided.skill.instance_id,
        skill_name: decided.skill.name.clone(),
        target_cell: decided.target_cell,
        target_position: decided.target.as_ref().map_or(decided.target_cell, |t| t.position),
        ticks_remaining: decided.skill.tick_cost,
        is_preview: true,
    }
}

pub fn intents(state: &BattleState) -> Vec<Intent> {
    state
        .characters
        .iter()
        .filter_map(|c| character_intent(state, c.id))
        .collect()
}

/// Committed or previewed moves, with the character each one chases or flees
pub fn movement_targets(state: &BattleState) -> Vec<MovementTarget> {
    state
        .characters
        .iter()
        .filter(|c| c.is_alive())
        .filter_map(|c| match &c.current_action {
            Some(action) if action.action_type == ActionType::Move => Some(MovementTarget {
                character_id: c.id,
                target_id: action.focus,
                destination: action.target_cell,
            }),
            Some(_) => None,
            None if state.battle_status.is_active() => match decide(c, &state.characters) {
                Decision::Act(decided) if decided.action_type == ActionType::Move => Some(MovementTarget {
                    character_id: c.id,
                    target_id: Some(decided.focus),
                    destination: decided.target_cell,
                }),
                _ => None,
            },
            None => None,
        })
        .collect()
}
