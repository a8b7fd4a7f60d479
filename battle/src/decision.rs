//! Skill Decision Engine
//!
//! Walks a character's skills in priority order and settles on the first
//! one whose preconditions hold. Nothing here mutates state, so the same
//! walk drives both the clock and the preview queries.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::hex::Hex;
use crate::selector::evaluate_filtered;
use crate::state::occupant;
use crate::triggers::all_satisfied;
use crate::types::*;

/// Why a skill was passed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum SkillRejection {
    Disabled,
    OnCooldown,
    /// Clause at `index` of the trigger list failed
    TriggerFailed { index: u32 },
    /// Selector found no candidate
    NoTarget,
    /// Target is further than the skill's range
    OutOfRange,
    /// Movement would not change anything
    HoldPosition,
    /// Movement skills can't target self
    InvalidSelector,
}

/// A skill that passed every check, with its target resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecidedAction {
    pub skill_index: usize,
    pub skill: Skill,
    pub action_type: ActionType,
    pub target_cell: Hex,
    /// Snapshot for character-targeted effects
    pub target: Option<TargetSnapshot>,
    /// Character the selector picked
    pub focus: CharacterId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Act(DecidedAction),
    Idle,
}

impl Decision {
    pub fn action(&self) -> Option<&DecidedAction> {
        match self {
            Decision::Act(decided) => Some(decided),
            Decision::Idle => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Decision::Idle)
    }
}

/// First skill of `character` that passes all checks, or idle
pub fn decide(character: &Character, roster: &[Character]) -> Decision {
    if !character.is_alive() {
        return Decision::Idle;
    }
    character
        .skills
        .iter()
        .enumerate()
        .find_map(|(index, skill)| evaluate_skill(index, skill, character, roster).ok())
        .map_or(Decision::Idle, Decision::Act)
}

/// Run every check for one skill, in priority-walk order
pub fn evaluate_skill(
    skill_index: usize,
    skill: &Skill,
    character: &Character,
    roster: &[Character],
) -> Result<DecidedAction, SkillRejection> {
    if !skill.enabled {
        return Err(SkillRejection::Disabled);
    }
    if skill.is_on_cooldown() {
        return Err(SkillRejection::OnCooldown);
    }
    all_satisfied(&skill.triggers, character, roster)
        .map_err(|index| SkillRejection::TriggerFailed { index: index as u32 })?;

    if let SkillEffect::Movement { mode: MovementMode::Hold } = skill.effect {
        return Err(SkillRejection::HoldPosition);
    }
    if skill.is_movement() && skill.selector().category == TargetCategory::SelfUnit {
        return Err(SkillRejection::InvalidSelector);
    }

    let target = evaluate_filtered(skill.selector(), character, roster, skill.target_filter.as_ref())
        .ok_or(SkillRejection::NoTarget)?;

    let (target_cell, snapshot) = match skill.effect {
        SkillEffect::Movement { mode } => {
            let step = movement_step(character, target.position, mode, roster)
                .ok_or(SkillRejection::HoldPosition)?;
            (step, None)
        }
        SkillEffect::Damage { .. } => {
            ensure_in_range(skill, character, target)?;
            (target.position, None)
        }
        SkillEffect::Healing { .. } => {
            ensure_in_range(skill, character, target)?;
            (target.position, Some(TargetSnapshot::from(target)))
        }
    };

    Ok(DecidedAction {
        skill_index,
        skill: skill.clone(),
        action_type: skill.effect.action_type(),
        target_cell,
        target: snapshot,
        focus: target.id,
    })
}

fn ensure_in_range(skill: &Skill, character: &Character, target: &Character) -> Result<(), SkillRejection> {
    if character.position.distance(&target.position) > skill.range {
        return Err(SkillRejection::OutOfRange);
    }
    Ok(())
}

/// One-hex step relative to `goal`. Only free, in-bounds neighbours that
/// strictly improve the distance qualify; ties go to reading order.
pub fn movement_step(character: &Character, goal: Hex, mode: MovementMode, roster: &[Character]) -> Option<Hex> {
    let current = character.position.distance(&goal);
    let candidates = character
        .position
        .neighbors()
        .into_iter()
        .filter(|cell| cell.in_bounds() && occupant(roster, *cell).is_none());

    match mode {
        MovementMode::Towards => candidates
            .filter(|cell| cell.distance(&goal) < current)
            .min_by_key(|cell| (cell.distance(&goal), *cell)),
        MovementMode::Away => candidates
            .filter(|cell| cell.distance(&goal) > current)
            .min_by_key(|cell| (core::cmp::Reverse(cell.distance(&goal)), *cell)),
        MovementMode::Hold => None,
    }
}
