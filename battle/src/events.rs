use alloc::string::String;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::hex::Hex;
use crate::state::BattleStatus;
use crate::types::{ActionType, CharacterId, SkillInstanceId, Tick};

/// Entries of the append-only battle history.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum BattleEvent {
    #[serde(rename_all = "camelCase")]
    ActionStarted {
        tick: Tick,
        actor_id: CharacterId,
        action_type: ActionType,
        skill_instance_id: SkillInstanceId,
        skill_name: String,
        target_cell: Hex,
        resolves_at_tick: Tick,
    },
    #[serde(rename_all = "camelCase")]
    Damage {
        tick: Tick,
        source_id: CharacterId,
        target_id: CharacterId,
        amount: i32,
        remaining_hp: i32,
    },
    #[serde(rename_all = "camelCase")]
    Heal {
        tick: Tick,
        source_id: CharacterId,
        target_id: CharacterId,
        amount: i32,
        new_hp: i32,
    },
    /// Attack landed on an empty cell
    #[serde(rename_all = "camelCase")]
    Miss {
        tick: Tick,
        source_id: CharacterId,
        target_cell: Hex,
    },
    #[serde(rename_all = "camelCase")]
    Movement {
        tick: Tick,
        character_id: CharacterId,
        from: Hex,
        to: Hex,
    },
    /// Destination was occupied or out of bounds at resolution time
    #[serde(rename_all = "camelCase")]
    MoveBlocked {
        tick: Tick,
        character_id: CharacterId,
        destination: Hex,
    },
    #[serde(rename_all = "camelCase")]
    Death { tick: Tick, character_id: CharacterId },
    #[serde(rename_all = "camelCase")]
    BattleEnded { tick: Tick, status: BattleStatus },
}

impl BattleEvent {
    pub fn tick(&self) -> Tick {
        match self {
            BattleEvent::ActionStarted { tick, .. }
            | BattleEvent::Damage { tick, .. }
            | BattleEvent::Heal { tick, .. }
            | BattleEvent::Miss { tick, .. }
            | BattleEvent::Movement { tick, .. }
            | BattleEvent::MoveBlocked { tick, .. }
            | BattleEvent::Death { tick, .. }
            | BattleEvent::BattleEnded { tick, .. } => *tick,
        }
    }
}
