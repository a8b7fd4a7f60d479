use alloc::sync::Arc;
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::events::BattleEvent;
use crate::hex::{board_cells, Hex};
use crate::rng::XorShiftRng;
use crate::types::*;

/// Radius of the hexagonal board around the origin
pub const BOARD_RADIUS: i32 = 4;
/// Seed used by `init_battle` when the caller doesn't pick one
pub const DEFAULT_SEED: u64 = 42;
/// Max hp of characters created by the roster editors
pub const DEFAULT_MAX_HP: i32 = 100;
/// Friendly characters deploy on rows `r >= FRIENDLY_MIN_ROW`
pub const FRIENDLY_MIN_ROW: i32 = 1;
/// Enemy characters deploy on rows `r <= ENEMY_MAX_ROW`
pub const ENEMY_MAX_ROW: i32 = -1;

/// Outcome of the battle so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BattleStatus {
    /// Nobody living on either side
    Draw,
    /// Both factions have a living member
    Active,
    /// Only friendly characters remain
    Victory,
    /// Only enemy characters remain
    Defeat,
}

impl BattleStatus {
    pub fn from_roster(characters: &[Character]) -> Self {
        let living = |faction: Faction| characters.iter().any(|c| c.faction == faction && c.is_alive());
        match (living(Faction::Friendly), living(Faction::Enemy)) {
            (true, true) => BattleStatus::Active,
            (true, false) => BattleStatus::Victory,
            (false, true) => BattleStatus::Defeat,
            (false, false) => BattleStatus::Draw,
        }
    }

    pub fn is_active(self) -> bool {
        self == BattleStatus::Active
    }
}

/// Authoritative state of one battle run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleState {
    pub tick: Tick,
    /// Insertion-ordered roster, stable across the run
    pub characters: Vec<Character>,
    pub battle_status: BattleStatus,
    pub history: Vec<BattleEvent>,
    pub seed: u64,
    pub rng: XorShiftRng,
    /// Roster that `reset` restores
    initial_characters: Arc<[Character]>,
    initial_rng: XorShiftRng,
    next_character_id: u32,
    next_instance_id: u32,
}

impl BattleState {
    pub fn new(characters: Vec<Character>, seed: u64) -> Self {
        let mut characters = characters;
        for (index, character) in characters.iter_mut().enumerate() {
            character.slot_position = index as u32 + 1;
            clear_progress(character);
        }

        let next_character_id = characters.iter().map(|c| c.id.0 + 1).max().unwrap_or(1);
        let next_instance_id = characters
            .iter()
            .flat_map(|c| c.skills.iter())
            .map(|s| s.instance_id.0 + 1)
            .max()
            .unwrap_or(1);

        let rng = XorShiftRng::seed_from_u64(seed);
        let battle_status = BattleStatus::from_roster(&characters);
        Self {
            tick: 0,
            initial_characters: Arc::from(characters.clone()),
            initial_rng: rng.clone(),
            characters,
            battle_status,
            history: Vec::new(),
            seed,
            rng,
            next_character_id,
            next_instance_id,
        }
    }

    /// Restore the snapshot roster, tick 0, the snapshot RNG and an empty
    /// history. Id counters are kept so later edits never reuse an id.
    pub fn reset(&mut self) {
        self.characters = self.initial_characters.to_vec();
        self.tick = 0;
        self.rng = self.initial_rng.clone();
        self.history.clear();
        self.recompute_status();
    }

    /// Capture the current roster and RNG as the reset target. In-flight
    /// actions and cooldown counters are left out of the snapshot.
    pub fn refresh_snapshot(&mut self) {
        let mut roster = self.characters.clone();
        roster.iter_mut().for_each(clear_progress);
        self.initial_characters = Arc::from(roster);
        self.initial_rng = self.rng.clone();
    }

    pub fn initial_characters(&self) -> &[Character] {
        &self.initial_characters
    }

    pub fn recompute_status(&mut self) -> BattleStatus {
        self.battle_status = BattleStatus::from_roster(&self.characters);
        self.battle_status
    }

    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn character_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.id == id)
    }

    pub fn index_of(&self, id: CharacterId) -> Option<usize> {
        self.characters.iter().position(|c| c.id == id)
    }

    /// Living character standing on `cell`
    pub fn occupant(&self, cell: Hex) -> Option<&Character> {
        occupant(&self.characters, cell)
    }

    /// In bounds and not held by a living character
    pub fn is_cell_free(&self, cell: Hex) -> bool {
        cell.in_bounds() && self.occupant(cell).is_none()
    }

    pub fn living(&self, faction: Faction) -> impl Iterator<Item = &Character> {
        self.characters.iter().filter(move |c| c.faction == faction && c.is_alive())
    }

    /// Free cells of the faction's deployment half, in reading order
    pub fn free_deployment_cells(&self, faction: Faction) -> Vec<Hex> {
        deployment_cells(faction)
            .into_iter()
            .filter(|cell| self.occupant(*cell).is_none())
            .collect()
    }

    /// Reassign 1-based slots in roster order
    pub fn renumber_slots(&mut self) {
        for (index, character) in self.characters.iter_mut().enumerate() {
            character.slot_position = index as u32 + 1;
        }
    }

    pub fn generate_character_id(&mut self) -> CharacterId {
        let id = self.next_character_id;
        self.next_character_id += 1;
        CharacterId(id)
    }

    pub fn generate_instance_id(&mut self) -> SkillInstanceId {
        let id = self.next_instance_id;
        self.next_instance_id += 1;
        SkillInstanceId(id)
    }
}

/// Drop the per-run state a character picks up while the clock runs
fn clear_progress(character: &mut Character) {
    character.current_action = None;
    for skill in character.skills.iter_mut() {
        skill.cooldown_remaining = 0;
    }
}

/// Living character standing on `cell`
pub fn occupant(characters: &[Character], cell: Hex) -> Option<&Character> {
    characters.iter().find(|c| c.is_alive() && c.position == cell)
}

/// Cells a faction may deploy on, in reading order
pub fn deployment_cells(faction: Faction) -> Vec<Hex> {
    board_cells(BOARD_RADIUS)
        .into_iter()
        .filter(|cell| match faction {
            Faction::Friendly => cell.r >= FRIENDLY_MIN_ROW,
            Faction::Enemy => cell.r <= ENEMY_MAX_ROW,
        })
        .collect()
}
