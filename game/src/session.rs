//! Session layer
//!
//! A `GameSession` pairs a `BattleState` with the skill catalog that roster
//! and loadout edits draw from. Edits land between ticks at any point of
//! the run; each accepted edit recomputes the battle status and becomes
//! part of the reset snapshot.

use alloc::vec::Vec;

use hexclash_battle::catalog::SkillCatalog;
use hexclash_battle::clock;
use hexclash_battle::state::{BattleState, BattleStatus, DEFAULT_SEED};
use hexclash_battle::types::{Character, CharacterId};
use hexclash_battle::view::{self, CharacterEvaluation, Intent, MovementTarget};

use crate::error::GameResult;
use crate::log;

#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) state: BattleState,
    pub(crate) catalog: SkillCatalog,
}

impl GameSession {
    /// Empty battle seeded with `DEFAULT_SEED`
    pub fn new(catalog: SkillCatalog) -> Self {
        Self::with_seed(catalog, DEFAULT_SEED)
    }

    pub fn with_seed(catalog: SkillCatalog, seed: u64) -> Self {
        Self {
            state: BattleState::new(Vec::new(), seed),
            catalog,
        }
    }

    /// Replace the battle with `characters`, keeping the current seed
    pub fn init_battle(&mut self, characters: Vec<Character>) {
        log::info("init_battle");
        self.state = BattleState::new(characters, self.state.seed);
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    pub fn status(&self) -> BattleStatus {
        self.state.battle_status
    }

    pub fn advance(&mut self) {
        clock::advance(&mut self.state);
    }

    pub fn reset(&mut self) {
        clock::reset(&mut self.state);
    }

    pub fn run_to_end(&mut self, max_ticks: u32) -> BattleStatus {
        clock::run_to_end(&mut self.state, max_ticks)
    }

    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.state.character(id)
    }

    pub fn evaluations(&self) -> Vec<CharacterEvaluation> {
        view::evaluate_all(&self.state)
    }

    pub fn evaluation(&self, id: CharacterId) -> Option<CharacterEvaluation> {
        view::evaluate_character(&self.state, id)
    }

    pub fn intents(&self) -> Vec<Intent> {
        view::intents(&self.state)
    }

    pub fn intent(&self, id: CharacterId) -> Option<Intent> {
        view::character_intent(&self.state, id)
    }

    pub fn movement_targets(&self) -> Vec<MovementTarget> {
        view::movement_targets(&self.state)
    }

    /// Apply an edit between ticks. Failed edits must not have mutated
    /// anything.
    pub(crate) fn edit<T>(
        &mut self,
        op: &str,
        apply: impl FnOnce(&mut Self) -> GameResult<T>,
    ) -> GameResult<T> {
        let output = apply(self)?;
        self.state.recompute_status();
        self.state.refresh_snapshot();
        log::result(op, None);
        Ok(output)
    }

    /// Collapse a `GameResult` into the boolean the editors report
    pub(crate) fn report<T>(op: &str, result: GameResult<T>) -> bool {
        match result {
            Ok(_) => true,
            Err(error) => {
                log::result(op, Some(&error));
                false
            }
        }
    }
}
