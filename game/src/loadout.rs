//! Skill editors
//!
//! Every edit targets a skill by `SkillInstanceId`, so two copies of the
//! same catalog skill are configured independently.

use alloc::format;
use alloc::vec::Vec;

use hexclash_battle::limits::{MAX_MOVE_INSTANCES, MAX_SKILL_SLOTS};
use hexclash_battle::types::*;

use crate::error::{GameError, GameResult};
use crate::log;
use crate::session::GameSession;

/// Partial update for one equipped skill; `None` leaves a field alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillUpdate {
    pub enabled: Option<bool>,
    pub triggers: Option<Vec<Trigger>>,
    /// `Some(None)` clears the override back to nearest enemy
    pub selector_override: Option<Option<Selector>>,
    pub target_filter: Option<Option<TargetFilter>>,
    /// Movement skills only
    pub mode: Option<MovementMode>,
}

impl GameSession {
    pub fn update_skill(&mut self, character: CharacterId, instance: SkillInstanceId, update: SkillUpdate) -> bool {
        Self::report("update_skill", self.try_update_skill(character, instance, update))
    }

    pub fn try_update_skill(
        &mut self,
        character: CharacterId,
        instance: SkillInstanceId,
        update: SkillUpdate,
    ) -> GameResult<()> {
        log::action("update_skill", &format!("{:?} {:?}", character, instance));
        self.edit("update_skill", |session| {
            let skill = session.skill_mut(character, instance)?;

            if skill.is_movement() {
                if let Some(Some(selector)) = update.selector_override {
                    if selector.category == TargetCategory::SelfUnit {
                        return Err(GameError::InvalidSelector);
                    }
                }
            } else if update.mode.is_some() {
                return Err(GameError::NotMovementSkill);
            }

            if let Some(enabled) = update.enabled {
                skill.enabled = enabled;
            }
            if let Some(triggers) = update.triggers {
                skill.triggers = triggers;
            }
            if let Some(selector) = update.selector_override {
                skill.selector_override = selector;
            }
            if let Some(filter) = update.target_filter {
                skill.target_filter = filter;
            }
            if let Some(mode) = update.mode {
                skill.effect = SkillEffect::Movement { mode };
            }
            Ok(())
        })
    }

    /// Swap the skill at `index` with the one above it
    pub fn move_skill_up(&mut self, character: CharacterId, index: usize) -> bool {
        Self::report("move_skill_up", self.try_move_skill_up(character, index))
    }

    pub fn try_move_skill_up(&mut self, character: CharacterId, index: usize) -> GameResult<()> {
        self.edit("move_skill_up", |session| {
            let skills = &mut session.find_character_mut(character)?.skills;
            if index == 0 || index >= skills.len() {
                return Err(GameError::InvalidSkillIndex { index: index as u32 });
            }
            skills.swap(index - 1, index);
            Ok(())
        })
    }

    /// Swap the skill at `index` with the one below it
    pub fn move_skill_down(&mut self, character: CharacterId, index: usize) -> bool {
        Self::report("move_skill_down", self.try_move_skill_down(character, index))
    }

    pub fn try_move_skill_down(&mut self, character: CharacterId, index: usize) -> GameResult<()> {
        self.edit("move_skill_down", |session| {
            let skills = &mut session.find_character_mut(character)?.skills;
            if index + 1 >= skills.len() {
                return Err(GameError::InvalidSkillIndex { index: index as u32 });
            }
            skills.swap(index, index + 1);
            Ok(())
        })
    }

    /// Equip a fresh copy of a catalog skill at the lowest priority
    pub fn assign_skill_to_character(&mut self, character: CharacterId, skill: &SkillDefId) -> bool {
        Self::report("assign_skill_to_character", self.try_assign_skill(character, skill))
    }

    pub fn try_assign_skill(&mut self, character: CharacterId, skill: &SkillDefId) -> GameResult<SkillInstanceId> {
        log::action("assign_skill", &format!("{:?} {}", character, skill.as_str()));
        self.edit("assign_skill_to_character", |session| {
            let definition = session
                .catalog
                .get(skill)
                .cloned()
                .ok_or(GameError::UnknownCatalogSkill)?;
            if definition.innate {
                return Err(GameError::InnateSkill);
            }

            let holder = session.find_character(character)?;
            let faction = holder.faction;
            if holder.holds_skill(skill) {
                return Err(GameError::AlreadyEquipped);
            }
            let taken = session
                .state
                .characters
                .iter()
                .any(|c| c.id != character && c.faction == faction && c.holds_skill(skill));
            if taken {
                return Err(GameError::FactionExclusive);
            }
            if holder.skills.len() >= MAX_SKILL_SLOTS {
                return Err(GameError::SlotsFull);
            }

            let instance_id = session.state.generate_instance_id();
            session
                .find_character_mut(character)?
                .skills
                .push(definition.instantiate(instance_id));
            Ok(instance_id)
        })
    }

    pub fn remove_skill_from_character(&mut self, character: CharacterId, instance: SkillInstanceId) -> bool {
        Self::report(
            "remove_skill_from_character",
            self.try_remove_skill(character, instance),
        )
    }

    pub fn try_remove_skill(&mut self, character: CharacterId, instance: SkillInstanceId) -> GameResult<()> {
        log::action("remove_skill", &format!("{:?} {:?}", character, instance));
        self.edit("remove_skill_from_character", |session| {
            let holder = session.find_character_mut(character)?;
            let index = holder
                .skill_index(instance)
                .ok_or(GameError::UnknownSkillInstance { instance_id: instance.0 })?;
            if holder.skills[index].is_innate() && holder.innate_count() <= 1 {
                return Err(GameError::InnateSkillRequired);
            }
            holder.skills.remove(index);
            Ok(())
        })
    }

    /// Add another move instance right below the source
    pub fn duplicate_skill(&mut self, character: CharacterId, instance: SkillInstanceId) -> bool {
        Self::report("duplicate_skill", self.try_duplicate_skill(character, instance))
    }

    pub fn try_duplicate_skill(
        &mut self,
        character: CharacterId,
        instance: SkillInstanceId,
    ) -> GameResult<SkillInstanceId> {
        log::action("duplicate_skill", &format!("{:?} {:?}", character, instance));
        self.edit("duplicate_skill", |session| {
            let holder = session.find_character(character)?;
            let index = holder
                .skill_index(instance)
                .ok_or(GameError::UnknownSkillInstance { instance_id: instance.0 })?;
            if !holder.skills[index].is_innate() {
                return Err(GameError::NotDuplicable);
            }
            if holder.innate_count() >= MAX_MOVE_INSTANCES {
                return Err(GameError::MoveLimitReached);
            }
            if holder.skills.len() >= MAX_SKILL_SLOTS {
                return Err(GameError::SlotsFull);
            }

            let mut copy = holder.skills[index].clone();
            copy.instance_id = session.state.generate_instance_id();
            copy.cooldown_remaining = 0;
            let new_id = copy.instance_id;
            session.find_character_mut(character)?.skills.insert(index + 1, copy);
            Ok(new_id)
        })
    }

    fn find_character(&self, id: CharacterId) -> GameResult<&Character> {
        self.state
            .character(id)
            .ok_or(GameError::UnknownCharacter { id: id.0 })
    }

    fn find_character_mut(&mut self, id: CharacterId) -> GameResult<&mut Character> {
        self.state
            .character_mut(id)
            .ok_or(GameError::UnknownCharacter { id: id.0 })
    }

    fn skill_mut(&mut self, character: CharacterId, instance: SkillInstanceId) -> GameResult<&mut Skill> {
        self.find_character_mut(character)?
            .skill_mut(instance)
            .ok_or(GameError::UnknownSkillInstance { instance_id: instance.0 })
    }
}
