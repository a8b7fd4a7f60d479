use alloc::format;

use hexclash_battle::hex::Hex;
use hexclash_battle::rng::BattleRng;
use hexclash_battle::state::DEFAULT_MAX_HP;
use hexclash_battle::types::{Character, CharacterId, Faction, SkillDefinition};

use crate::error::{GameError, GameResult};
use crate::log;
use crate::session::GameSession;

impl GameSession {
    /// Add a character on a random free cell of its faction's half
    pub fn add_character(&mut self, faction: Faction) -> bool {
        Self::report("add_character", self.try_add_character(faction))
    }

    pub fn try_add_character(&mut self, faction: Faction) -> GameResult<CharacterId> {
        log::action("add_character", faction.label());
        self.edit("add_character", |session| {
            let innate = session.innate_skill()?;
            let free = session.state.free_deployment_cells(faction);
            if free.is_empty() {
                return Err(GameError::NoFreeCell);
            }
            let cell = free[session.state.rng.gen_range(free.len())];
            Ok(session.spawn(faction, cell, innate))
        })
    }

    pub fn add_character_at_position(&mut self, faction: Faction, position: Hex) -> bool {
        Self::report(
            "add_character_at_position",
            self.try_add_character_at_position(faction, position),
        )
    }

    pub fn try_add_character_at_position(&mut self, faction: Faction, position: Hex) -> GameResult<CharacterId> {
        log::action("add_character_at_position", &format!("{} {:?}", faction.label(), position));
        self.edit("add_character_at_position", |session| {
            session.check_placement(position, None)?;
            let innate = session.innate_skill()?;
            Ok(session.spawn(faction, position, innate))
        })
    }

    pub fn remove_character(&mut self, id: CharacterId) -> bool {
        Self::report("remove_character", self.try_remove_character(id))
    }

    pub fn try_remove_character(&mut self, id: CharacterId) -> GameResult<()> {
        log::action("remove_character", &format!("{:?}", id));
        self.edit("remove_character", |session| {
            let index = session
                .state
                .index_of(id)
                .ok_or(GameError::UnknownCharacter { id: id.0 })?;
            session.state.characters.remove(index);
            session.state.renumber_slots();
            Ok(())
        })
    }

    pub fn move_character(&mut self, id: CharacterId, position: Hex) -> bool {
        Self::report("move_character", self.try_move_character(id, position))
    }

    pub fn try_move_character(&mut self, id: CharacterId, position: Hex) -> GameResult<()> {
        log::action("move_character", &format!("{:?} -> {:?}", id, position));
        self.edit("move_character", |session| {
            if session.state.character(id).is_none() {
                return Err(GameError::UnknownCharacter { id: id.0 });
            }
            session.check_placement(position, Some(id))?;
            if let Some(character) = session.state.character_mut(id) {
                character.position = position;
            }
            Ok(())
        })
    }

    /// Same occupancy rule the resolver applies to moves
    fn check_placement(&self, position: Hex, mover: Option<CharacterId>) -> GameResult<()> {
        if !position.in_bounds() {
            return Err(GameError::OutOfBounds);
        }
        match self.state.occupant(position) {
            Some(occupant) if Some(occupant.id) != mover => Err(GameError::CellOccupied),
            _ => Ok(()),
        }
    }

    /// Every character starts with one instance of the catalog's innate skill
    fn innate_skill(&self) -> GameResult<SkillDefinition> {
        self.catalog.innate().cloned().ok_or(GameError::MissingInnateSkill)
    }

    /// Create a character holding `innate` and append it
    fn spawn(&mut self, faction: Faction, position: Hex, innate: SkillDefinition) -> CharacterId {
        let id = self.state.generate_character_id();
        let name = format!("{} {}", faction.label(), id.0);
        let mut character = Character::new(id, &name, faction, position, DEFAULT_MAX_HP);
        let instance_id = self.state.generate_instance_id();
        character.skills.push(innate.instantiate(instance_id));

        self.state.characters.push(character);
        self.state.renumber_slots();
        id
    }
}
