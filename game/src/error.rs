//! Error types for roster and loadout edits
//!
//! Plain enums with no `String` payloads so they stay SCALE-encodable and
//! no_std compatible. The public editors turn these into `bool` results.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// Reasons an edit was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "type", rename_all = "camelCase"))]
pub enum GameError {
    /// No character with this id
    UnknownCharacter { id: u32 },
    /// Character holds no skill with this instance id
    UnknownSkillInstance { instance_id: u32 },
    /// Catalog has no such skill
    UnknownCatalogSkill,
    /// Skill index can't move in the requested direction
    InvalidSkillIndex { index: u32 },
    /// Cell is not on the board
    OutOfBounds,
    /// Cell already holds a living character
    CellOccupied,
    /// Deployment half is full
    NoFreeCell,
    /// Catalog has no innate move skill to grant new characters
    MissingInnateSkill,
    /// Another character of the same faction holds this skill
    FactionExclusive,
    /// Character already holds this skill
    AlreadyEquipped,
    /// All skill slots are taken
    SlotsFull,
    /// Character already holds the maximum number of move instances
    MoveLimitReached,
    /// The last move instance can't be removed
    InnateSkillRequired,
    /// The innate skill is granted, not assigned
    InnateSkill,
    /// Only the innate move skill can be duplicated
    NotDuplicable,
    /// Movement skills can't target self
    InvalidSelector,
    /// A movement mode was given for a non-movement skill
    NotMovementSkill,
}

/// Result type alias for edits
pub type GameResult<T> = Result<T, GameError>;
