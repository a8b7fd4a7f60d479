//! Session layer for Hexclash
//!
//! Owns a battle plus the skill catalog and exposes the roster and skill
//! editors used while setting a battle up.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod loadout;
pub mod log;
pub mod roster;
pub mod session;

#[cfg(test)]
mod tests;

pub use error::{GameError, GameResult};
pub use loadout::SkillUpdate;
pub use session::GameSession;
