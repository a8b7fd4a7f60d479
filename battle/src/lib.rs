//! Deterministic hex-grid auto-battler engine
//!
//! Characters of two factions pick skills by priority, commit to actions
//! with a wind-up measured in ticks, and resolve them against a shared
//! roster until one side is left standing.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod catalog;
pub mod clock;
pub mod decision;
pub mod events;
pub mod hex;
pub mod limits;
pub mod log;
pub mod resolver;
pub mod rng;
pub mod selector;
pub mod state;
pub mod triggers;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use catalog::SkillCatalog;
pub use clock::{advance, init_battle, init_battle_with_seed, reset, run_to_end};
pub use decision::{decide, DecidedAction, Decision, SkillRejection};
pub use events::BattleEvent;
pub use hex::{Hex, OffsetCoord};
pub use rng::{BattleRng, XorShiftRng};
pub use state::{BattleState, BattleStatus};
pub use types::*;
pub use view::*;
