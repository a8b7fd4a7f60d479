//! Caps on loadouts and on unattended battle runs

/// Total skill slots per character, move instances included
pub const MAX_SKILL_SLOTS: usize = 10;
/// Most copies of the innate move skill a character may hold
pub const MAX_MOVE_INSTANCES: usize = 3;
/// Hex distance counted by the `most_enemies_nearby` strategy
pub const NEARBY_RADIUS: u32 = 2;
/// Tick cap for `run_to_end` callers that don't pass their own
pub const MAX_TICKS_PER_BATTLE: u32 = 1_000;
