//! Logging utilities
//!
//! Thin wrappers over the `log` facade. No logger is installed here;
//! embedders pick one.

use crate::state::BattleStatus;
use crate::types::Tick;

const TARGET: &str = "hexclash::battle";

/// Log an info message
#[inline]
pub fn info(msg: &str) {
    ::log::info!(target: TARGET, "{}", msg);
}

/// Log a warning message
#[inline]
pub fn warn(msg: &str) {
    ::log::warn!(target: TARGET, "{}", msg);
}

/// Log a debug message with a label
#[inline]
pub fn debug(label: &str, msg: &str) {
    ::log::debug!(target: TARGET, "[{}] {}", label, msg);
}

/// Log an action being committed
#[inline]
pub fn action(name: &str, details: &str) {
    ::log::debug!(target: TARGET, "> {} {}", name, details);
}

/// Log the outcome of one `advance`
#[inline]
pub fn tick_summary(tick: Tick, status: BattleStatus, living: usize, in_flight: usize, events: usize) {
    ::log::info!(
        target: TARGET,
        "tick {} | status {:?} | living {} | in-flight {} | events {}",
        tick,
        status,
        living,
        in_flight,
        events
    );
}
