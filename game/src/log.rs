//! Logging utilities for session edits

use crate::error::GameError;

const TARGET: &str = "hexclash::game";

/// Log an info message
#[inline]
pub fn info(msg: &str) {
    ::log::info!(target: TARGET, "{}", msg);
}

/// Log an edit being attempted
#[inline]
pub fn action(name: &str, details: &str) {
    ::log::debug!(target: TARGET, "> {} {}", name, details);
}

/// Log an edit outcome
#[inline]
pub fn result(op: &str, error: Option<&GameError>) {
    match error {
        None => ::log::debug!(target: TARGET, "ok: {}", op),
        Some(error) => ::log::debug!(target: TARGET, "rejected: {} ({:?})", op, error),
    }
}
