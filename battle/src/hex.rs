//! Hex coordinate system for the battle board (axial coordinates)
//!
//! Axial `(q, r)` is the canonical representation used by the engine.
//! `OffsetCoord` is kept as an adapter for callers that still address the
//! board with odd-row offset `(x, y)` pairs.

use alloc::vec::Vec;
use core::cmp::Ordering;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::state::BOARD_RADIUS;

/// Axial hex coordinate
///
/// Ordering is reading order: lower `r` first, then lower `q`. Every
/// tie-break in the engine uses this order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Encode, Decode, TypeInfo, Serialize, Deserialize,
)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    pub const ORIGIN: Hex = Hex { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Cube coordinate S (derived from q and r)
    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Hex distance: `max(|dq|, |dr|, |dq + dr|)`
    pub fn distance(&self, other: &Self) -> u32 {
        let dq = self.q - other.q;
        let dr = self.r - other.r;
        dq.unsigned_abs()
            .max(dr.unsigned_abs())
            .max((dq + dr).unsigned_abs())
    }

    /// All 6 neighbouring hexes, in reading order
    pub fn neighbors(&self) -> [Hex; 6] {
        [
            Hex::new(self.q, self.r - 1),
            Hex::new(self.q + 1, self.r - 1),
            Hex::new(self.q - 1, self.r),
            Hex::new(self.q + 1, self.r),
            Hex::new(self.q - 1, self.r + 1),
            Hex::new(self.q, self.r + 1),
        ]
    }

    /// Whether the hex lies within `radius` steps of the origin
    pub fn is_within_radius(&self, radius: i32) -> bool {
        self.distance(&Hex::ORIGIN) <= radius.max(0) as u32
    }

    /// Whether the hex is a cell of the battle board
    pub fn in_bounds(&self) -> bool {
        self.is_within_radius(BOARD_RADIUS)
    }
}

impl Ord for Hex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.r.cmp(&other.r).then(self.q.cmp(&other.q))
    }
}

impl PartialOrd for Hex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Every cell of a hexagonal board of the given radius, in reading order
pub fn board_cells(radius: i32) -> Vec<Hex> {
    let radius = radius.max(0);
    let mut cells = Vec::new();
    for r in -radius..=radius {
        for q in -radius..=radius {
            let cell = Hex::new(q, r);
            if cell.is_within_radius(radius) {
                cells.push(cell);
            }
        }
    }
    cells
}

/// Odd-row offset coordinate from the legacy square board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize)]
pub struct OffsetCoord {
    pub x: i32,
    pub y: i32,
}

impl OffsetCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<OffsetCoord> for Hex {
    fn from(offset: OffsetCoord) -> Self {
        let q = offset.x - (offset.y - (offset.y & 1)) / 2;
        Hex::new(q, offset.y)
    }
}

impl From<Hex> for OffsetCoord {
    fn from(hex: Hex) -> Self {
        let x = hex.q + (hex.r - (hex.r & 1)) / 2;
        OffsetCoord::new(x, hex.r)
    }
}
