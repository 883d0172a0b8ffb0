//! Rect geometry, anchor chaining, and hollow room outlines.

use serde::{Deserialize, Serialize};

use crate::types::{Pos, TileKind};

use super::canvas::TileCanvas;
use super::config::{Extent, MIN_VIABLE_SIDE};

/// Cells between a rect's wall ring and the region decorations may touch.
pub(super) const DECOR_MARGIN: i32 = 2;

/// Axis-aligned rectangle: minimum corner plus size. Rooms grow in the
/// positive-Y direction from their bottom-mid anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Pos,
    pub size: Extent,
}

impl Rect {
    /// Rect whose [`Rect::bottom_mid`] sits on `anchor`, growing upward
    /// (positive Y).
    pub fn anchored(anchor: Pos, size: Extent) -> Self {
        Self { min: Pos { y: anchor.y, x: anchor.x - size.width / 2 }, size }
    }

    pub fn max(&self) -> Pos {
        Pos { y: self.min.y + self.size.height - 1, x: self.min.x + self.size.width - 1 }
    }

    pub fn center(&self) -> Pos {
        Pos { y: self.min.y + self.size.height / 2, x: self.min.x + self.size.width / 2 }
    }

    pub fn bottom_mid(&self) -> Pos {
        Pos { y: self.min.y, x: self.min.x + self.size.width / 2 }
    }

    pub fn top_mid(&self) -> Pos {
        Pos { y: self.max().y, x: self.min.x + self.size.width / 2 }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        let max = self.max();
        pos.x >= self.min.x && pos.x <= max.x && pos.y >= self.min.y && pos.y <= max.y
    }

    /// Lowest corner of the region decorations may write into.
    pub(super) fn interior_min(&self) -> Pos {
        Pos { y: self.min.y + DECOR_MARGIN, x: self.min.x + DECOR_MARGIN }
    }

    /// Highest corner of the region decorations may write into.
    pub(super) fn interior_max(&self) -> Pos {
        let max = self.max();
        Pos { y: max.y - DECOR_MARGIN, x: max.x - DECOR_MARGIN }
    }

    pub(super) fn in_interior(&self, pos: Pos) -> bool {
        let lo = self.interior_min();
        let hi = self.interior_max();
        pos.x >= lo.x && pos.x <= hi.x && pos.y >= lo.y && pos.y <= hi.y
    }

    /// Whether the rect can hold its wall ring plus the decoration margin.
    pub(super) fn is_viable(&self) -> bool {
        self.size.width >= MIN_VIABLE_SIDE && self.size.height >= MIN_VIABLE_SIDE
    }
}

/// Chaining combinator: the anchor for the stage after `previous` sits
/// `vertical_step` below its bottom-mid, nudged left by `jitter_x`.
pub(super) fn advance_anchor(previous: &Rect, vertical_step: i32, jitter_x: i32) -> Pos {
    let base = previous.bottom_mid();
    Pos { y: base.y - vertical_step, x: base.x - jitter_x }
}

/// Writes `Wall` on the rect's border ring and `Floor` on every other cell,
/// row-major.
pub(super) fn draw_hollow(canvas: &mut TileCanvas, rect: &Rect) {
    let max = rect.max();
    for y in rect.min.y..=max.y {
        for x in rect.min.x..=max.x {
            let kind = if y == rect.min.y || y == max.y || x == rect.min.x || x == max.x {
                TileKind::Wall
            } else {
                TileKind::Floor
            };
            canvas.set(Pos { y, x }, kind);
        }
    }
}
