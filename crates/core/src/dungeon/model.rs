//! Public data model for generated dungeons.

use serde::Serialize;

use crate::types::{Pos, RoomRole, TileKind};

use super::canvas::TileCanvas;
use super::layout::Rect;

/// One stage of the chain: its role and the rect it was drawn into, in
/// generation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StagePlacement {
    pub role: RoomRole,
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedDungeon {
    pub stages: Vec<StagePlacement>,
    pub canvas: TileCanvas,
}

impl GeneratedDungeon {
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        self.canvas.get(pos)
    }

    pub fn count_in_rect(&self, rect: &Rect, kind: TileKind) -> usize {
        let max = rect.max();
        let mut count = 0;
        for y in rect.min.y..=max.y {
            for x in rect.min.x..=max.x {
                if self.canvas.get(Pos { y, x }) == kind {
                    count += 1;
                }
            }
        }
        count
    }

    /// Bounding box over every stage rect, or `None` for an empty result.
    pub fn bounds(&self) -> Option<(Pos, Pos)> {
        let first = self.stages.first()?.rect;
        let mut lo = first.min;
        let mut hi = first.max();
        for stage in &self.stages[1..] {
            let min = stage.rect.min;
            let max = stage.rect.max();
            lo.x = lo.x.min(min.x);
            lo.y = lo.y.min(min.y);
            hi.x = hi.x.max(max.x);
            hi.y = hi.y.max(max.y);
        }
        Some((lo, hi))
    }

    /// Canonical little-endian encoding of the stage list followed by every
    /// stage rect's cells in row-major order. Every written cell lies inside
    /// some stage rect, so equal encodings mean cell-for-cell equal grids.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.stages.len() as u32).to_le_bytes());
        for stage in &self.stages {
            bytes.push(role_code(stage.role));
            let rect = stage.rect;
            bytes.extend(rect.min.y.to_le_bytes());
            bytes.extend(rect.min.x.to_le_bytes());
            bytes.extend(rect.size.width.to_le_bytes());
            bytes.extend(rect.size.height.to_le_bytes());
        }
        for stage in &self.stages {
            let rect = stage.rect;
            let max = rect.max();
            for y in rect.min.y..=max.y {
                for x in rect.min.x..=max.x {
                    bytes.push(tile_code(self.canvas.get(Pos { y, x })));
                }
            }
        }
        bytes
    }
}

fn role_code(role: RoomRole) -> u8 {
    match role {
        RoomRole::Entrance => 0,
        RoomRole::Corridor => 1,
        RoomRole::Combat => 2,
        RoomRole::Chest => 3,
        RoomRole::Boss => 4,
        RoomRole::Exit => 5,
    }
}

fn tile_code(kind: TileKind) -> u8 {
    match kind {
        TileKind::Empty => 0,
        TileKind::Wall => 1,
        TileKind::Floor => 2,
        TileKind::Gate => 3,
        TileKind::Torch => 4,
        TileKind::Rune => 5,
        TileKind::Chest => 6,
        TileKind::Statue => 7,
        TileKind::Decal => 8,
        TileKind::BossSigil => 9,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::config::Extent;

    fn placement(role: RoomRole, x: i32, y: i32, width: i32, height: i32) -> StagePlacement {
        StagePlacement { role, rect: Rect { min: Pos { y, x }, size: Extent { width, height } } }
    }

    #[test]
    fn bounds_cover_every_stage_rect() {
        let dungeon = GeneratedDungeon {
            stages: vec![
                placement(RoomRole::Entrance, 0, 0, 10, 8),
                placement(RoomRole::Corridor, 2, -22, 6, 12),
            ],
            canvas: TileCanvas::new(),
        };
        let (lo, hi) = dungeon.bounds().expect("two stages present");
        assert_eq!(lo, Pos { y: -22, x: 0 });
        assert_eq!(hi, Pos { y: 7, x: 9 });
    }

    #[test]
    fn bounds_of_empty_result_is_none() {
        let dungeon = GeneratedDungeon { stages: Vec::new(), canvas: TileCanvas::new() };
        assert!(dungeon.bounds().is_none());
    }

    #[test]
    fn canonical_bytes_distinguish_a_single_cell_change() {
        let stages = vec![placement(RoomRole::Combat, 0, 0, 8, 8)];
        let mut canvas = TileCanvas::new();
        canvas.set(Pos { y: 3, x: 3 }, TileKind::Floor);
        let base = GeneratedDungeon { stages: stages.clone(), canvas: canvas.clone() };

        canvas.set(Pos { y: 3, x: 3 }, TileKind::Rune);
        let changed = GeneratedDungeon { stages, canvas };

        assert_ne!(base.canonical_bytes(), changed.canonical_bytes());
    }

    #[test]
    fn count_in_rect_only_sees_the_given_rect() {
        let mut canvas = TileCanvas::new();
        canvas.set(Pos { y: 3, x: 3 }, TileKind::Rune);
        canvas.set(Pos { y: 50, x: 50 }, TileKind::Rune);
        let dungeon = GeneratedDungeon {
            stages: vec![placement(RoomRole::Combat, 0, 0, 8, 8)],
            canvas,
        };
        assert_eq!(dungeon.count_in_rect(&dungeon.stages[0].rect, TileKind::Rune), 1);
    }
}
