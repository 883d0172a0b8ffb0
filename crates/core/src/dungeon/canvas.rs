//! Sparse tile canvas addressed by signed grid coordinates.

use std::collections::HashMap;

use crate::types::{Pos, TileKind};

/// Mutable map from coordinate to tile kind. Cells that were never written
/// read back as [`TileKind::Empty`]; coordinates may be negative or
/// arbitrarily large, the canvas grows as needed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileCanvas {
    tiles: HashMap<Pos, TileKind>,
}

impl TileCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, pos: Pos, kind: TileKind) {
        self.tiles.insert(pos, kind);
    }

    pub fn get(&self, pos: Pos) -> TileKind {
        self.tiles.get(&pos).copied().unwrap_or(TileKind::Empty)
    }

    /// Resets every previously-set cell back to `Empty`.
    pub fn clear_all(&mut self) {
        self.tiles.clear();
    }

    pub fn written_cell_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, TileKind)> + '_ {
        self.tiles.iter().map(|(&pos, &kind)| (pos, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_cells_read_as_empty() {
        let canvas = TileCanvas::new();
        assert_eq!(canvas.get(Pos { y: 0, x: 0 }), TileKind::Empty);
        assert_eq!(canvas.get(Pos { y: -1_000_000, x: 1_000_000 }), TileKind::Empty);
    }

    #[test]
    fn set_overwrites_unconditionally() {
        let mut canvas = TileCanvas::new();
        let pos = Pos { y: 3, x: -7 };
        canvas.set(pos, TileKind::Floor);
        canvas.set(pos, TileKind::Rune);
        assert_eq!(canvas.get(pos), TileKind::Rune);
        assert_eq!(canvas.written_cell_count(), 1);
    }

    #[test]
    fn clear_all_resets_previously_set_cells() {
        let mut canvas = TileCanvas::new();
        canvas.set(Pos { y: 5, x: 5 }, TileKind::Wall);
        canvas.set(Pos { y: -40, x: 12 }, TileKind::Torch);
        canvas.clear_all();
        assert_eq!(canvas.get(Pos { y: 5, x: 5 }), TileKind::Empty);
        assert_eq!(canvas.get(Pos { y: -40, x: 12 }), TileKind::Empty);
        assert_eq!(canvas.written_cell_count(), 0);
    }

    #[test]
    fn negative_coordinates_are_ordinary_cells() {
        let mut canvas = TileCanvas::new();
        canvas.set(Pos { y: -3, x: -9 }, TileKind::Gate);
        assert_eq!(canvas.get(Pos { y: -3, x: -9 }), TileKind::Gate);
    }
}
