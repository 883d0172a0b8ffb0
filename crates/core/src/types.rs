use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    #[default]
    Empty,
    Wall,
    Floor,
    Gate,
    Torch,
    Rune,
    Chest,
    Statue,
    Decal,
    BossSigil,
}

impl TileKind {
    /// Tiles placed by decoration recipes, as opposed to structural walls
    /// and floors laid down by the room outline.
    pub fn is_decoration(self) -> bool {
        !matches!(self, Self::Empty | Self::Wall | Self::Floor)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoomRole {
    Entrance,
    Corridor,
    Combat,
    Chest,
    Boss,
    Exit,
}
