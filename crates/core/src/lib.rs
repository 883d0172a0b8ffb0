pub mod dungeon;
pub mod types;

pub use dungeon::{
    ConfigError, DungeonGenerator, GeneratedDungeon, GenerationConfig, GenerationError, Rect,
    StagePlacement, TileCanvas, generate_dungeon,
};
pub use types::*;
