//! Procedural dungeon-layout generation domain split into coherent submodules.

pub mod config;
pub mod model;

mod canvas;
mod decor;
mod error;
mod layout;
mod pipeline;
mod rng;
mod scatter;
mod shapes;

pub use canvas::TileCanvas;
pub use config::{CountClamp, DecorConfig, Extent, GenerationConfig, SizeRange};
pub use error::{ConfigError, GenerationError};
pub use layout::Rect;
pub use model::{GeneratedDungeon, StagePlacement};
pub use pipeline::DungeonGenerator;

pub fn generate_dungeon(
    seed: u64,
    config: &GenerationConfig,
) -> Result<GeneratedDungeon, GenerationError> {
    DungeonGenerator::new(seed, config.clone()).generate()
}
