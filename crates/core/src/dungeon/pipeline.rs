//! Stage-sequenced dungeon construction: a fixed linear chain of rooms and
//! corridors, each outlined, decorated, and anchored below its predecessor.

use tracing::debug;

use crate::types::{Pos, RoomRole};

use super::canvas::TileCanvas;
use super::config::{CORRIDOR_HEIGHT_JITTER, Extent, GenerationConfig, SizeRange};
use super::decor::decorate;
use super::error::GenerationError;
use super::layout::{Rect, advance_anchor, draw_hollow};
use super::model::{GeneratedDungeon, StagePlacement};
use super::rng::RngStream;

/// The fixed stage chain. Strictly linear: no branching, loops, or retries.
const STAGE_SEQUENCE: [RoomRole; 9] = [
    RoomRole::Entrance,
    RoomRole::Corridor,
    RoomRole::Combat,
    RoomRole::Corridor,
    RoomRole::Chest,
    RoomRole::Corridor,
    RoomRole::Boss,
    RoomRole::Corridor,
    RoomRole::Exit,
];

/// The corridor leading into the boss room gets its height jittered.
const JITTERED_CORRIDOR_INDEX: usize = 5;

pub struct DungeonGenerator {
    seed: u64,
    config: GenerationConfig,
}

impl DungeonGenerator {
    pub fn new(seed: u64, config: GenerationConfig) -> Self {
        Self { seed, config }
    }

    /// Runs the whole pipeline. One call owns the canvas and RNG stream for
    /// its entire duration and either finishes or aborts; there is no
    /// partial output.
    pub fn generate(&self) -> Result<GeneratedDungeon, GenerationError> {
        self.config.validate()?;

        let mut rng = RngStream::new(self.seed);
        let mut canvas = TileCanvas::new();
        canvas.clear_all();

        let mut stages = Vec::with_capacity(STAGE_SEQUENCE.len());
        let mut anchor = Pos { y: 0, x: 0 };

        for (index, role) in STAGE_SEQUENCE.into_iter().enumerate() {
            let size = self.sample_stage_size(&mut rng, role, index);
            let rect = Rect::anchored(anchor, size);
            if !rect.is_viable() {
                return Err(GenerationError::Stage {
                    index,
                    role,
                    width: rect.size.width,
                    height: rect.size.height,
                });
            }

            draw_hollow(&mut canvas, &rect);
            decorate(&mut canvas, &mut rng, &rect, role, &self.config);
            debug!(
                stage = index,
                ?role,
                min_y = rect.min.y,
                min_x = rect.min.x,
                width = rect.size.width,
                height = rect.size.height,
                "stage placed"
            );

            let jitter_x = rng.next_in_range(0, 1);
            anchor = advance_anchor(&rect, self.config.vertical_step, jitter_x);
            stages.push(StagePlacement { role, rect });
        }

        Ok(GeneratedDungeon { stages, canvas })
    }

    fn sample_stage_size(&self, rng: &mut RngStream, role: RoomRole, index: usize) -> Extent {
        match role {
            RoomRole::Boss => sample_extent(rng, &self.config.boss_room),
            RoomRole::Corridor => {
                let mut size = sample_extent(rng, &self.config.corridor);
                if index == JITTERED_CORRIDOR_INDEX {
                    size.height +=
                        rng.next_in_range(-CORRIDOR_HEIGHT_JITTER, CORRIDOR_HEIGHT_JITTER);
                }
                size
            }
            _ => sample_extent(rng, &self.config.room),
        }
    }
}

fn sample_extent(rng: &mut RngStream, range: &SizeRange) -> Extent {
    Extent {
        width: rng.next_in_range(range.min.width, range.max.width),
        height: rng.next_in_range(range.min.height, range.max.height),
    }
}
