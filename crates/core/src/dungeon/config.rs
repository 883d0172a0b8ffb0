//! Generation configuration: size ranges, decoration probabilities, and the
//! vertical chaining step, plus the validation run before any layout starts.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Smallest room or corridor side able to hold the wall ring plus the
/// two-cell decoration margin.
pub(super) const MIN_VIABLE_SIDE: i32 = 6;

/// The pipeline jitters one corridor's height by up to this much in either
/// direction, so the vertical step has to absorb it.
pub(super) const CORRIDOR_HEIGHT_JITTER: i32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extent {
    pub width: i32,
    pub height: i32,
}

/// Inclusive size range a stage samples its extent from. A `min` above `max`
/// on either axis is tolerated; the sampling draw reorders the bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: Extent,
    pub max: Extent,
}

impl SizeRange {
    fn shortest_side(&self) -> i32 {
        self.min
            .width
            .min(self.max.width)
            .min(self.min.height)
            .min(self.max.height)
    }

    pub(super) fn tallest_height(&self) -> i32 {
        self.min.height.max(self.max.height)
    }
}

/// Bounds on a decoration's total count. Only `min` is actively enforced;
/// `max` is advisory and densities may exceed it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountClamp {
    pub min: usize,
    pub max: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecorConfig {
    pub torch_chance: f32,
    pub rune_chance: f32,
    pub decal_chance: f32,
    pub extra_statue_chance: f32,
    pub torches_per_room: CountClamp,
    pub runes_per_room: CountClamp,
    pub decals_per_room: CountClamp,
    /// When false the boss sigil ring is drawn with plain rune tiles instead
    /// of the dedicated sigil kind.
    pub distinct_sigil: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub room: SizeRange,
    pub boss_room: SizeRange,
    pub corridor: SizeRange,
    /// Fixed downward step between chained stage anchors.
    pub vertical_step: i32,
    pub decor: DecorConfig,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            room: SizeRange {
                min: Extent { width: 10, height: 8 },
                max: Extent { width: 16, height: 12 },
            },
            boss_room: SizeRange {
                min: Extent { width: 20, height: 16 },
                max: Extent { width: 26, height: 20 },
            },
            corridor: SizeRange {
                min: Extent { width: 6, height: 10 },
                max: Extent { width: 8, height: 14 },
            },
            vertical_step: 22,
            decor: DecorConfig {
                torch_chance: 0.3,
                rune_chance: 0.22,
                decal_chance: 0.12,
                extra_statue_chance: 0.35,
                torches_per_room: CountClamp { min: 2, max: 8 },
                runes_per_room: CountClamp { min: 3, max: 12 },
                decals_per_room: CountClamp { min: 2, max: 10 },
                distinct_sigil: true,
            },
        }
    }
}

impl GenerationConfig {
    /// Rejects configurations that layout could not survive: sides below the
    /// minimum viable size, or a vertical step too small to keep consecutive
    /// stage rects apart on the Y axis.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, range) in
            [("room", &self.room), ("boss room", &self.boss_room), ("corridor", &self.corridor)]
        {
            let side = range.shortest_side();
            if side < MIN_VIABLE_SIDE {
                return Err(ConfigError::SideTooSmall {
                    range: name,
                    side,
                    minimum: MIN_VIABLE_SIDE,
                });
            }
        }

        let required = self
            .room
            .tallest_height()
            .max(self.boss_room.tallest_height())
            .max(self.corridor.tallest_height() + CORRIDOR_HEIGHT_JITTER);
        if self.vertical_step < required {
            return Err(ConfigError::VerticalStepTooSmall { step: self.vertical_step, required });
        }

        Ok(())
    }
}
