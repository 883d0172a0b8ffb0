//! Error types for configuration validation and pipeline failures.

use thiserror::Error;

use crate::types::RoomRole;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A configured room, boss room, or corridor side is too small to hold
    /// the wall ring plus the two-cell decoration margin.
    #[error("{range} size range allows a side of {side}, below the viable minimum of {minimum}")]
    SideTooSmall { range: &'static str, side: i32, minimum: i32 },

    /// The vertical step cannot guarantee Y-separation between consecutive
    /// stages given the tallest height the ranges can produce.
    #[error("vertical step {step} cannot separate stages up to {required} cells tall")]
    VerticalStepTooSmall { step: i32, required: i32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("invalid generation config: {0}")]
    Config(#[from] ConfigError),

    /// A stage produced a rect too degenerate to decorate. The whole run is
    /// aborted; there is no partial output.
    #[error("stage {index} ({role:?}) produced a degenerate {width}x{height} rect")]
    Stage { index: usize, role: RoomRole, width: i32, height: i32 },
}
