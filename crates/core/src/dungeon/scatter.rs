//! Probabilistic scatter placement with enforced minimum counts.
//!
//! Both variants share the same clamp behavior: the configured minimum is
//! enforced by retrying random placements, while the maximum is advisory
//! only and never capped. That asymmetry is deliberate and load-bearing for
//! downstream balancing knobs; do not "fix" it.

use crate::types::{Pos, TileKind};

use super::canvas::TileCanvas;
use super::config::CountClamp;
use super::layout::Rect;
use super::rng::RngStream;

/// Wall-hugging sweeps sample the top and bottom runs at a reduced rate so
/// long rooms don't end up ringed solid.
const HORIZONTAL_WALL_CHANCE_FACTOR: f32 = 0.7;

/// Upper bound on minimum-enforcement retries. Generously above anything a
/// sane clamp needs; only pathological saturation ever reaches it.
const MIN_PLACEMENT_ATTEMPT_BUDGET: usize = 256;

/// Sweeps every interior cell in row-major order, independently sampling
/// `chance` per cell and overwriting on success regardless of current
/// content. If the sweep lands fewer than `clamp.min` tiles, random interior
/// cells not already holding `kind` are filled until the minimum is met.
pub(super) fn scatter_inside(
    canvas: &mut TileCanvas,
    rng: &mut RngStream,
    rect: &Rect,
    kind: TileKind,
    chance: f32,
    clamp: CountClamp,
) {
    let lo = rect.interior_min();
    let hi = rect.interior_max();
    if lo.x > hi.x || lo.y > hi.y {
        return;
    }

    let mut placed = 0_usize;
    for y in lo.y..=hi.y {
        for x in lo.x..=hi.x {
            if rng.chance(chance) {
                canvas.set(Pos { y, x }, kind);
                placed += 1;
            }
        }
    }

    for _attempt in 0..MIN_PLACEMENT_ATTEMPT_BUDGET {
        if placed >= clamp.min {
            break;
        }
        let pos = Pos { y: rng.next_in_range(lo.y, hi.y), x: rng.next_in_range(lo.x, hi.x) };
        if canvas.get(pos) != kind {
            canvas.set(pos, kind);
            placed += 1;
        }
    }
}

/// Scatters `kind` along the innermost interior ring: per interior row at
/// the left and right columns, and per interior column (at a reduced rate)
/// at the bottom and top rows. Wall-hugging placement only lands on floor
/// cells, so furniture already standing against a wall is left alone. The
/// minimum is enforced the same way as [`scatter_inside`].
pub(super) fn scatter_along_walls(
    canvas: &mut TileCanvas,
    rng: &mut RngStream,
    rect: &Rect,
    kind: TileKind,
    chance: f32,
    clamp: CountClamp,
) {
    let lo = rect.interior_min();
    let hi = rect.interior_max();
    if lo.x > hi.x || lo.y > hi.y {
        return;
    }

    let mut placed = 0_usize;
    for y in lo.y..=hi.y {
        for x in [lo.x, hi.x] {
            if rng.chance(chance) {
                placed += place_on_floor(canvas, Pos { y, x }, kind);
            }
        }
    }
    let horizontal_chance = chance * HORIZONTAL_WALL_CHANCE_FACTOR;
    for x in lo.x..=hi.x {
        for y in [lo.y, hi.y] {
            if rng.chance(horizontal_chance) {
                placed += place_on_floor(canvas, Pos { y, x }, kind);
            }
        }
    }

    for _attempt in 0..MIN_PLACEMENT_ATTEMPT_BUDGET {
        if placed >= clamp.min {
            break;
        }
        let pos = match rng.next_in_range(0, 3) {
            0 => Pos { y: rng.next_in_range(lo.y, hi.y), x: lo.x },
            1 => Pos { y: rng.next_in_range(lo.y, hi.y), x: hi.x },
            2 => Pos { y: lo.y, x: rng.next_in_range(lo.x, hi.x) },
            _ => Pos { y: hi.y, x: rng.next_in_range(lo.x, hi.x) },
        };
        placed += place_on_floor(canvas, pos, kind);
    }
}

fn place_on_floor(canvas: &mut TileCanvas, pos: Pos, kind: TileKind) -> usize {
    if canvas.get(pos) == TileKind::Floor {
        canvas.set(pos, kind);
        1
    } else {
        0
    }
}
