//! Role-specific decoration recipes composed from scatter placement, shape
//! drawing, and direct placements.
//!
//! Recipes run scatters before direct placements so that landmark tiles (a
//! chest, an entrance gate's flanking torches) cannot be buried under a
//! later probabilistic pass. Gates are the one decoration allowed on the
//! wall ring itself; everything else clips to the two-cell interior margin.

use crate::types::{Pos, RoomRole, TileKind};

use super::canvas::TileCanvas;
use super::config::{CountClamp, GenerationConfig};
use super::layout::Rect;
use super::rng::RngStream;
use super::scatter::{scatter_along_walls, scatter_inside};
use super::shapes::{draw_arc_bottom, draw_cross, draw_ellipse_sigil};

const ENTRANCE_DECAL_CLAMP: CountClamp = CountClamp { min: 0, max: 4 };
const CHEST_RUNE_CLAMP: CountClamp = CountClamp { min: 1, max: 6 };
const CHEST_DECAL_CLAMP: CountClamp = CountClamp { min: 1, max: 6 };
const BOSS_RUNE_CLAMP: CountClamp = CountClamp { min: 2, max: 10 };
const BOSS_DECAL_CLAMP: CountClamp = CountClamp { min: 2, max: 12 };
const EXIT_DECAL_CLAMP: CountClamp = CountClamp { min: 1, max: 6 };

const COMBAT_RUNE_CROSS_STEP: i32 = 4;
const EXIT_ARC_SPACING: i32 = 3;
const BOSS_STATUE_FLANK: i32 = 5;
const EXIT_TORCH_FLANK: i32 = 4;

pub(super) fn decorate(
    canvas: &mut TileCanvas,
    rng: &mut RngStream,
    rect: &Rect,
    role: RoomRole,
    config: &GenerationConfig,
) {
    match role {
        RoomRole::Entrance => decorate_entrance(canvas, rng, rect, config),
        RoomRole::Corridor => decorate_corridor(canvas, rng, rect, config),
        RoomRole::Combat => decorate_combat(canvas, rng, rect, config),
        RoomRole::Chest => decorate_chest(canvas, rng, rect, config),
        RoomRole::Boss => decorate_boss(canvas, rng, rect, config),
        RoomRole::Exit => decorate_exit(canvas, rng, rect, config),
    }
}

/// Gate on the bottom wall, two torches a third of the way up, a rune at the
/// center, and a light dusting of decals.
fn decorate_entrance(
    canvas: &mut TileCanvas,
    rng: &mut RngStream,
    rect: &Rect,
    config: &GenerationConfig,
) {
    scatter_inside(
        canvas,
        rng,
        rect,
        TileKind::Decal,
        config.decor.decal_chance * 0.5,
        ENTRANCE_DECAL_CLAMP,
    );

    canvas.set(rect.bottom_mid(), TileKind::Gate);

    let torch_y = rect.min.y + rect.size.height / 3;
    let lo = rect.interior_min();
    let hi = rect.interior_max();
    place_in_interior(canvas, rect, Pos { y: torch_y, x: lo.x }, TileKind::Torch);
    place_in_interior(canvas, rect, Pos { y: torch_y, x: hi.x }, TileKind::Torch);

    place_in_interior(canvas, rect, rect.center(), TileKind::Rune);
}

/// One torch per interior row at most, hugging a randomly chosen side wall.
/// A corridor that comes out darker than two torches gets fixed fallback
/// sconces instead.
fn decorate_corridor(
    canvas: &mut TileCanvas,
    rng: &mut RngStream,
    rect: &Rect,
    config: &GenerationConfig,
) {
    let lo = rect.interior_min();
    let hi = rect.interior_max();

    let mut torches = 0_usize;
    for y in lo.y..=hi.y {
        if rng.chance(config.decor.torch_chance) {
            let x = if rng.next_in_range(0, 1) == 0 { lo.x } else { hi.x };
            canvas.set(Pos { y, x }, TileKind::Torch);
            torches += 1;
        }
    }

    if torches < 2 {
        let center = rect.center();
        place_in_interior(canvas, rect, Pos { y: center.y, x: lo.x }, TileKind::Torch);
        place_in_interior(canvas, rect, Pos { y: center.y + 2, x: hi.x }, TileKind::Torch);
    }
}

/// A rune cross through the center, scattered runes and decals, statues in
/// the top corners, and torches along the walls. Runes are scattered after
/// the decals and before the torches so both clamped minimums survive the
/// later passes.
fn decorate_combat(
    canvas: &mut TileCanvas,
    rng: &mut RngStream,
    rect: &Rect,
    config: &GenerationConfig,
) {
    scatter_inside(
        canvas,
        rng,
        rect,
        TileKind::Decal,
        config.decor.decal_chance,
        config.decor.decals_per_room,
    );
    draw_cross(canvas, rect, TileKind::Rune, COMBAT_RUNE_CROSS_STEP);

    let lo = rect.interior_min();
    let hi = rect.interior_max();
    place_in_interior(canvas, rect, Pos { y: hi.y, x: lo.x }, TileKind::Statue);
    place_in_interior(canvas, rect, Pos { y: hi.y, x: hi.x }, TileKind::Statue);

    scatter_inside(
        canvas,
        rng,
        rect,
        TileKind::Rune,
        config.decor.rune_chance,
        config.decor.runes_per_room,
    );
    scatter_along_walls(
        canvas,
        rng,
        rect,
        TileKind::Torch,
        config.decor.torch_chance,
        config.decor.torches_per_room,
    );
}

/// A chest at the center flanked by runes and statues, wall torches at the
/// vertical center, light rune and decal scatter, and sometimes one extra
/// statue standing over the hoard.
fn decorate_chest(
    canvas: &mut TileCanvas,
    rng: &mut RngStream,
    rect: &Rect,
    config: &GenerationConfig,
) {
    scatter_inside(
        canvas,
        rng,
        rect,
        TileKind::Rune,
        config.decor.rune_chance * 0.5,
        CHEST_RUNE_CLAMP,
    );
    scatter_inside(
        canvas,
        rng,
        rect,
        TileKind::Decal,
        config.decor.decal_chance * 0.8,
        CHEST_DECAL_CLAMP,
    );

    let center = rect.center();
    place_in_interior(canvas, rect, Pos { y: center.y, x: center.x - 1 }, TileKind::Rune);
    place_in_interior(canvas, rect, Pos { y: center.y, x: center.x + 1 }, TileKind::Rune);
    place_in_interior(canvas, rect, Pos { y: center.y, x: center.x - 3 }, TileKind::Statue);
    place_in_interior(canvas, rect, Pos { y: center.y, x: center.x + 3 }, TileKind::Statue);

    let lo = rect.interior_min();
    let hi = rect.interior_max();
    place_in_interior(canvas, rect, Pos { y: center.y, x: lo.x }, TileKind::Torch);
    place_in_interior(canvas, rect, Pos { y: center.y, x: hi.x }, TileKind::Torch);

    if rng.chance(config.decor.extra_statue_chance) {
        place_in_interior(canvas, rect, Pos { y: center.y + 2, x: center.x }, TileKind::Statue);
    }

    place_in_interior(canvas, rect, center, TileKind::Chest);
}

/// Torches in all four interior corners, statues flanking the top center,
/// the summoning sigil ring, and sparse rune/decal scatter.
fn decorate_boss(
    canvas: &mut TileCanvas,
    rng: &mut RngStream,
    rect: &Rect,
    config: &GenerationConfig,
) {
    scatter_inside(
        canvas,
        rng,
        rect,
        TileKind::Rune,
        config.decor.rune_chance * 0.6,
        BOSS_RUNE_CLAMP,
    );
    scatter_inside(
        canvas,
        rng,
        rect,
        TileKind::Decal,
        config.decor.decal_chance * 1.2,
        BOSS_DECAL_CLAMP,
    );

    let sigil_kind = if config.decor.distinct_sigil { TileKind::BossSigil } else { TileKind::Rune };
    let radius_x = (rect.size.width / 4).max(6);
    let radius_y = (rect.size.height / 4).max(4);
    draw_ellipse_sigil(canvas, rect, sigil_kind, radius_x, radius_y);

    let lo = rect.interior_min();
    let hi = rect.interior_max();
    for corner in [
        Pos { y: lo.y, x: lo.x },
        Pos { y: lo.y, x: hi.x },
        Pos { y: hi.y, x: lo.x },
        Pos { y: hi.y, x: hi.x },
    ] {
        canvas.set(corner, TileKind::Torch);
    }

    let center = rect.center();
    for flank in [-BOSS_STATUE_FLANK, BOSS_STATUE_FLANK] {
        place_in_interior(canvas, rect, Pos { y: hi.y, x: center.x + flank }, TileKind::Statue);
    }
}

/// Gate on the top wall, a rune arc along the bottom, guide torches beside
/// the bottom center, and a light decal dusting.
fn decorate_exit(
    canvas: &mut TileCanvas,
    rng: &mut RngStream,
    rect: &Rect,
    config: &GenerationConfig,
) {
    scatter_inside(
        canvas,
        rng,
        rect,
        TileKind::Decal,
        config.decor.decal_chance * 0.7,
        EXIT_DECAL_CLAMP,
    );

    draw_arc_bottom(canvas, rect, TileKind::Rune, EXIT_ARC_SPACING);

    let lo = rect.interior_min();
    let center = rect.center();
    for flank in [-EXIT_TORCH_FLANK, EXIT_TORCH_FLANK] {
        place_in_interior(canvas, rect, Pos { y: lo.y, x: center.x + flank }, TileKind::Torch);
    }

    canvas.set(rect.top_mid(), TileKind::Gate);
}

/// Direct placement clipped to the decoration margin; silently drops
/// positions that a small rect pushed out of the interior.
fn place_in_interior(canvas: &mut TileCanvas, rect: &Rect, pos: Pos, kind: TileKind) {
    if rect.in_interior(pos) {
        canvas.set(pos, kind);
    }
}
