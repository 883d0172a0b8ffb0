//! Parametric shape rasterizers: crosses, bottom arcs, and the boss sigil
//! ring. All placements clip to the rect's two-cell interior margin.

use crate::types::{Pos, TileKind};

use super::canvas::TileCanvas;
use super::layout::Rect;

/// Angular step of the sigil ring; 360 / 6 = 60 ring points per ellipse.
const SIGIL_ANGLE_STEP_DEGREES: i32 = 6;

/// Half-length of each crosshair arm through the sigil center.
const SIGIL_CROSSHAIR_REACH: i32 = 2;

/// Height the bottom arc rises across its span.
const ARC_RISE: f32 = 3.0;

/// Places `kind` at every `step`-spaced cell along the rect's center row and
/// center column.
pub(super) fn draw_cross(canvas: &mut TileCanvas, rect: &Rect, kind: TileKind, step: i32) {
    debug_assert!(step > 0);
    let lo = rect.interior_min();
    let hi = rect.interior_max();
    let center = rect.center();

    let mut x = lo.x;
    while x <= hi.x {
        canvas.set(Pos { y: center.y, x }, kind);
        x += step;
    }
    let mut y = lo.y;
    while y <= hi.y {
        canvas.set(Pos { y, x: center.x }, kind);
        y += step;
    }
}

/// Rasterizes a shallow arc hugging the bottom of the rect: for each
/// `spacing`-stepped offset across the usable half-width, the cell rises
/// from the bottom interior row proportionally to its normalized position.
pub(super) fn draw_arc_bottom(canvas: &mut TileCanvas, rect: &Rect, kind: TileKind, spacing: i32) {
    debug_assert!(spacing > 0);
    let lo = rect.interior_min();
    let center = rect.center();
    let half_width = (rect.size.width / 2 - 2).max(1);

    let mut dx = -half_width;
    while dx <= half_width {
        let normalized = (dx + half_width) as f32 / (2 * half_width) as f32;
        let rise = (ARC_RISE * normalized).round() as i32;
        let pos = Pos { y: lo.y + rise, x: center.x + dx };
        if rect.in_interior(pos) {
            canvas.set(pos, kind);
        }
        dx += spacing;
    }
}

/// Rasterizes the boss summoning sigil: an elliptical ring of 60 points
/// stepped every six degrees around the rect center, plus a five-cell "+"
/// crosshair through the center itself.
pub(super) fn draw_ellipse_sigil(
    canvas: &mut TileCanvas,
    rect: &Rect,
    kind: TileKind,
    radius_x: i32,
    radius_y: i32,
) {
    let center = rect.center();

    let mut angle = 0;
    while angle < 360 {
        let radians = (angle as f32).to_radians();
        let pos = Pos {
            y: center.y + (radians.sin() * radius_y as f32).round() as i32,
            x: center.x + (radians.cos() * radius_x as f32).round() as i32,
        };
        if rect.in_interior(pos) {
            canvas.set(pos, kind);
        }
        angle += SIGIL_ANGLE_STEP_DEGREES;
    }

    for offset in -SIGIL_CROSSHAIR_REACH..=SIGIL_CROSSHAIR_REACH {
        let horizontal = Pos { y: center.y, x: center.x + offset };
        if rect.in_interior(horizontal) {
            canvas.set(horizontal, kind);
        }
        let vertical = Pos { y: center.y + offset, x: center.x };
        if rect.in_interior(vertical) {
            canvas.set(vertical, kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::config::Extent;

    fn rect(width: i32, height: i32) -> Rect {
        Rect { min: Pos { y: 0, x: 0 }, size: Extent { width, height } }
    }

    #[test]
    fn cross_marks_center_row_and_column_at_step_spacing() {
        let mut canvas = TileCanvas::new();
        let r = rect(14, 12);
        draw_cross(&mut canvas, &r, TileKind::Rune, 4);

        let center = r.center();
        let lo = r.interior_min();
        let hi = r.interior_max();
        assert_eq!(canvas.get(Pos { y: center.y, x: lo.x }), TileKind::Rune);
        assert_eq!(canvas.get(Pos { y: center.y, x: lo.x + 4 }), TileKind::Rune);
        assert_eq!(canvas.get(Pos { y: lo.y, x: center.x }), TileKind::Rune);
        assert_eq!(canvas.get(Pos { y: lo.y + 4, x: center.x }), TileKind::Rune);
        // Nothing lands beyond the interior.
        for (pos, kind) in canvas.iter() {
            assert_eq!(kind, TileKind::Rune);
            assert!(pos.x >= lo.x && pos.x <= hi.x && pos.y >= lo.y && pos.y <= hi.y);
        }
    }

    #[test]
    fn arc_rises_from_the_bottom_interior_row() {
        let mut canvas = TileCanvas::new();
        let r = rect(16, 10);
        draw_arc_bottom(&mut canvas, &r, TileKind::Rune, 3);

        let lo = r.interior_min();
        let mut ys = Vec::new();
        for (pos, kind) in canvas.iter() {
            assert_eq!(kind, TileKind::Rune);
            assert!(r.in_interior(pos));
            ys.push(pos.y);
        }
        assert!(!ys.is_empty());
        assert!(ys.iter().all(|&y| (lo.y..=lo.y + 3).contains(&y)));
        assert!(ys.contains(&lo.y), "the arc starts on the bottom interior row");
    }

    #[test]
    fn sigil_ring_has_sixty_reproducible_points_plus_crosshair() {
        let r = rect(30, 24);
        let center = r.center();
        let (radius_x, radius_y) = (8, 6);

        let mut canvas = TileCanvas::new();
        draw_ellipse_sigil(&mut canvas, &r, TileKind::BossSigil, radius_x, radius_y);

        let mut ring_points = Vec::new();
        for step in 0..60 {
            let radians = ((step * 6) as f32).to_radians();
            ring_points.push(Pos {
                y: center.y + (radians.sin() * radius_y as f32).round() as i32,
                x: center.x + (radians.cos() * radius_x as f32).round() as i32,
            });
        }
        assert_eq!(ring_points.len(), 60);
        for pos in &ring_points {
            assert_eq!(canvas.get(*pos), TileKind::BossSigil, "missing ring point at {pos:?}");
        }

        for offset in -2..=2 {
            assert_eq!(canvas.get(Pos { y: center.y, x: center.x + offset }), TileKind::BossSigil);
            assert_eq!(canvas.get(Pos { y: center.y + offset, x: center.x }), TileKind::BossSigil);
        }

        // Bit-for-bit reproducible for a fixed center and radii.
        let mut again = TileCanvas::new();
        draw_ellipse_sigil(&mut again, &r, TileKind::BossSigil, radius_x, radius_y);
        assert_eq!(again, canvas);
    }

    #[test]
    fn sigil_clips_to_the_interior_margin() {
        let mut canvas = TileCanvas::new();
        let r = rect(10, 8);
        // Radii far larger than the rect: everything out of range is dropped.
        draw_ellipse_sigil(&mut canvas, &r, TileKind::BossSigil, 20, 20);
        for (pos, _) in canvas.iter() {
            assert!(r.in_interior(pos), "sigil leaked outside the margin at {pos:?}");
        }
    }
}
