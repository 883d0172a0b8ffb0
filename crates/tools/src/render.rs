//! ASCII rendering of a generated dungeon for terminal inspection.

use dungeon_core::{GeneratedDungeon, Pos, TileKind};

fn glyph(kind: TileKind) -> char {
    match kind {
        TileKind::Empty => ' ',
        TileKind::Wall => '#',
        TileKind::Floor => '.',
        TileKind::Gate => '+',
        TileKind::Torch => '!',
        TileKind::Rune => '*',
        TileKind::Chest => '$',
        TileKind::Statue => '&',
        TileKind::Decal => ',',
        TileKind::BossSigil => '@',
    }
}

/// Renders the bounding box of all stages, highest Y first so the entrance
/// (generated at the top of the chain) prints at the top of the screen.
pub fn render_ascii(dungeon: &GeneratedDungeon) -> String {
    let Some((lo, hi)) = dungeon.bounds() else {
        return String::new();
    };

    let width = (hi.x - lo.x + 1) as usize;
    let mut out = String::with_capacity((width + 1) * (hi.y - lo.y + 1) as usize);
    for y in (lo.y..=hi.y).rev() {
        for x in lo.x..=hi.x {
            out.push(glyph(dungeon.tile_at(Pos { y, x })));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use dungeon_core::{GenerationConfig, generate_dungeon};

    use super::*;

    #[test]
    fn render_covers_the_full_bounding_box() {
        let dungeon =
            generate_dungeon(7, &GenerationConfig::default()).expect("default config is valid");
        let (lo, hi) = dungeon.bounds().expect("nine stages generated");
        let text = render_ascii(&dungeon);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), (hi.y - lo.y + 1) as usize);
        assert!(lines.iter().all(|line| line.len() == (hi.x - lo.x + 1) as usize));
        assert!(text.contains('#'), "walls should be visible");
        assert!(text.contains('+'), "gates should be visible");
        assert!(text.contains('@'), "the boss sigil should be visible");
    }

    #[test]
    fn empty_result_renders_to_nothing() {
        let dungeon = GeneratedDungeon { stages: Vec::new(), canvas: Default::default() };
        assert_eq!(render_ascii(&dungeon), "");
    }
}
