// src/renderer/block.rs

//! Block-element rasterization: each 2x8 pixel block is summarized as a pair
//! of column fill counts and looked up in a hand-tuned 9x9 glyph table.
//!
//! Unicode block elements are bottom-anchored (`▄` fills from the floor), so
//! a bar hugging the *top* of a cell has no direct glyph. The fix is inverted
//! rendering: when a column's active pixels concentrate in the upper half,
//! look up the *complement* fill heights and swap foreground and background.
//! The glyph's ink then depicts the hole and the cell background depicts the
//! data, which reads correctly for inverted bars and lines near a cell top.

use crate::canvas::Canvas;
use crate::renderer::dominant_color;
use crate::run::{RenderedLine, RunBuilder};

/// Foreground used for the glyph ink in inverted mode, where the ink
/// represents terminal void rather than data. The one color token this crate
/// owns; output layers may substitute their actual background.
pub const INVERTED_HOLE_COLOR: &str = "black";

/// Glyph by `[left_fill][right_fill]`, fills 0-8.
///
/// Hand-tuned, not derived: graduated lower-fraction glyphs track the mean of
/// the two column heights along and near the diagonal (round half up), half
/// blocks cover strong (>=6) asymmetry, quadrants cover one-sided low fills.
/// Transpose-symmetric under ▌<->▐ and ▖<->▗. Do not recompute from a
/// formula; the entries are load-bearing for the seed glyphs below and in
/// renderer/tests.rs.
const FILL_TABLE: [[char; 9]; 9] = [
    [' ', '▗', '▗', '▗', '▗', '▐', '▐', '▐', '▐'], // left 0
    ['▖', '▁', '▂', '▂', '▃', '▃', '▄', '▐', '▐'], // left 1
    ['▖', '▂', '▂', '▃', '▃', '▄', '▄', '▅', '▐'], // left 2
    ['▖', '▂', '▃', '▃', '▄', '▄', '▅', '▅', '▆'], // left 3
    ['▖', '▃', '▃', '▄', '▄', '▅', '▅', '▆', '▆'], // left 4
    ['▌', '▃', '▄', '▄', '▅', '▅', '▆', '▆', '▇'], // left 5
    ['▌', '▄', '▄', '▅', '▅', '▆', '▆', '▇', '▇'], // left 6
    ['▌', '▌', '▅', '▅', '▆', '▆', '▇', '▇', '█'], // left 7
    ['▌', '▌', '▌', '▆', '▆', '▇', '▇', '█', '█'], // left 8
];

/// Per-column summary of a 2x8 block.
struct Column {
    /// Active pixels in the column, 0-8.
    count: usize,
    /// Mean active row index, 0 = top. 3.5 (the center) when empty.
    gravity: f64,
}

impl Column {
    /// A column is top-heavy when its mass sits strictly above the center.
    /// `gravity == 3.5` (symmetric about the center) is deliberately *not*
    /// top-heavy.
    fn is_top_heavy(&self) -> bool {
        self.count > 0 && self.gravity < 3.5
    }
}

fn column_stats(canvas: &Canvas, x: i32, y0: i32) -> Column {
    let mut count = 0usize;
    let mut row_sum = 0usize;
    for dy in 0..8i32 {
        if canvas.is_active(x, y0 + dy) {
            count += 1;
            row_sum += dy as usize;
        }
    }
    let gravity = if count == 0 {
        3.5
    } else {
        row_sum as f64 / count as f64
    };
    Column { count, gravity }
}

pub(super) fn rasterize(canvas: &Canvas, cols: usize, rows: usize) -> Vec<RenderedLine> {
    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let mut builder = RunBuilder::new();
        for col in 0..cols {
            let x0 = (col * 2) as i32;
            let y0 = (row * 8) as i32;

            let left = column_stats(canvas, x0, y0);
            let right = column_stats(canvas, x0 + 1, y0);

            // Dominant color votes over all 16 pixels, row-major scan.
            let block = (0..8i32)
                .flat_map(|dy| (0..2i32).map(move |dx| (x0 + dx, y0 + dy)))
                .filter_map(|(x, y)| canvas.get(x, y));
            let color = dominant_color(block);

            let invert = (left.is_top_heavy() && (right.is_top_heavy() || right.count == 0))
                || (right.is_top_heavy() && (left.is_top_heavy() || left.count == 0));

            if invert {
                let glyph = FILL_TABLE[8 - left.count][8 - right.count];
                builder.push(glyph, Some(INVERTED_HOLE_COLOR), color.as_deref());
            } else {
                let glyph = FILL_TABLE[left.count][right.count];
                builder.push(glyph, color.as_deref(), None);
            }
        }
        lines.push(builder.finish());
    }
    lines
}

#[cfg(test)]
mod table_tests {
    use super::FILL_TABLE;

    #[test]
    fn seed_entries() {
        assert_eq!(FILL_TABLE[0][0], ' ');
        assert_eq!(FILL_TABLE[8][8], '█');
        assert_eq!(FILL_TABLE[8][0], '▌');
        assert_eq!(FILL_TABLE[0][8], '▐');
        assert_eq!(FILL_TABLE[4][4], '▄');
    }

    #[test]
    fn transpose_symmetry() {
        fn mirror(c: char) -> char {
            match c {
                '▌' => '▐',
                '▐' => '▌',
                '▖' => '▗',
                '▗' => '▖',
                other => other,
            }
        }
        for l in 0..9 {
            for r in 0..9 {
                assert_eq!(
                    FILL_TABLE[l][r],
                    mirror(FILL_TABLE[r][l]),
                    "asymmetry at ({l}, {r})"
                );
            }
        }
    }

    #[test]
    fn diagonal_is_graduated() {
        let diagonal: Vec<char> = (0..9).map(|i| FILL_TABLE[i][i]).collect();
        assert_eq!(diagonal, [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█']);
    }
}
