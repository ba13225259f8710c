// src/renderer/braille.rs

//! Braille rasterization: each 2x4 pixel block maps directly to one of the
//! 256 Braille patterns (U+2800-U+28FF).
//!
//! Dot numbering is the Braille standard, not row-major: the left column runs
//! top to bottom through bits 0, 1, 2, 6 and the right column through bits
//! 3, 4, 5, 7. The emitted code point is `0x2800 + Σ 2^bit` over active dots.
//!
//! ```text
//!   col0 col1
//!   [0]  [3]
//!   [1]  [4]
//!   [2]  [5]
//!   [6]  [7]
//! ```

use crate::canvas::Canvas;
use crate::renderer::dominant_color;
use crate::run::{RenderedLine, RunBuilder};

/// Dot bit weight by `[row][column]` within the cell.
const DOT_BIT: [[u32; 2]; 4] = [[0, 3], [1, 4], [2, 5], [6, 7]];

const BRAILLE_BASE: u32 = 0x2800;

pub(super) fn rasterize(canvas: &Canvas, cols: usize, rows: usize) -> Vec<RenderedLine> {
    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let mut builder = RunBuilder::new();
        for col in 0..cols {
            let x0 = (col * 2) as i32;
            let y0 = (row * 4) as i32;

            let mut bits = 0u32;
            let mut block = Vec::with_capacity(8);
            for dy in 0..4i32 {
                for dx in 0..2i32 {
                    if let Some(px) = canvas.get(x0 + dx, y0 + dy) {
                        if px.active {
                            bits |= 1 << DOT_BIT[dy as usize][dx as usize];
                        }
                        block.push(px);
                    }
                }
            }

            // All of 0x2800..=0x28FF are valid scalar values.
            let glyph = char::from_u32(BRAILLE_BASE + bits).unwrap_or('\u{2800}');
            let color = dominant_color(block);
            builder.push(glyph, color.as_deref(), None);
        }
        lines.push(builder.finish());
    }
    lines
}
