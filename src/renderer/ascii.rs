// src/renderer/ascii.rs

//! ASCII rasterization: each 1x3 pixel block becomes one glyph from the
//! alphabet `' - _ | + / \ . "` plus space.
//!
//! A single ASCII character cannot encode sub-pixel position the way Braille
//! dots or block fractions can, so the classifier leans on the horizontal
//! neighbor cells: a lone pixel that lines up with a neighbor at the same
//! offset becomes a horizontal stroke, one offset from a neighbor's center of
//! mass becomes a diagonal, and a truly isolated pixel becomes a positional
//! dot. Two or more active pixels read as a vertical bar, or a junction when
//! a neighbor connects.

use crate::canvas::Canvas;
use crate::renderer::dominant_color;
use crate::run::{RenderedLine, RunBuilder};

/// Horizontal-continuation glyph by row offset.
const HORIZONTAL: [char; 3] = ['\'', '-', '_'];
/// Isolated-pixel glyph by row offset.
const ISOLATED: [char; 3] = ['"', '+', '.'];

/// Mean active row offset of the 1x3 cell whose top pixel is `(x, y0)`, or
/// `None` when the cell is fully inactive.
fn cell_mean(canvas: &Canvas, x: i32, y0: i32) -> Option<f64> {
    let mut count = 0usize;
    let mut sum = 0usize;
    for dy in 0..3i32 {
        if canvas.is_active(x, y0 + dy) {
            count += 1;
            sum += dy as usize;
        }
    }
    (count > 0).then(|| sum as f64 / count as f64)
}

fn classify(canvas: &Canvas, x: i32, y0: i32) -> char {
    let positions: Vec<i32> = (0..3i32)
        .filter(|dy| canvas.is_active(x, y0 + dy))
        .collect();

    match positions.as_slice() {
        [] => ' ',
        [pos] => classify_single(canvas, x, y0, *pos),
        // Two or three active: a vertical bar, or a junction when either
        // horizontal neighbor cell touches it.
        _ => {
            if cell_mean(canvas, x - 1, y0).is_some() || cell_mean(canvas, x + 1, y0).is_some() {
                '+'
            } else {
                '|'
            }
        }
    }
}

fn classify_single(canvas: &Canvas, x: i32, y0: i32, pos: i32) -> char {
    // Exact-offset alignment with a neighbor wins: horizontal continuation.
    if canvas.is_active(x - 1, y0 + pos) || canvas.is_active(x + 1, y0 + pos) {
        return HORIZONTAL[pos as usize];
    }

    // A neighbor whose center of mass sits at a different offset makes this
    // pixel part of a diagonal. Left neighbor takes priority.
    for neighbor_x in [x - 1, x + 1] {
        if let Some(mean) = cell_mean(canvas, neighbor_x, y0) {
            if (pos as f64) != mean {
                return if (pos as f64) < mean { '/' } else { '\\' };
            }
        }
    }

    ISOLATED[pos as usize]
}

pub(super) fn rasterize(canvas: &Canvas, cols: usize, rows: usize) -> Vec<RenderedLine> {
    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let mut builder = RunBuilder::new();
        for col in 0..cols {
            let x = col as i32;
            let y0 = (row * 3) as i32;

            let glyph = classify(canvas, x, y0);
            // A space carries no color by construction: an empty cell has no
            // active pixels to vote.
            let color = dominant_color((0..3i32).filter_map(|dy| canvas.get(x, y0 + dy)));
            builder.push(glyph, color.as_deref(), None);
        }
        lines.push(builder.finish());
    }
    lines
}
