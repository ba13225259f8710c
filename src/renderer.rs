// src/renderer.rs

//! The charset renderers: one entry point, three rasterization strategies.
//!
//! Every renderer solves the same problem, picking the single terminal
//! character (and style) that best represents an MxN pixel block, under a
//! different sub-character resolution:
//!
//! - **Braille** (2x4): direct bit-packing into the 256 Braille code points.
//! - **Block** (2x8): a hand-tuned 9x9 fill-height lookup with a top-heavy
//!   inversion mode that swaps foreground and background.
//! - **Ascii** (1x3): neighbor-aware heuristics over a 9-glyph alphabet.
//!
//! Renderers hold no state: `render_canvas` is a pure function of the canvas
//! contents, so one renderer value may be shared across concurrent renders as
//! long as each render owns its canvas.

use crate::canvas::Canvas;
use crate::metadata::{
    RendererMetadata, Resolution, ASCII_METADATA, BLOCK_METADATA, BRAILLE_METADATA,
};
use crate::pixel::Pixel;
use crate::run::RenderedLine;

use log::trace;

mod ascii;
mod block;
mod braille;

#[cfg(test)]
mod tests;

pub use block::INVERTED_HOLE_COLOR;

/// The closed set of charset renderers. The character-set repertoire is fixed,
/// so there is no open extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharsetRenderer {
    Braille,
    Block,
    Ascii,
}

impl CharsetRenderer {
    /// All renderers, most capable first. Selection policy lives elsewhere;
    /// this is the order it walks.
    pub const ALL: [CharsetRenderer; 3] = [
        CharsetRenderer::Braille,
        CharsetRenderer::Block,
        CharsetRenderer::Ascii,
    ];

    /// The renderer's static descriptor.
    pub fn metadata(&self) -> &'static RendererMetadata {
        match self {
            CharsetRenderer::Braille => &BRAILLE_METADATA,
            CharsetRenderer::Block => &BLOCK_METADATA,
            CharsetRenderer::Ascii => &ASCII_METADATA,
        }
    }

    pub fn name(&self) -> &'static str {
        self.metadata().name
    }

    pub fn resolution(&self) -> Resolution {
        self.metadata().resolution
    }

    /// Character columns and rows needed to cover a pixel area.
    pub fn char_dimensions(&self, pixel_width: usize, pixel_height: usize) -> (usize, usize) {
        self.resolution().char_dimensions(pixel_width, pixel_height)
    }

    /// Rasterizes `canvas` into one `RenderedLine` per character row.
    ///
    /// `pixel_width` and `pixel_height` bound the area to render; they need
    /// not be multiples of the resolution. A partial trailing block still
    /// yields one character, with pixels beyond the canvas read as inactive.
    pub fn render_canvas(
        &self,
        canvas: &Canvas,
        pixel_width: usize,
        pixel_height: usize,
    ) -> Vec<RenderedLine> {
        let (cols, rows) = self.char_dimensions(pixel_width, pixel_height);
        trace!(
            "render_canvas: {}x{} px -> {}x{} cells ({})",
            pixel_width,
            pixel_height,
            cols,
            rows,
            self.name()
        );
        match self {
            CharsetRenderer::Braille => braille::rasterize(canvas, cols, rows),
            CharsetRenderer::Block => block::rasterize(canvas, cols, rows),
            CharsetRenderer::Ascii => ascii::rasterize(canvas, cols, rows),
        }
    }
}

/// Majority-vote color over a block's active, colored pixels.
///
/// `pixels` must arrive in the block's scan order (top-to-bottom, then left
/// to right within each row): the accumulator is insertion-ordered, so a tie
/// resolves to the first color seen, bit-for-bit the documented tie-break.
pub(crate) fn dominant_color<'a, I>(pixels: I) -> Option<String>
where
    I: IntoIterator<Item = &'a Pixel>,
{
    // Blocks hold at most 16 pixels; a linear-scan Vec keeps insertion order.
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    for px in pixels {
        if !px.active {
            continue;
        }
        let Some(color) = px.color.as_deref() else {
            continue;
        };
        match counts.iter_mut().find(|(c, _)| *c == color) {
            Some((_, n)) => *n += 1,
            None => counts.push((color, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (color, n) in counts {
        if best.map_or(true, |(_, best_n)| n > best_n) {
            best = Some((color, n));
        }
    }
    best.map(|(color, _)| color.to_owned())
}
