// src/canvas.rs

//! The pixel canvas: a dense, row-major grid of `Pixel` cells addressed by
//! absolute pixel coordinate.
//!
//! Dimensions are fixed at creation and expressed in pixel units, not
//! character units. The canvas is the sole owner of its pixels; drawing
//! primitives mutate them in place and rasterizers read them back out.
//!
//! Out-of-bounds writes are silently dropped. Chart math routinely rounds
//! floating point coordinates to off-by-one positions at the edges, and
//! erroring there would force every caller to clamp defensively.

use crate::pixel::{Pixel, PixelPatch, BLANK_PIXEL};


/// A rectangular grid of pixels with flat row-major storage
/// (`index = y * width + x`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl Canvas {
    /// Allocates a canvas of `width` x `height` blank pixels.
    ///
    /// Negative dimensions clamp to zero, yielding an empty canvas: degenerate
    /// charts (empty data sets) are a normal input, not an error.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0) as usize;
        let height = height.max(0) as usize;
        Self {
            width,
            height,
            pixels: vec![BLANK_PIXEL; width * height],
        }
    }

    /// Canvas width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Canvas height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` lies within `[0, width) x [0, height)`.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }

    /// The pixel at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&Pixel> {
        if self.in_bounds(x, y) {
            Some(&self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// Whether the pixel at `(x, y)` is active. Out-of-bounds reads as
    /// inactive, which is what rasterizers want for partial trailing blocks.
    #[inline]
    pub fn is_active(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(|px| px.active)
    }

    /// Merges `patch` into the pixel at `(x, y)`.
    ///
    /// Out-of-bounds coordinates are silently ignored. Applying the same
    /// patch twice is idempotent.
    pub fn set_pixel(&mut self, x: i32, y: i32, patch: &PixelPatch) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.pixels[idx].apply(patch);
        }
    }

    /// Lights the pixel at `(x, y)` with the default patch.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32) {
        self.set_pixel(x, y, &PixelPatch::on());
    }

    /// Resets every pixel to blank.
    pub fn clear(&mut self) {
        for px in &mut self.pixels {
            *px = BLANK_PIXEL;
        }
    }
}
