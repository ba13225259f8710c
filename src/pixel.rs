// src/pixel.rs

//! Defines the `Pixel` cell type and the `PixelPatch` partial update applied
//! by drawing operations.
//!
//! A `Pixel` is one addressable unit of the virtual canvas, at sub-character
//! resolution. Color is an opaque token (hex or named) carried through to the
//! output styling verbatim; this crate never interprets it.

use serde::{Deserialize, Serialize};

/// One cell of the pixel canvas.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pixel {
    /// Whether the pixel is lit.
    pub active: bool,
    /// Opaque color token, passed through to the rendered run untouched.
    pub color: Option<String>,
}

/// Blank pixel: inactive, uncolored. Canvases are allocated full of these.
pub const BLANK_PIXEL: Pixel = Pixel {
    active: false,
    color: None,
};

/// A partial update merged into an existing pixel by `Canvas::set_pixel`.
///
/// Fields left as `None` keep the pixel's current value, so a later patch can
/// flip `active` back off without losing the color, or recolor a pixel while
/// leaving `active` untouched. The outer `Option` on `color` selects whether
/// the field is written; the inner one is the value written (including
/// `None`, which clears the color).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelPatch {
    pub active: Option<bool>,
    pub color: Option<Option<String>>,
}

impl PixelPatch {
    /// The plain "turn this pixel on" patch.
    pub const fn on() -> Self {
        Self {
            active: Some(true),
            color: None,
        }
    }

    /// Turn the pixel on and set its color.
    pub fn colored(color: &str) -> Self {
        Self {
            active: Some(true),
            color: Some(Some(color.to_owned())),
        }
    }

    /// Turn the pixel off, keeping its color.
    pub const fn off() -> Self {
        Self {
            active: Some(false),
            color: None,
        }
    }
}

impl Default for PixelPatch {
    /// Drawing primitives default to lighting pixels without touching color.
    fn default() -> Self {
        Self::on()
    }
}

impl Pixel {
    /// Merges `patch` into this pixel, field by field.
    pub fn apply(&mut self, patch: &PixelPatch) {
        if let Some(active) = patch.active {
            self.active = active;
        }
        if let Some(color) = &patch.color {
            self.color = color.clone();
        }
    }
}
