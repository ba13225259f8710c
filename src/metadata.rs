// src/metadata.rs

//! Static renderer descriptors published to the renderer-selection layer.
//!
//! Each charset renderer advertises its sub-character resolution, what the
//! terminal must support to display it, and a minimum capability score. The
//! selection policy itself lives outside this crate; the ASCII renderer, with
//! no requirements and a zero score, is the universal fallback.

use bitflags::bitflags;
use once_cell::sync::Lazy;
use serde::Serialize;

bitflags! {
    /// Terminal features a renderer needs before its output is displayable.
    ///
    /// Serializes as the flags string (e.g. `"REQUIRES_UTF8 | REQUIRES_UNICODE"`)
    /// through the serializable internal bits type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
    #[serde(transparent)]
    pub struct CapabilityFlags: u8 {
        const REQUIRES_UTF8    = 1 << 0;
        const REQUIRES_UNICODE = 1 << 1;
    }
}

/// Pixels covered by one character cell, per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Resolution {
    pub horizontal: u32,
    pub vertical: u32,
}

impl Resolution {
    pub const fn new(horizontal: u32, vertical: u32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Character columns and rows needed to cover a pixel area: ceil division
    /// per axis, so a partial trailing block still gets a character.
    /// `(0, 0)` maps to `(0, 0)`.
    pub fn char_dimensions(&self, pixel_width: usize, pixel_height: usize) -> (usize, usize) {
        let h = self.horizontal as usize;
        let v = self.vertical as usize;
        ((pixel_width + h - 1) / h, (pixel_height + v - 1) / v)
    }
}

/// Static descriptor for one charset renderer. Built once, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct RendererMetadata {
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub resolution: Resolution,
    pub requirements: CapabilityFlags,
    pub min_score: u8,
}

pub static BRAILLE_METADATA: Lazy<RendererMetadata> = Lazy::new(|| RendererMetadata {
    name: "braille",
    display_name: "Braille",
    description: "2x4 dot matrix per cell using Unicode Braille patterns (U+2800-U+28FF)",
    resolution: Resolution::new(2, 4),
    requirements: CapabilityFlags::REQUIRES_UTF8 | CapabilityFlags::REQUIRES_UNICODE,
    min_score: 60,
});

pub static BLOCK_METADATA: Lazy<RendererMetadata> = Lazy::new(|| RendererMetadata {
    name: "block",
    display_name: "Block Elements",
    description: "2x8 fill heights per cell using Unicode block elements (U+2580-U+259F)",
    resolution: Resolution::new(2, 8),
    requirements: CapabilityFlags::REQUIRES_UTF8 | CapabilityFlags::REQUIRES_UNICODE,
    min_score: 40,
});

pub static ASCII_METADATA: Lazy<RendererMetadata> = Lazy::new(|| RendererMetadata {
    name: "ascii",
    display_name: "ASCII",
    description: "1x3 positional glyphs from a 9-character ASCII alphabet; works everywhere",
    resolution: Resolution::new(1, 3),
    requirements: CapabilityFlags::empty(),
    min_score: 0,
});
