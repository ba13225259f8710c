// src/lib.rs

//! Sub-character-cell graphics for text terminals.
//!
//! `subcell` renders numeric data as character-cell graphics by packing
//! multiple logical pixels into the glyph patterns of Unicode Braille,
//! Unicode block elements, or plain ASCII. A caller allocates a [`Canvas`]
//! in pixel units, mutates it through the [`draw`] primitives, then hands it
//! to a [`CharsetRenderer`], which walks the canvas in character-cell-sized
//! blocks and returns one [`RenderedLine`] of style-merged [`TextRun`]s per
//! character row.
//!
//! ```
//! use subcell::{draw, Canvas, CharsetRenderer, PixelPatch};
//!
//! let mut canvas = Canvas::new(10, 8);
//! draw::line(&mut canvas, 0, 7, 9, 0, &PixelPatch::colored("cyan"));
//! let lines = CharsetRenderer::Braille.render_canvas(&canvas, 10, 8);
//! assert_eq!(lines.len(), 2);
//! ```
//!
//! The crate is deliberately I/O-free: colors are opaque tokens and no escape
//! sequences are emitted. Applying ANSI styling to the returned runs, and
//! picking a renderer from the published [`RendererMetadata`] against the
//! detected terminal, belongs to the layers above.

pub mod canvas;
pub mod draw;
pub mod metadata;
pub mod pixel;
pub mod renderer;
pub mod run;

pub use canvas::Canvas;
pub use metadata::{CapabilityFlags, RendererMetadata, Resolution};
pub use pixel::{Pixel, PixelPatch, BLANK_PIXEL};
pub use renderer::{CharsetRenderer, INVERTED_HOLE_COLOR};
pub use run::{RenderedLine, RunBuilder, TextRun};
