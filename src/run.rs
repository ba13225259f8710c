// src/run.rs

//! Styled output runs and the color-run encoder.
//!
//! A rasterized canvas comes back as one `RenderedLine` per character row,
//! each an ordered list of `TextRun`s that partition the row left to right.
//! Consecutive glyphs sharing an identical (color, background) pair are
//! merged into a single run so the consumer emits as few style changes as
//! possible. This crate never emits escape sequences itself; applying ANSI
//! styling to the runs is the output layer's job.

use serde::Serialize;

/// A maximal sequence of consecutive characters sharing one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextRun {
    pub text: String,
    /// Opaque foreground color token, `None` for the terminal default.
    pub color: Option<String>,
    /// Opaque background color token, `None` for no background.
    pub background: Option<String>,
}

/// One character row of rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RenderedLine {
    pub runs: Vec<TextRun>,
}

impl RenderedLine {
    /// The line's text with styling stripped.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// Accumulates glyphs into style-merged runs.
///
/// The run key is the (color, background) *pair*: a change to either starts a
/// new run.
#[derive(Debug, Default)]
pub struct RunBuilder {
    runs: Vec<TextRun>,
}

impl RunBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one glyph, merging it into the last run when the style matches.
    pub fn push(&mut self, glyph: char, color: Option<&str>, background: Option<&str>) {
        if let Some(last) = self.runs.last_mut() {
            if last.color.as_deref() == color && last.background.as_deref() == background {
                last.text.push(glyph);
                return;
            }
        }
        self.runs.push(TextRun {
            text: glyph.to_string(),
            color: color.map(str::to_owned),
            background: background.map(str::to_owned),
        });
    }

    pub fn finish(self) -> RenderedLine {
        RenderedLine { runs: self.runs }
    }
}
