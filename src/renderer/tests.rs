// src/renderer/tests.rs

use crate::canvas::Canvas;
use crate::draw;
use crate::pixel::PixelPatch;
use crate::renderer::{dominant_color, CharsetRenderer, INVERTED_HOLE_COLOR};
use test_log::test;

fn render_to_text(renderer: CharsetRenderer, canvas: &Canvas) -> Vec<String> {
    renderer
        .render_canvas(canvas, canvas.width(), canvas.height())
        .iter()
        .map(|line| line.plain_text())
        .collect()
}

// --- Braille ---

#[test]
fn braille_blank_cell_is_the_empty_pattern() {
    let canvas = Canvas::new(2, 4);
    assert_eq!(render_to_text(CharsetRenderer::Braille, &canvas), ["\u{2800}"]);
}

#[test]
fn braille_left_column_sets_dots_1237() {
    let mut canvas = Canvas::new(2, 4);
    for y in 0..4 {
        canvas.set(0, y);
    }
    // bits 0, 1, 2, 6 -> 0x2800 + 0x47
    assert_eq!(render_to_text(CharsetRenderer::Braille, &canvas), ["⡇"]);
}

#[test]
fn braille_full_cell_is_the_full_pattern() {
    let mut canvas = Canvas::new(2, 4);
    draw::rect(&mut canvas, 0, 0, 2, 4, true, &PixelPatch::on());
    assert_eq!(render_to_text(CharsetRenderer::Braille, &canvas), ["⣿"]);
}

#[test]
fn braille_partial_trailing_block_reads_missing_pixels_as_inactive() {
    let mut canvas = Canvas::new(3, 4);
    draw::rect(&mut canvas, 0, 0, 3, 4, true, &PixelPatch::on());
    // Second cell only has its left column inside the canvas.
    assert_eq!(render_to_text(CharsetRenderer::Braille, &canvas), ["⣿⡇"]);
}

#[test]
fn braille_cell_color_is_the_majority_vote() {
    let mut canvas = Canvas::new(2, 4);
    canvas.set_pixel(0, 0, &PixelPatch::colored("red"));
    canvas.set_pixel(1, 0, &PixelPatch::colored("blue"));
    canvas.set_pixel(0, 1, &PixelPatch::colored("blue"));
    let lines = CharsetRenderer::Braille.render_canvas(&canvas, 2, 4);
    assert_eq!(lines[0].runs[0].color.as_deref(), Some("blue"));
}

#[test]
fn braille_color_tie_breaks_to_first_seen() {
    let mut canvas = Canvas::new(2, 4);
    // Row-major scan hits (0,0) before (1,0).
    canvas.set_pixel(0, 0, &PixelPatch::colored("red"));
    canvas.set_pixel(1, 0, &PixelPatch::colored("blue"));
    let lines = CharsetRenderer::Braille.render_canvas(&canvas, 2, 4);
    assert_eq!(lines[0].runs[0].color.as_deref(), Some("red"));
}

#[test]
fn braille_merges_color_runs() {
    let mut canvas = Canvas::new(10, 4);
    // Three cells of red, two of blue: exactly two styled runs.
    for cell in 0..3 {
        canvas.set_pixel(cell * 2, 0, &PixelPatch::colored("red"));
    }
    for cell in 3..5 {
        canvas.set_pixel(cell * 2, 0, &PixelPatch::colored("blue"));
    }
    let lines = CharsetRenderer::Braille.render_canvas(&canvas, 10, 4);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].runs.len(), 2);
    assert_eq!(lines[0].runs[0].color.as_deref(), Some("red"));
    assert_eq!(lines[0].runs[0].text.chars().count(), 3);
    assert_eq!(lines[0].runs[1].color.as_deref(), Some("blue"));
    assert_eq!(lines[0].runs[1].text.chars().count(), 2);
}

// --- Block ---

#[test]
fn block_seed_glyphs() {
    let blank = Canvas::new(2, 8);
    assert_eq!(render_to_text(CharsetRenderer::Block, &blank), [" "]);

    let mut full = Canvas::new(2, 8);
    draw::rect(&mut full, 0, 0, 2, 8, true, &PixelPatch::on());
    assert_eq!(render_to_text(CharsetRenderer::Block, &full), ["█"]);

    let mut bottom_half = Canvas::new(2, 8);
    draw::rect(&mut bottom_half, 0, 4, 2, 4, true, &PixelPatch::on());
    assert_eq!(render_to_text(CharsetRenderer::Block, &bottom_half), ["▄"]);

    let mut left = Canvas::new(2, 8);
    for y in 0..8 {
        left.set(0, y);
    }
    assert_eq!(render_to_text(CharsetRenderer::Block, &left), ["▌"]);

    let mut right = Canvas::new(2, 8);
    for y in 0..8 {
        right.set(1, y);
    }
    assert_eq!(render_to_text(CharsetRenderer::Block, &right), ["▐"]);
}

#[test]
fn block_full_column_is_not_top_heavy() {
    // gravity of a full column is exactly 3.5; the strict `< 3.5` boundary
    // keeps it in standard mode.
    let mut canvas = Canvas::new(2, 8);
    for y in 0..8 {
        canvas.set(0, y);
    }
    let lines = CharsetRenderer::Block.render_canvas(&canvas, 2, 8);
    assert_eq!(lines[0].runs[0].background, None);
}

#[test]
fn block_top_half_renders_inverted() {
    let mut canvas = Canvas::new(2, 8);
    draw::rect(&mut canvas, 0, 0, 2, 4, true, &PixelPatch::colored("red"));
    let lines = CharsetRenderer::Block.render_canvas(&canvas, 2, 8);
    let run = &lines[0].runs[0];
    // Complement heights (4,4) with fg/bg swapped.
    assert_eq!(run.text, "▄");
    assert_eq!(run.color.as_deref(), Some(INVERTED_HOLE_COLOR));
    assert_eq!(run.background.as_deref(), Some("red"));
}

#[test]
fn block_top_line_renders_as_inverted_near_full() {
    // One pixel row hugging the top: complement (7,7).
    let mut canvas = Canvas::new(2, 8);
    canvas.set(0, 0);
    canvas.set(1, 0);
    assert_eq!(render_to_text(CharsetRenderer::Block, &canvas), ["▇"]);
}

#[test]
fn block_top_heavy_beside_empty_column_inverts() {
    let mut canvas = Canvas::new(2, 8);
    for y in 0..4 {
        canvas.set(0, y);
    }
    // left (4, top-heavy), right empty -> complement lookup (4, 8).
    assert_eq!(render_to_text(CharsetRenderer::Block, &canvas), ["▆"]);
}

#[test]
fn block_run_key_includes_background() {
    let mut canvas = Canvas::new(4, 8);
    // First cell inverted (top-heavy, hole-colored ink over a black
    // background), second standard with black ink: identical foregrounds, so
    // the cells merge into one run unless the background is part of the key.
    draw::rect(&mut canvas, 0, 0, 2, 4, true, &PixelPatch::colored("black"));
    draw::rect(&mut canvas, 2, 4, 2, 4, true, &PixelPatch::colored("black"));
    let lines = CharsetRenderer::Block.render_canvas(&canvas, 4, 8);
    assert_eq!(lines[0].runs.len(), 2);
}

// --- Ascii ---

#[test]
fn ascii_blank_canvas_is_spaces() {
    let canvas = Canvas::new(3, 3);
    assert_eq!(render_to_text(CharsetRenderer::Ascii, &canvas), ["   "]);
}

#[test]
fn ascii_horizontal_line_is_dashes() {
    let mut canvas = Canvas::new(5, 3);
    draw::line(&mut canvas, 0, 1, 4, 1, &PixelPatch::on());
    assert_eq!(render_to_text(CharsetRenderer::Ascii, &canvas), ["-----"]);
}

#[test]
fn ascii_horizontal_offsets_pick_their_stroke() {
    let mut top = Canvas::new(4, 3);
    draw::line(&mut top, 0, 0, 3, 0, &PixelPatch::on());
    assert_eq!(render_to_text(CharsetRenderer::Ascii, &top), ["''''"]);

    let mut bottom = Canvas::new(4, 3);
    draw::line(&mut bottom, 0, 2, 3, 2, &PixelPatch::on());
    assert_eq!(render_to_text(CharsetRenderer::Ascii, &bottom), ["____"]);
}

#[test]
fn ascii_vertical_line_is_bars() {
    let mut canvas = Canvas::new(1, 9);
    draw::line(&mut canvas, 0, 0, 0, 8, &PixelPatch::on());
    assert_eq!(render_to_text(CharsetRenderer::Ascii, &canvas), ["|", "|", "|"]);
}

#[test]
fn ascii_rectangle_corners_are_junctions() {
    let mut canvas = Canvas::new(5, 6);
    draw::rect(&mut canvas, 0, 0, 5, 6, false, &PixelPatch::on());
    assert_eq!(
        render_to_text(CharsetRenderer::Ascii, &canvas),
        ["+'''+", "+___+"]
    );
}

#[test]
fn ascii_diagonal_neighbors_become_slashes() {
    let mut canvas = Canvas::new(2, 3);
    canvas.set(0, 0);
    canvas.set(1, 1);
    assert_eq!(render_to_text(CharsetRenderer::Ascii, &canvas), ["/\\"]);
}

#[test]
fn ascii_isolated_pixels_are_positional_dots() {
    for (y, expected) in [(0, "\""), (1, "+"), (2, ".")] {
        let mut canvas = Canvas::new(3, 3);
        canvas.set(1, y);
        let text = render_to_text(CharsetRenderer::Ascii, &canvas);
        assert_eq!(text[0], format!(" {expected} "), "pixel at offset {y}");
    }
}

#[test]
fn ascii_spaces_never_carry_color() {
    let mut canvas = Canvas::new(3, 3);
    canvas.set_pixel(1, 1, &PixelPatch::colored("red"));
    let lines = CharsetRenderer::Ascii.render_canvas(&canvas, 3, 3);
    assert_eq!(lines[0].runs.len(), 3);
    assert_eq!(lines[0].runs[0].color, None);
    assert_eq!(lines[0].runs[1].color.as_deref(), Some("red"));
    assert_eq!(lines[0].runs[2].color, None);
}

// --- Shared behavior ---

#[test]
fn char_dimensions_are_ceil_division() {
    for renderer in CharsetRenderer::ALL {
        let res = renderer.resolution();
        for (w, h) in [(0, 0), (1, 1), (7, 5), (16, 24), (17, 25)] {
            let expected = (
                (w + res.horizontal as usize - 1) / res.horizontal as usize,
                (h + res.vertical as usize - 1) / res.vertical as usize,
            );
            assert_eq!(renderer.char_dimensions(w, h), expected);
        }
        assert_eq!(renderer.char_dimensions(0, 0), (0, 0));
    }
}

#[test]
fn non_divisible_dimensions_round_up_to_whole_cells() {
    let mut canvas = Canvas::new(5, 6);
    draw::rect(&mut canvas, 0, 0, 5, 6, true, &PixelPatch::on());
    let lines = CharsetRenderer::Braille.render_canvas(&canvas, 5, 6);
    assert_eq!(lines.len(), 2); // ceil(6/4)
    for line in &lines {
        assert_eq!(line.plain_text().chars().count(), 3); // ceil(5/2)
    }
}

#[test]
fn zero_sized_render_produces_no_lines() {
    let canvas = Canvas::new(0, 0);
    for renderer in CharsetRenderer::ALL {
        assert!(renderer.render_canvas(&canvas, 0, 0).is_empty());
    }
}

#[test]
fn renderers_are_stateless_and_interchangeable() {
    let mut canvas = Canvas::new(9, 9);
    draw::circle(&mut canvas, 4, 4, 3, false, &PixelPatch::colored("green"));
    for renderer in CharsetRenderer::ALL {
        let first = renderer.render_canvas(&canvas, 9, 9);
        let second = renderer.render_canvas(&canvas, 9, 9);
        let copy = renderer;
        assert_eq!(first, second);
        assert_eq!(first, copy.render_canvas(&canvas, 9, 9));
    }
}

#[test]
fn runs_partition_every_line() {
    let mut canvas = Canvas::new(13, 11);
    draw::line(&mut canvas, 0, 10, 12, 0, &PixelPatch::colored("cyan"));
    draw::rect(&mut canvas, 2, 2, 8, 6, false, &PixelPatch::on());
    for renderer in CharsetRenderer::ALL {
        let (cols, rows) = renderer.char_dimensions(13, 11);
        let lines = renderer.render_canvas(&canvas, 13, 11);
        assert_eq!(lines.len(), rows);
        for line in &lines {
            assert_eq!(line.plain_text().chars().count(), cols, "{}", renderer.name());
        }
    }
}

#[test]
fn dominant_color_ignores_inactive_and_uncolored_pixels() {
    use crate::pixel::Pixel;
    let pixels = [
        Pixel {
            active: false,
            color: Some("red".into()),
        },
        Pixel {
            active: true,
            color: None,
        },
        Pixel {
            active: true,
            color: Some("blue".into()),
        },
    ];
    assert_eq!(dominant_color(pixels.iter()).as_deref(), Some("blue"));
    assert_eq!(dominant_color(std::iter::empty::<&Pixel>()), None);
}
