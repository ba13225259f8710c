// src/draw.rs

//! Shared drawing primitives over the pixel canvas.
//!
//! These are free functions rather than methods because they are the common
//! layer below all three charset rasterizers: everything here reduces to
//! `Canvas::set_pixel` calls, so out-of-bounds portions of a shape are simply
//! clipped and degenerate geometry collapses to minimal-but-valid output
//! (a zero-radius filled circle is its center pixel).

use crate::canvas::Canvas;
use crate::pixel::PixelPatch;

use log::trace;


/// Draws a line from `(x0, y0)` to `(x1, y1)` with Bresenham's integer-error
/// walk. Endpoints are always included.
///
/// The endpoints are put in lexicographic order before walking, so drawing
/// A->B sets exactly the same pixel set as B->A regardless of how the error
/// term breaks ties.
pub fn line(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, patch: &PixelPatch) {
    let ((x0, y0), (x1, y1)) = if (x1, y1) < (x0, y0) {
        ((x1, y1), (x0, y0))
    } else {
        ((x0, y0), (x1, y1))
    };

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        canvas.set_pixel(x, y, patch);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Draws a circle of radius `r` around `(cx, cy)`.
///
/// Unfilled circles use the midpoint algorithm with 8-way symmetry; the
/// axis-aligned steps overlap and are deduplicated by `set_pixel` idempotence.
/// Filled circles fill a horizontal span per scanline via `x = ±sqrt(r²−y²)`.
pub fn circle(canvas: &mut Canvas, cx: i32, cy: i32, r: i32, filled: bool, patch: &PixelPatch) {
    let r = r.max(0);
    if filled {
        for dy in -r..=r {
            let half = ((r * r - dy * dy) as f64).sqrt().floor() as i32;
            for x in (cx - half)..=(cx + half) {
                canvas.set_pixel(x, cy + dy, patch);
            }
        }
        return;
    }

    let mut x = r;
    let mut y = 0;
    let mut d = 1 - r;
    while y <= x {
        canvas.set_pixel(cx + x, cy + y, patch);
        canvas.set_pixel(cx + y, cy + x, patch);
        canvas.set_pixel(cx - y, cy + x, patch);
        canvas.set_pixel(cx - x, cy + y, patch);
        canvas.set_pixel(cx - x, cy - y, patch);
        canvas.set_pixel(cx - y, cy - x, patch);
        canvas.set_pixel(cx + y, cy - x, patch);
        canvas.set_pixel(cx + x, cy - y, patch);
        y += 1;
        if d < 0 {
            d += 2 * y + 1;
        } else {
            x -= 1;
            d += 2 * (y - x) + 1;
        }
    }
}

/// Draws an arc of radius `r` around `(cx, cy)` between two angles (radians).
///
/// Reversed angles are swapped, so arcs always sweep in increasing-angle
/// order. `thickness` extends inward: radii `r-thickness+1 ..= r` are each
/// sampled at an angular step of `1/(2r)` radians, roughly one sample per
/// pixel of circumference.
pub fn arc(
    canvas: &mut Canvas,
    cx: i32,
    cy: i32,
    r: i32,
    start_angle: f64,
    end_angle: f64,
    thickness: i32,
    patch: &PixelPatch,
) {
    if r <= 0 {
        canvas.set_pixel(cx, cy, patch);
        return;
    }
    let (start, end) = if start_angle > end_angle {
        (end_angle, start_angle)
    } else {
        (start_angle, end_angle)
    };
    let step = 1.0 / (2.0 * r as f64);
    let inner = (r - thickness.max(1) + 1).max(0);
    trace!(
        "arc: center ({cx}, {cy}), radii {inner}..={r}, sweep {start:.3}..{end:.3} step {step:.4}"
    );

    for radius in inner..=r {
        let rf = radius as f64;
        let mut theta = start;
        while theta <= end {
            let x = cx + (rf * theta.cos()).round() as i32;
            let y = cy + (rf * theta.sin()).round() as i32;
            canvas.set_pixel(x, y, patch);
            theta += step;
        }
        // The sweep rarely lands on the end angle exactly; close it off.
        let x = cx + (rf * end.cos()).round() as i32;
        let y = cy + (rf * end.sin()).round() as i32;
        canvas.set_pixel(x, y, patch);
    }
}

/// Draws a `w` x `h` rectangle with its top-left corner at `(x, y)`.
///
/// Filled rectangles set every pixel in the span. Unfilled rectangles draw
/// exactly the four border segments, each corner set once.
pub fn rect(canvas: &mut Canvas, x: i32, y: i32, w: i32, h: i32, filled: bool, patch: &PixelPatch) {
    if w <= 0 || h <= 0 {
        return;
    }
    let x1 = x + w - 1;
    let y1 = y + h - 1;

    if filled {
        for yy in y..=y1 {
            for xx in x..=x1 {
                canvas.set_pixel(xx, yy, patch);
            }
        }
        return;
    }

    for xx in x..=x1 {
        canvas.set_pixel(xx, y, patch);
    }
    if y1 > y {
        for xx in x..=x1 {
            canvas.set_pixel(xx, y1, patch);
        }
    }
    for yy in (y + 1)..y1 {
        canvas.set_pixel(x, yy, patch);
        if x1 > x {
            canvas.set_pixel(x1, yy, patch);
        }
    }
}
