//! Text measurement and the glyph-by-glyph rasterizer.
//!
//! Drawing happens straight into a caller-owned `RgbaImage` with
//! source-over blending. Coordinates may run off the surface; painting
//! clips at the edges and nothing else happens.

use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::font;
use crate::palette;
use crate::text::Span;

pub const DEFAULT_TEXT_COLOR: Rgba<u8> = palette::WHITE;

// Glyphs whose single-column strokes already read as bold; the faux-bold
// double-stroke skips these.
const NO_BOLD_OFFSET_CHARS: [char; 8] = [':', '.', ',', ';', '\'', '`', '!', '|'];

/// Measured width of a styled tree in pixels: per-char advances for the
/// node's own content plus all children, with the same metrics at every
/// depth. Style never changes advance widths.
pub fn measure_width(span: &Span) -> u32 {
    let own: u32 = span.content().chars().map(font::advance).sum();
    own + span.children().iter().map(measure_width).sum::<u32>()
}

/// Draws a styled tree with its baseline at `(x, baseline_y)` and returns
/// the metric width consumed, which always equals [`measure_width`] for
/// the same tree. Shadow and faux-bold strokes are cosmetic only and do
/// not advance the cursor.
pub fn draw_span(
    img: &mut RgbaImage,
    span: &Span,
    x: i32,
    baseline_y: i32,
    default_color: Rgba<u8>,
    shadow_color: Rgba<u8>,
) -> u32 {
    let bold = span.bold_value().unwrap_or(false);
    draw_resolved(img, span, x, baseline_y, default_color, shadow_color, bold)
}

// `bold` is the node's already-resolved flag; children that leave bold
// unset take it over verbatim rather than re-consulting ancestors.
fn draw_resolved(
    img: &mut RgbaImage,
    span: &Span,
    x: i32,
    baseline_y: i32,
    default_color: Rgba<u8>,
    shadow_color: Rgba<u8>,
    bold: bool,
) -> u32 {
    let color = span.color_value().unwrap_or(default_color);
    let top_y = baseline_y - font::ASCENT as i32;
    let mut cursor = x;
    let mut advanced = 0u32;

    for c in span.content().chars() {
        let skip_bold_offset = NO_BOLD_OFFSET_CHARS.contains(&c);

        draw_glyph(img, c, cursor + 1, top_y + 1, shadow_color);
        if bold && !skip_bold_offset {
            draw_glyph(img, c, cursor + 2, top_y + 1, shadow_color);
        }

        draw_glyph(img, c, cursor, top_y, color);
        if bold && !skip_bold_offset {
            draw_glyph(img, c, cursor + 1, top_y, color);
        }

        let advance = font::advance(c);
        cursor += advance as i32;
        advanced += advance;
    }

    for child in span.children() {
        let child_bold = child.bold_value().unwrap_or(bold);
        let child_width = draw_resolved(
            img,
            child,
            cursor,
            baseline_y,
            color,
            shadow_color,
            child_bold,
        );
        cursor += child_width as i32;
        advanced += child_width;
    }

    advanced
}

fn draw_glyph(img: &mut RgbaImage, c: char, x: i32, top_y: i32, color: Rgba<u8>) {
    let glyph = font::glyph(c);
    for row in 0..font::GLYPH_ROWS {
        for col in 0..u32::from(glyph.width) {
            if glyph.pixel(col, row) {
                fill_rect(
                    img,
                    x + (col * font::SCALE) as i32,
                    top_y + (row * font::SCALE) as i32,
                    font::SCALE,
                    font::SCALE,
                    color,
                );
            }
        }
    }
}

/// Alpha-blends a solid rectangle, clipped to the surface.
pub fn fill_rect(img: &mut RgbaImage, x: i32, y: i32, w: u32, h: u32, color: Rgba<u8>) {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + w as i32).min(img.width() as i32);
    let y1 = (y + h as i32).min(img.height() as i32);
    for py in y0..y1 {
        for px in x0..x1 {
            blend_px(img.get_pixel_mut(px as u32, py as u32), color);
        }
    }
}

// Integer source-over compositing; fully opaque sources overwrite.
fn blend_px(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let sa = u32::from(src[3]);
    if sa == 0 {
        return;
    }
    if sa == 255 {
        *dst = src;
        return;
    }
    let da = u32::from(dst[3]);
    let inv = 255 - sa;
    // Output alpha, scaled by 255 to keep the channel math integral.
    let out_a = sa * 255 + da * inv;
    if out_a == 0 {
        return;
    }
    for i in 0..3 {
        let num = u32::from(src[i]) * sa * 255 + u32::from(dst[i]) * da * inv;
        dst[i] = (num / out_a) as u8;
    }
    dst[3] = (out_a / 255) as u8;
}

/// Blends `icon` onto the surface at `(x, y)`, scaled to `size`x`size`.
/// An icon that cannot be scaled is skipped rather than aborting the
/// surrounding render.
pub fn draw_icon(img: &mut RgbaImage, icon: &RgbaImage, x: i32, y: i32, size: u32) {
    let scaled;
    let source = if icon.width() == size && icon.height() == size {
        icon
    } else {
        match scale_icon(icon, size) {
            Some(resized) => {
                scaled = resized;
                &scaled
            }
            None => {
                debug!(
                    width = icon.width(),
                    height = icon.height(),
                    "skipping icon that failed to scale"
                );
                return;
            }
        }
    };
    for (col, row, px) in source.enumerate_pixels() {
        let dx = x + col as i32;
        let dy = y + row as i32;
        if dx >= 0 && dy >= 0 && (dx as u32) < img.width() && (dy as u32) < img.height() {
            blend_px(img.get_pixel_mut(dx as u32, dy as u32), *px);
        }
    }
}

fn scale_icon(icon: &RgbaImage, size: u32) -> Option<RgbaImage> {
    use fast_image_resize as fir;

    if icon.width() == 0 || icon.height() == 0 || size == 0 {
        return None;
    }
    let src = fir::images::ImageRef::new(
        icon.width(),
        icon.height(),
        icon.as_raw(),
        fir::PixelType::U8x4,
    )
    .ok()?;
    let mut dst = fir::images::Image::new(size, size, fir::PixelType::U8x4);
    // Nearest keeps the pixel-art edges crisp.
    let options = fir::ResizeOptions::new().resize_alg(fir::ResizeAlg::Nearest);
    let mut resizer = fir::Resizer::new();
    resizer.resize(&src, &mut dst, Some(&options)).ok()?;
    RgbaImage::from_raw(size, size, dst.into_vec())
}
