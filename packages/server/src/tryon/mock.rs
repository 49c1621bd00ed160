//! Placeholder images used when no provider credential is configured.

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::{ImageFormat, ImageResult, Rgb, RgbImage};
use thiserror::Error;
use tracing::{info, warn};

use super::style::{BlouseStyle, Pose};

const TEXT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
const NEUTRAL_GRAY: Rgb<u8> = Rgb([200, 200, 200]);

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
const GLYPH_SCALE: u32 = 6;
const TEXT_X: u32 = 50;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OverlayError {
    #[error("no glyph for {0:?}")]
    UnsupportedGlyph(char),
    #[error("text block of {width}x{height} does not fit at ({x}, {y})")]
    DoesNotFit { x: u32, y: u32, width: u32, height: u32 },
}

/// Base fill color for a pose. Poses without a dedicated color are gray.
pub fn placeholder_color(pose: Pose) -> Rgb<u8> {
    match pose {
        Pose::Front => Rgb([255, 100, 100]),
        Pose::Side => Rgb([100, 255, 100]),
        _ => NEUTRAL_GRAY,
    }
}

/// Render the placeholder and return it as base64-encoded PNG.
///
/// A failed text overlay is logged and the plain colored image is returned.
pub fn render_placeholder(
    pose: Pose,
    blouse: BlouseStyle,
    width: u32,
    height: u32,
) -> ImageResult<String> {
    info!(%pose, %blouse, "Generating placeholder try-on image");

    let mut canvas = RgbImage::from_pixel(width, height, placeholder_color(pose));
    let lines = [
        "MOCK SAREE".to_string(),
        pose.as_str().to_uppercase(),
        blouse.as_str().to_uppercase(),
    ];
    let y = (height / 2).saturating_sub(30);
    if let Err(e) = draw_text(&mut canvas, &lines, TEXT_X, y) {
        warn!(error = %e, "Could not add text to placeholder image");
    }

    let mut bytes = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(BASE64.encode(bytes))
}

/// Draw `lines` with the built-in bitmap font. Nothing is drawn unless the
/// whole block can be rendered.
fn draw_text(canvas: &mut RgbImage, lines: &[String], x: u32, y: u32) -> Result<(), OverlayError> {
    let advance = (GLYPH_WIDTH + 1) * GLYPH_SCALE;
    let line_height = (GLYPH_HEIGHT + 3) * GLYPH_SCALE;

    let mut rendered = Vec::with_capacity(lines.len());
    for line in lines {
        let glyphs = line
            .chars()
            .map(|c| glyph(c).ok_or(OverlayError::UnsupportedGlyph(c)))
            .collect::<Result<Vec<_>, _>>()?;
        rendered.push(glyphs);
    }

    let block_width = rendered.iter().map(Vec::len).max().unwrap_or(0) as u32 * advance;
    let block_height = rendered.len() as u32 * line_height;
    if x + block_width > canvas.width() || y + block_height > canvas.height() {
        return Err(OverlayError::DoesNotFit {
            x,
            y,
            width: block_width,
            height: block_height,
        });
    }

    for (line_idx, glyphs) in rendered.iter().enumerate() {
        let top = y + line_idx as u32 * line_height;
        for (char_idx, rows) in glyphs.iter().enumerate() {
            let left = x + char_idx as u32 * advance;
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                        continue;
                    }
                    fill_cell(canvas, left + col * GLYPH_SCALE, top + row as u32 * GLYPH_SCALE);
                }
            }
        }
    }
    Ok(())
}

fn fill_cell(canvas: &mut RgbImage, x: u32, y: u32) {
    for dy in 0..GLYPH_SCALE {
        for dx in 0..GLYPH_SCALE {
            canvas.put_pixel(x + dx, y + dy, TEXT_COLOR);
        }
    }
}

/// 5x7 bitmap rows, most significant of the low five bits is the left column.
fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '_' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        ' ' => [0x00; 7],
        _ => return None,
    };
    Some(rows)
}
