//! Built-in 5x7 bitmap font used for icon labels.
//!
//! Each glyph is seven rows of five bits, the most significant of the five
//! bits being the leftmost column. Glyphs sit in a 6 pixel wide cell so
//! consecutive characters keep one blank column between them.

use image::{Rgba, RgbaImage};

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;

/// Horizontal distance between the left edges of two consecutive glyphs
pub const ADVANCE: u32 = GLYPH_WIDTH + 1;

type Glyph = [u8; GLYPH_HEIGHT as usize];

/// Look up the glyph for a character. Lowercase letters map to uppercase.
pub fn glyph(c: char) -> Option<&'static Glyph> {
    let glyph: &'static Glyph = match c.to_ascii_uppercase() {
        ' ' => &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        'A' => &[0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => &[0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => &[0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => &[0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => &[0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => &[0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => &[0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => &[0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => &[0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => &[0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => &[0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => &[0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => &[0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => &[0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => &[0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => &[0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => &[0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => &[0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => &[0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => &[0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => &[0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => &[0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => &[0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => &[0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => &[0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => &[0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => &[0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => &[0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => &[0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => &[0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => &[0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => &[0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => &[0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => &[0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => &[0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => &[0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '-' => &[0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '.' => &[0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ':' => &[0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '!' => &[0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '?' => &[0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
        _ => return None,
    };
    Some(glyph)
}

/// Width in pixels of `text` when drawn, excluding the trailing spacing column
pub fn text_width(text: &str) -> u32 {
    match text.chars().count() as u32 {
        0 => 0,
        n => n * ADVANCE - 1,
    }
}

/// Draw `text` with its top-left corner at (x, y).
///
/// Pixels that fall outside the image are clipped. Characters without a
/// glyph still advance the cursor.
pub fn draw_text(img: &mut RgbaImage, x: u32, y: u32, text: &str, color: Rgba<u8>) {
    let (width, height) = img.dimensions();

    for (index, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else {
            continue;
        };
        let origin_x = x.saturating_add(index as u32 * ADVANCE);

        for (row, bits) in rows.iter().enumerate() {
            let py = y.saturating_add(row as u32);
            if py >= height {
                break;
            }
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                let px = origin_x.saturating_add(col);
                if px < width {
                    img.put_pixel(px, py, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    #[test]
    fn test_glyph_lookup() {
        assert!(glyph('S').is_some());
        assert_eq!(glyph('m'), glyph('M'));
        assert!(glyph('~').is_none());
        assert!(glyph('é').is_none());
    }

    #[test]
    fn test_glyph_rows_fit_cell() {
        for c in ('A'..='Z').chain('0'..='9') {
            let rows = glyph(c).unwrap();
            assert!(rows.iter().all(|row| *row < 1 << GLYPH_WIDTH), "{c}");
            assert!(rows.iter().any(|row| *row != 0), "{c} is blank");
        }
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("S"), 5);
        assert_eq!(text_width("SMS"), 17);
    }

    #[test]
    fn test_draw_text_pixels() {
        let mut img = RgbaImage::from_pixel(20, 10, WHITE);
        draw_text(&mut img, 2, 1, "SM", BLACK);

        // 'S' top row is 01111: the first column stays clear
        assert_eq!(*img.get_pixel(2, 1), WHITE);
        assert_eq!(*img.get_pixel(3, 1), BLACK);
        assert_eq!(*img.get_pixel(6, 1), BLACK);

        // spacing column between glyphs
        for y in 0..10 {
            assert_eq!(*img.get_pixel(7, y), WHITE);
        }

        // 'M' starts at x = 2 + 6 with both outer columns set
        assert_eq!(*img.get_pixel(8, 1), BLACK);
        assert_eq!(*img.get_pixel(12, 1), BLACK);
        assert_eq!(*img.get_pixel(10, 1), WHITE);

        // nothing above the anchor or below the glyph cell
        for x in 0..20 {
            assert_eq!(*img.get_pixel(x, 0), WHITE);
            assert_eq!(*img.get_pixel(x, 8), WHITE);
        }
    }

    #[test]
    fn test_draw_text_clips_at_edges() {
        let mut img = RgbaImage::from_pixel(8, 4, WHITE);
        draw_text(&mut img, 4, 1, "MM", BLACK);

        // first column of the first 'M' is visible, the rest is clipped
        assert_eq!(*img.get_pixel(4, 1), BLACK);
        assert_eq!(*img.get_pixel(4, 3), BLACK);

        draw_text(&mut img, 100, 100, "SMS", BLACK);
    }

    #[test]
    fn test_unknown_characters_advance() {
        let mut img = RgbaImage::from_pixel(20, 8, WHITE);
        draw_text(&mut img, 0, 0, "~I", BLACK);

        assert!((0..ADVANCE).all(|x| (0..8).all(|y| *img.get_pixel(x, y) == WHITE)));
        // 'I' middle column at 6 + 2
        assert_eq!(*img.get_pixel(8, 3), BLACK);
    }
}
