//! Conversion between 8×8 pixel neighbourhoods and luminance blocks.

use image::{Rgb, RgbImage};

/// Edge length of a block, in pixels.
pub const BLOCK_SIZE: usize = 8;

/// Luminance samples of one block, centred around zero. Indexed `[y][x]`.
pub type Block = [[f64; BLOCK_SIZE]; BLOCK_SIZE];

#[inline]
fn luminance(pixel: &Rgb<u8>) -> f64 {
    let [r, g, b] = pixel.0;
    0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64
}

/// Samples the 8×8 neighbourhood with its top left corner at (`x`, `y`).
///
/// Coordinates past the right or bottom edge are clamped to the last valid
/// column or row. An image without pixels yields an all zero block.
pub fn read_block(image: &RgbImage, x: u32, y: u32) -> Block {
    let (width, height) = image.dimensions();
    let mut block = [[0.0f64; BLOCK_SIZE]; BLOCK_SIZE];
    if width == 0 || height == 0 {
        return block;
    }
    for (dy, row) in block.iter_mut().enumerate() {
        let py = (y + dy as u32).min(height - 1);
        for (dx, v) in row.iter_mut().enumerate() {
            let px = (x + dx as u32).min(width - 1);
            *v = luminance(image.get_pixel(px, py)) - 128.0;
        }
    }
    block
}

/// Writes a luminance block back as gray pixels.
///
/// Every sample becomes `clamp(round(v + 128), 0, 255)` on all three channels.
/// Samples that fall outside of `image` are dropped.
pub fn write_block(block: &Block, image: &mut RgbImage, x: u32, y: u32) {
    let (width, height) = image.dimensions();
    for (dy, row) in block.iter().enumerate() {
        let py = y + dy as u32;
        if py >= height {
            break;
        }
        for (dx, v) in row.iter().enumerate() {
            let px = x + dx as u32;
            if px >= width {
                break;
            }
            let gray = (v + 128.0).round().clamp(0.0, 255.0) as u8;
            image.put_pixel(px, py, Rgb([gray, gray, gray]));
        }
    }
}

/// Copies the 8×8 neighbourhood at (`x`, `y`) unchanged from `source` to `target`.
pub fn copy_block(source: &RgbImage, target: &mut RgbImage, x: u32, y: u32) {
    let (width, height) = source.dimensions();
    for py in y..(y + BLOCK_SIZE as u32).min(height) {
        for px in x..(x + BLOCK_SIZE as u32).min(width) {
            target.put_pixel(px, py, *source.get_pixel(px, py));
        }
    }
}

/// Copies all pixels right of the last full block column and below the last
/// full block row.
pub fn copy_remaining_pixels(source: &RgbImage, target: &mut RgbImage) {
    let (width, height) = source.dimensions();
    let size = BLOCK_SIZE as u32;
    let covered_width = width / size * size;
    let covered_height = height / size * size;

    for (px, py, pixel) in source.enumerate_pixels() {
        if px >= covered_width || py >= covered_height {
            target.put_pixel(px, py, *pixel);
        }
    }
}
