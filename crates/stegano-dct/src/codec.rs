//! The message codec: framing, capacity math and the embed / extract loops.
//!
//! A message is framed as the UTF-8 bytes of `message + DELIMITER`, most
//! significant bit first. Bit `i` goes into the sign of coefficient
//! [`EMBED_SLOT`](crate::sequence::EMBED_SLOT) of the `i`-th block in raster order:
//!
//! - `1` forces the coefficient to `max(ALPHA, |c|)`
//! - `0` forces the coefficient to `-max(ALPHA, |c|)`
//!
//! The decoder does not know the message length. It reads one bit per block
//! and stops at the first occurrence of the delimiter.
//!
//! [`ALPHA`], [`EMBED_SLOT`](crate::sequence::EMBED_SLOT), [`DELIMITER`] and
//! [`BLOCK_SIZE`](crate::block::BLOCK_SIZE) are the wire format. Changing any
//! of them breaks every image embedded before.

use image::RgbImage;
use log::{debug, info, warn};

use crate::block::{copy_block, copy_remaining_pixels, read_block, write_block};
use crate::error::{Result, SteganoError};
use crate::sequence::{capacity_for, positions, EmbedPosition};
use crate::transform;

/// Marks the end of the message.
pub const DELIMITER: &str = "###END_OF_MESSAGE###";

/// Minimal magnitude of an embedding coefficient, in luminance units.
pub const ALPHA: f64 = 50.0;

/// Upper bound of bits the decoder reads before giving up.
pub const MAX_PROBE_BITS: usize = 10_000;

/// Frames `message` into the bits that get embedded, MSB first per byte.
pub fn frame_message(message: &str) -> Vec<bool> {
    message
        .bytes()
        .chain(DELIMITER.bytes())
        .flat_map(|byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1))
        .collect()
}

/// Longest message, in UTF-8 bytes, an image of this size can carry.
///
/// Negative if the image cannot even hold the delimiter.
pub fn max_message_length(width: u32, height: u32) -> i64 {
    (capacity_for(width, height) / 8) as i64 - DELIMITER.len() as i64
}

/// Hides `message` in a copy of `image`, the source stays untouched.
///
/// Fails with [`SteganoError::EmptyMessage`] for an empty message and with
/// [`SteganoError::MessageTooLarge`] when the framed message has more bits than
/// the image has blocks. No pixel is written in either case.
pub fn embed(image: &RgbImage, message: &str) -> Result<RgbImage> {
    if message.is_empty() {
        return Err(SteganoError::EmptyMessage);
    }

    let bits = frame_message(message);
    let (width, height) = image.dimensions();
    let capacity = capacity_for(width, height);

    debug!(
        "Embedding {} bytes + delimiter = {} bits into image {width}x{height} with {capacity} blocks",
        message.len(),
        bits.len(),
    );

    if bits.len() > capacity {
        return Err(SteganoError::MessageTooLarge {
            max_chars: max_message_length(width, height),
        });
    }

    let mut target = RgbImage::new(width, height);
    let mut positions = positions(width, height);
    for (bit, position) in bits.iter().zip(positions.by_ref()) {
        embed_bit(image, &mut target, position, *bit);
    }
    for position in positions {
        copy_block(image, &mut target, position.block_x, position.block_y);
    }
    copy_remaining_pixels(image, &mut target);

    info!("Embedded message of {} bits into image", bits.len());

    Ok(target)
}

fn embed_bit(source: &RgbImage, target: &mut RgbImage, position: EmbedPosition, bit: bool) {
    let EmbedPosition {
        block_x,
        block_y,
        coeff_row,
        coeff_col,
    } = position;

    let mut coefficients = transform::forward(&read_block(source, block_x, block_y));
    let coefficient = &mut coefficients[coeff_row][coeff_col];
    if !coefficient.is_finite() {
        warn!("Non finite coefficient in block ({block_x}, {block_y}), leaving it untouched");
        copy_block(source, target, block_x, block_y);
        return;
    }

    let magnitude = coefficient.abs().max(ALPHA);
    *coefficient = if bit { magnitude } else { -magnitude };

    write_block(&transform::inverse(&coefficients), target, block_x, block_y);
}

fn extract_bit(image: &RgbImage, position: EmbedPosition) -> bool {
    let coefficients = transform::forward(&read_block(image, position.block_x, position.block_y));
    let coefficient = coefficients[position.coeff_row][position.coeff_col];

    coefficient.is_finite() && coefficient >= 0.0
}

/// Recovers a message hidden by [`embed`].
///
/// Reads at most [`MAX_PROBE_BITS`] bits. Fails with
/// [`SteganoError::NoHiddenMessage`] if no delimiter shows up in that range.
/// Bytes before the delimiter that are not valid UTF-8 are replaced by `U+FFFD`.
pub fn extract(image: &RgbImage) -> Result<String> {
    let (width, height) = image.dimensions();
    let probe = capacity_for(width, height).min(MAX_PROBE_BITS);
    let delimiter = DELIMITER.as_bytes();

    debug!("Extracting from image {width}x{height}, probing {probe} blocks");

    let mut bytes = Vec::with_capacity(probe / 8);
    let mut current = 0u8;
    let mut bits_read = 0;
    for position in positions(width, height).take(probe) {
        current = (current << 1) | extract_bit(image, position) as u8;
        bits_read += 1;
        if bits_read % 8 != 0 {
            continue;
        }

        bytes.push(current);
        current = 0;
        // checked after every byte, so the first match is the first occurrence
        if bytes.ends_with(delimiter) {
            let message = String::from_utf8_lossy(&bytes[..bytes.len() - delimiter.len()]);
            info!("Extracted message of {} bytes after {bits_read} bits", message.len());
            return Ok(message.into_owned());
        }
    }

    warn!("No message delimiter found after extracting {bits_read} bits");
    debug!(
        "Partial text extracted: '{}'",
        bytes
            .iter()
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '?' })
            .collect::<String>()
    );

    Err(SteganoError::NoHiddenMessage { bits_read })
}
