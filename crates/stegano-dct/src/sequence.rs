//! Embed positions, a pure function of the image dimensions.
//!
//! Encoder and decoder regenerate the same sequence independently, nothing but
//! width and height is shared between them.

use crate::block::BLOCK_SIZE;

/// The coefficient (row, column) every block carries its bit in.
pub const EMBED_SLOT: (usize, usize) = (2, 1);

/// One coefficient slot that carries exactly one bit.
///
/// `block_x` and `block_y` are the pixel coordinates of the block's top left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmbedPosition {
    pub block_x: u32,
    pub block_y: u32,
    pub coeff_row: usize,
    pub coeff_col: usize,
}

/// Number of bits an image of the given dimensions can carry.
pub fn capacity_for(width: u32, height: u32) -> usize {
    let size = BLOCK_SIZE as u32;
    (width / size) as usize * (height / size) as usize
}

/// Restartable iterator over all embed positions in raster order of the blocks.
#[derive(Debug, Clone)]
pub struct EmbedPositions {
    blocks_wide: u32,
    i: usize,
    i_max: usize,
}

impl EmbedPositions {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            blocks_wide: width / BLOCK_SIZE as u32,
            i: 0,
            i_max: capacity_for(width, height),
        }
    }
}

impl Iterator for EmbedPositions {
    type Item = EmbedPosition;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i == self.i_max {
            return None;
        }
        let column = (self.i % self.blocks_wide as usize) as u32;
        let row = (self.i / self.blocks_wide as usize) as u32;
        self.i += 1;

        Some(EmbedPosition {
            block_x: column * BLOCK_SIZE as u32,
            block_y: row * BLOCK_SIZE as u32,
            coeff_row: EMBED_SLOT.0,
            coeff_col: EMBED_SLOT.1,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.i_max - self.i;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EmbedPositions {}

/// Lazy variant of [`generate_sequence`].
pub fn positions(width: u32, height: u32) -> EmbedPositions {
    EmbedPositions::new(width, height)
}

/// The first `min(count, capacity)` embed positions for the given dimensions.
pub fn generate_sequence(width: u32, height: u32, count: usize) -> Vec<EmbedPosition> {
    positions(width, height).take(count).collect()
}
