//! # Stegano DCT
//!
//! Hides text messages in the frequency domain of images. Every full 8×8 block
//! of the carrier carries one bit in the sign of one DCT coefficient, which
//! survives saving the image as PNG.
//!
//! The codec itself works on in-memory [`RgbImage`](image::RgbImage)s only:
//! - [`embed`] hides a message in a copy of an image
//! - [`extract`] recovers the message
//! - [`max_message_length`] tells how much text fits into an image of a given size
//!
//! The [`api`] module wraps these with image file handling.
//!
//! # Usage Examples
//!
//! ## Hide and unveil a message in memory
//!
//! ```rust
//! use image::{ImageBuffer, Rgb, RgbImage};
//!
//! let carrier: RgbImage = ImageBuffer::from_pixel(256, 256, Rgb([128, 128, 128]));
//! assert_eq!(stegano_dct::max_message_length(256, 256), 108);
//!
//! let secret = stegano_dct::embed(&carrier, "HI").expect("Failed to hide message");
//! let message = stegano_dct::extract(&secret).expect("Failed to unveil message");
//! assert_eq!(message, "HI");
//! ```
//!
//! ## Hide a message inside an image file
//!
//! ```rust
//! use image::{ImageBuffer, Rgb, RgbImage};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! let img: RgbImage = ImageBuffer::from_pixel(320, 240, Rgb([30, 90, 160]));
//! img.save(&carrier).expect("Failed to write carrier image");
//!
//! stegano_dct::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-a-message.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = stegano_dct::api::unveil::prepare()
//!     .from_secret_file(temp_dir.path().join("image-with-a-message.png"))
//!     .execute()
//!     .expect("Failed to unveil message from image");
//! assert_eq!(message, "Hello, World!");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod block;
pub mod codec;
pub mod error;
pub mod media;
pub mod sequence;
pub mod transform;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::codec::{
    embed, extract, frame_message, max_message_length, ALPHA, DELIMITER, MAX_PROBE_BITS,
};
pub use crate::error::{Result, SteganoError};
pub use crate::sequence::{capacity_for, generate_sequence, EmbedPosition, EMBED_SLOT};
pub use crate::transform::CoefficientMatrix;
