use std::fs::{self, File};
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use image::{ImageFormat, RgbImage};
use log::error;

use crate::error::{Result, SteganoError};

/// Opens any image the `image` crate can decode and converts it to 8 bit RGB.
pub fn load_image(file: &Path) -> Result<RgbImage> {
    image::open(file)
        .map(|i| i.to_rgb8())
        .map_err(|e| {
            error!("Error opening image {file:?}: {e}");
            SteganoError::InvalidImageMedia
        })
}

/// Saves `image` as PNG, regardless of the extension of `file`.
///
/// Missing parent folders are created.
pub fn save_png(image: &RgbImage, file: &Path) -> Result<()> {
    if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| SteganoError::WriteError { source })?;
    }
    let f = File::create(file).map_err(|e| {
        error!("Error creating file {file:?}: {e}");
        SteganoError::WriteError { source: e }
    })?;
    let mut writer = BufWriter::new(f);
    save_png_to_writer(image, &mut writer)?;
    writer
        .flush()
        .map_err(|source| SteganoError::WriteError { source })
}

pub fn save_png_to_writer<W: Write + Seek>(image: &RgbImage, mut writer: W) -> Result<()> {
    image.write_to(&mut writer, ImageFormat::Png).map_err(|e| {
        error!("Error saving image: {e}");
        SteganoError::ImageEncodingError
    })
}
