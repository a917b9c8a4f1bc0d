use std::path::{Path, PathBuf};

use crate::media::load_image;
use crate::{max_message_length, SteganoError};

pub fn prepare() -> CapacityApi {
    CapacityApi::default()
}

#[derive(Default, Debug)]
pub struct CapacityApi {
    image: Option<PathBuf>,
}

impl CapacityApi {
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Returns the longest message in characters the image can carry.
    /// Negative if the image is too small to carry any message.
    pub fn execute(self) -> Result<i64, SteganoError> {
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let (width, height) = load_image(&image)?.dimensions();

        Ok(max_message_length(width, height))
    }
}
