use std::path::{Path, PathBuf};

use log::debug;

use crate::media::{load_image, save_png};
use crate::{embed, max_message_length, SteganoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl HideApi {
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    /// The carrier image, it is only read
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Where the image with the hidden message goes, always written as PNG
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<(), SteganoError> {
        let Some(message) = self.message else {
            return Err(SteganoError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };
        if message.is_empty() {
            return Err(SteganoError::EmptyMessage);
        }

        let carrier = load_image(&image)?;
        let (width, height) = carrier.dimensions();
        let max_chars = max_message_length(width, height);
        debug!("Carrier {image:?} takes up to {max_chars} characters");
        if message.len() as i64 > max_chars {
            return Err(SteganoError::MessageTooLarge { max_chars });
        }

        save_png(&embed(&carrier, &message)?, &output)
    }
}
