use std::path::PathBuf;

use clap::Args;
use log::info;

use crate::CliResult;

/// Hides a text message in an image, the result is always a PNG image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image, any common format, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        stegano_dct::api::hide::prepare()
            .with_image(&self.media)
            .with_output(&self.write_to_file)
            .with_message(&self.message)
            .execute()?;

        info!("Message hidden in {:?}", self.write_to_file);
        Ok(())
    }
}
