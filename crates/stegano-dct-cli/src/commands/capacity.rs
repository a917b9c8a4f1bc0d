use std::path::PathBuf;

use clap::Args;
use log::warn;

use crate::CliResult;

/// Prints how many characters fit into an image
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Carrier image to inspect
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let max_chars = stegano_dct::api::capacity::prepare()
            .with_image(&self.media)
            .execute()?;

        if max_chars <= 0 {
            warn!("{:?} is too small to carry any message", self.media);
        }
        println!("{}", max_chars.max(0));

        Ok(())
    }
}
