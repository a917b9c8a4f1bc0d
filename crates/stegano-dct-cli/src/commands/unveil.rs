use std::fs;
use std::path::PathBuf;

use clap::Args;
use stegano_dct::SteganoError;

use crate::CliResult;

/// Unveils a text message from an image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains the secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub media: PathBuf,

    /// Message will be stored in that file instead of printed
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let message = stegano_dct::api::unveil::prepare()
            .from_secret_file(&self.media)
            .execute()?;

        match self.output_file {
            Some(file) => fs::write(file, message.as_bytes())
                .map_err(|source| SteganoError::WriteError { source }),
            None => {
                println!("{message}");
                Ok(())
            }
        }
    }
}
