use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::media::Media;
use crate::{DctCodecOptions, SteganoError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
    options: DctCodecOptions,
}

impl UnveilApi {
    /// Use the given codec options, they must match the ones used for hiding
    pub fn with_options(mut self, options: DctCodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Shortcut for options with the given epsilon margin
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.options.epsilon = epsilon;
        self
    }

    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the raw file where all data will be saved to
    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and write the payload to the raw file
    pub fn execute(mut self) -> Result<(), SteganoError> {
        let Some(destination_file) = self.destination_file.take() else {
            return Err(SteganoError::TargetNotSet);
        };
        let data = self.execute_into_vec()?;

        let mut destination_file =
            File::create(destination_file).map_err(|source| SteganoError::WriteError { source })?;
        destination_file
            .write_all(data.as_slice())
            .map_err(|source| SteganoError::WriteError { source })
    }

    /// Execute the unveil process and return the payload
    pub fn execute_into_vec(self) -> Result<Vec<u8>, SteganoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };

        Media::from_file(&secret_media)?.unveil_data(&self.options)
    }
}
