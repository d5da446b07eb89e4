use std::path::{Path, PathBuf};

use log::debug;

use crate::media::{Media, Persist};
use crate::{DctCodecOptions, SteganoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Debug)]
enum Secret {
    Data(Vec<u8>),
    File(PathBuf),
}

#[derive(Default, Debug)]
pub struct HideApi {
    secret: Option<Secret>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: DctCodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: DctCodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Shortcut for options with the given epsilon margin
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.options.epsilon = epsilon;
        self
    }

    /// Hide the UTF-8 bytes of `message`, replaces any secret set before
    pub fn with_message(mut self, message: &str) -> Self {
        self.secret = Some(Secret::Data(message.as_bytes().to_vec()));
        self
    }

    /// Hide raw bytes, replaces any secret set before
    pub fn with_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.secret = Some(Secret::Data(data.into()));
        self
    }

    /// Hide the content of a file, replaces any secret set before
    pub fn with_file<A: AsRef<Path>>(mut self, data_file: A) -> Self {
        self.secret = Some(Secret::File(data_file.as_ref().to_path_buf()));
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<(), SteganoError> {
        let Some(secret) = self.secret else {
            return Err(SteganoError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };

        let data = match secret {
            Secret::Data(data) => data,
            Secret::File(file) => {
                std::fs::read(&file).map_err(|source| SteganoError::ReadError { source })?
            }
        };
        debug!("Hiding {} bytes in {image:?}", data.len());

        Media::from_file(&image)?
            .hide_data(&data, &self.options)?
            .save_as(&output)
    }
}
