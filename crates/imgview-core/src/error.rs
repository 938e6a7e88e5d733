use thiserror::Error;

/// Why a decode did not produce an image.
///
/// Decode failures are never fatal: the caller keeps whatever image it had.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("cannot read image: {0}")]
    IoOrFormat(String),

    #[error("unsupported channel layout: {0}")]
    UnsupportedChannelLayout(String),

    #[error("no usable image on the clipboard")]
    NoClipboardImage,
}

impl From<std::io::Error> for DecodeError {
    fn from(e: std::io::Error) -> Self {
        DecodeError::IoOrFormat(e.to_string())
    }
}

impl From<image::ImageError> for DecodeError {
    fn from(e: image::ImageError) -> Self {
        DecodeError::IoOrFormat(e.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ImgViewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ImgViewError>;
