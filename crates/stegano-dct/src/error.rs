use thiserror::Error;

/// Result type alias for all codec and media operations.
pub type Result<T> = std::result::Result<T, SteganoError>;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents an attempt to hide a message without any text
    #[error("Message cannot be empty")]
    EmptyMessage,

    /// Represents a message that does not fit into the carrier image.
    /// `max_chars` is the longest message (in UTF-8 bytes) the image can take,
    /// it is negative when the image cannot carry even the delimiter.
    #[error("Message too long for this image. Maximum capacity: {max_chars} characters")]
    MessageTooLarge { max_chars: i64 },

    /// Represents an unveil that did not find the message delimiter within the probe bound
    #[error("No hidden message found in the image (read {bits_read} bits)")]
    NoHiddenMessage { bits_read: usize },

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
