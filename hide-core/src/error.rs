//! Error types for steganography operations

use alloc::string::String;

/// Errors that can occur while hiding or recovering a payload
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq)]
pub enum StegoError {
    /// Payload text is empty
    #[cfg_attr(feature = "std", error("Payload is empty"))]
    EmptyPayload,

    /// Payload character cannot be represented in a single byte
    #[cfg_attr(
        feature = "std",
        error("Character {ch:?} at position {position} is outside the single-byte range")
    )]
    UnsupportedCharacter {
        /// The offending character.
        ch: char,
        /// Its index within the payload, counted in characters.
        position: usize,
    },

    /// Pixel sequence ran out while embedding
    #[cfg_attr(
        feature = "std",
        error("Image too small: ran out of pixels at group {group} ({available_pixels} pixels available)")
    )]
    ImageTooSmall {
        /// Index of the group that could not be filled.
        group: usize,
        /// Total pixels in the image.
        available_pixels: usize,
    },

    /// Pixel sequence ran out before a terminator was seen
    #[cfg_attr(
        feature = "std",
        error("Corrupt data: no terminator found after {groups_read} groups")
    )]
    TruncatedStream {
        /// Complete groups read before the sequence was exhausted.
        groups_read: usize,
    },

    /// Pixel count does not match the grid dimensions
    #[cfg_attr(
        feature = "std",
        error("Grid dimensions need {expected} pixels, got {actual}")
    )]
    DimensionMismatch {
        /// width × height
        expected: usize,
        /// Pixels supplied.
        actual: usize,
    },

    /// Image colour type has no usable RGB integer channels
    #[cfg_attr(feature = "std", error("Unsupported colour type: {0}"))]
    UnsupportedColor(String),

    /// Destination file extension does not name a known image format
    #[cfg_attr(feature = "std", error("Unsupported image format: {0}"))]
    UnsupportedFormat(String),

    /// Error reported by the image codec
    #[cfg_attr(feature = "std", error("Image error: {0}"))]
    Image(String),

    /// IO error during read/write
    #[cfg_attr(feature = "std", error("IO error: {0}"))]
    Io(String),
}

#[cfg(feature = "std")]
impl From<std::io::Error> for StegoError {
    fn from(err: std::io::Error) -> Self {
        StegoError::Io(err.to_string())
    }
}

#[cfg(feature = "std")]
impl From<image::ImageError> for StegoError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => StegoError::Io(e.to_string()),
            other => StegoError::Image(other.to_string()),
        }
    }
}
