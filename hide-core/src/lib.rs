//! # Hide Core
//!
//! Parity-based least-significant-bit steganography for hiding text in raster images.
//!
//! Every payload character occupies one group of three consecutive pixels. The first
//! eight channel values of the group carry the character's bits as even/odd parity and
//! the ninth channel flags whether another group follows.
//!
//! ## Modules
//!
//! - `constants`: Group layout constants
//! - `types`: Channel samples, pixels and pixel groups
//! - `payload`: Text to 8-bit binary payload conversion
//! - `grid`: Row-major pixel sequence and traversal cursor
//! - `encoder`: Bit embedding
//! - `decoder`: Bit extraction
//! - `image_io`: Adapter over the `image` crate (requires `std`)

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod grid;
#[cfg(feature = "std")]
pub mod image_io;
pub mod payload;
pub mod types;

// Re-export commonly used types
pub use error::StegoError;
pub use grid::PixelGrid;
#[cfg(feature = "std")]
pub use image_io::{decode_file, encode_file, StegoImage};
pub use payload::Payload;
pub use types::{Channel, Pixel, PixelGroup};

/// Result type alias for steganography operations
pub type Result<T> = core::result::Result<T, StegoError>;
