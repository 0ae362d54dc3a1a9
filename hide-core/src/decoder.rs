//! Payload extraction

use crate::error::StegoError;
use crate::grid::{PixelCursor, PixelGrid};
use crate::types::Channel;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Result of scanning a grid without requiring a terminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    /// Complete groups read
    pub groups_scanned: usize,

    /// Whether a group with an odd terminator slot was reached
    pub terminated: bool,

    /// Bytes decoded from the scanned groups
    pub bytes: Vec<u8>,
}

impl Inspection {
    /// Decoded bytes as text, one character per byte
    pub fn text(&self) -> String {
        bytes_to_text(&self.bytes)
    }
}

/// Scan groups until a terminator or the end of the grid
///
/// Never fails: an image without a payload simply yields `terminated == false`
/// with one byte per whole group.
pub fn inspect<C: Channel>(grid: &PixelGrid<C>) -> Inspection {
    let mut cursor = PixelCursor::new();
    let mut bytes = Vec::new();

    while let Some((_, group)) = cursor.next_group(grid) {
        bytes.push(group.read_byte());

        if group.is_last() {
            return Inspection {
                groups_scanned: bytes.len(),
                terminated: true,
                bytes,
            };
        }
    }

    Inspection {
        groups_scanned: bytes.len(),
        terminated: false,
        bytes,
    }
}

/// Extract the raw payload bytes
///
/// Reads one byte per group in traversal order and stops after the first
/// group whose terminator slot is odd. Exhausting the grid first means the
/// image carries no terminated payload and yields
/// [`StegoError::TruncatedStream`].
pub fn extract_bytes<C: Channel>(grid: &PixelGrid<C>) -> Result<Vec<u8>, StegoError> {
    #[cfg(feature = "logging")]
    debug!(
        "Extracting payload from {}x{} grid",
        grid.width(),
        grid.height()
    );

    let inspection = inspect(grid);

    if !inspection.terminated {
        #[cfg(feature = "logging")]
        warn!(
            "No terminator found after {} groups",
            inspection.groups_scanned
        );

        return Err(StegoError::TruncatedStream {
            groups_read: inspection.groups_scanned,
        });
    }

    #[cfg(feature = "logging")]
    debug!("Extracted {} bytes", inspection.bytes.len());

    Ok(inspection.bytes)
}

/// Extract the payload as text
pub fn extract<C: Channel>(grid: &PixelGrid<C>) -> Result<String, StegoError> {
    extract_bytes(grid).map(|bytes| bytes_to_text(&bytes))
}

/// Map each byte to the character with the same code point
pub fn bytes_to_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
