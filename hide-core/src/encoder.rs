//! Payload embedding

use crate::constants::PIXELS_PER_GROUP;
use crate::error::StegoError;
use crate::grid::{PixelCursor, PixelGrid};
use crate::payload::Payload;
use crate::types::{Channel, PixelGroup};

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Summary of one embedding pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedReport {
    /// Pixel groups written, one per payload character
    pub groups: usize,

    /// Pixels covered by those groups (`3 * groups`)
    pub pixels_written: usize,

    /// Channel values whose parity had to be flipped
    pub channels_changed: usize,
}

/// Embed `payload` into `grid` in place
///
/// For character `i` of `N`, the group starting at pixel `3 * i` gets:
/// 1. Data slot `j` set to the parity of bit `j` (most significant first)
/// 2. The terminator slot made odd when `i == N - 1`, even otherwise
///
/// Pixels from index `3 * N` onwards are never touched. Running out of pixels
/// is detected when the cursor cannot produce the next group, and leaves the
/// groups already processed written to `grid`; use [`encode`] to work on a copy.
pub fn embed<C: Channel>(
    grid: &mut PixelGrid<C>,
    payload: &Payload,
) -> Result<EmbedReport, StegoError> {
    let bytes = payload.as_bytes();
    let last = bytes.len() - 1;
    let mut cursor = PixelCursor::new();
    let mut channels_changed = 0;

    #[cfg(feature = "logging")]
    debug!(
        "Embedding {} characters into {}x{} grid",
        bytes.len(),
        grid.width(),
        grid.height()
    );

    for (i, &byte) in bytes.iter().enumerate() {
        let Some((start, original)) = cursor.next_group(grid) else {
            #[cfg(feature = "logging")]
            warn!("Ran out of pixels at group {} of {}", i, bytes.len());

            return Err(StegoError::ImageTooSmall {
                group: i,
                available_pixels: grid.len(),
            });
        };

        let mut group = original;
        group.embed_byte(byte);
        group.mark_last(i == last);

        channels_changed += changed_slots(&original, &group);
        grid.put_group(start, group);
    }

    let report = EmbedReport {
        groups: bytes.len(),
        pixels_written: bytes.len() * PIXELS_PER_GROUP,
        channels_changed,
    };

    #[cfg(feature = "logging")]
    debug!(
        "Embedded {} groups, {} channel values changed",
        report.groups, report.channels_changed
    );

    Ok(report)
}

/// Embed `payload` into a copy of `grid`, leaving the input untouched
pub fn encode<C: Channel>(
    grid: &PixelGrid<C>,
    payload: &Payload,
) -> Result<(PixelGrid<C>, EmbedReport), StegoError> {
    let mut output = grid.clone();
    let report = embed(&mut output, payload)?;
    Ok((output, report))
}

/// Embed text, validating it into a [`Payload`] first
pub fn encode_text<C: Channel>(
    grid: &PixelGrid<C>,
    text: &str,
) -> Result<(PixelGrid<C>, EmbedReport), StegoError> {
    let payload = Payload::from_text(text)?;
    encode(grid, &payload)
}

fn changed_slots<C: Channel>(before: &PixelGroup<C>, after: &PixelGroup<C>) -> usize {
    let data = before
        .data()
        .iter()
        .zip(after.data())
        .filter(|(a, b)| a != b)
        .count();
    data + usize::from(before.terminator() != after.terminator())
}
