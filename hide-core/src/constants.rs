//! Constants describing the pixel-group layout

/// Channels read and rewritten per pixel (R, G, B). Alpha is never touched.
pub const CHANNELS_PER_PIXEL: usize = 3;

/// Consecutive pixels forming one encoding group
pub const PIXELS_PER_GROUP: usize = 3;

/// Channel values in one group
pub const GROUP_CHANNELS: usize = CHANNELS_PER_PIXEL * PIXELS_PER_GROUP;

/// Bits carried per payload character
pub const BITS_PER_CHAR: usize = 8;

/// Data slots in a group, one per payload bit
pub const DATA_SLOTS: usize = BITS_PER_CHAR;

/// Position of the terminator slot within the flattened group
/// (third channel of the third pixel)
pub const TERMINATOR_SLOT: usize = GROUP_CHANNELS - 1;

/// Highest code point a payload character may have
pub const MAX_CODE_POINT: u32 = u8::MAX as u32;

/// Number of whole groups that fit into `pixel_count` pixels
pub const fn group_capacity(pixel_count: usize) -> usize {
    pixel_count / PIXELS_PER_GROUP
}
