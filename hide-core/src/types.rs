//! Channel samples, pixels and the nine-slot pixel group

use crate::constants::{CHANNELS_PER_PIXEL, DATA_SLOTS, PIXELS_PER_GROUP};
use crate::payload::byte_bits;
use core::fmt::Debug;

/// An unsigned channel sample whose parity carries one bit
///
/// Adjustments move a value by at most one. Zero is the only value that is
/// raised instead of lowered when odd parity is required.
pub trait Channel: Copy + Debug + PartialEq + Eq {
    /// Check if the sample is odd
    fn is_odd(self) -> bool;

    /// Return the sample with even parity
    fn to_even(self) -> Self;

    /// Return the sample with odd parity
    fn to_odd(self) -> Self;

    /// Return the sample with the requested parity
    fn with_parity(self, odd: bool) -> Self {
        if odd {
            self.to_odd()
        } else {
            self.to_even()
        }
    }
}

macro_rules! impl_channel {
    ($($ty:ty),*) => {
        $(
            impl Channel for $ty {
                #[inline]
                fn is_odd(self) -> bool {
                    self & 1 == 1
                }

                #[inline]
                fn to_even(self) -> Self {
                    if self.is_odd() {
                        self - 1
                    } else {
                        self
                    }
                }

                #[inline]
                fn to_odd(self) -> Self {
                    match self {
                        0 => 1,
                        v if v.is_odd() => v,
                        v => v - 1,
                    }
                }
            }
        )*
    };
}

impl_channel!(u8, u16);

/// The first three channels of an image pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel<C> {
    /// Red, green and blue samples
    pub channels: [C; CHANNELS_PER_PIXEL],
}

impl<C: Channel> Pixel<C> {
    /// Create a pixel from its three samples
    pub const fn new(r: C, g: C, b: C) -> Self {
        Self {
            channels: [r, g, b],
        }
    }
}

impl<C: Channel> From<[C; CHANNELS_PER_PIXEL]> for Pixel<C> {
    fn from(channels: [C; CHANNELS_PER_PIXEL]) -> Self {
        Self { channels }
    }
}

/// Three consecutive pixels viewed as one encoding unit
///
/// The nine channel values are split into eight data slots, one per payload
/// bit (most significant first), and the terminator slot, which is the third
/// channel of the third pixel. An odd terminator marks the last group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelGroup<C> {
    data: [C; DATA_SLOTS],
    terminator: C,
}

impl<C: Channel> PixelGroup<C> {
    /// Flatten three pixels into a group
    pub fn from_pixels(pixels: [Pixel<C>; PIXELS_PER_GROUP]) -> Self {
        let [p0, p1, p2] = pixels;
        let [r0, g0, b0] = p0.channels;
        let [r1, g1, b1] = p1.channels;
        let [r2, g2, b2] = p2.channels;

        Self {
            data: [r0, g0, b0, r1, g1, b1, r2, g2],
            terminator: b2,
        }
    }

    /// Split the group back into three pixels in traversal order
    pub fn into_pixels(self) -> [Pixel<C>; PIXELS_PER_GROUP] {
        let [d0, d1, d2, d3, d4, d5, d6, d7] = self.data;
        [
            Pixel::new(d0, d1, d2),
            Pixel::new(d3, d4, d5),
            Pixel::new(d6, d7, self.terminator),
        ]
    }

    /// Data slot values
    pub fn data(&self) -> &[C; DATA_SLOTS] {
        &self.data
    }

    /// Terminator slot value
    pub fn terminator(&self) -> C {
        self.terminator
    }

    /// Store `byte` in the data slots, most significant bit first
    pub fn embed_byte(&mut self, byte: u8) {
        for (slot, bit) in self.data.iter_mut().zip(byte_bits(byte)) {
            *slot = slot.with_parity(bit);
        }
    }

    /// Read the byte carried by the data slots
    pub fn read_byte(&self) -> u8 {
        self.data
            .iter()
            .fold(0u8, |acc, slot| (acc << 1) | u8::from(slot.is_odd()))
    }

    /// Set the terminator flag: odd for the last group, even otherwise
    pub fn mark_last(&mut self, last: bool) {
        self.terminator = self.terminator.with_parity(last);
    }

    /// Check if this group terminates the payload
    pub fn is_last(&self) -> bool {
        self.terminator.is_odd()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(values: [u8; 9]) -> PixelGroup<u8> {
        PixelGroup::from_pixels([
            Pixel::new(values[0], values[1], values[2]),
            Pixel::new(values[3], values[4], values[5]),
            Pixel::new(values[6], values[7], values[8]),
        ])
    }

    #[test]
    fn test_parity_adjustments() {
        assert_eq!(7u8.to_even(), 6);
        assert_eq!(6u8.to_even(), 6);
        assert_eq!(6u8.to_odd(), 5);
        assert_eq!(7u8.to_odd(), 7);
        assert_eq!(255u8.to_odd(), 255);
        assert_eq!(1u8.to_even(), 0);
    }

    #[test]
    fn test_zero_is_clamped_upwards() {
        assert_eq!(0u8.to_odd(), 1);
        assert_eq!(0u16.to_odd(), 1);
        assert_eq!(0u8.to_even(), 0);
    }

    #[test]
    fn test_u16_parity() {
        assert_eq!(65535u16.to_even(), 65534);
        assert_eq!(1000u16.to_odd(), 999);
        assert!(65535u16.is_odd());
    }

    #[test]
    fn test_group_slot_roles() {
        let g = group([1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(g.data(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(g.terminator(), 9);
        assert!(g.is_last());

        let pixels = g.into_pixels();
        assert_eq!(pixels[2], Pixel::new(7, 8, 9));
    }

    #[test]
    fn test_embed_byte_msb_first() {
        let mut g = group([10; 9]);
        g.embed_byte(b'A'); // 01000001
        assert_eq!(g.data(), &[10, 9, 10, 10, 10, 10, 10, 9]);
        assert_eq!(g.read_byte(), b'A');
    }

    #[test]
    fn test_embed_byte_follows_payload_bits() {
        for byte in [0x00, 0x48, 0x69, 0xA5, 0xFF] {
            let mut g = group([128; 9]);
            g.embed_byte(byte);
            let parities: [bool; DATA_SLOTS] = core::array::from_fn(|j| g.data()[j].is_odd());
            assert_eq!(parities, byte_bits(byte));
            assert_eq!(g.read_byte(), byte);
        }
    }

    #[test]
    fn test_embed_byte_on_black_pixels() {
        let mut g = group([0; 9]);
        g.embed_byte(0xFF);
        assert_eq!(g.data(), &[1; 8]);
        g.mark_last(true);
        assert_eq!(g.terminator(), 1);
    }

    #[test]
    fn test_mark_last() {
        let mut g = group([255; 9]);
        g.mark_last(false);
        assert_eq!(g.terminator(), 254);
        assert!(!g.is_last());

        g.mark_last(true);
        assert_eq!(g.terminator(), 253);
        assert!(g.is_last());
    }
}
