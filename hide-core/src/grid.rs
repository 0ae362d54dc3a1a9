//! Row-major pixel sequence and the cursor that walks it in groups

use crate::constants::{group_capacity, PIXELS_PER_GROUP};
use crate::error::StegoError;
use crate::types::{Channel, Pixel, PixelGroup};
use alloc::vec;
use alloc::vec::Vec;

/// A materialized width × height pixel sequence in row-major order
///
/// Position in the sequence, not the 2-D coordinate, decides which bit a
/// channel carries. Linear index `i` maps to `(i % width, i / width)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid<C> {
    width: u32,
    height: u32,
    pixels: Vec<Pixel<C>>,
}

impl<C: Channel> PixelGrid<C> {
    /// Create a grid from row-major pixels
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel<C>>) -> Result<Self, StegoError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(StegoError::DimensionMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a grid where every pixel is `pixel`
    pub fn filled(width: u32, height: u32, pixel: Pixel<C>) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; width as usize * height as usize],
        }
    }

    /// Grid width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Check if the grid has no pixels
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Number of whole pixel groups the grid holds
    pub fn group_capacity(&self) -> usize {
        group_capacity(self.pixels.len())
    }

    /// Pixels in traversal order
    pub fn pixels(&self) -> &[Pixel<C>] {
        &self.pixels
    }

    /// Pixel at a linear index
    pub fn get(&self, index: usize) -> Option<Pixel<C>> {
        self.pixels.get(index).copied()
    }

    /// Overwrite the pixel at a linear index
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn put_pixel(&mut self, index: usize, pixel: Pixel<C>) {
        self.pixels[index] = pixel;
    }

    /// Translate a linear index into `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if the grid has zero width.
    pub fn coords(&self, index: usize) -> (u32, u32) {
        index_to_coords(index, self.width)
    }

    /// Read the group starting at `start`, if three pixels remain
    pub fn group_at(&self, start: usize) -> Option<PixelGroup<C>> {
        let end = start.checked_add(PIXELS_PER_GROUP)?;
        let slice = self.pixels.get(start..end)?;
        Some(PixelGroup::from_pixels([slice[0], slice[1], slice[2]]))
    }

    /// Write a group back at `start`, preserving traversal order
    ///
    /// # Panics
    ///
    /// Panics if fewer than three pixels follow `start`.
    pub fn put_group(&mut self, start: usize, group: PixelGroup<C>) {
        for (offset, pixel) in group.into_pixels().into_iter().enumerate() {
            self.put_pixel(start + offset, pixel);
        }
    }

    /// Consume the grid, returning its pixels
    pub fn into_pixels(self) -> Vec<Pixel<C>> {
        self.pixels
    }
}

/// Translate a linear row-major index into `(x, y)` for a given width
///
/// # Panics
///
/// Panics if `width` is zero.
pub fn index_to_coords(index: usize, width: u32) -> (u32, u32) {
    let width = width as usize;
    ((index % width) as u32, (index / width) as u32)
}

/// Explicit traversal position over a [`PixelGrid`], advanced one group at a time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelCursor {
    position: usize,
}

impl PixelCursor {
    /// Start at the first pixel
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the next pixel to be read
    pub fn position(&self) -> usize {
        self.position
    }

    /// Read the next group and advance past it
    ///
    /// Returns the group's starting index with the group, or `None` when
    /// fewer than three pixels remain. The cursor does not move on `None`.
    pub fn next_group<C: Channel>(
        &mut self,
        grid: &PixelGrid<C>,
    ) -> Option<(usize, PixelGroup<C>)> {
        let start = self.position;
        let group = grid.group_at(start)?;
        self.position += PIXELS_PER_GROUP;
        Some((start, group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: u32, height: u32) -> PixelGrid<u8> {
        let pixels = (0..width * height)
            .map(|i| Pixel::new(i as u8, 0, 0))
            .collect();
        PixelGrid::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_dimension_mismatch() {
        let result = PixelGrid::new(2, 2, vec![Pixel::new(0u8, 0, 0); 3]);
        assert_eq!(
            result,
            Err(StegoError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_index_to_coords() {
        assert_eq!(index_to_coords(0, 10), (0, 0));
        assert_eq!(index_to_coords(9, 10), (9, 0));
        assert_eq!(index_to_coords(10, 10), (0, 1));
        assert_eq!(index_to_coords(23, 10), (3, 2));
    }

    #[test]
    #[should_panic]
    fn test_index_to_coords_zero_width() {
        index_to_coords(0, 0);
    }

    #[test]
    fn test_cursor_walks_row_major() {
        let grid = numbered(4, 2);
        let mut cursor = PixelCursor::new();

        let (start, group) = cursor.next_group(&grid).unwrap();
        assert_eq!(start, 0);
        assert_eq!(group.data()[0], 0);
        assert_eq!(group.data()[3], 1);
        assert_eq!(group.data()[6], 2);

        let (start, group) = cursor.next_group(&grid).unwrap();
        assert_eq!(start, 3);
        assert_eq!(group.data()[6], 5);

        // Two pixels left: not enough for a group
        assert!(cursor.next_group(&grid).is_none());
        assert_eq!(cursor.position(), 6);
    }

    #[test]
    fn test_put_group_round_trip() {
        let mut grid = numbered(3, 3);
        let mut group = grid.group_at(3).unwrap();
        group.mark_last(true);
        grid.put_group(3, group);

        assert_eq!(grid.get(5), Some(Pixel::new(5, 0, 1)));
        assert_eq!(grid.get(2), Some(Pixel::new(2, 0, 0)));
        assert_eq!(grid.get(6), Some(Pixel::new(6, 0, 0)));
    }

    #[test]
    fn test_group_capacity() {
        assert_eq!(numbered(10, 10).group_capacity(), 33);
        assert_eq!(numbered(2, 1).group_capacity(), 0);
    }
}
