use bitvec::prelude::*;
#[cfg(feature = "embedded-graphics")]
use embedded_graphics::{image::ImageRaw, pixelcolor::BinaryColor};

use crate::sprite::Sprite;

pub const WIDTH: usize = 8;
pub const HEIGHT: usize = 8;

/// One 8x8 picture of the matrix, a byte per row
///
/// Bits inside a row are stored MSB first, matching the pixels from left to
/// the right.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Frame([u8; HEIGHT]);

impl Frame {
    pub fn new() -> Self {
        Self([0; HEIGHT])
    }

    /// OR-composite of a map window and a sprite
    pub fn compose(window: &[u8; HEIGHT], sprite: &Sprite) -> Self {
        let mut rows = [0; HEIGHT];
        rows.iter_mut()
            .zip(window.iter().zip(sprite.iter()))
            .for_each(|(row, (&map, &pose))| *row = map | pose);
        Self(rows)
    }

    /// Rows where the window and the sprite share a lit pixel
    ///
    /// Bit `n` of the result is set when row `n` collides.
    pub fn overlap(window: &[u8; HEIGHT], sprite: &Sprite) -> u8 {
        let mut rows = 0;
        for (row, (map, pose)) in window.iter().zip(sprite.iter()).enumerate() {
            if map & pose != 0 {
                rows |= 1 << row;
            }
        }
        rows
    }

    pub fn from_rows(rows: [u8; HEIGHT]) -> Self {
        Self(rows)
    }

    pub fn rows(&self) -> &[u8; HEIGHT] {
        &self.0
    }

    /// Access frame's bits by indexes
    pub fn get_bit(&self, x: usize, y: usize) -> Option<&bool> {
        self.iter_rows_as_bitslices()
            .nth(y)
            .map(|row| row.get(x))
            .flatten()
    }

    /// Number of lit pixels
    pub fn lit(&self) -> usize {
        self.0.iter().map(|row| row.count_ones() as usize).sum()
    }

    /// Get iterator over rows in a form of a `BitSlice`s
    pub fn iter_rows_as_bitslices(&self) -> impl Iterator<Item = &BitSlice<Msb0, u8>> {
        self.0.chunks(WIDTH / 8).map(|row| row.view_bits::<Msb0>())
    }

    /// Get `ImageRaw` structure from frame's data
    #[cfg(feature = "embedded-graphics")]
    pub fn as_raw_image(&self) -> ImageRaw<'_, BinaryColor> {
        ImageRaw::new(&self.0, WIDTH as u32, HEIGHT as u32)
    }
}
