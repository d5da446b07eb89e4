//! Deterministic traversal of an image, shared by hiding and unveiling.
//!
//! The first [`RasterLayout::header_capacity`] pixels in row-major order form
//! the length header. The carrier blocks follow right after: one block per
//! payload bit, 8 columns apart, wrapping to the block row below once the
//! next block would reach the right border.

use super::transform::BLOCK_SIZE;

/// Offset of the first coefficient of a carrier block, `(row, col)`.
pub const FIRST_COEFFICIENT: (usize, usize) = (1, 3);

/// Offset of the second coefficient of a carrier block, `(row, col)`.
pub const SECOND_COEFFICIENT: (usize, usize) = (2, 5);

/// Position of a pixel or coefficient inside the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// relative position inside the block that starts at `self`
    pub fn offset(self, (row, col): (usize, usize)) -> Self {
        Self::new(self.row + row, self.col + col)
    }
}

/// Image dimensions and everything the traversal derives from them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterLayout {
    width: usize,
    height: usize,
}

impl RasterLayout {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// The largest power of two strictly below the pixel count, 0 for images
    /// with less than 2 pixels.
    pub fn header_capacity(&self) -> usize {
        let pixels = self.width * self.height;
        if pixels < 2 {
            return 0;
        }
        1 << (usize::BITS - 1 - (pixels - 1).leading_zeros())
    }

    /// Number of bits the image could carry if every block held one, `W * H / 64`.
    pub fn block_capacity(&self) -> usize {
        self.width * self.height / (BLOCK_SIZE * BLOCK_SIZE)
    }

    /// Number of carrier blocks the coefficient phase can visit.
    pub fn carrier_capacity(&self) -> usize {
        self.carrier_blocks().count()
    }

    /// Number of payload bits that can be hidden, the smaller of the block
    /// capacity and the carrier capacity.
    pub fn payload_capacity(&self) -> usize {
        self.block_capacity().min(self.carrier_capacity())
    }

    /// Row-major pixel positions of the header field.
    pub fn header_positions(&self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        (0..self.header_capacity()).map(move |i| Coord::new(i / width, i % width))
    }

    /// Top-left corners of the carrier blocks, one per payload bit.
    pub fn carrier_blocks(&self) -> CarrierBlocks {
        CarrierBlocks::new(*self)
    }
}

/// Restartable sequence of carrier block positions.
///
/// A position is yielded only while both of its coefficients lie inside the
/// grid. Carriers may reach into the untransformed border, whose raw samples
/// take the coefficient relation directly. A first position whose second
/// coefficient column is outside the grid moves on to the next block row.
#[derive(Debug, Clone)]
pub struct CarrierBlocks {
    width: usize,
    height: usize,
    next: Option<Coord>,
}

impl CarrierBlocks {
    fn new(layout: RasterLayout) -> Self {
        let next = match layout.header_capacity() {
            0 => None,
            _ if layout.width <= SECOND_COEFFICIENT.1 => None,
            start => Some(Coord::new(start / layout.width, start % layout.width)),
        };

        Self {
            width: layout.width,
            height: layout.height,
            next,
        }
    }

    fn advance(&self, at: Coord) -> Coord {
        if at.col + 2 * BLOCK_SIZE >= self.width {
            Coord::new(at.row + BLOCK_SIZE, 0)
        } else {
            Coord::new(at.row, at.col + BLOCK_SIZE)
        }
    }
}

impl Iterator for CarrierBlocks {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        let mut at = self.next?;
        if at.col + SECOND_COEFFICIENT.1 >= self.width {
            at = Coord::new(at.row + BLOCK_SIZE, 0);
        }
        if at.row + SECOND_COEFFICIENT.0 >= self.height {
            self.next = None;
            return None;
        }
        self.next = Some(self.advance(at));

        Some(at)
    }
}
