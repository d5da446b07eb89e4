use log::trace;

use super::cursor::{Coord, FIRST_COEFFICIENT, SECOND_COEFFICIENT};
use super::transform::CoefficientGrid;

/// Hides one bit per carrier block in the magnitude relation of two of its
/// coefficients, `P1 = (1, 3)` and `P2 = (2, 5)`.
///
/// A `1` is kept as `|P1| - |P2| < -epsilon`, a `0` as `|P1| - |P2| > epsilon`.
/// Reading uses `epsilon` as the only threshold for both bits.
#[derive(Debug, Clone, Copy)]
pub struct CoefficientCodec {
    epsilon: f64,
}

impl CoefficientCodec {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    fn difference(grid: &CoefficientGrid, p1: Coord, p2: Coord) -> f64 {
        grid.get(p1.row, p1.col).abs() - grid.get(p2.row, p2.col).abs()
    }

    /// enforces the relation for `bit` on the carrier block starting at `block`
    pub fn hide_bit(&self, grid: &mut CoefficientGrid, block: Coord, bit: bool) {
        let p1 = block.offset(FIRST_COEFFICIENT);
        let p2 = block.offset(SECOND_COEFFICIENT);
        let k = Self::difference(grid, p1, p2);

        if bit && k >= -self.epsilon {
            let value = grid.get(p1.row, p1.col).abs() + self.epsilon + 1.0;
            grid.set(p2.row, p2.col, value);
        } else if !bit && k <= self.epsilon {
            let value = grid.get(p2.row, p2.col).abs() + self.epsilon + 1.0;
            grid.set(p1.row, p1.col, value);
        }
        trace!(
            "hid {} at {block:?}: k {k} -> {}",
            u8::from(bit),
            Self::difference(grid, p1, p2)
        );
    }

    /// reads the bit of the carrier block starting at `block`
    pub fn unveil_bit(&self, grid: &CoefficientGrid, block: Coord) -> bool {
        let k = Self::difference(
            grid,
            block.offset(FIRST_COEFFICIENT),
            block.offset(SECOND_COEFFICIENT),
        );
        trace!("unveiled at {block:?}: k {k}, epsilon {}", self.epsilon);

        k < self.epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::image::channel::{ChannelPlane, CARRIER_CHANNEL};
    use crate::media::image::transform::forward;
    use crate::test_utils::prepare_uniform_image;

    fn flat_grid() -> CoefficientGrid {
        let img = prepare_uniform_image(16, 16, 128);
        forward(&ChannelPlane::from_image(&img, CARRIER_CHANNEL))
    }

    #[test]
    fn should_raise_the_second_coefficient_for_a_one() {
        let mut grid = flat_grid();
        let codec = CoefficientCodec::new(5.0);

        codec.hide_bit(&mut grid, Coord::new(0, 0), true);

        assert!((grid.get(2, 5) - 6.0).abs() < 1e-9);
        assert!(grid.get(1, 3).abs() < 1e-9);
        assert!(codec.unveil_bit(&grid, Coord::new(0, 0)));
    }

    #[test]
    fn should_raise_the_first_coefficient_for_a_zero() {
        let mut grid = flat_grid();
        let codec = CoefficientCodec::new(5.0);

        codec.hide_bit(&mut grid, Coord::new(0, 0), false);

        assert!((grid.get(1, 3) - 6.0).abs() < 1e-9);
        assert!(grid.get(2, 5).abs() < 1e-9);
        assert!(!codec.unveil_bit(&grid, Coord::new(0, 0)));
    }

    #[test]
    fn should_leave_a_relation_that_already_holds() {
        let mut grid = flat_grid();
        grid.set(1, 3, -3.0);
        grid.set(2, 5, 12.0);
        let expected = grid.clone();

        CoefficientCodec::new(5.0).hide_bit(&mut grid, Coord::new(0, 0), true);

        assert_eq!(grid, expected);
    }

    #[test]
    fn should_compare_magnitudes_not_signed_values() {
        let mut grid = flat_grid();
        grid.set(1, 3, -20.0);
        grid.set(2, 5, 2.0);

        assert!(!CoefficientCodec::new(5.0).unveil_bit(&grid, Coord::new(0, 0)));
    }

    #[test]
    fn should_read_the_gap_between_both_thresholds_as_one() {
        let mut grid = flat_grid();
        grid.set(1, 3, 4.0);
        grid.set(2, 5, 1.0);

        // |P1| - |P2| = 3 is neither below -5 nor above 5
        assert!(CoefficientCodec::new(5.0).unveil_bit(&grid, Coord::new(0, 0)));
    }
}
