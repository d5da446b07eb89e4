//! Forward and inverse 2-D DCT over 8×8 blocks of one color channel.
//!
//! Only blocks with top-left `(h, w)` where `h + 8 < height` and
//! `w + 8 < width` are transformed. All other samples, including the last full
//! block row and column, are carried through the [`CoefficientGrid`] as raw
//! sample values, [`inverse`] only rounds and clamps them.

use super::channel::ChannelPlane;

/// Edge length of a transform block.
pub const BLOCK_SIZE: usize = 8;

/// Orthonormal DCT-II basis: `BASIS[k][i] = sqrt(Ck) * cos((2i + 1) * k * PI / 16)`
/// with `Ck = 1/8` for `k == 0` and `2/8` otherwise.
#[allow(clippy::excessive_precision)]
const BASIS: [[f64; BLOCK_SIZE]; BLOCK_SIZE] = [
    [
        0.3535533905932738,
        0.3535533905932738,
        0.3535533905932738,
        0.3535533905932738,
        0.3535533905932738,
        0.3535533905932738,
        0.3535533905932738,
        0.3535533905932738,
    ],
    [
        0.4903926402016152,
        0.4157348061512726,
        0.27778511650980114,
        0.09754516100806417,
        -0.0975451610080641,
        -0.277785116509801,
        -0.4157348061512727,
        -0.4903926402016152,
    ],
    [
        0.46193976625564337,
        0.19134171618254492,
        -0.19134171618254486,
        -0.46193976625564337,
        -0.4619397662556434,
        -0.19134171618254517,
        0.191341716182545,
        0.46193976625564326,
    ],
    [
        0.4157348061512726,
        -0.0975451610080641,
        -0.4903926402016152,
        -0.2777851165098011,
        0.2777851165098009,
        0.4903926402016152,
        0.09754516100806439,
        -0.41573480615127256,
    ],
    [
        0.3535533905932738,
        -0.35355339059327373,
        -0.35355339059327384,
        0.3535533905932737,
        0.35355339059327384,
        -0.35355339059327334,
        -0.35355339059327356,
        0.3535533905932733,
    ],
    [
        0.27778511650980114,
        -0.4903926402016152,
        0.09754516100806415,
        0.41573480615127273,
        -0.41573480615127256,
        -0.09754516100806401,
        0.4903926402016153,
        -0.27778511650980076,
    ],
    [
        0.19134171618254492,
        -0.4619397662556434,
        0.46193976625564326,
        -0.19134171618254495,
        -0.19134171618254528,
        0.46193976625564337,
        -0.4619397662556432,
        0.19134171618254478,
    ],
    [
        0.09754516100806417,
        -0.2777851165098011,
        0.41573480615127273,
        -0.4903926402016153,
        0.4903926402016152,
        -0.4157348061512725,
        0.27778511650980076,
        -0.09754516100806429,
    ],
];

type Block = [[f64; BLOCK_SIZE]; BLOCK_SIZE];

/// Real valued coefficients of one channel, same dimensions as the channel.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientGrid {
    width: usize,
    height: usize,
    coeffs: Vec<f64>,
}

impl CoefficientGrid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.coeffs[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let idx = self.index(row, col);
        self.coeffs[idx] = value;
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.height, "row {row} >= {}", self.height);
        debug_assert!(col < self.width, "col {col} >= {}", self.width);
        row * self.width + col
    }

    fn block(&self, top: usize, left: usize) -> Block {
        let mut block = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
        for (i, row) in block.iter_mut().enumerate() {
            let start = self.index(top + i, left);
            row.copy_from_slice(&self.coeffs[start..start + BLOCK_SIZE]);
        }
        block
    }

    fn set_block(&mut self, top: usize, left: usize, block: &Block) {
        for (i, row) in block.iter().enumerate() {
            let start = self.index(top + i, left);
            self.coeffs[start..start + BLOCK_SIZE].copy_from_slice(row);
        }
    }
}

/// Top-left corners of all blocks that take part in the transform, row by row.
pub fn transformed_blocks(width: usize, height: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..height)
        .step_by(BLOCK_SIZE)
        .take_while(move |h| h + BLOCK_SIZE < height)
        .flat_map(move |h| {
            (0..width)
                .step_by(BLOCK_SIZE)
                .take_while(move |w| w + BLOCK_SIZE < width)
                .map(move |w| (h, w))
        })
}

/// Applies the forward DCT to every transformed block of `plane`.
pub fn forward(plane: &ChannelPlane) -> CoefficientGrid {
    let mut grid = CoefficientGrid {
        width: plane.width(),
        height: plane.height(),
        coeffs: plane.samples().iter().map(|s| f64::from(*s)).collect(),
    };
    for (h, w) in transformed_blocks(grid.width(), grid.height()) {
        let block = forward_block(&grid.block(h, w));
        grid.set_block(h, w, &block);
    }

    grid
}

/// Reconstructs a channel from `grid`. Transformed blocks are inverted and
/// rounded, everything else is copied; all values are clamped to `0..=255`.
pub fn inverse(grid: &CoefficientGrid) -> ChannelPlane {
    let mut samples = grid.clone();
    for (h, w) in transformed_blocks(grid.width(), grid.height()) {
        samples.set_block(h, w, &inverse_block(&grid.block(h, w)));
    }

    ChannelPlane::new(
        grid.width(),
        grid.height(),
        samples.coeffs.iter().map(|v| clamp_sample(*v)).collect(),
    )
}

fn clamp_sample(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// `D = B · X · Bᵀ`, rows first then columns
fn forward_block(samples: &Block) -> Block {
    let mut rows = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
    for (i, row) in rows.iter_mut().enumerate() {
        for (l, out) in row.iter_mut().enumerate() {
            *out = (0..BLOCK_SIZE).map(|j| samples[i][j] * BASIS[l][j]).sum();
        }
    }

    let mut coeffs = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
    for (k, row) in coeffs.iter_mut().enumerate() {
        for (l, out) in row.iter_mut().enumerate() {
            *out = (0..BLOCK_SIZE).map(|i| BASIS[k][i] * rows[i][l]).sum();
        }
    }
    coeffs
}

/// `X = Bᵀ · D · B`
fn inverse_block(coeffs: &Block) -> Block {
    let mut rows = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
    for (k, row) in rows.iter_mut().enumerate() {
        for (j, out) in row.iter_mut().enumerate() {
            *out = (0..BLOCK_SIZE).map(|l| coeffs[k][l] * BASIS[l][j]).sum();
        }
    }

    let mut samples = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
    for (i, row) in samples.iter_mut().enumerate() {
        for (j, out) in row.iter_mut().enumerate() {
            *out = (0..BLOCK_SIZE).map(|k| BASIS[k][i] * rows[k][j]).sum();
        }
    }
    samples
}
