//! Obstacle grid world and passability classification.
//!
//! The grid is the collaborator seeker senses query: given a 2D world
//! position, it answers whether that position is passable. Queries outside
//! the world extent always classify as obstacles.

use std::fmt;

use ndarray::Array1;

/// Passability classification of one world position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ground {
    /// Traversable ground.
    Way,
    /// Blocked ground; also the answer for any out-of-bounds query.
    Obstacle,
}

/// Errors from world grid construction.
#[derive(Debug, Clone, PartialEq)]
pub enum WorldError {
    /// The cell buffer length does not equal `width * height`.
    DimensionMismatch {
        /// Cell count the grid dimensions require.
        expected: usize,
        /// Cell count that was supplied.
        actual: usize,
    },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "cell buffer holds {actual} cells, grid needs {expected}")
            }
        }
    }
}

impl std::error::Error for WorldError {}

/// Owned 2D obstacle grid indexed by cell, with a fixed world-to-grid scale.
///
/// World positions are divided by `scale` to find their cell, so one cell
/// covers a `scale` x `scale` square of world space.
#[derive(Debug, Clone)]
pub struct WorldGrid {
    /// Grid width in cells.
    width: usize,
    /// Grid height in cells.
    height: usize,
    /// World units per cell.
    scale: f32,
    /// Row-major cell storage (`y * width + x`).
    cells: Vec<Ground>,
}

impl WorldGrid {
    /// Builds a grid from pre-classified cells in row-major order.
    pub fn from_cells(
        width: usize,
        height: usize,
        cells: Vec<Ground>,
        scale: f32,
    ) -> Result<Self, WorldError> {
        if cells.len() != width * height {
            return Err(WorldError::DimensionMismatch {
                expected: width * height,
                actual: cells.len(),
            });
        }

        let obstacles = cells.iter().filter(|&&g| g == Ground::Obstacle).count();
        log::debug!(
            "world grid built: {width}x{height} cells, {obstacles} obstacles, scale {scale}"
        );

        Ok(Self {
            width,
            height,
            scale,
            cells,
        })
    }

    /// Builds a grid from a raw row-major pixel buffer.
    ///
    /// The first pixel's value keys the obstacle color: every cell whose
    /// pixel equals it is an [`Ground::Obstacle`], all others are
    /// [`Ground::Way`].
    pub fn from_pixels(
        width: usize,
        height: usize,
        pixels: &[u32],
        scale: f32,
    ) -> Result<Self, WorldError> {
        let key = pixels.first().copied();
        let cells = pixels
            .iter()
            .map(|&pixel| {
                if Some(pixel) == key {
                    Ground::Obstacle
                } else {
                    Ground::Way
                }
            })
            .collect();
        Self::from_cells(width, height, cells, scale)
    }

    /// Classifies a 2D world position.
    ///
    /// The position is scaled down to its cell; anything outside the grid
    /// extent is an obstacle.
    pub fn classify(&self, pos: &Array1<f32>) -> Ground {
        let x = pos[0] / self.scale;
        let y = pos[1] / self.scale;

        if !(0.0..self.width as f32).contains(&x) {
            return Ground::Obstacle;
        }
        if !(0.0..self.height as f32).contains(&y) {
            return Ground::Obstacle;
        }
        self.cells[y as usize * self.width + x as usize]
    }

    /// Whether a world position can be walked on.
    pub fn is_passable(&self, pos: &Array1<f32>) -> bool {
        self.classify(pos) == Ground::Way
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// World units per cell.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// World extent along x, in world units.
    pub fn world_width(&self) -> f32 {
        self.width as f32 * self.scale
    }

    /// World extent along y, in world units.
    pub fn world_height(&self) -> f32 {
        self.height as f32 * self.scale
    }

    /// Center of the world extent, in world units.
    pub fn center(&self) -> Array1<f32> {
        Array1::from_vec(vec![self.world_width() / 2., self.world_height() / 2.])
    }
}
