use crate::{error::MazeError, generators::WallOrder};

/// Smallest number of columns or rows a maze may have.
pub const MIN_DIMENSION: u32 = 2;
/// Largest number of columns or rows a maze may have. Keeps memory use predictable.
pub const MAX_DIMENSION: u32 = 1000;

/// Validated parameters of one maze generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    columns: u16,
    rows: u16,
    seed: Option<u64>,
    wall_order: WallOrder,
}

impl MazeConfig {
    /// Checks the dimensions before anything gets allocated.
    pub fn new(columns: u32, rows: u32) -> Result<Self, MazeError> {
        let range = MIN_DIMENSION..=MAX_DIMENSION;
        if !range.contains(&columns) {
            return Err(MazeError::ColumnsOutOfRange(columns));
        }
        if !range.contains(&rows) {
            return Err(MazeError::RowsOutOfRange(rows));
        }
        Ok(MazeConfig {
            columns: columns as u16,
            rows: rows as u16,
            seed: None,
            wall_order: WallOrder::default(),
        })
    }

    /// Fixes the seed. Without one, a seed is derived from the clock at generation time.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_wall_order(mut self, wall_order: WallOrder) -> Self {
        self.wall_order = wall_order;
        self
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn wall_order(&self) -> WallOrder {
        self.wall_order
    }
}
