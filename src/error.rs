use thiserror::Error;

use crate::config::{MAX_DIMENSION, MIN_DIMENSION};

#[derive(Error, Debug)]
pub enum MazeError {
    #[error(
        "{0} columns is out of range: both dimensions must be in {min}..={max}",
        min = MIN_DIMENSION,
        max = MAX_DIMENSION
    )]
    ColumnsOutOfRange(u32),

    #[error(
        "{0} rows is out of range: both dimensions must be in {min}..={max}",
        min = MIN_DIMENSION,
        max = MAX_DIMENSION
    )]
    RowsOutOfRange(u32),

    #[error("failed to write maze: {0}")]
    Io(#[from] std::io::Error),
}
