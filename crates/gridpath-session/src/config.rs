/// Configuration for creating a [`Session`](crate::Session).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Cells per side of the square grid.
    pub rows: usize,
    /// Width of the grid area in pixels; sets the cell size for pixel
    /// lookups.
    pub grid_width: i32,
}

impl SessionConfig {
    pub const DEFAULT_ROWS: usize = 50;
    pub const DEFAULT_GRID_WIDTH: i32 = 800;

    /// A config with `rows` cells per side and one pixel per cell.
    pub fn with_rows(rows: usize) -> Self {
        Self {
            rows,
            grid_width: rows as i32,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: Self::DEFAULT_ROWS,
            grid_width: Self::DEFAULT_GRID_WIDTH,
        }
    }
}
