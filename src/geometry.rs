//! Cell geometry: pixel sizes of one grid cell and the gutters between cells.
//!
//! Cell width and spacing are either fixed pixel values or percentages of
//! the container width. Percentages are resolved once per layout pass, so a
//! percentage grid reflows its cell size on every resize.
//!
//! # Example
//!
//! ```
//! use zensquare::geometry::{CellGeometry, Dimension};
//! use zensquare::span::Span;
//!
//! let g = CellGeometry::resolve(Dimension::Fixed(100.0), Dimension::Fixed(10.0), 150.0, 340.0)
//!     .unwrap();
//! assert_eq!(g.row_capacity(340.0), 3);
//! assert_eq!(g.box_size(Span::new(2, 1)), (210.0, 150.0));
//! assert_eq!(g.offset(1, 1), (120.0, 170.0));
//! ```

use num_traits::Float;

use crate::layout::LayoutError;
use crate::span::Span;

/// A length that is either absolute or relative to the container width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Dimension {
    /// Absolute pixels.
    Fixed(f64),
    /// Percentage of the container width, `0.0..=100.0` (`25.0` is 25%).
    Percent(f64),
}

impl Dimension {
    /// Whether resolving this dimension depends on the container width.
    pub const fn is_relative(&self) -> bool {
        matches!(self, Self::Percent(_))
    }

    fn validate(self) -> Result<Self, LayoutError> {
        match self {
            Self::Fixed(px) if !px.is_finite() || px < 0.0 => Err(LayoutError::InvalidDimension),
            Self::Percent(pct) if !pct.is_finite() || pct <= 0.0 => {
                Err(LayoutError::InvalidPercent)
            }
            other => Ok(other),
        }
    }
}

/// Resolved pixel geometry of a grid cell for one layout pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellGeometry {
    /// Width of a single cell.
    pub width: f64,
    /// Height of a single cell.
    pub height: f64,
    /// Gutter between cells and around the grid edge.
    pub space: f64,
}

impl CellGeometry {
    /// Resolve cell geometry against the current container width.
    ///
    /// Spacing is resolved first because a percentage width subtracts the
    /// gutters needed to tile a full row: `ceil(100 / pct)` cells need one
    /// more gutter than cells. Height is always absolute.
    pub fn resolve(
        width: Dimension,
        space: Dimension,
        height: f64,
        container_width: f64,
    ) -> Result<Self, LayoutError> {
        if !container_width.is_finite() || container_width < 0.0 {
            return Err(LayoutError::InvalidContainerWidth);
        }
        if !height.is_finite() || height < 0.0 {
            return Err(LayoutError::InvalidDimension);
        }

        let space = match space.validate()? {
            Dimension::Fixed(px) => px,
            Dimension::Percent(pct) => container_width * (pct / 100.0),
        };
        let width = match width.validate()? {
            Dimension::Fixed(px) => px,
            Dimension::Percent(pct) => {
                let cells_per_row = Float::ceil(100.0 / pct);
                ((container_width - space * (cells_per_row + 1.0)) * (pct / 100.0)).max(0.0)
            }
        };

        if width + space <= 0.0 {
            return Err(LayoutError::ZeroCellPitch);
        }

        Ok(Self {
            width,
            height,
            space,
        })
    }

    /// Pixel size of a box covering `span` cells, gutters between its cells
    /// included.
    pub fn box_size(&self, span: Span) -> (f64, f64) {
        (
            self.width * span.x as f64 + self.space * (span.x as f64 - 1.0),
            self.height * span.y as f64 + self.space * (span.y as f64 - 1.0),
        )
    }

    /// Pixel offset of the top-left corner of cell `(cell_x, cell_y)`.
    pub fn offset(&self, cell_x: u32, cell_y: u32) -> (f64, f64) {
        (
            self.space + (self.width + self.space) * cell_x as f64,
            self.space + (self.height + self.space) * cell_y as f64,
        )
    }

    /// Whether a box `span_x` cells wide fits at `column`, leaving a gutter
    /// on both sides of the grid.
    pub fn fits(&self, column: u32, span_x: u32, container_width: f64) -> bool {
        let column = column as f64;
        let span = span_x as f64;
        let box_width = self.width * span + self.space * (span - 1.0);
        self.width * column + self.space * (column + 2.0) + box_width <= container_width
    }

    /// Largest number of cell columns that fit `container_width`.
    pub fn row_capacity(&self, container_width: f64) -> u32 {
        let pitch = self.width + self.space;
        if pitch <= 0.0 || !container_width.is_finite() {
            return 0;
        }
        let estimate = Float::floor((container_width - self.space) / pitch);
        let mut n = if estimate <= 0.0 {
            0
        } else if estimate >= u32::MAX as f64 {
            u32::MAX - 1
        } else {
            estimate as u32
        };
        // The estimate can be off by one where the division rounds.
        while n > 0 && !self.fits(0, n, container_width) {
            n -= 1;
        }
        while n < u32::MAX - 1 && self.fits(0, n + 1, container_width) {
            n += 1;
        }
        n
    }
}
