//! Row-major first-fit packing of multi-cell spans.
//!
//! Every box is placed at the first position, scanning columns left to right
//! and rows top to bottom, where its whole rectangle is free and fits the row
//! capacity. The search restarts from the first free cell for each box, so a
//! small box that comes later can fill a hole left by a wide one.
//!
//! # Example
//!
//! ```
//! use zensquare::pack::pack;
//! use zensquare::span::Span;
//!
//! let placements = pack(&[Span::square(2), Span::UNIT, Span::UNIT, Span::UNIT], 3).unwrap();
//! let cells: Vec<_> = placements.iter().map(|p| (p.cell_x, p.cell_y)).collect();
//! assert_eq!(cells, [(0, 0), (2, 0), (2, 1), (0, 2)]);
//! ```

use alloc::vec::Vec;

use tracing::trace;

use crate::layout::LayoutError;
use crate::span::Span;

/// What to do with a span wider than the row capacity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// Fail with [`LayoutError::SpanExceedsCapacity`].
    #[default]
    Reject,
    /// Narrow the span to the row capacity. A zero capacity is treated as a
    /// single column.
    Clamp,
}

/// Top-left grid cell assigned to a box.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Span actually placed (narrowed under [`Overflow::Clamp`]).
    pub span: Span,
    /// Column of the top-left cell.
    pub cell_x: u32,
    /// Row of the top-left cell.
    pub cell_y: u32,
}

impl Placement {
    /// One past the last column covered.
    pub const fn right(&self) -> u32 {
        self.cell_x + self.span.x
    }

    /// One past the last row covered.
    pub const fn bottom(&self) -> u32 {
        self.cell_y + self.span.y
    }

    /// Whether the cell rectangles of `self` and `other` share a cell.
    pub const fn overlaps(&self, other: &Placement) -> bool {
        self.cell_x < other.right()
            && other.cell_x < self.right()
            && self.cell_y < other.bottom()
            && other.cell_y < self.bottom()
    }
}

/// Sparse grid of taken cells, indexed by column then row.
///
/// Columns are grown on demand, so an empty matrix costs nothing and a
/// lookup outside the stored area reads as free.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OccupancyMatrix {
    columns: Vec<Vec<bool>>,
}

impl OccupancyMatrix {
    /// Empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cell at column `x`, row `y` is taken.
    pub fn is_occupied(&self, x: u32, y: u32) -> bool {
        self.columns
            .get(x as usize)
            .and_then(|column| column.get(y as usize))
            .copied()
            .unwrap_or(false)
    }

    /// Whether any cell of `span` anchored at `(x, y)` is taken.
    pub fn overlaps(&self, x: u32, y: u32, span: Span) -> bool {
        (x..x + span.x).any(|cx| (y..y + span.y).any(|cy| self.is_occupied(cx, cy)))
    }

    /// Mark every cell of `span` anchored at `(x, y)` as taken.
    pub fn occupy(&mut self, x: u32, y: u32, span: Span) {
        let right = (x + span.x) as usize;
        let bottom = (y + span.y) as usize;
        if self.columns.len() < right {
            self.columns.resize_with(right, Vec::new);
        }
        for column in &mut self.columns[x as usize..right] {
            if column.len() < bottom {
                column.resize(bottom, false);
            }
            column[y as usize..bottom].fill(true);
        }
    }

    /// Number of taken cells.
    pub fn occupied_cells(&self) -> usize {
        self.columns
            .iter()
            .map(|column| column.iter().filter(|&&taken| taken).count())
            .sum()
    }
}

/// Pack `spans` into rows of `capacity` columns, rejecting oversized spans.
///
/// Returns one placement per span, in input order.
pub fn pack(spans: &[Span], capacity: u32) -> Result<Vec<Placement>, LayoutError> {
    pack_with(spans, capacity, Overflow::Reject)
}

/// Pack `spans` into rows of `capacity` columns with an explicit overflow
/// policy.
pub fn pack_with(
    spans: &[Span],
    capacity: u32,
    overflow: Overflow,
) -> Result<Vec<Placement>, LayoutError> {
    let (spans, capacity) = admit(spans, capacity, overflow)?;

    let mut matrix = OccupancyMatrix::new();
    let mut placements = Vec::with_capacity(spans.len());

    for span in spans {
        let (mut x, mut y) = first_free_cell(&matrix, capacity);

        if !fits(x, span.x, capacity) {
            x = 0;
            y += 1;
        }
        while matrix.overlaps(x, y, span) {
            x += 1;
            if !fits(x, span.x, capacity) {
                x = 0;
                y += 1;
            }
        }

        matrix.occupy(x, y, span);
        trace!(x, y, span_x = span.x, span_y = span.y, "placed box");
        placements.push(Placement {
            span,
            cell_x: x,
            cell_y: y,
        });
    }

    Ok(placements)
}

/// Validate spans against the capacity and apply the overflow policy.
fn admit(
    spans: &[Span],
    capacity: u32,
    overflow: Overflow,
) -> Result<(Vec<Span>, u32), LayoutError> {
    let capacity = match overflow {
        Overflow::Reject => capacity,
        Overflow::Clamp => capacity.max(1),
    };
    let admitted = spans
        .iter()
        .enumerate()
        .map(|(index, &span)| {
            if !span.is_valid() {
                return Err(LayoutError::ZeroSpan { index });
            }
            match overflow {
                _ if span.x <= capacity => Ok(span),
                Overflow::Reject => Err(LayoutError::SpanExceedsCapacity {
                    index,
                    span: span.x,
                    capacity,
                }),
                Overflow::Clamp => Ok(Span::new(capacity, span.y)),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok((admitted, capacity))
}

/// First free single cell, scanning row-major.
fn first_free_cell(matrix: &OccupancyMatrix, capacity: u32) -> (u32, u32) {
    let (mut x, mut y) = (0, 0);
    while matrix.is_occupied(x, y) {
        x += 1;
        if !fits(x, 1, capacity) {
            x = 0;
            y += 1;
        }
    }
    (x, y)
}

fn fits(x: u32, width: u32, capacity: u32) -> bool {
    x.saturating_add(width) <= capacity
}
