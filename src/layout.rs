//! Grid configuration and the layout pass.
//!
//! A layout pass resolves cell geometry for the current container width,
//! packs the boxes, and converts cells to pixel rectangles. It is pure: the
//! [`controller`](crate::controller) applies the result to a surface.
//!
//! # Example
//!
//! ```
//! use zensquare::{Dimension, GridConfig, GridItem, Span};
//!
//! let config = GridConfig::default()
//!     .width(Dimension::Fixed(100.0))
//!     .height(150.0)
//!     .space(Dimension::Fixed(10.0));
//!
//! let items = [
//!     GridItem::new("a", Span::UNIT),
//!     GridItem::new("b", Span::new(2, 1)),
//! ];
//! let layout = config.compute(&items, 340.0).unwrap();
//!
//! assert_eq!(layout.capacity, 3);
//! assert_eq!(layout.boxes[1].rect.x, 120.0);
//! assert_eq!(layout.total_height, 170.0);
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use thiserror::Error;

use crate::geometry::{CellGeometry, Dimension};
use crate::pack::{Overflow, Placement, pack_with};
use crate::span::{Span, parse_class_attr};

/// Layout computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A box is wider than the number of columns that fit the container.
    #[error("box {index} spans {span} columns but only {capacity} fit the container")]
    SpanExceedsCapacity {
        /// Position of the box in packing order.
        index: usize,
        /// Columns the box spans.
        span: u32,
        /// Columns available.
        capacity: u32,
    },
    /// A box spans zero cells on some axis.
    #[error("box {index} has a zero span")]
    ZeroSpan {
        /// Position of the box in packing order.
        index: usize,
    },
    /// A fixed dimension is negative or not finite.
    #[error("cell dimension must be a finite, non-negative pixel value")]
    InvalidDimension,
    /// A percentage is zero, negative, or not finite.
    #[error("percentage must be finite and greater than zero")]
    InvalidPercent,
    /// The container width is negative or not finite.
    #[error("container width must be finite and non-negative")]
    InvalidContainerWidth,
    /// Cell width plus spacing resolved to zero.
    #[error("cell width plus spacing must be greater than zero")]
    ZeroCellPitch,
}

/// Grid layout configuration.
///
/// Defaults: boxes are elements whose class starts with `square`, cells are
/// 150×150 with 10px gutters, re-layouts animate over 700ms and resize
/// polling runs every 500ms.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Class prefix identifying boxes.
    pub target: String,
    /// Selector for the content element clamped to the box height.
    pub inner: String,
    /// Separator between the class prefix and span multipliers.
    pub scale_split: String,
    /// Cell width.
    pub width: Dimension,
    /// Cell height in pixels.
    pub height: f64,
    /// Gutter between cells.
    pub space: Dimension,
    /// Re-layout animation duration in milliseconds.
    pub speed_ms: u32,
    /// Resize polling interval in milliseconds.
    pub poll_interval_ms: u32,
    /// Policy for boxes wider than the row.
    pub overflow: Overflow,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            target: String::from("square"),
            inner: String::from(".inner"),
            scale_split: String::from("_"),
            width: Dimension::Fixed(150.0),
            height: 150.0,
            space: Dimension::Fixed(10.0),
            speed_ms: 700,
            poll_interval_ms: 500,
            overflow: Overflow::Reject,
        }
    }
}

impl GridConfig {
    /// Set the class prefix identifying boxes.
    pub fn target(mut self, prefix: impl Into<String>) -> Self {
        self.target = prefix.into();
        self
    }

    /// Set the inner content selector.
    pub fn inner(mut self, selector: impl Into<String>) -> Self {
        self.inner = selector.into();
        self
    }

    /// Set the span separator.
    pub fn scale_split(mut self, separator: impl Into<String>) -> Self {
        self.scale_split = separator.into();
        self
    }

    /// Set the cell width.
    pub fn width(mut self, width: Dimension) -> Self {
        self.width = width;
        self
    }

    /// Set the cell height in pixels.
    pub fn height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Set the gutter between cells.
    pub fn space(mut self, space: Dimension) -> Self {
        self.space = space;
        self
    }

    /// Set the re-layout animation duration.
    pub fn speed(mut self, ms: u32) -> Self {
        self.speed_ms = ms;
        self
    }

    /// Set the resize polling interval.
    pub fn duration(mut self, ms: u32) -> Self {
        self.poll_interval_ms = ms;
        self
    }

    /// Set the policy for boxes wider than the row.
    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Whether cell geometry depends on the container width.
    pub fn is_relative(&self) -> bool {
        self.width.is_relative() || self.space.is_relative()
    }

    /// Resolve cell geometry for a container width.
    pub fn geometry(&self, container_width: f64) -> Result<CellGeometry, LayoutError> {
        CellGeometry::resolve(self.width, self.space, self.height, container_width)
    }

    /// Span of a box with the given class attribute.
    pub fn span_of(&self, class_attr: &str) -> Span {
        parse_class_attr(class_attr, &self.scale_split)
    }

    /// Compute a layout for `items` in a container `container_width` pixels
    /// wide. Items are packed in slice order.
    pub fn compute<Id: Copy>(
        &self,
        items: &[GridItem<Id>],
        container_width: f64,
    ) -> Result<GridLayout<Id>, LayoutError> {
        let geometry = self.geometry(container_width)?;
        let capacity = geometry.row_capacity(container_width);

        let spans: Vec<Span> = items.iter().map(|item| item.span).collect();
        let placements = pack_with(&spans, capacity, self.overflow)?;

        let mut total_height: f64 = 0.0;
        let boxes = items
            .iter()
            .zip(placements)
            .map(|(item, cell)| {
                let (x, y) = geometry.offset(cell.cell_x, cell.cell_y);
                let (width, height) = geometry.box_size(cell.span);
                total_height = total_height.max(y + height + geometry.space);
                PlacedBox {
                    id: item.id,
                    cell,
                    rect: BoxRect {
                        x,
                        y,
                        width,
                        height,
                    },
                }
            })
            .collect();

        Ok(GridLayout {
            geometry,
            capacity,
            boxes,
            total_height,
        })
    }
}

/// A box to lay out: the collaborator's handle plus its span.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridItem<Id> {
    /// Opaque handle owned by the surface.
    pub id: Id,
    /// Cells covered.
    pub span: Span,
}

impl<Id> GridItem<Id> {
    /// Create an item.
    pub const fn new(id: Id, span: Span) -> Self {
        Self { id, span }
    }
}

/// Pixel rectangle relative to the container's top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxRect {
    /// Left offset.
    pub x: f64,
    /// Top offset.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// A box with its grid cell and pixel rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacedBox<Id> {
    /// Handle of the box.
    pub id: Id,
    /// Grid placement.
    pub cell: Placement,
    /// Pixel rectangle.
    pub rect: BoxRect,
}

/// Result of one layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout<Id> {
    /// Cell geometry used for the pass.
    pub geometry: CellGeometry,
    /// Columns per row.
    pub capacity: u32,
    /// Boxes in packing order.
    pub boxes: Vec<PlacedBox<Id>>,
    /// Container height needed to show every box plus the bottom gutter.
    pub total_height: f64,
}

impl<Id> GridLayout<Id> {
    /// Number of grid rows touched by any box.
    pub fn rows(&self) -> u32 {
        self.boxes.iter().map(|b| b.cell.bottom()).max().unwrap_or(0)
    }
}

/// Height for a box's inner content element so its outer height, `chrome`
/// (vertical padding and border) included, stays within `box_height`.
pub fn inner_content_height(box_height: f64, chrome: f64) -> f64 {
    (box_height - chrome.max(0.0)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GridConfig {
        GridConfig::default()
            .width(Dimension::Fixed(100.0))
            .height(150.0)
            .space(Dimension::Fixed(10.0))
    }

    fn items(spans: &[Span]) -> Vec<GridItem<usize>> {
        spans
            .iter()
            .enumerate()
            .map(|(i, &s)| GridItem::new(i, s))
            .collect()
    }

    #[test]
    fn defaults() {
        let c = GridConfig::default();
        assert_eq!(c.target, "square");
        assert_eq!(c.inner, ".inner");
        assert_eq!(c.scale_split, "_");
        assert_eq!(c.width, Dimension::Fixed(150.0));
        assert_eq!(c.height, 150.0);
        assert_eq!(c.space, Dimension::Fixed(10.0));
        assert_eq!(c.speed_ms, 700);
        assert_eq!(c.poll_interval_ms, 500);
        assert_eq!(c.overflow, Overflow::Reject);
        assert!(!c.is_relative());
    }

    #[test]
    fn builder_sets_fields() {
        let c = GridConfig::default()
            .target("tile")
            .inner(".body")
            .scale_split("-")
            .width(Dimension::Percent(25.0))
            .speed(0)
            .duration(100)
            .overflow(Overflow::Clamp);
        assert_eq!(c.target, "tile");
        assert_eq!(c.inner, ".body");
        assert_eq!(c.scale_split, "-");
        assert_eq!(c.speed_ms, 0);
        assert_eq!(c.poll_interval_ms, 100);
        assert_eq!(c.overflow, Overflow::Clamp);
        assert!(c.is_relative());
    }

    #[test]
    fn span_of_uses_separator() {
        let c = config().scale_split("-");
        assert_eq!(c.span_of("square-2-1 card"), Span::new(2, 1));
        assert_eq!(c.span_of("square_2_1"), Span::UNIT);
    }

    #[test]
    fn empty_layout() {
        let layout = config().compute::<usize>(&[], 340.0).unwrap();
        assert!(layout.boxes.is_empty());
        assert_eq!(layout.total_height, 0.0);
        assert_eq!(layout.rows(), 0);
    }

    #[test]
    fn single_box_height() {
        let layout = config().compute(&items(&[Span::UNIT]), 340.0).unwrap();
        assert_eq!(layout.total_height, 170.0);
        assert_eq!(
            layout.boxes[0].rect,
            BoxRect {
                x: 10.0,
                y: 10.0,
                width: 100.0,
                height: 150.0
            }
        );
    }

    #[test]
    fn wrap_scenario_in_pixels() {
        let spans = [Span::UNIT, Span::UNIT, Span::UNIT, Span::new(2, 1)];
        let layout = config().compute(&items(&spans), 340.0).unwrap();
        assert_eq!(layout.capacity, 3);
        let cells: Vec<_> = layout
            .boxes
            .iter()
            .map(|b| (b.cell.cell_x, b.cell.cell_y))
            .collect();
        assert_eq!(cells, [(0, 0), (1, 0), (2, 0), (0, 1)]);
        let origins: Vec<_> = layout.boxes.iter().map(|b| (b.rect.x, b.rect.y)).collect();
        assert_eq!(
            origins,
            [(10.0, 10.0), (120.0, 10.0), (230.0, 10.0), (10.0, 170.0)]
        );
        assert_eq!(layout.boxes[3].rect.width, 210.0);
        // Second row bottom: 170 + 150 + 10
        assert_eq!(layout.total_height, 330.0);
        assert_eq!(layout.rows(), 2);
    }

    #[test]
    fn tall_box_sets_height() {
        let spans = [Span::UNIT, Span::new(1, 3)];
        let layout = config().compute(&items(&spans), 340.0).unwrap();
        // 10 + (150 * 3 + 10 * 2) + 10
        assert_eq!(layout.total_height, 490.0);
    }

    #[test]
    fn ids_follow_input_order() {
        let spans = [Span::square(2), Span::UNIT, Span::UNIT];
        let layout = config().compute(&items(&spans), 340.0).unwrap();
        let ids: Vec<_> = layout.boxes.iter().map(|b| b.id).collect();
        assert_eq!(ids, [0, 1, 2]);
    }

    #[test]
    fn idempotent() {
        let spans = [Span::square(2), Span::UNIT, Span::new(3, 1), Span::UNIT];
        let c = config();
        assert_eq!(
            c.compute(&items(&spans), 560.0).unwrap(),
            c.compute(&items(&spans), 560.0).unwrap()
        );
    }

    #[test]
    fn oversized_box_rejected() {
        let err = config()
            .compute(&items(&[Span::new(4, 1)]), 340.0)
            .unwrap_err();
        assert_eq!(
            err,
            LayoutError::SpanExceedsCapacity {
                index: 0,
                span: 4,
                capacity: 3
            }
        );
    }

    #[test]
    fn oversized_box_clamped() {
        let layout = config()
            .overflow(Overflow::Clamp)
            .compute(&items(&[Span::new(4, 1)]), 340.0)
            .unwrap();
        assert_eq!(layout.boxes[0].cell.span, Span::new(3, 1));
        assert_eq!(layout.boxes[0].rect.width, 320.0);
    }

    #[test]
    fn percent_grid_reflows() {
        let c = config().width(Dimension::Percent(25.0));
        let spans = [Span::UNIT; 5];
        let wide = c.compute(&items(&spans), 1000.0).unwrap();
        assert_eq!(wide.capacity, 4);
        assert_eq!(wide.boxes[4].cell.cell_y, 1);
        let narrow = c.compute(&items(&spans), 500.0).unwrap();
        assert_eq!(narrow.capacity, 4);
        assert!(narrow.geometry.width < wide.geometry.width);
    }

    #[test]
    fn inner_height_subtracts_chrome() {
        assert_eq!(inner_content_height(150.0, 0.0), 150.0);
        assert_eq!(inner_content_height(150.0, 20.0), 130.0);
        assert_eq!(inner_content_height(150.0, -5.0), 150.0);
        assert_eq!(inner_content_height(10.0, 20.0), 0.0);
    }

    #[test]
    fn error_messages() {
        let msg = alloc::format!(
            "{}",
            LayoutError::SpanExceedsCapacity {
                index: 2,
                span: 4,
                capacity: 3
            }
        );
        assert_eq!(msg, "box 2 spans 4 columns but only 3 fit the container");
    }
}
