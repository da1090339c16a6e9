//! Square grid layout: pack multi-cell boxes into a responsive grid.
//!
//! Boxes declare a span in their class name (`square_2` covers 2×2 cells,
//! `square_3_1` covers 3×1). They are packed row-major, first-fit: every box
//! takes the first position where its whole rectangle is free. The grid
//! re-packs once a container resize has settled.
//!
//! # Modules
//!
//! - [`pack`]: Occupancy matrix and the packing algorithm
//! - [`geometry`]: Cell size and gutter resolution, row capacity
//! - [`span`]: Span type and class-name parsing
//! - [`layout`]: Configuration and the pure layout pass
//! - [`resize`]: Resize settle state machine
//! - [`controller`]: Applies layouts to a [`Surface`] and handles resizes
//! - `options`: Option-string parsing (feature `options`)
//! - `svg`: SVG rendering of a layout (feature `svg`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod controller;
pub mod geometry;
pub mod layout;
#[cfg(feature = "options")]
pub mod options;
pub mod pack;
pub mod resize;
pub mod span;
#[cfg(feature = "svg")]
pub mod svg;

pub use controller::{Grid, ResizeSubscription, Surface, Transition};
pub use geometry::{CellGeometry, Dimension};
pub use layout::{
    BoxRect, GridConfig, GridItem, GridLayout, LayoutError, PlacedBox, inner_content_height,
};
pub use pack::{OccupancyMatrix, Overflow, Placement, pack, pack_with};
pub use resize::{Effect, ResizeEvent, ResizeState};
pub use span::{Span, parse_class_attr, parse_span};
