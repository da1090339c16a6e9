//! Parsed option values and their merge onto configuration defaults.

use alloc::string::String;

use crate::geometry::Dimension;
use crate::layout::GridConfig;
use crate::pack::Overflow;

/// Options parsed from an option string. Unset fields keep the
/// [`GridConfig`] default.
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct GridOptions {
    /// Class prefix identifying boxes (`target`).
    pub target: Option<String>,
    /// Inner content selector (`inner`).
    pub inner: Option<String>,
    /// Span separator (`scalesplit`).
    pub scale_split: Option<String>,
    /// Cell width (`width`).
    pub width: Option<Dimension>,
    /// Cell height in pixels (`height`).
    pub height: Option<f64>,
    /// Gutter (`space`).
    pub space: Option<Dimension>,
    /// Animation duration in ms (`speed`).
    pub speed: Option<u32>,
    /// Poll interval in ms (`duration`).
    pub duration: Option<u32>,
    /// Overflow policy (`overflow`).
    pub overflow: Option<Overflow>,
}

impl GridOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge onto [`GridConfig::default()`].
    pub fn to_config(&self) -> GridConfig {
        self.apply(GridConfig::default())
    }

    /// Merge onto an existing configuration; unset options keep its values.
    pub fn apply(&self, mut config: GridConfig) -> GridConfig {
        if let Some(target) = &self.target {
            config.target.clone_from(target);
        }
        if let Some(inner) = &self.inner {
            config.inner.clone_from(inner);
        }
        if let Some(split) = &self.scale_split {
            config.scale_split.clone_from(split);
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(space) = self.space {
            config.space = space;
        }
        if let Some(speed) = self.speed {
            config.speed_ms = speed;
        }
        if let Some(duration) = self.duration {
            config.poll_interval_ms = duration;
        }
        if let Some(overflow) = self.overflow {
            config.overflow = overflow;
        }
        config
    }
}
