//! Grid controller: drives layout passes and resize handling against a
//! surface.
//!
//! The controller never touches a UI directly. Box discovery, style writes
//! and animation go through a [`Surface`]; resize notifications and the poll
//! timer go through a [`ResizeSubscription`]. The host forwards platform
//! callbacks to [`Grid::on_resize`] and [`Grid::on_tick`].

use alloc::string::String;
use alloc::vec::Vec;

use tracing::{debug, warn};

use crate::layout::{GridConfig, GridItem, GridLayout, LayoutError, inner_content_height};
use crate::resize::{Effect, ResizeEvent, ResizeState, transition};

/// How a style change should be applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Set immediately.
    Immediate,
    /// Animate from the current value, cancelling any animation in flight.
    Animated {
        /// Animation duration in milliseconds.
        duration_ms: u32,
    },
}

impl Transition {
    /// Animated over `duration_ms`, or immediate when the duration is zero.
    pub const fn over(duration_ms: u32) -> Self {
        if duration_ms == 0 {
            Self::Immediate
        } else {
            Self::Animated { duration_ms }
        }
    }
}

/// The UI layer that owns the container and its boxes.
pub trait Surface {
    /// Opaque handle to a box.
    type BoxId: Copy;

    /// Current container width in pixels.
    fn container_width(&self) -> f64;

    /// Descendants of the container whose class attribute starts with
    /// `prefix`, in document order.
    fn discover(&self, prefix: &str) -> Vec<Self::BoxId>;

    /// Class attribute of a box.
    fn class_attr(&self, id: Self::BoxId) -> String;

    /// Make the container a positioning context and take the boxes out of
    /// normal flow.
    fn attach(&mut self, boxes: &[Self::BoxId]);

    /// Set the pixel size of a box.
    fn set_box_size(&mut self, id: Self::BoxId, width: f64, height: f64);

    /// Vertical padding plus border of the box's inner content element, or
    /// `None` when the box has no element matching `selector`.
    fn inner_chrome(&self, id: Self::BoxId, selector: &str) -> Option<f64>;

    /// Set the content height of the box's inner element.
    fn set_inner_height(&mut self, id: Self::BoxId, selector: &str, height: f64);

    /// Move a box to a pixel offset within the container.
    fn move_box(&mut self, id: Self::BoxId, x: f64, y: f64, transition: Transition);

    /// Set the container height.
    fn set_container_height(&mut self, height: f64, transition: Transition);

    /// Remove every style written by the grid from the container and boxes.
    fn clear_styles(&mut self, boxes: &[Self::BoxId]);
}

/// Resize notifications and the poll timer for one grid.
///
/// Each grid owns its subscription; nothing is shared between grids.
pub trait ResizeSubscription {
    /// Start delivering resize notifications to [`Grid::on_resize`].
    fn subscribe(&mut self);
    /// Stop delivering resize notifications.
    fn unsubscribe(&mut self);
    /// Start calling [`Grid::on_tick`] every `interval_ms`.
    fn start_polling(&mut self, interval_ms: u32);
    /// Cancel the poll timer.
    fn stop_polling(&mut self);
}

/// A square grid bound to one container.
pub struct Grid<S: Surface, R: ResizeSubscription> {
    config: GridConfig,
    surface: S,
    subscription: R,
    boxes: Vec<S::BoxId>,
    state: ResizeState,
    layout: Option<GridLayout<S::BoxId>>,
}

impl<S: Surface, R: ResizeSubscription> Grid<S, R> {
    /// Discover boxes, apply the initial layout without animation, and start
    /// listening for resizes.
    ///
    /// The layout is computed before anything is written, so a failed
    /// initialization leaves the surface untouched.
    pub fn init(surface: S, subscription: R, config: GridConfig) -> Result<Self, LayoutError> {
        let boxes = surface.discover(&config.target);
        debug!(boxes = boxes.len(), target = %config.target, "initializing grid");

        let mut grid = Self {
            config,
            surface,
            subscription,
            boxes,
            state: ResizeState::Idle,
            layout: None,
        };
        let layout = grid.compute()?;
        grid.surface.attach(&grid.boxes);
        grid.commit(layout, Transition::Immediate);
        grid.subscription.subscribe();
        Ok(grid)
    }

    /// Lay out every box for the current container width and apply the
    /// result. Sizes are always set immediately; positions and the container
    /// height use `transition`.
    ///
    /// Returns `Ok(None)` without touching the surface once the grid has
    /// been destroyed. On error the previous layout stays applied.
    pub fn relayout(
        &mut self,
        transition: Transition,
    ) -> Result<Option<&GridLayout<S::BoxId>>, LayoutError> {
        if self.state.is_disabled() {
            return Ok(None);
        }
        let layout = self.compute()?;
        Ok(Some(self.commit(layout, transition)))
    }

    fn compute(&self) -> Result<GridLayout<S::BoxId>, LayoutError> {
        let width = self.surface.container_width();
        let items: Vec<_> = self
            .boxes
            .iter()
            .map(|&id| GridItem::new(id, self.config.span_of(&self.surface.class_attr(id))))
            .collect();

        let layout = self.config.compute(&items, width)?;
        debug!(
            width,
            capacity = layout.capacity,
            height = layout.total_height,
            "computed layout"
        );
        Ok(layout)
    }

    fn commit(
        &mut self,
        layout: GridLayout<S::BoxId>,
        transition: Transition,
    ) -> &GridLayout<S::BoxId> {
        for placed in &layout.boxes {
            let rect = placed.rect;
            self.surface.set_box_size(placed.id, rect.width, rect.height);
            if let Some(chrome) = self.surface.inner_chrome(placed.id, &self.config.inner) {
                let inner = inner_content_height(rect.height, chrome);
                self.surface
                    .set_inner_height(placed.id, &self.config.inner, inner);
            }
            self.surface.move_box(placed.id, rect.x, rect.y, transition);
        }
        self.surface
            .set_container_height(layout.total_height, transition);

        self.layout.insert(layout)
    }

    /// Handle a resize notification from the subscription.
    pub fn on_resize(&mut self) -> Result<(), LayoutError> {
        let width = self.surface.container_width();
        self.dispatch(ResizeEvent::Resized { width })
    }

    /// Handle a poll tick from the subscription.
    pub fn on_tick(&mut self) -> Result<(), LayoutError> {
        let width = self.surface.container_width();
        self.dispatch(ResizeEvent::Tick { width })
    }

    /// Stop polling and listening, and return the boxes to normal flow.
    ///
    /// Safe to call any number of times; later resize and tick callbacks are
    /// ignored.
    pub fn destroy(&mut self) {
        // Destroy never requests a re-layout, so it cannot fail.
        let _ = self.dispatch(ResizeEvent::Destroy);
    }

    /// Current resize state.
    pub fn state(&self) -> ResizeState {
        self.state
    }

    /// Most recently applied layout, if any.
    pub fn layout(&self) -> Option<&GridLayout<S::BoxId>> {
        self.layout.as_ref()
    }

    /// Configuration in use.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Boxes discovered at initialization, in packing order.
    pub fn boxes(&self) -> &[S::BoxId] {
        &self.boxes
    }

    /// The surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The surface, mutably (e.g. to change class lists between passes).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The resize subscription.
    pub fn subscription(&self) -> &R {
        &self.subscription
    }

    /// Take the collaborators back.
    pub fn into_parts(self) -> (S, R) {
        (self.surface, self.subscription)
    }

    fn dispatch(&mut self, event: ResizeEvent) -> Result<(), LayoutError> {
        let (next, effects) = transition(self.state, event);
        if next != self.state {
            debug!(from = ?self.state, to = ?next, "resize state");
        }
        self.state = next;

        let mut result = Ok(());
        for &effect in effects {
            match effect {
                Effect::Unsubscribe => self.subscription.unsubscribe(),
                Effect::Subscribe => self.subscription.subscribe(),
                Effect::StartPolling => self
                    .subscription
                    .start_polling(self.config.poll_interval_ms),
                Effect::StopPolling => self.subscription.stop_polling(),
                Effect::Relayout => {
                    if let Err(e) = self.relayout(Transition::over(self.config.speed_ms)) {
                        warn!(error = %e, "re-layout failed; keeping previous layout");
                        result = Err(e);
                    }
                }
                Effect::ClearStyles => {
                    self.surface.clear_styles(&self.boxes);
                    self.layout = None;
                }
            }
        }
        result
    }
}
