//! Resize settle detection.
//!
//! A drag-resize produces a burst of notifications. Instead of re-laying out
//! on each one, the grid stops listening, polls the container width at a
//! fixed interval, and re-lays out once two consecutive polls see the same
//! width.
//!
//! The decision logic is a pure [`transition`] function; the
//! [`controller`](crate::controller) carries out the returned [`Effect`]s.
//!
//! ```
//! use zensquare::resize::{Effect, ResizeEvent, ResizeState, transition};
//!
//! let (s, fx) = transition(ResizeState::Idle, ResizeEvent::Resized { width: 800.0 });
//! assert_eq!(fx, [Effect::Unsubscribe, Effect::StartPolling]);
//! let (s, fx) = transition(s, ResizeEvent::Tick { width: 640.0 });
//! assert!(fx.is_empty());
//! let (s, fx) = transition(s, ResizeEvent::Tick { width: 640.0 });
//! assert_eq!(s, ResizeState::Idle);
//! assert_eq!(fx, [Effect::StopPolling, Effect::Subscribe, Effect::Relayout]);
//! ```

/// Where the grid is in the resize cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum ResizeState {
    /// Listening for resize notifications.
    #[default]
    Idle,
    /// Polling until the container width stops changing.
    Watching {
        /// Width seen at the previous poll (or at the notification).
        last_width: f64,
    },
    /// Torn down. Every event is ignored.
    Disabled,
}

impl ResizeState {
    /// Whether resize notifications should currently be delivered.
    pub const fn is_listening(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether the poll timer should currently be running.
    pub const fn is_polling(&self) -> bool {
        matches!(self, Self::Watching { .. })
    }

    /// Whether the grid has been destroyed.
    pub const fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }
}

/// Input to the state machine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResizeEvent {
    /// The platform reported a resize; `width` is the container width now.
    Resized {
        /// Container width in pixels.
        width: f64,
    },
    /// The poll timer fired; `width` is the container width now.
    Tick {
        /// Container width in pixels.
        width: f64,
    },
    /// Tear down.
    Destroy,
}

/// Side effect requested by a transition, in execution order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Stop delivering resize notifications.
    Unsubscribe,
    /// Start delivering resize notifications.
    Subscribe,
    /// Start the poll timer at the configured interval.
    StartPolling,
    /// Cancel the poll timer.
    StopPolling,
    /// Run an animated re-layout.
    Relayout,
    /// Remove all styling applied by the grid.
    ClearStyles,
}

const NONE: &[Effect] = &[];
const START_WATCHING: &[Effect] = &[Effect::Unsubscribe, Effect::StartPolling];
const SETTLED: &[Effect] = &[Effect::StopPolling, Effect::Subscribe, Effect::Relayout];
const DESTROY_IDLE: &[Effect] = &[Effect::Unsubscribe, Effect::ClearStyles];
const DESTROY_WATCHING: &[Effect] = &[Effect::StopPolling, Effect::ClearStyles];

/// Advance the state machine by one event.
///
/// Events that cannot happen in a state (a tick while idle, a notification
/// while polling) leave the state unchanged and request nothing. A tick
/// reporting a non-finite width settles immediately, since it can never
/// match the previous sample.
pub fn transition(state: ResizeState, event: ResizeEvent) -> (ResizeState, &'static [Effect]) {
    use ResizeEvent::*;
    use ResizeState::*;

    match (state, event) {
        (Disabled, _) => (Disabled, NONE),
        (Idle, Destroy) => (Disabled, DESTROY_IDLE),
        (Watching { .. }, Destroy) => (Disabled, DESTROY_WATCHING),
        (Idle, Resized { width }) => (Watching { last_width: width }, START_WATCHING),
        (Idle, Tick { .. }) => (Idle, NONE),
        (Watching { last_width }, Tick { width }) if width == last_width || !width.is_finite() => {
            (Idle, SETTLED)
        }
        (Watching { .. }, Tick { width }) => (Watching { last_width: width }, NONE),
        (watching @ Watching { .. }, Resized { .. }) => (watching, NONE),
    }
}
