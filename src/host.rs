//! Host collaborator traits.
//!
//! The engine never touches a real display, theme, or event loop. The host
//! embedding it implements two small capabilities:
//!
//! - [`WindowHost`] answers questions about windows (liveness, theme,
//!   background color, content identity) and applies/removes temporary
//!   background-color overrides on a window's content.
//! - [`TickScheduler`] arms and cancels the repeating timers that drive
//!   animation frames. The host's event loop calls back into
//!   `FlashController::on_tick` each time an armed timer fires.
//!
//! Keeping both behind traits means the controller and the color math are
//! testable without a display or a timer wheel.

use std::time::Duration;

use crate::color::Rgb;

/// Opaque identifier for a host window.
///
/// Not owned by the engine; the window it names may die at any time, which
/// is why every tick re-checks liveness before touching content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u64);

/// Opaque token for a color override applied to a window's content.
///
/// Returned by [`WindowHost::apply_color_override`] so the engine can
/// replace or remove the override later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverrideId(pub u64);

/// Opaque token for an armed repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Window and presentation capabilities the engine needs from its host.
pub trait WindowHost {
    /// Whether `window` still refers to a live window.
    fn is_window_live(&self, window: WindowId) -> bool;

    /// Total number of windows currently open in the host.
    fn window_count(&self) -> usize;

    /// Whether `window` is a secondary/prompt-type window (command prompt,
    /// popup) rather than a primary editing window.
    fn is_secondary_window(&self, window: WindowId) -> bool;

    /// Whether the active theme is classified dark.
    fn dark_theme(&self) -> bool;

    /// The resting background color of `window`, or `None` if it cannot be
    /// read (e.g. the window died).
    fn background_color(&self, window: WindowId) -> Option<Rgb>;

    /// The name/identity of the content shown in `window` (e.g. a buffer
    /// name), used for exclusion-pattern matching.
    fn content_identity(&self, window: WindowId) -> Option<String>;

    /// Apply a temporary background-color override (a `#rrggbb` string) to
    /// `window`'s content. Returns `None` if the override could not be
    /// applied (e.g. the window died mid-call); the engine absorbs that.
    fn apply_color_override(&mut self, window: WindowId, color: &str) -> Option<OverrideId>;

    /// Remove a previously applied override. Must tolerate the override
    /// already being gone (its window may have died).
    fn remove_color_override(&mut self, window: WindowId, override_id: OverrideId);
}

/// Repeating-timer capability the engine needs from its host event loop.
///
/// The host is expected to call `FlashController::on_tick` for the
/// associated window every `period` until the timer is cancelled.
pub trait TickScheduler {
    /// Arm a repeating timer firing every `period` for `window`.
    fn schedule_repeating(&mut self, window: WindowId, period: Duration) -> TimerId;

    /// Cancel an armed timer. Cancellation is synchronous: once this
    /// returns, no further tick for `timer` may be delivered, even if one
    /// was already due.
    fn cancel(&mut self, timer: TimerId);
}
