//! focus-flash: a per-window focus-flash animation engine.
//!
//! When a window in a multi-window editing environment gains focus, its
//! background color is shifted away from its resting value and eased back
//! to baseline over a short, configurable duration: a transient visual cue
//! of which window just became active.
//!
//! The engine is host-agnostic and event-driven. The host supplies two
//! capabilities ([`WindowHost`] for window/presentation access and
//! [`TickScheduler`] for repeating timers) and forwards two kinds of events
//! ([`FlashController::on_focus_changed`] and [`FlashController::on_tick`]).
//! Everything else lives here: frame sequencing, the ease-out curve,
//! theme-aware color shifting, and per-window lifecycle and cancellation.
//!
//! ```no_run
//! use focus_flash::{FlashConfig, FlashController, WindowId};
//!
//! # fn demo(host: &mut dyn focus_flash::WindowHost,
//! #         sched: &mut dyn focus_flash::TickScheduler) {
//! let mut controller = FlashController::new(FlashConfig::default());
//! // Host glue: on every focus change...
//! controller.on_focus_changed(host, sched, WindowId(1));
//! // ...and on every timer tick armed for a window:
//! controller.on_tick(host, sched, WindowId(1));
//! # }
//! ```

pub mod color;
pub mod controller;
pub mod easing;
pub mod host;

// Re-export main types for convenience
pub use color::{FlashDirection, Rgb, shift_color};
pub use controller::{FlashController, should_skip};
pub use easing::{ease_out_frames, frame_count};
pub use host::{OverrideId, TickScheduler, TimerId, WindowHost, WindowId};

// Re-export the config crate's types so hosts only need one import path.
pub use focus_flash_config::{ConfigError, FlashConfig};
