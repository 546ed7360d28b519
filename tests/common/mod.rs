//! Shared integration test helpers for focus-flash.
//!
//! This module provides scripted host and scheduler doubles used across the
//! `tests/` integration test suite. Both record every call the engine makes,
//! so tests can assert on override and timer bookkeeping as well as on the
//! controller's own state.
//!
//! # Usage
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{TestHost, TestScheduler, dracula_background};
//! ```
//!
//! Note: Rust integration tests use `mod common;` (not `use`) to bring in
//! helpers from `tests/common/mod.rs`. The `#[allow(dead_code)]` attributes
//! suppress warnings when only a subset of helpers are used per file.

#![allow(dead_code)]

use std::collections::HashMap;
use std::time::Duration;

use focus_flash::{OverrideId, Rgb, TickScheduler, TimerId, WindowHost, WindowId};

/// A typical dark-theme editor background (Dracula), in 16-bit channels.
pub fn dracula_background() -> Rgb {
    Rgb::new(10280, 10794, 13878)
}

/// One scripted window inside a [`TestHost`].
#[derive(Debug, Clone)]
pub struct TestWindow {
    pub live: bool,
    pub secondary: bool,
    pub background: Rgb,
    pub identity: String,
    /// Overrides currently applied to this window's content.
    pub overrides: Vec<(OverrideId, String)>,
}

impl TestWindow {
    pub fn new(background: Rgb, identity: &str) -> Self {
        Self {
            live: true,
            secondary: false,
            background,
            identity: identity.to_string(),
            overrides: Vec::new(),
        }
    }
}

/// Scripted window host.
///
/// Windows are added up front; tests mutate `windows` directly to simulate
/// death, identity changes, etc. Every override application and removal is
/// recorded for assertions.
#[derive(Debug)]
pub struct TestHost {
    pub windows: HashMap<WindowId, TestWindow>,
    pub dark: bool,
    next_override: u64,
    /// Log of every applied override: (window, color string).
    pub applied: Vec<(WindowId, String)>,
    /// Log of every removal request the engine made.
    pub removed: Vec<(WindowId, OverrideId)>,
}

impl TestHost {
    /// A dark-theme host with no windows.
    pub fn new() -> Self {
        Self {
            windows: HashMap::new(),
            dark: true,
            next_override: 0,
            applied: Vec::new(),
            removed: Vec::new(),
        }
    }

    /// A dark-theme host with `n` live primary windows, ids 1..=n, all with
    /// the Dracula background and identities "buffer-1".."buffer-n".
    pub fn with_windows(n: u64) -> Self {
        let mut host = Self::new();
        for i in 1..=n {
            host.windows.insert(
                WindowId(i),
                TestWindow::new(dracula_background(), &format!("buffer-{i}")),
            );
        }
        host
    }

    /// Mark a window dead without removing it from the map, so the host
    /// still answers (negatively) for it.
    pub fn kill_window(&mut self, window: WindowId) {
        if let Some(w) = self.windows.get_mut(&window) {
            w.live = false;
            // A dead window's content and overrides are gone with it
            w.overrides.clear();
        }
    }

    /// Number of overrides currently applied to `window`.
    pub fn override_count(&self, window: WindowId) -> usize {
        self.windows.get(&window).map_or(0, |w| w.overrides.len())
    }

    /// The color string of the single active override on `window`, if any.
    pub fn active_override_color(&self, window: WindowId) -> Option<String> {
        self.windows
            .get(&window)
            .and_then(|w| w.overrides.last())
            .map(|(_, color)| color.clone())
    }
}

impl WindowHost for TestHost {
    fn is_window_live(&self, window: WindowId) -> bool {
        self.windows.get(&window).is_some_and(|w| w.live)
    }

    fn window_count(&self) -> usize {
        self.windows.values().filter(|w| w.live).count()
    }

    fn is_secondary_window(&self, window: WindowId) -> bool {
        self.windows.get(&window).is_some_and(|w| w.secondary)
    }

    fn dark_theme(&self) -> bool {
        self.dark
    }

    fn background_color(&self, window: WindowId) -> Option<Rgb> {
        self.windows
            .get(&window)
            .filter(|w| w.live)
            .map(|w| w.background)
    }

    fn content_identity(&self, window: WindowId) -> Option<String> {
        self.windows
            .get(&window)
            .filter(|w| w.live)
            .map(|w| w.identity.clone())
    }

    fn apply_color_override(&mut self, window: WindowId, color: &str) -> Option<OverrideId> {
        if !self.is_window_live(window) {
            return None;
        }
        self.next_override += 1;
        let id = OverrideId(self.next_override);
        if let Some(w) = self.windows.get_mut(&window) {
            w.overrides.push((id, color.to_string()));
        }
        self.applied.push((window, color.to_string()));
        Some(id)
    }

    fn remove_color_override(&mut self, window: WindowId, override_id: OverrideId) {
        self.removed.push((window, override_id));
        if let Some(w) = self.windows.get_mut(&window) {
            w.overrides.retain(|(id, _)| *id != override_id);
        }
    }
}

/// Scripted scheduler.
///
/// Records armed and cancelled timers; tests drive ticks by calling
/// `FlashController::on_tick` directly for the window they care about.
#[derive(Debug)]
pub struct TestScheduler {
    next_timer: u64,
    /// Timers currently armed: id -> (window, period).
    pub active: HashMap<TimerId, (WindowId, Duration)>,
    /// Log of every schedule request.
    pub scheduled: Vec<(TimerId, WindowId, Duration)>,
    /// Log of every cancel request.
    pub cancelled: Vec<TimerId>,
}

impl TestScheduler {
    pub fn new() -> Self {
        Self {
            next_timer: 0,
            active: HashMap::new(),
            scheduled: Vec::new(),
            cancelled: Vec::new(),
        }
    }

    /// Number of timers currently armed.
    pub fn active_timer_count(&self) -> usize {
        self.active.len()
    }

    /// Number of timers currently armed for `window`.
    pub fn timers_for(&self, window: WindowId) -> usize {
        self.active.values().filter(|(w, _)| *w == window).count()
    }

    /// Period of an armed timer for `window`, if any.
    pub fn period_for(&self, window: WindowId) -> Option<Duration> {
        self.active
            .values()
            .find(|(w, _)| *w == window)
            .map(|(_, period)| *period)
    }
}

impl TickScheduler for TestScheduler {
    fn schedule_repeating(&mut self, window: WindowId, period: Duration) -> TimerId {
        self.next_timer += 1;
        let id = TimerId(self.next_timer);
        self.active.insert(id, (window, period));
        self.scheduled.push((id, window, period));
        id
    }

    fn cancel(&mut self, timer: TimerId) {
        self.active.remove(&timer);
        self.cancelled.push(timer);
    }
}
