//! Flash controller: per-window animation lifecycle.
//!
//! This module owns all mutable flash state. The host notifies it of focus
//! changes and timer ticks; it decides whether to flash, steps active
//! animations, and guarantees at most one active animation (one timer, one
//! color override) per window, with full cleanup on completion, window
//! death, re-trigger, or disable.

use std::collections::HashMap;
use std::time::Duration;

use focus_flash_config::FlashConfig;
use regex::Regex;

use crate::color::{FlashDirection, Rgb, shift_color};
use crate::easing::{ease_out_frames, frame_count};
use crate::host::{OverrideId, TickScheduler, TimerId, WindowHost, WindowId};

/// State of one in-flight flash. Exists only while the flash is active.
///
/// Invariant: `override_id` and `timer` are both `Some` for the whole time
/// the state sits in the controller's map; teardown clears both before the
/// state is dropped.
#[derive(Debug)]
struct AnimationState {
    /// The window this flash belongs to.
    window: WindowId,
    /// Resting background color captured once at flash start.
    baseline: Rgb,
    /// Shift direction captured once at flash start (theme changes mid-flash
    /// do not alter a running animation).
    direction: FlashDirection,
    /// Peak shift magnitude captured at flash start.
    brightness: u8,
    /// Precomputed intensity fractions, full intensity first, 0.0 last.
    frames: Vec<f64>,
    /// Current position in `frames`; monotonically increasing.
    frame_index: usize,
    /// The currently applied color override on the window's content.
    override_id: Option<OverrideId>,
    /// The repeating timer driving this animation.
    timer: Option<TimerId>,
}

/// Returns true if `identity` matches any of the exclusion `patterns`,
/// signalling that no flash should be started for that window.
///
/// Patterns are regexes; first match wins and order does not matter. A
/// pattern that fails to compile is logged and skipped rather than
/// suppressing (or failing) the flash.
pub fn should_skip(identity: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| match Regex::new(pattern) {
        Ok(re) => re.is_match(identity),
        Err(e) => {
            log::warn!("Ignoring invalid exclusion pattern '{pattern}': {e}");
            false
        }
    })
}

/// Drives background-color flash animations across windows.
///
/// One controller instance serves the whole host; per-window state lives in
/// an internal map keyed by [`WindowId`]. All methods take `&mut self`, so
/// transitions for any window are strictly serialized.
#[derive(Debug)]
pub struct FlashController {
    config: FlashConfig,
    /// Whether the feature reacts to focus changes at all.
    enabled: bool,
    /// The window we last saw gain focus, used to detect spurious
    /// re-notifications. Reset to `None` when the feature is disabled.
    last_focused: Option<WindowId>,
    animations: HashMap<WindowId, AnimationState>,
}

impl FlashController {
    /// Create an enabled controller with the given configuration.
    pub fn new(config: FlashConfig) -> Self {
        Self {
            config,
            enabled: true,
            last_focused: None,
            animations: HashMap::new(),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &FlashConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// Animations already in flight keep the parameters they were started
    /// with; the new config applies from the next flash.
    pub fn set_config(&mut self, config: FlashConfig) {
        self.config = config;
    }

    /// Whether a flash is currently animating on `window`.
    pub fn is_animating(&self, window: WindowId) -> bool {
        self.animations.contains_key(&window)
    }

    /// Number of windows with an active flash.
    pub fn active_flash_count(&self) -> usize {
        self.animations.len()
    }

    /// Enable or disable the feature.
    ///
    /// Disabling cancels every active flash and clears the last-focused
    /// tracker, so re-enabling starts from a clean slate (the next focus
    /// change flashes even if it lands on the window that was focused when
    /// the feature went dark).
    pub fn set_enabled(
        &mut self,
        host: &mut dyn WindowHost,
        sched: &mut dyn TickScheduler,
        enabled: bool,
    ) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if enabled {
            log::info!("Focus flash enabled");
        } else {
            log::info!(
                "Focus flash disabled; clearing {} active flash(es)",
                self.animations.len()
            );
            self.cleanup_all(host, sched);
            self.last_focused = None;
        }
    }

    /// Whether the feature is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// React to the host reporting that `window` became the focused window.
    ///
    /// Applies the full gate chain before flashing: disabled feature,
    /// spurious re-notification of the already-focused window, single-window
    /// hosts, secondary/prompt-type windows (when configured), exclusion
    /// patterns matched against the newly focused window's content identity,
    /// and windows that died or have no readable background. Suppressed
    /// flashes still update the last-focused tracker: the focus change was
    /// real even if it is not decorated.
    pub fn on_focus_changed(
        &mut self,
        host: &mut dyn WindowHost,
        sched: &mut dyn TickScheduler,
        window: WindowId,
    ) {
        if !self.enabled {
            return;
        }
        if self.last_focused == Some(window) {
            log::debug!("Focus notification for already-focused {window:?}, skipping");
            return;
        }
        self.last_focused = Some(window);

        if host.window_count() <= 1 {
            log::debug!("Only one window open, skipping flash");
            return;
        }
        if self.config.ignore_secondary_focus && host.is_secondary_window(window) {
            log::debug!("{window:?} is a secondary window, skipping flash");
            return;
        }
        if let Some(identity) = host.content_identity(window)
            && should_skip(&identity, &self.config.excluded_content_patterns)
        {
            log::debug!("Content '{identity}' matches an exclusion pattern, skipping flash");
            return;
        }
        if !host.is_window_live(window) {
            log::debug!("{window:?} is no longer live, skipping flash");
            return;
        }
        let Some(baseline) = host.background_color(window) else {
            log::debug!("No readable background color for {window:?}, skipping flash");
            return;
        };

        self.start_flash(host, sched, window, baseline);
    }

    /// Start a flash on `window` animating away from `baseline`.
    ///
    /// Any flash already active on the window is fully cleaned up first, so
    /// rapid re-triggering never stacks timers or overrides. Frame 0's
    /// color is applied immediately, with no visible delay between the
    /// trigger and the peak of the flash, and one repeating timer is armed
    /// to drive the fade.
    ///
    /// A `brightness` of 0 would animate invisibly, so it starts nothing.
    pub fn start_flash(
        &mut self,
        host: &mut dyn WindowHost,
        sched: &mut dyn TickScheduler,
        window: WindowId,
        baseline: Rgb,
    ) {
        // Mandatory cleanup-before-restart: a re-trigger must behave like
        // Animating -> Idle -> Animating.
        self.cleanup(host, sched, window);

        let brightness = self.config.brightness;
        if brightness == 0 {
            log::debug!("Flash brightness is 0, not starting a flash");
            return;
        }

        let frames = ease_out_frames(frame_count(self.config.duration, self.config.step_interval));
        let direction = FlashDirection::for_dark_theme(host.dark_theme());

        // Frame 0 is full intensity
        let peak = shift_color(baseline, brightness, direction);
        let Some(override_id) = host.apply_color_override(window, &peak.to_hex()) else {
            log::warn!("Could not apply flash override on {window:?}, not starting a flash");
            return;
        };

        let timer = sched.schedule_repeating(
            window,
            Duration::from_secs_f64(self.config.step_interval),
        );
        log::debug!(
            "Flash started on {window:?}: {} frames, baseline {}, peak {}",
            frames.len(),
            baseline.to_hex(),
            peak.to_hex()
        );

        self.animations.insert(
            window,
            AnimationState {
                window,
                baseline,
                direction,
                brightness,
                frames,
                frame_index: 0,
                override_id: Some(override_id),
                timer: Some(timer),
            },
        );
    }

    /// Advance the flash on `window` by one frame.
    ///
    /// Called by the host glue each time the window's repeating timer
    /// fires. A tick for a window with no active flash is ignored (the
    /// scheduler contract makes this unreachable after a cancel, but the
    /// controller stays robust to it).
    pub fn on_tick(
        &mut self,
        host: &mut dyn WindowHost,
        sched: &mut dyn TickScheduler,
        window: WindowId,
    ) {
        let Some(mut state) = self.animations.remove(&window) else {
            log::debug!("Tick for {window:?} with no active flash, ignoring");
            return;
        };

        // Liveness first: never touch a dead window's content.
        if !host.is_window_live(window) {
            log::debug!("{window:?} died mid-flash, cancelling");
            Self::teardown(host, sched, &mut state, false);
            return;
        }

        state.frame_index += 1;
        if state.frame_index >= state.frames.len() {
            // Normal termination: removing the override restores baseline.
            log::debug!("Flash on {window:?} complete");
            Self::teardown(host, sched, &mut state, true);
            return;
        }

        // Replace the previous override with this frame's color.
        if let Some(prev) = state.override_id.take() {
            host.remove_color_override(window, prev);
        }
        let fraction = state.frames[state.frame_index];
        let shift_units = (f64::from(state.brightness) * fraction).round() as u8;
        let color = shift_color(state.baseline, shift_units, state.direction);
        state.override_id = host.apply_color_override(window, &color.to_hex());
        if state.override_id.is_none() {
            log::warn!("Could not re-apply flash override on {window:?}, cancelling");
            Self::teardown(host, sched, &mut state, false);
            return;
        }

        self.animations.insert(window, state);
    }

    /// Cancel any active flash on `window` and clear its state.
    ///
    /// Idempotent: calling this on a window with no active flash is a
    /// no-op. The color override is only removed when the window is still
    /// live; a dead window's override died with it and is simply forgotten.
    pub fn cleanup(
        &mut self,
        host: &mut dyn WindowHost,
        sched: &mut dyn TickScheduler,
        window: WindowId,
    ) {
        if let Some(mut state) = self.animations.remove(&window) {
            let live = host.is_window_live(window);
            Self::teardown(host, sched, &mut state, live);
            log::debug!("Cleaned up flash state for {window:?}");
        }
    }

    /// Cancel every active flash.
    pub fn cleanup_all(&mut self, host: &mut dyn WindowHost, sched: &mut dyn TickScheduler) {
        let windows: Vec<WindowId> = self.animations.keys().copied().collect();
        for window in windows {
            self.cleanup(host, sched, window);
        }
    }

    /// Release a state's resources: cancel its timer and, when the window
    /// is still live, remove its color override.
    fn teardown(
        host: &mut dyn WindowHost,
        sched: &mut dyn TickScheduler,
        state: &mut AnimationState,
        window_live: bool,
    ) {
        if let Some(timer) = state.timer.take() {
            sched.cancel(timer);
        }
        if let Some(override_id) = state.override_id.take()
            && window_live
        {
            host.remove_color_override(state.window, override_id);
        }
    }
}
