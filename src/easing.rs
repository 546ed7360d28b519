//! Frame sequencing for the flash animation.
//!
//! The flash steps through a precomputed table of intensity fractions
//! rather than sampling a curve against wall-clock time: ticks are
//! discrete, and a fixed table makes cancellation and restart trivial to
//! reason about (the current frame is just an index).

/// Number of animation frames for a flash of `duration` seconds stepped
/// every `step_interval` seconds.
///
/// `round(duration / step_interval)`, clamped to a minimum of 2 so the
/// ease-out curve always has a full-intensity first frame and a baseline
/// last frame (and its denominator never hits zero).
pub fn frame_count(duration: f64, step_interval: f64) -> usize {
    let n = (duration / step_interval).round();
    if n.is_finite() && n >= 2.0 {
        n as usize
    } else {
        2
    }
}

/// Intensity fractions for an `n`-frame quadratic ease-out.
///
/// Frame `i` gets `((n-1-i) / (n-1))^2`: frame 0 is 1.0 (full intensity),
/// the last frame is 0.0 (baseline), and the sequence decelerates (large
/// drops early, small drops late) so the flash reads as a pop followed by
/// a slow fade rather than a linear dim.
///
/// `n` is clamped to a minimum of 2; callers normally obtain it from
/// [`frame_count`], which already enforces that.
pub fn ease_out_frames(n: usize) -> Vec<f64> {
    let n = n.max(2);
    let last = (n - 1) as f64;
    (0..n)
        .map(|i| {
            let remaining = (n - 1 - i) as f64 / last;
            remaining * remaining
        })
        .collect()
}
