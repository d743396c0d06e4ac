use std::time::Duration;

use super::geometry::Axis;

/// Thresholds and policies for one reorderable list.
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderConfig {
    /// How long a press must be held before it arms a drag (default: 400ms).
    pub long_press: Duration,
    /// Pointer travel in pixels tolerated while waiting to arm (default: 8.0).
    pub slop: f32,
    /// Direction the list stacks its items in (default: vertical).
    pub axis: Axis,
    /// Skip the owner call when a drag ends where it started (default: false).
    pub skip_noop_commit: bool,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            long_press: Duration::from_millis(400),
            slop: 8.0,
            axis: Axis::Vertical,
            skip_noop_commit: false,
        }
    }
}

impl ReorderConfig {
    pub fn with_long_press(mut self, long_press: Duration) -> Self {
        self.long_press = long_press;
        self
    }

    pub fn with_slop(mut self, slop: f32) -> Self {
        self.slop = slop.max(0.0);
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_skip_noop_commit(mut self, skip: bool) -> Self {
        self.skip_noop_commit = skip;
        self
    }

    pub(crate) fn long_press_ms(&self) -> f64 {
        self.long_press.as_secs_f64() * 1000.0
    }
}
