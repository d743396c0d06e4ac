//! Long-press trigger - arms a drag once a press is held still long enough
//!
//! `Idle -> Pressed -> Armed`. Moving past the slop while pressed, or
//! releasing before the threshold, returns to `Idle`; the press was a tap
//! or a scroll, not a drag.

use super::config::ReorderConfig;
use super::geometry::Point;

#[derive(Debug, Clone, PartialEq)]
pub enum PressState<K> {
    Idle,
    Pressed { item: K, origin: Point, current: Point, at: f64 },
    Armed { item: K, anchor: Point },
}

/// Emitted when a press crosses the threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct Armed<K> {
    pub item: K,
    /// Pointer position when the press armed; the affordance hangs off it.
    pub anchor: Point,
    pub at: f64,
}

#[derive(Debug, Clone)]
pub struct LongPressTrigger<K> {
    threshold_ms: f64,
    slop: f32,
    state: PressState<K>,
}

impl<K: Clone> LongPressTrigger<K> {
    pub fn new(threshold_ms: f64, slop: f32) -> Self {
        Self {
            threshold_ms: threshold_ms.max(0.0),
            slop,
            state: PressState::Idle,
        }
    }

    pub fn from_config(config: &ReorderConfig) -> Self {
        Self::new(config.long_press_ms(), config.slop)
    }

    pub fn state(&self) -> &PressState<K> {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, PressState::Idle)
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self.state, PressState::Pressed { .. })
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, PressState::Armed { .. })
    }

    /// Item under the current press or armed drag
    pub fn item(&self) -> Option<&K> {
        match &self.state {
            PressState::Idle => None,
            PressState::Pressed { item, .. } | PressState::Armed { item, .. } => Some(item),
        }
    }

    /// Start a press. Returns false if one is already in progress.
    pub fn press(&mut self, item: K, point: Point, at: f64) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.state = PressState::Pressed { item, origin: point, current: point, at };
        true
    }

    /// Track pointer travel while pressed. Returns false if the press was
    /// abandoned because the pointer wandered past the slop.
    pub fn moved(&mut self, point: Point) -> bool {
        let PressState::Pressed { origin, current, .. } = &mut self.state else {
            return true;
        };
        if origin.distance(&point) <= self.slop {
            *current = point;
            return true;
        }
        self.state = PressState::Idle;
        false
    }

    /// Arm the press if it has been held for the threshold by `now`.
    pub fn poll(&mut self, now: f64) -> Option<Armed<K>> {
        let PressState::Pressed { item, current, at, .. } = &self.state else {
            return None;
        };
        if now - *at < self.threshold_ms {
            return None;
        }
        let armed = Armed { item: item.clone(), anchor: *current, at: now };
        self.state = PressState::Armed { item: armed.item.clone(), anchor: armed.anchor };
        Some(armed)
    }

    /// Back to idle, returning the state that was left.
    pub fn release(&mut self) -> PressState<K> {
        std::mem::replace(&mut self.state, PressState::Idle)
    }
}
