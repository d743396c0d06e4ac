//! Drag session - one drag from arming until it commits or is cancelled
//!
//! Holds the order snapshot taken when the press armed, the recorded
//! samples, the current target slot and the grab offset used to place the
//! floating affordance.

use super::gesture::PointerSample;
use super::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStatus {
    Armed,
    Active,
    Committed,
    Cancelled,
}

impl DragStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Committed | Self::Cancelled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Armed => "armed",
            Self::Active => "active",
            Self::Committed => "committed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// State of one drag, from arming until it commits or is cancelled.
///
/// The session keeps the order as it was when the press armed; targets
/// are resolved and the final permutation is computed against that
/// snapshot, never against a list that moves under the pointer.
#[derive(Debug, Clone)]
pub struct DragSession<K> {
    item: K,
    origin: usize,
    order: Vec<K>,
    samples: Vec<PointerSample>,
    target: usize,
    status: DragStatus,
    pointer: Point,
    grab: Point,
}

impl<K: Clone> DragSession<K> {
    /// `grab` is the pointer's offset from the item's top-left corner.
    pub fn new(item: K, origin: usize, order: Vec<K>, anchor: Point, grab: Point) -> Self {
        Self {
            item,
            origin,
            order,
            samples: Vec::new(),
            target: origin,
            status: DragStatus::Armed,
            pointer: anchor,
            grab,
        }
    }

    pub fn item(&self) -> &K {
        &self.item
    }

    pub fn origin_index(&self) -> usize {
        self.origin
    }

    pub fn order(&self) -> &[K] {
        &self.order
    }

    pub fn samples(&self) -> &[PointerSample] {
        &self.samples
    }

    pub fn target_index(&self) -> usize {
        self.target
    }

    pub fn status(&self) -> DragStatus {
        self.status
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Top-left of the floating affordance: the pointer minus where the
    /// item was grabbed.
    pub fn affordance(&self) -> Point {
        self.pointer.translate(-self.grab.x, -self.grab.y)
    }

    pub(crate) fn record(&mut self, sample: PointerSample) {
        self.pointer = sample.point;
        self.samples.push(sample);
    }

    pub(crate) fn set_target(&mut self, target: usize) -> bool {
        let changed = self.target != target;
        self.target = target;
        changed
    }

    pub(crate) fn activate(&mut self) {
        self.status = DragStatus::Active;
    }

    pub(crate) fn finish(&mut self, status: DragStatus) {
        debug_assert!(status.is_terminal());
        self.status = status;
    }

    pub fn snapshot(&self) -> DragSnapshot<K> {
        DragSnapshot {
            item: self.item.clone(),
            origin_index: self.origin,
            target_index: self.target,
            status: self.status,
            affordance: self.affordance(),
        }
    }
}

/// Plain copy of what the rendering layer needs from a session.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSnapshot<K> {
    pub item: K,
    pub origin_index: usize,
    pub target_index: usize,
    pub status: DragStatus,
    pub affordance: Point,
}
