//! Layout registry - latest on-screen box per item
//!
//! Owned by the list's controller and read by the position tracker.
//! Updates may arrive in any order; the last write for a key wins.

use std::collections::HashMap;
use std::hash::Hash;

use super::geometry::Rect;

#[derive(Debug, Clone)]
pub struct LayoutRegistry<K> {
    boxes: HashMap<K, Rect>,
}

impl<K> Default for LayoutRegistry<K> {
    fn default() -> Self {
        Self { boxes: HashMap::new() }
    }
}

impl<K: Eq + Hash> LayoutRegistry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or overwrite the box for `id`.
    pub fn record(&mut self, id: K, rect: Rect) {
        self.boxes.insert(id, rect);
    }

    /// Last recorded box, or `None` if the item was never laid out.
    pub fn get(&self, id: &K) -> Option<Rect> {
        self.boxes.get(id).copied()
    }

    /// Drop the entry for an unmounted item.
    pub fn forget(&mut self, id: &K) -> Option<Rect> {
        self.boxes.remove(id)
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}
