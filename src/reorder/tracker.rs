//! Drag position tracker - pointer position to insertion slot
//!
//! Half-extent rule: for each other item, a pointer in the first half of
//! its box puts the dragged item before it, the second half after it. The
//! exact midpoint counts as the first half. The slot is the number of
//! items the pointer is after, clamped to `[0, len - 1]`.

use std::hash::Hash;

use super::geometry::{Axis, Point};
use super::registry::LayoutRegistry;
use super::session::DragSession;

/// Insertion index for the item at `dragged` in `order` when the pointer
/// is at `point`.
///
/// Items with no recorded layout cannot be hit-tested and stay on the
/// side of the dragged item they started on.
pub fn resolve_target<K: Eq + Hash>(
    order: &[K],
    dragged: usize,
    registry: &LayoutRegistry<K>,
    point: Point,
    axis: Axis,
) -> usize {
    let len = order.len();
    if len <= 1 {
        return 0;
    }
    let c = point.along(axis);

    let after = order
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != dragged)
        .filter(|&(i, id)| match registry.get(id) {
            Some(rect) => c > rect.midpoint(axis),
            None => i < dragged,
        })
        .count();

    after.min(len - 1)
}

/// Resolve the session's target for its latest pointer position. Returns
/// true if the target moved.
pub fn track<K: Clone + Eq + Hash>(
    session: &mut DragSession<K>,
    registry: &LayoutRegistry<K>,
    axis: Axis,
) -> bool {
    let target = resolve_target(
        session.order(),
        session.origin_index(),
        registry,
        session.pointer(),
        axis,
    );
    session.set_target(target)
}
