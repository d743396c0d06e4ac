//! Reorder committer - hands the final permutation to the list owner
//!
//! A release produces exactly one `set_order` call with a full
//! permutation of the list; a cancel produces none. The owner never sees
//! a half-applied reorder.

use thiserror::Error;

/// Returned by an owner that refuses a new order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("order rejected: {reason}")]
pub struct OrderRejected {
    pub reason: String,
}

impl OrderRejected {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    #[error(transparent)]
    Rejected(#[from] OrderRejected),
    #[error("list changed while the drag was in progress")]
    StaleOrder,
}

/// Whoever owns the ordered list being rearranged.
pub trait OrderOwner<K> {
    fn order(&self) -> Vec<K>;
    fn set_order(&mut self, order: Vec<K>) -> Result<(), OrderRejected>;
}

impl<K: Clone> OrderOwner<K> for Vec<K> {
    fn order(&self) -> Vec<K> {
        self.clone()
    }

    fn set_order(&mut self, order: Vec<K>) -> Result<(), OrderRejected> {
        *self = order;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome<K> {
    Applied(Vec<K>),
    /// Drag ended where it started and the config skips no-op commits.
    Skipped,
}

/// `order` with the item at `from` moved to `to`. Everything between the
/// two shifts by one; nothing else moves. Indices past the end clamp.
pub fn reordered<K: Clone>(order: &[K], from: usize, to: usize) -> Vec<K> {
    let mut out = order.to_vec();
    if from >= out.len() {
        return out;
    }
    let item = out.remove(from);
    let to = to.min(out.len());
    out.insert(to, item);
    out
}

/// Move `from` to `to` in `snapshot` and hand the result to `owner`.
///
/// `snapshot` is the order the drag started from; if the owner's list no
/// longer matches it the commit is abandoned rather than clobbering the
/// newer order.
pub fn commit<K, O>(
    snapshot: &[K],
    from: usize,
    to: usize,
    owner: &mut O,
    skip_noop: bool,
) -> Result<CommitOutcome<K>, CommitError>
where
    K: Clone + PartialEq,
    O: OrderOwner<K> + ?Sized,
{
    if owner.order() != snapshot {
        return Err(CommitError::StaleOrder);
    }
    if from == to && skip_noop {
        return Ok(CommitOutcome::Skipped);
    }
    let next = reordered(snapshot, from, to);
    owner.set_order(next.clone())?;
    Ok(CommitOutcome::Applied(next))
}
