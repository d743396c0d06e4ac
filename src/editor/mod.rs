//! Editor - a block content editor whose blocks reorder by long-press drag
//!
//! `block` holds the document model and implements the list-owner side of
//! the reorder contract; `block_list` renders it and feeds DOM events into
//! a `ReorderController`; `affordance` is the floating copy of the dragged
//! block.

mod affordance;
mod block;
mod block_list;

pub use block_list::BlockEditor;
