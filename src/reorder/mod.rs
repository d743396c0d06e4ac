//! Reorder - long-press drag-and-drop reordering for one list
//!
//! Data flow:
//! - `registry` holds each item's latest box
//! - `long_press` arms a press held still past the threshold
//! - `gesture` turns raw pointer events into a `Down, Move*, Up|Cancelled` stream
//! - `tracker` resolves each move to an insertion slot (half-extent rule)
//! - `commit` hands the final permutation to the list owner
//!
//! `controller` wires them into one single-threaded dispatch loop. UI
//! code feeds it events and renders from its snapshot.

pub mod commit;
pub mod config;
pub mod controller;
pub mod geometry;
pub mod gesture;
pub mod long_press;
pub mod registry;
pub mod session;
pub mod tracker;

pub use commit::{CommitError, OrderOwner, OrderRejected};
pub use config::ReorderConfig;
pub use controller::{ReorderController, ReorderEvent, Transition};
pub use geometry::{Axis, Point, Rect};
pub use gesture::{PointerId, RawPointer};
pub use session::{DragSnapshot, DragStatus};
