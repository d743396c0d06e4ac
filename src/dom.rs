//! Browser glue - page clock, element boxes, DOM events to raw pointers

use dioxus::prelude::*;

use crate::reorder::{Point, PointerId, RawPointer, Rect};

/// Pointer id browsers give the mouse.
pub const MOUSE_POINTER: PointerId = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Milliseconds on the page clock
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Client-space box of the element with `id`, if it is in the document.
pub fn measure(id: &str) -> Option<Rect> {
    let document = web_sys::window().and_then(|w| w.document())?;
    let element = document.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    Some(Rect::new(
        rect.x() as f32,
        rect.y() as f32,
        rect.width() as f32,
        rect.height() as f32,
    ))
}

fn raw(kind: PointerKind, id: PointerId, point: Point, at: f64) -> RawPointer {
    match kind {
        PointerKind::Down => RawPointer::Down { id, point, at },
        PointerKind::Move => RawPointer::Move { id, point, at },
        PointerKind::Up => RawPointer::Up { id, point, at },
        PointerKind::Cancel => RawPointer::Cancel { id, at },
    }
}

pub fn from_pointer(kind: PointerKind, e: &Event<PointerData>) -> RawPointer {
    let c = e.client_coordinates();
    raw(kind, e.pointer_id(), Point::new(c.x as f32, c.y as f32), now_ms())
}

/// Mouse events for surfaces driven by synthetic mousedown/move/up.
pub fn from_mouse(kind: PointerKind, e: &Event<MouseData>) -> RawPointer {
    let c = e.client_coordinates();
    raw(kind, MOUSE_POINTER, Point::new(c.x as f32, c.y as f32), now_ms())
}
