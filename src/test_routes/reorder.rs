use std::time::Duration;

use dioxus::prelude::*;

use crate::dom::{self, PointerKind};
use crate::reorder::commit::reordered;
use crate::reorder::{ReorderConfig, ReorderController, ReorderEvent, Transition};

const ITEMS: &[&str] = &["Alpha", "Beta", "Gamma", "Delta"];
const CARD_X: f32 = 200.0;
const CARD_Y: f32 = 100.0;
const CARD_W: f32 = 340.0;
const ITEM_H: f32 = 44.0;
const ITEM_GAP: f32 = 4.0;
const ACCENT: &str = "#4f46e5";

fn item_y(i: usize) -> f32 {
    i as f32 * (ITEM_H + ITEM_GAP)
}

fn item_dom_id(si: usize) -> String {
    format!("reorder-item-{si}")
}

/// Scripted drags start on mousedown, so this list arms without a hold.
fn config() -> ReorderConfig {
    ReorderConfig::default().with_long_press(Duration::ZERO).with_slop(0.0)
}

#[derive(Clone, Copy)]
struct Harness {
    controller: Signal<ReorderController<usize>>,
    order: Signal<Vec<usize>>,
    moves: Signal<u32>,
    cancelled: Signal<bool>,
}

impl Harness {
    fn send(mut self, event: ReorderEvent<usize>) {
        let before = self.order.read().clone();
        let transition = self.controller.write().handle(event, &mut *self.order.write());
        match transition {
            Transition::Armed(_) => self.cancelled.set(false),
            Transition::Committed(next) if next != before => *self.moves.write() += 1,
            Transition::Cancelled => self.cancelled.set(true),
            _ => {}
        }
    }

    fn press(self, si: usize, e: &Event<MouseData>) {
        let ids = self.order.read().clone();
        for id in ids {
            if let Some(rect) = dom::measure(&item_dom_id(id)) {
                self.send(ReorderEvent::Layout { item: id, rect });
            }
        }
        self.send(ReorderEvent::Press { item: si, pointer: dom::from_mouse(PointerKind::Down, e) });
    }

    fn mouse(self, kind: PointerKind, e: &Event<MouseData>) {
        self.send(ReorderEvent::Pointer(dom::from_mouse(kind, e)));
    }
}

#[component]
pub fn TestReorder() -> Element {
    let order = use_signal(|| vec![0usize, 1, 2, 3]);
    let controller = use_signal(|| ReorderController::new(config()));
    let moves = use_signal(|| 0u32);
    let cancelled = use_signal(|| false);
    let harness = Harness { controller, order, moves, cancelled };

    let cur_order: Vec<usize> = order.read().clone();
    let snapshot = controller.read().snapshot();
    let count = cur_order.len();

    // Where each item sits if the drag were released now
    let preview = match &snapshot {
        Some(s) => reordered(&cur_order, s.origin_index, s.target_index),
        None => cur_order.clone(),
    };
    let drag_y = snapshot.as_ref().map(|s| {
        let grabbed_at = controller.read().registry().get(&s.item).map(|r| r.y);
        let delta = grabbed_at.map(|y| s.affordance.y - y).unwrap_or(0.0);
        (item_y(s.origin_index) + delta).clamp(0.0, item_y(count - 1))
    });
    let cur_drag = snapshot.as_ref().map(|s| s.item);

    let result = if let Some(si) = cur_drag {
        format!("dragging:{}", ITEMS[si])
    } else if moves() > 0 {
        let labels: Vec<&str> = cur_order.iter().map(|&i| ITEMS[i]).collect();
        format!("reordered:{}", labels.join(","))
    } else if cancelled() {
        "cancelled".to_string()
    } else {
        "idle".to_string()
    };

    let list_h = count as f32 * (ITEM_H + ITEM_GAP) - ITEM_GAP;

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; padding: 20px; font-family: system-ui, sans-serif;",

            div {
                id: "viewport",
                "data-fixed": "true",
                style: "width: 800px; height: 600px; background: #1a1a2e; position: relative; overflow: hidden; user-select: none;",

                div {
                    style: "position: absolute; left: {CARD_X}px; top: {CARD_Y}px; width: {CARD_W}px; \
                            background: white; border-radius: 12px; \
                            box-shadow: 0 4px 24px rgba(0,0,0,0.3); \
                            font-family: system-ui, sans-serif; box-sizing: border-box; padding: 16px;",

                    h3 {
                        style: "margin: 0 0 12px 0; font-size: 16px; color: #111827; font-weight: 600;",
                        "Test List"
                    }

                    p {
                        style: "margin: 0 0 12px 0; font-size: 12px; color: #9ca3af;",
                        "Drag items to reorder"
                    }

                    div {
                        id: "list-container",
                        style: "position: relative; height: {list_h}px;",

                        for si in cur_order.iter().copied() {
                            {
                                let label = ITEMS[si];
                                let is_dragged = cur_drag == Some(si);
                                let slot = preview.iter().position(|&p| p == si).unwrap_or(0);

                                let top = match drag_y {
                                    Some(y) if is_dragged => y,
                                    _ => item_y(slot),
                                };
                                let z = if is_dragged { "200" } else { "1" };
                                let pe = if is_dragged { "none" } else { "auto" };
                                let opacity = if is_dragged { "0.85" } else { "1" };
                                let shadow = if is_dragged {
                                    "0 8px 24px rgba(0,0,0,0.3)"
                                } else {
                                    "none"
                                };
                                let bg = if is_dragged {
                                    format!("{}22", ACCENT)
                                } else {
                                    "#f9fafb".to_string()
                                };
                                let border = if is_dragged {
                                    format!("2px solid {}", ACCENT)
                                } else {
                                    "2px solid transparent".to_string()
                                };
                                let transition = if is_dragged { "none" } else { "top 0.15s ease" };
                                let dom_id = item_dom_id(si);
                                let number = slot + 1;

                                rsx! {
                                    button {
                                        key: "{si}",
                                        id: "{dom_id}",
                                        class: "target",
                                        "data-label": "{label}",
                                        "data-index": "{slot}",
                                        style: "position: absolute; top: {top}px; left: 0; width: 100%; \
                                                height: {ITEM_H}px; z-index: {z}; pointer-events: {pe}; \
                                                opacity: {opacity}; box-shadow: {shadow}; \
                                                display: flex; align-items: center; gap: 10px; \
                                                padding: 10px 12px; background: {bg}; \
                                                border: {border}; border-radius: 8px; font-size: 14px; \
                                                color: #374151; cursor: grab; text-align: left; \
                                                font-family: system-ui, sans-serif; box-sizing: border-box; \
                                                transition: {transition};",
                                        tabindex: "-1",
                                        onmousedown: move |e: Event<MouseData>| {
                                            e.prevent_default();
                                            harness.press(si, &e);
                                        },
                                        span {
                                            style: "color: #d1d5db; font-size: 14px; flex-shrink: 0;",
                                            "\u{2261}"
                                        }
                                        span {
                                            class: "position-number",
                                            style: "color: #9ca3af; font-size: 12px; width: 18px; flex-shrink: 0; font-family: monospace;",
                                            "{number}."
                                        }
                                        span {
                                            class: "item-label",
                                            "{label}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                // Drag overlay at viewport level to capture all mouse movement
                if cur_drag.is_some() {
                    div {
                        style: "position: absolute; inset: 0; z-index: 100; cursor: grabbing;",
                        onmousemove: move |e: Event<MouseData>| harness.mouse(PointerKind::Move, &e),
                        onmouseup: move |e: Event<MouseData>| harness.mouse(PointerKind::Up, &e),
                        onmouseleave: move |e: Event<MouseData>| harness.mouse(PointerKind::Cancel, &e),
                    }
                }

                div {
                    id: "result",
                    style: "display: none;",
                    "{result}"
                }
            }
        }
    }
}
