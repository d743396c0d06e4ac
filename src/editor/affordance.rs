use dioxus::prelude::*;

use super::block::BlockKind;

const ACCENT: &str = "#4f46e5";

/// Floating copy of the dragged block, pinned under the pointer.
#[component]
pub fn DragAffordance(title: String, kind: BlockKind, left: f32, top: f32, width: f32, lifted: bool) -> Element {
    // armed-but-still gets a smaller lift so the press feels acknowledged
    let scale = if lifted { "1.03" } else { "1.01" };
    let shadow = if lifted {
        "0 16px 40px rgba(15,23,42,0.35)"
    } else {
        "0 6px 18px rgba(15,23,42,0.25)"
    };
    let icon = kind.icon();
    let label = kind.label();

    rsx! {
        div {
            id: "drag-affordance",
            style: "position: fixed; left: {left}px; top: {top}px; width: {width}px; z-index: 300; \
                    pointer-events: none; box-sizing: border-box; padding: 10px 14px; \
                    background: white; border: 2px solid {ACCENT}; border-radius: 8px; \
                    box-shadow: {shadow}; opacity: 0.92; transform: scale({scale}); \
                    transition: transform 0.12s ease, box-shadow 0.12s ease; \
                    display: flex; align-items: center; gap: 10px; font-family: system-ui, sans-serif;",
            span {
                style: "width: 22px; height: 22px; border-radius: 4px; background: {ACCENT}22; color: {ACCENT}; \
                        display: flex; align-items: center; justify-content: center; font-size: 12px; font-weight: 700;",
                "{icon}"
            }
            span {
                style: "font-size: 11px; color: #9ca3af; text-transform: uppercase; letter-spacing: 0.5px;",
                "{label}"
            }
            span {
                style: "font-size: 14px; color: #111827; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                "{title}"
            }
        }
    }
}
