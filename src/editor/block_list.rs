use dioxus::prelude::*;
use dioxus::prelude::keyboard_types::Key;

use crate::Route;
use crate::dom::{self, PointerKind};
use crate::reorder::{
    DragSnapshot, DragStatus, OrderOwner, ReorderConfig, ReorderController, ReorderEvent, Transition,
};
use super::affordance::DragAffordance;
use super::block::{Block, BlockDocument, BlockId, fresh_rng};

const ACCENT: &str = "#4f46e5";
const LIST_W: f32 = 560.0;
const BLOCK_GAP: f32 = 8.0;
/// Placeholder bar sits centered in the gap above the next block
const SLOT_TOP: f32 = -(BLOCK_GAP / 2.0 + 2.0);

/// Handles shared by every event handler on the editor surface.
#[derive(Clone, Copy)]
struct Surface {
    controller: Signal<ReorderController<BlockId>>,
    doc: Signal<BlockDocument>,
    notice: Signal<String>,
}

impl Surface {
    fn send(mut self, event: ReorderEvent<BlockId>) -> Transition<BlockId> {
        let dragged = self.controller.read().snapshot().map(|s| s.item);
        let transition = self.controller.write().handle(event, &mut *self.doc.write());
        let text = {
            let doc = self.doc.read();
            notice_for(&transition, dragged.and_then(|id| doc.get(id)), &doc)
        };
        if let Some(text) = text {
            self.notice.set(text);
        }
        transition
    }

    /// Record every block's current box before a press so hit-testing
    /// works against what is on screen.
    fn measure_all(self) {
        let order = self.doc.read().order();
        for id in order {
            if let Some(rect) = dom::measure(&id.dom_id()) {
                self.send(ReorderEvent::Layout { item: id, rect });
            }
        }
    }

    fn press(self, id: BlockId, e: &Event<PointerData>) {
        self.measure_all();
        let pointer = dom::from_pointer(PointerKind::Down, e);
        if self.send(ReorderEvent::Press { item: id, pointer }) != Transition::Pressed {
            return;
        }
        let wait = self.controller.read().config().long_press.as_millis() as u32;
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(wait).await;
            self.send(ReorderEvent::Tick { now: dom::now_ms() });
        });
    }

    fn pointer(self, kind: PointerKind, e: &Event<PointerData>) {
        self.send(ReorderEvent::Pointer(dom::from_pointer(kind, e)));
    }

    fn remove(mut self, id: BlockId) {
        let removed = self.doc.write().remove(id);
        self.send(ReorderEvent::Unmount { item: id });
        if let Some(block) = removed {
            tracing::info!(id = id.0, "block removed");
            self.notice.set(format!("Removed \u{201c}{}\u{201d}", block.title()));
        }
    }

    fn shuffle(mut self) {
        let result = self.doc.write().shuffle(&mut fresh_rng());
        match result {
            Ok(()) => self.notice.set("Shuffled".to_string()),
            Err(e) => self.notice.set(format!("Shuffle failed: {e}")),
        }
    }

    fn toggle_lock(mut self) {
        let locked = !self.doc.read().is_locked();
        self.doc.write().set_locked(locked);
        let text = if locked { "Document locked" } else { "Document unlocked" };
        self.notice.set(text.to_string());
    }
}

/// Status line text for a transition, if it deserves one.
fn notice_for(transition: &Transition<BlockId>, dragged: Option<&Block>, doc: &BlockDocument) -> Option<String> {
    let title = dragged.map(Block::title).unwrap_or_default();
    let text = match transition {
        Transition::Armed(_) => format!("Moving \u{201c}{title}\u{201d}"),
        Transition::Committed(order) => {
            let position = order.iter().position(|id| Some(*id) == dragged.map(|b| b.id));
            match position {
                Some(i) => format!("Moved \u{201c}{title}\u{201d} to position {} of {}", i + 1, doc.len()),
                None => "Reordered".to_string(),
            }
        }
        Transition::CommitSkipped => format!("\u{201c}{title}\u{201d} left in place"),
        Transition::CommitFailed(e) => format!("Could not move \u{201c}{title}\u{201d}: {e}"),
        Transition::Cancelled => "Drag cancelled".to_string(),
        Transition::Tapped => "Hold, then drag to move a block".to_string(),
        _ => return None,
    };
    Some(text)
}

/// What the list renders, top to bottom.
#[derive(Debug, Clone, PartialEq)]
enum Row {
    Block(Block),
    /// Drop placeholder
    Slot,
}

/// Blocks in document order with the drop placeholder inserted before the
/// candidate at `target`. Candidates are every block except the dragged one.
fn layout_rows(blocks: &[Block], dragged: Option<BlockId>, target: Option<usize>) -> Vec<Row> {
    let mut rows = Vec::with_capacity(blocks.len() + 1);
    let mut candidate = 0;
    for block in blocks {
        if Some(block.id) != dragged {
            if target == Some(candidate) {
                rows.push(Row::Slot);
            }
            candidate += 1;
        }
        rows.push(Row::Block(block.clone()));
    }
    if target == Some(candidate) {
        rows.push(Row::Slot);
    }
    rows
}

#[component]
pub fn BlockEditor() -> Element {
    let doc = use_signal(BlockDocument::sample);
    let controller = use_signal(|| ReorderController::new(ReorderConfig::default()));
    let notice = use_signal(|| "Press and hold a block to move it".to_string());
    let surface = Surface { controller, doc, notice };

    let snapshot: Option<DragSnapshot<BlockId>> = controller.read().snapshot();
    let pressing = controller.read().pressing().copied();
    let blocks: Vec<Block> = doc.read().blocks().to_vec();
    let locked = doc.read().is_locked();
    let notice_text = notice.read().clone();

    let dragged = snapshot.as_ref().map(|s| s.item);
    let target = snapshot
        .as_ref()
        .filter(|s| s.status == DragStatus::Active)
        .map(|s| s.target_index);
    let rows = layout_rows(&blocks, dragged, target);

    let affordance = snapshot.as_ref().and_then(|s| {
        let block = blocks.iter().find(|b| b.id == s.item)?.clone();
        let width = controller.read().registry().get(&s.item).map(|r| r.w).unwrap_or(LIST_W);
        Some((block, s.affordance, width, s.status == DragStatus::Active))
    });
    let capturing = snapshot.is_some();
    let busy = !controller.read().is_idle();
    let lock_label = if locked { "Unlock" } else { "Lock" };
    let order_text = blocks.iter().map(|b| b.id.0.to_string()).collect::<Vec<_>>().join(",");
    let status_text = snapshot.as_ref().map(|s| s.status.as_str()).unwrap_or("idle");

    rsx! {
        div {
            style: "min-height: 100vh; background: #f3f4f6; display: flex; flex-direction: column; align-items: center; \
                    padding: 40px 20px; font-family: system-ui, -apple-system, sans-serif; box-sizing: border-box;",

            div {
                style: "width: {LIST_W}px; display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;",
                Link {
                    to: Route::Landing {},
                    style: "color: #6b7280; text-decoration: none; font-size: 14px;",
                    "\u{2190} Home"
                }
                div {
                    style: "display: flex; gap: 8px;",
                    button {
                        style: "padding: 6px 14px; border: 1px solid #d1d5db; border-radius: 6px; background: white; font-size: 13px; cursor: pointer;",
                        disabled: busy,
                        onclick: move |_| surface.shuffle(),
                        "Shuffle"
                    }
                    button {
                        style: "padding: 6px 14px; border: 1px solid #d1d5db; border-radius: 6px; background: white; font-size: 13px; cursor: pointer;",
                        onclick: move |_| surface.toggle_lock(),
                        "{lock_label}"
                    }
                }
            }

            div {
                id: "block-list",
                style: "width: {LIST_W}px; background: white; border-radius: 12px; padding: 20px; box-sizing: border-box; \
                        box-shadow: 0 4px 24px rgba(0,0,0,0.08); display: flex; flex-direction: column; gap: {BLOCK_GAP}px; \
                        user-select: none;",
                onpointermove: move |e: Event<PointerData>| surface.pointer(PointerKind::Move, &e),
                onpointerup: move |e: Event<PointerData>| surface.pointer(PointerKind::Up, &e),
                onpointercancel: move |e: Event<PointerData>| surface.pointer(PointerKind::Cancel, &e),
                onpointerleave: move |e: Event<PointerData>| {
                    // once armed the overlay sits on top and owns the pointer
                    if surface.controller.read().session().is_none() {
                        surface.pointer(PointerKind::Cancel, &e);
                    }
                },

                for row in rows {
                    {
                        match row {
                            Row::Slot => rsx! {
                                div {
                                    class: "drop-slot",
                                    style: "position: relative; height: 0;",
                                    div {
                                        style: "position: absolute; left: 0; right: 0; top: {SLOT_TOP}px; height: 4px; \
                                                border-radius: 2px; background: {ACCENT};",
                                    }
                                }
                            },
                            Row::Block(block) => {
                                let id = block.id;
                                let is_dragged = dragged == Some(id);
                                let is_pressing = pressing == Some(id);
                                let opacity = if is_dragged { "0.35" } else { "1" };
                                let bg = if is_pressing { "#eef2ff" } else { "#f9fafb" };
                                let border = if is_pressing {
                                    format!("1px solid {}", ACCENT)
                                } else {
                                    "1px solid #e5e7eb".to_string()
                                };
                                let body_css = block.kind.body_css();
                                let icon = block.kind.icon();
                                let text = block.text.clone();
                                let dom_id = id.dom_id();
                                let key = id.0;
                                let kind_label = block.kind.label();
                                rsx! {
                                    div {
                                        key: "{key}",
                                        id: "{dom_id}",
                                        class: "block",
                                        "data-kind": "{kind_label}",
                                        style: "position: relative; display: flex; gap: 12px; align-items: flex-start; \
                                                padding: 12px 36px 12px 12px; background: {bg}; border: {border}; border-radius: 8px; \
                                                opacity: {opacity}; cursor: grab; touch-action: none; \
                                                transition: background 0.15s ease, opacity 0.15s ease;",
                                        onpointerdown: move |e: Event<PointerData>| {
                                            e.prevent_default();
                                            surface.press(id, &e);
                                        },
                                        span {
                                            style: "color: #9ca3af; font-size: 13px; width: 18px; flex-shrink: 0; text-align: center; padding-top: 2px;",
                                            "{icon}"
                                        }
                                        div {
                                            style: "flex: 1; {body_css}",
                                            "{text}"
                                        }
                                        button {
                                            class: "remove-block",
                                            style: "position: absolute; top: 8px; right: 8px; border: none; background: none; \
                                                    color: #9ca3af; font-size: 16px; cursor: pointer; line-height: 1;",
                                            title: "Remove block",
                                            onpointerdown: move |e: Event<PointerData>| e.stop_propagation(),
                                            onclick: move |_| surface.remove(id),
                                            "\u{00d7}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                if blocks.is_empty() {
                    p {
                        style: "margin: 0; color: #9ca3af; font-size: 14px; text-align: center;",
                        "No blocks left"
                    }
                }
            }

            p {
                id: "status",
                style: "width: {LIST_W}px; margin: 12px 0 0 0; font-size: 13px; color: #6b7280;",
                "{notice_text}"
            }

            div {
                id: "result",
                style: "display: none;",
                "{status_text}:{order_text}"
            }

            // Overlay: owns the pointer and keyboard while a drag is armed or active
            if capturing {
                div {
                    tabindex: "0",
                    style: "position: fixed; inset: 0; z-index: 200; cursor: grabbing; touch-action: none; outline: none;",
                    onmounted: move |e: Event<MountedData>| {
                        let el = e.data();
                        spawn(async move {
                            if let Err(err) = el.set_focus(true).await {
                                tracing::debug!(?err, "could not focus drag overlay");
                            }
                        });
                    },
                    onpointermove: move |e: Event<PointerData>| surface.pointer(PointerKind::Move, &e),
                    onpointerup: move |e: Event<PointerData>| surface.pointer(PointerKind::Up, &e),
                    onpointercancel: move |e: Event<PointerData>| surface.pointer(PointerKind::Cancel, &e),
                    onpointerleave: move |e: Event<PointerData>| surface.pointer(PointerKind::Cancel, &e),
                    onkeydown: move |e: Event<KeyboardData>| {
                        if e.key() == Key::Escape {
                            e.prevent_default();
                            surface.send(ReorderEvent::Escape);
                        }
                    },
                }
            }

            if let Some((block, origin, width, lifted)) = affordance {
                DragAffordance {
                    title: block.title(),
                    kind: block.kind,
                    left: origin.x,
                    top: origin.y,
                    width,
                    lifted,
                }
            }
        }
    }
}
