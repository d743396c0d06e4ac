use dioxus::prelude::*;
use crate::Route;

/// How a drag goes, shown as a numbered list.
const STEPS: [(&str, &str); 4] = [
    ("Hold", "Press a block and keep still until it lifts. Quick taps and scrolls never start a drag."),
    ("Drag", "Over the top half of a block drops before it, the bottom half after it."),
    ("Release", "Letting go replaces the whole order once."),
    ("Back out", "Escape, or leaving the window, puts everything back where it was."),
];

#[component]
fn RouteCard(to: Route, title: &'static str, blurb: &'static str, accent: &'static str) -> Element {
    rsx! {
        Link {
            to,
            style: "display: block; flex: 1; padding: 20px; background: white; border: 1px solid #e5e7eb; border-top: 4px solid {accent}; \
                    border-radius: 10px; text-decoration: none; box-shadow: 0 1px 3px rgba(0,0,0,0.08);",
            div {
                style: "font-size: 17px; font-weight: 600; color: #111827; margin-bottom: 6px;",
                "{title} \u{2192}"
            }
            div {
                style: "font-size: 13px; color: #6b7280; line-height: 1.5;",
                "{blurb}"
            }
        }
    }
}

#[component]
pub fn Landing() -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; background: #f3f4f6; display: flex; justify-content: center; \
                    padding: 64px 20px; box-sizing: border-box; font-family: system-ui, -apple-system, sans-serif;",

            div {
                style: "width: 560px;",
                h1 {
                    style: "font-size: 32px; font-weight: 700; color: #111827; margin: 0 0 8px 0;",
                    "Reorder Playground"
                }
                p {
                    style: "font-size: 15px; color: #4b5563; margin: 0 0 32px 0;",
                    "Long-press drag and drop for ordered lists of blocks."
                }

                ol {
                    style: "list-style: none; padding: 0; margin: 0 0 36px 0; display: flex; flex-direction: column; gap: 12px;",
                    for (n, (name, text)) in STEPS.iter().enumerate().map(|(i, step)| (i + 1, step)) {
                        li {
                            key: "{name}",
                            style: "display: flex; gap: 14px; align-items: baseline;",
                            span {
                                style: "flex: none; width: 24px; height: 24px; border-radius: 50%; background: #e0e7ff; color: #4338ca; \
                                        font-size: 12px; font-weight: 600; display: flex; align-items: center; justify-content: center;",
                                "{n}"
                            }
                            div {
                                span { style: "font-weight: 600; color: #111827;", "{name}. " }
                                span { style: "color: #4b5563; font-size: 14px;", "{text}" }
                            }
                        }
                    }
                }

                div {
                    style: "display: flex; gap: 16px;",
                    RouteCard {
                        to: Route::BlockEditor {},
                        title: "Block editor",
                        blurb: "Headings, paragraphs, quotes and images. Shuffle, lock and remove blocks mid-drag.",
                        accent: "#6366f1",
                    }
                    RouteCard {
                        to: Route::TestReorder {},
                        title: "Test list",
                        blurb: "Fixed rows driven by scripted mouse events. The hidden #result reports the order.",
                        accent: "#22c55e",
                    }
                }
            }
        }
    }
}
