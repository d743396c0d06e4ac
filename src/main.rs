mod dom;
mod editor;
mod landing;
mod reorder;
mod test_routes;

use dioxus::prelude::*;
use editor::BlockEditor;
use landing::Landing;
use test_routes::TestReorder;
use tracing::Level;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/editor")]
    BlockEditor {},
    #[route("/test/reorder")]
    TestReorder {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    if let Err(e) = dioxus::logger::init(level) {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }
    tracing::info!("reorder playground starting");
    dioxus::launch(App);
}
