//! Wasm entry point: mounts the dashboard into `#app`.

use leptos::mount::mount_to;
use leptos::prelude::*;
use seva_kendra_frontend::App;
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: lol_alloc::AssumeSingleThreaded<lol_alloc::FreeListAllocator> =
    unsafe { lol_alloc::AssumeSingleThreaded::new(lol_alloc::FreeListAllocator::new()) };

const ROOT_ID: &str = "app";

fn root_element() -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(ROOT_ID)?
        .dyn_into()
        .ok()
}

fn main() {
    console_error_panic_hook::set_once();
    match root_element() {
        Some(root) => mount_to(root, App).forget(),
        None => {
            seva_kendra::log_warn!("#{} missing from index.html, mounting on <body>", ROOT_ID);
            mount_to_body(App);
        }
    }
}
