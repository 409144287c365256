use crate::dom;
use crate::frame::Clock;
use crate::SharedPage;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scroll only records metrics; the next animation frame recomputes.
pub fn wire_scroll(page: SharedPage) {
    if let Some(window) = web::window() {
        let win = window.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            let Some(document) = win.document() else {
                return;
            };
            let metrics = dom::scroll_metrics(&win, &document);
            page.borrow_mut().on_scroll(metrics);
        }) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Resize restarts the debounce window; commits happen in the frame loop.
pub fn wire_resize(page: SharedPage, clock: Clock) {
    if let Some(window) = web::window() {
        let win = window.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            let size = dom::viewport_size(&win);
            page.borrow_mut().on_resize(size, clock.now_ms());
        }) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
