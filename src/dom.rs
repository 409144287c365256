use folio_core::{ScrollMetrics, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// All elements matching `selector`, in document order.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

pub fn query_all_doc(document: &web::Document, selector: &str) -> Vec<web::Element> {
    match document.document_element() {
        Some(root) => query_all(&root, selector),
        None => Vec::new(),
    }
}

#[inline]
pub fn set_style_property(el: &web::Element, name: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(name, value);
    }
}

pub fn viewport_size(window: &web::Window) -> Viewport {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

pub fn scroll_metrics(window: &web::Window, document: &web::Document) -> ScrollMetrics {
    let document_height = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    ScrollMetrics {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        document_height,
        viewport_height: viewport_size(window).height,
    }
}

/// Touch-capable device: `ontouchstart` on window or any touch points.
pub fn is_touch_device(window: &web::Window) -> bool {
    let has_ontouchstart =
        js_sys::Reflect::has(window.as_ref(), &wasm_bindgen::JsValue::from_str("ontouchstart"))
            .unwrap_or(false);
    has_ontouchstart || window.navigator().max_touch_points() > 0
}
