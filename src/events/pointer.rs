use crate::constants::*;
use crate::content;
use crate::dom;
use crate::frame::Clock;
use crate::overlay;
use crate::SharedPage;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Open the overlay when a project entry is clicked.
pub fn wire_project_clicks(document: &web::Document, page: SharedPage, clock: Clock) {
    for el in dom::query_all_doc(document, PROJECT_ITEM_SELECTOR) {
        let Some(id) = el.get_attribute(PROJECT_ID_ATTR) else {
            continue;
        };
        let Some(project) = content::find(&id) else {
            log::warn!("[overlay] no project record for id {}", id);
            continue;
        };
        let page = page.clone();
        let doc = document.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            let mut p = page.borrow_mut();
            p.open_project(project.clone(), clock.now_ms());
            overlay::sync(&doc, p.overlay());
            log::info!("[overlay] open {}", project.id);
        }) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn wire_overlay_close(document: &web::Document, page: SharedPage, clock: Clock) {
    let doc = document.clone();
    dom::add_click_listener(document, OVERLAY_CLOSE_ID, move || {
        let mut p = page.borrow_mut();
        if p.close_overlay(clock.now_ms()).is_some() {
            overlay::sync(&doc, p.overlay());
            log::info!("[overlay] close");
        }
    });
}

/// Keep touch gestures inside the overlay from reaching the page underneath.
pub fn wire_touch_isolation(document: &web::Document, page: SharedPage) {
    let Some(el) = document.get_element_by_id(OVERLAY_ID) else {
        return;
    };
    for kind in ["touchstart", "touchmove"] {
        let page = page.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if page.borrow().overlay().isolates_touch() {
                ev.stop_propagation();
            }
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
