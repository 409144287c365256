use crate::render;
use crate::SharedPage;
use folio_core::SectionId;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observe each tracked section with an IntersectionObserver whose thresholds
/// bracket the section's visibility threshold, so every crossing is reported
/// even during a fast scroll-through.
pub fn observe_sections(document: &web::Document, page: &SharedPage) -> anyhow::Result<()> {
    for id in SectionId::ALL {
        let Some(threshold) = page.borrow().threshold(id) else {
            continue;
        };
        let Some(target) = document.get_element_by_id(id.dom_id()) else {
            log::warn!("[sections] missing #{}, not observed", id.dom_id());
            continue;
        };

        let page_cb = page.clone();
        let doc_cb = document.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _obs: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let ratio = entry.intersection_ratio() as f32;
                    let cmd = page_cb.borrow_mut().on_intersection(id, ratio);
                    if let Some(cmd) = cmd {
                        render::play(&doc_cb, &cmd);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let thresholds = js_sys::Array::of2(&JsValue::from_f64(0.0), &JsValue::from_f64(threshold as f64));
        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&thresholds);
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow::anyhow!("IntersectionObserver for #{}: {:?}", id, e))?;
        observer.observe(&target);
        callback.forget();
        log::info!("[sections] observing #{} at {:.2}", id, threshold);
    }
    Ok(())
}
