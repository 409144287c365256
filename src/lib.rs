#![cfg(target_arch = "wasm32")]
use folio_core::{InputModality, MotionConfig, Page};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod content;
mod dom;
mod events;
mod frame;
mod observer;
mod overlay;
mod render;
mod scroll_lock;
mod style;

use scroll_lock::DocumentScrollLock;

pub(crate) type SharedPage = Rc<RefCell<Page<DocumentScrollLock>>>;

// Warm the browser cache so the overlay's detail image is ready on open.
fn preload_project_images() {
    for project in content::PROJECTS {
        for url in project.image_urls() {
            match web::HtmlImageElement::new() {
                Ok(img) => img.set_src(url),
                Err(e) => log::warn!("[content] preload {} failed: {:?}", url, e),
            }
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    init().map_err(|e| {
        log::error!("init error: {:?}", e);
        JsValue::from_str(&format!("folio-web init failed: {:#}", e))
    })
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let modality = if dom::is_touch_device(&window) {
        InputModality::Touch
    } else {
        InputModality::Pointer
    };
    let clock = frame::Clock::start();
    let page = Page::mount(
        MotionConfig::default(),
        dom::viewport_size(&window),
        modality,
        DocumentScrollLock::new(document.clone()),
    )?;
    let page: SharedPage = Rc::new(RefCell::new(page));

    // Initial paint before any scroll arrives
    {
        let mut p = page.borrow_mut();
        p.on_scroll(dom::scroll_metrics(&window, &document));
        render::apply_initial_pose(&document, p.initial_pose());
        render::apply_visual(&document, p.visual());
        render::apply_viewport(&document, p.viewport());
        render::apply_hero(&document, &p.hero_transform());
        overlay::sync(&document, p.overlay());
        if let Some(cmd) = p.hero_entrance() {
            render::play(&document, &cmd);
        }
    }
    preload_project_images();

    events::wire_scroll(page.clone());
    events::wire_resize(page.clone(), clock);
    events::wire_project_clicks(&document, page.clone(), clock);
    events::wire_overlay_close(&document, page.clone(), clock);
    events::wire_touch_isolation(&document, page.clone());
    observer::observe_sections(&document, &page)?;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        page,
        document,
        clock,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
