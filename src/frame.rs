use crate::overlay;
use crate::render;
use crate::SharedPage;
use folio_core::PageEffect;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Milliseconds since mount; the single time base handed to the core.
#[derive(Clone, Copy)]
pub struct Clock {
    epoch: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }
}

pub struct FrameContext {
    pub page: SharedPage,
    pub document: web::Document,
    pub clock: Clock,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let update = self.page.borrow_mut().frame(self.clock.now_ms());

        render::apply_hue(&self.document, &update.hue_gradient);
        for effect in &update.effects {
            match effect {
                PageEffect::Visual(visual) => render::apply_visual(&self.document, visual),
                PageEffect::Hero(t) => render::apply_hero(&self.document, t),
                PageEffect::Viewport(size) => {
                    log::info!("[viewport] {}x{}", size.width, size.height);
                    render::apply_viewport(&self.document, *size);
                }
                PageEffect::Overlay(phase) => {
                    log::info!("[overlay] {:?}", phase);
                    overlay::sync(&self.document, self.page.borrow().overlay());
                }
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
