use folio_core::ScrollLock;
use web_sys as web;

/// Scroll lock backed by the document element's `overflow-y`.
pub struct DocumentScrollLock {
    document: web::Document,
}

impl DocumentScrollLock {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl ScrollLock for DocumentScrollLock {
    fn set_scroll_locked(&mut self, locked: bool) {
        if let Some(root) = self.document.document_element() {
            let value = if locked { "hidden" } else { "auto" };
            crate::dom::set_style_property(&root, "overflow-y", value);
        }
        log::info!("[overlay] scroll {}", if locked { "locked" } else { "released" });
    }
}
