use crate::constants::*;
use crate::dom;
use crate::style;
use folio_core::{HeroTransform, InitialPose, SectionCommand, SectionId, Viewport, VisualState};
use web_sys as web;

/// Paint the shared backdrop on every section and force the page background
/// to the gradient's outer color.
pub fn apply_visual(document: &web::Document, visual: &VisualState) {
    let css = style::backdrop_style(visual);
    for el in dom::query_all_doc(document, BACKDROP_SELECTOR) {
        _ = el.set_attribute("style", &css);
    }
    let outer = visual.gradient.outer_hex();
    if let Some(root) = document.document_element() {
        dom::set_style_property(&root, "background-color", outer);
    }
    if let Some(body) = document.body() {
        _ = body.style().set_property("background-color", outer);
    }
    if let Some(app) = document.get_element_by_id(ROOT_ID) {
        dom::set_style_property(&app, "background-color", outer);
    }
    if let Some(art) = document.get_element_by_id(BACKDROP_ART_ID) {
        dom::set_style_property(&art, "opacity", &style::opacity(visual.backdrop_opacity));
    }
}

/// Size the backdrop art to the committed (debounced) viewport.
pub fn apply_viewport(document: &web::Document, size: Viewport) {
    let Some(art) = document.get_element_by_id(BACKDROP_ART_ID) else {
        return;
    };
    let (w, h) = style::backdrop_art_size(size);
    _ = art.set_attribute("width", &w.to_string());
    _ = art.set_attribute("height", &h.to_string());
}

pub fn apply_hero(document: &web::Document, t: &HeroTransform) {
    let css = style::hero_style(t);
    for el in dom::query_all_doc(document, HERO_HEADLINE_SELECTOR) {
        _ = el.set_attribute("style", &css);
    }
}

#[inline]
pub fn apply_hue(document: &web::Document, gradient: &str) {
    if let Some(el) = document.get_element_by_id(HERO_NAME_ID) {
        dom::set_style_property(&el, "background-image", gradient);
    }
}

/// Set every section's pre-command pose.
pub fn apply_initial_pose(document: &web::Document, pose: InitialPose) {
    for id in SectionId::ALL {
        if let Some(el) = document.get_element_by_id(id.dom_id()) {
            _ = el.set_attribute(ANIM_ATTR, style::initial_anim_state(pose));
        }
    }
}

/// Play an enter/exit command: flip the section's variant and give each
/// animated child its staggered transition.
pub fn play(document: &web::Document, cmd: &SectionCommand) {
    let Some(section) = document.get_element_by_id(cmd.section.dom_id()) else {
        log::warn!("[sections] missing #{}", cmd.section.dom_id());
        return;
    };
    for (i, item) in dom::query_all(&section, ANIM_ITEM_SELECTOR).iter().enumerate() {
        _ = item.set_attribute("style", &style::item_transition(cmd, i));
    }
    _ = section.set_attribute(ANIM_ATTR, style::anim_state(cmd.kind));
    log::info!("[sections] {} {:?}", cmd.section, cmd.kind);
}
