use crate::constants::*;
use crate::dom;
use crate::style;
use folio_core::constants::{OVERLAY_CLOSE_Z_INDEX, OVERLAY_Z_INDEX};
use folio_core::{OverlayController, OverlayPhase, Project, ScrollLock, SectionId};
use web_sys as web;

#[inline]
fn show(el: &web::Element, z: i32) {
    _ = el.set_attribute("style", &style::z_index(z));
}

#[inline]
fn hide(el: &web::Element) {
    _ = el.set_attribute("style", "display:none");
}

/// Bring the overlay DOM in line with the controller's phase.
pub fn sync<L: ScrollLock>(document: &web::Document, overlay: &OverlayController<L>) {
    let phase = overlay.phase();

    if let Some(host) = document.get_element_by_id(SectionId::Projects.dom_id()) {
        dom::set_style_property(&host, "z-index", &overlay.host_z_index().to_string());
    }

    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        if phase.is_mounted() {
            show(&el, OVERLAY_Z_INDEX);
            _ = el.set_attribute(OVERLAY_PHASE_ATTR, phase_name(phase));
            let pe = if overlay.pointer_events_enabled() { "auto" } else { "none" };
            dom::set_style_property(&el, "pointer-events", pe);
        } else {
            hide(&el);
            _ = el.remove_attribute(OVERLAY_PHASE_ATTR);
        }
    }

    // The cover stays "in" while the overlay is visible and plays out in Closing.
    if let Some(cover) = document.get_element_by_id(OVERLAY_COVER_ID) {
        let state = if overlay.overlay_visible() { "visible" } else { "exit" };
        _ = cover.set_attribute(ANIM_ATTR, state);
    }

    if let Some(content) = document.get_element_by_id(OVERLAY_CONTENT_ID) {
        match overlay.selected().filter(|_| overlay.content_visible()) {
            Some(project) => {
                let rendered = content.get_attribute(RENDERED_PROJECT_ATTR);
                if style::content_needs_render(rendered.as_deref(), Some(project.id)) {
                    content.set_inner_html(&content_html(project));
                    _ = content.set_attribute(RENDERED_PROJECT_ATTR, project.id);
                }
                _ = content.set_attribute(ANIM_ATTR, "visible");
            }
            None => {
                // Next reveal starts from fresh markup, even for the same project.
                _ = content.remove_attribute(RENDERED_PROJECT_ATTR);
                _ = content.set_attribute(ANIM_ATTR, "hidden");
            }
        }
    }

    if let Some(close) = document.get_element_by_id(OVERLAY_CLOSE_ID) {
        if overlay.close_button_visible() {
            show(&close, OVERLAY_CLOSE_Z_INDEX);
        } else {
            hide(&close);
        }
    }
}

fn phase_name(phase: OverlayPhase) -> &'static str {
    match phase {
        OverlayPhase::Closed => "closed",
        OverlayPhase::Opening => "opening",
        OverlayPhase::ContentRevealing => "revealing",
        OverlayPhase::ContentVisible => "visible",
        OverlayPhase::ContentHiding => "hiding",
        OverlayPhase::Closing => "closing",
    }
}

fn content_html(p: &Project) -> String {
    format!(
        "<article class='project-detail' style='--accent: {accent}'>\
           <header><span class='project-number'>{id}</span><h1>{title}</h1>\
           <p>{category} · {year}</p></header>\
           <img src='{image}' alt='{title}'>\
           <p class='project-description'>{description}</p>\
           <dl><dt>Frontend</dt><dd>{frontend}</dd><dt>Backend</dt><dd>{backend}</dd></dl>\
           <a href='{link}' target='_blank' rel='noopener noreferrer'>Visit</a>\
         </article>",
        accent = p.accent_css(1.0),
        id = p.id,
        title = p.title,
        category = p.category,
        year = p.year,
        image = p.image_detail,
        description = p.description,
        frontend = p.technologies.frontend,
        backend = p.technologies.backend,
        link = p.link,
    )
}
