/// DOM hooks shared by the wiring and render modules.
///
/// The page markup is static content; these are the ids and selectors the
/// front-end expects it to provide.
// Section wrappers use `SectionId::dom_id()`; children that animate carry:
pub const ANIM_ITEM_SELECTOR: &str = "[data-anim-item]";
pub const ANIM_ATTR: &str = "data-anim";

// Shared backdrop (every section's background)
pub const BACKDROP_SELECTOR: &str = "[data-backdrop]";
pub const BACKDROP_ART_ID: &str = "backdrop-art"; // hero svg whose opacity fades

// Hero
pub const HERO_HEADLINE_SELECTOR: &str = "[data-hero-scroll]";
pub const HERO_NAME_ID: &str = "hero-name"; // hue-cycled gradient text

// Projects
pub const PROJECT_ITEM_SELECTOR: &str = "[data-project-id]";
pub const PROJECT_ID_ATTR: &str = "data-project-id";
pub const RENDERED_PROJECT_ATTR: &str = "data-rendered-project";

// Overlay
pub const OVERLAY_ID: &str = "project-overlay";
pub const OVERLAY_COVER_ID: &str = "project-overlay-cover";
pub const OVERLAY_CONTENT_ID: &str = "project-overlay-content";
pub const OVERLAY_CLOSE_ID: &str = "project-overlay-close";
pub const OVERLAY_PHASE_ATTR: &str = "data-phase";

// Document root element id
pub const ROOT_ID: &str = "root";
