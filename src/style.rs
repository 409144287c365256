// CSS text for the values the core produces.
// No web-sys here so host tests can `include!` this file.

use folio_core::{AnimKind, HeroTransform, InitialPose, SectionCommand, Viewport, VisualState};

#[inline]
pub fn opacity(value: f32) -> String {
    format!("{:.3}", value.clamp(0.0, 1.0))
}

pub fn hero_style(t: &HeroTransform) -> String {
    if t.translate_y_px == 0.0 {
        format!("transform:none;opacity:{}", opacity(t.opacity))
    } else {
        format!(
            "transform:translateY({:.1}px);opacity:{}",
            t.translate_y_px,
            opacity(t.opacity)
        )
    }
}

pub fn backdrop_style(v: &VisualState) -> String {
    format!("background:{};color:{}", v.gradient, v.text_hex)
}

/// Value for the `data-anim` attribute the stylesheet keys its variants on.
pub fn anim_state(kind: AnimKind) -> &'static str {
    match kind {
        AnimKind::Enter => "visible",
        AnimKind::Exit => "hidden",
    }
}

pub fn initial_anim_state(pose: InitialPose) -> &'static str {
    match pose {
        InitialPose::Shown => "visible",
        InitialPose::Hidden => "hidden",
    }
}

/// Transition for the animated child at `index` within the commanded section.
pub fn item_transition(cmd: &SectionCommand, index: usize) -> String {
    let t = cmd.timing();
    format!(
        "transition:opacity {dur}ms {ease} {delay}ms,transform {dur}ms {ease} {delay}ms",
        dur = t.duration_ms,
        ease = t.easing.css(),
        delay = t.delay_for_item(index),
    )
}

pub fn z_index(value: i32) -> String {
    format!("z-index:{}", value)
}

/// Pixel size for the backdrop art from the committed viewport.
pub fn backdrop_art_size(size: Viewport) -> (u32, u32) {
    let px = |v: f64| if v.is_finite() { v.round().max(0.0) as u32 } else { 0 };
    (px(size.width), px(size.height))
}

/// Overlay content is rewritten only when a different project must show.
/// `rendered` is the id the content element currently holds.
#[inline]
pub fn content_needs_render(rendered: Option<&str>, wanted: Option<&str>) -> bool {
    wanted.is_some() && rendered != wanted
}
