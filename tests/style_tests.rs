// Host-side tests for CSS formatting.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use folio_core::*;
use style::*;

#[test]
fn hero_style_omits_transform_on_narrow_layouts() {
    let pose = hero_transform(ScrollSignal::new(0.15), LayoutMode::Narrow);
    assert_eq!(hero_style(&pose), "transform:none;opacity:0.500");
}

#[test]
fn hero_style_translates_on_wide_layouts() {
    let pose = hero_transform(ScrollSignal::new(0.5), LayoutMode::Wide);
    assert_eq!(
        hero_style(&pose),
        "transform:translateY(-200.0px);opacity:0.000"
    );
}

#[test]
fn backdrop_style_uses_dark_gradient() {
    let v = VisualState::default();
    assert_eq!(
        backdrop_style(&v),
        "background:radial-gradient(circle, #111111 0%, #000000 65%);color:#FFFFFF"
    );
}

#[test]
fn opacity_is_clamped() {
    assert_eq!(opacity(1.7), "1.000");
    assert_eq!(opacity(-0.2), "0.000");
}

#[test]
fn item_transitions_are_staggered() {
    let cmd = SectionCommand {
        section: SectionId::About,
        kind: AnimKind::Enter,
    };
    assert_eq!(
        item_transition(&cmd, 2),
        "transition:opacity 600ms ease-out 400ms,transform 600ms ease-out 400ms"
    );
    let exit = SectionCommand {
        section: SectionId::About,
        kind: AnimKind::Exit,
    };
    assert_eq!(
        item_transition(&exit, 2),
        "transition:opacity 400ms ease-in 0ms,transform 400ms ease-in 0ms"
    );
}

#[test]
fn anim_states_match_stylesheet_variants() {
    assert_eq!(anim_state(AnimKind::Enter), "visible");
    assert_eq!(anim_state(AnimKind::Exit), "hidden");
    assert_eq!(initial_anim_state(InitialPose::Shown), "visible");
    assert_eq!(initial_anim_state(InitialPose::Hidden), "hidden");
    assert_eq!(z_index(999), "z-index:999");
}

#[test]
fn backdrop_art_tracks_committed_viewport() {
    assert_eq!(backdrop_art_size(Viewport::new(600.0, 900.0)), (600, 900));
    assert_eq!(backdrop_art_size(Viewport::new(1279.6, 719.4)), (1280, 719));
    assert_eq!(backdrop_art_size(Viewport::new(-5.0, f64::NAN)), (0, 0));
}

#[test]
fn overlay_content_is_written_once_per_project() {
    // Revealing -> Visible keeps the same project: no rewrite.
    assert!(!content_needs_render(Some("P1"), Some("P1")));
    assert!(content_needs_render(None, Some("P1")));
    assert!(content_needs_render(Some("P1"), Some("P2")));
    assert!(!content_needs_render(Some("P1"), None));
    assert!(!content_needs_render(None, None));
}
