// Composition root: viewport debounce, frame coalescing and wiring.

use folio_core::*;

#[derive(Default, Debug)]
struct FlagLock(bool);

impl ScrollLock for FlagLock {
    fn set_scroll_locked(&mut self, locked: bool) {
        self.0 = locked;
    }
}

fn mount(width: f64, modality: InputModality) -> Page<FlagLock> {
    Page::mount(
        MotionConfig::default(),
        Viewport::new(width, 900.0),
        modality,
        FlagLock::default(),
    )
    .expect("default config is valid")
}

fn metrics(scroll_y: f64) -> ScrollMetrics {
    ScrollMetrics {
        scroll_y,
        document_height: 4000.0,
        viewport_height: 1000.0,
    }
}

fn visual_effects(update: &FrameUpdate) -> Vec<&VisualState> {
    update
        .effects
        .iter()
        .filter_map(|e| match e {
            PageEffect::Visual(v) => Some(v),
            _ => None,
        })
        .collect()
}

#[test]
fn resize_burst_commits_once_with_last_size() {
    let mut t = ViewportTracker::new(Viewport::new(1200.0, 800.0), 200.0);
    t.on_resize(Viewport::new(1100.0, 800.0), 0.0);
    t.on_resize(Viewport::new(1000.0, 800.0), 150.0);
    t.on_resize(Viewport::new(900.0, 700.0), 300.0);
    assert_eq!(t.tick(350.0), None);
    assert_eq!(t.tick(499.0), None);
    assert_eq!(t.current(), Viewport::new(1200.0, 800.0));
    assert_eq!(t.tick(500.0), Some(Viewport::new(900.0, 700.0)));
    assert_eq!(t.tick(1000.0), None);
    assert_eq!(t.current(), Viewport::new(900.0, 700.0));
}

#[test]
fn stale_debounce_token_does_not_commit() {
    let mut t = ViewportTracker::new(Viewport::new(1200.0, 800.0), 200.0);
    let first = t.on_resize(Viewport::new(1000.0, 800.0), 0.0);
    let second = t.on_resize(Viewport::new(800.0, 600.0), 100.0);
    assert_eq!(t.fire(first), None);
    assert_eq!(t.fire(second), Some(Viewport::new(800.0, 600.0)));
}

#[test]
fn timer_slot_invalidates_previous_tokens() {
    let mut slot = TimerSlot::new();
    let a = slot.arm(0.0, 100.0);
    let b = slot.arm(50.0, 100.0);
    assert_ne!(a, b);
    assert!(!slot.take(a));
    assert_eq!(slot.poll(149.0), None);
    assert_eq!(slot.poll(150.0), Some(b));
    assert!(!slot.is_armed());
    slot.arm(0.0, 10.0);
    assert!(slot.cancel().is_some());
    assert_eq!(slot.poll(1000.0), None);
}

#[test]
fn layout_is_fixed_at_mount() {
    let mut page = mount(700.0, InputModality::Pointer);
    assert_eq!(page.layout(), LayoutMode::Narrow);
    assert_eq!(page.initial_pose(), InitialPose::Shown);
    page.on_resize(Viewport::new(1600.0, 900.0), 0.0);
    let update = page.frame(500.0);
    assert!(update
        .effects
        .contains(&PageEffect::Viewport(Viewport::new(1600.0, 900.0))));
    assert_eq!(page.viewport().width, 1600.0);
    assert_eq!(page.layout(), LayoutMode::Narrow);

    assert_eq!(mount(768.0, InputModality::Pointer).layout(), LayoutMode::Narrow);
    assert_eq!(mount(769.0, InputModality::Pointer).layout(), LayoutMode::Wide);
}

#[test]
fn scroll_events_coalesce_to_latest_per_frame() {
    let mut page = mount(1400.0, InputModality::Pointer);
    page.on_scroll(metrics(1200.0)); // 0.4
    page.on_scroll(metrics(0.0));
    page.on_scroll(metrics(750.0)); // 0.25
    let update = page.frame(16.0);
    let visuals = visual_effects(&update);
    assert_eq!(visuals.len(), 1);
    assert!((visuals[0].backdrop_opacity - 0.75).abs() < 1e-4);
    assert!((page.visual().backdrop_opacity - 0.75).abs() < 1e-4);

    // Nothing new between frames: nothing recomputed.
    let idle = page.frame(32.0);
    assert!(visual_effects(&idle).is_empty());
}

#[test]
fn wide_scroll_scenario_fades_to_half() {
    let mut page = mount(1400.0, InputModality::Pointer);
    let mut seen = Vec::new();
    for (i, y) in [0.0, 150.0, 300.0, 600.0, 1200.0].into_iter().enumerate() {
        page.on_scroll(metrics(y));
        page.frame(16.0 * i as f64);
        seen.push(page.visual().backdrop_opacity);
    }
    assert_eq!(seen[0], 1.0);
    assert_eq!(seen[1], 1.0); // 0.05, below the offset
    assert_eq!(seen[2], 1.0); // 0.1, at the offset
    assert!(seen[3] < 1.0 && seen[3] > 0.5);
    assert!((seen[4] - 0.5).abs() < 1e-4);
}

#[test]
fn projects_threshold_depends_on_input_modality() {
    let touch = mount(1400.0, InputModality::Touch);
    let pointer = mount(1400.0, InputModality::Pointer);
    assert_eq!(touch.threshold(SectionId::Projects), Some(0.1));
    assert_eq!(pointer.threshold(SectionId::Projects), Some(0.3));
    assert_eq!(pointer.threshold(SectionId::About), Some(0.3));
    assert_eq!(pointer.threshold(SectionId::Contact), Some(0.5));
    assert_eq!(pointer.threshold(SectionId::Hero), None);
}

#[test]
fn intersections_drive_section_commands() {
    let mut page = mount(1400.0, InputModality::Pointer);
    assert_eq!(page.on_intersection(SectionId::Contact, 0.4), None);
    let enter = page.on_intersection(SectionId::Contact, 0.6).expect("enter");
    assert_eq!(enter.kind, AnimKind::Enter);
    assert_eq!(page.on_intersection(SectionId::Contact, 0.9), None);
    assert_eq!(page.on_intersection(SectionId::About, 0.9).map(|c| c.section), Some(SectionId::About));
    let exit = page.on_intersection(SectionId::Contact, 0.2).expect("exit");
    assert_eq!(exit.kind, AnimKind::Exit);
    assert_eq!(page.section_phase(SectionId::Contact), SectionPhase::Hidden);
    assert_eq!(page.on_intersection(SectionId::Hero, 1.0), None);
}

#[test]
fn hero_enters_exactly_once() {
    let mut page = mount(1400.0, InputModality::Pointer);
    assert_eq!(page.section_phase(SectionId::Hero), SectionPhase::Idle);
    let cmd = page.hero_entrance().expect("hero enter");
    assert_eq!(cmd.section, SectionId::Hero);
    assert_eq!(page.hero_entrance(), None);
}

#[test]
fn overlay_phases_surface_through_frames() {
    let mut page = mount(1400.0, InputModality::Pointer);
    let p = Project {
        id: "P1",
        title: "Syllabus to Calendar",
        category: "Full Stack",
        year: "2025",
        image: "a.jpg",
        image_detail: "b.jpg",
        description: "",
        technologies: Technologies {
            frontend: "",
            backend: "",
        },
        accent_rgb: [0, 0, 0],
        link: "",
    };
    page.open_project(p, 0.0);
    assert!(page.overlay().lock().0);
    assert!(page.frame(400.0).effects.is_empty());
    let update = page.frame(800.0);
    assert!(update
        .effects
        .contains(&PageEffect::Overlay(OverlayPhase::ContentRevealing)));
    page.close_overlay(1000.0);
    page.frame(1800.0);
    assert!(!page.overlay().lock().0);
}

#[test]
fn committed_viewport_surfaces_as_a_frame_effect() {
    let mut page = mount(1400.0, InputModality::Pointer);
    page.on_resize(Viewport::new(600.0, 900.0), 1500.0);
    assert!(!page
        .frame(1600.0)
        .effects
        .iter()
        .any(|e| matches!(e, PageEffect::Viewport(_))));
    let update = page.frame(1700.0);
    assert!(update
        .effects
        .contains(&PageEffect::Viewport(Viewport::new(600.0, 900.0))));
    assert_eq!(page.viewport(), Viewport::new(600.0, 900.0));
}

#[test]
fn content_reveal_keeps_the_selected_project() {
    let mut page = mount(1400.0, InputModality::Pointer);
    let p = Project {
        id: "P2",
        title: "Portfolio",
        category: "Frontend",
        year: "2024",
        image: "a.jpg",
        image_detail: "b.jpg",
        description: "",
        technologies: Technologies {
            frontend: "",
            backend: "",
        },
        accent_rgb: [0, 0, 0],
        link: "",
    };
    page.open_project(p, 0.0);
    let revealing = page.frame(800.0);
    assert!(revealing
        .effects
        .contains(&PageEffect::Overlay(OverlayPhase::ContentRevealing)));
    assert_eq!(page.overlay().selected().map(|p| p.id), Some("P2"));
    let visible = page.frame(1400.0);
    assert!(visible
        .effects
        .contains(&PageEffect::Overlay(OverlayPhase::ContentVisible)));
    assert_eq!(page.overlay().selected().map(|p| p.id), Some("P2"));
}

#[test]
fn mount_error_message_is_readable() {
    let mut config = MotionConfig::default();
    config.contact_threshold = 0.0;
    let err = Page::mount(
        config,
        Viewport::new(1000.0, 800.0),
        InputModality::Pointer,
        FlagLock::default(),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "contact threshold 0 is outside (0, 1]");
}

#[test]
fn invalid_config_is_rejected_at_mount() {
    let mut config = MotionConfig::default();
    config.contact_threshold = 0.0;
    let err = Page::mount(
        config,
        Viewport::new(1000.0, 800.0),
        InputModality::Pointer,
        FlagLock::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ConfigError::Threshold {
            name: "contact",
            value: 0.0
        }
    );

    let mut config = MotionConfig::default();
    config.fade_wide.span = 0.0;
    assert_eq!(config.validate(), Err(ConfigError::FadeSpan(0.0)));

    let mut config = MotionConfig::default();
    config.overlay_reveal_delay_ms = -1.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NegativeDuration { .. })
    ));
    assert!(MotionConfig::default().validate().is_ok());
}

#[test]
fn host_timer_tokens_drive_the_overlay() {
    let mut page = mount(1400.0, InputModality::Pointer);
    let p = Project {
        id: "P1",
        title: "",
        category: "",
        year: "",
        image: "",
        image_detail: "",
        description: "",
        technologies: Technologies {
            frontend: "",
            backend: "",
        },
        accent_rgb: [0, 0, 0],
        link: "",
    };
    let reveal = page.open_project(p, 0.0).expect("reveal");
    let stale = reveal;
    let enter = page.fire_overlay_timer(reveal, 800.0).expect("enter");
    assert!(page.overlay().content_visible());
    assert_eq!(page.fire_overlay_timer(stale, 900.0), None);
    assert_eq!(page.fire_overlay_timer(enter, 1400.0), None);
    assert_eq!(page.overlay().phase(), OverlayPhase::ContentVisible);
}

#[test]
fn custom_palette_and_hue_flow_through_frames() {
    let light = Gradient {
        stops: vec![ColorStop {
            hex: "#F5F5F5",
            position_pct: 0.0,
        }],
    };
    let mut page = mount(1400.0, InputModality::Pointer).with_palette(ScrollPalette::new(vec![
        PaletteStop {
            start: 0.0,
            gradient: Gradient::dark(),
            text_hex: "#FFFFFF",
        },
        PaletteStop {
            start: 0.8,
            gradient: light.clone(),
            text_hex: "#111111",
        },
    ]));
    let start_hue = page.hue().primary;
    page.frame(0.0);
    page.on_scroll(metrics(2700.0)); // 0.9
    let update = page.frame(50.0);
    assert_eq!(page.visual().gradient, light);
    assert_eq!(page.visual().text_hex, "#111111");
    assert!(update.hue_gradient.starts_with("linear-gradient(90deg"));
    assert!(page.hue().primary > start_hue);
}
