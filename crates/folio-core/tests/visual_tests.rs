// Scroll signal, backdrop fade, palette and hue cycle.

use folio_core::*;

fn wide() -> FadeRange {
    MotionConfig::default().fade_for(LayoutMode::Wide)
}

fn narrow() -> FadeRange {
    MotionConfig::default().fade_for(LayoutMode::Narrow)
}

#[test]
fn scroll_signal_normalizes_metrics() {
    let s = ScrollSignal::from(ScrollMetrics {
        scroll_y: 500.0,
        document_height: 3000.0,
        viewport_height: 1000.0,
    });
    assert!((s.fraction() - 0.25).abs() < 1e-6);

    let past_end = ScrollSignal::from(ScrollMetrics {
        scroll_y: 2500.0,
        document_height: 3000.0,
        viewport_height: 1000.0,
    });
    assert_eq!(past_end.fraction(), 1.0);

    let bounce = ScrollSignal::from(ScrollMetrics {
        scroll_y: -40.0,
        document_height: 3000.0,
        viewport_height: 1000.0,
    });
    assert_eq!(bounce.fraction(), 0.0);
}

#[test]
fn non_scrolling_document_stays_at_top() {
    let s = ScrollSignal::from(ScrollMetrics {
        scroll_y: 0.0,
        document_height: 800.0,
        viewport_height: 900.0,
    });
    assert_eq!(s, ScrollSignal::TOP);
    assert_eq!(ScrollSignal::new(f32::NAN), ScrollSignal::TOP);
}

#[test]
fn backdrop_opacity_is_bounded_and_non_increasing() {
    for fade in [wide(), narrow()] {
        let mut prev = f32::MAX;
        for i in 0..=1000 {
            let s = ScrollSignal::new(i as f32 / 1000.0);
            let o = backdrop_opacity(s, fade);
            assert!((0.5..=1.0).contains(&o), "opacity {o} out of range at {i}");
            assert!(o <= prev, "opacity increased at {i}");
            prev = o;
        }
    }
}

#[test]
fn wide_backdrop_fades_between_point_one_and_point_four() {
    let fade = wide();
    assert_eq!(backdrop_opacity(ScrollSignal::new(0.0), fade), 1.0);
    assert_eq!(backdrop_opacity(ScrollSignal::new(0.1), fade), 1.0);
    let mid = backdrop_opacity(ScrollSignal::new(0.25), fade);
    assert!((mid - 0.75).abs() < 1e-4);
    let end = backdrop_opacity(ScrollSignal::new(0.4), fade);
    assert!((end - 0.5).abs() < 1e-4);
    assert_eq!(backdrop_opacity(ScrollSignal::new(1.0), fade), 0.5);
}

#[test]
fn narrow_backdrop_starts_fading_earlier() {
    let s = ScrollSignal::new(0.08);
    assert_eq!(backdrop_opacity(s, wide()), 1.0);
    assert!(backdrop_opacity(s, narrow()) < 1.0);
}

#[test]
fn default_palette_is_constant_dark_theme() {
    let palette = ScrollPalette::default();
    let top = map_visual_state(ScrollSignal::TOP, &palette, wide());
    let bottom = map_visual_state(ScrollSignal::new(1.0), &palette, wide());
    assert_eq!(top.gradient, bottom.gradient);
    assert_eq!(top.text_hex, "#FFFFFF");
    assert_eq!(
        top.gradient.to_string(),
        "radial-gradient(circle, #111111 0%, #000000 65%)"
    );
    assert_eq!(top.gradient.outer_hex(), "#000000");
}

#[test]
fn palette_lookup_is_keyed_by_scroll_range() {
    let light = Gradient {
        stops: vec![ColorStop {
            hex: "#EEEEEE",
            position_pct: 0.0,
        }],
    };
    let palette = ScrollPalette::new(vec![
        PaletteStop {
            start: 0.5,
            gradient: light.clone(),
            text_hex: "#000000",
        },
        PaletteStop {
            start: 0.0,
            gradient: Gradient::dark(),
            text_hex: "#FFFFFF",
        },
    ]);
    assert_eq!(palette.lookup(ScrollSignal::new(0.2)).text_hex, "#FFFFFF");
    assert_eq!(palette.lookup(ScrollSignal::new(0.5)).gradient, light);
    assert_eq!(palette.lookup(ScrollSignal::new(0.9)).text_hex, "#000000");
}

#[test]
fn hero_parallax_only_on_wide_layouts() {
    let half = ScrollSignal::new(0.5);
    let wide_pose = hero_transform(half, LayoutMode::Wide);
    assert!((wide_pose.translate_y_px + 200.0).abs() < 1e-3);
    assert_eq!(wide_pose.opacity, 0.0);

    let narrow_pose = hero_transform(half, LayoutMode::Narrow);
    assert_eq!(narrow_pose.translate_y_px, 0.0);

    let quarter = hero_transform(ScrollSignal::new(0.15), LayoutMode::Wide);
    assert!((quarter.opacity - 0.5).abs() < 1e-4);
    assert!((quarter.translate_y_px + 60.0).abs() < 1e-3);
}

#[test]
fn hue_cycle_wraps_and_stays_in_range() {
    let mut hue = HueCycle::new(350.0, 10.0, 40.0, 25.0);
    for _ in 0..1000 {
        hue.advance(0.05);
        assert!((0.0..360.0).contains(&hue.primary));
        assert!((0.0..360.0).contains(&hue.secondary));
    }
    let wrapped = HueCycle::new(-30.0, 720.0, 0.0, 0.0);
    assert_eq!(wrapped.primary, 330.0);
    assert_eq!(wrapped.secondary, 0.0);
}

#[test]
fn hue_cycle_clamps_long_gaps() {
    let mut hue = HueCycle::new(0.0, 0.0, 40.0, 25.0);
    hue.advance(30.0); // tab was in the background
    assert!((hue.primary - 4.0).abs() < 1e-4);
    assert!((hue.secondary - 2.5).abs() < 1e-4);
    let before = hue;
    hue.advance(f32::NAN);
    assert_eq!(hue, before);
    hue.advance(-1.0);
    assert_eq!(hue, before);
}

#[test]
fn hue_gradient_is_a_valid_stop_pair() {
    let hue = HueCycle::new(120.0, 240.0, 0.0, 0.0);
    assert_eq!(
        hue.gradient_css(),
        "linear-gradient(90deg, hsl(120.0, 100%, 50%), hsl(240.0, 100%, 50%))"
    );
}
