//! Pure mappings from the scroll signal to shared visual values.

use crate::config::{FadeRange, LayoutMode};
use crate::constants::*;
use crate::scroll::ScrollSignal;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct ColorStop {
    pub hex: &'static str,
    pub position_pct: f32,
}

/// Circular radial gradient used as every section's background.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    pub stops: Vec<ColorStop>,
}

impl Gradient {
    pub fn dark() -> Self {
        Self {
            stops: vec![
                ColorStop {
                    hex: BACKDROP_INNER_HEX,
                    position_pct: 0.0,
                },
                ColorStop {
                    hex: BACKDROP_OUTER_HEX,
                    position_pct: BACKDROP_OUTER_STOP_PCT,
                },
            ],
        }
    }

    /// Color of the last stop; the page background is forced to it.
    pub fn outer_hex(&self) -> &'static str {
        self.stops.last().map(|s| s.hex).unwrap_or(BACKDROP_OUTER_HEX)
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "radial-gradient(circle")?;
        for stop in &self.stops {
            write!(f, ", {} {}%", stop.hex, stop.position_pct)?;
        }
        write!(f, ")")
    }
}

/// One palette entry: from `start` scroll fraction on, use these colors.
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteStop {
    pub start: f32,
    pub gradient: Gradient,
    pub text_hex: &'static str,
}

/// Scroll-keyed palette. The site ships a single dark entry so the mapping is
/// constant, but lookups stay keyed by scroll range.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollPalette {
    stops: Vec<PaletteStop>,
}

impl Default for ScrollPalette {
    fn default() -> Self {
        Self {
            stops: vec![PaletteStop {
                start: 0.0,
                gradient: Gradient::dark(),
                text_hex: TEXT_HEX,
            }],
        }
    }
}

impl ScrollPalette {
    /// Stops are sorted by `start`; an empty list falls back to the dark theme.
    pub fn new(mut stops: Vec<PaletteStop>) -> Self {
        if stops.is_empty() {
            return Self::default();
        }
        stops.sort_by(|a, b| a.start.total_cmp(&b.start));
        Self { stops }
    }

    pub fn lookup(&self, signal: ScrollSignal) -> &PaletteStop {
        let s = signal.fraction();
        self.stops
            .iter()
            .rev()
            .find(|stop| s >= stop.start)
            .unwrap_or(&self.stops[0])
    }
}

/// Shared visual tuple read by every section's background.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualState {
    pub gradient: Gradient,
    pub text_hex: &'static str,
    pub backdrop_opacity: f32,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            gradient: Gradient::dark(),
            text_hex: TEXT_HEX,
            backdrop_opacity: 1.0,
        }
    }
}

#[inline]
fn unit_progress(s: f32, start: f32, end: f32) -> f32 {
    ((s - start) / (end - start)).clamp(0.0, 1.0)
}

/// Backdrop opacity: `1 - depth * clamp((s - offset) / span, 0, 1)`.
#[inline]
pub fn backdrop_opacity(signal: ScrollSignal, fade: FadeRange) -> f32 {
    let t = ((signal.fraction() - fade.offset) / fade.span).clamp(0.0, 1.0);
    1.0 - fade.depth * t
}

pub fn map_visual_state(
    signal: ScrollSignal,
    palette: &ScrollPalette,
    fade: FadeRange,
) -> VisualState {
    let entry = palette.lookup(signal);
    VisualState {
        gradient: entry.gradient.clone(),
        text_hex: entry.text_hex,
        backdrop_opacity: backdrop_opacity(signal, fade),
    }
}

/// Scroll-driven pose of the hero headline and tagline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroTransform {
    pub translate_y_px: f32,
    pub opacity: f32,
}

pub fn hero_transform(signal: ScrollSignal, layout: LayoutMode) -> HeroTransform {
    let s = signal.fraction();
    let translate_y_px = match layout {
        LayoutMode::Narrow => 0.0,
        LayoutMode::Wide => HERO_PARALLAX_PX * unit_progress(s, 0.0, HERO_PARALLAX_END),
    };
    HeroTransform {
        translate_y_px,
        opacity: 1.0 - unit_progress(s, 0.0, HERO_FADE_END),
    }
}
