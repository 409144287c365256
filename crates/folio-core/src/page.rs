//! Composition root: owns the shared signals and every per-section machine.

use crate::config::{ConfigError, InputModality, LayoutMode, MotionConfig};
use crate::hue::HueCycle;
use crate::overlay::{OverlayController, OverlayPhase, ScrollLock};
use crate::project::Project;
use crate::scroll::{ScrollMetrics, ScrollProgress, ScrollSignal};
use crate::section::{InitialPose, SectionAnimator, SectionCommand, SectionId, SectionPhase};
use crate::timer::TimerToken;
use crate::viewport::{Viewport, ViewportTracker};
use crate::visibility::VisibilityTracker;
use crate::visual::{
    hero_transform, map_visual_state, HeroTransform, ScrollPalette, VisualState,
};
use fnv::FnvHashMap;
use smallvec::SmallVec;

/// Outbound change produced by a frame.
#[derive(Clone, Debug, PartialEq)]
pub enum PageEffect {
    Visual(VisualState),
    Hero(HeroTransform),
    Viewport(Viewport),
    Overlay(OverlayPhase),
}

#[derive(Clone, Debug, Default)]
pub struct FrameUpdate {
    pub effects: SmallVec<[PageEffect; 4]>,
    pub hue_gradient: String,
}

#[derive(Debug)]
struct TrackedSection {
    visibility: VisibilityTracker,
    animator: SectionAnimator,
}

#[derive(Debug)]
pub struct Page<L: ScrollLock> {
    config: MotionConfig,
    layout: LayoutMode,
    modality: InputModality,
    viewport: ViewportTracker,
    scroll: ScrollProgress,
    palette: ScrollPalette,
    visual: VisualState,
    hue: HueCycle,
    hero: SectionAnimator,
    sections: FnvHashMap<SectionId, TrackedSection>,
    overlay: OverlayController<L>,
    last_frame_ms: Option<f64>,
}

/// Visibility threshold of a scroll-tracked section. The hero has none.
pub fn threshold_for(
    config: &MotionConfig,
    id: SectionId,
    modality: InputModality,
) -> Option<f32> {
    match id {
        SectionId::Hero => None,
        SectionId::About => Some(config.about_threshold),
        SectionId::Projects => Some(match modality {
            InputModality::Touch => config.projects_threshold_touch,
            InputModality::Pointer => config.projects_threshold,
        }),
        SectionId::Contact => Some(config.contact_threshold),
    }
}

impl<L: ScrollLock> Page<L> {
    /// Build the page from the viewport measured at mount. The layout mode is
    /// fixed here and does not follow later resizes.
    pub fn mount(
        config: MotionConfig,
        initial: Viewport,
        modality: InputModality,
        lock: L,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let layout = LayoutMode::from_width(initial.width, config.narrow_breakpoint_px);
        let sections = SectionId::ALL
            .into_iter()
            .filter_map(|id| {
                let threshold = threshold_for(&config, id, modality)?;
                Some((
                    id,
                    TrackedSection {
                        visibility: VisibilityTracker::new(threshold),
                        animator: SectionAnimator::new(id, layout),
                    },
                ))
            })
            .collect();
        log::info!(
            "[page] mounted {}x{} layout={:?} input={:?}",
            initial.width,
            initial.height,
            layout,
            modality
        );
        let visual = map_visual_state(
            ScrollSignal::TOP,
            &ScrollPalette::default(),
            config.fade_for(layout),
        );
        Ok(Self {
            viewport: ViewportTracker::new(initial, config.resize_debounce_ms),
            scroll: ScrollProgress::new(),
            palette: ScrollPalette::default(),
            visual,
            hue: HueCycle::default(),
            hero: SectionAnimator::new(SectionId::Hero, layout),
            sections,
            overlay: OverlayController::new(lock, &config),
            last_frame_ms: None,
            config,
            layout,
            modality,
        })
    }

    /// Replace the scroll-keyed palette. Takes effect on the next frame.
    pub fn with_palette(mut self, palette: ScrollPalette) -> Self {
        self.palette = palette;
        self.visual = map_visual_state(
            self.scroll.latest(),
            &self.palette,
            self.config.fade_for(self.layout),
        );
        self
    }

    #[inline]
    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    #[inline]
    pub fn modality(&self) -> InputModality {
        self.modality
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport.current()
    }

    /// Shared visual tuple; only frames mutate it.
    pub fn visual(&self) -> &VisualState {
        &self.visual
    }

    pub fn hero_transform(&self) -> HeroTransform {
        hero_transform(self.scroll.latest(), self.layout)
    }

    pub fn hue(&self) -> &HueCycle {
        &self.hue
    }

    pub fn overlay(&self) -> &OverlayController<L> {
        &self.overlay
    }

    pub fn initial_pose(&self) -> InitialPose {
        InitialPose::for_layout(self.layout)
    }

    pub fn section_phase(&self, id: SectionId) -> SectionPhase {
        match id {
            SectionId::Hero => self.hero.phase(),
            _ => self
                .sections
                .get(&id)
                .map(|s| s.animator.phase())
                .unwrap_or(SectionPhase::Idle),
        }
    }

    pub fn threshold(&self, id: SectionId) -> Option<f32> {
        self.sections.get(&id).map(|s| s.visibility.threshold())
    }

    /// The hero plays its entrance once, right after mount.
    pub fn hero_entrance(&mut self) -> Option<SectionCommand> {
        self.hero.on_visibility(true)
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        self.scroll.on_scroll(metrics);
    }

    pub fn on_resize(&mut self, size: Viewport, now_ms: f64) -> TimerToken {
        self.viewport.on_resize(size, now_ms)
    }

    /// Feed an observed intersection ratio for `id`.
    pub fn on_intersection(&mut self, id: SectionId, ratio: f32) -> Option<SectionCommand> {
        let section = self.sections.get_mut(&id)?;
        let in_view = section.visibility.observe(ratio)?;
        section.animator.on_visibility(in_view)
    }

    pub fn open_project(&mut self, project: Project, now_ms: f64) -> Option<TimerToken> {
        self.overlay.open(project, now_ms)
    }

    pub fn close_overlay(&mut self, now_ms: f64) -> Option<TimerToken> {
        self.overlay.close(now_ms)
    }

    pub fn fire_overlay_timer(&mut self, token: TimerToken, now_ms: f64) -> Option<TimerToken> {
        self.overlay.fire(token, now_ms)
    }

    /// Run one animation frame.
    pub fn frame(&mut self, now_ms: f64) -> FrameUpdate {
        let mut update = FrameUpdate::default();

        let dt_sec = self
            .last_frame_ms
            .map(|last| ((now_ms - last) / 1000.0) as f32)
            .unwrap_or(0.0);
        self.last_frame_ms = Some(now_ms);
        self.hue.advance(dt_sec);
        update.hue_gradient = self.hue.gradient_css();

        if let Some(size) = self.viewport.tick(now_ms) {
            update.effects.push(PageEffect::Viewport(size));
        }

        if let Some(signal) = self.scroll.take_frame() {
            let visual =
                map_visual_state(signal, &self.palette, self.config.fade_for(self.layout));
            if visual != self.visual {
                self.visual = visual.clone();
                update.effects.push(PageEffect::Visual(visual));
            }
            update
                .effects
                .push(PageEffect::Hero(hero_transform(signal, self.layout)));
        }

        if self.overlay.tick(now_ms) {
            update.effects.push(PageEffect::Overlay(self.overlay.phase()));
        }
        update
    }
}
