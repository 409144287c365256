//! Per-section enter/exit animation state.
//!
//! A section only enters from `Idle` or `Hidden` and only exits from
//! `Visible`, so flicker around the visibility threshold cannot replay the
//! entrance and an exit is never issued for a section that never entered.

use crate::config::LayoutMode;
use crate::constants::*;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Hero,
    About,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// DOM id of the section's wrapper element.
    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<Self> {
        SectionId::ALL.into_iter().find(|s| s.dom_id() == id)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionPhase {
    /// Mounted, never entered.
    Idle,
    Visible,
    Hidden,
}

/// How the renderer draws a section before its first command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitialPose {
    Hidden,
    Shown,
}

impl InitialPose {
    pub fn for_layout(layout: LayoutMode) -> Self {
        match layout {
            LayoutMode::Narrow => InitialPose::Shown,
            LayoutMode::Wide => InitialPose::Hidden,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimKind {
    Enter,
    Exit,
}

/// Externally visible animation command consumed by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionCommand {
    pub section: SectionId,
    pub kind: AnimKind,
}

impl SectionCommand {
    pub fn timing(&self) -> VariantTiming {
        match (self.section, self.kind) {
            (SectionId::Hero, AnimKind::Enter) => VariantTiming {
                duration_ms: HERO_ENTER_MS,
                delay_ms: HERO_ENTER_DELAY_MS,
                stagger_ms: 0.0,
                easing: Easing::EaseOut,
            },
            (_, AnimKind::Enter) => VariantTiming {
                duration_ms: SECTION_ENTER_MS,
                delay_ms: 0.0,
                stagger_ms: SECTION_STAGGER_MS,
                easing: Easing::EaseOut,
            },
            (_, AnimKind::Exit) => VariantTiming {
                duration_ms: SECTION_EXIT_MS,
                delay_ms: 0.0,
                stagger_ms: 0.0,
                easing: Easing::EaseIn,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    EaseIn,
    EaseOut,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantTiming {
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub stagger_ms: f64,
    pub easing: Easing,
}

impl VariantTiming {
    /// Start delay of the child at `index` within the section.
    #[inline]
    pub fn delay_for_item(&self, index: usize) -> f64 {
        self.delay_ms + self.stagger_ms * index as f64
    }
}

#[derive(Debug, Clone)]
pub struct SectionAnimator {
    id: SectionId,
    phase: SectionPhase,
    initial_pose: InitialPose,
}

impl SectionAnimator {
    pub fn new(id: SectionId, layout: LayoutMode) -> Self {
        Self {
            id,
            phase: SectionPhase::Idle,
            initial_pose: InitialPose::for_layout(layout),
        }
    }

    #[inline]
    pub fn id(&self) -> SectionId {
        self.id
    }

    #[inline]
    pub fn phase(&self) -> SectionPhase {
        self.phase
    }

    #[inline]
    pub fn initial_pose(&self) -> InitialPose {
        self.initial_pose
    }

    /// Apply a visibility edge. Returns the command to play, if any.
    pub fn on_visibility(&mut self, in_view: bool) -> Option<SectionCommand> {
        let kind = match (self.phase, in_view) {
            (SectionPhase::Idle | SectionPhase::Hidden, true) => {
                self.phase = SectionPhase::Visible;
                AnimKind::Enter
            }
            (SectionPhase::Visible, false) => {
                self.phase = SectionPhase::Hidden;
                AnimKind::Exit
            }
            _ => {
                log::trace!("[sections] {} ignoring in_view={}", self.id, in_view);
                return None;
            }
        };
        log::debug!("[sections] {} {:?} -> {:?}", self.id, kind, self.phase);
        Some(SectionCommand {
            section: self.id,
            kind,
        })
    }
}
