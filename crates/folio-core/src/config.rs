//! Tuning values gathered into one value passed to the page root.

use crate::constants::*;
use thiserror::Error;

/// Layout decided once at mount from the initial viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Narrow,
    Wide,
}

impl LayoutMode {
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width <= breakpoint {
            LayoutMode::Narrow
        } else {
            LayoutMode::Wide
        }
    }

    #[inline]
    pub fn is_narrow(self) -> bool {
        self == LayoutMode::Narrow
    }
}

/// Primary input modality, detected at mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputModality {
    Touch,
    Pointer,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} threshold {value} is outside (0, 1]")]
    Threshold { name: &'static str, value: f32 },
    #[error("backdrop fade span must be positive, got {0}")]
    FadeSpan(f32),
    #[error("backdrop fade depth {0} is outside [0, 1]")]
    FadeDepth(f32),
    #[error("backdrop fade offset {0} is outside [0, 1]")]
    FadeOffset(f32),
    #[error("narrow breakpoint must be positive, got {0}")]
    Breakpoint(f64),
    #[error("{name} must not be negative, got {value}")]
    NegativeDuration { name: &'static str, value: f64 },
}

/// Backdrop half-fade parameters for one layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeRange {
    pub offset: f32,
    pub span: f32,
    pub depth: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub narrow_breakpoint_px: f64,
    pub resize_debounce_ms: f64,

    pub fade_wide: FadeRange,
    pub fade_narrow: FadeRange,

    pub about_threshold: f32,
    pub projects_threshold: f32,
    pub projects_threshold_touch: f32,
    pub contact_threshold: f32,

    pub overlay_reveal_delay_ms: f64,
    pub overlay_content_enter_ms: f64,
    pub overlay_unmount_delay_ms: f64,
    pub overlay_cover_exit_ms: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint_px: NARROW_BREAKPOINT_PX,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            fade_wide: FadeRange {
                offset: BACKDROP_FADE_OFFSET_WIDE,
                span: BACKDROP_FADE_SPAN,
                depth: BACKDROP_FADE_DEPTH,
            },
            fade_narrow: FadeRange {
                offset: BACKDROP_FADE_OFFSET_NARROW,
                span: BACKDROP_FADE_SPAN,
                depth: BACKDROP_FADE_DEPTH,
            },
            about_threshold: ABOUT_VISIBILITY_THRESHOLD,
            projects_threshold: PROJECTS_VISIBILITY_THRESHOLD,
            projects_threshold_touch: PROJECTS_VISIBILITY_THRESHOLD_TOUCH,
            contact_threshold: CONTACT_VISIBILITY_THRESHOLD,
            overlay_reveal_delay_ms: OVERLAY_REVEAL_DELAY_MS,
            overlay_content_enter_ms: OVERLAY_CONTENT_ENTER_MS,
            overlay_unmount_delay_ms: OVERLAY_UNMOUNT_DELAY_MS,
            overlay_cover_exit_ms: OVERLAY_COVER_EXIT_MS,
        }
    }
}

impl MotionConfig {
    /// Fade range for the given layout. Narrow layouts start fading earlier.
    pub fn fade_for(&self, layout: LayoutMode) -> FadeRange {
        match layout {
            LayoutMode::Narrow => self.fade_narrow,
            LayoutMode::Wide => self.fade_wide,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.narrow_breakpoint_px > 0.0) {
            return Err(ConfigError::Breakpoint(self.narrow_breakpoint_px));
        }
        for fade in [self.fade_wide, self.fade_narrow] {
            if !(fade.span > 0.0) {
                return Err(ConfigError::FadeSpan(fade.span));
            }
            if !(0.0..=1.0).contains(&fade.depth) {
                return Err(ConfigError::FadeDepth(fade.depth));
            }
            if !(0.0..=1.0).contains(&fade.offset) {
                return Err(ConfigError::FadeOffset(fade.offset));
            }
        }
        let thresholds = [
            ("about", self.about_threshold),
            ("projects", self.projects_threshold),
            ("projects (touch)", self.projects_threshold_touch),
            ("contact", self.contact_threshold),
        ];
        for (name, value) in thresholds {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::Threshold { name, value });
            }
        }
        let durations = [
            ("resize debounce", self.resize_debounce_ms),
            ("overlay reveal delay", self.overlay_reveal_delay_ms),
            ("overlay content enter", self.overlay_content_enter_ms),
            ("overlay unmount delay", self.overlay_unmount_delay_ms),
            ("overlay cover exit", self.overlay_cover_exit_ms),
        ];
        for (name, value) in durations {
            if !(value >= 0.0) {
                return Err(ConfigError::NegativeDuration { name, value });
            }
        }
        Ok(())
    }
}
