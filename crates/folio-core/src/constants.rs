/// Presentation tuning constants.
///
/// These values express intended behavior (delays, thresholds, fade ranges)
/// and keep magic numbers out of the state machines. `MotionConfig::default()`
/// is built from them.

// Layout
pub const NARROW_BREAKPOINT_PX: f64 = 768.0; // width <= this is a narrow layout

// Viewport
pub const RESIZE_DEBOUNCE_MS: f64 = 200.0;

// Backdrop opacity fade: t = clamp((s - offset) / span), opacity = 1 - fade * t
pub const BACKDROP_FADE_OFFSET_WIDE: f32 = 0.1;
pub const BACKDROP_FADE_OFFSET_NARROW: f32 = 0.03;
pub const BACKDROP_FADE_SPAN: f32 = 0.3;
pub const BACKDROP_FADE_DEPTH: f32 = 0.5; // opacity never drops below 1 - depth

// Hero headline scroll transforms (wide layouts only for the parallax)
pub const HERO_PARALLAX_END: f32 = 0.5; // scroll fraction where the shift completes
pub const HERO_PARALLAX_PX: f32 = -200.0;
pub const HERO_FADE_END: f32 = 0.3;

// Hue cycle (degrees per second), starting hues in degrees
pub const HUE_PRIMARY_DEG_PER_SEC: f32 = 40.0;
pub const HUE_SECONDARY_DEG_PER_SEC: f32 = 25.0;
pub const HUE_PRIMARY_START_DEG: f32 = 0.0;
pub const HUE_SECONDARY_START_DEG: f32 = 180.0;
pub const HUE_MAX_STEP_SEC: f32 = 0.1; // clamp for long frame gaps (backgrounded tab)

// Section visibility thresholds (fraction of the section's area in view)
pub const ABOUT_VISIBILITY_THRESHOLD: f32 = 0.3;
pub const PROJECTS_VISIBILITY_THRESHOLD: f32 = 0.3;
pub const PROJECTS_VISIBILITY_THRESHOLD_TOUCH: f32 = 0.1;
pub const CONTACT_VISIBILITY_THRESHOLD: f32 = 0.5;

// Section variant timing (milliseconds)
pub const SECTION_ENTER_MS: f64 = 600.0;
pub const SECTION_EXIT_MS: f64 = 400.0;
pub const SECTION_STAGGER_MS: f64 = 200.0; // per item index
pub const HERO_ENTER_MS: f64 = 500.0;
pub const HERO_ENTER_DELAY_MS: f64 = 500.0;

// Overlay sequencing (milliseconds)
pub const OVERLAY_REVEAL_DELAY_MS: f64 = 800.0; // cover animates in before content shows
pub const OVERLAY_CONTENT_ENTER_MS: f64 = 600.0;
pub const OVERLAY_UNMOUNT_DELAY_MS: f64 = 800.0; // content hidden before cover leaves
pub const OVERLAY_COVER_EXIT_MS: f64 = 800.0;

// Stacking
pub const SECTION_Z_INDEX: i32 = 10;
pub const SECTION_Z_INDEX_RAISED: i32 = 20; // projects section while its overlay is up
pub const OVERLAY_Z_INDEX: i32 = 999;
pub const OVERLAY_CLOSE_Z_INDEX: i32 = 9999;

// Dark theme
pub const BACKDROP_INNER_HEX: &str = "#111111";
pub const BACKDROP_OUTER_HEX: &str = "#000000";
pub const BACKDROP_OUTER_STOP_PCT: f32 = 65.0;
pub const TEXT_HEX: &str = "#FFFFFF";
