use crate::constants::*;

/// Two hues advancing on wall-clock time, independent of scroll.
///
/// Both stay in [0, 360). Steps longer than `HUE_MAX_STEP_SEC` are clamped so
/// a frame gap (backgrounded tab) slows the cycle instead of jumping it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HueCycle {
    pub primary: f32,
    pub secondary: f32,
    primary_speed: f32,
    secondary_speed: f32,
}

impl Default for HueCycle {
    fn default() -> Self {
        Self::new(
            HUE_PRIMARY_START_DEG,
            HUE_SECONDARY_START_DEG,
            HUE_PRIMARY_DEG_PER_SEC,
            HUE_SECONDARY_DEG_PER_SEC,
        )
    }
}

#[inline]
fn wrap_degrees(h: f32) -> f32 {
    let w = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if w >= 360.0 {
        0.0
    } else {
        w
    }
}

impl HueCycle {
    pub fn new(primary: f32, secondary: f32, primary_speed: f32, secondary_speed: f32) -> Self {
        Self {
            primary: wrap_degrees(primary),
            secondary: wrap_degrees(secondary),
            primary_speed,
            secondary_speed,
        }
    }

    pub fn advance(&mut self, dt_sec: f32) {
        let dt = if dt_sec.is_finite() {
            dt_sec.clamp(0.0, HUE_MAX_STEP_SEC)
        } else {
            0.0
        };
        self.primary = wrap_degrees(self.primary + self.primary_speed * dt);
        self.secondary = wrap_degrees(self.secondary + self.secondary_speed * dt);
    }

    /// Horizontal text gradient between the two hues.
    pub fn gradient_css(&self) -> String {
        format!(
            "linear-gradient(90deg, hsl({:.1}, 100%, 50%), hsl({:.1}, 100%, 50%))",
            self.primary, self.secondary
        )
    }
}
