/// Axis-aligned box in viewport coordinates (CSS pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }
}

/// Fraction of `target`'s area that lies inside `viewport`, in [0, 1].
pub fn intersection_ratio(target: Rect, viewport: Rect) -> f32 {
    let area = target.area();
    if area <= 0.0 {
        return 0.0;
    }
    let w = (target.x + target.width).min(viewport.x + viewport.width) - target.x.max(viewport.x);
    let h = (target.y + target.height).min(viewport.y + viewport.height) - target.y.max(viewport.y);
    if w <= 0.0 || h <= 0.0 {
        return 0.0;
    }
    ((w * h) / area).clamp(0.0, 1.0) as f32
}

/// Per-section "sufficiently in view" flag with edge reporting.
///
/// Fed with every intersection ratio the host observes; only crossings of the
/// threshold come back out, so repeated reports on one side are absorbed.
#[derive(Clone, Copy, Debug)]
pub struct VisibilityTracker {
    threshold: f32,
    in_view: bool,
}

impl VisibilityTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            in_view: false,
        }
    }

    #[inline]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    #[inline]
    pub fn in_view(&self) -> bool {
        self.in_view
    }

    /// Record an observed ratio. Returns the new flag on a crossing.
    pub fn observe(&mut self, ratio: f32) -> Option<bool> {
        let now_in_view = ratio >= self.threshold;
        if now_in_view == self.in_view {
            return None;
        }
        self.in_view = now_in_view;
        Some(now_in_view)
    }
}
