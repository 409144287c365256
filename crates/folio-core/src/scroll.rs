/// Raw document scroll measurements in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

/// Normalized scroll position of the viewport within the document, in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollSignal(f32);

impl ScrollSignal {
    pub const TOP: ScrollSignal = ScrollSignal(0.0);

    /// Clamps into [0, 1]; NaN maps to the top.
    pub fn new(fraction: f32) -> Self {
        if fraction.is_nan() {
            return Self::TOP;
        }
        ScrollSignal(fraction.clamp(0.0, 1.0))
    }

    #[inline]
    pub fn fraction(self) -> f32 {
        self.0
    }
}

impl From<ScrollMetrics> for ScrollSignal {
    fn from(m: ScrollMetrics) -> Self {
        let range = m.document_height - m.viewport_height;
        if range <= 0.0 {
            return ScrollSignal::TOP;
        }
        ScrollSignal::new((m.scroll_y / range) as f32)
    }
}

/// Scroll events coalesced to animation-frame boundaries.
///
/// Any number of scroll events between two frames leave exactly one pending
/// signal (the newest); the frame takes it. Nothing is queued.
#[derive(Debug, Default)]
pub struct ScrollProgress {
    latest: ScrollSignal,
    pending: Option<ScrollSignal>,
}

impl ScrollProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        if self.pending.is_some() {
            log::trace!("[scroll] superseding pending recompute");
        }
        self.pending = Some(ScrollSignal::from(metrics));
    }

    /// Called once per animation frame. Returns the signal to recompute from,
    /// if any scroll arrived since the last frame.
    pub fn take_frame(&mut self) -> Option<ScrollSignal> {
        let signal = self.pending.take()?;
        self.latest = signal;
        Some(signal)
    }

    /// Signal applied by the most recent frame.
    #[inline]
    pub fn latest(&self) -> ScrollSignal {
        self.latest
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
