use crate::timer::{TimerSlot, TimerToken};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Debounced window size.
///
/// Resize events only record a pending size and restart the quiet window.
/// The committed size changes once no resize arrived for `debounce_ms`.
#[derive(Debug)]
pub struct ViewportTracker {
    committed: Viewport,
    pending: Option<Viewport>,
    timer: TimerSlot,
    debounce_ms: f64,
}

impl ViewportTracker {
    pub fn new(initial: Viewport, debounce_ms: f64) -> Self {
        Self {
            committed: initial,
            pending: None,
            timer: TimerSlot::new(),
            debounce_ms,
        }
    }

    /// Latest committed dimensions.
    #[inline]
    pub fn current(&self) -> Viewport {
        self.committed
    }

    pub fn on_resize(&mut self, size: Viewport, now_ms: f64) -> TimerToken {
        self.pending = Some(size);
        self.timer.arm(now_ms, self.debounce_ms)
    }

    /// Commit the pending size if the quiet window has elapsed.
    pub fn tick(&mut self, now_ms: f64) -> Option<Viewport> {
        self.timer.poll(now_ms)?;
        self.commit()
    }

    /// Commit triggered by a host timer carrying `token`.
    pub fn fire(&mut self, token: TimerToken) -> Option<Viewport> {
        if !self.timer.take(token) {
            log::trace!("[viewport] stale debounce token {}", token.raw());
            return None;
        }
        self.commit()
    }

    fn commit(&mut self) -> Option<Viewport> {
        let size = self.pending.take()?;
        self.committed = size;
        log::debug!("[viewport] committed {}x{}", size.width, size.height);
        Some(size)
    }
}
