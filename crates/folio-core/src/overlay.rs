//! Open/close sequencing for the project detail overlay.
//!
//! ```text
//! Closed --open--> Opening --reveal--> ContentRevealing --enter--> ContentVisible
//!                     |                        |                        |
//!                   close                    close                    close
//!                     v                        v                        v
//! Closed <--exit-- Closing <--unmount-- ContentHiding <-----------------+
//! ```
//!
//! `open` from `ContentHiding` or `Closing` restarts at `Opening` and drops
//! the pending timer, so a delayed unmount from an earlier close can never
//! hide an overlay that was reopened in the meantime.

use crate::config::MotionConfig;
use crate::constants::*;
use crate::project::Project;
use crate::timer::{TimerSlot, TimerToken};

/// Capability to suspend and resume page scrolling.
pub trait ScrollLock {
    fn set_scroll_locked(&mut self, locked: bool);
}

impl<T: ScrollLock + ?Sized> ScrollLock for &mut T {
    fn set_scroll_locked(&mut self, locked: bool) {
        (**self).set_scroll_locked(locked)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayPhase {
    Closed,
    /// Cover animating in, content not shown yet.
    Opening,
    /// Content shown, its entrance still playing.
    ContentRevealing,
    ContentVisible,
    /// Content hidden, cover still up.
    ContentHiding,
    /// Cover animating out, scroll released.
    Closing,
}

impl OverlayPhase {
    #[inline]
    pub fn overlay_visible(self) -> bool {
        matches!(
            self,
            OverlayPhase::Opening
                | OverlayPhase::ContentRevealing
                | OverlayPhase::ContentVisible
                | OverlayPhase::ContentHiding
        )
    }

    #[inline]
    pub fn content_visible(self) -> bool {
        matches!(
            self,
            OverlayPhase::ContentRevealing | OverlayPhase::ContentVisible
        )
    }

    #[inline]
    pub fn is_mounted(self) -> bool {
        self != OverlayPhase::Closed
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct OverlayDelays {
    reveal_ms: f64,
    content_enter_ms: f64,
    unmount_ms: f64,
    cover_exit_ms: f64,
}

pub struct OverlayController<L: ScrollLock> {
    phase: OverlayPhase,
    selected: Option<Project>,
    timer: TimerSlot,
    delays: OverlayDelays,
    lock: L,
}

impl<L: ScrollLock> std::fmt::Debug for OverlayController<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayController")
            .field("phase", &self.phase)
            .field("selected", &self.selected.as_ref().map(|p| p.id))
            .field("timer", &self.timer)
            .finish()
    }
}

impl<L: ScrollLock> OverlayController<L> {
    pub fn new(lock: L, config: &MotionConfig) -> Self {
        Self {
            phase: OverlayPhase::Closed,
            selected: None,
            timer: TimerSlot::new(),
            delays: OverlayDelays {
                reveal_ms: config.overlay_reveal_delay_ms,
                content_enter_ms: config.overlay_content_enter_ms,
                unmount_ms: config.overlay_unmount_delay_ms,
                cover_exit_ms: config.overlay_cover_exit_ms,
            },
            lock,
        }
    }

    #[inline]
    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    #[inline]
    pub fn overlay_visible(&self) -> bool {
        self.phase.overlay_visible()
    }

    #[inline]
    pub fn content_visible(&self) -> bool {
        self.phase.content_visible()
    }

    /// Project shown by the content renderer; kept until fully closed.
    pub fn selected(&self) -> Option<&Project> {
        self.selected.as_ref()
    }

    /// Token of the pending phase timer, for hosts that schedule real timers.
    pub fn pending_timer(&self) -> Option<(TimerToken, f64)> {
        Some((self.timer.pending()?, self.timer.due_ms()?))
    }

    pub fn lock(&self) -> &L {
        &self.lock
    }

    /// Stacking of the section that hosts the overlay.
    pub fn host_z_index(&self) -> i32 {
        if self.overlay_visible() {
            SECTION_Z_INDEX_RAISED
        } else {
            SECTION_Z_INDEX
        }
    }

    /// Pointer events reach the overlay only once content is shown.
    #[inline]
    pub fn pointer_events_enabled(&self) -> bool {
        self.content_visible()
    }

    /// Touch gestures stop at the overlay boundary while it is mounted.
    #[inline]
    pub fn isolates_touch(&self) -> bool {
        self.phase.is_mounted()
    }

    #[inline]
    pub fn close_button_visible(&self) -> bool {
        self.content_visible()
    }

    pub fn open(&mut self, project: Project, now_ms: f64) -> Option<TimerToken> {
        log::debug!("[overlay] open {} in {:?}", project.id, self.phase);
        self.selected = Some(project);
        match self.phase {
            OverlayPhase::Closed | OverlayPhase::ContentHiding | OverlayPhase::Closing => {
                self.timer.cancel();
                self.enter(OverlayPhase::Opening);
                Some(self.timer.arm(now_ms, self.delays.reveal_ms))
            }
            // Reveal already pending or content already up: swap in place.
            OverlayPhase::Opening
            | OverlayPhase::ContentRevealing
            | OverlayPhase::ContentVisible => None,
        }
    }

    pub fn close(&mut self, now_ms: f64) -> Option<TimerToken> {
        match self.phase {
            OverlayPhase::Opening
            | OverlayPhase::ContentRevealing
            | OverlayPhase::ContentVisible => {
                self.timer.cancel();
                self.enter(OverlayPhase::ContentHiding);
                Some(self.timer.arm(now_ms, self.delays.unmount_ms))
            }
            OverlayPhase::Closed | OverlayPhase::ContentHiding | OverlayPhase::Closing => {
                log::trace!("[overlay] close ignored in {:?}", self.phase);
                None
            }
        }
    }

    /// Advance through every phase whose deadline has passed by `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let mut changed = false;
        while let Some(due) = self.timer.due_ms() {
            if now_ms < due {
                break;
            }
            self.timer.poll(now_ms);
            self.on_deadline(due);
            changed = true;
        }
        changed
    }

    /// Deliver the expiry of a host timer. Stale tokens are ignored.
    pub fn fire(&mut self, token: TimerToken, now_ms: f64) -> Option<TimerToken> {
        let due = self.timer.due_ms().unwrap_or(now_ms);
        if !self.timer.take(token) {
            log::trace!("[overlay] stale timer {}", token.raw());
            return None;
        }
        self.on_deadline(due.min(now_ms));
        self.timer.pending()
    }

    // Deadlines chain from the time the previous one was due, not from when
    // it was observed, so a late frame does not stretch the sequence.
    fn on_deadline(&mut self, at_ms: f64) {
        match self.phase {
            OverlayPhase::Opening => {
                self.enter(OverlayPhase::ContentRevealing);
                self.timer.arm(at_ms, self.delays.content_enter_ms);
            }
            OverlayPhase::ContentRevealing => self.enter(OverlayPhase::ContentVisible),
            OverlayPhase::ContentHiding => {
                self.enter(OverlayPhase::Closing);
                self.timer.arm(at_ms, self.delays.cover_exit_ms);
            }
            OverlayPhase::Closing => {
                self.enter(OverlayPhase::Closed);
                self.selected = None;
            }
            OverlayPhase::Closed | OverlayPhase::ContentVisible => {}
        }
    }

    fn enter(&mut self, next: OverlayPhase) {
        let was_locked = self.phase.overlay_visible();
        let lock = next.overlay_visible();
        log::debug!("[overlay] {:?} -> {:?}", self.phase, next);
        self.phase = next;
        if lock != was_locked {
            self.lock.set_scroll_locked(lock);
        }
    }
}
