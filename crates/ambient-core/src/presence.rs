//! Idle/focus presence state machine.
//!
//! `Active -> Idle -> Focus`, where `Focus` is only reachable from `Idle` and
//! only when the visitor had scrolled deep enough before going quiet. Every
//! pending transition carries a [`TimerToken`]; scheduling or cancelling bumps
//! the generation so a late callback holding an old token cannot fire.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Presence {
    Active,
    /// `deep_scroll` records whether scroll depth exceeded the focus threshold
    /// at idle-entry.
    Idle { since: Duration, deep_scroll: bool },
    /// `since` is the idle-entry time, not the focus-entry time.
    Focus { since: Duration },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    EnterIdle,
    EnterFocus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingTransition {
    pub transition: Transition,
    pub due: Duration,
    pub token: TimerToken,
}

#[derive(Clone, Debug)]
pub struct PresenceMachine {
    idle_after: Duration,
    focus_after: Duration,
    focus_depth_threshold: f32,
    state: Presence,
    pending: Option<PendingTransition>,
    generation: u64,
}

impl PresenceMachine {
    /// Start `Active` at `now` with the first idle deadline armed.
    pub fn new(
        now: Duration,
        idle_after: Duration,
        focus_after: Duration,
        focus_depth_threshold: f32,
    ) -> Self {
        let mut machine = Self {
            idle_after,
            focus_after,
            focus_depth_threshold,
            state: Presence::Active,
            pending: None,
            generation: 0,
        };
        machine.schedule(Transition::EnterIdle, now + idle_after);
        machine
    }

    pub fn state(&self) -> Presence {
        self.state
    }

    pub fn pending(&self) -> Option<PendingTransition> {
        self.pending
    }

    pub fn is_idle(&self) -> bool {
        !matches!(self.state, Presence::Active)
    }

    pub fn is_focus(&self) -> bool {
        matches!(self.state, Presence::Focus { .. })
    }

    pub fn idle_since(&self) -> Option<Duration> {
        match self.state {
            Presence::Active => None,
            Presence::Idle { since, .. } | Presence::Focus { since } => Some(since),
        }
    }

    /// Record an accepted input sample. Cancels whatever was pending, returns
    /// to `Active` and re-arms the idle deadline. Returns true if the visitor
    /// was idle before.
    pub fn activity(&mut self, now: Duration) -> bool {
        let was_idle = self.is_idle();
        self.cancel();
        self.state = Presence::Active;
        self.schedule(Transition::EnterIdle, now + self.idle_after);
        if was_idle {
            log::debug!("[presence] active again at {:.1}s", now.as_secs_f32());
        }
        was_idle
    }

    /// Fire the pending transition identified by `token` if it is still
    /// current and due. `scroll_depth` is the depth at the moment of firing.
    pub fn fire(&mut self, token: TimerToken, now: Duration, scroll_depth: f32) -> bool {
        match self.pending {
            Some(p) if p.token == token && p.due <= now => {
                self.pending = None;
                self.apply(p, scroll_depth);
                true
            }
            Some(p) if p.token == token => false,
            _ => {
                log::trace!("[presence] ignoring stale timer {:?}", token);
                false
            }
        }
    }

    /// Fire whatever is due by `now`. Returns true if the state changed.
    pub fn advance(&mut self, now: Duration, scroll_depth: f32) -> bool {
        let mut changed = false;
        while let Some(p) = self.pending {
            if p.due > now {
                break;
            }
            changed |= self.fire(p.token, now, scroll_depth);
        }
        changed
    }

    fn apply(&mut self, p: PendingTransition, scroll_depth: f32) {
        match (p.transition, self.state) {
            (Transition::EnterIdle, Presence::Active) => {
                let deep_scroll = scroll_depth > self.focus_depth_threshold;
                self.state = Presence::Idle {
                    since: p.due,
                    deep_scroll,
                };
                log::debug!(
                    "[presence] idle at {:.1}s (depth {:.2}, focus armed: {})",
                    p.due.as_secs_f32(),
                    scroll_depth,
                    deep_scroll
                );
                if deep_scroll {
                    self.schedule(Transition::EnterFocus, p.due + self.focus_after);
                }
            }
            (
                Transition::EnterFocus,
                Presence::Idle {
                    since,
                    deep_scroll: true,
                },
            ) => {
                self.state = Presence::Focus { since };
                log::debug!("[presence] focus mode at {:.1}s", p.due.as_secs_f32());
            }
            (t, s) => log::trace!("[presence] {:?} does not apply in {:?}", t, s),
        }
    }

    fn schedule(&mut self, transition: Transition, due: Duration) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(PendingTransition {
            transition,
            due,
            token: TimerToken(self.generation),
        });
    }

    fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }
}
