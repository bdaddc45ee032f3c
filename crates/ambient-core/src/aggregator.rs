//! The ambient signal aggregator.
//!
//! All mutation goes through [`AmbientAggregator::handle`]. Time is a
//! `Duration` since session start supplied by the host, so the same code runs
//! against `performance.now()` in the browser and a simulated clock in tests.
//!
//! Work that happens "later" (throttle windows closing, idle and focus
//! transitions) is tracked as deadlines. A host arms one timer for
//! [`AmbientAggregator::next_deadline`] and sends [`AmbientEvent::Deadline`]
//! when it fires; due work is processed in chronological order, and the
//! periodic [`AmbientEvent::Tick`] catches up on anything a late timer missed.

use crate::bus::{SignalBus, SubscriptionId};
use crate::capability::{CapabilityHints, PerformanceTier};
use crate::clock::{TimeOfDay, WallClock};
use crate::config::AmbientConfig;
use crate::constants::{MIN_SAMPLE_ELAPSED, SPEED_STALE_AFTER};
use crate::intensity::{next_intensity, target_intensity, IntensityInputs};
use crate::presence::PresenceMachine;
use crate::state::{AmbientState, ScrollMetrics};
use crate::throttle::Throttle;
use glam::IVec2;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AmbientEvent {
    /// Raw pointer position in CSS pixels.
    PointerMoved(IVec2),
    Scrolled(ScrollMetrics),
    ReducedMotionChanged(bool),
    /// A host timer armed for `next_deadline` fired.
    Deadline,
    /// Fixed-interval tick driving intensity, idle duration and the clock.
    Tick,
}

#[derive(Clone, Copy, Debug)]
enum Due {
    Pointer(Duration),
    Scroll(Duration),
    Presence(Duration),
}

impl Due {
    fn at(self) -> Duration {
        match self {
            Due::Pointer(t) | Due::Scroll(t) | Due::Presence(t) => t,
        }
    }
}

pub struct AmbientAggregator {
    config: AmbientConfig,
    clock: Box<dyn WallClock>,
    state: Rc<AmbientState>,
    pointer_throttle: Throttle<IVec2>,
    scroll_throttle: Throttle<ScrollMetrics>,
    presence: PresenceMachine,
    last_pointer_at: Option<Duration>,
    last_scroll_at: Option<Duration>,
    last_tick: Duration,
    last_clock_sample: Duration,
    bus: SignalBus,
}

impl AmbientAggregator {
    /// Mount at `now`. The performance tier is probed here and never again.
    pub fn new(
        config: AmbientConfig,
        hints: CapabilityHints,
        clock: Box<dyn WallClock>,
        now: Duration,
    ) -> Self {
        let tier = PerformanceTier::probe(&hints);
        log::info!(
            "[ambient] tier={} cores={:?} memory={:?} reduced_motion={}",
            tier.as_str(),
            hints.logical_cores,
            hints.device_memory_gb,
            hints.reduced_motion
        );
        let time_of_day = TimeOfDay::from_hour(clock.local_hour());
        let presence = PresenceMachine::new(
            now,
            config.idle_after,
            config.focus_after,
            config.focus_depth_threshold,
        );
        Self {
            pointer_throttle: Throttle::new(config.pointer_throttle),
            scroll_throttle: Throttle::new(config.scroll_throttle),
            state: Rc::new(AmbientState::initial(
                time_of_day,
                hints.reduced_motion,
                tier,
            )),
            presence,
            config,
            clock,
            last_pointer_at: None,
            last_scroll_at: None,
            last_tick: now,
            last_clock_sample: now,
            bus: SignalBus::default(),
        }
    }

    /// Current snapshot. Cheap to clone and never mutated after publication.
    pub fn snapshot(&self) -> Rc<AmbientState> {
        self.state.clone()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&AmbientState) + 'static) -> SubscriptionId {
        self.bus.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    /// Earliest pending throttle window or presence transition.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.next_due().map(Due::at)
    }

    /// Apply one event. Subscribers are notified once, after the snapshot is
    /// complete, and only if it changed. Returns whether it changed.
    pub fn handle(&mut self, now: Duration, event: AmbientEvent) -> bool {
        let mut next = (*self.state).clone();
        match event {
            AmbientEvent::PointerMoved(pos) => {
                self.process_due(now, &mut next);
                self.pointer_throttle.offer(now, pos);
            }
            AmbientEvent::Scrolled(metrics) => {
                self.process_due(now, &mut next);
                self.scroll_throttle.offer(now, metrics);
            }
            AmbientEvent::ReducedMotionChanged(reduced) => {
                self.process_due(now, &mut next);
                if next.reduced_motion != reduced {
                    log::info!("[ambient] reduced motion preference -> {}", reduced);
                }
                next.reduced_motion = reduced;
            }
            AmbientEvent::Deadline => self.process_due(now, &mut next),
            AmbientEvent::Tick => {
                self.process_due(now, &mut next);
                self.tick(now, &mut next);
            }
        }
        self.commit(next)
    }

    fn next_due(&self) -> Option<Due> {
        [
            self.pointer_throttle.deadline().map(Due::Pointer),
            self.scroll_throttle.deadline().map(Due::Scroll),
            self.presence.pending().map(|p| Due::Presence(p.due)),
        ]
        .into_iter()
        .flatten()
        // min_by_key keeps the first of equal keys: samples win ties with presence
        .min_by_key(|d| d.at())
    }

    fn process_due(&mut self, now: Duration, next: &mut AmbientState) {
        while let Some(due) = self.next_due() {
            if due.at() > now {
                break;
            }
            match due {
                Due::Pointer(at) => {
                    if let Some((pos, at)) = self.pointer_throttle.flush(at) {
                        self.accept_pointer(pos, at, next);
                    }
                }
                Due::Scroll(at) => {
                    if let Some((metrics, at)) = self.scroll_throttle.flush(at) {
                        self.accept_scroll(metrics, at, next);
                    }
                }
                Due::Presence(at) => {
                    self.presence.advance(at, next.scroll.depth);
                }
            }
        }
        self.sync_presence(now, next);
    }

    fn accept_pointer(&mut self, pos: IVec2, at: Duration, next: &mut AmbientState) {
        let speed = match self.last_pointer_at {
            Some(prev_at) => {
                let dist = (pos - next.pointer.position).as_vec2().length();
                dist / elapsed_ms(prev_at, at)
            }
            None => 0.0,
        };
        next.pointer.position = pos;
        next.pointer.speed = speed;
        self.last_pointer_at = Some(at);
        self.presence.activity(at);
    }

    fn accept_scroll(&mut self, metrics: ScrollMetrics, at: Duration, next: &mut AmbientState) {
        let speed = match self.last_scroll_at {
            Some(prev_at) => (metrics.offset - next.scroll.offset).abs() / elapsed_ms(prev_at, at),
            None => 0.0,
        };
        next.scroll.offset = metrics.offset;
        next.scroll.speed = speed;
        next.scroll.depth = metrics.depth();
        self.last_scroll_at = Some(at);
        self.presence.activity(at);
    }

    fn sync_presence(&self, now: Duration, next: &mut AmbientState) {
        next.idle = self.presence.is_idle();
        next.focus_mode = self.presence.is_focus();
        // measured from the latest idle entry, which may be newer than the last
        // tick when a late timer replays activity and a fresh timeout together
        next.idle_duration_secs = self
            .presence
            .idle_since()
            .map(|since| now.saturating_sub(since).as_secs_f32())
            .unwrap_or(0.0);
    }

    fn tick(&mut self, now: Duration, next: &mut AmbientState) {
        if is_stale(self.last_pointer_at, now) {
            next.pointer.speed = 0.0;
        }
        if is_stale(self.last_scroll_at, now) {
            next.scroll.speed = 0.0;
        }

        if now.saturating_sub(self.last_clock_sample) >= self.config.clock_resample {
            next.time_of_day = TimeOfDay::from_hour(self.clock.local_hour());
            self.last_clock_sample = now;
        }

        let inputs = IntensityInputs {
            reduced_motion: next.reduced_motion,
            idle_secs: next.idle.then_some(next.idle_duration_secs),
            pointer_speed: next.pointer.speed,
            scroll_speed: next.scroll.speed,
        };
        let target = target_intensity(&inputs);
        let dt = now.saturating_sub(self.last_tick);
        next.animation_intensity = next_intensity(
            next.animation_intensity,
            target,
            dt,
            self.config.tick_interval,
        );
        self.last_tick = now;
    }

    fn commit(&mut self, next: AmbientState) -> bool {
        if *self.state == next {
            return false;
        }
        self.state = Rc::new(next);
        self.bus.publish(&self.state);
        true
    }
}

#[inline]
fn elapsed_ms(prev: Duration, now: Duration) -> f32 {
    now.saturating_sub(prev).max(MIN_SAMPLE_ELAPSED).as_secs_f32() * 1000.0
}

#[inline]
fn is_stale(last: Option<Duration>, now: Duration) -> bool {
    last.is_some_and(|at| now.saturating_sub(at) > SPEED_STALE_AFTER)
}
