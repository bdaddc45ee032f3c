use crate::session::Session;
use ambient_core::AmbientEvent;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One cancellable `setTimeout` armed for the aggregator's next deadline.
/// Re-arming always clears the previous handle first.
#[derive(Default)]
pub struct DeadlineTimer {
    handle: Option<i32>,
    armed_for: Option<Duration>,
    callback: Option<Closure<dyn FnMut()>>,
}

impl DeadlineTimer {
    pub fn set_callback(&mut self, callback: Closure<dyn FnMut()>) {
        self.callback = Some(callback);
    }

    /// The browser already consumed the handle.
    pub fn fired(&mut self) {
        self.handle = None;
        self.armed_for = None;
    }

    pub fn rearm(&mut self, now: Duration, deadline: Option<Duration>) {
        if deadline == self.armed_for && (deadline.is_none() || self.handle.is_some()) {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        if let Some(h) = self.handle.take() {
            window.clear_timeout_with_handle(h);
        }
        self.armed_for = None;
        let (Some(due), Some(cb)) = (deadline, self.callback.as_ref()) else {
            return;
        };
        // round up so the callback never lands before the deadline
        let delay_ms = due.saturating_sub(now).as_micros().div_ceil(1000);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_ms.min(i32::MAX as u128) as i32,
        ) {
            Ok(h) => {
                self.handle = Some(h);
                self.armed_for = Some(due);
            }
            Err(e) => log::error!("[timer] setTimeout failed: {:?}", e),
        }
    }
}

pub fn wire_deadline_timer(session: &Session) {
    let s = session.clone();
    let closure = Closure::wrap(Box::new(move || {
        s.dispatch(AmbientEvent::Deadline);
    }) as Box<dyn FnMut()>);
    session.deadline.borrow_mut().set_callback(closure);
    let now = session.now();
    let next = session.aggregator.borrow().next_deadline();
    session.deadline.borrow_mut().rearm(now, next);
}

/// Fixed-interval tick driving intensity smoothing, idle duration and the
/// time-of-day clock.
pub fn start_tick_loop(session: &Session, interval: Duration) {
    let s = session.clone();
    let closure = Closure::wrap(Box::new(move || {
        s.dispatch(AmbientEvent::Tick);
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        let ms = interval.as_millis().clamp(1, i32::MAX as u128) as i32;
        if let Err(e) = w.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        ) {
            log::error!("[tick] setInterval failed: {:?}", e);
        }
    }
    closure.forget();
}
