use crate::frame::DeadlineTimer;
use ambient_core::{AmbientAggregator, AmbientEvent, AmbientState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Page-session context shared by every browser callback.
#[derive(Clone)]
pub struct Session {
    pub aggregator: Rc<RefCell<AmbientAggregator>>,
    pub deadline: Rc<RefCell<DeadlineTimer>>,
    /// Last published snapshot, readable while the aggregator is mid-update.
    pub latest: Rc<RefCell<Rc<AmbientState>>>,
    started: Instant,
}

impl Session {
    pub fn new(
        aggregator: AmbientAggregator,
        latest: Rc<RefCell<Rc<AmbientState>>>,
        started: Instant,
    ) -> Self {
        Self {
            aggregator: Rc::new(RefCell::new(aggregator)),
            deadline: Rc::new(RefCell::new(DeadlineTimer::default())),
            latest,
            started,
        }
    }

    /// Time since mount, the aggregator's time base.
    #[inline]
    pub fn now(&self) -> Duration {
        self.started.elapsed()
    }

    /// Feed one event and re-arm the deadline timer for whatever is pending.
    pub fn dispatch(&self, event: AmbientEvent) {
        let now = self.now();
        let next_deadline = match self.aggregator.try_borrow_mut() {
            Ok(mut agg) => {
                agg.handle(now, event);
                agg.next_deadline()
            }
            Err(_) => {
                // a subscriber re-entered us; the next tick picks the work up
                log::warn!("[session] dropped {:?} during publish", event);
                return;
            }
        };
        if matches!(event, AmbientEvent::Deadline) {
            self.deadline.borrow_mut().fired();
        }
        self.deadline.borrow_mut().rearm(now, next_deadline);
    }
}
