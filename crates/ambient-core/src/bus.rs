use crate::state::AmbientState;
use smallvec::SmallVec;

pub type Listener = Box<dyn FnMut(&AmbientState)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u32);

/// Read-only fan-out of finished snapshots to subscribers.
#[derive(Default)]
pub struct SignalBus {
    listeners: SmallVec<[(SubscriptionId, Listener); 8]>,
    next_id: u32,
}

impl SignalBus {
    pub fn subscribe(&mut self, listener: impl FnMut(&AmbientState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn publish(&mut self, state: &AmbientState) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(state);
        }
    }
}
