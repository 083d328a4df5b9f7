//! Listener bookkeeping for an event target.
//!
//! Listeners are plain subscriptions (`ListenerId` + kind). The owner of a
//! listener keeps its own table mapping ids to actions, so removing every id it
//! installed is enough to fully detach from the target.

use crate::kind::NativeEventKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

#[derive(Clone, Debug, Default)]
pub struct EventTarget {
    next_id: u64,
    // Registration order is dispatch order.
    listeners: Vec<(ListenerId, NativeEventKind)>,
}

impl EventTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, kind: NativeEventKind) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, kind));
        id
    }

    /// Removes a listener. Returns `false` if `id` was not installed.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let Some(pos) = self.listeners.iter().position(|(l, _)| *l == id) else {
            return false;
        };
        self.listeners.remove(pos);
        true
    }

    /// Listener ids subscribed to `kind`, in registration order.
    pub fn listeners_for(&self, kind: NativeEventKind) -> impl Iterator<Item = ListenerId> + '_ {
        self.listeners
            .iter()
            .filter(move |(_, k)| *k == kind)
            .map(|(id, _)| *id)
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|(l, _)| *l == id)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_order_follows_registration() {
        let mut target = EventTarget::new();
        let a = target.add_listener(NativeEventKind::Input);
        let _ = target.add_listener(NativeEventKind::Click);
        let b = target.add_listener(NativeEventKind::Input);

        let ids: Vec<_> = target.listeners_for(NativeEventKind::Input).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn removing_unknown_listener_is_not_an_error() {
        let mut target = EventTarget::new();
        let id = target.add_listener(NativeEventKind::Copy);

        assert!(target.remove_listener(id));
        assert!(!target.remove_listener(id));
        assert!(target.is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut target = EventTarget::new();
        let first = target.add_listener(NativeEventKind::Paste);
        target.remove_listener(first);
        let second = target.add_listener(NativeEventKind::Paste);

        assert_ne!(first, second);
        assert!(!target.contains(first));
        assert!(target.contains(second));
    }

    #[test]
    fn ids_keep_increasing_across_churn() {
        let mut target = EventTarget::new();
        let mut last = None;
        for _ in 0..1_000 {
            let id = target.add_listener(NativeEventKind::Input);
            if let Some(prev) = last {
                assert!(id > prev);
            }
            target.remove_listener(id);
            last = Some(id);
        }
        assert_eq!(last, Some(ListenerId(999)));
    }
}
