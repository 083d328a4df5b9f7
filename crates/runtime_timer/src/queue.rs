use crate::FiredTimer;
use core_types::{Millis, TimerId, WidgetId};
use std::collections::{BTreeMap, HashMap};

/// Earliest-deadline-first timer queue; equal deadlines fire in arming order.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    next_seq: u64,
    // (deadline, seq) -> owner. `seq` doubles as the TimerId.
    by_deadline: BTreeMap<(Millis, u64), WidgetId>,
    deadlines: HashMap<TimerId, Millis>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, owner: WidgetId, deadline: Millis) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let id = TimerId(seq);
        self.by_deadline.insert((deadline, seq), owner);
        self.deadlines.insert(id, deadline);
        id
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        let Some(deadline) = self.deadlines.remove(&id) else {
            return false;
        };
        self.by_deadline.remove(&(deadline, id.0)).is_some()
    }

    /// Drop every timer armed on behalf of `owner`.
    pub fn cancel_owned_by(&mut self, owner: WidgetId) -> usize {
        let doomed: Vec<(Millis, u64)> = self
            .by_deadline
            .iter()
            .filter(|(_, o)| **o == owner)
            .map(|(key, _)| *key)
            .collect();
        for key in &doomed {
            self.by_deadline.remove(key);
            self.deadlines.remove(&TimerId(key.1));
        }
        doomed.len()
    }

    pub fn peek_deadline(&self) -> Option<Millis> {
        self.by_deadline.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Pop the earliest timer if it is due at `now`.
    pub fn pop_due(&mut self, now: Millis) -> Option<FiredTimer> {
        let (&(deadline, seq), _) = self.by_deadline.first_key_value()?;
        if deadline > now {
            return None;
        }
        let owner = self.by_deadline.remove(&(deadline, seq))?;
        let id = TimerId(seq);
        self.deadlines.remove(&id);
        Some(FiredTimer {
            id,
            owner,
            deadline,
        })
    }

    pub fn contains(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }
}
