use core_types::Millis;
use std::time::{Duration, Instant};

pub trait Clock {
    fn now(&self) -> Millis;

    /// Move to `t`, blocking if the clock is real. Never moves backwards.
    fn wait_until(&mut self, t: Millis);
}

/// Deterministic clock that jumps straight to each deadline.
#[derive(Clone, Debug, Default)]
pub struct VirtualClock {
    now: Millis,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now: Millis) -> Self {
        Self { now }
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> Millis {
        self.now
    }

    fn wait_until(&mut self, t: Millis) {
        self.now = self.now.max(t);
    }
}

/// Wall clock measured from construction; waiting sleeps the thread.
#[derive(Clone, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Millis {
        Millis::try_from(self.origin.elapsed().as_millis()).unwrap_or(Millis::MAX)
    }

    fn wait_until(&mut self, t: Millis) {
        let now = self.now();
        if t > now {
            std::thread::sleep(Duration::from_millis(t - now));
        }
    }
}
