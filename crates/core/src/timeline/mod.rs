/// Virtual millisecond clock. Time only moves when the owner advances it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackClock {
    pub now_ms: u64,
}

impl PlaybackClock {
    pub fn reset(&mut self) {
        self.now_ms = 0;
    }

    pub fn advance(&mut self, delta_ms: u64) {
        self.now_ms = self.now_ms.saturating_add(delta_ms);
    }
}

/// A message due at a given time.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledEvent<T> {
    pub due_ms: u64,
    seq: u64,
    pub message: T,
}

/// Fixed-delay timer queue. Due messages come out in time order; messages due
/// at the same instant come out in the order they were scheduled.
#[derive(Debug)]
pub struct Scheduler<T> {
    events: Vec<ScheduledEvent<T>>,
    next_seq: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: u64, message: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        let at = self
            .events
            .partition_point(|event| (event.due_ms, event.seq) <= (due_ms, seq));
        self.events.insert(at, ScheduledEvent { due_ms, seq, message });
    }

    /// Removes and returns the earliest message due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<ScheduledEvent<T>> {
        match self.events.first() {
            Some(event) if event.due_ms <= now_ms => Some(self.events.remove(0)),
            _ => None,
        }
    }

    pub fn next_due(&self) -> Option<u64> {
        self.events.first().map(|event| event.due_ms)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
