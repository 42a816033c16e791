//! In-memory record of timer activity.
//!
//! A bounded ring buffer: once full, each new record evicts the oldest.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use crate::scheduler::TimerId;

// =============================================================================
// Timer Event
// =============================================================================

/// Something that happened to a timer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    /// A timer was queued.
    Scheduled {
        /// The timer.
        id: TimerId,
        /// When it becomes due, in clock time.
        deadline: Duration,
    },

    /// A timer's callback ran.
    Fired {
        /// The timer.
        id: TimerId,
        /// How long after its deadline it ran.
        late_by: Duration,
    },

    /// A pending timer was cancelled.
    Cancelled {
        /// The timer.
        id: TimerId,
    },
}

impl TimerEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Scheduled { .. } => "scheduled",
            Self::Fired { .. } => "fired",
            Self::Cancelled { .. } => "cancelled",
        }
    }

    /// The timer this event is about.
    #[must_use]
    pub fn timer(&self) -> TimerId {
        match self {
            Self::Scheduled { id, .. } | Self::Fired { id, .. } | Self::Cancelled { id } => *id,
        }
    }
}

/// A traced event with its sequence number and clock time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimerRecord {
    /// Monotonic record number; survives [`TimerTrace::clear`].
    pub seq: u64,
    /// Clock time when the event was recorded.
    pub at: Duration,
    /// What happened.
    pub event: TimerEvent,
}

impl TimerRecord {
    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}

// =============================================================================
// Timer Trace
// =============================================================================

/// Ring buffer of [`TimerRecord`]s, oldest first.
#[derive(Clone, Debug)]
pub struct TimerTrace {
    records: VecDeque<TimerRecord>,
    capacity: usize,
    next_seq: u64,
}

impl TimerTrace {
    /// Creates an empty trace holding at most `capacity` records.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            next_seq: 0,
        }
    }

    /// Appends an event, evicting the oldest record when full.
    ///
    /// Returns the record's sequence number.
    pub fn push(&mut self, at: Duration, event: TimerEvent) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;

        self.records.push_back(TimerRecord { seq, at, event });
        while self.records.len() > self.capacity {
            self.records.pop_front();
        }
        seq
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maximum number of records held.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops all records. Sequence numbers keep counting up.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Iterates records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TimerRecord> {
        self.records.iter()
    }

    /// The newest `count` records, oldest first.
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<&TimerRecord> {
        let start = self.records.len().saturating_sub(count);
        self.records.iter().skip(start).collect()
    }

    /// Records matching a predicate.
    pub fn filter<F>(&self, predicate: F) -> Vec<&TimerRecord>
    where
        F: Fn(&TimerRecord) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    /// Records whose event type is `event_type` (`"scheduled"`, `"fired"`,
    /// or `"cancelled"`).
    #[must_use]
    pub fn by_event_type(&self, event_type: &str) -> Vec<&TimerRecord> {
        self.filter(|r| r.event_type() == event_type)
    }

    /// Records about one timer.
    #[must_use]
    pub fn for_timer(&self, id: TimerId) -> Vec<&TimerRecord> {
        self.filter(|r| r.event.timer() == id)
    }

    /// Summary counts.
    #[must_use]
    pub fn stats(&self) -> TimerTraceStats {
        let mut event_counts = HashMap::new();
        let mut max_late_by = Duration::ZERO;
        for record in &self.records {
            *event_counts.entry(record.event_type()).or_insert(0) += 1;
            if let TimerEvent::Fired { late_by, .. } = record.event {
                max_late_by = max_late_by.max(late_by);
            }
        }

        TimerTraceStats {
            record_count: self.records.len(),
            capacity: self.capacity,
            event_counts,
            max_late_by,
        }
    }
}

impl Default for TimerTrace {
    fn default() -> Self {
        Self::new(1024)
    }
}

/// Statistics about a [`TimerTrace`].
#[derive(Clone, Debug)]
pub struct TimerTraceStats {
    /// Number of records currently held.
    pub record_count: usize,
    /// Maximum number of records.
    pub capacity: usize,
    /// Count of each event type.
    pub event_counts: HashMap<&'static str, usize>,
    /// Largest lateness among the held `fired` records.
    pub max_late_by: Duration,
}
