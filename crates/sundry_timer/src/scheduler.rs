//! Cooperative timer queue.
//!
//! A [`Scheduler`] never runs anything on its own. Timers fire when the owner
//! calls [`Scheduler::run_pending`] or [`Scheduler::run_until_idle`], on the
//! owner's thread. Callbacks run with no borrow of the queue held, so they
//! may schedule or cancel timers themselves.

use std::cell::RefCell;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use sundry_foundation::Value;

use crate::clock::{Clock, SystemClock};
use crate::config::SchedulerConfig;
use crate::trace::{TimerEvent, TimerTrace};

/// Identifies a timer within its scheduler.
///
/// Ids increase in scheduling order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub(crate) u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

type Callback = Box<dyn FnOnce(&[Value])>;

struct Task {
    deadline: Duration,
    args: Vec<Value>,
    callback: Callback,
}

struct Inner {
    clock: Box<dyn Clock>,
    config: SchedulerConfig,
    /// Min-heap on `(deadline, id)`. Entries for cancelled timers stay until
    /// they reach the top.
    queue: BinaryHeap<Reverse<(Duration, TimerId)>>,
    tasks: HashMap<TimerId, Task>,
    next_id: u64,
    trace: Option<TimerTrace>,
}

impl Inner {
    fn record(&mut self, event: TimerEvent) {
        let at = self.clock.now();
        if let Some(trace) = &mut self.trace {
            trace.push(at, event);
        }
    }

    /// Drops heap entries whose timer is gone.
    fn discard_stale(&mut self) {
        while let Some(Reverse((_, id))) = self.queue.peek() {
            if self.tasks.contains_key(id) {
                break;
            }
            self.queue.pop();
        }
    }

    /// Takes the next timer due at `now` that was scheduled before `cutoff`.
    fn pop_due(&mut self, now: Duration, cutoff: TimerId) -> Option<(TimerId, Task)> {
        self.discard_stale();
        let Reverse((deadline, id)) = *self.queue.peek()?;
        if deadline > now || id >= cutoff {
            return None;
        }
        self.queue.pop();
        self.tasks.remove(&id).map(|task| (id, task))
    }
}

/// A queue of deferred calls driven by a [`Clock`].
///
/// Cloning gives another handle to the same queue.
#[derive(Clone)]
pub struct Scheduler {
    inner: Rc<RefCell<Inner>>,
}

impl Scheduler {
    /// Creates a scheduler on the system clock.
    #[must_use]
    pub fn new(config: SchedulerConfig) -> Self {
        Self::with_clock(config, SystemClock::new())
    }

    /// Creates a scheduler on the given clock.
    #[must_use]
    pub fn with_clock(config: SchedulerConfig, clock: impl Clock + 'static) -> Self {
        let trace = config
            .trace_enabled
            .then(|| TimerTrace::new(config.trace_capacity));
        Self {
            inner: Rc::new(RefCell::new(Inner {
                clock: Box::new(clock),
                config,
                queue: BinaryHeap::new(),
                tasks: HashMap::new(),
                next_id: 0,
                trace,
            })),
        }
    }

    /// Schedules `callback(&args)` to run once `wait` has elapsed.
    ///
    /// Returns immediately. Timers with equal deadlines fire in the order
    /// they were scheduled.
    pub fn delay<F>(&self, wait: Duration, args: Vec<Value>, callback: F) -> TimerHandle
    where
        F: FnOnce(&[Value]) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = TimerId(inner.next_id);
        inner.next_id += 1;

        let deadline = inner.clock.now().saturating_add(wait);
        inner.queue.push(Reverse((deadline, id)));
        inner.tasks.insert(
            id,
            Task {
                deadline,
                args,
                callback: Box::new(callback),
            },
        );
        inner.record(TimerEvent::Scheduled { id, deadline });

        TimerHandle {
            id,
            scheduler: Rc::downgrade(&self.inner),
        }
    }

    /// Fires every timer that is due now, in deadline order.
    ///
    /// Timers scheduled by these callbacks wait for a later call even when
    /// they are already due. Returns how many fired.
    pub fn run_pending(&self) -> usize {
        let (now, cutoff) = {
            let inner = self.inner.borrow();
            (inner.clock.now(), TimerId(inner.next_id))
        };

        let mut fired = 0;
        loop {
            let next = self.inner.borrow_mut().pop_due(now, cutoff);
            let Some((id, task)) = next else {
                break;
            };
            self.inner.borrow_mut().record(TimerEvent::Fired {
                id,
                late_by: now.saturating_sub(task.deadline),
            });
            (task.callback)(&task.args);
            fired += 1;
        }
        fired
    }

    /// Waits for and fires timers until none remain. Returns how many fired.
    ///
    /// Callbacks that keep scheduling new timers keep this running.
    pub fn run_until_idle(&self) -> usize {
        let mut fired = 0;
        while let Some(deadline) = self.next_deadline() {
            self.inner.borrow().clock.sleep_until(deadline);
            fired += self.run_pending();
        }
        fired
    }

    /// Number of timers waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    /// Deadline of the earliest pending timer, in clock time.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        let mut inner = self.inner.borrow_mut();
        inner.discard_stale();
        inner.queue.peek().map(|Reverse((deadline, _))| *deadline)
    }

    /// Current clock time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.inner.borrow().clock.now()
    }

    /// The configuration this scheduler was built with.
    #[must_use]
    pub fn config(&self) -> SchedulerConfig {
        self.inner.borrow().config.clone()
    }

    /// A copy of the timer trace, if tracing is enabled.
    #[must_use]
    pub fn trace_snapshot(&self) -> Option<TimerTrace> {
        self.inner.borrow().trace.clone()
    }

    /// Empties the timer trace.
    pub fn clear_trace(&self) {
        if let Some(trace) = &mut self.inner.borrow_mut().trace {
            trace.clear();
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Scheduler")
            .field("pending", &inner.tasks.len())
            .field("config", &inner.config)
            .finish_non_exhaustive()
    }
}

/// Handle to a scheduled timer.
///
/// Dropping the handle does not cancel the timer.
#[derive(Clone, Debug)]
pub struct TimerHandle {
    id: TimerId,
    scheduler: Weak<RefCell<Inner>>,
}

impl TimerHandle {
    /// The timer's id.
    #[must_use]
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Cancels the timer.
    ///
    /// Returns true if a pending timer was removed. Cancelling a timer that
    /// already fired, or was already cancelled, does nothing and returns
    /// false.
    pub fn cancel(&self) -> bool {
        let Some(inner) = self.scheduler.upgrade() else {
            return false;
        };
        let mut inner = inner.borrow_mut();
        if inner.tasks.remove(&self.id).is_some() {
            inner.record(TimerEvent::Cancelled { id: self.id });
            true
        } else {
            false
        }
    }

    /// Returns true while the timer is waiting to fire.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.scheduler
            .upgrade()
            .is_some_and(|inner| {
                let inner = inner.borrow();
                inner.tasks.contains_key(&self.id)
            })
    }
}

impl fmt::Debug for Inner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inner")
            .field("pending", &self.tasks.len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Thread-local default scheduler
// =============================================================================

thread_local! {
    static DEFAULT: Scheduler = Scheduler::default();
}

/// A handle to this thread's default scheduler.
#[must_use]
pub fn default_scheduler() -> Scheduler {
    DEFAULT.with(Scheduler::clone)
}

/// Schedules `f(&args)` on this thread's default scheduler after `wait`.
pub fn delay<F>(f: F, wait: Duration, args: Vec<Value>) -> TimerHandle
where
    F: FnOnce(&[Value]) + 'static,
{
    default_scheduler().delay(wait, args, f)
}

/// [`Scheduler::run_pending`] on this thread's default scheduler.
pub fn run_pending() -> usize {
    default_scheduler().run_pending()
}

/// [`Scheduler::run_until_idle`] on this thread's default scheduler.
pub fn run_until_idle() -> usize {
    default_scheduler().run_until_idle()
}
