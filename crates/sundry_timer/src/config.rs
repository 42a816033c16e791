//! Scheduler configuration.

/// Configuration for a [`Scheduler`](crate::Scheduler).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Whether timer events are recorded (false = no trace is kept).
    pub trace_enabled: bool,

    /// Maximum number of trace records kept; older ones are evicted.
    pub trace_capacity: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            trace_enabled: false,
            trace_capacity: 1024,
        }
    }
}

impl SchedulerConfig {
    /// Creates a configuration with tracing enabled.
    #[must_use]
    pub fn traced() -> Self {
        Self {
            trace_enabled: true,
            ..Self::default()
        }
    }

    /// Builder method to set tracing.
    #[must_use]
    pub fn with_trace_enabled(mut self, enabled: bool) -> Self {
        self.trace_enabled = enabled;
        self
    }

    /// Builder method to set the trace capacity.
    #[must_use]
    pub fn with_trace_capacity(mut self, capacity: usize) -> Self {
        self.trace_capacity = capacity;
        self
    }
}
