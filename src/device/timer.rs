//! Software timer queue boundary.

/// Software timer queue serviced while the stack waits on the radio.
pub trait Scheduler {
    /// Run every timer callback that is due now and return. Must not block, and is a no-op when nothing is due.
    fn run_due(&mut self);
}
