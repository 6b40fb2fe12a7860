//! Wrapper for all necessary functionality implemented by calling code.

pub mod non_volatile_store;
pub mod radio;
pub mod timer;

use non_volatile_store::NonVolatileStore;
use radio::Radio;
use timer::Scheduler;

use crate::stack::SigfoxStack;

/// Outcome of one pass through the idle hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IdleStatus {
    /// Keep waiting for the radio.
    #[default]
    Continue,
    /// Abandon the current wait as soon as possible.
    Break,
}

/// Specification of board-specific functionality provided by the caller.
pub trait Device {
    /// SX1276 driver provided by the calling code.
    type Radio: Radio;
    /// Secure-element storage provided by the calling code.
    type NonVolatileStore: NonVolatileStore;
    /// Software timer queue provided by the calling code.
    type Scheduler: Scheduler;
    /// Certified protocol stack linked in by the calling code.
    type Stack: SigfoxStack;

    /// Get the caller-supplied radio driver.
    fn radio(&mut self) -> &mut Self::Radio;
    /// Get the caller-supplied persistence implementation.
    fn non_volatile_store(&mut self) -> &mut Self::NonVolatileStore;
    /// Get the caller-supplied timer queue.
    fn scheduler(&mut self) -> &mut Self::Scheduler;
    /// Get the caller-supplied protocol stack.
    fn stack(&mut self) -> &mut Self::Stack;

    /// Background work run on every idle pass while the stack waits on the radio.
    /// Returning [`IdleStatus::Break`] asks the waiting stack operation to give up.
    fn background_task(&mut self) -> IdleStatus {
        // default do nothing
        IdleStatus::Continue
    }
}
