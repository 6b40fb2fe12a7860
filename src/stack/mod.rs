//! Boundary towards the certified Sigfox protocol stack, which is linked in by calling code.

use crate::region::{ConfigWords, RegionDescriptor, TimerEnable};

/// Raw status returned by the protocol stack. Zero is success, anything else is an
/// opaque failure code that is handed back to the caller untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// The stack's success status.
    pub const NONE: StatusCode = StatusCode(0);

    /// Whether the stack reported success.
    pub fn is_success(self) -> bool {
        self == Self::NONE
    }

    /// Turn the raw status into a `Result`, keeping the failure code verbatim.
    pub fn check(self) -> Result<(), StatusCode> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<u16> for StatusCode {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

/// Operations of the protocol stack driven during bring-up.
///
/// Both calls are synchronous. The stack keeps ownership of its internal state machine; this crate only
/// sequences the calls.
pub trait SigfoxStack {
    /// Open the stack for the given radio configuration zone.
    fn open(&mut self, descriptor: &RegionDescriptor) -> StatusCode;

    /// Apply the zone's standard channel configuration. Only valid after a successful [`SigfoxStack::open`].
    fn set_std_config(&mut self, config_words: &ConfigWords, timer_enable: TimerEnable) -> StatusCode;
}
