#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

#[macro_use]
mod fmt;

pub mod adapter;
pub mod config;
pub mod device;
pub mod region;
pub mod stack;

pub use adapter::{state::AdapterState, Adapter, WaitOutcome};
pub use config::Config;
pub use device::{Device, IdleStatus};
pub use region::{RegionId, RegionProfile};
pub use stack::StatusCode;

/// Reasons bring-up can stop. The stack's status code is kept verbatim for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Hardware bring-up failed. Reserved: the radio driver reports no errors at this layer.
    Hardware,
    /// The stack refused to open for the configured zone.
    StackOpen(StatusCode),
    /// The stack rejected the zone's standard configuration.
    StackConfig(StatusCode),
}

/// Outcome of [`Adapter::initialize`].
pub type InitResult = Result<(), Error>;
