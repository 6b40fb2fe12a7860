//! Properties fixed when the adapter is built.

use crate::region::RegionId;

/// Adapter configuration.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Zone the stack is opened for.
    pub region: RegionId,
}

impl Config {
    /// Creation.
    pub fn new(region: RegionId) -> Self {
        Self { region }
    }
}
