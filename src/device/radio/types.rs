//! SX1276 register addresses and values touched during bring-up.

/// DIO0 to DIO3 pin mapping.
pub const REG_DIO_MAPPING_1: u8 = 0x40;

/// DIO3 mapped away from "FIFO empty", which otherwise toggles during idle and costs current.
pub const DIO_MAPPING_1_LOW_POWER: u8 = 0x01;

/// A single register write issued by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterWrite {
    #[allow(missing_docs)]
    pub address: u8,
    #[allow(missing_docs)]
    pub value: u8,
}

/// Register tweaks applied right after the I/O lines come up.
pub const LOW_POWER_WRITES: [RegisterWrite; 1] =
    [RegisterWrite { address: REG_DIO_MAPPING_1, value: DIO_MAPPING_1_LOW_POWER }];
