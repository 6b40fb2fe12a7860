//! SX1276 radio driver boundary.

pub mod types;

/// SX1276 driver entry points used by the adapter.
///
/// All calls are fire-and-forget: the register-level driver owns SPI timing and reports nothing back.
pub trait Radio {
    /// Configure the GPIO and SPI lines wired to the transceiver.
    fn io_init(&mut self);

    /// Release the GPIO and SPI lines, leaving them in their lowest-power state.
    fn io_deinit(&mut self);

    /// Write a single transceiver register.
    fn write_register(&mut self, address: u8, value: u8);

    /// Set the board output power. Range checking is the driver's business.
    fn set_power(&mut self, power: u8);
}
