//! Receive-path state shared between the stack glue and the adapter.

/// Live radio state, written only at bring-up and by receive-path callbacks.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdapterState {
    pub(crate) meas_rssi_dbm: i16,
    pub(crate) rx_packet_received: bool,
    pub(crate) rx_carrier_sense: bool,
}

impl AdapterState {
    /// Clear everything back to the power-on values.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// RSSI of the last received frame in dBm.
    pub fn rssi(&self) -> i16 {
        self.meas_rssi_dbm
    }

    /// Whether a frame arrived since the flag was last taken.
    pub fn packet_received(&self) -> bool {
        self.rx_packet_received
    }

    /// Whether carrier sense fired since the flag was last taken.
    pub fn carrier_sense(&self) -> bool {
        self.rx_carrier_sense
    }

    /// Read and clear the packet-received edge.
    pub fn take_packet_received(&mut self) -> bool {
        core::mem::take(&mut self.rx_packet_received)
    }

    /// Read and clear the carrier-sense edge.
    pub fn take_carrier_sense(&mut self) -> bool {
        core::mem::take(&mut self.rx_carrier_sense)
    }

    pub(crate) fn record_packet(&mut self, rssi_dbm: i16) {
        self.meas_rssi_dbm = rssi_dbm;
        self.rx_packet_received = true;
    }

    pub(crate) fn record_carrier_sense(&mut self) {
        self.rx_carrier_sense = true;
    }
}
