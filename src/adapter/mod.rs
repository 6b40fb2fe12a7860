//! Bring-up, runtime accessors and the idle hook binding the Sigfox stack to the SX1276.

pub mod state;

use crate::{
    config::Config,
    device::{
        non_volatile_store::{self, NonVolatileStore},
        radio::{types::LOW_POWER_WRITES, Radio},
        timer::Scheduler,
        Device, IdleStatus,
    },
    region::RegionProfile,
    stack::SigfoxStack,
    Error,
};
use state::AdapterState;

/// How a blocking wait on the radio ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaitOutcome {
    /// The awaited condition became true.
    Ready,
    /// The background task asked to abandon the wait.
    Interrupted,
}

/// Owns the caller's device and the receive-path state for one radio.
///
/// Everything runs on a single thread: the protocol stack re-enters [`Adapter::idle`] and the receive-path
/// callbacks from inside its own blocking calls.
pub struct Adapter<D>
where
    D: Device,
{
    device: D,
    config: Config,
    state: AdapterState,
}

impl<D> Adapter<D>
where
    D: Device,
{
    /// Creation. Nothing touches the hardware until [`Adapter::initialize`].
    pub fn new(device: D, config: Config) -> Self {
        Self { device, config, state: AdapterState::default() }
    }

    /// Hand the device back to the caller.
    pub fn release(self) -> D {
        self.device
    }

    /// Get the wrapped device.
    pub fn device(&mut self) -> &mut D {
        &mut self.device
    }

    /// Get the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the receive-path state.
    pub fn state(&self) -> &AdapterState {
        &self.state
    }

    /// Bring up the radio and open the stack for the configured zone.
    ///
    /// The order is fixed: I/O lines, low-power register writes, state reset, stack open, then the
    /// standard config for zones that carry one. The first failure ends the attempt and the whole
    /// sequence has to be retried from the top.
    pub fn initialize(&mut self) -> Result<(), Error> {
        info!("sigfox init, region {}", self.config.region);

        let radio = self.device.radio();
        radio.io_init();
        for write in LOW_POWER_WRITES {
            radio.write_register(write.address, write.value);
        }

        self.state.reset();

        let profile = self.config.region.profile();
        self.open(&profile)?;
        self.apply_std_config(&profile)
    }

    fn open(&mut self, profile: &RegionProfile) -> Result<(), Error> {
        debug!("sigfox open {}", profile.descriptor);
        self.device.stack().open(&profile.descriptor).check().map_err(|code| {
            error!("sigfox open failed {}", code);
            Error::StackOpen(code)
        })
    }

    fn apply_std_config(&mut self, profile: &RegionProfile) -> Result<(), Error> {
        let Some(config_words) = profile.config_words else {
            return Ok(());
        };
        debug!("sigfox std config {} {}", config_words, profile.timer_enable);
        self.device.stack().set_std_config(&config_words, profile.timer_enable).check().map_err(
            |code| {
                error!("sigfox std config failed {}", code);
                Error::StackConfig(code)
            },
        )
    }

    /// Release the radio I/O lines. The stack itself has no close call.
    pub fn deinitialize(&mut self) {
        info!("sigfox deinit");
        self.device.radio().io_deinit();
    }

    /// Forward the output power to the radio driver unchanged.
    pub fn set_transmit_power(&mut self, power: u8) {
        info!("sigfox set power {}", power);
        self.device.radio().set_power(power);
    }

    /// Frame sequence counter as persisted by the stack, 0 to 4095.
    pub fn sequence_id(&mut self) -> u16 {
        info!("sigfox get sequence id");
        let block = self.device.non_volatile_store().read_block();
        non_volatile_store::sequence_id(&block)
    }

    /// RSSI of the last received frame in dBm, exactly as the receive path recorded it.
    pub fn rssi(&self) -> i16 {
        info!("sigfox get rssi");
        self.state.rssi()
    }

    /// One pass of background work while the stack waits on the radio.
    ///
    /// Services due timers, then runs the device's background task and returns its verdict.
    pub fn idle(&mut self) -> IdleStatus {
        self.device.scheduler().run_due();
        let status = self.device.background_task();
        if status == IdleStatus::Break {
            debug!("sigfox idle break requested");
        }
        status
    }

    /// Spin on [`Adapter::idle`] until `condition` holds or the background task breaks the wait.
    ///
    /// There is no timeout here; the stack or the background task own that policy.
    pub fn wait_until<F>(&mut self, mut condition: F) -> WaitOutcome
    where
        F: FnMut(&mut AdapterState) -> bool,
    {
        loop {
            if condition(&mut self.state) {
                return WaitOutcome::Ready;
            }
            if self.idle() == IdleStatus::Break {
                return WaitOutcome::Interrupted;
            }
        }
    }

    /// Receive-path callback: a frame arrived with the given RSSI.
    pub fn on_packet_received(&mut self, rssi_dbm: i16) {
        trace!("sigfox rx packet {}", rssi_dbm);
        self.state.record_packet(rssi_dbm);
    }

    /// Receive-path callback: carrier sense detected a busy channel.
    pub fn on_carrier_sense(&mut self) {
        trace!("sigfox carrier sense");
        self.state.record_carrier_sense();
    }
}
