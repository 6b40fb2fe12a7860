//! Radio configuration zones and the per-zone profiles handed to the protocol stack.

pub mod rc;

/// Three configuration words consumed by the stack's standard-config call.
pub type ConfigWords = [u32; 3];

/// Sigfox radio configuration zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum RegionId {
    /// Europe, Middle East, Africa.
    #[default]
    Rcz1 = 1,
    /// North America, Brazil.
    Rcz2 = 2,
    /// Japan.
    Rcz3c = 3,
    /// Latin America, Asia Pacific.
    Rcz4 = 4,
}

impl RegionId {
    /// Every supported zone.
    pub const ALL: [RegionId; 4] = [RegionId::Rcz1, RegionId::Rcz2, RegionId::Rcz3c, RegionId::Rcz4];

    const fn index(self) -> usize {
        match self {
            RegionId::Rcz1 => 0,
            RegionId::Rcz2 => 1,
            RegionId::Rcz3c => 2,
            RegionId::Rcz4 => 3,
        }
    }

    /// Profile used to open and configure the stack for this zone. Pure lookup into a compile-time table.
    pub const fn profile(self) -> RegionProfile {
        PROFILES[self.index()]
    }
}

/// Unknown raw values fall back to RCZ1 instead of being rejected.
impl From<u8> for RegionId {
    fn from(raw: u8) -> Self {
        match raw {
            2 => RegionId::Rcz2,
            3 => RegionId::Rcz3c,
            4 => RegionId::Rcz4,
            _ => RegionId::Rcz1,
        }
    }
}

impl From<RegionId> for u8 {
    fn from(region: RegionId) -> Self {
        region as u8
    }
}

/// Whether the stack should run its inter-frame timer after the standard config is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerEnable {
    #[allow(missing_docs)]
    Enabled,
    /// The zone has no timer to drive.
    NotApplicable,
    #[allow(missing_docs)]
    Disabled,
}

/// Carrier sense parameters for listen-before-talk zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CarrierSense {
    /// Longest time to search for a free channel before the first frame.
    pub window_ms: u32,
    /// Minimum listening time per attempt.
    pub min_listen_ms: u8,
    /// Channel counts as busy above this level.
    pub threshold_dbm: i16,
}

/// How the zone regulates access to the spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum SpectrumAccess {
    DutyCycle,
    FrequencyHopping,
    ListenBeforeTalk(CarrierSense),
}

/// Descriptor passed to the stack's open call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegionDescriptor {
    /// Uplink center frequency in Hz.
    pub open_tx_frequency: u32,
    /// Width of the macro channel in Hz.
    pub macro_channel_width: u32,
    /// Downlink center frequency in Hz.
    pub open_rx_frequency: u32,
    #[allow(missing_docs)]
    pub spectrum_access: SpectrumAccess,
}

/// Everything bring-up needs to know about one zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegionProfile {
    #[allow(missing_docs)]
    pub descriptor: RegionDescriptor,
    /// Present only for zones whose stack needs a standard-config call after open.
    pub config_words: Option<ConfigWords>,
    #[allow(missing_docs)]
    pub timer_enable: TimerEnable,
}

impl RegionProfile {
    /// Whether bring-up must follow open with a standard-config call.
    pub fn requires_std_config(&self) -> bool {
        self.config_words.is_some()
    }
}

const PROFILES: [RegionProfile; 4] =
    [rc::PROFILE_RCZ1, rc::PROFILE_RCZ2, rc::PROFILE_RCZ3C, rc::PROFILE_RCZ4];
