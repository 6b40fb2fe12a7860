//! Radio configuration constants for each Sigfox zone.

use super::{CarrierSense, ConfigWords, RegionDescriptor, RegionProfile, SpectrumAccess, TimerEnable};

const MACRO_CHANNEL_WIDTH: u32 = 192_000;

/// RC1: Europe, Middle East, Africa.
pub const RC1: RegionDescriptor = RegionDescriptor {
    open_tx_frequency: 868_130_000,
    macro_channel_width: MACRO_CHANNEL_WIDTH,
    open_rx_frequency: 869_525_000,
    spectrum_access: SpectrumAccess::DutyCycle,
};

/// RC2: North America, Brazil.
pub const RC2: RegionDescriptor = RegionDescriptor {
    open_tx_frequency: 902_200_000,
    macro_channel_width: MACRO_CHANNEL_WIDTH,
    open_rx_frequency: 905_200_000,
    spectrum_access: SpectrumAccess::FrequencyHopping,
};

/// RC3C: Japan, listen before talk.
pub const RC3C: RegionDescriptor = RegionDescriptor {
    open_tx_frequency: 923_200_000,
    macro_channel_width: MACRO_CHANNEL_WIDTH,
    open_rx_frequency: 922_200_000,
    spectrum_access: SpectrumAccess::ListenBeforeTalk(CarrierSense {
        window_ms: 5000,
        min_listen_ms: 3,
        threshold_dbm: -80,
    }),
};

/// RC4: Latin America, Asia Pacific.
pub const RC4: RegionDescriptor = RegionDescriptor {
    open_tx_frequency: 920_800_000,
    macro_channel_width: MACRO_CHANNEL_WIDTH,
    open_rx_frequency: 922_300_000,
    spectrum_access: SpectrumAccess::FrequencyHopping,
};

/// RC2 short message configuration: macro channel 1 to 9 enabled.
pub const RC2_SM_CONFIG: ConfigWords = [0x0000_01FF, 0x0000_0000, 0x0000_0000];

/// RC3C carrier sense configuration: 3 attempts within 5000 ms.
pub const RC3C_CONFIG: ConfigWords = [0x0000_0003, 0x0000_1388, 0x0000_0000];

/// RC4 short message configuration: macro channels 63 to 68 enabled.
pub const RC4_SM_CONFIG: ConfigWords = [0x0000_0000, 0xF000_0000, 0x0000_001F];

pub(super) const PROFILE_RCZ1: RegionProfile =
    RegionProfile { descriptor: RC1, config_words: None, timer_enable: TimerEnable::NotApplicable };

pub(super) const PROFILE_RCZ2: RegionProfile = RegionProfile {
    descriptor: RC2,
    config_words: Some(RC2_SM_CONFIG),
    timer_enable: TimerEnable::Enabled,
};

pub(super) const PROFILE_RCZ3C: RegionProfile = RegionProfile {
    descriptor: RC3C,
    config_words: Some(RC3C_CONFIG),
    timer_enable: TimerEnable::NotApplicable,
};

pub(super) const PROFILE_RCZ4: RegionProfile = RegionProfile {
    descriptor: RC4,
    config_words: Some(RC4_SM_CONFIG),
    timer_enable: TimerEnable::Enabled,
};
