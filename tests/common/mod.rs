#![allow(dead_code)]

use heapless::Vec;
use sigfox_sx1276::{
    device::{
        non_volatile_store::{NonVolatileStore, NvmBlock, SE_NVM_BLOCK_SIZE},
        radio::Radio,
        timer::Scheduler,
        Device, IdleStatus,
    },
    region::{ConfigWords, RegionDescriptor, TimerEnable},
    stack::{SigfoxStack, StatusCode},
};

/// Everything the adapter asked of the board, in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Call {
    IoInit,
    IoDeinit,
    WriteRegister(u8, u8),
    SetPower(u8),
    ReadBlock,
    RunDueTimers,
    BackgroundTask,
    Open(RegionDescriptor),
    SetStdConfig(ConfigWords, TimerEnable),
}

/// Board double implementing every collaborator so a single log captures cross-component ordering.
pub struct MockBoard {
    pub calls: Vec<Call, 64>,
    pub open_status: StatusCode,
    pub config_status: StatusCode,
    pub block: NvmBlock,
    pub due_timers: usize,
    pub fired_timers: usize,
    /// Background task returns `Break` on this pass, counting from 1.
    pub break_on_pass: Option<usize>,
    pub background_passes: usize,
}

impl MockBoard {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            open_status: StatusCode::NONE,
            config_status: StatusCode::NONE,
            block: [0; SE_NVM_BLOCK_SIZE],
            due_timers: 0,
            fired_timers: 0,
            break_on_pass: None,
            background_passes: 0,
        }
    }

    fn log(&mut self, call: Call) {
        self.calls.push(call).unwrap();
    }

    pub fn count(&self, wanted: fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| wanted(c)).count()
    }
}

impl Radio for MockBoard {
    fn io_init(&mut self) {
        self.log(Call::IoInit);
    }

    fn io_deinit(&mut self) {
        self.log(Call::IoDeinit);
    }

    fn write_register(&mut self, address: u8, value: u8) {
        self.log(Call::WriteRegister(address, value));
    }

    fn set_power(&mut self, power: u8) {
        self.log(Call::SetPower(power));
    }
}

impl NonVolatileStore for MockBoard {
    fn read_block(&mut self) -> NvmBlock {
        self.log(Call::ReadBlock);
        self.block
    }
}

impl Scheduler for MockBoard {
    fn run_due(&mut self) {
        self.log(Call::RunDueTimers);
        self.fired_timers += core::mem::take(&mut self.due_timers);
    }
}

impl SigfoxStack for MockBoard {
    fn open(&mut self, descriptor: &RegionDescriptor) -> StatusCode {
        self.log(Call::Open(*descriptor));
        self.open_status
    }

    fn set_std_config(&mut self, config_words: &ConfigWords, timer_enable: TimerEnable) -> StatusCode {
        self.log(Call::SetStdConfig(*config_words, timer_enable));
        self.config_status
    }
}

impl Device for MockBoard {
    type Radio = Self;
    type NonVolatileStore = Self;
    type Scheduler = Self;
    type Stack = Self;

    fn radio(&mut self) -> &mut Self::Radio {
        self
    }

    fn non_volatile_store(&mut self) -> &mut Self::NonVolatileStore {
        self
    }

    fn scheduler(&mut self) -> &mut Self::Scheduler {
        self
    }

    fn stack(&mut self) -> &mut Self::Stack {
        self
    }

    fn background_task(&mut self) -> IdleStatus {
        self.log(Call::BackgroundTask);
        self.background_passes += 1;
        match self.break_on_pass {
            Some(pass) if pass == self.background_passes => IdleStatus::Break,
            _ => IdleStatus::Continue,
        }
    }
}

/// Board relying on the default background task.
pub struct QuietBoard(pub MockBoard);

impl Device for QuietBoard {
    type Radio = MockBoard;
    type NonVolatileStore = MockBoard;
    type Scheduler = MockBoard;
    type Stack = MockBoard;

    fn radio(&mut self) -> &mut Self::Radio {
        &mut self.0
    }

    fn non_volatile_store(&mut self) -> &mut Self::NonVolatileStore {
        &mut self.0
    }

    fn scheduler(&mut self) -> &mut Self::Scheduler {
        &mut self.0
    }

    fn stack(&mut self) -> &mut Self::Stack {
        &mut self.0
    }
}
