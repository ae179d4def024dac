use std::time::Duration;

// dmx channel type
pub type DmxValue = u8;
// dmx slot index, 0 is dmx channel 1
pub type DmxAddress = u16;
// dmx channel length
pub const DMX_CHANNEL_LEN: usize = 512;
// slots per mapping zone
pub const ZONE_WIDTH: usize = 128;

pub const START_CODE: DmxValue = 0x00;

// suggested transmit values and the dmx512-a minimums
pub const BREAK_US: u64 = 176;
pub const MAB_US: u64 = 12;
pub const MIN_BREAK_US: u64 = 92;
pub const MIN_MAB_US: u64 = 8;

// start bit + 8 data bits + 2 stop bits at 4us per bit
pub const SLOT_US: u64 = 44;
pub const DMX_BAUDRATE: u32 = 250_000;

/// line timing of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DmxTiming {
    pub break_time: Duration,
    pub mark_after_break: Duration,
    // mark between two slots, may be zero
    pub inter_slot: Duration,
    pub mark_before_packet: Duration,
}

impl Default for DmxTiming {
    fn default() -> Self {
        DmxTiming {
            break_time: Duration::from_micros(BREAK_US),
            mark_after_break: Duration::from_micros(MAB_US),
            inter_slot: Duration::ZERO,
            mark_before_packet: Duration::ZERO,
        }
    }
}
