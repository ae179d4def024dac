// channel voice status nibbles
pub const NOTE_OFF: u8 = 0x80;
pub const NOTE_ON: u8 = 0x90;
pub const POLY_PRESSURE: u8 = 0xa0;
pub const CONTROL_CHANGE: u8 = 0xb0;
pub const PROGRAM_CHANGE: u8 = 0xc0;
pub const CHANNEL_PRESSURE: u8 = 0xd0;
pub const PITCH_BEND: u8 = 0xe0;

pub const SYSEX_START: u8 = 0xf0;
pub const SYSEX_END: u8 = 0xf7;
// 0xf8 and above are real-time
pub const REAL_TIME_FIRST: u8 = 0xf8;
pub const SYSTEM_RESET: u8 = 0xff;

// status byte assumed before any status has been seen
pub const INITIAL_RUNNING_STATUS: u8 = NOTE_OFF;

// the longest message this bridge understands, status included
pub const MESSAGE_MAX_LEN: usize = 3;

// number of zones, one per midi channel 0 ..= 3
pub const ZONE_COUNT: usize = 4;

pub type ZoneMode = u8;
pub const MODE_DISABLED: ZoneMode = 0;
pub const MODE_TOGGLE: ZoneMode = 1;
pub const MODE_PRESSURE: ZoneMode = 2;
pub const MODE_PRESSURE_ALT: ZoneMode = 3;

/// total message length for a status byte, 0 for undefined system common codes
pub fn message_len(status: u8) -> usize {
    const SYSTEM: [usize; 8] = [0, 2, 3, 2, 1, 1, 1, 0];
    const CHANNEL: [usize; 7] = [3, 3, 3, 3, 2, 2, 3];
    if status >= SYSEX_START {
        return SYSTEM[((status - SYSEX_START) & 0x07) as usize];
    }
    CHANNEL[((status >> 4) - 8) as usize]
}
