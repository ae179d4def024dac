//! midi byte stream parser
//!
//! - real-time bytes pass through without touching any state
//! - 0xff resets everything, from any state
//! - sysex content is skipped until 0xf7, there is no other way out of sysex
//! - running status is kept for channel voice messages, a system common status cancels it
//!   and data bytes are dropped until the next channel voice status
//! - no resync: a message waits until it has as many bytes as its status asks for

use super::entity::*;
use super::prelude::*;

pub struct MidiParser {
    // None after a system common status
    running_status: Option<u8>,
    buffer: [u8; MESSAGE_MAX_LEN],
    len: usize,
    sysex: bool,
}

impl MidiParser {
    pub fn new() -> Self {
        MidiParser {
            running_status: Some(INITIAL_RUNNING_STATUS),
            buffer: [0; MESSAGE_MAX_LEN],
            len: 0,
            sysex: false,
        }
    }

    pub fn reset(&mut self) {
        self.running_status = Some(INITIAL_RUNNING_STATUS);
        self.buffer = [0; MESSAGE_MAX_LEN];
        self.len = 0;
        self.sysex = false;
    }

    pub fn state(&self) -> ParserState {
        if self.sysex {
            ParserState::SysexSkip
        } else if self.len == 0 {
            ParserState::Idle
        } else {
            ParserState::Accumulating
        }
    }

    #[cfg(test)]
    pub fn running_status(&self) -> Option<u8> {
        self.running_status
    }

    /// feed one byte
    pub fn push(&mut self, byte: u8) -> ParseEvent {
        if byte == SYSTEM_RESET {
            self.reset();
            return ParseEvent::Reset;
        }

        if byte >= REAL_TIME_FIRST {
            return ParseEvent::Pending;
        }

        if self.sysex {
            if byte == SYSEX_END {
                self.sysex = false;
            }
            return ParseEvent::Pending;
        }
        if byte == SYSEX_START {
            self.sysex = true;
            return ParseEvent::Pending;
        }

        if self.len == 0 {
            if byte < 0x80 {
                // running status, the status byte is implied
                match self.running_status {
                    Some(status) => {
                        self.buffer[0] = status;
                        self.len = 1;
                    }
                    None => return ParseEvent::Pending,
                }
            } else if byte < SYSEX_START {
                self.running_status = Some(byte);
            } else {
                self.running_status = None;
            }
        }

        // a status whose length can never be reached (stray 0xf7) stalls here until reset
        if self.len == MESSAGE_MAX_LEN {
            return ParseEvent::Pending;
        }

        self.buffer[self.len] = byte;
        self.len += 1;

        if self.len != message_len(self.buffer[0]) {
            return ParseEvent::Pending;
        }

        let message = MidiMessage::from_bytes(&self.buffer[..self.len]);
        self.len = 0;
        ParseEvent::Message(message)
    }
}

impl Default for MidiParser {
    fn default() -> Self {
        Self::new()
    }
}
