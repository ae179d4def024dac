use super::prelude::*;

/// what a completed message means, derived from its status byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    NoteOff,
    NoteOn,
    PolyPressure,
    ControlChange,
    ProgramChange,
    ChannelPressure,
    PitchBend,
    // 0xf1 ..= 0xf7, carries the full status byte
    SystemCommon(u8),
}

/// a completed midi message, status byte included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidiMessage {
    pub status: u8,
    pub data: [u8; 2],
    // total bytes including status, 1 ..= 3
    pub len: u8,
}

impl MidiMessage {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut data = [0; 2];
        for (i, b) in bytes.iter().skip(1).take(2).enumerate() {
            data[i] = *b;
        }
        MidiMessage {
            status: bytes[0],
            data,
            len: bytes.len() as u8,
        }
    }

    pub fn kind(&self) -> MessageKind {
        match self.status & 0xf0 {
            NOTE_OFF => MessageKind::NoteOff,
            NOTE_ON => MessageKind::NoteOn,
            POLY_PRESSURE => MessageKind::PolyPressure,
            CONTROL_CHANGE => MessageKind::ControlChange,
            PROGRAM_CHANGE => MessageKind::ProgramChange,
            CHANNEL_PRESSURE => MessageKind::ChannelPressure,
            PITCH_BEND => MessageKind::PitchBend,
            _ => MessageKind::SystemCommon(self.status),
        }
    }

    /// low nibble of the status byte
    pub fn channel(&self) -> u8 {
        self.status & 0x0f
    }
}

/// result of feeding one byte to the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseEvent {
    // nothing completed yet, or the byte was skipped
    Pending,
    Message(MidiMessage),
    // 0xff seen, the parser has already cleared itself
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    Idle,
    Accumulating,
    SysexSkip,
}
