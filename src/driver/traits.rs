use std::time::Duration;
use crate::common::error::DriverError;

/// the framed serial line a dmx512 receiver is attached to
pub trait LineDriver {
    /// hold the line at low level, the transmitter is effectively disabled
    fn assert_line_low(&mut self, duration: Duration) -> Result<(), DriverError>;

    /// hold the line at idle (mark) level
    fn assert_line_high(&mut self, duration: Duration) -> Result<(), DriverError>;

    /// send one byte with 8 data bits and 2 stop bits, returns after the byte left the line
    fn send_framed_byte(&mut self, value: u8) -> Result<(), DriverError>;
}

/// four binary status lights, bit n is light n
pub trait Indicator: Send + Sync {
    fn on(&self, mask: u8);

    fn off(&self, mask: u8);
}

pub const INDICATOR_ALL: u8 = 0x0f;
