//! line drivers for the dmx output
//!
//! - SerialLine: 250 kbit/s, 8 data bits, 2 stop bits, BREAK through the uart's line break
//! - DummyLine: keeps the frame timing without a port, for dummy mode

use std::io::Write;
use std::time::{Duration, Instant};
use tokio_serial::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use super::prelude::*;
use super::timing::{hold, hold_until};
use crate::common::error::DriverError;
use crate::driver::traits::LineDriver;
use crate::info;

const LOG_TAG: &str = "serial_line.rs | dmx line";

pub struct SerialLine {
    serial_port: String,
    port: Box<dyn SerialPort>,
}

impl SerialLine {
    pub fn open(serial_port: &str) -> Result<Self, DriverError> {
        let port = tokio_serial::new(serial_port, DMX_BAUDRATE)
            .data_bits(DataBits::Eight)
            .stop_bits(StopBits::Two)
            .parity(Parity::None)
            .flow_control(FlowControl::None)
            .open()
            .map_err(|e| DriverError(format!("cannot open port, port: {}, err: {}", serial_port, e)))?;
        info!(LOG_TAG, "dmx port opened: {}", serial_port);
        Ok(SerialLine {
            serial_port: serial_port.to_string(),
            port,
        })
    }
}

impl LineDriver for SerialLine {
    fn assert_line_low(&mut self, duration: Duration) -> Result<(), DriverError> {
        // a real break holds the line low, unlike a 0x00 at a lower baudrate
        self.port
            .set_break()
            .map_err(|e| DriverError(format!("cannot set break, port: {}, err: {}", self.serial_port, e)))?;
        hold(duration);
        self.port
            .clear_break()
            .map_err(|e| DriverError(format!("cannot clear break, port: {}, err: {}", self.serial_port, e)))
    }

    fn assert_line_high(&mut self, duration: Duration) -> Result<(), DriverError> {
        // the uart idles at mark
        hold(duration);
        Ok(())
    }

    fn send_framed_byte(&mut self, value: u8) -> Result<(), DriverError> {
        let deadline = Instant::now() + Duration::from_micros(SLOT_US);
        self.port
            .write_all(&[value])
            .and_then(|_| self.port.flush())
            .map_err(|e| DriverError(format!("cannot send data to port, port: {}, err: {}", self.serial_port, e)))?;
        hold_until(deadline);
        Ok(())
    }
}

/// holds every gap and slot time, sends nothing
pub struct DummyLine;

impl LineDriver for DummyLine {
    fn assert_line_low(&mut self, duration: Duration) -> Result<(), DriverError> {
        hold(duration);
        Ok(())
    }

    fn assert_line_high(&mut self, duration: Duration) -> Result<(), DriverError> {
        hold(duration);
        Ok(())
    }

    fn send_framed_byte(&mut self, _value: u8) -> Result<(), DriverError> {
        hold(Duration::from_micros(SLOT_US));
        Ok(())
    }
}
