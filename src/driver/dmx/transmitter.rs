//! dmx512 frame transmitter
//!
//! ```text
//!          _______        _________________________________________ ...
//! \_______/       XXXXXXXX    \XXXXX/    \XXXXX/        \XXXXX/    X...
//! | BREAK |  MAB  |  SC  |MTBF| CD1 |MTBF| CD2 |...|MTBF| CDn |MTBP|
//! ```
//!
//! the active channel count is read once at cycle start, slot values are read live

use std::sync::Arc;
use super::entity::CycleOutcome;
use super::prelude::*;
use super::universe::DmxUniverse;
use crate::common::error::DriverError;
use crate::driver::traits::{Indicator, LineDriver, INDICATOR_ALL};

pub struct DmxTransmitter<L: LineDriver> {
    line: L,
    indicator: Arc<dyn Indicator>,
    universe: Arc<DmxUniverse>,
    timing: DmxTiming,
}

impl<L: LineDriver> DmxTransmitter<L> {
    pub fn new(line: L, indicator: Arc<dyn Indicator>, universe: Arc<DmxUniverse>, timing: DmxTiming) -> Self {
        DmxTransmitter {
            line,
            indicator,
            universe,
            timing,
        }
    }

    /// send one full frame, or nothing when no zone is enabled
    /// a started frame always runs to its end
    pub fn run_cycle(&mut self) -> Result<CycleOutcome, DriverError> {
        self.indicator.off(INDICATOR_ALL);
        let slots = self.universe.active_channels();
        if slots == 0 {
            return Ok(CycleOutcome::Idle);
        }

        self.line.assert_line_low(self.timing.break_time)?;
        self.line.assert_line_high(self.timing.mark_after_break)?;
        self.line.send_framed_byte(START_CODE)?;

        for address in 0..slots {
            let light = 1u8 << (address as usize / ZONE_WIDTH);
            self.indicator.on(light);
            self.line.assert_line_high(self.timing.inter_slot)?;
            self.line.send_framed_byte(self.universe.slot(address))?;
            self.indicator.off(light);
        }

        self.line.assert_line_high(self.timing.mark_before_packet)?;
        Ok(CycleOutcome::Sent { slots })
    }

    #[cfg(test)]
    pub fn line(&self) -> &L {
        &self.line
    }
}
