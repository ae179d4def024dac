//! per-byte midi handler, the only writer of the dmx universe
//! runs once for every byte the upstream transport delivers and never blocks

use std::sync::Arc;
use super::entity::*;
use super::mapper::{MapEffect, ZoneMapper};
use super::parser::MidiParser;
use crate::driver::dmx::universe::DmxUniverse;
use crate::driver::traits::{Indicator, INDICATOR_ALL};
use crate::{info, trace};

const LOG_TAG: &str = "handler.rs | midi byte handler";

pub struct MidiByteHandler {
    parser: MidiParser,
    mapper: ZoneMapper,
    indicator: Arc<dyn Indicator>,
}

impl MidiByteHandler {
    pub fn new(universe: Arc<DmxUniverse>, indicator: Arc<dyn Indicator>) -> Self {
        MidiByteHandler {
            parser: MidiParser::new(),
            mapper: ZoneMapper::new(universe),
            indicator,
        }
    }

    pub fn on_byte(&mut self, byte: u8) -> MapEffect {
        match self.parser.push(byte) {
            ParseEvent::Pending => MapEffect::Ignored,
            ParseEvent::Message(message) => {
                trace!(LOG_TAG, "message: {:?}", message);
                self.mapper.apply(&message)
            }
            ParseEvent::Reset => {
                self.mapper.reset();
                self.indicator.on(INDICATOR_ALL);
                info!(LOG_TAG, "system reset received, all zones disabled");
                MapEffect::Ignored
            }
        }
    }

    pub fn parser_state(&self) -> ParserState {
        self.parser.state()
    }

    pub fn mapper(&self) -> &ZoneMapper {
        &self.mapper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::logger::init_logger;
    use crate::driver::indicator::LogIndicator;
    use crate::driver::midi::prelude::*;

    fn set_env() -> (MidiByteHandler, Arc<DmxUniverse>, Arc<LogIndicator>) {
        let _ = init_logger();
        let universe = Arc::new(DmxUniverse::new());
        let indicator = Arc::new(LogIndicator::new());
        let handler = MidiByteHandler::new(universe.clone(), indicator.clone());
        (handler, universe, indicator)
    }

    fn feed(handler: &mut MidiByteHandler, bytes: &[u8]) {
        for b in bytes {
            handler.on_byte(*b);
        }
    }

    #[test]
    fn test_note_on_reaches_universe() {
        let (mut handler, universe, _) = set_env();
        feed(&mut handler, &[0xc0, 0x01, 0x90, 10, 64]);
        assert_eq!(universe.active_channels(), 128);
        assert_eq!(universe.slot(10), 129);
    }

    #[test]
    fn test_running_status_writes_two_slots() {
        let (mut handler, universe, _) = set_env();
        feed(&mut handler, &[0x90, 0x3c, 0x40, 0x3e, 0x50]);
        assert_eq!(universe.slot(0x3c), 0x81);
        assert_eq!(universe.slot(0x3e), 0xa1);
    }

    #[test]
    fn test_data_after_system_common_writes_nothing() {
        let (mut handler, universe, _) = set_env();
        feed(&mut handler, &[0x90, 0x01, 0x02, 0xf2, 0x10, 0x20, 0x05, 0x40]);
        assert_eq!(universe.slot(1), 5);
        assert_eq!(universe.slot(5), 0);
    }

    #[test]
    fn test_reset_mid_message() {
        let (mut handler, universe, indicator) = set_env();
        feed(&mut handler, &[0xc1, 0x02, 0x91, 0x01, 0x7f, 0x91, 0x02]);
        assert_eq!(universe.active_channels(), 256);
        handler.on_byte(SYSTEM_RESET);
        assert_eq!(universe.active_channels(), 0);
        assert_eq!(universe.slot(129), 0);
        assert_eq!(handler.mapper().modes(), [0; ZONE_COUNT]);
        assert_eq!(handler.parser_state(), ParserState::Idle);
        assert_eq!(indicator.mask(), 0x0f);

        // the half message before the reset is gone
        handler.on_byte(0x05);
        assert_eq!(universe.slot(129), 0);
    }

    #[test]
    fn test_reset_mid_sysex() {
        let (mut handler, universe, _) = set_env();
        feed(&mut handler, &[0xc0, 0x01, 0xf0, 0x01, 0x02]);
        assert_eq!(handler.parser_state(), ParserState::SysexSkip);
        handler.on_byte(SYSTEM_RESET);
        assert_eq!(handler.parser_state(), ParserState::Idle);
        assert_eq!(universe.active_channels(), 0);
    }

    #[test]
    fn test_sysex_never_touches_universe() {
        let (mut handler, universe, _) = set_env();
        feed(&mut handler, &[0xc0, 0x01, 0x90, 0x01, 0x01]);
        let before = universe.snapshot();
        let sysex: Vec<u8> = std::iter::once(0xf0)
            .chain((0x00..=0xfeu8).filter(|b| *b != 0xf7))
            .chain(std::iter::once(0xf7))
            .collect();
        feed(&mut handler, &sysex);
        assert_eq!(universe.snapshot(), before);
        assert_eq!(universe.active_channels(), 128);

        // running status 0x90 survived the sysex
        feed(&mut handler, &[0x02, 0x03]);
        assert_eq!(universe.slot(2), 7);
    }
}
