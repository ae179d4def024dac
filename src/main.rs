mod common;
mod driver;
use common::error::BridgeError;
use common::setting::Settings;
use common::logger::init_logger;
use driver::dmx::dmx_thread;
use driver::dmx::serial_line::{DummyLine, SerialLine};
use driver::dmx::transmitter::DmxTransmitter;
use driver::dmx::universe::DmxUniverse;
use driver::indicator::LogIndicator;
use driver::midi::byte_link::byte_link;
use driver::midi::handler::MidiByteHandler;
use driver::midi::midi_thread;
use driver::midi::serial_input::{self, InputSource};
use driver::traits::{Indicator, LineDriver};
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use dotenv::dotenv;

fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();

    let settings = Settings::get();

    init_logger()?;
    log::info!("config loaded, env: {:?}", settings.env.env);
    log::debug!("config: {:?}", settings);
    settings.validate()?;

    let universe = Arc::new(DmxUniverse::new());
    let indicator: Arc<dyn Indicator> = Arc::new(LogIndicator::new());

    // midi side: transport -> byte link -> parser and mapper
    let input = serial_input::open(&InputSource::from(&settings.midi)).map_err(BridgeError::from)?;
    let (link, byte_rx) = byte_link();
    midi_thread::spawn(byte_rx, MidiByteHandler::new(universe.clone(), indicator.clone()));
    serial_input::spawn(input, link);

    let running = Arc::new(AtomicBool::new(true));
    let stopper = running.clone();
    ctrlc::set_handler(move || {
        stopper.store(false, Ordering::Relaxed);
    })?;

    // dmx side runs in the foreground until ctrl-c
    let timing = settings.dmx.timing();
    let idle_poll = Duration::from_micros(settings.dmx.idle_poll_us);
    if settings.dmx.dummy {
        log::info!("dmx dummy mode, no port will be opened");
        transmit(DummyLine, indicator, universe, timing, &running, idle_poll)?;
    } else {
        let line = SerialLine::open(settings.dmx.serial_port.as_str()).map_err(BridgeError::from)?;
        transmit(line, indicator, universe, timing, &running, idle_poll)?;
    }

    Ok(())
}

fn transmit<L: LineDriver>(
    line: L,
    indicator: Arc<dyn Indicator>,
    universe: Arc<DmxUniverse>,
    timing: driver::dmx::prelude::DmxTiming,
    running: &AtomicBool,
    idle_poll: Duration,
) -> Result<(), Box<dyn Error>> {
    let mut transmitter = DmxTransmitter::new(line, indicator, universe, timing);
    let frames = dmx_thread::run_loop(&mut transmitter, running, idle_poll)?;
    log::info!("bridge stopped, {} frames sent", frames);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::dmx::entity::CycleOutcome;
    use crate::driver::dmx::transmitter::tests::RecordingLine;
    use crate::driver::midi::prelude::SYSTEM_RESET;

    fn set_env() -> (MidiByteHandler, DmxTransmitter<RecordingLine>) {
        let _ = init_logger();
        let universe = Arc::new(DmxUniverse::new());
        let indicator: Arc<dyn Indicator> = Arc::new(LogIndicator::new());
        let handler = MidiByteHandler::new(universe.clone(), indicator.clone());
        let transmitter = DmxTransmitter::new(
            RecordingLine::default(),
            indicator,
            universe,
            crate::driver::dmx::prelude::DmxTiming::default(),
        );
        (handler, transmitter)
    }

    #[test]
    fn test_midi_to_frame() {
        let (mut handler, mut transmitter) = set_env();
        for b in [0xc0, 0x01, 0x90, 10, 64, 0x80, 11, 20] {
            handler.on_byte(b);
        }
        assert_eq!(transmitter.run_cycle().unwrap(), CycleOutcome::Sent { slots: 128 });
        let bytes = transmitter.line().bytes();
        assert_eq!(bytes.len(), 129);
        assert_eq!(bytes[0], 0x00);
        assert_eq!(bytes[1 + 10], 129);
        assert_eq!(bytes[1 + 11], 40);
    }

    #[test]
    fn test_reset_silences_next_cycle() {
        let (mut handler, mut transmitter) = set_env();
        for b in [0xc3, 0x02, 0x93, 1, 1, 0x93] {
            handler.on_byte(b);
        }
        assert_eq!(transmitter.run_cycle().unwrap(), CycleOutcome::Sent { slots: 512 });
        handler.on_byte(SYSTEM_RESET);
        let before = transmitter.line().events.len();
        assert_eq!(transmitter.run_cycle().unwrap(), CycleOutcome::Idle);
        assert_eq!(transmitter.line().events.len(), before);
    }
}
