use std::thread;
use crossbeam::channel::Receiver;
use super::handler::MidiByteHandler;
use crate::info;

const LOG_TAG: &str = "midi_thread.rs | midi handler worker";

/// run the handler for every byte on the link, returns when every sender is gone
pub fn run_loop(byte_rx: Receiver<u8>, mut handler: MidiByteHandler) {
    info!(LOG_TAG, "midi handler started");
    while let Ok(byte) = byte_rx.recv() {
        handler.on_byte(byte);
    }
    info!(
        LOG_TAG,
        "byte link closed, midi handler exiting, parser: {:?}, zone modes: {:?}",
        handler.parser_state(),
        handler.mapper().modes()
    );
}

pub fn spawn(byte_rx: Receiver<u8>, handler: MidiByteHandler) -> thread::JoinHandle<()> {
    thread::spawn(move || run_loop(byte_rx, handler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::logger::init_logger;
    use crate::driver::dmx::universe::DmxUniverse;
    use crate::driver::indicator::LogIndicator;
    use crate::driver::midi::byte_link::byte_link;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    fn wait_until(f: impl Fn() -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(2);
        while Instant::now() < deadline {
            if f() {
                return true;
            }
            thread::sleep(Duration::from_millis(1));
        }
        false
    }

    /// bytes cross the link one at a time, as the upstream pacing would guarantee
    #[test]
    fn test_thread() {
        let _ = init_logger();
        let universe = Arc::new(DmxUniverse::new());
        let handler = MidiByteHandler::new(universe.clone(), Arc::new(LogIndicator::new()));
        let (link, rx) = byte_link();
        let handle = spawn(rx, handler);

        for b in [0xc1, 0x01, 0x91, 0x05, 0x20] {
            assert!(wait_until(|| link.is_empty()));
            link.deliver(b).unwrap();
        }
        assert!(wait_until(|| universe.slot(128 + 5) == 0x41));
        assert_eq!(universe.active_channels(), 256);
        assert_eq!(link.overruns(), 0);

        drop(link);
        handle.join().unwrap();
    }
}
