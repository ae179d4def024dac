use super::entity::CycleOutcome;
use super::transmitter::DmxTransmitter;
use crate::common::error::DriverError;
use crate::driver::traits::LineDriver;
use crate::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::{thread, time::Duration};

const LOG_TAG: &str = "dmx_thread.rs | dmx worker";

/// foreground transmit loop, one frame per iteration
/// `running` is only looked at between frames, so a started frame is never cut short
pub fn run_loop<L: LineDriver>(
    transmitter: &mut DmxTransmitter<L>,
    running: &AtomicBool,
    idle_poll: Duration,
) -> Result<u64, DriverError> {
    info!(LOG_TAG, "dmx worker started, transmitting");
    let mut frames: u64 = 0;
    let mut was_idle = true;

    while running.load(Ordering::Relaxed) {
        match transmitter.run_cycle()? {
            CycleOutcome::Idle => {
                if !was_idle {
                    debug!(LOG_TAG, "no zone enabled, output stopped after {} frames", frames);
                    was_idle = true;
                }
                if idle_poll.is_zero() {
                    std::hint::spin_loop();
                } else {
                    thread::sleep(idle_poll);
                }
            }
            CycleOutcome::Sent { slots } => {
                if was_idle {
                    debug!(LOG_TAG, "output started, {} slots per frame", slots);
                    was_idle = false;
                }
                frames += 1;
            }
        }
    }

    info!(LOG_TAG, "stop on shutdown, frames sent: {}", frames);
    Ok(frames)
}
