//! one byte link between the upstream transport and the midi handler
//!
//! - no flow control, the sender never blocks
//! - one byte of buffering, a byte arriving while one is still pending overwrites it

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use crossbeam::channel::{self, Receiver, Sender, TryRecvError, TrySendError};
use crate::common::error::DriverError;
use crate::trace;

const LOG_TAG: &str = "byte_link.rs | midi byte link";

#[derive(Clone)]
pub struct ByteLink {
    tx: Sender<u8>,
    // used to drop the stale byte on overrun
    stale_rx: Receiver<u8>,
    overruns: Arc<AtomicU64>,
}

pub fn byte_link() -> (ByteLink, Receiver<u8>) {
    let (tx, rx) = channel::bounded(1);
    let link = ByteLink {
        tx,
        stale_rx: rx.clone(),
        overruns: Arc::new(AtomicU64::new(0)),
    };
    (link, rx)
}

impl ByteLink {
    pub fn deliver(&self, byte: u8) -> Result<(), DriverError> {
        let mut byte = byte;
        loop {
            match self.tx.try_send(byte) {
                Ok(()) => return Ok(()),
                Err(TrySendError::Full(b)) => {
                    match self.stale_rx.try_recv() {
                        Ok(lost) => {
                            self.overruns.fetch_add(1, Ordering::Relaxed);
                            trace!(LOG_TAG, "overrun, byte {:#04x} overwritten", lost);
                        }
                        // the handler took it in the meantime
                        Err(TryRecvError::Empty) => {}
                        Err(TryRecvError::Disconnected) => {
                            return Err(DriverError("midi byte link closed".to_string()));
                        }
                    }
                    byte = b;
                }
                Err(TrySendError::Disconnected(_)) => {
                    return Err(DriverError("midi byte link closed".to_string()));
                }
            }
        }
    }

    /// bytes lost because the handler was still busy
    pub fn overruns(&self) -> u64 {
        self.overruns.load(Ordering::Relaxed)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tx.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deliver_and_receive() {
        let (link, rx) = byte_link();
        link.deliver(0x90).unwrap();
        assert_eq!(rx.try_recv().unwrap(), 0x90);
        assert_eq!(link.overruns(), 0);
    }

    #[test]
    fn test_overrun_overwrites_pending_byte() {
        let (link, rx) = byte_link();
        link.deliver(0x01).unwrap();
        link.deliver(0x02).unwrap();
        link.deliver(0x03).unwrap();
        assert_eq!(rx.try_recv().unwrap(), 0x03);
        assert!(rx.try_recv().is_err());
        assert_eq!(link.overruns(), 2);
    }
}
