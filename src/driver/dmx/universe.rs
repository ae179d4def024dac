//! dmx universe shared between the midi handler and the transmitter
//!
//! - the midi handler is the only writer
//! - the transmitter reads the active count once per cycle and the slots live
//! - every field is a single atomic, so a reader never sees a torn count

use std::sync::atomic::{AtomicU16, AtomicU8, Ordering};
use super::prelude::*;

pub struct DmxUniverse {
    // slot 0 is dmx channel 1
    slots: [AtomicU8; DMX_CHANNEL_LEN],
    // 0, 128, 256, 384 or 512
    active: AtomicU16,
}

impl DmxUniverse {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| AtomicU8::new(0)),
            active: AtomicU16::new(0),
        }
    }

    pub fn slot(&self, address: DmxAddress) -> DmxValue {
        self.slots[address as usize].load(Ordering::Relaxed)
    }

    pub fn set_slot(&self, address: DmxAddress, value: DmxValue) {
        self.slots[address as usize].store(value, Ordering::Relaxed);
    }

    pub fn active_channels(&self) -> DmxAddress {
        self.active.load(Ordering::Acquire)
    }

    pub fn set_active_channels(&self, count: DmxAddress) {
        debug_assert!(count as usize <= DMX_CHANNEL_LEN && count as usize % ZONE_WIDTH == 0);
        self.active.store(count, Ordering::Release);
    }

    /// zero every slot and disable transmission
    pub fn clear(&self) {
        self.active.store(0, Ordering::Release);
        for slot in self.slots.iter() {
            slot.store(0, Ordering::Relaxed);
        }
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> [DmxValue; DMX_CHANNEL_LEN] {
        std::array::from_fn(|i| self.slots[i].load(Ordering::Relaxed))
    }
}

impl Default for DmxUniverse {
    fn default() -> Self {
        Self::new()
    }
}
