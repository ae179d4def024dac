//! status lights
//! light n follows dmx slot group n while it is sent, all four light up on system reset

use std::sync::atomic::{AtomicU8, Ordering};
use super::traits::{Indicator, INDICATOR_ALL};
use crate::trace;

const LOG_TAG: &str = "indicator.rs | status indicator";

/// keeps the light mask in memory and logs every change
pub struct LogIndicator {
    mask: AtomicU8,
}

impl LogIndicator {
    pub fn new() -> Self {
        LogIndicator {
            mask: AtomicU8::new(0),
        }
    }

    #[cfg(test)]
    pub fn mask(&self) -> u8 {
        self.mask.load(Ordering::Relaxed)
    }
}

impl Default for LogIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl Indicator for LogIndicator {
    fn on(&self, mask: u8) {
        let old = self.mask.fetch_or(mask & INDICATOR_ALL, Ordering::Relaxed);
        if old | (mask & INDICATOR_ALL) != old {
            trace!(LOG_TAG, "lights {:04b}", old | mask & INDICATOR_ALL);
        }
    }

    fn off(&self, mask: u8) {
        let old = self.mask.fetch_and(!mask, Ordering::Relaxed);
        if old & !mask != old {
            trace!(LOG_TAG, "lights {:04b}", old & !mask);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_off() {
        let indicator = LogIndicator::new();
        indicator.on(0b0001);
        indicator.on(0b0100);
        assert_eq!(indicator.mask(), 0b0101);
        indicator.off(0b0001);
        assert_eq!(indicator.mask(), 0b0100);
        indicator.off(INDICATOR_ALL);
        assert_eq!(indicator.mask(), 0);
    }

    #[test]
    fn test_only_four_lights() {
        let indicator = LogIndicator::new();
        indicator.on(0xff);
        assert_eq!(indicator.mask(), INDICATOR_ALL);
    }
}
