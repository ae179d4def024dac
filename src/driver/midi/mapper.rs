//! zone mapper
//! midi channel n (0 ..= 3) drives dmx slots 128n ..= 128n + 127, note number is the offset

use std::sync::Arc;
use super::entity::*;
use super::prelude::*;
use crate::driver::dmx::prelude::*;
use crate::driver::dmx::universe::DmxUniverse;
use crate::{debug, trace, warn};

const LOG_TAG: &str = "mapper.rs | zone mapper";

/// what a message did to the universe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapEffect {
    ModeChanged { zone: u8, mode: ZoneMode, active_channels: DmxAddress },
    SlotWritten { address: DmxAddress, value: DmxValue },
    Ignored,
}

pub struct ZoneMapper {
    modes: [ZoneMode; ZONE_COUNT],
    universe: Arc<DmxUniverse>,
}

impl ZoneMapper {
    pub fn new(universe: Arc<DmxUniverse>) -> Self {
        ZoneMapper {
            modes: [MODE_DISABLED; ZONE_COUNT],
            universe,
        }
    }

    pub fn modes(&self) -> [ZoneMode; ZONE_COUNT] {
        self.modes
    }

    /// disable every zone and zero the universe
    pub fn reset(&mut self) {
        self.modes = [MODE_DISABLED; ZONE_COUNT];
        self.universe.clear();
    }

    pub fn apply(&mut self, message: &MidiMessage) -> MapEffect {
        let zone = message.channel();
        if zone as usize >= ZONE_COUNT {
            return MapEffect::Ignored;
        }
        let mode = self.modes[zone as usize];
        let [note, velocity] = message.data;

        match message.kind() {
            MessageKind::ProgramChange => {
                self.modes[zone as usize] = note;
                let active_channels = active_channels(&self.modes);
                self.universe.set_active_channels(active_channels);
                debug!(
                    LOG_TAG,
                    "zone {} mode set to {}, active channels: {}", zone, note, active_channels
                );
                MapEffect::ModeChanged { zone, mode: note, active_channels }
            }
            MessageKind::NoteOn => self.write(zone, note, velocity.wrapping_mul(2).wrapping_add(1)),
            MessageKind::NoteOff if mode == MODE_TOGGLE => self.write(zone, note, velocity.wrapping_mul(2)),
            MessageKind::PolyPressure if mode == MODE_PRESSURE || mode == MODE_PRESSURE_ALT => {
                self.write(zone, note, velocity.wrapping_mul(2))
            }
            _ => MapEffect::Ignored,
        }
    }

    fn write(&self, zone: u8, note: u8, value: DmxValue) -> MapEffect {
        // a status byte swallowed as data lands here, it has no slot
        if note >= 0x80 {
            warn!(LOG_TAG, "note byte {:#04x} out of range in zone {}, dropped", note, zone);
            return MapEffect::Ignored;
        }
        let address = (ZONE_WIDTH * zone as usize + note as usize) as DmxAddress;
        self.universe.set_slot(address, value);
        trace!(LOG_TAG, "slot {} = {}", address, value);
        MapEffect::SlotWritten { address, value }
    }
}

/// the highest enabled zone decides how many slots go out
pub fn active_channels(modes: &[ZoneMode; ZONE_COUNT]) -> DmxAddress {
    modes
        .iter()
        .rposition(|mode| *mode != MODE_DISABLED)
        .map(|zone| ((zone + 1) * ZONE_WIDTH) as DmxAddress)
        .unwrap_or(0)
}
