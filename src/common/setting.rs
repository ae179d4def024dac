//! setting config file
//! `ENV` picks `config_{ENV}.toml`, a missing file means built-in defaults

use std::{fs::File, io::Read};
use std::time::Duration;
use lazy_static::lazy_static;
use serde_derive::Deserialize;
use std::env;
use super::error::{BridgeError, ErrorCode};
use crate::driver::dmx::prelude::*;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Env {
    pub debug: bool,
    pub env: String,
    pub log_level: String,
}

impl Default for Env {
    fn default() -> Self {
        Env {
            debug: false,
            env: String::from("dev"),
            log_level: String::from("info"),
        }
    }
}

/// upstream midi byte stream
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Midi {
    pub serial_port: String,
    pub baudrate: u32,
    // read raw bytes from stdin instead of the serial port
    pub dummy: bool,
}

impl Default for Midi {
    fn default() -> Self {
        Midi {
            serial_port: String::from("/dev/ttyUSB0"),
            baudrate: 31250,
            dummy: false,
        }
    }
}

/// downstream dmx line and its timing, all values in microseconds
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Dmx {
    pub serial_port: String,
    // hold the timing but do not open any port
    pub dummy: bool,
    pub break_us: u64,
    pub mab_us: u64,
    pub inter_slot_us: u64,
    pub mark_before_packet_us: u64,
    pub idle_poll_us: u64,
}

impl Default for Dmx {
    fn default() -> Self {
        Dmx {
            serial_port: String::from("/dev/ttyUSB1"),
            dummy: false,
            break_us: BREAK_US,
            mab_us: MAB_US,
            inter_slot_us: 0,
            mark_before_packet_us: 0,
            idle_poll_us: 0,
        }
    }
}

impl Dmx {
    pub fn timing(&self) -> DmxTiming {
        DmxTiming {
            break_time: Duration::from_micros(self.break_us),
            mark_after_break: Duration::from_micros(self.mab_us),
            inter_slot: Duration::from_micros(self.inter_slot_us),
            mark_before_packet: Duration::from_micros(self.mark_before_packet_us),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub env: Env,
    pub midi: Midi,
    pub dmx: Dmx,
}

impl Settings {
    pub fn get<'a>() -> &'a Self {
        lazy_static! {
            static ref CACHE: Settings = Settings::load();
        }
        &CACHE
    }

    fn load() -> Self {
        let env = match env::var("ENV") {
            Ok(e) => e,
            Err(_) => {
                log::warn!("no ENV set, use default: 'dev'");
                String::from("dev")
            }
        };

        let file_path: String = format!("config_{}.toml", env);

        let mut file = match File::open(file_path.as_str()) {
            Ok(f) => f,
            Err(e) => {
                log::warn!("cannot open config file {}, use defaults, exception: {}", file_path, e);
                return Settings::default();
            }
        };

        let mut str_val = String::new();
        if let Err(e) = file.read_to_string(&mut str_val) {
            log::warn!("cannot read config file {}, use defaults, exception: {}", file_path, e);
            return Settings::default();
        }

        match Settings::from_toml(&str_val) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("{}, use defaults", e);
                Settings::default()
            }
        }
    }

    pub fn from_toml(s: &str) -> Result<Self, BridgeError> {
        toml::from_str(s).map_err(|e| BridgeError::new(
            ErrorCode::ConfigError,
            &format!("config file format invalid: {}", e),
        ))
    }

    /// receivers detect BREAK and MAB by duration, shorter values are not dmx512
    pub fn validate(&self) -> Result<(), BridgeError> {
        if self.dmx.break_us < MIN_BREAK_US {
            return Err(BridgeError::new(
                ErrorCode::ConfigError,
                &format!("dmx.break_us = {} is below the minimum of {}", self.dmx.break_us, MIN_BREAK_US),
            ));
        }
        if self.dmx.mab_us < MIN_MAB_US {
            return Err(BridgeError::new(
                ErrorCode::ConfigError,
                &format!("dmx.mab_us = {} is below the minimum of {}", self.dmx.mab_us, MIN_MAB_US),
            ));
        }
        if self.midi.baudrate == 0 {
            return Err(BridgeError::new(ErrorCode::ConfigError, "midi.baudrate must not be zero"));
        }
        Ok(())
    }
}
