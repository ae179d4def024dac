pub mod traits;
pub mod indicator;
pub mod midi;
pub mod dmx;
