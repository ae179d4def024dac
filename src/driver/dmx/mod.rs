pub mod prelude;
pub mod entity;
pub mod universe;
pub mod timing;
pub mod transmitter;
pub mod serial_line;
pub mod dmx_thread;
