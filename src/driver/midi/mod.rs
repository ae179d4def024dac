pub mod prelude;
pub mod entity;
pub mod parser;
pub mod mapper;
pub mod handler;
pub mod byte_link;
pub mod midi_thread;
pub mod serial_input;
