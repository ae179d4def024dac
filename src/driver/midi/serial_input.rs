//! upstream midi transport
//! reads raw midi bytes from a serial port (or stdin in dummy mode) and hands them to the byte link one by one

use std::io;
use std::pin::Pin;
use std::thread;
use futures::{Stream, TryStreamExt};
use tokio::runtime::Runtime;
use tokio_serial::SerialPortBuilderExt;
use tokio_util::{
    bytes::{Buf, BytesMut},
    codec::{Decoder, FramedRead},
};
use super::byte_link::ByteLink;
use crate::common::error::DriverError;
use crate::common::setting::Midi;
use crate::{debug, error, info, trace};

const LOG_TAG: &str = "serial_input.rs | midi input";

/// where the raw byte stream comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Serial { port: String, baudrate: u32 },
    Stdin,
}

impl From<&Midi> for InputSource {
    fn from(midi: &Midi) -> Self {
        if midi.dummy {
            InputSource::Stdin
        } else {
            InputSource::Serial {
                port: midi.serial_port.clone(),
                baudrate: midi.baudrate,
            }
        }
    }
}

type ByteStream = Pin<Box<dyn Stream<Item = Result<u8, io::Error>> + Send>>;

/// an opened midi source together with the runtime that drives it
pub struct MidiInput {
    rt: Runtime,
    reader: ByteStream,
}

/// open the source, fails when the serial port cannot be opened
pub fn open(source: &InputSource) -> Result<MidiInput, DriverError> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| DriverError(format!("cannot init tokio runtime for midi input, err: {}", e)))?;

    let reader: ByteStream = {
        // the serial stream registers with the reactor of this runtime
        let _guard = rt.enter();
        match source {
            InputSource::Serial { port, baudrate } => {
                let serial = tokio_serial::new(port.as_str(), *baudrate)
                    .open_native_async()
                    .map_err(|e| DriverError(format!(
                        "cannot open midi serial port: {}, err: {}", port, e
                    )))?;
                info!(LOG_TAG, "reading midi from {} at {} baud", port, baudrate);
                Box::pin(FramedRead::new(serial, MidiByteCodec))
            }
            InputSource::Stdin => {
                info!(LOG_TAG, "dummy mode, reading raw midi bytes from stdin");
                Box::pin(FramedRead::new(tokio::io::stdin(), MidiByteCodec))
            }
        }
    };

    Ok(MidiInput { rt, reader })
}

impl MidiInput {
    /// pump the source into the link until it ends
    pub fn run_loop(self, link: ByteLink) -> Result<(), DriverError> {
        let MidiInput { rt, reader } = self;
        rt.block_on(pump(reader, &link))
    }
}

pub fn spawn(input: MidiInput, link: ByteLink) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        if let Err(e) = input.run_loop(link) {
            error!(LOG_TAG, "midi input stopped: {}", e);
        }
    })
}

async fn pump<S>(mut reader: S, link: &ByteLink) -> Result<(), DriverError>
where
    S: Stream<Item = Result<u8, io::Error>> + Unpin,
{
    loop {
        match reader.try_next().await {
            Ok(Some(byte)) => {
                trace!(LOG_TAG, "got byte: {:#04x}", byte);
                link.deliver(byte)?;
            }
            Ok(None) => {
                info!(LOG_TAG, "midi input reached end of stream, overruns: {}", link.overruns());
                return Ok(());
            }
            Err(e) => {
                return Err(DriverError(format!("read midi input error: {}", e)));
            }
        }
    }
}

/// midi has no framing on the wire, every byte is its own item
#[derive(Clone, Debug, Eq, PartialEq)]
struct MidiByteCodec;

impl Decoder for MidiByteCodec {
    type Item = u8;
    type Error = io::Error;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if buf.is_empty() {
            return Ok(None);
        }
        Ok(Some(buf.get_u8()))
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if !buf.is_empty() {
            debug!(LOG_TAG, "{} bytes left at end of stream", buf.len());
        }
        self.decode(buf)
    }
}
