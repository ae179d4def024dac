use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    // invalid settings
    ConfigError = 1001,
    // upstream transport could not be started
    TransportError = 1002,
}

#[derive(Debug)]
pub struct BridgeError {
    pub code: ErrorCode,
    pub msg: String,
}

impl BridgeError {
    pub fn new(code: ErrorCode, msg: &str) -> Self {
        BridgeError {
            code,
            msg: msg.to_string(),
        }
    }
}

impl Display for BridgeError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "bridge error code: {}, msg: {}", self.code as u16, self.msg)
    }
}

impl Error for BridgeError {}

// hardware driver error
#[derive(Debug)]
pub struct DriverError(pub String);

impl Display for DriverError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "driver error msg: {}", self.0)
    }
}

impl Error for DriverError {}

impl From<DriverError> for BridgeError {
    fn from(e: DriverError) -> Self {
        BridgeError {
            code: ErrorCode::TransportError,
            msg: e.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_code() {
        let e = BridgeError::new(ErrorCode::ConfigError, "break too short");
        assert_eq!(e.to_string(), "bridge error code: 1001, msg: break too short");
    }

    #[test]
    fn test_driver_error_converts_to_transport_error() {
        let e: BridgeError = DriverError("port busy".to_string()).into();
        assert_eq!(e.code, ErrorCode::TransportError);
        assert_eq!(e.msg, "port busy");
    }
}
