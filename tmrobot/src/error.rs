use std::net::SocketAddr;

use rodbus::{InvalidRange, InvalidRequest, RequestError, Shutdown};

/// Errors that can occur while talking to the robot
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// the channel never reached the connected state
    #[error("unable to connect to modbus server {addr} ({reason})")]
    Connect {
        /// address of the robot
        addr: SocketAddr,
        /// channel state that ended the attempt
        reason: String,
    },
    /// the request failed in transport or was rejected by the device
    #[error("{0}")]
    Request(#[from] RequestError),
    /// start and count do not describe a valid address range
    #[error("{0}")]
    BadRange(InvalidRange),
    /// a read of discrete inputs came back without any bits
    #[error("no value returned for discrete input {0}")]
    EmptyResponse(u16),
    /// the channel task is no longer running
    #[error("channel was shut down")]
    Shutdown,
}

/// Reasons a project name is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProjectNameError {
    /// the name has no characters
    #[error("name is empty")]
    Empty,
    /// the name contains something other than printable ASCII
    #[error("character {ch:?} at position {position} is not printable ASCII")]
    NotPrintable {
        /// character offset within the name
        position: usize,
        /// the offending character
        ch: char,
    },
    /// the packed name does not fit in one request
    #[error("name has {len} characters but at most {max} are allowed")]
    TooLong {
        /// length of the name
        len: usize,
        /// maximum allowed length
        max: usize,
    },
}

/// Reasons a speed is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpeedError {
    /// the text is not a whole number
    #[error("speed is not a number: {0}")]
    NotANumber(#[from] std::num::ParseIntError),
    /// the value is above 100 percent
    #[error("speed {0} is outside the range 0..=100")]
    OutOfRange(u16),
}

impl From<InvalidRange> for Error {
    fn from(err: InvalidRange) -> Self {
        Error::BadRange(err)
    }
}

impl From<InvalidRequest> for Error {
    fn from(err: InvalidRequest) -> Self {
        Error::Request(err.into())
    }
}

impl From<Shutdown> for Error {
    fn from(_: Shutdown) -> Self {
        Self::Shutdown
    }
}
