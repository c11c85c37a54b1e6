use crate::error::NetworkError;
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum InputError {
    Serialization(SerdeJsonError),
    Io(io::Error),
    Csv(csv::Error),
    Network(NetworkError),
    InvalidData(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Serialization(err) => write!(f, "serialization error: {err}"),
            InputError::Io(err) => write!(f, "io error: {err}"),
            InputError::Csv(err) => write!(f, "csv error: {err}"),
            InputError::Network(err) => write!(f, "invalid network: {err}"),
            InputError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Serialization(err) => Some(err),
            InputError::Io(err) => Some(err),
            InputError::Csv(err) => Some(err),
            InputError::Network(err) => Some(err),
            InputError::InvalidData(_) => None,
        }
    }
}

impl From<SerdeJsonError> for InputError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<io::Error> for InputError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for InputError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<NetworkError> for InputError {
    fn from(value: NetworkError) -> Self {
        Self::Network(value)
    }
}

pub type InputResult<T> = Result<T, InputError>;

pub mod file;

pub use file::{
    load_network_from_csv, load_network_from_json, load_records_from_csv, parse_network_json,
    read_records_from_csv,
};
