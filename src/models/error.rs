use derive_more::Display;
use serde::{Deserialize, Serialize};
use specta::Type;

#[derive(Type, Serialize, Deserialize, Debug, Display, Clone, PartialEq)]
pub enum EmuError {
    #[display("invalid Ryujinx installation: {_0}")]
    InvalidInstallation(String),
    #[display("unknown installation: {_0}")]
    InstallationNotFound(String),
    #[display("invalid title id: {_0}")]
    InvalidTitleId(String),
    #[display("invalid file name: {_0}")]
    InvalidFileName(String),
    #[display("parse error: {_0}")]
    ParseError(String),
    #[display("io error: {_0}")]
    IOError(String),
    #[display("network error: {_0}")]
    Network(String),
    #[display("archive error: {_0}")]
    Archive(String),
    #[display("failed to persist configuration: {_0}")]
    Persistence(String),
    #[display("async runtime error: {_0}")]
    AsyncRuntimeError(String),
}

impl std::error::Error for EmuError {}

impl From<std::io::Error> for EmuError {
    fn from(e: std::io::Error) -> Self {
        EmuError::IOError(e.to_string())
    }
}

impl From<serde_json::Error> for EmuError {
    fn from(e: serde_json::Error) -> Self {
        EmuError::ParseError(e.to_string())
    }
}

impl From<zip::result::ZipError> for EmuError {
    fn from(e: zip::result::ZipError) -> Self {
        EmuError::Archive(e.to_string())
    }
}

impl From<reqwest::Error> for EmuError {
    fn from(e: reqwest::Error) -> Self {
        EmuError::Network(e.to_string())
    }
}

impl From<confy::ConfyError> for EmuError {
    fn from(e: confy::ConfyError) -> Self {
        EmuError::Persistence(e.to_string())
    }
}
