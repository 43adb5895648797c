// SPDX-License-Identifier: MPL-2.0
use crate::application::port::BackendError;
use crate::domain::error::StateError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Export was requested before an output directory was chosen.
    #[error("Please select an output directory first")]
    OutputDirectoryNotSet,

    /// A line of a command script could not be understood.
    #[error("Script Error: {0}")]
    Script(String),

    #[error("Logging Error: {0}")]
    Logging(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::photo::{PhotoId, Side};

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn state_errors_keep_their_message() {
        let err: Error = StateError::NoActiveFiles.into();
        assert_eq!(err.to_string(), StateError::NoActiveFiles.to_string());

        let key = PhotoId::new("a.jpg").half(Side::Left);
        let err: Error = StateError::InvalidKey(key.clone()).into();
        assert_eq!(err, Error::State(StateError::InvalidKey(key)));
    }

    #[test]
    fn backend_errors_are_shown_verbatim() {
        let err: Error = BackendError::Failed("No valid images were processed".into()).into();
        assert_eq!(err.to_string(), "No valid images were processed");
    }
}
