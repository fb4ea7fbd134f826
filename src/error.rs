// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Errors travel inside Iced messages, so every variant owns plain strings
//! and the type is `Clone`.

use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Invalid URL: {0}")]
    Url(String),
    /// The request never produced an HTTP response (connection refused, timeout...).
    #[error("Request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("Server responded with status {status}")]
    Api {
        status: u16,
        /// Human-readable message extracted from the response body, if any.
        message: Option<String>,
    },
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl Error {
    /// Returns the message the server attached to a failed request.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::Api {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
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

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Url(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Transport(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

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
    fn server_message_is_exposed_for_api_errors() {
        let err = Error::Api {
            status: 409,
            message: Some("Title already used".into()),
        };
        assert_eq!(err.server_message(), Some("Title already used"));
        assert_eq!(format!("{}", err), "Server responded with status 409");
    }

    #[test]
    fn blank_server_message_is_ignored() {
        let err = Error::Api {
            status: 500,
            message: Some("   ".into()),
        };
        assert!(err.server_message().is_none());
        assert!(Error::Transport("refused".into()).server_message().is_none());
    }

    #[test]
    fn url_parse_error_maps_to_url_variant() {
        let err: Error = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, Error::Url(_)));
    }
}
