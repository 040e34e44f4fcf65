// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Registry(String),
    Dispatch(String),
    Playback(PlaybackFault),
}

/// Faults raised by the native playback control.
///
/// The environment layer that wraps the real control decides the
/// classification; the renderer only pattern-matches on it. A fault never
/// escapes the adapter as a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackFault {
    /// The control has not finished initializing (e.g., seek before load).
    NotReady,

    /// The control tore down state mid-operation (e.g., playlist freed
    /// between an is-playing check and a position read).
    Detached,

    /// The control rejected the queued item.
    QueueRejected(String),

    /// Generic fault with raw message.
    Other(String),
}

impl PlaybackFault {
    /// Returns the i18n message key for this fault.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PlaybackFault::NotReady => "error-playback-not-ready",
            PlaybackFault::Detached => "error-playback-detached",
            PlaybackFault::QueueRejected(_) => "error-playback-queue-rejected",
            PlaybackFault::Other(_) => "error-playback-general",
        }
    }
}

impl fmt::Display for PlaybackFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackFault::NotReady => write!(f, "Playback control is not ready"),
            PlaybackFault::Detached => write!(f, "Playback control went away mid-operation"),
            PlaybackFault::QueueRejected(msg) => {
                write!(f, "Playback control rejected the item: {}", msg)
            }
            PlaybackFault::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Registry(e) => write!(f, "Registry Error: {}", e),
            Error::Dispatch(e) => write!(f, "Dispatch Error: {}", e),
            Error::Playback(e) => write!(f, "Playback Error: {}", e),
        }
    }
}

impl From<PlaybackFault> for Error {
    fn from(fault: PlaybackFault) -> Self {
        Error::Playback(fault)
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

pub type Result<T> = std::result::Result<T, Error>;
