//! Error types for the host-side surfaces.
//!
//! The simulation core itself cannot fail; only loading and saving settings can.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while loading or saving settings.
#[derive(Debug)]
pub enum SettingsError {
    /// Failed to read or write the settings file.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file was read but is not valid settings JSON.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Settings or a snapshot could not be encoded.
    Encode(serde_json::Error),
    /// Failed to write a snapshot dump.
    Dump {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io { path, source } => {
                write!(f, "Failed to access settings file {}: {}", path.display(), source)
            }
            SettingsError::Parse { path, source } => {
                write!(f, "Invalid settings in {}: {}", path.display(), source)
            }
            SettingsError::Encode(e) => write!(f, "Failed to encode settings: {}", e),
            SettingsError::Dump { path, source } => {
                write!(f, "Failed to write snapshot {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Parse { source, .. } => Some(source),
            SettingsError::Encode(e) => Some(e),
            SettingsError::Dump { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Encode(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_dump_error_names_snapshot() {
        let err = SettingsError::Dump {
            path: PathBuf::from("out/flock.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing dir"),
        };
        let message = err.to_string();

        assert!(message.starts_with("Failed to write snapshot out/flock.json"));
        assert!(!message.contains("settings"));
        assert!(err.source().is_some());
    }
}
