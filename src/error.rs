//! Error types.
//!
//! There is deliberately no parse error: every changelog line classifies,
//! and unrecognized lines are rendered as flagged entries instead.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("template must contain the splice marker `{marker}` exactly once, found {found}")]
    TemplateMarker { marker: &'static str, found: usize },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to commit output to {path}: {source}")]
    Persist {
        path: PathBuf,
        source: tempfile::PersistError,
    },

    #[error("failed to parse config file at {path}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Error {
    /// Short failure-kind name for user-facing messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TemplateMarker { .. } => "template-marker",
            Self::Io { .. } | Self::Persist { .. } => "io",
            Self::Config { .. } => "config",
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_error_message() {
        let err = Error::TemplateMarker {
            marker: "<!-- contents -->",
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "template must contain the splice marker `<!-- contents -->` exactly once, found 2"
        );
        assert_eq!(err.kind(), "template-marker");
    }

    #[test]
    fn test_io_error_kind() {
        let err = Error::io(
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.kind(), "io");
        assert!(err.to_string().starts_with("failed to access missing.txt"));
    }
}
