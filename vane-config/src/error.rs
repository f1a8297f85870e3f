//! Error types for configuration loading

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use vane_core::platform::{Framework, Platform};

/// What is wrong with a single field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldErrorKind {
    #[error("required field is missing")]
    Missing,

    #[error("unknown key")]
    UnknownKey,

    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid duration {0:?} (use ms, s, min or h)")]
    InvalidDuration(String),

    #[error("invalid id {0:?}")]
    InvalidId(String),

    #[error("id {0:?} is declared more than once")]
    DuplicateId(String),

    #[error("unknown platform {0:?}")]
    UnknownPlatform(String),

    #[error("unknown framework {0:?}")]
    UnknownFramework(String),

    #[error("unknown component")]
    UnknownComponent,

    #[error("component is not available on {0}")]
    UnsupportedPlatform(Platform),

    #[error("component requires the {0} framework")]
    RequiresFramework(Framework),
}

/// A field level validation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {kind}")]
pub struct FieldError {
    /// Dotted path, e.g. `climate[0].vertical_swing_select.name`
    pub path: String,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(path: impl Into<String>, kind: FieldErrorKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Every field error found in one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Find the first error at `path`
    pub fn at(&self, path: &str) -> Option<&FieldErrorKind> {
        self.0.iter().find(|e| e.path == path).map(|e| &e.kind)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} invalid field(s)", self.0.len())?;
        for error in &self.0 {
            write!(f, "\n  - {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationErrors),
}
