//! Configuration loading and validation
//!
//! Reads a TOML device configuration, validates every component against
//! its schema from `vane-core`, applies defaults and generates missing ids.
//! The result is a [`Document`] of immutable configuration trees ready for
//! code generation.

pub mod document;
pub mod duration;
pub mod error;
pub mod loader;
pub mod validate;

pub use document::{DeviceConfig, Document};
pub use error::{ConfigError, FieldError, FieldErrorKind, ValidationErrors};
pub use loader::{load_file, parse_document, LoadOptions};
pub use validate::validate_document;
