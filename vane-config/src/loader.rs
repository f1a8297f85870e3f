//! Configuration loader
//!
//! Reads a TOML file from disk, parses it and runs schema validation.

use std::fs;
use std::path::Path;

use toml::Table;
use tracing::{debug, info, warn};

use vane_core::components::ComponentKind;
use vane_core::platform::Platform;

use crate::document::Document;
use crate::error::ConfigError;
use crate::validate::validate_document;

/// Options applied while loading a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Overrides `device.platform` from the file
    pub platform: Option<Platform>,
}

/// Load and validate a configuration file
pub fn load_file(path: &Path, options: &LoadOptions) -> Result<Document, ConfigError> {
    let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes of TOML from {}", source.len(), path.display());
    parse_document(&source, options)
}

/// Parse and validate configuration text
pub fn parse_document(source: &str, options: &LoadOptions) -> Result<Document, ConfigError> {
    let root: Table = toml::from_str(source).map_err(|e| {
        warn!("TOML parse error: {}", e);
        ConfigError::from(e)
    })?;

    let document = validate_document(&root, options).map_err(|errors| {
        warn!("Configuration has {} invalid field(s)", errors.len());
        ConfigError::from(errors)
    })?;

    log_document_summary(&document);
    Ok(document)
}

/// Log a summary of the validated document
fn log_document_summary(document: &Document) {
    let target = document.target();
    info!(
        "Configuration for {} loaded ({} on {})",
        document.device.name, target.platform, target.framework
    );
    for kind in ComponentKind::ALL {
        let count = document.count(*kind);
        if count > 0 {
            debug!("  {} x {}", count, kind.domain());
        }
    }
}
