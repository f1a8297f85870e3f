//! External library dependencies
//!
//! - [`DependencyDescriptor`] - identifies a library the generated program links
//! - [`selector`] - picks a descriptor for the target platform

pub mod selector;

use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

pub use selector::{select, DependencyRule};

/// External library required by the generated program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DependencyDescriptor {
    /// Library name (registry name or package identifier)
    pub name: &'static str,
    /// Pinned registry version
    pub version: Option<&'static str>,
    /// Source location (git URL), used instead of the registry
    pub source: Option<&'static str>,
}

impl DependencyDescriptor {
    /// Library resolved from the registry at a pinned version
    pub const fn versioned(name: &'static str, version: &'static str) -> Self {
        Self {
            name,
            version: Some(version),
            source: None,
        }
    }

    /// Library fetched from a source location
    pub const fn from_source(name: &'static str, source: &'static str) -> Self {
        Self {
            name,
            version: None,
            source: Some(source),
        }
    }
}

/// Renders in PlatformIO `lib_deps` form
impl fmt::Display for DependencyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.version, self.source) {
            (_, Some(source)) => write!(f, "{}={}", self.name, source),
            (Some(version), None) => write!(f, "{}@{}", self.name, version),
            (None, None) => f.write_str(self.name),
        }
    }
}
