//! Validated document

use vane_core::components::{ComponentConfig, ComponentKind};
use vane_core::platform::Target;

/// `[device]` section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    pub name: String,
    pub target: Target,
}

/// A fully validated configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub device: DeviceConfig,
    /// Components in document order
    pub components: Vec<ComponentConfig>,
}

impl Document {
    pub fn target(&self) -> Target {
        self.device.target
    }

    /// Number of configured components of `kind`
    pub fn count(&self, kind: ComponentKind) -> usize {
        self.components.iter().filter(|c| c.kind == kind).count()
    }
}
