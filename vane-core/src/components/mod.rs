//! Component registry and program generation
//!
//! Each supported component is a variant of [`ComponentKind`] carrying its
//! schema, platform restrictions, priority and code generator.

pub mod async_tcp;
pub mod climate_ir;
pub mod panasonic_ir;
pub mod select;

use alloc::vec::Vec;
use core::cmp::Reverse;

use crate::codegen::Program;
use crate::config::{ConfigTree, Schema};
use crate::platform::{Framework, Platform, Target};

/// Priority of components without an explicit one
pub const DEFAULT_PRIORITY: i16 = 0;

/// Known components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ComponentKind {
    /// `[async_tcp]`
    AsyncTcp,
    /// `[[climate]]` with `platform = "panasonic_ir"`
    PanasonicIrClimate,
}

impl ComponentKind {
    pub const ALL: &'static [ComponentKind] =
        &[ComponentKind::AsyncTcp, ComponentKind::PanasonicIrClimate];

    /// Top level configuration key
    pub const fn domain(self) -> &'static str {
        match self {
            ComponentKind::AsyncTcp => "async_tcp",
            ComponentKind::PanasonicIrClimate => "climate",
        }
    }

    /// `platform` value selecting this component within its domain
    pub const fn platform_key(self) -> Option<&'static str> {
        match self {
            ComponentKind::AsyncTcp => None,
            ComponentKind::PanasonicIrClimate => Some(panasonic_ir::NAMESPACE),
        }
    }

    /// Resolve a component from its domain and optional platform value
    pub fn lookup(domain: &str, platform: Option<&str>) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.domain() == domain && k.platform_key() == platform)
    }

    /// Whether `domain` holds a list of platform entries
    pub fn is_platform_domain(domain: &str) -> bool {
        Self::ALL
            .iter()
            .any(|k| k.domain() == domain && k.platform_key().is_some())
    }

    pub fn schema(self) -> &'static Schema {
        match self {
            ComponentKind::AsyncTcp => &async_tcp::CONFIG_SCHEMA,
            ComponentKind::PanasonicIrClimate => &panasonic_ir::CONFIG_SCHEMA,
        }
    }

    pub const fn priority(self) -> i16 {
        match self {
            ComponentKind::AsyncTcp => async_tcp::PRIORITY,
            ComponentKind::PanasonicIrClimate => DEFAULT_PRIORITY,
        }
    }

    /// Platforms this component is restricted to, if any
    pub const fn supported_platforms(self) -> Option<&'static [Platform]> {
        match self {
            ComponentKind::AsyncTcp => Some(async_tcp::SUPPORTED_PLATFORMS),
            ComponentKind::PanasonicIrClimate => None,
        }
    }

    /// Framework this component requires, if any
    pub const fn required_framework(self) -> Option<Framework> {
        match self {
            ComponentKind::AsyncTcp => Some(async_tcp::REQUIRED_FRAMEWORK),
            ComponentKind::PanasonicIrClimate => None,
        }
    }

    /// Emit this component's instructions
    pub fn to_code(self, program: &mut Program, config: &ConfigTree, target: Target) {
        match self {
            ComponentKind::AsyncTcp => async_tcp::to_code(program, target.platform),
            ComponentKind::PanasonicIrClimate => {
                panasonic_ir::to_code(program, config);
            }
        }
    }
}

/// One validated component entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentConfig {
    pub kind: ComponentKind,
    pub config: ConfigTree,
}

impl ComponentConfig {
    pub fn new(kind: ComponentKind, config: ConfigTree) -> Self {
        Self { kind, config }
    }
}

/// Generate the program for a validated set of components
///
/// Components run in descending priority; equal priorities keep document
/// order.
pub fn generate(components: &[ComponentConfig], target: Target) -> Program {
    let mut ordered: Vec<&ComponentConfig> = components.iter().collect();
    ordered.sort_by_key(|c| Reverse(c.kind.priority()));

    let mut program = Program::new();
    for component in ordered {
        component.kind.to_code(&mut program, &component.config, target);
    }
    program
}
