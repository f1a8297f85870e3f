//! Slot and composite definitions
//!
//! These are static tables owned by each composite component. They fix
//! which capability flags feed the parent's "supported modes" call and
//! which optional sub-components can hang off the parent.

use crate::codegen::{ClassPath, Method};

/// Boolean capability flag on the parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlagDef {
    pub key: &'static str,
}

impl FlagDef {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }
}

/// Optional sub-component position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlotDef {
    /// Configuration key whose presence creates the sub-component
    pub key: &'static str,
    /// Class of the sub-component
    pub class: ClassPath,
    /// Option labels handed to the sub-component at construction
    pub options: &'static [&'static str],
    /// Parent method that receives the sub-component
    pub wire: Method,
}

/// Everything the composer needs to know about a composite component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CompositeDef {
    /// Parent method taking all capability flags in order
    pub modes_method: Method,
    pub flags: &'static [FlagDef],
    /// Active slots, in emission order
    pub slots: &'static [SlotDef],
}
