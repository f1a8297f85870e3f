//! Instruction definitions

use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::config::{ConfigTree, Id, Value};
use crate::deps::DependencyDescriptor;

/// Fully qualified class of a declared object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ClassPath {
    pub namespace: &'static str,
    pub name: &'static str,
}

impl ClassPath {
    pub const fn new(namespace: &'static str, name: &'static str) -> Self {
        Self { namespace, name }
    }
}

impl fmt::Display for ClassPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.namespace, self.name)
    }
}

/// A method on a declared object
///
/// Methods are named by constants next to the component that owns them,
/// so call sites reference them directly instead of looking names up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Method(&'static str);

impl Method {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn name(&self) -> &'static str {
        self.0
    }
}

/// Handle to a declared object
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ObjectRef(Id);

impl ObjectRef {
    pub fn new(id: Id) -> Self {
        Self(id)
    }

    pub fn id(&self) -> &Id {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminant of an [`Instruction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InstructionKind {
    Declare,
    SetFields,
    RegisterManaged,
    Wire,
    AddDependency,
}

/// One step of the generated program
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Instruction {
    /// Declare a new object of `class`, constructed with `args`
    Declare {
        target: ObjectRef,
        class: ClassPath,
        args: Vec<Value>,
    },
    /// Call `method` on `target` with scalar values in a fixed order
    SetFields {
        target: ObjectRef,
        method: Method,
        values: Vec<Value>,
    },
    /// Register `target` as a lifecycle managed unit
    RegisterManaged {
        target: ObjectRef,
        config: ConfigTree,
    },
    /// Hand `child` to `parent` through `method`
    Wire {
        parent: ObjectRef,
        method: Method,
        child: ObjectRef,
    },
    /// Link an external library into the generated program
    AddDependency(DependencyDescriptor),
}

impl Instruction {
    pub fn kind(&self) -> InstructionKind {
        match self {
            Instruction::Declare { .. } => InstructionKind::Declare,
            Instruction::SetFields { .. } => InstructionKind::SetFields,
            Instruction::RegisterManaged { .. } => InstructionKind::RegisterManaged,
            Instruction::Wire { .. } => InstructionKind::Wire,
            Instruction::AddDependency(_) => InstructionKind::AddDependency,
        }
    }

    /// The object this instruction acts on, if any
    pub fn target(&self) -> Option<&ObjectRef> {
        match self {
            Instruction::Declare { target, .. }
            | Instruction::SetFields { target, .. }
            | Instruction::RegisterManaged { target, .. } => Some(target),
            Instruction::Wire { parent, .. } => Some(parent),
            Instruction::AddDependency(_) => None,
        }
    }
}
