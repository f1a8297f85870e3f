//! Ordered instruction sink

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use super::instruction::{ClassPath, Instruction, ObjectRef};
use crate::config::Value;
use crate::deps::DependencyDescriptor;

/// The generated program, in emission order
///
/// Registration is idempotent per object: a second `RegisterManaged` for
/// the same reference is dropped. Identical dependencies are only added
/// once.
#[derive(Debug, Clone, Default)]
pub struct Program {
    instructions: Vec<Instruction>,
    registered: BTreeSet<ObjectRef>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an instruction
    ///
    /// Returns `false` if the instruction was a duplicate and was dropped.
    pub fn push(&mut self, instruction: Instruction) -> bool {
        match &instruction {
            Instruction::RegisterManaged { target, .. } => {
                if !self.registered.insert(target.clone()) {
                    return false;
                }
            }
            Instruction::AddDependency(dep) => {
                if self.dependencies().any(|d| d == dep) {
                    return false;
                }
            }
            _ => {}
        }
        self.instructions.push(instruction);
        true
    }

    pub fn extend<I: IntoIterator<Item = Instruction>>(&mut self, instructions: I) {
        for instruction in instructions {
            self.push(instruction);
        }
    }

    /// Declare an object and return its reference
    pub fn declare(&mut self, target: ObjectRef, class: ClassPath, args: Vec<Value>) -> ObjectRef {
        self.push(Instruction::Declare {
            target: target.clone(),
            class,
            args,
        });
        target
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter()
    }

    /// Dependencies in the order they were added
    pub fn dependencies(&self) -> impl Iterator<Item = &DependencyDescriptor> {
        self.instructions.iter().filter_map(|i| match i {
            Instruction::AddDependency(dep) => Some(dep),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }
}
