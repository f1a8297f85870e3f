//! Instruction model for the generated program
//!
//! Components never produce target source directly. They push abstract
//! instructions into a [`Program`], which a [`backend::Backend`] lowers.

pub mod backend;
pub mod instruction;
pub mod program;

pub use backend::{Backend, CppBackend, LibraryManifest};
pub use instruction::*;
pub use program::Program;
