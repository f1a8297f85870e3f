//! Board-agnostic core of the vane device configuration compiler
//!
//! This crate turns an already validated configuration into an ordered
//! list of construction instructions for the generated device program:
//!
//! - Configuration tree and schema descriptions
//! - Platform and build target model
//! - Instruction model and the ordered program sink
//! - Platform dependency selection
//! - Conditional sub-component composition
//! - Component definitions and generation
//! - Reference emission backends (C++ statements, library manifest)
//!
//! Nothing in here performs I/O or validation. Loading and validating
//! user configuration lives in `vane-config`.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod codegen;
pub mod components;
pub mod compose;
pub mod config;
pub mod deps;
pub mod platform;
