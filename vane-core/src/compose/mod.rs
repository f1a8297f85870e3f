//! Conditional sub-component composition
//!
//! Given a parent object and its validated configuration, emit the
//! parent's capability call followed by declare/register/wire triples for
//! every slot present in the configuration.

pub mod composer;
pub mod slot;

pub use composer::compose;
pub use slot::{CompositeDef, FlagDef, SlotDef};
