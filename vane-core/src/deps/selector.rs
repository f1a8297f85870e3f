//! Platform dependency selection
//!
//! A selector is a fixed, ordered table of `(predicate, descriptor)` rules.
//! The first rule whose predicate accepts the platform wins; if none does,
//! nothing is selected.

use super::DependencyDescriptor;
use crate::platform::Platform;

/// One selection rule
#[derive(Debug, Clone, Copy)]
pub struct DependencyRule {
    pub matches: fn(Platform) -> bool,
    pub descriptor: DependencyDescriptor,
}

impl DependencyRule {
    pub const fn new(matches: fn(Platform) -> bool, descriptor: DependencyDescriptor) -> Self {
        Self {
            matches,
            descriptor,
        }
    }
}

/// Pick the descriptor of the first matching rule
pub fn select(rules: &[DependencyRule], platform: Platform) -> Option<DependencyDescriptor> {
    rules
        .iter()
        .find(|rule| (rule.matches)(platform))
        .map(|rule| rule.descriptor)
}
