//! AsyncTCP library integration
//!
//! Has no configuration of its own. Enabling it links the asynchronous TCP
//! library matching the target chip family.

use crate::codegen::{Instruction, Program};
use crate::config::Schema;
use crate::deps::{select, DependencyDescriptor, DependencyRule};
use crate::platform::{Framework, Platform};

pub static CONFIG_SCHEMA: Schema = Schema::new(&[]);

/// Platforms the component may be enabled on
pub const SUPPORTED_PLATFORMS: &[Platform] = &[
    Platform::Esp32,
    Platform::Esp8266,
    Platform::Bk72xx,
    Platform::Rtl87xx,
];

pub const REQUIRED_FRAMEWORK: Framework = Framework::Arduino;

/// Runs before ordinary components so dependants see the library
pub const PRIORITY: i16 = 200;

/// Library selection table
///
/// LibreTiny chips ship the library in their core, so they have no rule.
pub const LIBRARIES: &[DependencyRule] = &[
    DependencyRule::new(
        Platform::is_esp32,
        DependencyDescriptor::from_source(
            "AsyncTCP-esphome",
            "https://github.com/libretiny-eu/AsyncTCP",
        ),
    ),
    DependencyRule::new(
        Platform::is_esp8266,
        DependencyDescriptor::versioned("esphome/ESPAsyncTCP-esphome", "1.2.3"),
    ),
];

pub fn select_library(platform: Platform) -> Option<DependencyDescriptor> {
    select(LIBRARIES, platform)
}

pub fn to_code(program: &mut Program, platform: Platform) {
    if let Some(library) = select_library(platform) {
        program.push(Instruction::AddDependency(library));
    }
}
