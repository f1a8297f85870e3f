//! Build target identity
//!
//! The platform is a closed set of microcontroller families. It comes from
//! the device section of the configuration (or a command line override)
//! and is never inferred here.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Microcontroller family of the target device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Platform {
    #[default]
    Esp32,
    Esp8266,
    /// Beken BK72xx (LibreTiny)
    Bk72xx,
    /// Realtek RTL87xx (LibreTiny)
    Rtl87xx,
    Rp2040,
    /// Native host build
    Host,
}

impl Platform {
    pub const ALL: &'static [Platform] = &[
        Platform::Esp32,
        Platform::Esp8266,
        Platform::Bk72xx,
        Platform::Rtl87xx,
        Platform::Rp2040,
        Platform::Host,
    ];

    /// Configuration token
    pub const fn name(self) -> &'static str {
        match self {
            Platform::Esp32 => "esp32",
            Platform::Esp8266 => "esp8266",
            Platform::Bk72xx => "bk72xx",
            Platform::Rtl87xx => "rtl87xx",
            Platform::Rp2040 => "rp2040",
            Platform::Host => "host",
        }
    }

    pub const fn is_esp32(self) -> bool {
        matches!(self, Platform::Esp32)
    }

    pub const fn is_esp8266(self) -> bool {
        matches!(self, Platform::Esp8266)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised platform token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownPlatform;

impl fmt::Display for UnknownPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown platform")
    }
}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownPlatform)
    }
}

/// Software framework the device program is built on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Framework {
    #[default]
    Arduino,
    EspIdf,
}

impl Framework {
    pub const fn name(self) -> &'static str {
        match self {
            Framework::Arduino => "arduino",
            Framework::EspIdf => "esp-idf",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised framework token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownFramework;

impl fmt::Display for UnknownFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown framework")
    }
}

impl FromStr for Framework {
    type Err = UnknownFramework;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arduino" => Ok(Framework::Arduino),
            "esp-idf" | "esp_idf" => Ok(Framework::EspIdf),
            _ => Err(UnknownFramework),
        }
    }
}

/// Platform and framework of one build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Target {
    pub platform: Platform,
    pub framework: Framework,
}

impl Target {
    pub const fn new(platform: Platform, framework: Framework) -> Self {
        Self {
            platform,
            framework,
        }
    }

    pub const fn arduino(platform: Platform) -> Self {
        Self::new(platform, Framework::Arduino)
    }
}
