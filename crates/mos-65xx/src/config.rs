//! CPU configuration.

use serde::{Deserialize, Serialize};

use crate::Variant;

/// How to build an [`M65xx`](crate::M65xx).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub variant: Variant,
    /// Instance number for save-state tagging when a host runs several
    /// CPUs of the same variant.
    #[serde(default)]
    pub instance: u32,
}

impl Config {
    #[must_use]
    pub const fn new(variant: Variant) -> Self {
        Self {
            variant,
            instance: 0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Variant::Nmos6502)
    }
}
