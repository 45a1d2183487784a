// src/models.rs

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, FromRepr};

/// Processor performance boost mode as understood by the OS power manager.
///
/// The discriminants are the raw values `powercfg` expects for the boost mode
/// setting index; the set is closed and fixed by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, FromRepr)]
#[repr(i32)]
pub enum BoostMode {
    Disabled = 0,
    Enabled = 1,
    Aggressive = 2,
    #[strum(serialize = "Efficient Enabled")]
    EfficientEnabled = 3,
    #[strum(serialize = "Efficient Aggressive")]
    EfficientAggressive = 4,
    #[strum(serialize = "Aggressive At Guaranteed")]
    AggressiveAtGuaranteed = 5,
    #[strum(serialize = "Efficient Aggressive At Guaranteed")]
    EfficientAggressiveAtGuaranteed = 6,
}

impl BoostMode {
    /// The raw setting index passed to `powercfg`.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Looks up a boost mode by its raw code. `None` for anything outside
    /// the fixed 0..=6 set.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::from_repr(code)
    }

    /// All valid modes as a single `code: label, ...` line, for error
    /// messages that must enumerate the full set.
    pub fn catalog() -> String {
        Self::iter()
            .map(|mode| format!("{}: {}", mode.code(), mode))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A concrete power rail: plugged-in (AC) or battery (DC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Rail {
    #[strum(serialize = "AC")]
    Ac,
    #[strum(serialize = "DC")]
    Dc,
}

impl Rail {
    /// The `powercfg` flag that writes a setting index on this rail.
    pub fn set_value_flag(self) -> &'static str {
        match self {
            Rail::Ac => "/setacvalueindex",
            Rail::Dc => "/setdcvalueindex",
        }
    }
}

/// Which rail(s) a request targets. Parses case-insensitively from
/// `ac`, `dc` or `both`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum RailSelection {
    Ac,
    Dc,
    Both,
}

impl RailSelection {
    /// Expands the selection into concrete rails, AC first. The write order
    /// downstream follows this order.
    pub fn rails(self) -> &'static [Rail] {
        match self {
            RailSelection::Ac => &[Rail::Ac],
            RailSelection::Dc => &[Rail::Dc],
            RailSelection::Both => &[Rail::Ac, Rail::Dc],
        }
    }
}

/// Per-rail snapshot of the two managed settings, read back from the active
/// scheme. A slot is `None` when `powercfg /query` did not report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurrentSettings {
    pub ac_boost_mode: Option<u32>,
    pub dc_boost_mode: Option<u32>,
    pub ac_max_processor_state: Option<u32>,
    pub dc_max_processor_state: Option<u32>,
}
