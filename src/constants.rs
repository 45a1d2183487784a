// src/constants.rs

/// Subgroup GUID for processor power management settings.
pub const PROCESSOR_SUBGROUP: &str = "54533251-82be-4824-96c1-47b60b740d00";

/// Setting GUID for processor performance boost mode.
pub const BOOST_MODE_GUID: &str = "be337238-0d82-4146-a960-4f3749d470c7";

/// Setting GUID for the maximum processor state percentage.
pub const MAX_PROCESSOR_STATE_GUID: &str = "bc5038f7-23e0-4960-96da-33abaf5935ec";

/// Maximum processor state values below this are rejected outright; throttling
/// the CPU that far down is known to make the system unstable.
pub const MIN_PROCESSOR_STATE: i32 = 20;
