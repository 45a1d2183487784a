// src/power.rs

use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::{
    backend::PowercfgBackend,
    constants::{BOOST_MODE_GUID, MAX_PROCESSOR_STATE_GUID, MIN_PROCESSOR_STATE},
    errors::PowerError,
    models::{BoostMode, CurrentSettings, Rail, RailSelection},
};

/// Applies a boost mode and a maximum processor state to the selected rail(s)
/// of the currently active power scheme.
///
/// Inputs arrive as text (the calling contract passes them through verbatim)
/// and are converted and validated here, in a fixed order: elevation, numeric
/// conversion, the 20% instability floor, the rail selector, the boost-mode
/// code, and finally the 0..=100 range. Each check short-circuits.
///
/// On success the returned string is a newline-joined transcript of what was
/// applied. A failure mid-execution is terminal and leaves earlier writes in
/// place; there is no rollback.
pub fn apply_power_settings<B: PowercfgBackend>(
    backend: &B,
    boost_mode: &str,
    max_processor_state: &str,
    rail: &str,
) -> Result<String, PowerError> {
    if !backend.is_elevated() {
        return Err(PowerError::NotElevated);
    }

    let boost_code: i32 = boost_mode
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| PowerError::InvalidNumber(e.to_string()))?;
    let max_state: i32 = max_processor_state
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| PowerError::InvalidNumber(e.to_string()))?;

    if max_state < MIN_PROCESSOR_STATE {
        return Err(PowerError::ProcessorStateBelowFloor(max_state));
    }

    let selection: RailSelection = rail
        .parse()
        .map_err(|_| PowerError::InvalidRail(rail.to_string()))?;

    let boost =
        BoostMode::from_code(boost_code).ok_or(PowerError::InvalidBoostMode(boost_code))?;

    // The upper-bound check deliberately stays behind the boost-mode check:
    // a bad boost mode wins over an out-of-range percentage.
    if !(0..=100).contains(&max_state) {
        return Err(PowerError::ProcessorStateOutOfRange(max_state));
    }

    info!(
        "applying boost mode {} ({}) and max processor state {}% on {:?}",
        boost.code(),
        boost,
        max_state,
        selection
    );

    let scheme_id = backend.active_scheme()?;
    debug!("active power scheme: {}", scheme_id);

    let mut transcript = Vec::new();

    transcript.push(format!("Setting processor boost mode to: {}", boost));
    for &rail in selection.rails() {
        backend.write_value(&scheme_id, rail, BOOST_MODE_GUID, boost.code() as u32)?;
        transcript.push(format!("{} power boost mode updated successfully", rail));
    }

    transcript.push(format!("Setting maximum processor state to: {}%", max_state));
    for &rail in selection.rails() {
        backend.write_value(&scheme_id, rail, MAX_PROCESSOR_STATE_GUID, max_state as u32)?;
        transcript.push(format!(
            "{} power maximum processor state updated successfully",
            rail
        ));
    }

    backend.activate(&scheme_id)?;
    transcript.push("All power settings applied successfully!".to_string());

    Ok(transcript.join("\n"))
}

/// Boundary form of [`apply_power_settings`]: always a string, failures
/// prefixed with `Error:`.
pub fn apply_power_settings_text<B: PowercfgBackend>(
    backend: &B,
    boost_mode: &str,
    max_processor_state: &str,
    rail: &str,
) -> String {
    match apply_power_settings(backend, boost_mode, max_processor_state, rail) {
        Ok(transcript) => transcript,
        Err(e) => format!("Error: {}", e),
    }
}

/// Formats the boost-mode table as one `code: label` line per mode.
pub fn list_boost_modes() -> String {
    BoostMode::iter()
        .map(|mode| format!("{}: {}", mode.code(), mode))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reads back the two managed settings for both rails of the active scheme.
pub fn current_settings<B: PowercfgBackend>(backend: &B) -> Result<CurrentSettings, PowerError> {
    if !backend.is_elevated() {
        return Err(PowerError::NotElevated);
    }

    let scheme_id = backend.active_scheme()?;
    let boost_output = backend.query(&scheme_id, BOOST_MODE_GUID)?;
    let max_state_output = backend.query(&scheme_id, MAX_PROCESSOR_STATE_GUID)?;

    Ok(CurrentSettings {
        ac_boost_mode: parse_setting_index(&boost_output, Rail::Ac),
        dc_boost_mode: parse_setting_index(&boost_output, Rail::Dc),
        ac_max_processor_state: parse_setting_index(&max_state_output, Rail::Ac),
        dc_max_processor_state: parse_setting_index(&max_state_output, Rail::Dc),
    })
}

/// Pulls the hex setting index for one rail out of `powercfg /query` output.
/// The relevant line reads `Current AC Power Setting Index: 0x00000002`.
fn parse_setting_index(output: &str, rail: Rail) -> Option<u32> {
    let needle = format!("Current {} Power Setting Index:", rail);
    output
        .lines()
        .find(|line| line.contains(&needle))
        .and_then(|line| line.split("0x").nth(1))
        .and_then(|hex| u32::from_str_radix(hex.trim(), 16).ok())
}
