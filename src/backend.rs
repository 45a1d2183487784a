// src/backend.rs

use std::process::Command;

use tracing::{debug, error};

use crate::{constants::PROCESSOR_SUBGROUP, errors::PowerError, models::Rail};

/// Seam between the settings pipeline and the platform's power configuration
/// surface. The real implementation shells out to `powercfg`; tests inject a
/// fake so no invocation touches the machine's actual power scheme.
pub trait PowercfgBackend {
    /// Whether the current process holds administrator rights. Any failure
    /// to determine this must report `false`.
    fn is_elevated(&self) -> bool;

    /// GUID of the currently active power scheme, read fresh on every call.
    fn active_scheme(&self) -> Result<String, PowerError>;

    /// Writes a setting index under the processor subgroup on one rail of
    /// the given scheme.
    fn write_value(
        &self,
        scheme_id: &str,
        rail: Rail,
        setting_guid: &str,
        value: u32,
    ) -> Result<(), PowerError>;

    /// Raw `powercfg /query` output for one setting of the given scheme.
    fn query(&self, scheme_id: &str, setting_guid: &str) -> Result<String, PowerError>;

    /// Re-applies the scheme so previously written values take effect.
    fn activate(&self, scheme_id: &str) -> Result<(), PowerError>;
}

/// The real backend: one `powercfg` subprocess per call, blocking until it
/// exits. A non-zero exit surfaces the command's own error text.
pub struct Powercfg;

impl Powercfg {
    fn run(&self, args: &[&str]) -> Result<String, PowerError> {
        debug!("powercfg {}", args.join(" "));
        let output = Command::new("powercfg")
            .args(args)
            .output()
            .map_err(|e| PowerError::CommandFailed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("powercfg {} failed: {}", args.join(" "), stderr.trim());
            return Err(PowerError::CommandFailed(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl PowercfgBackend for Powercfg {
    fn is_elevated(&self) -> bool {
        crate::utils::windows::is_elevated()
    }

    fn active_scheme(&self) -> Result<String, PowerError> {
        let stdout = self.run(&["/getactivescheme"])?;
        parse_active_scheme(&stdout)
    }

    fn write_value(
        &self,
        scheme_id: &str,
        rail: Rail,
        setting_guid: &str,
        value: u32,
    ) -> Result<(), PowerError> {
        let value = value.to_string();
        self.run(&[
            rail.set_value_flag(),
            scheme_id,
            PROCESSOR_SUBGROUP,
            setting_guid,
            &value,
        ])?;
        Ok(())
    }

    fn query(&self, scheme_id: &str, setting_guid: &str) -> Result<String, PowerError> {
        self.run(&["/query", scheme_id, PROCESSOR_SUBGROUP, setting_guid])
    }

    fn activate(&self, scheme_id: &str) -> Result<(), PowerError> {
        self.run(&["/setactive", scheme_id])?;
        Ok(())
    }
}

/// Extracts the scheme GUID from `powercfg /getactivescheme` output.
///
/// The output has a fixed layout, e.g.
/// `Power Scheme GUID: 381b4222-f694-41f0-9685-ff5bb260df2e  (Balanced)`,
/// and the GUID is the 4th whitespace-delimited token. That positional
/// dependency is a compatibility contract with the tool; if the shape ever
/// changes this fails loudly rather than handing back a bogus token.
fn parse_active_scheme(stdout: &str) -> Result<String, PowerError> {
    stdout
        .split_whitespace()
        .nth(3)
        .map(str::to_string)
        .ok_or_else(|| {
            PowerError::Unexpected(format!(
                "unrecognized /getactivescheme output: {:?}",
                stdout.trim()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scheme_guid_from_fixed_layout() {
        let out = "Power Scheme GUID: 381b4222-f694-41f0-9685-ff5bb260df2e  (Balanced)\n";
        assert_eq!(
            parse_active_scheme(out).unwrap(),
            "381b4222-f694-41f0-9685-ff5bb260df2e"
        );
    }

    #[test]
    fn short_output_fails_explicitly() {
        let err = parse_active_scheme("Power Scheme\n").unwrap_err();
        assert!(matches!(err, PowerError::Unexpected(_)));
        assert!(err.to_string().contains("/getactivescheme"));
    }
}
