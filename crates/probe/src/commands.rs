//! Allowlisted agent locations and commands.
//!
//! Every path the probe checks and every command it may run is defined
//! here. The paths are fixed per OS family and cannot be overridden.

use ssmfact_common::OsFamily;

/// Sub-command asking the agent CLI to report its own health.
pub const DIAGNOSTICS_SUBCOMMAND: &str = "get-diagnostics";

pub const WINDOWS_SSM_CLI: &str = r"C:\Program Files\Amazon\SSM\ssm-cli.exe";
pub const SNAP_SSM_CLI: &str = "/snap/bin/ssm-cli";
pub const USR_SSM_CLI: &str = "/usr/bin/ssm-cli";

/// Where to look for the agent CLI on one OS family, and how to call it.
pub trait AgentLocator: Send + Sync {
    /// Candidate executable paths, most preferred first.
    fn candidate_paths(&self) -> &'static [&'static str];

    /// Arguments that ask the CLI for diagnostics.
    fn diagnostics_args(&self) -> &'static [&'static str] {
        &[DIAGNOSTICS_SUBCOMMAND]
    }

    /// Command line for logs, as a user would type it.
    fn diagnostics_cmd(&self, path: &str) -> String {
        format!("{} {}", path, self.diagnostics_args().join(" "))
    }
}

/// Windows installs under Program Files.
pub struct WindowsLocator;

impl AgentLocator for WindowsLocator {
    fn candidate_paths(&self) -> &'static [&'static str] {
        &[WINDOWS_SSM_CLI]
    }

    fn diagnostics_cmd(&self, path: &str) -> String {
        // Quoted for display, the path contains a space.
        format!("\"{}\" {}", path, self.diagnostics_args().join(" "))
    }
}

/// Debian family: the snap package is preferred over the deb.
pub struct DebianLocator;

impl AgentLocator for DebianLocator {
    fn candidate_paths(&self) -> &'static [&'static str] {
        &[SNAP_SSM_CLI, USR_SSM_CLI]
    }
}

/// RedHat family ships the rpm only.
pub struct RedHatLocator;

impl AgentLocator for RedHatLocator {
    fn candidate_paths(&self) -> &'static [&'static str] {
        &[USR_SSM_CLI]
    }
}

/// Get the locator for a family, or `None` when the agent is not looked for.
pub fn locator_for(family: &OsFamily) -> Option<Box<dyn AgentLocator>> {
    match family {
        OsFamily::Windows => Some(Box::new(WindowsLocator)),
        OsFamily::Debian => Some(Box::new(DebianLocator)),
        OsFamily::RedHat => Some(Box::new(RedHatLocator)),
        OsFamily::Other(_) => None,
    }
}
