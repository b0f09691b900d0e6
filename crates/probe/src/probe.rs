//! The SSM agent diagnostics probe.

use crate::commands::{self, AgentLocator};
use crate::executor::{Executor, LocalExecutor};
use crate::fact::DiagnosticsResult;
use crate::parsers;
use crate::paths::{LocalFs, PathProbe};
use ssmfact_common::{OsFamily, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Probe configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub os_family: OsFamily,
}

impl ProbeConfig {
    pub fn new(os_family: OsFamily) -> Self {
        Self { os_family }
    }

    /// Configuration for the running host.
    pub fn detect() -> Self {
        Self::new(OsFamily::detect())
    }
}

/// Detects the agent CLI and collects its diagnostics.
///
/// Holds no state between runs; each call to [`run`](Self::run) looks at
/// the host afresh.
pub struct AgentDiagnosticsProbe {
    config: ProbeConfig,
    paths: Box<dyn PathProbe>,
    executor: Box<dyn Executor>,
}

impl AgentDiagnosticsProbe {
    /// Create a probe that inspects the local host.
    pub fn new(config: ProbeConfig) -> Self {
        Self::with_collaborators(config, Box::new(LocalFs), Box::new(LocalExecutor::new()))
    }

    /// Create a probe with explicit filesystem and process collaborators.
    pub fn with_collaborators(
        config: ProbeConfig,
        paths: Box<dyn PathProbe>,
        executor: Box<dyn Executor>,
    ) -> Self {
        Self {
            config,
            paths,
            executor,
        }
    }

    /// Run the probe.
    ///
    /// Only output that breaks the `get-diagnostics` contract is an error.
    /// A missing agent, an unknown family, or a failed invocation all
    /// produce a result.
    pub fn run(&self) -> Result<DiagnosticsResult> {
        let family = &self.config.os_family;

        let Some(locator) = commands::locator_for(family) else {
            debug!("No SSM agent locations known for OS family {}", family);
            return Ok(DiagnosticsResult::not_installed());
        };

        let Some(path) = self.locate(locator.as_ref()) else {
            debug!("SSM agent CLI not found for OS family {}", family);
            return Ok(DiagnosticsResult::not_installed());
        };
        info!("Found SSM agent CLI at {}", path);

        debug!("Running {}", locator.diagnostics_cmd(path));
        let output = match self.executor.execute(path, locator.diagnostics_args()) {
            Ok(output) if output.success() => output,
            Ok(output) => {
                warn!(
                    "SSM agent diagnostics exited with {:?}: {}",
                    output.exit_code,
                    output.stderr.trim()
                );
                return Ok(DiagnosticsResult::installed_without_diagnostics());
            }
            Err(e) => {
                warn!("SSM agent diagnostics could not run: {:#}", e);
                return Ok(DiagnosticsResult::installed_without_diagnostics());
            }
        };

        let diagnostics = parsers::parse_diagnostics(&output.stdout)?;
        debug!("Collected {} diagnostic entries", diagnostics.len());

        Ok(DiagnosticsResult::with_diagnostics(diagnostics))
    }

    /// First candidate path present on the host.
    fn locate(&self, locator: &dyn AgentLocator) -> Option<&'static str> {
        locator.candidate_paths().iter().copied().find(|candidate| {
            let present = self.paths.exists(Path::new(candidate));
            debug!("Checked {}: present={}", candidate, present);
            present
        })
    }
}
