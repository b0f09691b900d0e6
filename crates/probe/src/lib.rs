//! SSM agent fact - detects the AWS Systems Manager agent CLI on a host
//! and collects its self-reported diagnostics.

pub mod commands;
pub mod executor;
pub mod fact;
pub mod output;
pub mod parsers;
pub mod paths;
pub mod probe;

pub use fact::{DiagnosticsResult, StatusSummary, FACT_NAME};
pub use output::OutputFormat;
pub use probe::{AgentDiagnosticsProbe, ProbeConfig};
