//! The fact value handed back to the collection runtime.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Name the fact is published under.
pub const FACT_NAME: &str = "ssm_agent";

/// Whether the SSM agent CLI is present, and what it reported.
///
/// `diagnostics` is only ever non-empty when `installed` is true.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsResult {
    pub installed: bool,
    #[serde(default)]
    pub diagnostics: Vec<Value>,
}

impl DiagnosticsResult {
    /// Agent CLI not found, or not looked for.
    pub fn not_installed() -> Self {
        Self::default()
    }

    /// Agent CLI found but it could not report.
    pub fn installed_without_diagnostics() -> Self {
        Self {
            installed: true,
            diagnostics: Vec::new(),
        }
    }

    /// Agent CLI found and reported `diagnostics`.
    pub fn with_diagnostics(diagnostics: Vec<Value>) -> Self {
        Self {
            installed: true,
            diagnostics,
        }
    }

    /// Wrap the result under its fact name.
    pub fn to_fact_json(&self) -> serde_json::Result<Value> {
        let mut doc = serde_json::Map::new();
        doc.insert(FACT_NAME.to_string(), serde_json::to_value(self)?);
        Ok(Value::Object(doc))
    }

    /// Count entries by their `Status` field.
    pub fn summary(&self) -> StatusSummary {
        let mut summary = StatusSummary::default();
        for entry in &self.diagnostics {
            match entry.get("Status").and_then(Value::as_str) {
                Some("Success") => summary.success += 1,
                Some("Failed") => summary.failed += 1,
                Some("Skipped") => summary.skipped += 1,
                _ => summary.other += 1,
            }
        }
        summary
    }
}

/// Per-status entry counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub success: usize,
    pub failed: usize,
    pub skipped: usize,
    pub other: usize,
}

impl StatusSummary {
    pub fn total(&self) -> usize {
        self.success + self.failed + self.skipped + self.other
    }
}

impl fmt::Display for StatusSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} checks: {} succeeded, {} failed, {} skipped",
            self.total(),
            self.success,
            self.failed,
            self.skipped
        )?;
        if self.other > 0 {
            write!(f, ", {} unrecognized", self.other)?;
        }
        Ok(())
    }
}
