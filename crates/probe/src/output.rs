//! Rendering of the fact for the `ssm-agent-fact` binary.

use crate::fact::DiagnosticsResult;
use serde_json::Value;
use std::fmt::Write;
use std::str::FromStr;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `{"ssm_agent": <result>}`, as external fact runtimes expect.
    Json,
    /// Short human-readable summary.
    Text,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            _ => Err(anyhow::anyhow!("Invalid output format: {}", s)),
        }
    }
}

/// Render a result in the given format.
pub fn render(result: &DiagnosticsResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result.to_fact_json()?)?),
        OutputFormat::Text => Ok(render_text(result)),
    }
}

fn render_text(result: &DiagnosticsResult) -> String {
    if !result.installed {
        return "SSM agent: not installed\n".to_string();
    }

    let mut out = String::from("SSM agent: installed\n");
    if result.diagnostics.is_empty() {
        out.push_str("  no diagnostics available\n");
        return out;
    }

    let _ = writeln!(out, "  {}", result.summary());
    for entry in &result.diagnostics {
        let check = field(entry, "Check").unwrap_or("?");
        let status = field(entry, "Status").unwrap_or("?");
        let _ = match field(entry, "Note") {
            Some(note) if !note.is_empty() => {
                writeln!(out, "  - {}: {} ({})", check, status, note)
            }
            _ => writeln!(out, "  - {}: {}", check, status),
        };
    }
    out
}

fn field<'a>(entry: &'a Value, key: &str) -> Option<&'a str> {
    entry.get(key).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_output_format() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);

        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid output format: yaml");
    }

    #[test]
    fn test_json_is_wrapped_in_fact_name() {
        let result = DiagnosticsResult::with_diagnostics(vec![json!({"Status": "Success"})]);
        let rendered = render(&result, OutputFormat::Json).unwrap();

        let doc: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            doc,
            json!({"ssm_agent": {"installed": true, "diagnostics": [{"Status": "Success"}]}})
        );
    }

    #[test]
    fn test_text_not_installed() {
        let rendered = render(&DiagnosticsResult::not_installed(), OutputFormat::Text).unwrap();
        assert_eq!(rendered, "SSM agent: not installed\n");
    }

    #[test]
    fn test_text_installed_without_diagnostics() {
        let rendered = render(
            &DiagnosticsResult::installed_without_diagnostics(),
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(rendered, "SSM agent: installed\n  no diagnostics available\n");
    }

    #[test]
    fn test_text_lists_entries() {
        let result = DiagnosticsResult::with_diagnostics(vec![
            json!({"Check": "EC2 IMDS", "Status": "Success", "Note": "IMDS is accessible"}),
            json!({"Check": "Proxy configuration", "Status": "Skipped", "Note": ""}),
            json!({"Status": "Failed"}),
        ]);
        let rendered = render(&result, OutputFormat::Text).unwrap();

        assert_eq!(
            rendered,
            "SSM agent: installed\n\
             \x20 3 checks: 1 succeeded, 1 failed, 1 skipped\n\
             \x20 - EC2 IMDS: Success (IMDS is accessible)\n\
             \x20 - Proxy configuration: Skipped\n\
             \x20 - ?: Failed\n"
        );
    }
}
