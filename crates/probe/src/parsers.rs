//! Parser for `ssm-cli get-diagnostics` output.

use serde_json::Value;
use ssmfact_common::{Error, Result};

/// Field of the diagnostics document that carries the check entries.
pub const DIAGNOSTICS_FIELD: &str = "DiagnosticsOutput";

/// Extract the diagnostic entries from the CLI's stdout.
///
/// Entries are passed through untouched. A `null` field is read as no
/// entries; anything else that is not an array breaks the contract.
pub fn parse_diagnostics(output: &str) -> Result<Vec<Value>> {
    let json: Value = serde_json::from_str(output)
        .map_err(|e| Error::malformed(format!("not valid JSON: {}", e)))?;

    let Value::Object(mut document) = json else {
        return Err(Error::malformed("expected a JSON object"));
    };

    match document.remove(DIAGNOSTICS_FIELD) {
        Some(Value::Array(entries)) => Ok(entries),
        // Go marshals a nil slice as null; ssm-cli is written in Go.
        Some(Value::Null) => Ok(Vec::new()),
        Some(other) => Err(Error::malformed(format!(
            "{} is not an array: {}",
            DIAGNOSTICS_FIELD, other
        ))),
        None => Err(Error::malformed(format!("missing {}", DIAGNOSTICS_FIELD))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_cli_output() {
        let output = r#"{
  "DiagnosticsOutput": [
    {"Check": "EC2 IMDS", "Status": "Success", "Note": "IMDS is accessible"},
    {"Check": "Hybrid instance registration", "Status": "Skipped", "Note": "Instance does not have hybrid registration"},
    {"Check": "Connectivity to ssm endpoint", "Status": "Failed", "Note": "ssm.us-east-1.amazonaws.com is not reachable"}
  ]
}"#;
        let entries = parse_diagnostics(output).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["Check"], "EC2 IMDS");
        assert_eq!(entries[2]["Status"], "Failed");
    }

    #[test]
    fn test_entries_are_opaque() {
        let output = r#"{"DiagnosticsOutput": [{"Status":"Success"}, 42, "free text"], "Extra": true}"#;
        let entries = parse_diagnostics(output).unwrap();
        assert_eq!(entries, vec![json!({"Status": "Success"}), json!(42), json!("free text")]);
    }

    #[test]
    fn test_null_field_is_empty() {
        assert!(parse_diagnostics(r#"{"DiagnosticsOutput": null}"#)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_not_json() {
        let err = parse_diagnostics("not json").unwrap_err();
        assert!(err.is_malformed_output());
        assert!(parse_diagnostics("").unwrap_err().is_malformed_output());
    }

    #[test]
    fn test_missing_field() {
        let err = parse_diagnostics(r#"{"Other": []}"#).unwrap_err();
        assert!(err.to_string().contains("missing DiagnosticsOutput"));
    }

    #[test]
    fn test_wrong_shape() {
        assert!(parse_diagnostics("[1, 2]").unwrap_err().is_malformed_output());
        assert!(parse_diagnostics(r#"{"DiagnosticsOutput": "ok"}"#)
            .unwrap_err()
            .is_malformed_output());
    }
}
