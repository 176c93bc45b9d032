//! Integration tests for ToolConfig defaults and serialization.

use linalg_core::config::ToolConfig;
use linalg_core::math::{DeterminantMethod, DEFAULT_TOLERANCE};

#[test]
fn tool_config_default_values() {
    let cfg = ToolConfig::default();
    assert_eq!(cfg.tolerance, DEFAULT_TOLERANCE);
    assert_eq!(cfg.precision, 4);
    assert_eq!(cfg.determinant, DeterminantMethod::Elimination);
}

#[test]
fn tool_config_round_trips_json() {
    let cfg = ToolConfig::new(1e-8, 2, DeterminantMethod::Cofactor);
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("\"cofactor\""));
    let back: ToolConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn tool_config_fills_missing_fields_with_defaults() {
    let cfg: ToolConfig = serde_json::from_str(r#"{"precision": 6}"#).unwrap();
    assert_eq!(cfg.precision, 6);
    assert_eq!(cfg.tolerance, DEFAULT_TOLERANCE);
    assert_eq!(cfg.determinant, DeterminantMethod::Elimination);
}

#[test]
fn tool_config_rejects_unknown_method() {
    let result: Result<ToolConfig, _> = serde_json::from_str(r#"{"determinant": "qr"}"#);
    assert!(result.is_err());
}
