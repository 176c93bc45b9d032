use serde::{Deserialize, Serialize};

use crate::math::{DeterminantMethod, DEFAULT_TOLERANCE};

/// Numeric settings shared by the library entry points and the CLI.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ToolConfig {
    /// Pivot threshold for rank and dependence checks.
    pub tolerance: f64,
    /// Decimal places used when printing results.
    pub precision: usize,
    pub determinant: DeterminantMethod,
}

impl ToolConfig {
    pub fn new(tolerance: f64, precision: usize, determinant: DeterminantMethod) -> Self {
        Self {
            tolerance,
            precision,
            determinant,
        }
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            precision: 4,
            determinant: DeterminantMethod::Elimination,
        }
    }
}
