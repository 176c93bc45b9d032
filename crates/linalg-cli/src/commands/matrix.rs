use std::str::FromStr;

use anyhow::{Context, Result};
use linalg_core::config::ToolConfig;
use linalg_core::math::Matrix;

use crate::util::format_scalar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixOp {
    Add,
    Subtract,
    Multiply,
    Transpose,
    Trace,
    Determinant,
    Rank,
}

impl MatrixOp {
    pub const NAMES: [&'static str; 7] = [
        "add",
        "subtract",
        "multiply",
        "transpose",
        "trace",
        "determinant",
        "rank",
    ];

    pub fn is_binary(&self) -> bool {
        matches!(self, MatrixOp::Add | MatrixOp::Subtract | MatrixOp::Multiply)
    }
}

impl FromStr for MatrixOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" => Ok(MatrixOp::Add),
            "subtract" | "sub" => Ok(MatrixOp::Subtract),
            "multiply" | "mul" => Ok(MatrixOp::Multiply),
            "transpose" => Ok(MatrixOp::Transpose),
            "trace" => Ok(MatrixOp::Trace),
            "determinant" | "det" => Ok(MatrixOp::Determinant),
            "rank" => Ok(MatrixOp::Rank),
            _ => Err(format!("Unknown matrix operation: {}", s)),
        }
    }
}

pub fn run_matrix(op: MatrixOp, a: &Matrix, b: Option<&Matrix>, config: &ToolConfig) -> Result<String> {
    let p = config.precision;
    let rhs = || b.with_context(|| format!("{:?} needs a second matrix", op));
    log::debug!("matrix {:?} on shape {:?}", op, a.shape());

    let out = match op {
        MatrixOp::Add => format!("{:.*}", p, a.add(rhs()?)?),
        MatrixOp::Subtract => format!("{:.*}", p, a.subtract(rhs()?)?),
        MatrixOp::Multiply => format!("{:.*}", p, a.multiply(rhs()?)?),
        MatrixOp::Transpose => format!("{:.*}", p, a.transpose()),
        MatrixOp::Trace => format_scalar(a.trace()?, p),
        MatrixOp::Determinant => format_scalar(a.determinant_with(config.determinant)?, p),
        MatrixOp::Rank => a.rank(config.tolerance).to_string(),
    };
    Ok(out)
}
