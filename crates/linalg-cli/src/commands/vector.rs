use std::str::FromStr;

use anyhow::{Context, Result};
use linalg_core::config::ToolConfig;
use linalg_core::math::Vector;

use crate::util::format_scalar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorOp {
    Add,
    Subtract,
    Dot,
    Cross,
    Magnitude,
    Scale,
}

impl VectorOp {
    pub const NAMES: [&'static str; 6] = ["add", "subtract", "dot", "cross", "magnitude", "scale"];

    /// Whether the operation takes a second vector.
    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            VectorOp::Add | VectorOp::Subtract | VectorOp::Dot | VectorOp::Cross
        )
    }
}

impl FromStr for VectorOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" => Ok(VectorOp::Add),
            "subtract" | "sub" => Ok(VectorOp::Subtract),
            "dot" => Ok(VectorOp::Dot),
            "cross" => Ok(VectorOp::Cross),
            "magnitude" | "norm" => Ok(VectorOp::Magnitude),
            "scale" => Ok(VectorOp::Scale),
            _ => Err(format!("Unknown vector operation: {}", s)),
        }
    }
}

pub fn run_vector(
    op: VectorOp,
    a: &Vector,
    b: Option<&Vector>,
    factor: Option<f64>,
    config: &ToolConfig,
) -> Result<String> {
    let p = config.precision;
    let rhs = || b.with_context(|| format!("{:?} needs a second vector", op));
    log::debug!("vector {:?} on length {}", op, a.len());

    let out = match op {
        VectorOp::Add => format!("{:.*}", p, a.add(rhs()?)?),
        VectorOp::Subtract => format!("{:.*}", p, a.subtract(rhs()?)?),
        VectorOp::Dot => format_scalar(a.dot(rhs()?)?, p),
        VectorOp::Cross => format!("{:.*}", p, a.cross(rhs()?)?),
        VectorOp::Magnitude => format_scalar(a.magnitude(), p),
        VectorOp::Scale => {
            let k = factor.context("scale needs --factor")?;
            format!("{:.*}", p, a.scale(k))
        }
    };
    Ok(out)
}
