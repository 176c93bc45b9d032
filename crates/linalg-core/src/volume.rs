//! 3D arrays indexed `(z, y, x)` and their 2D slices.
//!
//! A volume is written as text: each layer is a block of whitespace-separated
//! rows, and layers are separated by `---`.
//!
//! ```text
//! 1 2
//! 3 4
//! ---
//! 5 6
//! 7 8
//! ```

use std::fmt;
use std::str::FromStr;

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{LinalgError, Result};
use crate::math::{validate, Matrix};

pub const LAYER_SEPARATOR: &str = "---";

/// Axis a volume is sliced along.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Z,
    Y,
    X,
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "z" => Ok(Axis::Z),
            "y" => Ok(Axis::Y),
            "x" => Ok(Axis::X),
            _ => Err(format!("Unknown axis: {}. Expected one of: Z, Y, X", s)),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Z => write!(f, "Z"),
            Axis::Y => write!(f, "Y"),
            Axis::X => write!(f, "X"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Volume<T = i64> {
    data: Vec<T>,
    depth: usize,
    rows: usize,
    cols: usize,
}

impl<T> Volume<T> {
    pub fn from_shape_vec(shape: (usize, usize, usize), data: Vec<T>) -> Result<Self> {
        let (depth, rows, cols) = shape;
        let expected = validate::element_count(&[depth, rows, cols])?;
        if data.len() != expected {
            return Err(LinalgError::dimension(
                "volume",
                format!("{} elements for shape {}x{}x{}", expected, depth, rows, cols),
                format!("{} elements", data.len()),
            ));
        }
        Ok(Self {
            data,
            depth,
            rows,
            cols,
        })
    }

    /// `(depth, rows, cols)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.depth, self.rows, self.cols)
    }

    /// Number of slices along `axis`.
    pub fn frames(&self, axis: Axis) -> usize {
        match axis {
            Axis::Z => self.depth,
            Axis::Y => self.rows,
            Axis::X => self.cols,
        }
    }

    pub fn get(&self, z: usize, y: usize, x: usize) -> &T {
        &self.data[(z * self.rows + y) * self.cols + x]
    }

    /// 2D cut at `index` along `axis`.
    ///
    /// Z gives a `rows x cols` matrix, Y gives `depth x cols`, X gives
    /// `depth x rows`.
    pub fn slice(&self, axis: Axis, index: usize) -> Result<Matrix<T>>
    where
        T: Clone,
    {
        let frames = self.frames(axis);
        if index >= frames {
            return Err(LinalgError::value(format!(
                "{}-axis index {} out of range for {} slices",
                axis, index, frames
            )));
        }
        let (shape, data): ((usize, usize), Vec<T>) = match axis {
            Axis::Z => (
                (self.rows, self.cols),
                (0..self.rows)
                    .flat_map(|y| (0..self.cols).map(move |x| (y, x)))
                    .map(|(y, x)| self.get(index, y, x).clone())
                    .collect(),
            ),
            Axis::Y => (
                (self.depth, self.cols),
                (0..self.depth)
                    .flat_map(|z| (0..self.cols).map(move |x| (z, x)))
                    .map(|(z, x)| self.get(z, index, x).clone())
                    .collect(),
            ),
            Axis::X => (
                (self.depth, self.rows),
                (0..self.depth)
                    .flat_map(|z| (0..self.rows).map(move |y| (z, y)))
                    .map(|(z, y)| self.get(z, y, index).clone())
                    .collect(),
            ),
        };
        Matrix::from_shape_vec(shape, data)
    }

    /// Slice scaled by its maximum so the largest entry becomes 1.
    ///
    /// A slice whose maximum is zero is returned unscaled.
    pub fn normalized_slice(&self, axis: Axis, index: usize) -> Result<Matrix<f64>>
    where
        T: Clone + ToPrimitive,
    {
        let slice = self.slice(axis, index)?;
        let values = slice.mapv(|v| v.to_f64().unwrap_or(f64::NAN));
        let max = values.as_slice().iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if max == 0.0 || !max.is_finite() {
            return Ok(values);
        }
        Ok(values.mapv(|v| v / max))
    }
}

impl<T: FromStr> Volume<T> {
    /// Parse a `depth x rows x cols` volume from text.
    ///
    /// # Errors
    ///
    /// `LinalgError::Value` when the number of layers, rows in a layer, or
    /// values in a row disagrees with the declared shape, or when a value
    /// cannot be parsed.
    pub fn parse(text: &str, depth: usize, rows: usize, cols: usize) -> Result<Self> {
        let layers: Vec<&str> = text.trim().split(LAYER_SEPARATOR).collect();
        if layers.len() != depth {
            return Err(LinalgError::value(format!(
                "Number of layers ({}) does not match depth ({}).",
                layers.len(),
                depth
            )));
        }

        validate::element_count(&[depth, rows, cols])?;
        let mut data = Vec::new();
        for (z, layer) in layers.iter().enumerate() {
            let lines: Vec<&str> = layer.trim().lines().collect();
            if lines.len() != rows {
                return Err(LinalgError::value(format!(
                    "Layer {} has {} rows, expected {}.",
                    z,
                    lines.len(),
                    rows
                )));
            }
            for (y, line) in lines.iter().enumerate() {
                let tokens: Vec<&str> = line.split_whitespace().collect();
                if tokens.len() != cols {
                    return Err(LinalgError::value(format!(
                        "Row {} in layer {} has {} values, expected {}.",
                        y,
                        z,
                        tokens.len(),
                        cols
                    )));
                }
                for token in tokens {
                    let value = token.parse::<T>().map_err(|_| {
                        LinalgError::value(format!(
                            "Row {} in layer {} has a non-numeric value: {}",
                            y, z, token
                        ))
                    })?;
                    data.push(value);
                }
            }
        }
        log::debug!("parsed volume of shape {}x{}x{}", depth, rows, cols);
        Self::from_shape_vec((depth, rows, cols), data)
    }
}
