//! Loading vectors, matrices, volumes and configuration from user input.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use linalg_core::config::ToolConfig;
use linalg_core::math::{Matrix, Vector};
use linalg_core::volume::Volume;

use crate::util::{delimiter_for, validate_tsv_or_csv_file};

/// Parse a comma-separated list of numbers such as `3,2,-6`.
///
/// An empty string gives an empty vector.
pub fn parse_vector(text: &str) -> Result<Vector> {
    let trimmed = text.trim().trim_start_matches('[').trim_end_matches(']');
    if trimmed.trim().is_empty() {
        return Ok(Vector::from_vec(vec![]));
    }
    trimmed
        .split(',')
        .map(|tok| {
            tok.trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid number '{}' in vector: {}", tok.trim(), text))
        })
        .collect::<Result<Vec<f64>>>()
        .map(Vector::from_vec)
}

/// Read a headerless CSV or TSV file where each record is one matrix row.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    validate_tsv_or_csv_file(&path)?;
    let file = File::open(&path)
        .with_context(|| format!("Failed to open file: {:?}", path.as_ref()))?;
    let reader = BufReader::new(file);

    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter_for(&path))
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result
            .with_context(|| format!("Failed to read row {} of {:?}", idx, path.as_ref()))?;
        let row = record
            .iter()
            .map(|field| {
                field.parse::<f64>().with_context(|| {
                    format!("Invalid number '{}' in row {} of {:?}", field, idx, path.as_ref())
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    log::debug!("Loaded {} rows from {:?}", rows.len(), path.as_ref());
    Ok(Matrix::from_rows(rows)?)
}

/// Read a file of vectors, one per row.
pub fn load_vectors<P: AsRef<Path>>(path: P) -> Result<Vec<Vector>> {
    let matrix = load_matrix(path)?;
    Ok((0..matrix.nrows()).map(|r| matrix.row(r)).collect())
}

/// Read a layered integer volume (layers separated by `---`).
pub fn load_volume<P: AsRef<Path>>(path: P, depth: usize, rows: usize, cols: usize) -> Result<Volume<i64>> {
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read volume: {}", path.as_ref().display()))?;
    Ok(Volume::parse(&text, depth, rows, cols)?)
}

/// Load a tool configuration from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ToolConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: ToolConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
