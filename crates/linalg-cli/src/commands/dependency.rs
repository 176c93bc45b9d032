use anyhow::Result;
use linalg_core::config::ToolConfig;
use linalg_core::dependency::check_linear_dependence;
use linalg_core::math::Vector;

/// Run the dependence check and render the summary block.
pub fn run_dependency(vectors: &[Vector], config: &ToolConfig) -> Result<String> {
    let report = check_linear_dependence(vectors, config.tolerance)?;
    log::info!(
        "Checked {} vectors of dimension {} in {:?}",
        report.vector_count,
        report.dimension,
        report.elapsed
    );
    Ok(format!("=== Linear Dependence Summary ===\n{}", report))
}
