use anyhow::Result;
use linalg_core::math::validate;
use linalg_core::volume::{Axis, Volume};

/// Render one slice, or every slice along `axis` when `index` is `None`.
pub fn run_slice(volume: &Volume<i64>, axis: Axis, index: Option<i64>) -> Result<String> {
    let indices: Vec<usize> = match index {
        Some(i) => vec![validate::dimension(i, "index")?],
        None => (0..volume.frames(axis)).collect(),
    };

    let mut out = Vec::with_capacity(indices.len());
    for frame in indices {
        let slice = volume.slice(axis, frame)?;
        out.push(format!("{}-Axis Slice @ Index {}\n{}", axis, frame, slice));
    }
    log::debug!("rendered {} {}-axis slices", out.len(), axis);
    Ok(out.join("\n\n"))
}
