//! PNG export of map snapshots with a fixed per-tag palette

use crate::io::error::{GenerationError, Result, file_system_error, invalid_parameter};
use crate::spatial::MapSnapshot;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Render a snapshot with every cell drawn as a `scale`-pixel square
pub fn render_snapshot(snapshot: &MapSnapshot, scale: u32) -> RgbaImage {
    let scale = scale.max(1);
    let width = snapshot.width() as u32 * scale;
    let height = snapshot.height() as u32 * scale;

    RgbaImage::from_fn(width, height, |px, py| {
        let block = snapshot.cell_at((px / scale) as usize, (py / scale) as usize);
        Rgba(block.map_or([0, 0, 0, 0], |block| block.color()))
    })
}

/// Export a snapshot as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The snapshot has no cells
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_map_as_png(snapshot: &MapSnapshot, output_path: &Path, scale: u32) -> Result<()> {
    if snapshot.width() == 0 || snapshot.height() == 0 {
        return Err(invalid_parameter(
            "snapshot",
            &format!("{}x{}", snapshot.width(), snapshot.height()),
            &"cannot export an empty map",
        ));
    }

    let img = render_snapshot(snapshot, scale);

    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(file_system_error(parent, "create directory"))?;
    }

    img.save(output_path)
        .map_err(|source| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}
