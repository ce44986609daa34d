//! PNG output for rasterized identicons.

use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use identicon::render::Canvas;

/// Write a canvas as an 8-bit RGB PNG at `path`.
///
/// The image is encoded into a temporary file in the target directory and
/// renamed into place, so a failed write never leaves a partial file.
pub fn write_canvas_png(canvas: &Canvas, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temporary file in {}", dir.display()))?;

    {
        let w = BufWriter::new(tmp.as_file());
        let mut encoder = png::Encoder::new(w, canvas.size, canvas.size);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder
            .write_header()
            .with_context(|| format!("writing PNG header for {}", path.display()))?;
        writer
            .write_image_data(&canvas.pixels)
            .with_context(|| format!("writing PNG data for {}", path.display()))?;
        writer
            .finish()
            .with_context(|| format!("finishing PNG stream for {}", path.display()))?;
    }

    tmp.persist(path)
        .with_context(|| format!("persisting {}", path.display()))?;
    Ok(())
}
