//! Resize a source image into the manifest icon sizes.

use crate::manifest::icon_filename;
use crate::output::save_png;
use anyhow::{Context, Result};
use image::{imageops::FilterType, DynamicImage};
use std::fs::create_dir_all;
use std::path::Path;

/// Resize `input` to each size in `sizes` and write `<out_dir>/icon<S>.png`.
///
/// Nothing is written until the source image has decoded successfully, so a
/// bad path or corrupt file leaves the filesystem untouched.
pub fn convert_icon(input: &Path, out_dir: &Path, sizes: &[u32]) -> Result<()> {
    let source = load_image(input)?;

    create_dir_all(out_dir).context("Can't create output directory")?;

    println!("Converting '{}' to manifest sizes...", input.display());
    for &size in sizes {
        let resized = source.resize_exact(size, size, FilterType::Lanczos3);
        let output_path = out_dir.join(icon_filename(size));
        save_png(&resized, &output_path)?;
        println!("  ✓ Generated {} ({size}x{size})", output_path.display());
    }

    Ok(())
}

fn load_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        anyhow::bail!("File '{}' not found", path.display());
    }

    // Non-square sources are accepted; resize_exact stretches to square.
    image::open(path).with_context(|| format!("Failed to open image '{}'", path.display()))
}
