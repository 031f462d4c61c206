//! Produce placeholder icons at every manifest size.

use crate::draw::placeholder_icon;
use crate::manifest::{icon_filename, MANIFEST_SIZES};
use crate::output::save_png;
use anyhow::{Context, Result};
use std::fs::create_dir_all;
use std::path::Path;

/// Draw and write a placeholder icon for each manifest size.
pub fn generate_icons(out_dir: &Path) -> Result<()> {
    create_dir_all(out_dir).context("Can't create output directory")?;

    println!("Generating placeholder icons...");
    for size in MANIFEST_SIZES {
        let icon = placeholder_icon(size);
        let output_path = out_dir.join(icon_filename(size));
        save_png(&icon, &output_path)?;
        println!("  ✓ Generated {} ({size}x{size})", output_path.display());
    }

    Ok(())
}
