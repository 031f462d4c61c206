//! Icon sizes and file naming mandated by the extension manifest.

/// Pixel dimensions the manifest declares for the extension icon.
pub const MANIFEST_SIZES: [u32; 3] = [16, 48, 128];

/// Directory the manifest points its `icons` entries at.
pub const DEFAULT_OUTPUT_DIR: &str = "icons";

/// Output filename for a given icon size, e.g. `icon48.png`.
pub fn icon_filename(size: u32) -> String {
    format!("icon{size}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_match_manifest_entries() {
        assert_eq!(icon_filename(16), "icon16.png");
        assert_eq!(icon_filename(48), "icon48.png");
        assert_eq!(icon_filename(128), "icon128.png");
    }
}
