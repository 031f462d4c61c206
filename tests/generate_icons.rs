use std::process::Command;
use tempfile::TempDir;

const GENERATE_BIN: &str = env!("CARGO_BIN_EXE_generate-icons");

#[test]
fn generates_all_manifest_sizes_into_default_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = Command::new(GENERATE_BIN)
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to run generate-icons");
    assert!(
        output.status.success(),
        "generate-icons failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    for size in [16u32, 48, 128] {
        let icon_path = temp_dir.path().join("icons").join(format!("icon{size}.png"));
        assert!(icon_path.exists(), "missing {}", icon_path.display());

        let icon = image::open(&icon_path).expect("Failed to decode generated icon");
        assert_eq!((icon.width(), icon.height()), (size, size));
    }
}

#[test]
fn generated_icons_have_transparent_corners() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("out");

    let output = Command::new(GENERATE_BIN)
        .arg("-o")
        .arg(&output_dir)
        .output()
        .expect("Failed to run generate-icons");
    assert!(output.status.success());

    for size in [16u32, 48, 128] {
        let icon = image::open(output_dir.join(format!("icon{size}.png")))
            .expect("decode")
            .to_rgba8();

        let max = size - 1;
        for (x, y) in [(0, 0), (max, 0), (0, max), (max, max)] {
            assert_eq!(
                icon.get_pixel(x, y)[3],
                0,
                "corner ({x}, {y}) of icon{size}.png is not transparent"
            );
        }
    }
}

#[test]
fn generated_icon_shows_circle_and_slash() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("out");

    let output = Command::new(GENERATE_BIN)
        .arg("-o")
        .arg(&output_dir)
        .output()
        .expect("Failed to run generate-icons");
    assert!(output.status.success());

    let icon = image::open(output_dir.join("icon128.png"))
        .expect("decode")
        .to_rgba8();

    // Circle body above the slash is opaque red; the diagonal center is white.
    assert_eq!(icon.get_pixel(64, 20).0, [255, 0, 0, 255]);
    assert_eq!(icon.get_pixel(64, 64).0, [255, 255, 255, 255]);
}

#[test]
fn reruns_overwrite_idempotently() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("out");

    for _ in 0..2 {
        let output = Command::new(GENERATE_BIN)
            .arg("-o")
            .arg(&output_dir)
            .output()
            .expect("Failed to run generate-icons");
        assert!(output.status.success());
    }
    let first = std::fs::read(output_dir.join("icon16.png")).expect("read");

    let output = Command::new(GENERATE_BIN)
        .arg("-o")
        .arg(&output_dir)
        .output()
        .expect("Failed to run generate-icons");
    assert!(output.status.success());

    let second = std::fs::read(output_dir.join("icon16.png")).expect("read");
    assert_eq!(first, second, "rerun output should be byte-identical");
}
