mod icon;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::process::ExitCode;

/// Chrome extension manifest icon sizes, ascending.
const SIZES: [u32; 4] = [16, 32, 48, 128];
const OUTPUT_DIR: &str = "icons";

fn main() -> ExitCode {
    env_logger::init();

    if !png_encoding_available() {
        eprintln!("❌ PNG encoding is not available in this build.");
        eprintln!();
        eprintln!("Rebuild with the image crate's png feature enabled:");
        eprintln!("  image = {{ version = \"0.25\", features = [\"png\"] }}");
        return ExitCode::FAILURE;
    }

    println!("Generating ScrollShot icons...");
    println!("{}", "-".repeat(50));

    if let Err(err) = generate_into(Path::new(OUTPUT_DIR)) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }

    println!("{}", "-".repeat(50));
    println!("✅ All icons generated!");
    println!();
    println!("Icons saved to the {OUTPUT_DIR}/ folder");
    println!();
    println!("Next steps:");
    println!("1. Go to chrome://extensions/");
    println!("2. Enable \"Developer mode\"");
    println!("3. Click \"Load unpacked\"");
    println!("4. Select this project folder");
    ExitCode::SUCCESS
}

/// Probes PNG support once, before any file is touched, so that a build
/// missing the encoder fails with a remediation hint instead of a mid-loop
/// I/O error.
fn png_encoding_available() -> bool {
    let probe = RgbaImage::new(1, 1);
    probe.write_to(&mut Cursor::new(Vec::new()), ImageFormat::Png).is_ok()
}

/// Renders every icon size into `out_dir`, overwriting existing files, and
/// prints a progress line per file with its on-disk byte count.
fn generate_into(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    for size in SIZES {
        let image = icon::render(size);
        let path = out_dir.join(format!("icon{size}.png"));
        image
            .save(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        let bytes = fs::metadata(&path)
            .with_context(|| format!("inspecting {}", path.display()))?
            .len();
        println!("✓ wrote {} ({bytes} bytes)", path.display());
    }
    Ok(())
}
