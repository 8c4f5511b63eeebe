use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType, PngEncoder},
    ColorType, ImageBuffer, ImageEncoder, Rgba,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::Path,
};

/// Generate one `icon<size>.png` per entry in `sizes`, each a square
/// bitmap filled entirely with `color`. The output directory (and any
/// missing parents) is created first; existing files are overwritten.
pub fn generate(color: Rgba<u8>, sizes: &[u32], out_dir: &Path) -> Result<()> {
    create_dir_all(out_dir).context("Can't create output directory")?;

    for &size in sizes {
        let filename = format!("icon{size}.png");
        let bitmap = ImageBuffer::from_pixel(size, size, color);

        let mut out_file = BufWriter::new(
            File::create(out_dir.join(&filename))
                .with_context(|| format!("Failed to create {filename}"))?,
        );
        write_png(bitmap.as_raw(), &mut out_file, size)?;
        out_file.flush()?;

        println!("  ✓ Generated {filename}");
    }

    Ok(())
}

// Encode RGBA pixel data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, FilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}
