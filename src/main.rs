use anyhow::Result;
use image::Rgba;
use placeholder_icons::icon_gen;
use std::path::Path;

/// Google blue. Swap for e.g. (255, 100, 100) for red placeholders.
const ICON_COLOR: (u8, u8, u8) = (66, 133, 244);

/// Every size the extension manifest requires, in pixels.
const SIZES: [u32; 5] = [16, 24, 32, 48, 128];

const OUTPUT_FOLDER: &str = "images";

fn main() -> Result<()> {
    let (r, g, b) = ICON_COLOR;
    icon_gen::generate(Rgba([r, g, b, 255]), &SIZES, Path::new(OUTPUT_FOLDER))?;

    println!(
        "✅ {} placeholder icons generated in '{OUTPUT_FOLDER}'!",
        SIZES.len()
    );
    Ok(())
}
