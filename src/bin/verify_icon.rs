use anyhow::{Context, Result};
use image::Rgba;
use launcher_icons::icon_gen::{BACKGROUND, OUTLINE, SHAPE_FILL};

fn describe(pixel: &Rgba<u8>) -> &'static str {
    match *pixel {
        p if p == BACKGROUND => "background",
        p if p == SHAPE_FILL => "fill",
        p if p == OUTLINE => "outline",
        p if p[3] == 0 => "transparent",
        _ => "other",
    }
}

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "android/app/src/main/res/mipmap-hdpi/ic_launcher_round.png".to_string());

    let img = image::open(&path)
        .with_context(|| format!("Failed to open image {path}"))?
        .to_rgba8();
    let (width, height) = img.dimensions();

    println!("Checking icon: {}", path);
    println!("Image dimensions: {}x{}", width, height);
    if width != height {
        println!("⚠ Icon is not square");
    }

    let samples = [
        ("top-left", 0, 0),
        ("top-right", width - 1, 0),
        ("bottom-left", 0, height - 1),
        ("bottom-right", width - 1, height - 1),
        ("center", width / 2, height / 2),
    ];

    for (name, x, y) in samples {
        let p = img.get_pixel(x, y);
        println!(
            "  {:<12} (x={}, y={}): RGBA [{}, {}, {}, {}] {}",
            name,
            x,
            y,
            p[0],
            p[1],
            p[2],
            p[3],
            describe(p)
        );
    }

    let center = img.get_pixel(width / 2, height / 2);
    if *center == SHAPE_FILL {
        println!("✓ Shape fill found at the center");
    } else {
        println!("⚠ Center pixel is not the shape fill colour");
    }

    Ok(())
}
