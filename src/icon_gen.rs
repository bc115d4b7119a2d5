use crate::density::{Density, DENSITIES};
use crate::font;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, DynamicImage, ImageEncoder, Rgba, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::Write,
    path::{Path, PathBuf},
};

/// Canvas colour behind the shape
pub const BACKGROUND: Rgba<u8> = Rgba([73, 109, 137, 255]);

/// Fill colour of the rectangle or ellipse
pub const SHAPE_FILL: Rgba<u8> = Rgba([255, 255, 0, 255]);

/// One pixel outline around the shape
pub const OUTLINE: Rgba<u8> = Rgba([0, 0, 0, 255]);

pub const TEXT_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

pub const DEFAULT_LABEL: &str = "SMS";

/// Edge length of the flat fallback icon written by `restore_icons`
pub const FALLBACK_SIZE: u32 = 72;

pub const FALLBACK_COLOR: Rgba<u8> = Rgba([255, 255, 0, 255]);

// Define Args struct for library compilation
#[derive(Debug)]
pub struct Args {
    pub output: PathBuf,
    pub text: String,
    pub round_mask: bool,
    pub restore: bool,
    pub quiet: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            output: PathBuf::from(crate::density::DEFAULT_RES_DIR),
            text: DEFAULT_LABEL.to_string(),
            round_mask: false,
            restore: false,
            quiet: false,
        }
    }
}

/// Outline shape drawn over the whole canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rectangle,
    Ellipse,
}

/// Everything needed to render one placeholder icon
#[derive(Debug, Clone)]
pub struct IconSpec<'a> {
    pub size: u32,
    pub shape: Shape,
    pub background: Rgba<u8>,
    pub fill: Rgba<u8>,
    pub outline: Rgba<u8>,
    pub text: &'a str,
    pub text_color: Rgba<u8>,
}

impl<'a> IconSpec<'a> {
    pub fn new(size: u32, shape: Shape) -> Self {
        Self {
            size,
            shape,
            background: BACKGROUND,
            fill: SHAPE_FILL,
            outline: OUTLINE,
            text: DEFAULT_LABEL,
            text_color: TEXT_COLOR,
        }
    }

    pub fn with_text(mut self, text: &'a str) -> Self {
        self.text = text;
        self
    }

    /// Top-left corner of the label, a quarter of the size in from the top-left
    pub fn text_anchor(&self) -> (u32, u32) {
        (self.size / 4, self.size / 4)
    }

    /// Render the icon into a new RGBA canvas
    pub fn render(&self) -> Result<RgbaImage> {
        if self.size == 0 {
            anyhow::bail!("Icon size must be a positive number of pixels");
        }

        let mut img = RgbaImage::from_pixel(self.size, self.size, self.background);

        // The bounding box is inclusive, so it reaches one pixel past the canvas.
        match self.shape {
            Shape::Rectangle => draw_rectangle(&mut img, self.size, self.fill, self.outline),
            Shape::Ellipse => draw_ellipse(&mut img, self.size, self.fill, self.outline),
        }

        let (x, y) = self.text_anchor();
        font::draw_text(&mut img, x, y, self.text, self.text_color);

        Ok(img)
    }
}

pub fn generate_icons(args: Args) -> Result<()> {
    if args.restore {
        return restore_icons(&args.output, args.quiet);
    }

    if !args.quiet {
        println!("Generating Android launcher icons...");
    }

    for density in DENSITIES {
        generate_density(density, &args)?;
    }

    println!("Icons generated successfully");
    Ok(())
}

/// Write the square and round icon for one density bucket
fn generate_density(density: &Density, args: &Args) -> Result<()> {
    let folder = density.folder(&args.output);
    ensure_directory(&folder)?;

    let square = IconSpec::new(density.size, Shape::Rectangle)
        .with_text(&args.text)
        .render()?;
    save_png(&square, &density.square_icon_path(&args.output))?;
    if !args.quiet {
        println!("  ✓ Generated {}/ic_launcher.png", density.label);
    }

    let mut round = IconSpec::new(density.size, Shape::Ellipse)
        .with_text(&args.text)
        .render()?;
    if args.round_mask {
        round = apply_circular_mask(round);
    }
    save_png(&round, &density.round_icon_path(&args.output))?;
    if !args.quiet {
        println!("  ✓ Generated {}/ic_launcher_round.png", density.label);
    }

    Ok(())
}

/// Render a single placeholder icon and save it as PNG at `destination`.
///
/// The parent directory of `destination` must already exist. An existing file
/// is overwritten.
pub fn generate_icon(size: u32, destination: &Path, round: bool) -> Result<()> {
    let shape = if round { Shape::Ellipse } else { Shape::Rectangle };
    let img = IconSpec::new(size, shape).render()?;
    save_png(&img, destination)
}

/// Create `path` and any missing parents. Does nothing if it already exists.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        anyhow::bail!("{} exists and is not a directory", path.display());
    }

    create_dir_all(path)
        .with_context(|| format!("Can't create directory {}", path.display()))
}

/// Write the flat fallback icon into both file names of every density folder.
///
/// The same 72x72 image is used for every density.
pub fn restore_icons(res_dir: &Path, quiet: bool) -> Result<()> {
    let fallback = RgbaImage::from_pixel(FALLBACK_SIZE, FALLBACK_SIZE, FALLBACK_COLOR);
    let mut buf = Vec::new();
    write_png(fallback.as_raw(), &mut buf, FALLBACK_SIZE)?;

    for density in DENSITIES {
        ensure_directory(&density.folder(res_dir))?;

        for path in [density.square_icon_path(res_dir), density.round_icon_path(res_dir)] {
            std::fs::write(&path, &buf)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }

        if !quiet {
            println!("Restored icons in {}", density.label);
        }
    }

    println!("All icons restored.");
    Ok(())
}

/// Fill the box (0,0)-(size,size) and outline its border
fn draw_rectangle(img: &mut RgbaImage, size: u32, fill: Rgba<u8>, outline: Rgba<u8>) {
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let on_border = x == 0 || y == 0 || x == size || y == size;
        *pixel = if on_border { outline } else { fill };
    }
}

/// Fill the ellipse inscribed in (0,0)-(size,size) and outline its edge
fn draw_ellipse(img: &mut RgbaImage, size: u32, fill: Rgba<u8>, outline: Rgba<u8>) {
    // The inclusive box spans size + 1 pixel centres.
    let center = size as f32 / 2.0;
    let radius = (size + 1) as f32 / 2.0;
    let inner = radius - 1.0;

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance > radius {
            continue;
        }
        *pixel = if distance > inner { outline } else { fill };
    }
}

/// Apply a circular mask to an image to create a round icon
pub fn apply_circular_mask(mut img: RgbaImage) -> RgbaImage {
    let (width, height) = img.dimensions();
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = width.min(height) as f32 / 2.0;

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = x as f32 - center_x;
        let dy = y as f32 - center_y;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance > radius {
            *pixel = Rgba([0, 0, 0, 0]);
        } else if distance > radius - 1.0 {
            // Anti-aliasing edge
            let alpha_factor = radius - distance;
            pixel[3] = (pixel[3] as f32 * alpha_factor) as u8;
        }
    }

    img
}

fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    DynamicImage::ImageRgba8(img.clone())
        .write_to(&mut file, image::ImageOutputFormat::Png)
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    file.flush()?;
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}
