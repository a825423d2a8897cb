//! Field renderer: overlays a projected layout on the playfield image

use std::path::{Path, PathBuf};

use fe_core::PillarColor;
use fe_layout::{FieldLayout, PILLAR_RADIUS, Rotation, rotation_for};
use image::{ImageError, ImageFormat, Rgba, RgbaImage, imageops};
use serde::{Deserialize, Serialize};

use crate::draw::Canvas;
use crate::{RenderError, RenderResult};

/// Default playfield photo, expected next to the executable's working dir
pub const DEFAULT_BASE_IMAGE: &str = "WRO-2025_FutureEngineers_Playfield.jpg";
/// Default output file
pub const DEFAULT_OUTPUT_IMAGE: &str = "WRO_Obstacle_Challenge_Layout.png";

// ============ Style ============

/// Overlay colours as `#rrggbb` / `#rrggbbaa`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub red: String,
    pub green: String,
    pub parking: String,
    pub arrow: String,
    pub outline: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            red: "#d90429".into(),
            green: "#008000".into(),
            parking: "#F702F9".into(),
            arrow: "#000000".into(),
            outline: "#000000".into(),
        }
    }
}

/// Sizes and colours of the overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub pillar_radius: u32,
    pub pillar_outline_width: u32,
    pub parking_line_width: u32,
    pub arrow_line_width: u32,
    pub palette: Palette,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            pillar_radius: PILLAR_RADIUS,
            pillar_outline_width: 2,
            parking_line_width: 10,
            arrow_line_width: 15,
            palette: Palette::default(),
        }
    }
}

/// Where to read and write images and what to do afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub base_image: PathBuf,
    pub output_image: PathBuf,
    /// Rotate so the parking lot ends up at the bottom
    pub rotate_to_start: bool,
    /// Open the written file in the system viewer
    pub open_viewer: bool,
    pub style: RenderStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            base_image: PathBuf::from(DEFAULT_BASE_IMAGE),
            output_image: PathBuf::from(DEFAULT_OUTPUT_IMAGE),
            rotate_to_start: true,
            open_viewer: true,
            style: RenderStyle::default(),
        }
    }
}

impl RenderConfig {
    /// Rotation to apply for a layout under this config
    pub fn rotation_for(&self, layout: &FieldLayout) -> Rotation {
        if self.rotate_to_start {
            rotation_for(layout.parking.section)
        } else {
            Rotation::None
        }
    }
}

/// Parse `#rrggbb` or `#rrggbbaa`
pub fn parse_hex_color(hex: &str) -> RenderResult<Rgba<u8>> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
        return Err(RenderError::InvalidColor(hex.to_string()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| RenderError::InvalidColor(hex.to_string()))
    };
    let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
    Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, alpha]))
}

#[derive(Debug, Clone, Copy)]
struct Colors {
    red: Rgba<u8>,
    green: Rgba<u8>,
    parking: Rgba<u8>,
    arrow: Rgba<u8>,
    outline: Rgba<u8>,
}

// ============ Renderer ============

/// Draws layouts with a fixed style
#[derive(Debug, Clone)]
pub struct FieldRenderer {
    style: RenderStyle,
    colors: Colors,
}

impl FieldRenderer {
    pub fn new(style: RenderStyle) -> RenderResult<Self> {
        let palette = &style.palette;
        let colors = Colors {
            red: parse_hex_color(&palette.red)?,
            green: parse_hex_color(&palette.green)?,
            parking: parse_hex_color(&palette.parking)?,
            arrow: parse_hex_color(&palette.arrow)?,
            outline: parse_hex_color(&palette.outline)?,
        };
        Ok(Self { style, colors })
    }

    /// Canvas colour of a pillar
    pub fn pillar_color(&self, color: PillarColor) -> Rgba<u8> {
        match color {
            PillarColor::Red => self.colors.red,
            PillarColor::Green => self.colors.green,
        }
    }

    /// Draw arrows, parking lot and pillars, in that order
    pub fn draw(&self, canvas: &mut Canvas, layout: &FieldLayout) {
        for arrow in &layout.arrows {
            canvas.stroke_line(&arrow.line, self.style.arrow_line_width, self.colors.arrow);
            canvas.fill_polygon(&arrow.head, self.colors.arrow);
        }

        for line in &layout.parking.lines {
            canvas.stroke_line(line, self.style.parking_line_width, self.colors.parking);
        }

        for pillar in &layout.pillars {
            canvas.outlined_circle(
                pillar.center,
                self.style.pillar_radius,
                self.pillar_color(pillar.color),
                self.colors.outline,
                self.style.pillar_outline_width,
            );
        }
    }

    /// Draw onto a copy of `base` and apply the rotation
    pub fn render(
        &self,
        base: &RgbaImage,
        layout: &FieldLayout,
        rotation: Rotation,
    ) -> RenderResult<RgbaImage> {
        let mut canvas = Canvas::from_image(base)?;
        self.draw(&mut canvas, layout);
        Ok(apply_rotation(canvas.into_image(), rotation))
    }
}

/// Counter-clockwise rotation; 90/270 swap width and height
pub fn apply_rotation(image: RgbaImage, rotation: Rotation) -> RgbaImage {
    match rotation {
        Rotation::None => image,
        Rotation::Ccw90 => imageops::rotate270(&image),
        Rotation::Ccw180 => imageops::rotate180(&image),
        Rotation::Ccw270 => imageops::rotate90(&image),
    }
}

// ============ File I/O ============

/// Load the playfield image as RGBA
pub fn load_base_image(path: &Path) -> RenderResult<RgbaImage> {
    match image::open(path) {
        Ok(img) => Ok(img.to_rgba8()),
        Err(ImageError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(RenderError::BaseImageMissing(path.to_path_buf()))
        }
        Err(source) => Err(RenderError::BaseImageUnreadable {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write as PNG
pub fn save_png(image: &RgbaImage, path: &Path) -> RenderResult<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Best-effort: failures are logged, never returned
pub fn open_in_viewer(path: &Path) {
    let target = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if let Err(e) = open::that(&target) {
        log::warn!("Could not open {} in a viewer: {}", target.display(), e);
    }
}

/// Load the base image, draw, rotate, write; returns the written path.
///
/// Nothing is written when the base image cannot be loaded.
pub fn render_to_file(config: &RenderConfig, layout: &FieldLayout) -> RenderResult<PathBuf> {
    let renderer = FieldRenderer::new(config.style.clone())?;
    let base = load_base_image(&config.base_image)?;
    log::debug!(
        "Loaded base image {} ({}x{})",
        config.base_image.display(),
        base.width(),
        base.height()
    );

    let rotation = config.rotation_for(layout);
    let output = renderer.render(&base, layout, rotation)?;
    save_png(&output, &config.output_image)?;
    log::info!(
        "Wrote layout image {} (rotated {}°)",
        config.output_image.display(),
        rotation.degrees()
    );

    if config.open_viewer {
        open_in_viewer(&config.output_image);
    }
    Ok(config.output_image.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#d90429").unwrap(), Rgba([0xd9, 0x04, 0x29, 255]));
        assert_eq!(parse_hex_color("F702F980").unwrap(), Rgba([0xf7, 0x02, 0xf9, 0x80]));
        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("#zzzzzz").is_err());
    }

    #[test]
    fn test_default_palette_parses() {
        let renderer = FieldRenderer::new(RenderStyle::default()).unwrap();
        assert_eq!(renderer.pillar_color(PillarColor::Red), Rgba([0xd9, 0x04, 0x29, 255]));
        assert_eq!(renderer.pillar_color(PillarColor::Green), Rgba([0x00, 0x80, 0x00, 255]));
        assert_eq!(renderer.colors.parking, Rgba([0xf7, 0x02, 0xf9, 255]));
    }

    #[test]
    fn test_bad_palette_rejected() {
        let mut style = RenderStyle::default();
        style.palette.green = "green".into();
        assert!(matches!(
            FieldRenderer::new(style),
            Err(RenderError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        let img = RgbaImage::new(4, 2);
        assert_eq!(apply_rotation(img.clone(), Rotation::Ccw90).dimensions(), (2, 4));
        assert_eq!(apply_rotation(img.clone(), Rotation::Ccw180).dimensions(), (4, 2));
        assert_eq!(apply_rotation(img, Rotation::Ccw270).dimensions(), (2, 4));
    }

    #[test]
    fn test_rotation_matches_point_mapping() {
        let mut img = RgbaImage::new(5, 3);
        let marker = Rgba([1, 2, 3, 255]);
        img.put_pixel(4, 0, marker);

        for rotation in [Rotation::Ccw90, Rotation::Ccw180, Rotation::Ccw270] {
            let p = rotation.rotate_point(fe_core::Point::new(4, 0), 5, 3);
            let rotated = apply_rotation(img.clone(), rotation);
            assert_eq!(*rotated.get_pixel(p.x as u32, p.y as u32), marker, "{rotation:?}");
        }
    }
}
