//! fe-render: Playfield image output
//!
//! Draws a projected [`fe_layout::FieldLayout`] (arrows, parking lot,
//! pillars) onto the base playfield photo, turns the result so the parking
//! lot is at the bottom and writes a PNG.

use std::path::PathBuf;

use thiserror::Error;

pub mod draw;
pub mod renderer;

pub use draw::Canvas;
pub use renderer::{
    DEFAULT_BASE_IMAGE, DEFAULT_OUTPUT_IMAGE, FieldRenderer, Palette, RenderConfig, RenderStyle,
    apply_rotation, load_base_image, open_in_viewer, parse_hex_color, render_to_file, save_png,
};

// ============ Error Types ============

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Base image '{}' not found", .0.display())]
    BaseImageMissing(PathBuf),

    #[error("Base image '{}' could not be read: {source}", .path.display())]
    BaseImageUnreadable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Cannot draw on a {width}x{height} image")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("Invalid colour: {0}")]
    InvalidColor(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// The base image could not be loaded; nothing was written
    pub fn is_base_image_error(&self) -> bool {
        matches!(
            self,
            RenderError::BaseImageMissing(_) | RenderError::BaseImageUnreadable { .. }
        )
    }
}

pub type RenderResult<T> = Result<T, RenderError>;
