//! Drawing surface backed by a `tiny_skia::Pixmap`
//!
//! Integer points address pixels, so shapes are placed on pixel centres.
//! Anti-aliasing is off: every painted pixel takes the exact paint colour.
//! Everything clips silently at the canvas border.

use fe_core::{Point, Segment};
use image::{Rgba, RgbaImage};
use tiny_skia::{
    ColorU8, FillRule, LineCap, Paint, Path, PathBuilder, Pixmap, Stroke, Transform,
};

use crate::{RenderError, RenderResult};

#[inline]
fn center_of(p: Point) -> (f32, f32) {
    (p.x as f32 + 0.5, p.y as f32 + 0.5)
}

fn solid(color: Rgba<u8>) -> Paint<'static> {
    let [r, g, b, a] = color.0;
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = false;
    paint
}

fn polyline(points: &[Point], close: bool) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    let (x, y) = center_of(*first);
    pb.move_to(x, y);
    for p in rest {
        let (x, y) = center_of(*p);
        pb.line_to(x, y);
    }
    if close {
        pb.close();
    }
    pb.finish()
}

/// RGBA canvas the overlay is drawn on
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Copy an image into a new canvas
    pub fn from_image(image: &RgbaImage) -> RenderResult<Self> {
        let (width, height) = image.dimensions();
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::EmptyCanvas { width, height })?;

        // pixmap stores premultiplied alpha
        for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
            let [r, g, b, a] = src.0;
            *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
        }
        Ok(Self { pixmap })
    }

    /// Back to a straight-alpha image
    pub fn into_image(self) -> RgbaImage {
        let mut image = RgbaImage::new(self.pixmap.width(), self.pixmap.height());
        for (dst, src) in image.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        image
    }

    /// Filled disc. A zero radius draws nothing.
    pub fn fill_circle(&mut self, center: Point, radius: u32, color: Rgba<u8>) {
        let (x, y) = center_of(center);
        if let Some(path) = PathBuilder::from_circle(x, y, radius as f32) {
            self.pixmap.fill_path(
                &path,
                &solid(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    /// Filled disc with an outline ring of `outline_width` pixels inside `radius`
    pub fn outlined_circle(
        &mut self,
        center: Point,
        radius: u32,
        fill: Rgba<u8>,
        outline: Rgba<u8>,
        outline_width: u32,
    ) {
        self.fill_circle(center, radius, outline);
        self.fill_circle(center, radius.saturating_sub(outline_width), fill);
    }

    /// Line of the given pixel width with flat ends
    pub fn stroke_line(&mut self, seg: &Segment, width: u32, color: Rgba<u8>) {
        let Some(path) = polyline(&[seg.start, seg.end], false) else {
            return;
        };
        let stroke = Stroke {
            width: width.max(1) as f32,
            line_cap: LineCap::Butt,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &solid(color), &stroke, Transform::identity(), None);
    }

    /// Filled polygon (even-odd). Fewer than three vertices draws nothing.
    pub fn fill_polygon(&mut self, polygon: &[Point], color: Rgba<u8>) {
        if polygon.len() < 3 {
            return;
        }
        if let Some(path) = polyline(polygon, true) {
            self.pixmap.fill_path(
                &path,
                &solid(color),
                FillRule::EvenOdd,
                Transform::identity(),
                None,
            );
        }
    }
}
