use egui::Color32;
use image::{Rgba, RgbaImage};

use crate::surface::{BACKGROUND, Mark, Surface};

/// Rasterizes the surface to an RGBA image: background fill, then every
/// mark as a solid disk in insertion order. Pixels outside the surface
/// bounds are clipped.
pub fn render_to_image(surface: &Surface) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(surface.width(), surface.height(), to_rgba(BACKGROUND));
    for mark in surface.marks() {
        draw_disk(&mut image, mark);
    }
    image
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba([color.r(), color.g(), color.b(), color.a()])
}

/// A pixel belongs to the disk when its center lies within the mark radius.
fn draw_disk(image: &mut RgbaImage, mark: &Mark) {
    let (width, height) = image.dimensions();
    let color = to_rgba(mark.color);
    let r = mark.radius;

    let max_x = (mark.center.x + r).ceil().min(width as f32 - 1.0);
    let max_y = (mark.center.y + r).ceil().min(height as f32 - 1.0);
    if max_x < 0.0 || max_y < 0.0 {
        return;
    }
    let min_x = (mark.center.x - r).floor().max(0.0) as u32;
    let min_y = (mark.center.y - r).floor().max(0.0) as u32;

    for y in min_y..=max_y as u32 {
        for x in min_x..=max_x as u32 {
            let dx = x as f32 + 0.5 - mark.center.x;
            let dy = y as f32 + 0.5 - mark.center.y;
            if dx * dx + dy * dy <= r * r {
                image.put_pixel(x, y, color);
            }
        }
    }
}
