//! Procedural rendering of the placeholder icon: a red circle with a white
//! diagonal slash on a transparent background.

use image::{DynamicImage, Rgba, RgbaImage};

const CIRCLE_FILL: Rgba<u8> = Rgba([255, 0, 0, 255]);
const CIRCLE_OUTLINE: Rgba<u8> = Rgba([200, 0, 0, 255]);
const SLASH_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);

const OUTLINE_WIDTH: f32 = 2.0;

/// Render the placeholder icon at `size`x`size` pixels.
pub fn placeholder_icon(size: u32) -> DynamicImage {
    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    draw_circle(&mut img);
    draw_slash(&mut img);
    DynamicImage::ImageRgba8(img)
}

/// Fill the inscribed circle (5% margin) in red with a darker 2 px outline.
fn draw_circle(img: &mut RgbaImage) {
    let size = img.width();
    let margin = size as f32 * 0.05;
    let center = size as f32 / 2.0;
    let radius = center - margin;

    for y in 0..size {
        for x in 0..size {
            // Sample at the pixel center
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance > radius {
                continue;
            }

            let mut pixel = if distance > radius - OUTLINE_WIDTH {
                CIRCLE_OUTLINE
            } else {
                CIRCLE_FILL
            };

            // Anti-aliasing at the rim
            if distance > radius - 1.0 {
                pixel[3] = (pixel[3] as f32 * (radius - distance)) as u8;
            }

            img.put_pixel(x, y, pixel);
        }
    }
}

/// Draw the white diagonal slash (25% margins, width max(2, size/10)) over
/// whatever is already on the canvas.
fn draw_slash(img: &mut RgbaImage) {
    let size = img.width();
    let slash_margin = size as f32 * 0.25;
    let start = slash_margin;
    let end = size as f32 - slash_margin;
    let line_width = ((size as f32 * 0.1) as u32).max(2) as f32;
    let half_width = line_width / 2.0;

    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            let distance = segment_distance(px, py, start, start, end, end);
            let coverage = (half_width - distance + 0.5).clamp(0.0, 1.0);
            if coverage > 0.0 {
                let under = *img.get_pixel(x, y);
                img.put_pixel(x, y, composite_over(SLASH_FILL, under, coverage));
            }
        }
    }
}

/// Distance from point (px, py) to the segment (x0, y0)-(x1, y1).
fn segment_distance(px: f32, py: f32, x0: f32, y0: f32, x1: f32, y1: f32) -> f32 {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let len_sq = dx * dx + dy * dy;
    let t = (((px - x0) * dx + (py - y0) * dy) / len_sq).clamp(0.0, 1.0);
    let cx = x0 + t * dx;
    let cy = y0 + t * dy;
    let ex = px - cx;
    let ey = py - cy;
    (ex * ex + ey * ey).sqrt()
}

/// Source-over compositing of `top` at `coverage` opacity onto `under`.
fn composite_over(top: Rgba<u8>, under: Rgba<u8>, coverage: f32) -> Rgba<u8> {
    let a_top = coverage * (top[3] as f32 / 255.0);
    let a_under = under[3] as f32 / 255.0;
    let a_out = a_top + a_under * (1.0 - a_top);

    if a_out <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let mut out = [0u8; 4];
    for c in 0..3 {
        let c_top = top[c] as f32;
        let c_under = under[c] as f32;
        out[c] = ((c_top * a_top + c_under * a_under * (1.0 - a_top)) / a_out).round() as u8;
    }
    out[3] = (a_out * 255.0).round() as u8;
    Rgba(out)
}
