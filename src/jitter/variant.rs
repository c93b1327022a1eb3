//! Upscaled variant rendering with solid jittered blocks

use crate::jitter::color::{nearby_color, same_rgb};
use image::{Rgba, RgbaImage};
use rand::Rng;

/// Render one randomized variant of `source`, upscaled by `scale`
///
/// The destination measures exactly source width x `scale` by source
/// height x `scale`. Each source pixel maps to a solid `scale` x `scale`
/// destination block: pixels matching `ignore_color` on the RGB channels
/// are copied through exactly, alpha included, while every other block
/// receives an independently jittered color forced to fully opaque.
///
/// Repeated calls for the same source produce different variants; nothing
/// is cached or reused.
pub fn render_variant<R: Rng + ?Sized>(
    rng: &mut R,
    source: &RgbaImage,
    scale: u32,
    threshold: u8,
    ignore_color: Rgba<u8>,
) -> RgbaImage {
    let mut destination = RgbaImage::new(source.width() * scale, source.height() * scale);

    for (x, y, pixel) in source.enumerate_pixels() {
        let block_color = if same_rgb(*pixel, ignore_color) {
            *pixel
        } else {
            let Rgba([red, green, blue, _]) = nearby_color(rng, *pixel, threshold);
            Rgba([red, green, blue, u8::MAX])
        };

        paint_block(&mut destination, block_color, x * scale, y * scale, scale);
    }

    destination
}

// Blocks are solid: every pixel in the block receives the identical color.
fn paint_block(image: &mut RgbaImage, color: Rgba<u8>, x: u32, y: u32, size: u32) {
    for dy in 0..size {
        for dx in 0..size {
            image.put_pixel(x + dx, y + dy, color);
        }
    }
}
