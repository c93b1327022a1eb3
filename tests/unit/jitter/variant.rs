//! Tests for variant rendering: dimensions, solid blocks, and the ignore rule

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use pixeljitter::io::configuration::IGNORE_COLOR;
    use pixeljitter::jitter::render_variant;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    // Tests destination dimensions are source dimensions times scale
    // Verified by swapping width and height in the destination
    #[test]
    fn test_variant_dimensions() {
        let mut rng = StdRng::seed_from_u64(42);
        for (width, height, scale) in [(2, 3, 4), (1, 1, 1), (5, 2, 10)] {
            let source = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
            let variant = render_variant(&mut rng, &source, scale, 32, IGNORE_COLOR);
            assert_eq!(variant.dimensions(), (width * scale, height * scale));
        }
    }

    // Tests ignore-color pixels are reproduced exactly, arbitrary alpha included
    // Verified by forcing alpha to opaque on the ignore path
    #[test]
    fn test_ignore_color_renders_verbatim() {
        let mut rng = StdRng::seed_from_u64(1);
        for alpha in [0u8, 77, 255] {
            let source = RgbaImage::from_pixel(1, 1, Rgba([33, 33, 33, alpha]));
            let variant = render_variant(&mut rng, &source, 4, 32, IGNORE_COLOR);

            assert_eq!(variant.dimensions(), (4, 4));
            for pixel in variant.pixels() {
                assert_eq!(*pixel, Rgba([33, 33, 33, alpha]));
            }
        }
    }

    // Tests zero threshold reproduces the source color with opaque alpha
    // Verified by keeping the source alpha on the jitter path
    #[test]
    fn test_zero_threshold_is_identity_with_opaque_alpha() {
        let mut rng = StdRng::seed_from_u64(2);

        let source = RgbaImage::from_pixel(1, 1, Rgba([200, 10, 10, 255]));
        let variant = render_variant(&mut rng, &source, 2, 0, IGNORE_COLOR);
        assert_eq!(variant.dimensions(), (2, 2));
        for pixel in variant.pixels() {
            assert_eq!(*pixel, Rgba([200, 10, 10, 255]));
        }

        let translucent = RgbaImage::from_pixel(1, 1, Rgba([200, 10, 10, 12]));
        let variant = render_variant(&mut rng, &translucent, 2, 0, IGNORE_COLOR);
        for pixel in variant.pixels() {
            assert_eq!(*pixel, Rgba([200, 10, 10, 255]));
        }
    }

    // Tests each destination block is a single solid color
    // Verified by jittering per destination pixel instead of per block
    #[test]
    fn test_blocks_are_solid() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut source = RgbaImage::new(2, 2);
        source.put_pixel(0, 0, Rgba([250, 0, 0, 255]));
        source.put_pixel(1, 0, Rgba([0, 250, 0, 255]));
        source.put_pixel(0, 1, Rgba([0, 0, 250, 255]));
        source.put_pixel(1, 1, Rgba([250, 250, 0, 255]));

        let scale = 3;
        let variant = render_variant(&mut rng, &source, scale, 32, IGNORE_COLOR);

        for block_y in 0..2 {
            for block_x in 0..2 {
                let corner = *variant.get_pixel(block_x * scale, block_y * scale);
                for dy in 0..scale {
                    for dx in 0..scale {
                        assert_eq!(
                            *variant.get_pixel(block_x * scale + dx, block_y * scale + dy),
                            corner
                        );
                    }
                }
            }
        }
    }

    // Tests jitter stays within the threshold window and varies across renders
    // Verified by widening the variance range
    #[test]
    fn test_jitter_window() {
        let mut rng = StdRng::seed_from_u64(4);
        let source = RgbaImage::from_pixel(1, 1, Rgba([128, 128, 128, 255]));
        let mut distinct = HashSet::new();

        for _ in 0..200 {
            let variant = render_variant(&mut rng, &source, 1, 32, IGNORE_COLOR);
            let Rgba([red, green, blue, alpha]) = *variant.get_pixel(0, 0);

            for channel in [red, green, blue] {
                assert!((96..=160).contains(&channel));
            }
            assert_eq!(alpha, 255);
            distinct.insert([red, green, blue]);
        }

        assert!(distinct.len() > 1, "variants should differ between renders");
    }
}
