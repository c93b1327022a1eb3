//! Tests for bounded channel jitter and the ignore-color equality rule

#[cfg(test)]
mod tests {
    use image::Rgba;
    use pixeljitter::jitter::color::{nearby_color, nearby_value, same_rgb};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    // Tests jittered values stay within the threshold window and channel range
    // Verified by widening the variance range
    #[test]
    fn test_nearby_value_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();

        for _ in 0..10_000 {
            let value = nearby_value(&mut rng, 128, 32, 0, 255);
            assert!((96..=160).contains(&value));
            seen.insert(value);
        }

        assert!(seen.len() > 1, "jitter should produce more than one value");
    }

    // Tests zero threshold produces zero variance
    // Verified by drawing the variance before the zero check
    #[test]
    fn test_nearby_value_zero_threshold() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(nearby_value(&mut rng, 200, 0, 0, 255), 200);
        }
    }

    // Tests clamping near the channel edges
    // Verified by removing the clamp
    #[test]
    fn test_nearby_value_clamps_at_edges() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1_000 {
            let high = nearby_value(&mut rng, 250, 32, 0, 255);
            assert!((218..=255).contains(&high));

            let low = nearby_value(&mut rng, 5, 32, 0, 255);
            assert!(low <= 37);
        }
    }

    // Tests caller-supplied min/max bounds are honored
    // Verified by clamping to the full channel range instead
    #[test]
    fn test_nearby_value_custom_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1_000 {
            let value = nearby_value(&mut rng, 128, 200, 120, 140);
            assert!((120..=140).contains(&value));
        }
    }

    // Tests alpha passes through nearby_color unchanged
    // Verified by jittering the alpha channel too
    #[test]
    fn test_nearby_color_preserves_alpha() {
        let mut rng = StdRng::seed_from_u64(5);
        for alpha in [0u8, 33, 128, 255] {
            let Rgba([red, green, blue, out_alpha]) =
                nearby_color(&mut rng, Rgba([100, 150, 200, alpha]), 32);

            assert_eq!(out_alpha, alpha);
            assert!((68..=132).contains(&red));
            assert!((118..=182).contains(&green));
            assert!((168..=232).contains(&blue));
        }
    }

    // Tests RGB-only equality disregards alpha
    // Verified by comparing all four channels
    #[test]
    fn test_same_rgb_ignores_alpha() {
        assert!(same_rgb(Rgba([33, 33, 33, 255]), Rgba([33, 33, 33, 0])));
        assert!(same_rgb(Rgba([1, 2, 3, 9]), Rgba([1, 2, 3, 200])));
        assert!(!same_rgb(Rgba([1, 2, 3, 9]), Rgba([1, 2, 4, 9])));
        assert!(!same_rgb(Rgba([33, 33, 32, 255]), Rgba([33, 33, 33, 255])));
    }
}
