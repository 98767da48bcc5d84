/// Design height of the detail page header image, in logical pixels.
pub const HEADER_IMAGE_HEIGHT: f64 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxTransform {
    pub translate_y: f64,
    pub scale: f64,
}

impl Default for ParallaxTransform {
    fn default() -> Self {
        Self { translate_y: 0.0, scale: 1.0 }
    }
}

/// Sticky-stretch transform for the header image at the given scroll offset.
///
/// Both outputs interpolate linearly over the control points
/// `[-image_height, 0, image_height]` and hold the boundary value beyond
/// them. Negative offsets (overscroll above the top) stretch the image up to
/// 2x; positive offsets drag it down at three quarters of the scroll speed.
/// Runs on every scroll update, so it stays allocation free.
pub fn compute_transform(offset: f64, image_height: f64) -> ParallaxTransform {
    let h = image_height;
    ParallaxTransform {
        translate_y: interpolate(offset, [-h, 0.0, h], [-h / 2.0, 0.0, h * 0.75]),
        scale: interpolate(offset, [-h, 0.0, h], [2.0, 1.0, 1.0]),
    }
}

fn interpolate(t: f64, input: [f64; 3], output: [f64; 3]) -> f64 {
    if t <= input[0] {
        return output[0];
    }
    if t >= input[2] {
        return output[2];
    }

    let (x0, x1, y0, y1) = if t <= input[1] {
        (input[0], input[1], output[0], output[1])
    } else {
        (input[1], input[2], output[1], output[2])
    };

    y0 + (t - x0) * (y1 - y0) / (x1 - x0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: f64 = 400.0;
    const TOLERANCE: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn rest_position_is_the_identity() {
        let transform = compute_transform(0.0, H);
        assert_close(transform.translate_y, 0.0);
        assert_close(transform.scale, 1.0);
    }

    #[test]
    fn full_overscroll_up_stretches_to_double() {
        let transform = compute_transform(-H, H);
        assert_close(transform.translate_y, -H / 2.0);
        assert_close(transform.scale, 2.0);
    }

    #[test]
    fn full_scroll_down_drags_at_three_quarters() {
        let transform = compute_transform(H, H);
        assert_close(transform.translate_y, H * 0.75);
        assert_close(transform.scale, 1.0);
    }

    #[test]
    fn offsets_beyond_the_control_points_are_clamped() {
        let above = compute_transform(-2.0 * H, H);
        assert_close(above.translate_y, -H / 2.0);
        assert_close(above.scale, 2.0);

        let below = compute_transform(2.0 * H, H);
        assert_close(below.translate_y, H * 0.75);
        assert_close(below.scale, 1.0);
    }

    #[test]
    fn midpoints_interpolate_linearly() {
        let up = compute_transform(-H / 2.0, H);
        assert_close(up.translate_y, -H / 4.0);
        assert_close(up.scale, 1.5);

        let down = compute_transform(H / 2.0, H);
        assert_close(down.translate_y, H * 0.375);
        assert_close(down.scale, 1.0);
    }

    #[test]
    fn translate_is_monotonic_non_decreasing_over_the_scroll_range() {
        let mut previous = compute_transform(-H, H).translate_y;
        let mut offset = -H;
        while offset <= H {
            let current = compute_transform(offset, H).translate_y;
            assert!(current >= previous - TOLERANCE, "regression at offset {offset}");
            previous = current;
            offset += 1.0;
        }
    }

    #[test]
    fn scale_is_monotonic_non_increasing_over_the_scroll_range() {
        let mut previous = compute_transform(-H, H).scale;
        let mut offset = -H;
        while offset <= H {
            let current = compute_transform(offset, H).scale;
            assert!(current <= previous + TOLERANCE, "increase at offset {offset}");
            previous = current;
            offset += 1.0;
        }
    }

    #[test]
    fn transform_is_continuous_across_the_control_points() {
        for anchor in [-H, 0.0, H] {
            let before = compute_transform(anchor - 1e-6, H);
            let after = compute_transform(anchor + 1e-6, H);
            assert!((before.translate_y - after.translate_y).abs() < 1e-4);
            assert!((before.scale - after.scale).abs() < 1e-4);
        }
    }

    #[test]
    fn transform_is_total_for_any_finite_offset() {
        for offset in [f64::MIN, -1e12, -0.0, 1e12, f64::MAX] {
            let transform = compute_transform(offset, H);
            assert!(transform.translate_y.is_finite());
            assert!(transform.scale.is_finite());
        }
    }
}
