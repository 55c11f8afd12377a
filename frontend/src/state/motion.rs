//! Scroll- and pointer-driven motion math.

/// Maps `input` through matching `stops` and `outputs` with linear
/// interpolation between neighbouring stops, holding the end values outside
/// the range. `stops` must be ascending and the same length as `outputs`.
pub fn interpolate(input: f64, stops: &[f64], outputs: &[f64]) -> f64 {
    let count = stops.len().min(outputs.len());
    if count == 0 {
        return 0.0;
    }
    if input <= stops[0] {
        return outputs[0];
    }
    if input >= stops[count - 1] {
        return outputs[count - 1];
    }
    for i in 1..count {
        let (lo, hi) = (stops[i - 1], stops[i]);
        if input <= hi {
            let span = hi - lo;
            if span <= f64::EPSILON {
                return outputs[i];
            }
            let t = (input - lo) / span;
            return outputs[i - 1] + (outputs[i] - outputs[i - 1]) * t;
        }
    }
    outputs[count - 1]
}

/// How far a region has travelled through the viewport: `0.0` when its top
/// edge meets the viewport bottom, `1.0` when its bottom edge leaves the top.
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let distance = viewport_height + height;
    if distance <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / distance).clamp(0.0, 1.0)
}

/// Bounds of an on-screen box, in client pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer position relative to the centre of `bounds`, each axis in
/// `[-0.5, 0.5]`.
pub fn pointer_offset(client_x: f64, client_y: f64, bounds: Bounds) -> (f64, f64) {
    let axis = |pos: f64, start: f64, size: f64| {
        if size <= 0.0 {
            0.0
        } else {
            ((pos - start) / size - 0.5).clamp(-0.5, 0.5)
        }
    };
    (
        axis(client_x, bounds.left, bounds.width),
        axis(client_y, bounds.top, bounds.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn interpolates_between_two_stops() {
        assert!(close(interpolate(100.0, &[0.0, 200.0], &[8.0, -120.0]), -56.0));
        assert!(close(interpolate(0.1, &[0.0, 0.2], &[0.95, 1.0]), 0.975));
    }

    #[test]
    fn holds_end_values_outside_range() {
        assert_eq!(interpolate(-50.0, &[0.0, 200.0], &[1.0, 0.9]), 1.0);
        assert_eq!(interpolate(900.0, &[0.0, 200.0], &[1.0, 0.9]), 0.9);
    }

    #[test]
    fn multi_stop_dips_and_recovers() {
        let stops = [0.0, 100.0, 300.0];
        let outputs = [1.0, 0.9, 1.0];
        assert!(close(interpolate(100.0, &stops, &outputs), 0.9));
        assert!(close(interpolate(200.0, &stops, &outputs), 0.95));
        assert_eq!(interpolate(400.0, &stops, &outputs), 1.0);
    }

    #[test]
    fn degenerate_input_is_safe() {
        assert_eq!(interpolate(1.0, &[], &[]), 0.0);
        assert_eq!(interpolate(1.0, &[5.0, 5.0], &[0.0, 1.0]), 0.0);
        assert_eq!(interpolate(5.0, &[5.0, 5.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn progress_runs_from_entry_to_exit() {
        assert_eq!(scroll_progress(800.0, 400.0, 800.0), 0.0);
        assert!(close(scroll_progress(200.0, 400.0, 800.0), 0.5));
        assert_eq!(scroll_progress(-400.0, 400.0, 800.0), 1.0);
        assert_eq!(scroll_progress(-9000.0, 400.0, 800.0), 1.0);
    }

    #[test]
    fn pointer_offset_is_centred() {
        let bounds = Bounds {
            left: 100.0,
            top: 50.0,
            width: 200.0,
            height: 100.0,
        };
        assert_eq!(pointer_offset(200.0, 100.0, bounds), (0.0, 0.0));
        assert_eq!(pointer_offset(100.0, 150.0, bounds), (-0.5, 0.5));
        assert_eq!(pointer_offset(0.0, 0.0, Bounds::default()), (0.0, 0.0));
    }
}
