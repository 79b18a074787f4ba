use std::ops::Range;

pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Pads the raw extents and widens one axis so the window keeps
/// [`DISTANCE_TO_HEIGHT_RATIO`].
pub fn fixed_ratio_axis_window(raw_span_x: f64, raw_span_y: f64) -> (f64, f64) {
    let raw_x_span = raw_span_x.max(1.0);
    let raw_y_span = raw_span_y.max(1.0);
    let x_pad = raw_x_span * X_PADDING_RATIO;
    let y_pad = raw_y_span * Y_PADDING_RATIO;

    let mut x_span = (raw_span_x + x_pad).max(1.0);
    let mut y_span = (raw_span_y + y_pad).max(1.0);

    if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
        x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
    } else {
        y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
    }

    (x_span, y_span)
}

/// Chart ranges covering every point, anchored at ground level and at the
/// left-most of `x = 0` and the smallest sampled x.
pub fn trajectory_window<I>(points: I) -> (Range<f64>, Range<f64>)
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut min_x = 0.0f64;
    let mut max_x = 0.0f64;
    let mut max_y = 0.0f64;
    for (x, y) in points {
        if !(x.is_finite() && y.is_finite()) {
            continue;
        }
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    let (x_span, y_span) = fixed_ratio_axis_window(max_x - min_x, max_y);
    (min_x..min_x + x_span, 0.0..y_span)
}
