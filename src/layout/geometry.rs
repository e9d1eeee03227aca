//! Chart Geometry Module
//! Maps data values to pixel coordinates inside a fixed plotting rectangle.
//!
//! All functions are pure. Pixel origin is top-left, so y mapping is
//! inverted: larger values sit higher on screen.

/// A fixed-size drawing surface with paddings around the plotting rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub width: f32,
    pub height: f32,
    pub pad_left: f32,
    pub pad_right: f32,
    pub pad_top: f32,
    pub pad_bottom: f32,
}

impl PlotArea {
    pub const fn new(
        width: f32,
        height: f32,
        pad_left: f32,
        pad_right: f32,
        pad_top: f32,
        pad_bottom: f32,
    ) -> Self {
        Self {
            width,
            height,
            pad_left,
            pad_right,
            pad_top,
            pad_bottom,
        }
    }

    pub fn plot_width(&self) -> f32 {
        self.width - self.pad_left - self.pad_right
    }

    pub fn plot_height(&self) -> f32 {
        self.height - self.pad_top - self.pad_bottom
    }

    /// Bottom edge of the plotting rectangle (the x-axis line).
    pub fn baseline(&self) -> f32 {
        self.pad_top + self.plot_height()
    }
}

/// Axis tick values `[0, step, 2*step, ..., <= max]`, strictly increasing.
/// A non-positive step or max degenerates to a single zero tick.
pub fn ticks(max: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || max < 0.0 {
        return vec![0.0];
    }
    let mut out = Vec::new();
    let mut v = 0.0;
    while v <= max + 1e-9 {
        out.push(v);
        v += step;
    }
    out
}

/// x pixel for the point at `index` of `count`. A single point is centered;
/// otherwise index 0 sits on the left edge and index count-1 on the right.
pub fn x_at(index: usize, count: usize, area: &PlotArea) -> f32 {
    if count <= 1 {
        return area.pad_left + area.plot_width() / 2.0;
    }
    area.pad_left + (index as f32 / (count - 1) as f32) * area.plot_width()
}

/// y pixel for `value` on a 0..axis_max linear scale, inverted for screen.
pub fn y_at(value: f64, max: f64, area: &PlotArea) -> f32 {
    let ratio = if max > 0.0 { (value / max) as f32 } else { 0.0 };
    area.pad_top + area.plot_height() - ratio * area.plot_height()
}

/// Bar height in pixels: proportional share of `allotment`, floored so
/// zero/near-zero values remain visible.
pub fn bar_height(value: f64, max: f64, allotment: f32, floor: f32) -> f32 {
    let h = if max > 0.0 {
        ((value / max) as f32) * allotment
    } else {
        0.0
    };
    h.max(floor)
}

/// Round an observed maximum up to the next multiple of `base`, then pad by
/// one more `base` so the top of the chart breathes.
pub fn axis_max(observed_max: f64, base: f64) -> f64 {
    if base <= 0.0 {
        return observed_max;
    }
    (observed_max / base).ceil() * base + base
}

/// Rounded percent change from `v1` to `v2`; zero baseline yields zero.
pub fn percent_change(v1: f64, v2: f64) -> i64 {
    if v1 == 0.0 {
        return 0;
    }
    ((v2 - v1) / v1 * 100.0).round() as i64
}

/// One pie slice: fraction of the whole plus start/sweep angles in degrees.
/// Angles start at 12 o'clock (-90) and run clockwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieSlice {
    pub frac: f64,
    pub start_deg: f64,
    pub sweep_deg: f64,
}

/// Slice layout for a pie chart. Non-positive values contribute nothing;
/// an all-zero input yields no slices.
pub fn pie_slices(values: &[f64]) -> Vec<PieSlice> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = -90.0;
    values
        .iter()
        .map(|&v| {
            let frac = if v > 0.0 { v / total } else { 0.0 };
            let sweep = frac * 360.0;
            let slice = PieSlice {
                frac,
                start_deg: start,
                sweep_deg: sweep,
            };
            start += sweep;
            slice
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: PlotArea = PlotArea::new(900.0, 450.0, 80.0, 100.0, 80.0, 60.0);

    #[test]
    fn tick_sequence_matches_step() {
        assert_eq!(
            ticks(70.0, 10.0),
            vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0]
        );
    }

    #[test]
    fn tick_sequence_strictly_increasing_and_bounded() {
        let t = ticks(55.2, 5.0);
        assert!(t.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(t[0], 0.0);
        assert!(*t.last().unwrap() <= 55.2);
    }

    #[test]
    fn degenerate_step_yields_single_zero_tick() {
        assert_eq!(ticks(70.0, 0.0), vec![0.0]);
        assert_eq!(ticks(70.0, -5.0), vec![0.0]);
    }

    #[test]
    fn single_point_is_centered() {
        let x = x_at(0, 1, &AREA);
        assert_eq!(x, AREA.pad_left + AREA.plot_width() / 2.0);
    }

    #[test]
    fn points_span_plot_width_strictly_increasing() {
        let n = 10;
        let xs: Vec<f32> = (0..n).map(|i| x_at(i, n, &AREA)).collect();
        assert_eq!(xs[0], AREA.pad_left);
        assert_eq!(xs[n - 1], AREA.pad_left + AREA.plot_width());
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn y_mapping_is_inverted() {
        assert_eq!(y_at(0.0, 70.0, &AREA), AREA.baseline());
        assert_eq!(y_at(70.0, 70.0, &AREA), AREA.pad_top);
        assert!(y_at(60.0, 70.0, &AREA) < y_at(10.0, 70.0, &AREA));
    }

    #[test]
    fn bar_height_is_proportional_with_floor() {
        // Single-bar defaults: 270px allotment with a 4px visible floor.
        let h = bar_height(28.1, 55.2, 270.0, 4.0);
        assert!((h - (28.1 / 55.2) as f32 * 270.0).abs() < 1e-3);
        assert_eq!(bar_height(0.0, 55.2, 270.0, 4.0), 4.0);
        assert_eq!(bar_height(0.01, 55.2, 270.0, 4.0), 4.0);
        // Zero max still surfaces the floor.
        assert_eq!(bar_height(10.0, 0.0, 280.0, 1.0), 1.0);
    }

    #[test]
    fn axis_max_rounds_up_and_pads() {
        assert_eq!(axis_max(55.2, 10.0), 70.0);
        assert_eq!(axis_max(25.0, 5.0), 30.0);
        assert_eq!(axis_max(60.2, 10.0), 80.0);
    }

    #[test]
    fn percent_change_matches_rounding() {
        assert_eq!(percent_change(100.0, 38.0), -62);
        assert_eq!(percent_change(100.0, 176.0), 76);
        assert_eq!(percent_change(0.0, 50.0), 0);
    }

    #[test]
    fn pie_slices_cover_full_turn() {
        let slices = pie_slices(&[45.0, 30.0, 15.0, 10.0]);
        assert_eq!(slices.len(), 4);
        assert_eq!(slices[0].start_deg, -90.0);
        let total: f64 = slices.iter().map(|s| s.sweep_deg).sum();
        assert!((total - 360.0).abs() < 1e-9);
        assert!((slices[0].frac - 0.45).abs() < 1e-9);
    }

    #[test]
    fn pie_slices_stay_index_aligned_past_zero_values() {
        let slices = pie_slices(&[0.0, 45.0, 30.0, 15.0, 10.0]);
        assert_eq!(slices.len(), 5);
        assert_eq!(slices[0].sweep_deg, 0.0);
        assert_eq!(slices[1].start_deg, -90.0);
        assert!((slices[1].frac - 0.45).abs() < 1e-9);
        assert!((slices[1].sweep_deg - 162.0).abs() < 1e-9);
    }

    #[test]
    fn pie_zero_total_yields_no_slices() {
        assert!(pie_slices(&[0.0, 0.0]).is_empty());
        assert!(pie_slices(&[]).is_empty());
    }
}
