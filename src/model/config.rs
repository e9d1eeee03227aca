//! Chart Configuration Module
//! One value object per chart type: display text, palette, layout numbers
//! and the ordered data point collection, plus the editing operations the
//! control panel invokes. Nothing here persists; state dies with the app.

use crate::model::{next_id, ChartKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Palette cycled through when adding points to the single bar chart.
pub const BAR_COLORS: [&str; 6] = [
    "#e8a5d0", "#c9726b", "#6b8e9c", "#7cb97c", "#d4a574", "#9b7bb8",
];

/// Palette cycled through for new series and pie/scatter points.
pub const SERIES_COLORS: [&str; 5] = ["#9b4f82", "#e8a5d0", "#6b8e9c", "#7cb97c", "#d4a574"];

// ---------------------------------------------------------------------------
// Line chart

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LinePoint {
    pub id: String,
    pub label: String,
    pub value: f64,
    pub annotation: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LineChartConfig {
    pub title: String,
    pub line_color: String,
    pub point_color: String,
    pub annotation_bg_color: String,
    pub annotation_text_color: String,
    pub background_color: String,
    pub border_color: String,
    pub text_color: String,
    pub show_annotations: bool,
    pub point_size: f32,
    pub line_width: f32,
    pub points: Vec<LinePoint>,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        let seed = |id: &str, label: &str, value: f64, annotation: &str| LinePoint {
            id: id.to_string(),
            label: label.to_string(),
            value,
            annotation: annotation.to_string(),
        };
        Self {
            title: "Median Suite Duration VS Adoption Maturity (2024-2026)".to_string(),
            line_color: "#6b8e9c".to_string(),
            point_color: "#6b8e9c".to_string(),
            annotation_bg_color: "#ffffff".to_string(),
            annotation_text_color: "#1a1a1a".to_string(),
            background_color: "#fafafa".to_string(),
            border_color: "#e0e0e0".to_string(),
            text_color: "#1a1a1a".to_string(),
            show_annotations: true,
            point_size: 8.0,
            line_width: 2.0,
            points: vec![
                seed("1", "Pilot", 12.0, "No parallel execution"),
                seed("2", "Early", 18.0, "Session reuse enabled"),
                seed("3", "Growing", 25.0, "API mocking"),
                seed("4", "Mature", 9.0, "Performance baseline"),
            ],
        }
    }
}

impl LineChartConfig {
    /// Deleting below this count would leave the chart unrenderable.
    pub const MIN_POINTS: usize = 2;

    pub fn add_point(&mut self) {
        self.points.push(LinePoint {
            id: next_id(),
            label: "New".to_string(),
            value: 10.0,
            annotation: "Description".to_string(),
        });
    }

    pub fn remove_point(&mut self, id: &str) -> bool {
        if self.points.len() <= Self::MIN_POINTS {
            return false;
        }
        let before = self.points.len();
        self.points.retain(|p| p.id != id);
        self.points.len() < before
    }

    pub fn max_value(&self) -> f64 {
        self.points.iter().fold(f64::MIN, |m, p| m.max(p.value))
    }
}

// ---------------------------------------------------------------------------
// Area chart

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AreaPoint {
    pub id: String,
    pub label: String,
    pub value: f64,
    pub display_value: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AreaChartConfig {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub line_color: String,
    pub fill_color: String,
    pub point_color: String,
    pub background_color: String,
    pub text_color: String,
    pub label_color: String,
    pub grid_color: String,
    pub line_width: f32,
    pub point_radius: f32,
    pub y_axis_max: f64,
    pub y_axis_step: f64,
    pub points: Vec<AreaPoint>,
}

impl Default for AreaChartConfig {
    fn default() -> Self {
        let seed = |id: &str, label: &str, value: f64, display: &str| AreaPoint {
            id: id.to_string(),
            label: label.to_string(),
            value,
            display_value: display.to_string(),
        };
        Self {
            title: "Global QA/Testing Market and Budget Trends (2020-2029)".to_string(),
            x_axis_label: "Year".to_string(),
            y_axis_label: "Market Size (USD Billion)".to_string(),
            line_color: "#22c55e".to_string(),
            fill_color: "#22c55e".to_string(),
            point_color: "#22c55e".to_string(),
            background_color: "#ffffff".to_string(),
            text_color: "#1a1a2e".to_string(),
            label_color: "#374151".to_string(),
            grid_color: "#e5e7eb".to_string(),
            line_width: 2.0,
            point_radius: 6.0,
            y_axis_max: 70.0,
            y_axis_step: 10.0,
            points: vec![
                seed("1", "2020", 30.0, "30B"),
                seed("2", "2021", 32.0, "32B"),
                seed("3", "2022", 34.0, "34B"),
                seed("4", "2023", 37.0, "37B"),
                seed("5", "2024", 41.5, "41.5B"),
                seed("6", "2025", 45.0, "45B"),
                seed("7", "2026", 48.0, "48B"),
                seed("8", "2027", 51.0, "51B"),
                seed("9", "2028", 55.0, "55B"),
                seed("10", "2029", 60.2, "60.2B"),
            ],
        }
    }
}

impl AreaChartConfig {
    pub const MIN_POINTS: usize = 2;

    /// New points continue the year sequence when the last label is numeric.
    pub fn add_point(&mut self) {
        let label = self
            .points
            .last()
            .and_then(|p| p.label.parse::<i64>().ok())
            .map(|year| (year + 1).to_string())
            .unwrap_or_else(|| "2020".to_string());
        self.points.push(AreaPoint {
            id: next_id(),
            label,
            value: 50.0,
            display_value: "50B".to_string(),
        });
    }

    pub fn remove_point(&mut self, id: &str) -> bool {
        if self.points.len() <= Self::MIN_POINTS {
            return false;
        }
        let before = self.points.len();
        self.points.retain(|p| p.id != id);
        self.points.len() < before
    }
}

// ---------------------------------------------------------------------------
// Single bar chart

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorMode {
    /// Every bar uses the shared uniform color.
    Uniform,
    /// Each bar uses its own per-point color.
    Individual,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BarPoint {
    pub id: String,
    pub label: String,
    pub value: f64,
    pub color: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BarChartConfig {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub legend_label: String,
    pub uniform_color: String,
    pub color_mode: ColorMode,
    pub background_color: String,
    pub border_color: String,
    pub text_color: String,
    /// Suffix appended to value labels above bars (e.g. "B", "K", "%").
    pub value_format: String,
    pub points: Vec<BarPoint>,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        let seed = |id: &str, label: &str, value: f64| BarPoint {
            id: id.to_string(),
            label: label.to_string(),
            value,
            color: "#e8a5d0".to_string(),
        };
        Self {
            title: "Test Automation Market Growth 2023-2028".to_string(),
            x_axis_label: String::new(),
            y_axis_label: String::new(),
            legend_label: "Market Value (USD Billions)".to_string(),
            uniform_color: "#e8a5d0".to_string(),
            color_mode: ColorMode::Uniform,
            background_color: "#fafafa".to_string(),
            border_color: "#e0e0e0".to_string(),
            text_color: "#1a1a1a".to_string(),
            value_format: "B".to_string(),
            points: vec![
                seed("1", "2023", 28.1),
                seed("2", "2024", 32.2),
                seed("3", "2025", 36.8),
                seed("4", "2026", 42.1),
                seed("5", "2027", 48.2),
                seed("6", "2028", 55.2),
            ],
        }
    }
}

impl BarChartConfig {
    pub const MIN_POINTS: usize = 1;

    pub fn add_point(&mut self) {
        let color = BAR_COLORS[self.points.len() % BAR_COLORS.len()];
        self.points.push(BarPoint {
            id: next_id(),
            label: "New".to_string(),
            value: 50.0,
            color: color.to_string(),
        });
    }

    pub fn remove_point(&mut self, id: &str) -> bool {
        if self.points.len() <= Self::MIN_POINTS {
            return false;
        }
        let before = self.points.len();
        self.points.retain(|p| p.id != id);
        self.points.len() < before
    }

    /// Effective fill color for a bar under the current color mode.
    pub fn bar_color<'a>(&'a self, point: &'a BarPoint) -> &'a str {
        match self.color_mode {
            ColorMode::Uniform => &self.uniform_color,
            ColorMode::Individual => &point.color,
        }
    }

    pub fn max_value(&self) -> f64 {
        self.points.iter().fold(f64::MIN, |m, p| m.max(p.value))
    }
}

// ---------------------------------------------------------------------------
// Grouped bar chart (two fixed series per label)

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GroupedPoint {
    pub id: String,
    pub label: String,
    pub value1: f64,
    pub value2: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GroupedBarConfig {
    pub title: String,
    pub x_axis_label: String,
    pub legend1: String,
    pub legend2: String,
    pub bar1_color: String,
    pub bar2_color: String,
    pub background_color: String,
    pub border_color: String,
    pub text_color: String,
    pub show_percentage_change: bool,
    pub points: Vec<GroupedPoint>,
}

impl Default for GroupedBarConfig {
    fn default() -> Self {
        let seed = |id: &str, label: &str, value1: f64, value2: f64| GroupedPoint {
            id: id.to_string(),
            label: label.to_string(),
            value1,
            value2,
        };
        Self {
            title: "V2 spends less time on easy tasks, and more time on complex executions"
                .to_string(),
            x_axis_label: "# of generated tokens per response".to_string(),
            legend1: "Version 1".to_string(),
            legend2: "Version 2".to_string(),
            bar1_color: "#9b4f82".to_string(),
            bar2_color: "#e8a5d0".to_string(),
            background_color: "#fafafa".to_string(),
            border_color: "#e0e0e0".to_string(),
            text_color: "#1a1a1a".to_string(),
            show_percentage_change: true,
            points: vec![
                seed("1", "10th percentile", 100.0, 38.0),
                seed("2", "30th percentile", 100.0, 65.0),
                seed("3", "50th percentile", 100.0, 95.0),
                seed("4", "70th percentile", 100.0, 128.0),
                seed("5", "80th percentile", 100.0, 176.0),
            ],
        }
    }
}

impl GroupedBarConfig {
    pub const MIN_POINTS: usize = 1;

    pub fn add_point(&mut self) {
        self.points.push(GroupedPoint {
            id: next_id(),
            label: "New Label".to_string(),
            value1: 100.0,
            value2: 100.0,
        });
    }

    pub fn remove_point(&mut self, id: &str) -> bool {
        if self.points.len() <= Self::MIN_POINTS {
            return false;
        }
        let before = self.points.len();
        self.points.retain(|p| p.id != id);
        self.points.len() < before
    }

    pub fn max_value(&self) -> f64 {
        self.points
            .iter()
            .flat_map(|p| [p.value1, p.value2])
            .fold(f64::MIN, f64::max)
    }
}

// ---------------------------------------------------------------------------
// Multi-series bar charts (grouped-by-series and stacked variants)

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChartSeries {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// A labeled observation carrying one value per series, keyed by series id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub id: String,
    pub label: String,
    pub values: BTreeMap<String, f64>,
}

impl SeriesPoint {
    pub fn value(&self, series_id: &str) -> f64 {
        self.values.get(series_id).copied().unwrap_or(0.0)
    }
}

/// Drop a removed series' key from every point's value map so no point
/// references a series that no longer exists.
fn strip_series_key(points: &mut [SeriesPoint], series_id: &str) {
    for point in points {
        point.values.remove(series_id);
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MultiBarConfig {
    pub title: String,
    pub x_axis_label: String,
    pub background_color: String,
    pub border_color: String,
    pub text_color: String,
    pub series: Vec<ChartSeries>,
    pub points: Vec<SeriesPoint>,
}

impl Default for MultiBarConfig {
    fn default() -> Self {
        let series = |id: &str, name: &str, color: &str| ChartSeries {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
        };
        let point = |id: &str, label: &str, values: [(&str, f64); 3]| SeriesPoint {
            id: id.to_string(),
            label: label.to_string(),
            values: values
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        };
        Self {
            title: "Multi-Version Performance Comparison".to_string(),
            x_axis_label: "Percentile".to_string(),
            background_color: "#fafafa".to_string(),
            border_color: "#e0e0e0".to_string(),
            text_color: "#1a1a1a".to_string(),
            series: vec![
                series("s1", "Version 1", "#9b4f82"),
                series("s2", "Version 2", "#e8a5d0"),
                series("s3", "Version 3", "#6b8e9c"),
            ],
            points: vec![
                point("1", "10th", [("s1", 80.0), ("s2", 60.0), ("s3", 45.0)]),
                point("2", "50th", [("s1", 100.0), ("s2", 95.0), ("s3", 85.0)]),
                point("3", "90th", [("s1", 150.0), ("s2", 130.0), ("s3", 110.0)]),
            ],
        }
    }
}

impl MultiBarConfig {
    pub const MIN_POINTS: usize = 1;
    pub const MIN_SERIES: usize = 1;
    /// Value seeded into every point when a series or point is added.
    pub const NEW_VALUE: f64 = 50.0;

    pub fn add_series(&mut self) {
        let id = format!("s{}", next_id());
        let color = SERIES_COLORS[self.series.len() % SERIES_COLORS.len()];
        for point in &mut self.points {
            point.values.insert(id.clone(), Self::NEW_VALUE);
        }
        self.series.push(ChartSeries {
            id,
            name: "New Series".to_string(),
            color: color.to_string(),
        });
    }

    pub fn remove_series(&mut self, id: &str) -> bool {
        if self.series.len() <= Self::MIN_SERIES {
            return false;
        }
        let before = self.series.len();
        self.series.retain(|s| s.id != id);
        if self.series.len() < before {
            strip_series_key(&mut self.points, id);
            true
        } else {
            false
        }
    }

    pub fn add_point(&mut self) {
        let values = self
            .series
            .iter()
            .map(|s| (s.id.clone(), Self::NEW_VALUE))
            .collect();
        self.points.push(SeriesPoint {
            id: next_id(),
            label: "New Point".to_string(),
            values,
        });
    }

    pub fn remove_point(&mut self, id: &str) -> bool {
        if self.points.len() <= Self::MIN_POINTS {
            return false;
        }
        let before = self.points.len();
        self.points.retain(|p| p.id != id);
        self.points.len() < before
    }

    /// Largest value across all points and series; 100 when there is no
    /// data so the empty chart still has a sane axis.
    pub fn max_value(&self) -> f64 {
        let max = self
            .points
            .iter()
            .flat_map(|p| p.values.values().copied())
            .fold(f64::MIN, f64::max);
        if max == f64::MIN {
            100.0
        } else {
            max
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StackedBarConfig {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub background_color: String,
    pub border_color: String,
    pub text_color: String,
    pub series: Vec<ChartSeries>,
    pub points: Vec<SeriesPoint>,
}

impl Default for StackedBarConfig {
    fn default() -> Self {
        let series = |id: &str, name: &str, color: &str| ChartSeries {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
        };
        let point = |id: &str, label: &str, values: [(&str, f64); 3]| SeriesPoint {
            id: id.to_string(),
            label: label.to_string(),
            values: values
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        };
        Self {
            title: "Revenue Breakdown by Product Line".to_string(),
            x_axis_label: "Quarter".to_string(),
            y_axis_label: "Revenue (in Thousands)".to_string(),
            background_color: "#fafafa".to_string(),
            border_color: "#e0e0e0".to_string(),
            text_color: "#1a1a1a".to_string(),
            series: vec![
                series("s1", "Software", "#9b4f82"),
                series("s2", "Hardware", "#6b8e9c"),
                series("s3", "Services", "#e8a5d0"),
            ],
            points: vec![
                point("1", "Q1", [("s1", 4000.0), ("s2", 2400.0), ("s3", 2400.0)]),
                point("2", "Q2", [("s1", 3000.0), ("s2", 1398.0), ("s3", 2210.0)]),
                point("3", "Q3", [("s1", 2000.0), ("s2", 9800.0), ("s3", 2290.0)]),
                point("4", "Q4", [("s1", 2780.0), ("s2", 3908.0), ("s3", 2000.0)]),
            ],
        }
    }
}

impl StackedBarConfig {
    pub const MIN_POINTS: usize = 1;
    pub const MIN_SERIES: usize = 1;
    pub const NEW_VALUE: f64 = 1000.0;

    pub fn add_series(&mut self) {
        let id = format!("s{}", next_id());
        let color = SERIES_COLORS[self.series.len() % SERIES_COLORS.len()];
        for point in &mut self.points {
            point.values.insert(id.clone(), Self::NEW_VALUE);
        }
        self.series.push(ChartSeries {
            id,
            name: "New Segment".to_string(),
            color: color.to_string(),
        });
    }

    pub fn remove_series(&mut self, id: &str) -> bool {
        if self.series.len() <= Self::MIN_SERIES {
            return false;
        }
        let before = self.series.len();
        self.series.retain(|s| s.id != id);
        if self.series.len() < before {
            strip_series_key(&mut self.points, id);
            true
        } else {
            false
        }
    }

    pub fn add_point(&mut self) {
        let values = self
            .series
            .iter()
            .map(|s| (s.id.clone(), Self::NEW_VALUE))
            .collect();
        self.points.push(SeriesPoint {
            id: next_id(),
            label: "New Data".to_string(),
            values,
        });
    }

    pub fn remove_point(&mut self, id: &str) -> bool {
        if self.points.len() <= Self::MIN_POINTS {
            return false;
        }
        let before = self.points.len();
        self.points.retain(|p| p.id != id);
        self.points.len() < before
    }

    /// Tallest stack (sum of series values per point).
    pub fn max_stack(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.values.values().sum::<f64>())
            .fold(0.0, f64::max)
    }
}

// ---------------------------------------------------------------------------
// Pie chart

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PiePoint {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub color: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PieChartConfig {
    pub title: String,
    pub background_color: String,
    pub border_color: String,
    pub text_color: String,
    pub is_donut: bool,
    pub points: Vec<PiePoint>,
}

impl Default for PieChartConfig {
    fn default() -> Self {
        let seed = |id: &str, name: &str, value: f64, color: &str| PiePoint {
            id: id.to_string(),
            name: name.to_string(),
            value,
            color: color.to_string(),
        };
        Self {
            title: "Test Automation Frameworks Distribution".to_string(),
            background_color: "#fafafa".to_string(),
            border_color: "#e0e0e0".to_string(),
            text_color: "#1a1a1a".to_string(),
            is_donut: true,
            points: vec![
                seed("1", "Playwright", 45.0, "#9b4f82"),
                seed("2", "Cypress", 30.0, "#e8a5d0"),
                seed("3", "Selenium", 15.0, "#6b8e9c"),
                seed("4", "Others", 10.0, "#d4a574"),
            ],
        }
    }
}

impl PieChartConfig {
    pub const MIN_POINTS: usize = 1;

    pub fn add_point(&mut self) {
        let color = SERIES_COLORS[self.points.len() % SERIES_COLORS.len()];
        self.points.push(PiePoint {
            id: next_id(),
            name: "New Category".to_string(),
            value: 10.0,
            color: color.to_string(),
        });
    }

    pub fn remove_point(&mut self, id: &str) -> bool {
        if self.points.len() <= Self::MIN_POINTS {
            return false;
        }
        let before = self.points.len();
        self.points.retain(|p| p.id != id);
        self.points.len() < before
    }
}

// ---------------------------------------------------------------------------
// Scatter chart

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub color: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScatterChartConfig {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub background_color: String,
    pub border_color: String,
    pub text_color: String,
    pub points: Vec<ScatterPoint>,
}

impl Default for ScatterChartConfig {
    fn default() -> Self {
        let seed = |id: &str, name: &str, x: f64, y: f64, color: &str| ScatterPoint {
            id: id.to_string(),
            name: name.to_string(),
            x,
            y,
            color: color.to_string(),
        };
        Self {
            title: "Execution Time vs Test Coverage".to_string(),
            x_axis_label: "Test Coverage (%)".to_string(),
            y_axis_label: "Execution Time (mins)".to_string(),
            background_color: "#fafafa".to_string(),
            border_color: "#e0e0e0".to_string(),
            text_color: "#1a1a1a".to_string(),
            points: vec![
                seed("1", "Suite A", 85.0, 12.0, "#9b4f82"),
                seed("2", "Suite B", 60.0, 5.0, "#e8a5d0"),
                seed("3", "Suite C", 92.0, 18.0, "#6b8e9c"),
                seed("4", "Suite D", 45.0, 3.0, "#7cb97c"),
                seed("5", "Suite E", 78.0, 15.0, "#d4a574"),
            ],
        }
    }
}

impl ScatterChartConfig {
    pub const MIN_POINTS: usize = 1;

    pub fn add_point(&mut self) {
        let color = SERIES_COLORS[self.points.len() % SERIES_COLORS.len()];
        self.points.push(ScatterPoint {
            id: next_id(),
            name: "New Point".to_string(),
            x: 50.0,
            y: 10.0,
            color: color.to_string(),
        });
    }

    pub fn remove_point(&mut self, id: &str) -> bool {
        if self.points.len() <= Self::MIN_POINTS {
            return false;
        }
        let before = self.points.len();
        self.points.retain(|p| p.id != id);
        self.points.len() < before
    }
}

// ---------------------------------------------------------------------------
// Workspace

/// The whole in-memory editing session: one config per chart type.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Workspace {
    pub line: LineChartConfig,
    pub area: AreaChartConfig,
    pub bar: BarChartConfig,
    pub grouped: GroupedBarConfig,
    pub multi: MultiBarConfig,
    pub stacked: StackedBarConfig,
    pub pie: PieChartConfig,
    pub scatter: ScatterChartConfig,
}

impl Workspace {
    /// Discard the selected chart's edits and restore its seeded defaults.
    pub fn reset(&mut self, kind: ChartKind) {
        match kind {
            ChartKind::Line => self.line = LineChartConfig::default(),
            ChartKind::Area => self.area = AreaChartConfig::default(),
            ChartKind::Bar => self.bar = BarChartConfig::default(),
            ChartKind::GroupedBar => self.grouped = GroupedBarConfig::default(),
            ChartKind::MultiBar => self.multi = MultiBarConfig::default(),
            ChartKind::StackedBar => self.stacked = StackedBarConfig::default(),
            ChartKind::Pie => self.pie = PieChartConfig::default(),
            ChartKind::Scatter => self.scatter = ScatterChartConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_remove_blocked_at_minimum() {
        let mut cfg = LineChartConfig::default();
        while cfg.points.len() > LineChartConfig::MIN_POINTS {
            let id = cfg.points[0].id.clone();
            assert!(cfg.remove_point(&id));
        }
        assert_eq!(cfg.points.len(), 2);
        let id = cfg.points[0].id.clone();
        assert!(!cfg.remove_point(&id));
        assert_eq!(cfg.points.len(), 2);
    }

    #[test]
    fn pie_remove_blocked_at_single_point() {
        let mut cfg = PieChartConfig::default();
        while cfg.points.len() > 1 {
            let id = cfg.points[0].id.clone();
            assert!(cfg.remove_point(&id));
        }
        let id = cfg.points[0].id.clone();
        assert!(!cfg.remove_point(&id));
        assert_eq!(cfg.points.len(), 1);
    }

    #[test]
    fn add_series_seeds_every_point() {
        let mut cfg = MultiBarConfig::default();
        cfg.add_series();
        let new_id = cfg.series.last().unwrap().id.clone();
        assert!(cfg
            .points
            .iter()
            .all(|p| p.values.get(&new_id) == Some(&MultiBarConfig::NEW_VALUE)));
    }

    #[test]
    fn remove_series_strips_keys_from_all_points() {
        let mut cfg = MultiBarConfig::default();
        assert!(cfg.remove_series("s2"));
        assert!(cfg.series.iter().all(|s| s.id != "s2"));
        assert!(cfg.points.iter().all(|p| !p.values.contains_key("s2")));
        // Remaining keys untouched.
        assert!(cfg.points.iter().all(|p| p.values.contains_key("s1")));
    }

    #[test]
    fn stacked_remove_series_also_strips_keys() {
        let mut cfg = StackedBarConfig::default();
        assert!(cfg.remove_series("s3"));
        assert!(cfg.points.iter().all(|p| !p.values.contains_key("s3")));
    }

    #[test]
    fn last_series_cannot_be_removed() {
        let mut cfg = MultiBarConfig::default();
        assert!(cfg.remove_series("s1"));
        assert!(cfg.remove_series("s2"));
        assert!(!cfg.remove_series("s3"));
        assert_eq!(cfg.series.len(), 1);
    }

    #[test]
    fn new_point_carries_value_for_every_series() {
        let mut cfg = StackedBarConfig::default();
        cfg.add_point();
        let p = cfg.points.last().unwrap();
        assert_eq!(p.values.len(), cfg.series.len());
        assert!(p
            .values
            .values()
            .all(|v| *v == StackedBarConfig::NEW_VALUE));
    }

    #[test]
    fn added_points_get_distinct_ids() {
        let mut cfg = ScatterChartConfig::default();
        cfg.add_point();
        cfg.add_point();
        let n = cfg.points.len();
        assert_ne!(cfg.points[n - 1].id, cfg.points[n - 2].id);
    }

    #[test]
    fn area_add_point_continues_year_sequence() {
        let mut cfg = AreaChartConfig::default();
        cfg.add_point();
        assert_eq!(cfg.points.last().unwrap().label, "2030");
    }

    #[test]
    fn reset_restores_seed_data() {
        let mut ws = Workspace::default();
        ws.pie.title = "edited".to_string();
        ws.pie.points.clear();
        ws.pie.points.push(PiePoint {
            id: "x".to_string(),
            name: "only".to_string(),
            value: 1.0,
            color: "#000000".to_string(),
        });
        ws.reset(ChartKind::Pie);
        assert_eq!(ws.pie.title, PieChartConfig::default().title);
        assert_eq!(ws.pie.points.len(), 4);
    }

    #[test]
    fn stack_totals_reflect_point_sums() {
        let cfg = StackedBarConfig::default();
        // Q3 is the tallest stack in the seed data.
        assert_eq!(cfg.max_stack(), 2000.0 + 9800.0 + 2290.0);
    }

    #[test]
    fn workspace_survives_a_serde_round_trip() {
        let mut ws = Workspace::default();
        ws.line.title = "edited title".to_string();
        ws.multi.add_series();
        let json = serde_json::to_string(&ws).unwrap();
        let back: Workspace = serde_json::from_str(&json).unwrap();
        assert_eq!(back.line.title, "edited title");
        assert_eq!(back.multi.series.len(), ws.multi.series.len());
        assert_eq!(back.stacked.points.len(), ws.stacked.points.len());
    }

    #[test]
    fn bar_color_follows_mode() {
        let mut cfg = BarChartConfig::default();
        cfg.points[0].color = "#112233".to_string();
        assert_eq!(cfg.bar_color(&cfg.points[0]), cfg.uniform_color.as_str());
        cfg.color_mode = ColorMode::Individual;
        assert_eq!(cfg.bar_color(&cfg.points[0]), "#112233");
    }
}
