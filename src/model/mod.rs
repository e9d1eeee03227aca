//! Model module - chart configurations and their editing operations

mod config;

pub use config::{
    AreaChartConfig, AreaPoint, BarChartConfig, BarPoint, ChartSeries, ColorMode, GroupedBarConfig,
    GroupedPoint, LineChartConfig, LinePoint, MultiBarConfig, PieChartConfig, PiePoint,
    ScatterChartConfig, ScatterPoint, SeriesPoint, StackedBarConfig, Workspace,
};

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// The chart types the studio can author.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Line,
    Area,
    Bar,
    GroupedBar,
    MultiBar,
    StackedBar,
    Pie,
    Scatter,
}

impl ChartKind {
    pub const ALL: [ChartKind; 8] = [
        ChartKind::Line,
        ChartKind::Area,
        ChartKind::Bar,
        ChartKind::GroupedBar,
        ChartKind::MultiBar,
        ChartKind::StackedBar,
        ChartKind::Pie,
        ChartKind::Scatter,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Line => "Line Chart",
            ChartKind::Area => "Area Chart",
            ChartKind::Bar => "Bar Chart",
            ChartKind::GroupedBar => "Grouped Bar Chart",
            ChartKind::MultiBar => "Multiple Bar Chart",
            ChartKind::StackedBar => "Stacked Bar Chart",
            ChartKind::Pie => "Pie Chart",
            ChartKind::Scatter => "Scatter Chart",
        }
    }

    /// Fixed base name for exported files (extension appended per format).
    pub fn export_base(&self) -> &'static str {
        match self {
            ChartKind::Line => "line-chart",
            ChartKind::Area => "area-chart",
            ChartKind::Bar => "single-bar-chart",
            ChartKind::GroupedBar => "grouped-bar-chart",
            ChartKind::MultiBar => "multiple-chart",
            ChartKind::StackedBar => "stacked-bar",
            ChartKind::Pie => "pie-chart",
            ChartKind::Scatter => "scatter-chart",
        }
    }

    /// Logical canvas size for preview; exports render at twice this.
    pub fn canvas_size(&self) -> (f32, f32) {
        match self {
            ChartKind::Line => (700.0, 420.0),
            ChartKind::Area => (900.0, 450.0),
            ChartKind::Bar => (760.0, 420.0),
            ChartKind::GroupedBar => (760.0, 420.0),
            ChartKind::MultiBar => (800.0, 440.0),
            ChartKind::StackedBar => (800.0, 450.0),
            ChartKind::Pie => (620.0, 460.0),
            ChartKind::Scatter => (700.0, 450.0),
        }
    }
}

static ID_TIEBREAK: AtomicU64 = AtomicU64::new(0);

/// Timestamp-based point/series id, kept distinct by an atomic counter so
/// rapid successive adds within one millisecond never collide.
pub fn next_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let n = ID_TIEBREAK.fetch_add(1, Ordering::Relaxed);
    format!("{millis}-{n}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_in_practice() {
        let a = next_id();
        let b = next_id();
        let c = next_id();
        assert_ne!(a, b);
        assert_ne!(b, c);
    }
}
