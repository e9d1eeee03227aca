//! Charts module - live egui previews and static plotters rendering

mod plotter;
mod renderer;

pub use plotter::ChartPlotter;
pub use renderer::{RenderError, StaticChartRenderer};

use crate::model::{
    AreaChartConfig, BarChartConfig, ChartKind, GroupedBarConfig, LineChartConfig, MultiBarConfig,
    PieChartConfig, ScatterChartConfig, StackedBarConfig, Workspace,
};

/// Borrowed view of whichever chart config is selected, so the preview
/// and export paths dispatch once instead of matching on `ChartKind`
/// everywhere.
pub enum ChartRef<'a> {
    Line(&'a LineChartConfig),
    Area(&'a AreaChartConfig),
    Bar(&'a BarChartConfig),
    GroupedBar(&'a GroupedBarConfig),
    MultiBar(&'a MultiBarConfig),
    StackedBar(&'a StackedBarConfig),
    Pie(&'a PieChartConfig),
    Scatter(&'a ScatterChartConfig),
}

pub fn chart_ref(workspace: &Workspace, kind: ChartKind) -> ChartRef<'_> {
    match kind {
        ChartKind::Line => ChartRef::Line(&workspace.line),
        ChartKind::Area => ChartRef::Area(&workspace.area),
        ChartKind::Bar => ChartRef::Bar(&workspace.bar),
        ChartKind::GroupedBar => ChartRef::GroupedBar(&workspace.grouped),
        ChartKind::MultiBar => ChartRef::MultiBar(&workspace.multi),
        ChartKind::StackedBar => ChartRef::StackedBar(&workspace.stacked),
        ChartKind::Pie => ChartRef::Pie(&workspace.pie),
        ChartKind::Scatter => ChartRef::Scatter(&workspace.scatter),
    }
}
