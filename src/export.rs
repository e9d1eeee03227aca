//! Export Module
//! Saves the selected chart to disk as PNG or SVG through the native
//! save dialog. Render and IO failures bubble up so the panel can show
//! them in the status line.

use crate::charts::{ChartRef, RenderError, StaticChartRenderer};
use crate::model::ChartKind;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Svg,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
        }
    }

    fn filter_name(self) -> &'static str {
        match self {
            ExportFormat::Png => "PNG Image",
            ExportFormat::Svg => "SVG Image",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("could not write file: {0}")]
    Io(#[from] std::io::Error),
}

/// Suggested file name for the save dialog, per chart type.
pub fn default_file_name(kind: ChartKind, format: ExportFormat) -> String {
    format!("{}.{}", kind.export_base(), format.extension())
}

/// Render the chart and write it where the user chooses. Returns the
/// written path, or `None` when the dialog is cancelled.
pub fn export_chart(
    chart: &ChartRef,
    kind: ChartKind,
    format: ExportFormat,
) -> Result<Option<PathBuf>, ExportError> {
    let Some(path) = rfd::FileDialog::new()
        .add_filter(format.filter_name(), &[format.extension()])
        .set_file_name(default_file_name(kind, format))
        .save_file()
    else {
        return Ok(None);
    };

    match format {
        ExportFormat::Png => fs::write(&path, StaticChartRenderer::render_png(chart)?)?,
        ExportFormat::Svg => fs::write(&path, StaticChartRenderer::render_svg(chart)?)?,
    }
    log::info!("exported {} to {}", kind.label(), path.display());
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names_follow_chart_type() {
        assert_eq!(
            default_file_name(ChartKind::Line, ExportFormat::Png),
            "line-chart.png"
        );
        assert_eq!(
            default_file_name(ChartKind::GroupedBar, ExportFormat::Png),
            "grouped-bar-chart.png"
        );
        assert_eq!(
            default_file_name(ChartKind::MultiBar, ExportFormat::Svg),
            "multiple-chart.svg"
        );
        assert_eq!(
            default_file_name(ChartKind::StackedBar, ExportFormat::Svg),
            "stacked-bar.svg"
        );
    }

    #[test]
    fn every_chart_type_has_a_distinct_export_base() {
        let mut bases: Vec<&str> = ChartKind::ALL.iter().map(|k| k.export_base()).collect();
        bases.sort_unstable();
        bases.dedup();
        assert_eq!(bases.len(), ChartKind::ALL.len());
    }
}
