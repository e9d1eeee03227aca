//! Chartsmith Main Application
//! Main window with control panel and chart viewer.

use crate::charts::chart_ref;
use crate::export::{export_chart, ExportFormat};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::model::{ChartKind, Workspace};
use egui::SidePanel;

/// Main application window.
pub struct ChartsmithApp {
    workspace: Workspace,
    selected: ChartKind,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl ChartsmithApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            workspace: Workspace::default(),
            selected: ChartKind::Line,
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(),
        }
    }

    /// Render the selected chart and save it through the native dialog.
    /// Failures land in the status line instead of tearing the app down.
    fn handle_export(&mut self, format: ExportFormat) {
        let chart = chart_ref(&self.workspace, self.selected);
        match export_chart(&chart, self.selected, format) {
            Ok(Some(path)) => {
                self.control_panel
                    .set_status(&format!("Exported {}", path.display()));
                // Show the result in the system viewer.
                if let Err(e) = open::that(&path) {
                    log::warn!("could not open {}: {e}", path.display());
                }
            }
            Ok(None) => {} // dialog cancelled
            Err(e) => {
                log::error!("export failed: {e}");
                self.control_panel.set_status(&format!("Error: {e}"));
            }
        }
    }
}

impl eframe::App for ChartsmithApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        let mut action = ControlPanelAction::None;
        SidePanel::left("control_panel")
            .min_width(340.0)
            .max_width(400.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    action =
                        self.control_panel
                            .show(ui, &mut self.workspace, &mut self.selected);
                });
            });

        match action {
            ControlPanelAction::Reset => {
                self.workspace.reset(self.selected);
                self.control_panel
                    .set_status(&format!("{} restored to defaults", self.selected.label()));
            }
            ControlPanelAction::ExportPng => self.handle_export(ExportFormat::Png),
            ControlPanelAction::ExportSvg => self.handle_export(ExportFormat::Svg),
            ControlPanelAction::None => {}
        }

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            let chart = chart_ref(&self.workspace, self.selected);
            self.chart_viewer.show(ui, &chart, self.selected);
        });
    }
}
