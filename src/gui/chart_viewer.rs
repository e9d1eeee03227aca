//! Chart Viewer Widget
//! Central scrollable panel displaying the live preview of the selected
//! chart, drawn at its export aspect so what you see is what you save.

use crate::charts::{ChartPlotter, ChartRef};
use crate::model::ChartKind;
use egui::{RichText, ScrollArea};

const CARD_MARGIN: f32 = 16.0;

pub struct ChartViewer;

impl Default for ChartViewer {
    fn default() -> Self {
        Self
    }
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the preview card for the selected chart.
    pub fn show(&self, ui: &mut egui::Ui, chart: &ChartRef, kind: ChartKind) {
        ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(CARD_MARGIN);
                    ui.label(RichText::new(kind.label()).size(15.0).strong());
                    let (w, h) = kind.canvas_size();
                    ui.label(
                        RichText::new(format!("{:.0} x {:.0} preview, exports at 2x", w, h))
                            .size(11.0)
                            .color(egui::Color32::GRAY),
                    );
                    ui.add_space(CARD_MARGIN);

                    egui::Frame::none()
                        .rounding(8.0)
                        .fill(ui.visuals().widgets.noninteractive.bg_fill)
                        .inner_margin(CARD_MARGIN)
                        .show(ui, |ui| {
                            ChartPlotter::draw(ui, chart);
                        });
                });
            });
    }
}
