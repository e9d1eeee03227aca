//! Control Panel Widget
//! Left side panel with the chart type selector and the form controls for
//! whichever chart is being edited. Widgets mutate the workspace directly;
//! only reset and export bubble up as actions.

use crate::color::{parse_hex, to_color32};
use crate::model::{
    AreaChartConfig, BarChartConfig, ChartKind, ColorMode, GroupedBarConfig, LineChartConfig,
    MultiBarConfig, PieChartConfig, ScatterChartConfig, StackedBarConfig, Workspace,
};
use egui::{Color32, ComboBox, DragValue, RichText, Slider};

/// Actions triggered by control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPanelAction {
    None,
    Reset,
    ExportPng,
    ExportSvg,
}

/// Left side control panel with chart configuration forms.
pub struct ControlPanel {
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            status: "Ready".to_string(),
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the control panel
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        workspace: &mut Workspace,
        selected: &mut ChartKind,
    ) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 Chartsmith")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Chart Authoring Studio")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Chart Type Section =====
        ui.label(RichText::new("📈 Chart Type").size(14.0).strong());
        ui.add_space(5.0);
        ComboBox::from_id_salt("chart_kind")
            .width(200.0)
            .selected_text(selected.label())
            .show_ui(ui, |ui| {
                for kind in ChartKind::ALL {
                    ui.selectable_value(selected, kind, kind.label());
                }
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Configuration Section =====
        match selected {
            ChartKind::Line => Self::line_editor(ui, &mut workspace.line),
            ChartKind::Area => Self::area_editor(ui, &mut workspace.area),
            ChartKind::Bar => Self::bar_editor(ui, &mut workspace.bar),
            ChartKind::GroupedBar => Self::grouped_editor(ui, &mut workspace.grouped),
            ChartKind::MultiBar => Self::multi_editor(ui, &mut workspace.multi),
            ChartKind::StackedBar => Self::stacked_editor(ui, &mut workspace.stacked),
            ChartKind::Pie => Self::pie_editor(ui, &mut workspace.pie),
            ChartKind::Scatter => Self::scatter_editor(ui, &mut workspace.scatter),
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            let export_png = egui::Button::new(RichText::new("💾 Export PNG").size(15.0))
                .min_size(egui::vec2(200.0, 32.0));
            if ui.add(export_png).clicked() {
                action = ControlPanelAction::ExportPng;
            }
            ui.add_space(6.0);
            let export_svg = egui::Button::new(RichText::new("💾 Export SVG").size(15.0))
                .min_size(egui::vec2(200.0, 32.0));
            if ui.add(export_svg).clicked() {
                action = ControlPanelAction::ExportSvg;
            }
            ui.add_space(6.0);
            if ui.button("↺ Reset to Defaults").clicked() {
                action = ControlPanelAction::Reset;
            }
        });

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Status =====
        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    // -- Shared field helpers -------------------------------------------------

    fn section(ui: &mut egui::Ui, title: &str) {
        ui.add_space(8.0);
        ui.label(RichText::new(title).size(13.0).strong());
        ui.add_space(4.0);
    }

    fn text_field(ui: &mut egui::Ui, label: &str, value: &mut String) {
        ui.horizontal(|ui| {
            ui.add_sized([110.0, 20.0], egui::Label::new(label));
            ui.add(egui::TextEdit::singleline(value).desired_width(170.0));
        });
    }

    /// Hex text input plus a color swatch picker kept in sync with it.
    fn color_field(ui: &mut egui::Ui, label: &str, hex: &mut String) {
        ui.horizontal(|ui| {
            ui.add_sized([110.0, 20.0], egui::Label::new(label));
            ui.add(egui::TextEdit::singleline(hex).desired_width(80.0));
            let mut color = to_color32(hex);
            if ui.color_edit_button_srgba(&mut color).changed() {
                *hex = format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b());
            }
            if parse_hex(hex).is_none() {
                ui.label(RichText::new("invalid").size(10.0).color(Color32::GRAY));
            }
        });
    }

    fn value_field(ui: &mut egui::Ui, label: &str, value: &mut f64) {
        ui.horizontal(|ui| {
            ui.add_sized([110.0, 20.0], egui::Label::new(label));
            ui.add(DragValue::new(value).speed(0.5));
        });
    }

    fn remove_button(ui: &mut egui::Ui, enabled: bool) -> bool {
        ui.add_enabled(enabled, egui::Button::new("✖").small())
            .clicked()
    }

    // -- Per-chart editors ----------------------------------------------------

    fn line_editor(ui: &mut egui::Ui, cfg: &mut LineChartConfig) {
        Self::section(ui, "🔧 Appearance");
        Self::text_field(ui, "Title:", &mut cfg.title);
        Self::color_field(ui, "Line Color:", &mut cfg.line_color);
        Self::color_field(ui, "Point Color:", &mut cfg.point_color);
        Self::color_field(ui, "Background:", &mut cfg.background_color);
        Self::color_field(ui, "Border:", &mut cfg.border_color);
        Self::color_field(ui, "Text:", &mut cfg.text_color);
        ui.add(Slider::new(&mut cfg.line_width, 1.0..=10.0).text("Line Width"));
        ui.add(Slider::new(&mut cfg.point_size, 2.0..=20.0).text("Point Size"));

        Self::section(ui, "💬 Annotations");
        ui.checkbox(&mut cfg.show_annotations, "Show annotations");
        Self::color_field(ui, "Bubble Bg:", &mut cfg.annotation_bg_color);
        Self::color_field(ui, "Bubble Text:", &mut cfg.annotation_text_color);

        Self::section(ui, "📋 Data Points");
        let removable = cfg.points.len() > LineChartConfig::MIN_POINTS;
        let mut remove = None;
        for point in &mut cfg.points {
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut point.label).desired_width(70.0));
                ui.add(DragValue::new(&mut point.value).speed(0.5));
                ui.add(egui::TextEdit::singleline(&mut point.annotation).desired_width(110.0));
                if Self::remove_button(ui, removable) {
                    remove = Some(point.id.clone());
                }
            });
        }
        if let Some(id) = remove {
            cfg.remove_point(&id);
        }
        if ui.button("＋ Add Point").clicked() {
            cfg.add_point();
        }
    }

    fn area_editor(ui: &mut egui::Ui, cfg: &mut AreaChartConfig) {
        Self::section(ui, "🔧 Appearance");
        Self::text_field(ui, "Title:", &mut cfg.title);
        Self::text_field(ui, "X Axis Label:", &mut cfg.x_axis_label);
        Self::text_field(ui, "Y Axis Label:", &mut cfg.y_axis_label);
        Self::color_field(ui, "Line Color:", &mut cfg.line_color);
        Self::color_field(ui, "Fill Color:", &mut cfg.fill_color);
        Self::color_field(ui, "Point Color:", &mut cfg.point_color);
        Self::color_field(ui, "Background:", &mut cfg.background_color);
        Self::color_field(ui, "Grid:", &mut cfg.grid_color);
        Self::color_field(ui, "Labels:", &mut cfg.label_color);
        ui.add(Slider::new(&mut cfg.line_width, 1.0..=10.0).text("Line Width"));
        ui.add(Slider::new(&mut cfg.point_radius, 2.0..=16.0).text("Point Radius"));
        Self::value_field(ui, "Y Axis Max:", &mut cfg.y_axis_max);
        Self::value_field(ui, "Y Axis Step:", &mut cfg.y_axis_step);

        Self::section(ui, "📋 Data Points");
        let removable = cfg.points.len() > AreaChartConfig::MIN_POINTS;
        let mut remove = None;
        for point in &mut cfg.points {
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut point.label).desired_width(60.0));
                ui.add(DragValue::new(&mut point.value).speed(0.5));
                ui.add(egui::TextEdit::singleline(&mut point.display_value).desired_width(60.0));
                if Self::remove_button(ui, removable) {
                    remove = Some(point.id.clone());
                }
            });
        }
        if let Some(id) = remove {
            cfg.remove_point(&id);
        }
        if ui.button("＋ Add Point").clicked() {
            cfg.add_point();
        }
    }

    fn bar_editor(ui: &mut egui::Ui, cfg: &mut BarChartConfig) {
        Self::section(ui, "🔧 Appearance");
        Self::text_field(ui, "Title:", &mut cfg.title);
        Self::text_field(ui, "Legend:", &mut cfg.legend_label);
        Self::text_field(ui, "Value Suffix:", &mut cfg.value_format);
        Self::color_field(ui, "Background:", &mut cfg.background_color);
        Self::color_field(ui, "Border:", &mut cfg.border_color);
        Self::color_field(ui, "Text:", &mut cfg.text_color);

        Self::section(ui, "🎨 Bar Colors");
        ui.horizontal(|ui| {
            ui.radio_value(&mut cfg.color_mode, ColorMode::Uniform, "Uniform");
            ui.radio_value(&mut cfg.color_mode, ColorMode::Individual, "Per Bar");
        });
        if cfg.color_mode == ColorMode::Uniform {
            Self::color_field(ui, "Bar Color:", &mut cfg.uniform_color);
        }

        Self::section(ui, "📋 Data Points");
        let removable = cfg.points.len() > BarChartConfig::MIN_POINTS;
        let individual = cfg.color_mode == ColorMode::Individual;
        let mut remove = None;
        for point in &mut cfg.points {
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut point.label).desired_width(70.0));
                ui.add(DragValue::new(&mut point.value).speed(0.5));
                if individual {
                    let mut color = to_color32(&point.color);
                    if ui.color_edit_button_srgba(&mut color).changed() {
                        point.color =
                            format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b());
                    }
                }
                if Self::remove_button(ui, removable) {
                    remove = Some(point.id.clone());
                }
            });
        }
        if let Some(id) = remove {
            cfg.remove_point(&id);
        }
        if ui.button("＋ Add Point").clicked() {
            cfg.add_point();
        }
    }

    fn grouped_editor(ui: &mut egui::Ui, cfg: &mut GroupedBarConfig) {
        Self::section(ui, "🔧 Appearance");
        Self::text_field(ui, "Title:", &mut cfg.title);
        Self::text_field(ui, "X Axis Label:", &mut cfg.x_axis_label);
        Self::text_field(ui, "Legend 1:", &mut cfg.legend1);
        Self::text_field(ui, "Legend 2:", &mut cfg.legend2);
        Self::color_field(ui, "Bar 1 Color:", &mut cfg.bar1_color);
        Self::color_field(ui, "Bar 2 Color:", &mut cfg.bar2_color);
        Self::color_field(ui, "Background:", &mut cfg.background_color);
        Self::color_field(ui, "Text:", &mut cfg.text_color);
        ui.checkbox(&mut cfg.show_percentage_change, "Show % change");

        Self::section(ui, "📋 Data Points");
        let removable = cfg.points.len() > GroupedBarConfig::MIN_POINTS;
        let mut remove = None;
        for point in &mut cfg.points {
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut point.label).desired_width(100.0));
                ui.add(DragValue::new(&mut point.value1).speed(1.0));
                ui.add(DragValue::new(&mut point.value2).speed(1.0));
                if Self::remove_button(ui, removable) {
                    remove = Some(point.id.clone());
                }
            });
        }
        if let Some(id) = remove {
            cfg.remove_point(&id);
        }
        if ui.button("＋ Add Point").clicked() {
            cfg.add_point();
        }
    }

    fn multi_editor(ui: &mut egui::Ui, cfg: &mut MultiBarConfig) {
        Self::section(ui, "🔧 Appearance");
        Self::text_field(ui, "Title:", &mut cfg.title);
        Self::text_field(ui, "X Axis Label:", &mut cfg.x_axis_label);
        Self::color_field(ui, "Background:", &mut cfg.background_color);
        Self::color_field(ui, "Text:", &mut cfg.text_color);

        if let Some(id) =
            Self::series_editor(ui, "multi", &mut cfg.series, MultiBarConfig::MIN_SERIES)
        {
            cfg.remove_series(&id);
        }
        if ui.button("＋ Add Series").clicked() {
            cfg.add_series();
        }

        Self::section(ui, "📋 Data Points");
        let removable = cfg.points.len() > MultiBarConfig::MIN_POINTS;
        let mut remove = None;
        for point in &mut cfg.points {
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut point.label).desired_width(70.0));
                for series in &cfg.series {
                    if let Some(value) = point.values.get_mut(&series.id) {
                        ui.add(DragValue::new(value).speed(1.0));
                    }
                }
                if Self::remove_button(ui, removable) {
                    remove = Some(point.id.clone());
                }
            });
        }
        if let Some(id) = remove {
            cfg.remove_point(&id);
        }
        if ui.button("＋ Add Point").clicked() {
            cfg.add_point();
        }
    }

    fn stacked_editor(ui: &mut egui::Ui, cfg: &mut StackedBarConfig) {
        Self::section(ui, "🔧 Appearance");
        Self::text_field(ui, "Title:", &mut cfg.title);
        Self::text_field(ui, "X Axis Label:", &mut cfg.x_axis_label);
        Self::text_field(ui, "Y Axis Label:", &mut cfg.y_axis_label);
        Self::color_field(ui, "Background:", &mut cfg.background_color);
        Self::color_field(ui, "Text:", &mut cfg.text_color);

        if let Some(id) =
            Self::series_editor(ui, "stacked", &mut cfg.series, StackedBarConfig::MIN_SERIES)
        {
            cfg.remove_series(&id);
        }
        if ui.button("＋ Add Segment").clicked() {
            cfg.add_series();
        }

        Self::section(ui, "📋 Data Points");
        let removable = cfg.points.len() > StackedBarConfig::MIN_POINTS;
        let mut remove = None;
        for point in &mut cfg.points {
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut point.label).desired_width(60.0));
                for series in &cfg.series {
                    if let Some(value) = point.values.get_mut(&series.id) {
                        ui.add(DragValue::new(value).speed(10.0));
                    }
                }
                if Self::remove_button(ui, removable) {
                    remove = Some(point.id.clone());
                }
            });
        }
        if let Some(id) = remove {
            cfg.remove_point(&id);
        }
        if ui.button("＋ Add Point").clicked() {
            cfg.add_point();
        }
    }

    /// Shared series list editor for the multi-series bar charts. Returns
    /// the id of a series the user asked to remove; the caller routes it
    /// through the config's `remove_series` so the key-stripping invariant
    /// lives in one place.
    fn series_editor(
        ui: &mut egui::Ui,
        id_salt: &str,
        series: &mut [crate::model::ChartSeries],
        min_series: usize,
    ) -> Option<String> {
        Self::section(ui, "📚 Series");
        let removable = series.len() > min_series;
        let mut remove = None;
        for (i, s) in series.iter_mut().enumerate() {
            ui.push_id((id_salt, i), |ui| {
                ui.horizontal(|ui| {
                    ui.add(egui::TextEdit::singleline(&mut s.name).desired_width(110.0));
                    let mut color = to_color32(&s.color);
                    if ui.color_edit_button_srgba(&mut color).changed() {
                        s.color = format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b());
                    }
                    if Self::remove_button(ui, removable) {
                        remove = Some(s.id.clone());
                    }
                });
            });
        }
        remove
    }

    fn pie_editor(ui: &mut egui::Ui, cfg: &mut PieChartConfig) {
        Self::section(ui, "🔧 Appearance");
        Self::text_field(ui, "Title:", &mut cfg.title);
        Self::color_field(ui, "Background:", &mut cfg.background_color);
        Self::color_field(ui, "Text:", &mut cfg.text_color);
        ui.checkbox(&mut cfg.is_donut, "Donut style");

        Self::section(ui, "📋 Categories");
        let removable = cfg.points.len() > PieChartConfig::MIN_POINTS;
        let mut remove = None;
        for point in &mut cfg.points {
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut point.name).desired_width(90.0));
                ui.add(DragValue::new(&mut point.value).speed(0.5));
                let mut color = to_color32(&point.color);
                if ui.color_edit_button_srgba(&mut color).changed() {
                    point.color = format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b());
                }
                if Self::remove_button(ui, removable) {
                    remove = Some(point.id.clone());
                }
            });
        }
        if let Some(id) = remove {
            cfg.remove_point(&id);
        }
        if ui.button("＋ Add Category").clicked() {
            cfg.add_point();
        }
    }

    fn scatter_editor(ui: &mut egui::Ui, cfg: &mut ScatterChartConfig) {
        Self::section(ui, "🔧 Appearance");
        Self::text_field(ui, "Title:", &mut cfg.title);
        Self::text_field(ui, "X Axis Label:", &mut cfg.x_axis_label);
        Self::text_field(ui, "Y Axis Label:", &mut cfg.y_axis_label);
        Self::color_field(ui, "Background:", &mut cfg.background_color);
        Self::color_field(ui, "Text:", &mut cfg.text_color);

        Self::section(ui, "📋 Data Points");
        let removable = cfg.points.len() > ScatterChartConfig::MIN_POINTS;
        let mut remove = None;
        for point in &mut cfg.points {
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut point.name).desired_width(80.0));
                ui.add(DragValue::new(&mut point.x).speed(0.5).prefix("x "));
                ui.add(DragValue::new(&mut point.y).speed(0.5).prefix("y "));
                let mut color = to_color32(&point.color);
                if ui.color_edit_button_srgba(&mut color).changed() {
                    point.color = format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b());
                }
                if Self::remove_button(ui, removable) {
                    remove = Some(point.id.clone());
                }
            });
        }
        if let Some(id) = remove {
            cfg.remove_point(&id);
        }
        if ui.button("＋ Add Point").clicked() {
            cfg.add_point();
        }
    }
}
