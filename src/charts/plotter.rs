//! Chart Plotter Module
//! Paints the live previews. Most chart types are drawn with the raw egui
//! painter so the preview matches the static export geometry; scatter and
//! stacked bars go through egui_plot, which already does axes and stacking.

use crate::color::{darken, to_color32};
use crate::layout::{axis_max, bar_height, percent_change, pie_slices, ticks, x_at, y_at, PlotArea};
use crate::model::{
    AreaChartConfig, BarChartConfig, ChartKind, GroupedBarConfig, LineChartConfig, MultiBarConfig,
    PieChartConfig, ScatterChartConfig, StackedBarConfig,
};
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};
use egui_plot::{Bar, BarChart, Legend, Plot, Points};

use super::ChartRef;

const TITLE_FONT: f32 = 17.0;
const LABEL_FONT: f32 = 12.0;
const SMALL_FONT: f32 = 10.5;

/// Draws the selected chart preview into the viewer panel.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn draw(ui: &mut egui::Ui, chart: &ChartRef) {
        match chart {
            ChartRef::Line(cfg) => Self::draw_line(ui, cfg),
            ChartRef::Area(cfg) => Self::draw_area(ui, cfg),
            ChartRef::Bar(cfg) => Self::draw_bar(ui, cfg),
            ChartRef::GroupedBar(cfg) => Self::draw_grouped(ui, cfg),
            ChartRef::MultiBar(cfg) => Self::draw_multi(ui, cfg),
            ChartRef::StackedBar(cfg) => Self::draw_stacked(ui, cfg),
            ChartRef::Pie(cfg) => Self::draw_pie(ui, cfg),
            ChartRef::Scatter(cfg) => Self::draw_scatter(ui, cfg),
        }
    }

    /// Allocate the chart canvas and paint its background card.
    fn canvas(
        ui: &mut egui::Ui,
        kind: ChartKind,
        bg: &str,
        border: &str,
    ) -> (egui::Painter, Rect) {
        let (w, h) = kind.canvas_size();
        let (response, painter) = ui.allocate_painter(Vec2::new(w, h), Sense::hover());
        let rect = response.rect;
        painter.rect_filled(rect, 8.0, to_color32(bg));
        painter.rect_stroke(rect, 8.0, Stroke::new(1.0, to_color32(border)));
        (painter, rect)
    }

    fn title(painter: &egui::Painter, rect: Rect, text: &str, color: &str) {
        painter.text(
            Pos2::new(rect.center().x, rect.top() + 26.0),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(TITLE_FONT),
            to_color32(color),
        );
    }

    /// Horizontal dashed grid line at a tick, with its value label on the left.
    fn grid_line(
        painter: &egui::Painter,
        rect: Rect,
        area: &PlotArea,
        y: f32,
        label: &str,
        grid: Color32,
        text: Color32,
    ) {
        let left = rect.left() + area.pad_left;
        let right = rect.left() + area.width - area.pad_right;
        painter.extend(Shape::dashed_line(
            &[Pos2::new(left, y), Pos2::new(right, y)],
            Stroke::new(1.0, grid),
            4.0,
            4.0,
        ));
        painter.text(
            Pos2::new(left - 8.0, y),
            Align2::RIGHT_CENTER,
            label,
            FontId::proportional(SMALL_FONT),
            text,
        );
    }

    // -- Line ---------------------------------------------------------------

    fn draw_line(ui: &mut egui::Ui, cfg: &LineChartConfig) {
        let (painter, rect) =
            Self::canvas(ui, ChartKind::Line, &cfg.background_color, &cfg.border_color);
        Self::title(&painter, rect, &cfg.title, &cfg.text_color);

        let area = PlotArea::new(700.0, 380.0, 50.0, 50.0, 80.0, 50.0);
        let origin = Pos2::new(rect.left(), rect.top() + 40.0);
        let max = axis_max(cfg.max_value(), 5.0);
        let text = to_color32(&cfg.text_color);
        let grid = to_color32(&cfg.border_color);

        for tick in ticks(max, 5.0) {
            let y = origin.y + y_at(tick, max, &area);
            Self::grid_line(&painter, rect, &area, y, &format!("{tick:.0}"), grid, text);
        }

        let n = cfg.points.len();
        let positions: Vec<Pos2> = cfg
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                Pos2::new(
                    origin.x + x_at(i, n, &area),
                    origin.y + y_at(p.value, max, &area),
                )
            })
            .collect();

        if positions.len() > 1 {
            painter.add(Shape::line(
                positions.clone(),
                Stroke::new(cfg.line_width, to_color32(&cfg.line_color)),
            ));
        }

        let point_color = to_color32(&cfg.point_color);
        for (point, pos) in cfg.points.iter().zip(&positions) {
            painter.circle_filled(*pos, cfg.point_size / 2.0, point_color);
            painter.text(
                Pos2::new(pos.x, origin.y + area.baseline() + 16.0),
                Align2::CENTER_CENTER,
                &point.label,
                FontId::proportional(LABEL_FONT),
                text,
            );
            if cfg.show_annotations && !point.annotation.is_empty() {
                Self::annotation_bubble(&painter, *pos, point, cfg);
            }
        }
    }

    fn annotation_bubble(
        painter: &egui::Painter,
        pos: Pos2,
        point: &crate::model::LinePoint,
        cfg: &LineChartConfig,
    ) {
        let galley = painter.layout_no_wrap(
            point.annotation.clone(),
            FontId::proportional(SMALL_FONT),
            to_color32(&cfg.annotation_text_color),
        );
        let size = galley.size() + Vec2::new(12.0, 8.0);
        let bubble = Rect::from_center_size(pos - Vec2::new(0.0, 26.0), size);
        painter.rect_filled(bubble, 4.0, to_color32(&cfg.annotation_bg_color));
        painter.rect_stroke(bubble, 4.0, Stroke::new(1.0, to_color32(&cfg.border_color)));
        painter.galley(
            bubble.min + Vec2::new(6.0, 4.0),
            galley,
            to_color32(&cfg.annotation_text_color),
        );
    }

    // -- Area ---------------------------------------------------------------

    fn draw_area(ui: &mut egui::Ui, cfg: &AreaChartConfig) {
        let (painter, rect) =
            Self::canvas(ui, ChartKind::Area, &cfg.background_color, &cfg.grid_color);
        Self::title(&painter, rect, &cfg.title, &cfg.text_color);

        let area = PlotArea::new(900.0, 450.0, 80.0, 100.0, 80.0, 60.0);
        let origin = rect.min.to_vec2();
        let max = cfg.y_axis_max;
        let label_color = to_color32(&cfg.label_color);
        let grid = to_color32(&cfg.grid_color);

        for tick in ticks(max, cfg.y_axis_step) {
            let y = origin.y + y_at(tick, max, &area);
            Self::grid_line(
                &painter,
                rect,
                &area,
                y,
                &format!("{tick:.0}"),
                grid,
                label_color,
            );
        }

        let n = cfg.points.len();
        let positions: Vec<Pos2> = cfg
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                Pos2::new(
                    origin.x + x_at(i, n, &area),
                    origin.y + y_at(p.value, max, &area),
                )
            })
            .collect();

        // Fill under the curve, one trapezoid per segment so the shape
        // stays convex for the tessellator.
        let baseline = origin.y + area.baseline();
        let fill = to_color32(&cfg.fill_color).gamma_multiply(0.25);
        for pair in positions.windows(2) {
            painter.add(Shape::convex_polygon(
                vec![
                    pair[0],
                    pair[1],
                    Pos2::new(pair[1].x, baseline),
                    Pos2::new(pair[0].x, baseline),
                ],
                fill,
                Stroke::NONE,
            ));
        }

        if positions.len() > 1 {
            painter.add(Shape::line(
                positions.clone(),
                Stroke::new(cfg.line_width, to_color32(&cfg.line_color)),
            ));
        }

        let point_color = to_color32(&cfg.point_color);
        for (point, pos) in cfg.points.iter().zip(&positions) {
            painter.circle_filled(*pos, cfg.point_radius / 2.0, point_color);
            painter.text(
                *pos - Vec2::new(0.0, 14.0),
                Align2::CENTER_CENTER,
                &point.display_value,
                FontId::proportional(SMALL_FONT),
                label_color,
            );
            painter.text(
                Pos2::new(pos.x, baseline + 16.0),
                Align2::CENTER_CENTER,
                &point.label,
                FontId::proportional(LABEL_FONT),
                label_color,
            );
        }

        painter.text(
            Pos2::new(rect.center().x, rect.bottom() - 14.0),
            Align2::CENTER_CENTER,
            &cfg.x_axis_label,
            FontId::proportional(LABEL_FONT),
            label_color,
        );
        painter.text(
            Pos2::new(rect.left() + 18.0, rect.top() + 50.0),
            Align2::LEFT_CENTER,
            &cfg.y_axis_label,
            FontId::proportional(LABEL_FONT),
            label_color,
        );
    }

    // -- Single bar ---------------------------------------------------------

    fn draw_bar(ui: &mut egui::Ui, cfg: &BarChartConfig) {
        let (painter, rect) =
            Self::canvas(ui, ChartKind::Bar, &cfg.background_color, &cfg.border_color);
        Self::title(&painter, rect, &cfg.title, &cfg.text_color);

        let area = PlotArea::new(760.0, 400.0, 60.0, 30.0, 70.0, 60.0);
        let origin = rect.min.to_vec2();
        let max = axis_max(cfg.max_value(), 10.0);
        let text = to_color32(&cfg.text_color);
        let grid = to_color32(&cfg.border_color);

        for tick in ticks(max, 10.0) {
            let y = origin.y + y_at(tick, max, &area);
            Self::grid_line(&painter, rect, &area, y, &format!("{tick:.0}"), grid, text);
        }

        let n = cfg.points.len();
        let slot = area.plot_width() / n as f32;
        let bar_w = (slot * 0.6).min(64.0);
        let baseline = origin.y + area.baseline();

        for (i, point) in cfg.points.iter().enumerate() {
            let h = bar_height(point.value, max, 270.0, 4.0);
            let cx = origin.x + area.pad_left + slot * (i as f32 + 0.5);
            let bar = Rect::from_min_max(
                Pos2::new(cx - bar_w / 2.0, baseline - h),
                Pos2::new(cx + bar_w / 2.0, baseline),
            );
            let color = cfg.bar_color(point);
            painter.rect_filled(bar, 3.0, to_color32(color));
            painter.rect_stroke(bar, 3.0, Stroke::new(1.0, to_color32(&darken(color, 20.0))));
            painter.text(
                bar.center_top() - Vec2::new(0.0, 10.0),
                Align2::CENTER_CENTER,
                format!("{}{}", point.value, cfg.value_format),
                FontId::proportional(SMALL_FONT),
                text,
            );
            painter.text(
                Pos2::new(cx, baseline + 16.0),
                Align2::CENTER_CENTER,
                &point.label,
                FontId::proportional(LABEL_FONT),
                text,
            );
        }

        Self::legend_row(
            &painter,
            Pos2::new(rect.center().x, rect.bottom() - 16.0),
            &[(cfg.legend_label.as_str(), to_color32(&cfg.uniform_color))],
            text,
        );
    }

    // -- Grouped bars (two fixed series) ------------------------------------

    fn draw_grouped(ui: &mut egui::Ui, cfg: &GroupedBarConfig) {
        let (painter, rect) = Self::canvas(
            ui,
            ChartKind::GroupedBar,
            &cfg.background_color,
            &cfg.border_color,
        );
        Self::title(&painter, rect, &cfg.title, &cfg.text_color);

        let area = PlotArea::new(760.0, 400.0, 40.0, 30.0, 90.0, 70.0);
        let origin = rect.min.to_vec2();
        let max = cfg.max_value();
        let text = to_color32(&cfg.text_color);
        let baseline = origin.y + area.baseline();

        let n = cfg.points.len();
        let slot = area.plot_width() / n as f32;
        let bar_w = (slot * 0.28).min(40.0);
        let color1 = to_color32(&cfg.bar1_color);
        let color2 = to_color32(&cfg.bar2_color);

        for (i, point) in cfg.points.iter().enumerate() {
            let cx = origin.x + area.pad_left + slot * (i as f32 + 0.5);
            let h1 = bar_height(point.value1, max, 230.0, 1.0);
            let h2 = bar_height(point.value2, max, 230.0, 1.0);
            let bar1 = Rect::from_min_max(
                Pos2::new(cx - bar_w - 2.0, baseline - h1),
                Pos2::new(cx - 2.0, baseline),
            );
            let bar2 = Rect::from_min_max(
                Pos2::new(cx + 2.0, baseline - h2),
                Pos2::new(cx + bar_w + 2.0, baseline),
            );
            painter.rect_filled(bar1, 2.0, color1);
            painter.rect_filled(bar2, 2.0, color2);

            if cfg.show_percentage_change {
                let change = percent_change(point.value1, point.value2);
                painter.text(
                    Pos2::new(cx, bar1.top().min(bar2.top()) - 12.0),
                    Align2::CENTER_CENTER,
                    format!("{change:+}%"),
                    FontId::proportional(SMALL_FONT),
                    text,
                );
            }

            painter.text(
                Pos2::new(cx, baseline + 16.0),
                Align2::CENTER_CENTER,
                &point.label,
                FontId::proportional(LABEL_FONT),
                text,
            );
        }

        painter.text(
            Pos2::new(rect.center().x, baseline + 36.0),
            Align2::CENTER_CENTER,
            &cfg.x_axis_label,
            FontId::proportional(LABEL_FONT),
            text,
        );
        Self::legend_row(
            &painter,
            Pos2::new(rect.center().x, rect.top() + 54.0),
            &[
                (cfg.legend1.as_str(), color1),
                (cfg.legend2.as_str(), color2),
            ],
            text,
        );
    }

    // -- Multi-series bars ---------------------------------------------------

    fn draw_multi(ui: &mut egui::Ui, cfg: &MultiBarConfig) {
        let (painter, rect) = Self::canvas(
            ui,
            ChartKind::MultiBar,
            &cfg.background_color,
            &cfg.border_color,
        );
        Self::title(&painter, rect, &cfg.title, &cfg.text_color);

        let area = PlotArea::new(800.0, 420.0, 40.0, 30.0, 90.0, 70.0);
        let origin = rect.min.to_vec2();
        let max = cfg.max_value();
        let text = to_color32(&cfg.text_color);
        let baseline = origin.y + area.baseline();

        let n = cfg.points.len().max(1);
        let k = cfg.series.len().max(1);
        let slot = area.plot_width() / n as f32;
        let bar_w = ((slot * 0.7) / k as f32).min(36.0);

        for (i, point) in cfg.points.iter().enumerate() {
            let cx = origin.x + area.pad_left + slot * (i as f32 + 0.5);
            let group_w = bar_w * k as f32;
            for (j, series) in cfg.series.iter().enumerate() {
                let value = point.value(&series.id);
                let h = bar_height(value, max, 280.0, 1.0);
                let x0 = cx - group_w / 2.0 + bar_w * j as f32;
                let bar = Rect::from_min_max(
                    Pos2::new(x0 + 1.0, baseline - h),
                    Pos2::new(x0 + bar_w - 1.0, baseline),
                );
                painter.rect_filled(bar, 2.0, to_color32(&series.color));
            }
            painter.text(
                Pos2::new(cx, baseline + 16.0),
                Align2::CENTER_CENTER,
                &point.label,
                FontId::proportional(LABEL_FONT),
                text,
            );
        }

        painter.text(
            Pos2::new(rect.center().x, baseline + 36.0),
            Align2::CENTER_CENTER,
            &cfg.x_axis_label,
            FontId::proportional(LABEL_FONT),
            text,
        );

        let entries: Vec<(&str, Color32)> = cfg
            .series
            .iter()
            .map(|s| (s.name.as_str(), to_color32(&s.color)))
            .collect();
        Self::legend_row(
            &painter,
            Pos2::new(rect.center().x, rect.top() + 54.0),
            &entries,
            text,
        );
    }

    // -- Stacked bars (egui_plot) --------------------------------------------

    fn draw_stacked(ui: &mut egui::Ui, cfg: &StackedBarConfig) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(&cfg.title)
                    .size(TITLE_FONT)
                    .color(to_color32(&cfg.text_color)),
            );
        });

        let labels: Vec<String> = cfg.points.iter().map(|p| p.label.clone()).collect();
        let (w, h) = ChartKind::StackedBar.canvas_size();

        // Each series stacks on everything drawn before it.
        let mut charts: Vec<BarChart> = Vec::new();
        for series in &cfg.series {
            let bars: Vec<Bar> = cfg
                .points
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    Bar::new(i as f64, p.value(&series.id))
                        .width(0.6)
                        .fill(to_color32(&series.color))
                })
                .collect();
            let below: Vec<&BarChart> = charts.iter().collect();
            let chart = BarChart::new(bars)
                .name(&series.name)
                .color(to_color32(&series.color))
                .stack_on(&below);
            charts.push(chart);
        }

        Plot::new("stacked_bar_preview")
            .width(w)
            .height(h - 40.0)
            .legend(Legend::default())
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label(&cfg.x_axis_label)
            .y_axis_label(&cfg.y_axis_label)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < labels.len() {
                    labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for chart in charts {
                    plot_ui.bar_chart(chart);
                }
            });
    }

    // -- Pie -----------------------------------------------------------------

    fn draw_pie(ui: &mut egui::Ui, cfg: &PieChartConfig) {
        let (painter, rect) =
            Self::canvas(ui, ChartKind::Pie, &cfg.background_color, &cfg.border_color);
        Self::title(&painter, rect, &cfg.title, &cfg.text_color);

        let center = Pos2::new(rect.center().x, rect.top() + 210.0);
        let radius = 130.0;
        let values: Vec<f64> = cfg.points.iter().map(|p| p.value).collect();
        let slices = pie_slices(&values);
        let text = to_color32(&cfg.text_color);

        // Triangle fan per slice; 2 degree steps keep the arc smooth.
        // Slices are index-aligned with points; non-positive values get a
        // zero sweep and are skipped here.
        for (point, slice) in cfg.points.iter().zip(&slices) {
            if slice.sweep_deg <= 0.0 {
                continue;
            }
            let color = to_color32(&point.color);
            let steps = (slice.sweep_deg / 2.0).ceil().max(1.0) as usize;
            let mut angle = slice.start_deg;
            let step = slice.sweep_deg / steps as f64;
            for _ in 0..steps {
                let a0 = (angle).to_radians() as f32;
                let a1 = (angle + step).to_radians() as f32;
                painter.add(Shape::convex_polygon(
                    vec![
                        center,
                        center + Vec2::new(a0.cos(), a0.sin()) * radius,
                        center + Vec2::new(a1.cos(), a1.sin()) * radius,
                    ],
                    color,
                    Stroke::NONE,
                ));
                angle += step;
            }

            let mid = (slice.start_deg + slice.sweep_deg / 2.0).to_radians() as f32;
            painter.text(
                center + Vec2::new(mid.cos(), mid.sin()) * (radius + 24.0),
                Align2::CENTER_CENTER,
                format!("{} {:.0}%", point.name, slice.frac * 100.0),
                FontId::proportional(SMALL_FONT),
                text,
            );
        }

        if cfg.is_donut {
            painter.circle_filled(center, radius * 0.55, to_color32(&cfg.background_color));
        }

        let entries: Vec<(&str, Color32)> = cfg
            .points
            .iter()
            .map(|p| (p.name.as_str(), to_color32(&p.color)))
            .collect();
        Self::legend_row(
            &painter,
            Pos2::new(rect.center().x, rect.bottom() - 24.0),
            &entries,
            text,
        );
    }

    // -- Scatter (egui_plot) -------------------------------------------------

    fn draw_scatter(ui: &mut egui::Ui, cfg: &ScatterChartConfig) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(&cfg.title)
                    .size(TITLE_FONT)
                    .color(to_color32(&cfg.text_color)),
            );
        });

        let (w, h) = ChartKind::Scatter.canvas_size();
        Plot::new("scatter_preview")
            .width(w)
            .height(h - 40.0)
            .legend(Legend::default())
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label(&cfg.x_axis_label)
            .y_axis_label(&cfg.y_axis_label)
            .show(ui, |plot_ui| {
                for point in &cfg.points {
                    plot_ui.points(
                        Points::new(vec![[point.x, point.y]])
                            .radius(6.0)
                            .color(to_color32(&point.color))
                            .name(&point.name),
                    );
                }
            });
    }

    fn legend_row(
        painter: &egui::Painter,
        center: Pos2,
        entries: &[(&str, Color32)],
        text: Color32,
    ) {
        let font = FontId::proportional(SMALL_FONT);
        let widths: Vec<f32> = entries
            .iter()
            .map(|(name, _)| {
                painter
                    .layout_no_wrap((*name).to_string(), font.clone(), text)
                    .size()
                    .x
                    + 26.0
            })
            .collect();
        let total: f32 = widths.iter().sum();
        let mut x = center.x - total / 2.0;
        for ((name, color), width) in entries.iter().zip(&widths) {
            let swatch = Rect::from_min_size(Pos2::new(x, center.y - 5.0), Vec2::splat(10.0));
            painter.rect_filled(swatch, 2.0, *color);
            painter.text(
                Pos2::new(x + 14.0, center.y),
                Align2::LEFT_CENTER,
                *name,
                font.clone(),
                text,
            );
            x += width;
        }
    }
}
