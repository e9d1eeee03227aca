//! Static Chart Renderer
//! Renders the selected chart to PNG or SVG bytes with plotters, at a
//! multiple of the preview size so exports stay crisp. The pixel geometry
//! mirrors the preview painter via the shared layout module.

use crate::color::{darken, to_plotters};
use crate::layout::{axis_max, bar_height, percent_change, pie_slices, ticks, x_at, y_at, PlotArea};
use crate::model::{
    AreaChartConfig, BarChartConfig, ChartKind, GroupedBarConfig, LineChartConfig, MultiBarConfig,
    PieChartConfig, ScatterChartConfig, StackedBarConfig,
};
use image::{DynamicImage, ImageFormat, RgbImage};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::io::Cursor;
use thiserror::Error;

use super::ChartRef;

/// Exports render at twice the preview resolution.
pub const EXPORT_SCALE: f32 = 2.0;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing backend error: {0}")]
    Backend(String),
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

fn backend_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Backend(e.to_string())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render to PNG bytes at `EXPORT_SCALE` times the preview size.
    pub fn render_png(chart: &ChartRef) -> Result<Vec<u8>, RenderError> {
        let (w, h) = Self::pixel_size(chart);
        let mut buf = vec![0u8; (w * h * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buf, (w, h)).into_drawing_area();
            Self::draw(chart, &root)?;
            root.present().map_err(backend_err)?;
        }
        let img = RgbImage::from_raw(w, h, buf)
            .ok_or_else(|| RenderError::Backend("pixel buffer size mismatch".to_string()))?;
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img).write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    /// Render to an SVG document at the same scaled size as the PNG.
    pub fn render_svg(chart: &ChartRef) -> Result<String, RenderError> {
        let (w, h) = Self::pixel_size(chart);
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (w, h)).into_drawing_area();
            Self::draw(chart, &root)?;
            root.present().map_err(backend_err)?;
        }
        Ok(svg)
    }

    fn pixel_size(chart: &ChartRef) -> (u32, u32) {
        let (w, h) = Self::kind(chart).canvas_size();
        ((w * EXPORT_SCALE) as u32, (h * EXPORT_SCALE) as u32)
    }

    fn kind(chart: &ChartRef) -> ChartKind {
        match chart {
            ChartRef::Line(_) => ChartKind::Line,
            ChartRef::Area(_) => ChartKind::Area,
            ChartRef::Bar(_) => ChartKind::Bar,
            ChartRef::GroupedBar(_) => ChartKind::GroupedBar,
            ChartRef::MultiBar(_) => ChartKind::MultiBar,
            ChartRef::StackedBar(_) => ChartKind::StackedBar,
            ChartRef::Pie(_) => ChartKind::Pie,
            ChartRef::Scatter(_) => ChartKind::Scatter,
        }
    }

    fn draw<DB: DrawingBackend>(
        chart: &ChartRef,
        root: &DrawingArea<DB, plotters::coord::Shift>,
    ) -> Result<(), RenderError> {
        match chart {
            ChartRef::Line(cfg) => Self::draw_line(root, cfg),
            ChartRef::Area(cfg) => Self::draw_area(root, cfg),
            ChartRef::Bar(cfg) => Self::draw_bar(root, cfg),
            ChartRef::GroupedBar(cfg) => Self::draw_grouped(root, cfg),
            ChartRef::MultiBar(cfg) => Self::draw_multi(root, cfg),
            ChartRef::StackedBar(cfg) => Self::draw_stacked(root, cfg),
            ChartRef::Pie(cfg) => Self::draw_pie(root, cfg),
            ChartRef::Scatter(cfg) => Self::draw_scatter(root, cfg),
        }
    }

    fn fill_background<DB: DrawingBackend>(
        root: &DrawingArea<DB, plotters::coord::Shift>,
        hex: &str,
    ) -> Result<(), RenderError> {
        root.fill(&to_plotters(hex)).map_err(backend_err)
    }

    fn text_style(size: f32, hex: &str) -> TextStyle<'static> {
        ("sans-serif", (size * EXPORT_SCALE) as f64)
            .into_font()
            .color(&to_plotters(hex))
    }

    fn title<DB: DrawingBackend>(
        root: &DrawingArea<DB, plotters::coord::Shift>,
        text: &str,
        width: f32,
        hex: &str,
    ) -> Result<(), RenderError> {
        let style = Self::text_style(17.0, hex)
            .pos(Pos::new(HPos::Center, VPos::Center));
        root.draw(&Text::new(
            text.to_string(),
            pt(width / 2.0, 26.0),
            style,
        ))
        .map_err(backend_err)
    }

    fn grid<DB: DrawingBackend>(
        root: &DrawingArea<DB, plotters::coord::Shift>,
        area: &PlotArea,
        y_off: f32,
        max: f64,
        step: f64,
        grid_hex: &str,
        text_hex: &str,
    ) -> Result<(), RenderError> {
        let grid_color = to_plotters(grid_hex);
        let label_style = Self::text_style(10.5, text_hex)
            .pos(Pos::new(HPos::Right, VPos::Center));
        for tick in ticks(max, step) {
            let y = y_off + y_at(tick, max, area);
            root.draw(&PathElement::new(
                vec![pt(area.pad_left, y), pt(area.width - area.pad_right, y)],
                grid_color.stroke_width(1),
            ))
            .map_err(backend_err)?;
            root.draw(&Text::new(
                format!("{tick:.0}"),
                pt(area.pad_left - 8.0, y),
                label_style.clone(),
            ))
            .map_err(backend_err)?;
        }
        Ok(())
    }

    // -- Line -----------------------------------------------------------------

    fn draw_line<DB: DrawingBackend>(
        root: &DrawingArea<DB, plotters::coord::Shift>,
        cfg: &LineChartConfig,
    ) -> Result<(), RenderError> {
        Self::fill_background(root, &cfg.background_color)?;
        Self::title(root, &cfg.title, 700.0, &cfg.text_color)?;

        let area = PlotArea::new(700.0, 380.0, 50.0, 50.0, 80.0, 50.0);
        let y_off = 40.0;
        let max = axis_max(cfg.max_value(), 5.0);
        Self::grid(root, &area, y_off, max, 5.0, &cfg.border_color, &cfg.text_color)?;

        let n = cfg.points.len();
        let positions: Vec<(f32, f32)> = cfg
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (x_at(i, n, &area), y_off + y_at(p.value, max, &area)))
            .collect();

        if positions.len() > 1 {
            let path: Vec<(i32, i32)> = positions.iter().map(|&(x, y)| pt(x, y)).collect();
            root.draw(&PathElement::new(
                path,
                to_plotters(&cfg.line_color)
                    .stroke_width((cfg.line_width * EXPORT_SCALE) as u32),
            ))
            .map_err(backend_err)?;
        }

        let point_color = to_plotters(&cfg.point_color);
        let label_style = Self::text_style(12.0, &cfg.text_color)
            .pos(Pos::new(HPos::Center, VPos::Center));
        for (point, &(x, y)) in cfg.points.iter().zip(&positions) {
            root.draw(&Circle::new(
                pt(x, y),
                (cfg.point_size / 2.0 * EXPORT_SCALE) as i32,
                point_color.filled(),
            ))
            .map_err(backend_err)?;
            root.draw(&Text::new(
                point.label.clone(),
                pt(x, y_off + area.baseline() + 16.0),
                label_style.clone(),
            ))
            .map_err(backend_err)?;
            if cfg.show_annotations && !point.annotation.is_empty() {
                Self::annotation(root, x, y, point, cfg)?;
            }
        }
        Ok(())
    }

    fn annotation<DB: DrawingBackend>(
        root: &DrawingArea<DB, plotters::coord::Shift>,
        x: f32,
        y: f32,
        point: &crate::model::LinePoint,
        cfg: &LineChartConfig,
    ) -> Result<(), RenderError> {
        // Rough width estimate; the backend has no text measurement here.
        let half_w = point.annotation.len() as f32 * 3.0 + 6.0;
        let (cx, cy) = (x, y - 26.0);
        root.draw(&Rectangle::new(
            [pt(cx - half_w, cy - 9.0), pt(cx + half_w, cy + 9.0)],
            to_plotters(&cfg.annotation_bg_color).filled(),
        ))
        .map_err(backend_err)?;
        root.draw(&Rectangle::new(
            [pt(cx - half_w, cy - 9.0), pt(cx + half_w, cy + 9.0)],
            to_plotters(&cfg.border_color).stroke_width(1),
        ))
        .map_err(backend_err)?;
        let style = Self::text_style(10.5, &cfg.annotation_text_color)
            .pos(Pos::new(HPos::Center, VPos::Center));
        root.draw(&Text::new(point.annotation.clone(), pt(cx, cy), style))
            .map_err(backend_err)
    }

    // -- Area -----------------------------------------------------------------

    fn draw_area<DB: DrawingBackend>(
        root: &DrawingArea<DB, plotters::coord::Shift>,
        cfg: &AreaChartConfig,
    ) -> Result<(), RenderError> {
        Self::fill_background(root, &cfg.background_color)?;
        Self::title(root, &cfg.title, 900.0, &cfg.text_color)?;

        let area = PlotArea::new(900.0, 450.0, 80.0, 100.0, 80.0, 60.0);
        let max = cfg.y_axis_max;
        Self::grid(
            root,
            &area,
            0.0,
            max,
            cfg.y_axis_step,
            &cfg.grid_color,
            &cfg.label_color,
        )?;

        let n = cfg.points.len();
        let positions: Vec<(f32, f32)> = cfg
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (x_at(i, n, &area), y_at(p.value, max, &area)))
            .collect();

        let baseline = area.baseline();
        if positions.len() > 1 {
            let mut polygon: Vec<(i32, i32)> =
                positions.iter().map(|&(x, y)| pt(x, y)).collect();
            polygon.push(pt(positions[n - 1].0, baseline));
            polygon.push(pt(positions[0].0, baseline));
            root.draw(&Polygon::new(
                polygon,
                to_plotters(&cfg.fill_color).mix(0.25),
            ))
            .map_err(backend_err)?;

            let path: Vec<(i32, i32)> = positions.iter().map(|&(x, y)| pt(x, y)).collect();
            root.draw(&PathElement::new(
                path,
                to_plotters(&cfg.line_color)
                    .stroke_width((cfg.line_width * EXPORT_SCALE) as u32),
            ))
            .map_err(backend_err)?;
        }

        let point_color = to_plotters(&cfg.point_color);
        let value_style = Self::text_style(10.5, &cfg.label_color)
            .pos(Pos::new(HPos::Center, VPos::Center));
        let label_style = Self::text_style(12.0, &cfg.label_color)
            .pos(Pos::new(HPos::Center, VPos::Center));
        for (point, &(x, y)) in cfg.points.iter().zip(&positions) {
            root.draw(&Circle::new(
                pt(x, y),
                (cfg.point_radius / 2.0 * EXPORT_SCALE) as i32,
                point_color.filled(),
            ))
            .map_err(backend_err)?;
            root.draw(&Text::new(
                point.display_value.clone(),
                pt(x, y - 14.0),
                value_style.clone(),
            ))
            .map_err(backend_err)?;
            root.draw(&Text::new(
                point.label.clone(),
                pt(x, baseline + 16.0),
                label_style.clone(),
            ))
            .map_err(backend_err)?;
        }

        root.draw(&Text::new(
            cfg.x_axis_label.clone(),
            pt(450.0, 436.0),
            label_style.clone(),
        ))
        .map_err(backend_err)?;
        let y_style = Self::text_style(12.0, &cfg.label_color)
            .pos(Pos::new(HPos::Left, VPos::Center));
        root.draw(&Text::new(cfg.y_axis_label.clone(), pt(18.0, 50.0), y_style))
            .map_err(backend_err)
    }

    // -- Single bar -----------------------------------------------------------

    fn draw_bar<DB: DrawingBackend>(
        root: &DrawingArea<DB, plotters::coord::Shift>,
        cfg: &BarChartConfig,
    ) -> Result<(), RenderError> {
        Self::fill_background(root, &cfg.background_color)?;
        Self::title(root, &cfg.title, 760.0, &cfg.text_color)?;

        let area = PlotArea::new(760.0, 400.0, 60.0, 30.0, 70.0, 60.0);
        let max = axis_max(cfg.max_value(), 10.0);
        Self::grid(root, &area, 0.0, max, 10.0, &cfg.border_color, &cfg.text_color)?;

        let n = cfg.points.len();
        let slot = area.plot_width() / n as f32;
        let bar_w = (slot * 0.6).min(64.0);
        let baseline = area.baseline();
        let value_style = Self::text_style(10.5, &cfg.text_color)
            .pos(Pos::new(HPos::Center, VPos::Center));
        let label_style = Self::text_style(12.0, &cfg.text_color)
            .pos(Pos::new(HPos::Center, VPos::Center));

        for (i, point) in cfg.points.iter().enumerate() {
            let h = bar_height(point.value, max, 270.0, 4.0);
            let cx = area.pad_left + slot * (i as f32 + 0.5);
            let color = cfg.bar_color(point);
            let corners = [pt(cx - bar_w / 2.0, baseline - h), pt(cx + bar_w / 2.0, baseline)];
            root.draw(&Rectangle::new(corners, to_plotters(color).filled()))
                .map_err(backend_err)?;
            root.draw(&Rectangle::new(
                corners,
                to_plotters(&darken(color, 20.0)).stroke_width(1),
            ))
            .map_err(backend_err)?;
            root.draw(&Text::new(
                format!("{}{}", point.value, cfg.value_format),
                pt(cx, baseline - h - 10.0),
                value_style.clone(),
            ))
            .map_err(backend_err)?;
            root.draw(&Text::new(
                point.label.clone(),
                pt(cx, baseline + 16.0),
                label_style.clone(),
            ))
            .map_err(backend_err)?;
        }

        Self::legend(
            root,
            380.0,
            404.0,
            &[(cfg.legend_label.as_str(), cfg.uniform_color.as_str())],
            &cfg.text_color,
        )
    }

    // -- Grouped bars ----------------------------------------------------------

    fn draw_grouped<DB: DrawingBackend>(
        root: &DrawingArea<DB, plotters::coord::Shift>,
        cfg: &GroupedBarConfig,
    ) -> Result<(), RenderError> {
        Self::fill_background(root, &cfg.background_color)?;
        Self::title(root, &cfg.title, 760.0, &cfg.text_color)?;

        let area = PlotArea::new(760.0, 400.0, 40.0, 30.0, 90.0, 70.0);
        let max = cfg.max_value();
        let baseline = area.baseline();
        let n = cfg.points.len();
        let slot = area.plot_width() / n as f32;
        let bar_w = (slot * 0.28).min(40.0);
        let label_style = Self::text_style(12.0, &cfg.text_color)
            .pos(Pos::new(HPos::Center, VPos::Center));
        let badge_style = Self::text_style(10.5, &cfg.text_color)
            .pos(Pos::new(HPos::Center, VPos::Center));

        for (i, point) in cfg.points.iter().enumerate() {
            let cx = area.pad_left + slot * (i as f32 + 0.5);
            let h1 = bar_height(point.value1, max, 230.0, 1.0);
            let h2 = bar_height(point.value2, max, 230.0, 1.0);
            root.draw(&Rectangle::new(
                [pt(cx - bar_w - 2.0, baseline - h1), pt(cx - 2.0, baseline)],
                to_plotters(&cfg.bar1_color).filled(),
            ))
            .map_err(backend_err)?;
            root.draw(&Rectangle::new(
                [pt(cx + 2.0, baseline - h2), pt(cx + bar_w + 2.0, baseline)],
                to_plotters(&cfg.bar2_color).filled(),
            ))
            .map_err(backend_err)?;

            if cfg.show_percentage_change {
                let change = percent_change(point.value1, point.value2);
                root.draw(&Text::new(
                    format!("{change:+}%"),
                    pt(cx, baseline - h1.max(h2) - 12.0),
                    badge_style.clone(),
                ))
                .map_err(backend_err)?;
            }

            root.draw(&Text::new(
                point.label.clone(),
                pt(cx, baseline + 16.0),
                label_style.clone(),
            ))
            .map_err(backend_err)?;
        }

        root.draw(&Text::new(
            cfg.x_axis_label.clone(),
            pt(380.0, baseline + 36.0),
            label_style,
        ))
        .map_err(backend_err)?;
        Self::legend(
            root,
            380.0,
            54.0,
            &[
                (cfg.legend1.as_str(), cfg.bar1_color.as_str()),
                (cfg.legend2.as_str(), cfg.bar2_color.as_str()),
            ],
            &cfg.text_color,
        )
    }

    // -- Multi-series bars ------------------------------------------------------

    fn draw_multi<DB: DrawingBackend>(
        root: &DrawingArea<DB, plotters::coord::Shift>,
        cfg: &MultiBarConfig,
    ) -> Result<(), RenderError> {
        Self::fill_background(root, &cfg.background_color)?;
        Self::title(root, &cfg.title, 800.0, &cfg.text_color)?;

        let area = PlotArea::new(800.0, 420.0, 40.0, 30.0, 90.0, 70.0);
        let max = cfg.max_value();
        let baseline = area.baseline();
        let n = cfg.points.len().max(1);
        let k = cfg.series.len().max(1);
        let slot = area.plot_width() / n as f32;
        let bar_w = ((slot * 0.7) / k as f32).min(36.0);
        let label_style = Self::text_style(12.0, &cfg.text_color)
            .pos(Pos::new(HPos::Center, VPos::Center));

        for (i, point) in cfg.points.iter().enumerate() {
            let cx = area.pad_left + slot * (i as f32 + 0.5);
            let group_w = bar_w * k as f32;
            for (j, series) in cfg.series.iter().enumerate() {
                let h = bar_height(point.value(&series.id), max, 280.0, 1.0);
                let x0 = cx - group_w / 2.0 + bar_w * j as f32;
                root.draw(&Rectangle::new(
                    [pt(x0 + 1.0, baseline - h), pt(x0 + bar_w - 1.0, baseline)],
                    to_plotters(&series.color).filled(),
                ))
                .map_err(backend_err)?;
            }
            root.draw(&Text::new(
                point.label.clone(),
                pt(cx, baseline + 16.0),
                label_style.clone(),
            ))
            .map_err(backend_err)?;
        }

        root.draw(&Text::new(
            cfg.x_axis_label.clone(),
            pt(400.0, baseline + 36.0),
            label_style,
        ))
        .map_err(backend_err)?;

        let entries: Vec<(&str, &str)> = cfg
            .series
            .iter()
            .map(|s| (s.name.as_str(), s.color.as_str()))
            .collect();
        Self::legend(root, 400.0, 54.0, &entries, &cfg.text_color)
    }

    // -- Stacked bars (plotters chart API) ---------------------------------------

    fn draw_stacked<DB: DrawingBackend>(
        root: &DrawingArea<DB, plotters::coord::Shift>,
        cfg: &StackedBarConfig,
    ) -> Result<(), RenderError> {
        Self::fill_background(root, &cfg.background_color)?;

        let max = axis_max(cfg.max_stack(), 1000.0);
        let n = cfg.points.len();
        let labels: Vec<String> = cfg.points.iter().map(|p| p.label.clone()).collect();

        let mut chart = ChartBuilder::on(root)
            .caption(
                &cfg.title,
                ("sans-serif", (17.0 * EXPORT_SCALE) as i32)
                    .into_font()
                    .color(&to_plotters(&cfg.text_color)),
            )
            .margin((10.0 * EXPORT_SCALE) as i32)
            .x_label_area_size((40.0 * EXPORT_SCALE) as i32)
            .y_label_area_size((60.0 * EXPORT_SCALE) as i32)
            .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), 0f64..max)
            .map_err(backend_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(cfg.x_axis_label.clone())
            .y_desc(cfg.y_axis_label.clone())
            .x_labels(n)
            .x_label_formatter(&|x| {
                let idx = x.round() as usize;
                if (x - idx as f64).abs() < 1e-6 && idx < labels.len() {
                    labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .label_style(Self::text_style(10.5, &cfg.text_color))
            .draw()
            .map_err(backend_err)?;

        // Cumulative segment per series per point.
        for (si, series) in cfg.series.iter().enumerate() {
            let color = to_plotters(&series.color);
            chart
                .draw_series(cfg.points.iter().enumerate().map(|(i, p)| {
                    let below: f64 = cfg.series[..si].iter().map(|s| p.value(&s.id)).sum();
                    let top = below + p.value(&series.id);
                    Rectangle::new(
                        [(i as f64 - 0.3, below), (i as f64 + 0.3, top)],
                        color.filled(),
                    )
                }))
                .map_err(backend_err)?
                .label(series.name.clone())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled())
                });
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(to_plotters(&cfg.border_color))
            .label_font(Self::text_style(10.5, &cfg.text_color))
            .draw()
            .map_err(backend_err)?;
        Ok(())
    }

    // -- Pie ----------------------------------------------------------------------

    fn draw_pie<DB: DrawingBackend>(
        root: &DrawingArea<DB, plotters::coord::Shift>,
        cfg: &PieChartConfig,
    ) -> Result<(), RenderError> {
        Self::fill_background(root, &cfg.background_color)?;
        Self::title(root, &cfg.title, 620.0, &cfg.text_color)?;

        let center = (310.0, 210.0);
        let radius = 130.0f64;
        let values: Vec<f64> = cfg.points.iter().map(|p| p.value).collect();
        let slices = pie_slices(&values);
        let label_style = Self::text_style(10.5, &cfg.text_color)
            .pos(Pos::new(HPos::Center, VPos::Center));

        // Slices are index-aligned with points; zero-sweep slices (from
        // non-positive values) draw nothing.
        for (point, slice) in cfg.points.iter().zip(&slices) {
            if slice.sweep_deg <= 0.0 {
                continue;
            }
            let steps = (slice.sweep_deg / 2.0).ceil().max(1.0) as usize;
            let step = slice.sweep_deg / steps as f64;
            let mut fan = vec![pt(center.0, center.1)];
            for s in 0..=steps {
                let a = (slice.start_deg + step * s as f64).to_radians();
                fan.push(pt(
                    center.0 + (a.cos() * radius) as f32,
                    center.1 + (a.sin() * radius) as f32,
                ));
            }
            root.draw(&Polygon::new(fan, to_plotters(&point.color).filled()))
                .map_err(backend_err)?;

            let mid = (slice.start_deg + slice.sweep_deg / 2.0).to_radians();
            root.draw(&Text::new(
                format!("{} {:.0}%", point.name, slice.frac * 100.0),
                pt(
                    center.0 + (mid.cos() * (radius + 24.0)) as f32,
                    center.1 + (mid.sin() * (radius + 24.0)) as f32,
                ),
                label_style.clone(),
            ))
            .map_err(backend_err)?;
        }

        if cfg.is_donut {
            root.draw(&Circle::new(
                pt(center.0, center.1),
                (radius * 0.55 * EXPORT_SCALE as f64) as i32,
                to_plotters(&cfg.background_color).filled(),
            ))
            .map_err(backend_err)?;
        }

        let entries: Vec<(&str, &str)> = cfg
            .points
            .iter()
            .map(|p| (p.name.as_str(), p.color.as_str()))
            .collect();
        Self::legend(root, 310.0, 436.0, &entries, &cfg.text_color)
    }

    // -- Scatter (plotters chart API) ----------------------------------------------

    fn draw_scatter<DB: DrawingBackend>(
        root: &DrawingArea<DB, plotters::coord::Shift>,
        cfg: &ScatterChartConfig,
    ) -> Result<(), RenderError> {
        Self::fill_background(root, &cfg.background_color)?;

        let x_max = axis_max(
            cfg.points.iter().map(|p| p.x).fold(0.0, f64::max),
            10.0,
        );
        let y_max = axis_max(
            cfg.points.iter().map(|p| p.y).fold(0.0, f64::max),
            5.0,
        );

        let mut chart = ChartBuilder::on(root)
            .caption(
                &cfg.title,
                ("sans-serif", (17.0 * EXPORT_SCALE) as i32)
                    .into_font()
                    .color(&to_plotters(&cfg.text_color)),
            )
            .margin((10.0 * EXPORT_SCALE) as i32)
            .x_label_area_size((40.0 * EXPORT_SCALE) as i32)
            .y_label_area_size((50.0 * EXPORT_SCALE) as i32)
            .build_cartesian_2d(0f64..x_max, 0f64..y_max)
            .map_err(backend_err)?;

        chart
            .configure_mesh()
            .x_desc(cfg.x_axis_label.clone())
            .y_desc(cfg.y_axis_label.clone())
            .label_style(Self::text_style(10.5, &cfg.text_color))
            .draw()
            .map_err(backend_err)?;

        for point in &cfg.points {
            let color = to_plotters(&point.color);
            chart
                .draw_series(std::iter::once(Circle::new(
                    (point.x, point.y),
                    (6.0 * EXPORT_SCALE) as i32,
                    color.filled(),
                )))
                .map_err(backend_err)?
                .label(point.name.clone())
                .legend(move |(x, y)| Circle::new((x + 6, y), 5, color.filled()));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(to_plotters(&cfg.border_color))
            .label_font(Self::text_style(10.5, &cfg.text_color))
            .draw()
            .map_err(backend_err)?;
        Ok(())
    }

    fn legend<DB: DrawingBackend>(
        root: &DrawingArea<DB, plotters::coord::Shift>,
        center_x: f32,
        y: f32,
        entries: &[(&str, &str)],
        text_hex: &str,
    ) -> Result<(), RenderError> {
        // Width estimate keeps the row roughly centered without text metrics.
        let total: f32 = entries
            .iter()
            .map(|(name, _)| name.len() as f32 * 6.0 + 26.0)
            .sum();
        let mut x = center_x - total / 2.0;
        let style = Self::text_style(10.5, text_hex)
            .pos(Pos::new(HPos::Left, VPos::Center));
        for (name, color_hex) in entries {
            root.draw(&Rectangle::new(
                [pt(x, y - 5.0), pt(x + 10.0, y + 5.0)],
                to_plotters(color_hex).filled(),
            ))
            .map_err(backend_err)?;
            root.draw(&Text::new((*name).to_string(), pt(x + 14.0, y), style.clone()))
                .map_err(backend_err)?;
            x += name.len() as f32 * 6.0 + 26.0;
        }
        Ok(())
    }
}

/// Preview coordinates to scaled backend pixels.
fn pt(x: f32, y: f32) -> (i32, i32) {
    (
        (x * EXPORT_SCALE).round() as i32,
        (y * EXPORT_SCALE).round() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PiePoint, Workspace};

    fn every_chart(ws: &Workspace) -> Vec<ChartRef<'_>> {
        vec![
            ChartRef::Line(&ws.line),
            ChartRef::Area(&ws.area),
            ChartRef::Bar(&ws.bar),
            ChartRef::GroupedBar(&ws.grouped),
            ChartRef::MultiBar(&ws.multi),
            ChartRef::StackedBar(&ws.stacked),
            ChartRef::Pie(&ws.pie),
            ChartRef::Scatter(&ws.scatter),
        ]
    }

    #[test]
    fn png_export_produces_valid_png_for_every_chart() {
        let ws = Workspace::default();
        for chart in every_chart(&ws) {
            let bytes = StaticChartRenderer::render_png(&chart).unwrap();
            assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
            let img = image::load_from_memory(&bytes).unwrap();
            let (w, h) = StaticChartRenderer::pixel_size(&chart);
            assert_eq!((img.width(), img.height()), (w, h));
        }
    }

    #[test]
    fn svg_export_is_wellformed_for_every_chart() {
        let ws = Workspace::default();
        for chart in every_chart(&ws) {
            let svg = StaticChartRenderer::render_svg(&chart).unwrap();
            assert!(svg.contains("<svg"));
            assert!(svg.trim_end().ends_with("</svg>"));
        }
    }

    #[test]
    fn zero_value_pie_category_does_not_shift_remaining_slices() {
        let mut ws = Workspace::default();
        ws.pie.points.insert(
            0,
            PiePoint {
                id: "z".to_string(),
                name: "Unused".to_string(),
                value: 0.0,
                color: "#000000".to_string(),
            },
        );
        let svg = StaticChartRenderer::render_svg(&ChartRef::Pie(&ws.pie)).unwrap();
        // Every positive category keeps its own percentage label.
        assert!(svg.contains("Playwright 45%"));
        assert!(svg.contains("Cypress 30%"));
        assert!(svg.contains("Selenium 15%"));
        assert!(svg.contains("Others 10%"));
        // The zero-value category draws no slice and no label.
        assert!(!svg.contains("Unused"));
    }

    #[test]
    fn grouped_badge_renders_in_the_configured_text_color() {
        let mut ws = Workspace::default();
        ws.grouped.text_color = "#123456".to_string();
        let svg = StaticChartRenderer::render_svg(&ChartRef::GroupedBar(&ws.grouped)).unwrap();
        // First seed point is 100 -> 38.
        assert!(svg.contains("-62%"));
        // No valence coloring on the change badges.
        let lowered = svg.to_lowercase();
        assert!(!lowered.contains("228b22"));
        assert!(!lowered.contains("c83c3c"));
    }

    #[test]
    fn exports_are_twice_the_preview_size() {
        let ws = Workspace::default();
        let (w, h) = StaticChartRenderer::pixel_size(&ChartRef::Pie(&ws.pie));
        let (pw, ph) = ChartKind::Pie.canvas_size();
        assert_eq!((w, h), ((pw * 2.0) as u32, (ph * 2.0) as u32));
    }
}
