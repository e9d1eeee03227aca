//! Layout module - pure chart geometry (scales, ticks, bar sizing)

mod geometry;

pub use geometry::{
    axis_max, bar_height, percent_change, pie_slices, ticks, x_at, y_at, PieSlice, PlotArea,
};
