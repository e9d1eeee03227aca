//! Color module - hex/HSL transforms shared by every chart editor

mod transform;

pub use transform::{
    darken, hex_to_hsl, hsl_to_hex, parse_hex, to_color32, to_plotters, to_rgb, Hsl,
};
