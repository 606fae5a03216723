//! Rendering of box eigenstates with [`plotters`].
//!
//! Three presentations are provided:
//! - [`figure::StaticFigure`]: ψₙ, |ψₙ|², and the energy ladder for all
//!   `n <= n_max` on a single three-panel figure
//! - [`sweep::QuantumSweep`]: one frame per quantum number, with the energy
//!   ladder filled in cumulatively
//! - [`evolve::TimeEvolution`]: real and imaginary parts of Ψₙ(x, t) for
//!   several `n` at once, one frame per time sample
//!
//! Animations implement [`anim::Animation`], which draws a single frame given
//! only its index; [`anim::save_gif`] drives any of them to a file.

use std::ops::Range;
use ndarray as nd;
use plotters::{
    coord::Shift,
    prelude::*,
    style::text_anchor::{ HPos, Pos, VPos },
};
use crate::error::PlotError;

pub mod anim;
pub mod levels;
pub mod figure;
pub mod sweep;
pub mod evolve;

pub type PlotResult<T> = Result<T, PlotError>;

pub(crate) const FONT: &str = "sans-serif";

// text and label-area sizes below are given for a figure this wide
pub(crate) const REF_WIDTH_PX: f64 = 1000.0;

/// Scale a pixel size chosen for a [`REF_WIDTH_PX`]-wide figure to the width
/// of `area`, so that text keeps its proportions at any resolution.
pub(crate) fn scaled<DB>(area: &DrawingArea<DB, Shift>, base: f64) -> f64
where DB: DrawingBackend
{
    let (w, _) = area.dim_in_pixel();
    (base * f64::from(w) / REF_WIDTH_PX).max(1.0)
}

pub(crate) fn scaled_px<DB>(area: &DrawingArea<DB, Shift>, base: f64) -> u32
where DB: DrawingBackend
{
    scaled(area, base).round() as u32
}

/// Matplotlib's default color cycle.
pub const TAB10: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// Pick the `k`-th color of the default cycle, wrapping around.
pub fn series_color(k: usize) -> RGBColor { TAB10[k % TAB10.len()] }

/// Physical size of a figure, as in inches at some resolution.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FigureSize {
    /// Width in inches.
    pub width_in: f64,
    /// Height in inches.
    pub height_in: f64,
    /// Dots per inch.
    pub dpi: u32,
}

impl FigureSize {
    pub fn new(width_in: f64, height_in: f64, dpi: u32) -> Self {
        Self { width_in, height_in, dpi }
    }

    /// Size in pixels.
    pub fn pixels(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        (
            (self.width_in * dpi).round().max(1.0) as u32,
            (self.height_in * dpi).round().max(1.0) as u32,
        )
    }
}

/// A single labeled line, sampled over some shared coordinate array.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    pub label: String,
    pub y: nd::Array1<f64>,
    pub color: RGBColor,
}

/// A piece of text placed in data coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Axis ranges and descriptions for a line panel.
#[derive(Clone, Debug, PartialEq)]
pub struct Axes<'a> {
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub x_desc: &'a str,
    pub y_desc: &'a str,
}

/// Draw a set of curves over `x` onto `area`, with a legend in the upper
/// left and an optional boxed tag in the upper right.
pub fn draw_curves<DB>(
    area: &DrawingArea<DB, Shift>,
    x: &nd::Array1<f64>,
    curves: &[Curve],
    axes: &Axes<'_>,
    tag: Option<&str>,
) -> PlotResult<()>
where DB: DrawingBackend
{
    let mut chart = ChartBuilder::on(area)
        .margin(scaled_px(area, 10.0))
        .x_label_area_size(scaled_px(area, 40.0))
        .y_label_area_size(scaled_px(area, 60.0))
        .build_cartesian_2d(axes.x_range.clone(), axes.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(axes.x_desc)
        .y_desc(axes.y_desc)
        .label_style((FONT, scaled(area, 12.0)))
        .axis_desc_style((FONT, scaled(area, 14.0)))
        .draw()?;

    for curve in curves {
        let color = curve.color;
        chart
            .draw_series(LineSeries::new(
                x.iter().copied().zip(curve.y.iter().copied()),
                color.stroke_width(2),
            ))?
            .label(curve.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    if let Some(tag) = tag {
        let Range { start: x0, end: x1 } = axes.x_range;
        let Range { start: y0, end: y1 } = axes.y_range;
        let (w, h) = (x1 - x0, y1 - y0);
        let corner = [
            (x1 - 0.14 * w, y1 - 0.04 * h),
            (x1 - 0.02 * w, y1 - 0.24 * h),
        ];
        chart.draw_series(std::iter::once(
            Rectangle::new(corner, WHITE.mix(0.8).filled())))?;
        chart.draw_series(std::iter::once(
            Rectangle::new(corner, BLACK.mix(0.4).stroke_width(1))))?;
        let style
            = (FONT, scaled(area, 18.0)).into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        chart.draw_series(std::iter::once(Text::new(
            tag.to_string(),
            (x1 - 0.08 * w, y1 - 0.14 * h),
            style,
        )))?;
    }

    if !curves.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font((FONT, scaled(area, 13.0)))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_size_in_pixels() {
        assert_eq!(FigureSize::new(10.0, 12.0, 200).pixels(), (2000, 2400));
        assert_eq!(FigureSize::new(0.0, 1.5, 100).pixels(), (1, 150));
    }

    #[test]
    fn text_scales_with_resolution() {
        let mut buf = vec![0_u8; 1000 * 2 * 3];
        let full = BitMapBackend::with_buffer(&mut buf, (1000, 2)).into_drawing_area();
        assert_eq!(scaled(&full, 24.0), 24.0);
        assert_eq!(scaled_px(&full, 60.0), 60);
        drop(full);

        // 10 in at 60 dpi
        let (w, h) = FigureSize::new(10.0, 0.05, 60).pixels();
        let mut buf = vec![0_u8; (w * h * 3) as usize];
        let low = BitMapBackend::with_buffer(&mut buf, (w, h)).into_drawing_area();
        assert!((scaled(&low, 24.0) - 14.4).abs() < 1e-12);
        assert_eq!(scaled_px(&low, 40.0), 24);
        assert_eq!(scaled(&low, 0.5), 1.0);
    }

    #[test]
    fn color_cycle_wraps() {
        assert_eq!(series_color(0), TAB10[0]);
        assert_eq!(series_color(12), TAB10[2]);
    }
}
