//! Energy-ladder panel: Eₙ against n as a point-and-line plot with text
//! labels over each level.

use plotters::{
    coord::Shift,
    prelude::*,
    style::text_anchor::{ HPos, Pos, VPos },
};
use crate::{
    model::{ self, PhysicalConstants },
    plot::{ scaled, scaled_px, Annotation, PlotResult, FONT },
};

const LEVEL_COLOR: RGBColor = RGBColor(0, 128, 0);

// mesh labels on the quantum number axis; plotters may place ticks between
// integers, which are left blank
fn quantum_number_label(n: &f64) -> String {
    if n.fract() == 0.0 { format!("{:.0}", n) } else { String::new() }
}

/// Power-of-ten factor that brings `e_max` into a readable range for numeric
/// axis labels, returned with its exponent.
///
/// Scales within two decades of 1 are left alone.
fn energy_scale(e_max: f64) -> (f64, i32) {
    if !(e_max.is_finite() && e_max > 0.0) { return (1.0, 0); }
    let exp = e_max.log10().floor() as i32;
    if exp.abs() <= 2 { (1.0, 0) } else { (10.0_f64.powi(exp), exp) }
}

// energy axis description, with units and any common factor
fn energy_desc(name: &str, unit: Option<&str>, exp: i32) -> String {
    match (unit, exp) {
        (Some(u), 0) => format!("{} ({})", name, u),
        (Some(u), k) => format!("{} (1e{} {})", name, k, u),
        (None, 0) => name.to_string(),
        (None, k) => format!("{} (1e{})", name, k),
    }
}

// level labels are centered over their point, except at the right edge of the
// axis where they would be clipped
fn label_anchor(x: f64, x_max: f64) -> HPos {
    if x >= x_max { HPos::Right } else { HPos::Center }
}

/// Contents of an energy-ladder panel.
#[derive(Clone, Debug, PartialEq)]
pub struct EnergyDiagram {
    /// `(n, Eₙ)` points joined by the curve, starting at the `n = 0` anchor.
    pub levels: Vec<(u32, f64)>,
    /// Largest quantum number on the horizontal axis.
    pub n_max: u32,
    /// `E` at `n_max`, which fixes the vertical scale.
    pub e_max: f64,
    /// Labels drawn just above each level.
    pub annotations: Vec<Annotation>,
    /// Labeled tick marks on the energy axis; when empty, plain numeric ticks
    /// are drawn instead.
    pub ticks: Vec<(f64, String)>,
}

impl EnergyDiagram {
    // text sits this fraction of `e_max` above its level
    const LABEL_OFFSET: f64 = 0.05;

    fn build<F>(consts: &PhysicalConstants, n: u32, n_max: u32, label: F)
        -> Self
    where F: Fn(u32, f64) -> String
    {
        let e = model::energies(consts, n_max);
        let e_max = e[n_max as usize];
        let levels: Vec<(u32, f64)>
            = (0..=n.min(n_max)).map(|k| (k, e[k as usize])).collect();
        let annotations: Vec<Annotation>
            = levels.iter().skip(1)
            .map(|&(k, ek)| Annotation {
                x: f64::from(k),
                y: ek + Self::LABEL_OFFSET * e_max,
                text: label(k, ek),
            })
            .collect();
        Self { levels, n_max, e_max, annotations, ticks: Vec::new() }
    }

    /// All levels `0..=n_max`, each labeled with its numerical value.
    pub fn full(consts: &PhysicalConstants, n_max: u32) -> Self {
        Self::build(consts, n_max, n_max, |k, ek| format!("E_{} = {:.2e}", k, ek))
    }

    /// Levels `0..=n` on an axis sized for `n_max`, each labeled only by name
    /// and with matching named ticks.
    pub fn up_to(consts: &PhysicalConstants, n: u32, n_max: u32) -> Self {
        let mut diagram = Self::build(consts, n, n_max, |k, _| format!("E_{}", k));
        diagram.ticks
            = diagram.levels.iter().skip(1)
            .map(|&(k, ek)| (ek, format!("E_{}", k)))
            .collect();
        diagram
    }

    /// Draw onto `area`, describing the energy axis as `y_desc` in units of
    /// `unit`.
    ///
    /// Numeric energy labels are drawn only when there are no named ticks.
    pub fn draw<DB>(
        &self,
        area: &DrawingArea<DB, Shift>,
        y_desc: &str,
        unit: Option<&str>,
    ) -> PlotResult<()>
    where DB: DrawingBackend
    {
        let numeric = self.ticks.is_empty();
        let (scale, exp)
            = if numeric { energy_scale(self.e_max) } else { (1.0, 0) };
        let x_max = f64::from(self.n_max.max(1));
        let y_max = if self.e_max > 0.0 { 1.15 * self.e_max / scale } else { 1.0 };
        let mut chart = ChartBuilder::on(area)
            .margin(scaled_px(area, 10.0))
            .x_label_area_size(scaled_px(area, 40.0))
            .y_label_area_size(scaled_px(area, 90.0))
            .build_cartesian_2d(0.0..x_max, 0.0..y_max)?;

        let values = |e: &f64| format!("{:.1}", e);
        let blank = |_: &f64| String::new();
        let y_fmt: &dyn Fn(&f64) -> String
            = if numeric { &values } else { &blank };
        chart
            .configure_mesh()
            .x_labels(self.n_max as usize + 1)
            .y_labels(6)
            .x_desc("Quantum Number n")
            .y_desc(energy_desc(y_desc, unit, exp))
            .label_style((FONT, scaled(area, 12.0)))
            .axis_desc_style((FONT, scaled(area, 14.0)))
            .x_label_formatter(&quantum_number_label)
            .y_label_formatter(y_fmt)
            .draw()?;

        let points: Vec<(f64, f64)>
            = self.levels.iter()
            .map(|&(k, ek)| (f64::from(k), ek / scale))
            .collect();
        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                LEVEL_COLOR.stroke_width(2),
            ))?
            .label("Energy Levels")
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], LEVEL_COLOR.stroke_width(2))
            });
        let radius = scaled_px(area, 4.0);
        chart.draw_series(
            points.iter()
                .map(|&p| Circle::new(p, radius, LEVEL_COLOR.filled()))
        )?;

        let tick_len = 0.04 * x_max;
        for (ek, label) in self.ticks.iter() {
            let y = ek / scale;
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(0.0, y), (tick_len, y)],
                BLACK.stroke_width(1),
            )))?;
            let style
                = (FONT, scaled(area, 12.0)).into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Left, VPos::Center));
            chart.draw_series(std::iter::once(
                Text::new(label.clone(), (1.5 * tick_len, y), style)))?;
        }

        for note in self.annotations.iter() {
            let style
                = (FONT, scaled(area, 14.0)).into_font()
                .color(&LEVEL_COLOR)
                .pos(Pos::new(label_anchor(note.x, x_max), VPos::Bottom));
            chart.draw_series(std::iter::once(
                Text::new(note.text.clone(), (note.x, note.y / scale), style)))?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font((FONT, scaled(area, 13.0)))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_diagram_labels_values() {
        let consts = PhysicalConstants::electron();
        let diagram = EnergyDiagram::full(&consts, 5);
        assert_eq!(diagram.levels.len(), 6);
        assert_eq!(diagram.levels[0], (0, 0.0));
        assert_eq!(diagram.annotations.len(), 5);
        assert_eq!(diagram.annotations[0].text, "E_1 = 6.02e-38");
        assert!(diagram.ticks.is_empty());
        let a3 = &diagram.annotations[2];
        let expected = model::energy(&consts, 3) + 0.05 * diagram.e_max;
        assert_eq!(a3.x, 3.0);
        assert!((a3.y - expected).abs() < 1e-12 * diagram.e_max);
    }

    #[test]
    fn quantum_number_axis_shows_integers_once() {
        let ticks = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0];
        let labels: Vec<String> = ticks.iter().map(quantum_number_label).collect();
        assert_eq!(labels, vec!["0", "", "1", "", "2", "", "3"]);
    }

    #[test]
    fn energy_axis_scaling() {
        let consts = PhysicalConstants::electron();
        let diagram = EnergyDiagram::full(&consts, 5);
        let (scale, exp) = energy_scale(diagram.e_max);
        assert_eq!(exp, -36);
        assert!((scale / 1e-36 - 1.0).abs() < 1e-12);
        // several distinct labels over the scaled range
        assert!(diagram.e_max / scale > 1.0 && diagram.e_max / scale < 10.0);
        assert_eq!(energy_desc("Energy E_n", Some("J"), exp), "Energy E_n (1e-36 J)");

        let natural = EnergyDiagram::full(&PhysicalConstants::natural(), 5);
        assert_eq!(energy_scale(natural.e_max), (1.0, 0));
        assert_eq!(energy_desc("Energy E_n", None, 0), "Energy E_n");
        assert_eq!(energy_scale(0.0), (1.0, 0));
    }

    #[test]
    fn last_level_label_stays_inside() {
        assert!(matches!(label_anchor(5.0, 5.0), HPos::Right));
        assert!(matches!(label_anchor(4.0, 5.0), HPos::Center));
        let diagram = EnergyDiagram::full(&PhysicalConstants::electron(), 5);
        let last = diagram.annotations.last().unwrap();
        assert!(matches!(label_anchor(last.x, 5.0), HPos::Right));
    }

    #[test]
    fn partial_diagram_keeps_full_scale() {
        let consts = PhysicalConstants::natural();
        let diagram = EnergyDiagram::up_to(&consts, 2, 5);
        assert_eq!(diagram.levels.iter().map(|(k, _)| *k).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(diagram.e_max, model::energy(&consts, 5));
        let names: Vec<&str> = diagram.annotations.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(names, vec!["E_1", "E_2"]);
        assert_eq!(diagram.ticks.len(), 2);
        assert_eq!(diagram.ticks[1], (model::energy(&consts, 2), "E_2".to_string()));
    }
}
