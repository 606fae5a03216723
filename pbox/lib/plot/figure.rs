//! Static three-panel overview: wavefunctions, probability densities, and the
//! energy ladder for `n = 1..=n_max`.

use std::path::Path;
use log::info;
use plotters::{ coord::Shift, prelude::* };
use crate::{
    grid::SpatialGrid,
    model::{ self, ModelResult, PhysicalConstants, QuantumNumber },
    plot::{
        draw_curves,
        scaled,
        levels::EnergyDiagram,
        series_color,
        Axes,
        Curve,
        FigureSize,
        PlotResult,
        FONT,
    },
};

/// Overlay of every eigenstate up to some maximum quantum number.
#[derive(Clone, Debug)]
pub struct StaticFigure {
    consts: PhysicalConstants,
    grid: SpatialGrid,
    n_max: QuantumNumber,
    energy_unit: Option<String>,
}

impl StaticFigure {
    pub const TITLE: &'static str
        = "Particle in a Box: Wavefunction, Probability Density, and Energy Levels";

    /// Create a new figure showing states `1..=n_max`.
    pub fn new(consts: PhysicalConstants, grid: SpatialGrid, n_max: u32)
        -> ModelResult<Self>
    {
        let n_max = QuantumNumber::new(n_max)?;
        Ok(Self { consts, grid, n_max, energy_unit: None })
    }

    /// Name the unit of the energy axis, e.g. `"J"` for SI constants.
    pub fn with_energy_unit(mut self, unit: &str) -> Self {
        self.energy_unit = Some(unit.to_string());
        self
    }

    fn curves<F>(&self, f: F) -> Vec<Curve>
    where F: Fn(QuantumNumber) -> ndarray::Array1<f64>
    {
        QuantumNumber::up_to(self.n_max.get()).enumerate()
            .map(|(k, n)| Curve {
                label: format!("n = {}", n),
                y: f(n),
                color: series_color(k),
            })
            .collect()
    }

    /// ψₙ(x) for each `n`.
    pub fn wavefunctions(&self) -> Vec<Curve> {
        self.curves(|n| model::psi_arr(&self.consts, n, self.grid.x()))
    }

    /// |ψₙ(x)|² for each `n`.
    pub fn densities(&self) -> Vec<Curve> {
        self.curves(|n| model::density_arr(&self.consts, n, self.grid.x()))
    }

    /// The full energy ladder with numerical labels.
    pub fn energy_diagram(&self) -> EnergyDiagram {
        EnergyDiagram::full(&self.consts, self.n_max.get())
    }

    /// Draw the figure onto a blank `root`.
    pub fn draw<DB>(&self, root: &DrawingArea<DB, Shift>) -> PlotResult<()>
    where DB: DrawingBackend
    {
        let L = self.consts.length();
        let body = root.titled(Self::TITLE, (FONT, scaled(root, 24.0)))?;
        let panels = body.split_evenly((3, 1));
        let psi_axes = Axes {
            x_range: 0.0..L,
            y_range: -1.5..1.5,
            x_desc: "",
            y_desc: "ψ_n(x)",
        };
        draw_curves(&panels[0], self.grid.x(), &self.wavefunctions(), &psi_axes, None)?;
        let density_axes = Axes {
            x_range: 0.0..L,
            y_range: 0.0..3.0,
            x_desc: "Position x",
            y_desc: "|ψ_n(x)|²",
        };
        draw_curves(&panels[1], self.grid.x(), &self.densities(), &density_axes, None)?;
        self.energy_diagram()
            .draw(&panels[2], "Energy E_n", self.energy_unit.as_deref())?;
        Ok(())
    }

    /// Render the figure to a still image at `path`.
    pub fn save_png<P>(&self, path: P, size: FigureSize) -> PlotResult<()>
    where P: AsRef<Path>
    {
        let path = path.as_ref();
        let root = BitMapBackend::new(path, size.pixels()).into_drawing_area();
        root.fill(&WHITE)?;
        self.draw(&root)?;
        root.present()?;
        info!("wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn figure() -> StaticFigure {
        let consts = PhysicalConstants::natural();
        let grid = SpatialGrid::new(&consts, 500).unwrap();
        StaticFigure::new(consts, grid, 5).unwrap()
    }

    #[test]
    fn one_curve_per_state() {
        let fig = figure();
        let psi = fig.wavefunctions();
        let rho = fig.densities();
        assert_eq!(psi.len(), 5);
        assert_eq!(rho.len(), 5);
        assert_eq!(psi[2].label, "n = 3");
        assert_ne!(psi[0].color, psi[1].color);
        psi.iter().zip(&rho)
            .for_each(|(p, r)| {
                p.y.iter().zip(&r.y)
                    .for_each(|(pk, rk)| assert!((pk * pk - rk).abs() < 1e-12));
            });
    }

    #[test]
    fn energy_unit_is_optional() {
        assert_eq!(figure().energy_unit, None);
        let fig = figure().with_energy_unit("J");
        assert_eq!(fig.energy_unit.as_deref(), Some("J"));
    }

    #[test]
    fn rejects_empty_figure() {
        let consts = PhysicalConstants::natural();
        let grid = SpatialGrid::new(&consts, 10).unwrap();
        assert!(StaticFigure::new(consts, grid, 0).is_err());
    }

    #[test]
    #[ignore = "needs system fonts"]
    fn draws_to_buffer() {
        let fig = figure();
        let (w, h) = FigureSize::new(4.0, 5.0, 50).pixels();
        let mut buf = vec![0_u8; (w * h * 3) as usize];
        let root = BitMapBackend::with_buffer(&mut buf, (w, h)).into_drawing_area();
        root.fill(&WHITE).unwrap();
        fig.draw(&root).unwrap();
        root.present().unwrap();
    }
}
