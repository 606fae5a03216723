//! Quantum-number sweep: one frame per eigenstate.
//!
//! Frame `i` shows ψₙ and |ψₙ|² for `n = i + 1` only, while the energy panel
//! shows every level up to and including `n`, so the ladder fills in as the
//! animation proceeds. All labels are regenerated for each frame.

use plotters::{ coord::Shift, prelude::* };
use crate::{
    error::PlotError,
    grid::SpatialGrid,
    model::{ self, ModelResult, PhysicalConstants, QuantumNumber },
    plot::{
        anim::Animation,
        draw_curves,
        scaled,
        levels::EnergyDiagram,
        Axes,
        Curve,
        PlotResult,
        FONT,
    },
};

/// Default display time of each frame.
pub const DEF_FRAME_DELAY_MS: u32 = 1000;

const PSI_COLOR: RGBColor = RGBColor(0, 0, 255);
const DENSITY_COLOR: RGBColor = RGBColor(255, 0, 0);

/// Everything drawn in a single frame of a [`QuantumSweep`].
#[derive(Clone, Debug, PartialEq)]
pub struct SweepFrame {
    pub n: QuantumNumber,
    pub title: String,
    pub psi: Curve,
    pub density: Curve,
    pub energy: EnergyDiagram,
}

/// Animation stepping through `n = 1..=n_max`.
#[derive(Clone, Debug)]
pub struct QuantumSweep {
    consts: PhysicalConstants,
    grid: SpatialGrid,
    n_max: QuantumNumber,
    frame_delay_ms: u32,
}

impl QuantumSweep {
    /// Create a new sweep over states `1..=n_max`.
    pub fn new(consts: PhysicalConstants, grid: SpatialGrid, n_max: u32)
        -> ModelResult<Self>
    {
        let n_max = QuantumNumber::new(n_max)?;
        Ok(Self { consts, grid, n_max, frame_delay_ms: DEF_FRAME_DELAY_MS })
    }

    /// Set the display time of each frame.
    pub fn with_frame_delay(mut self, ms: u32) -> Self {
        self.frame_delay_ms = ms;
        self
    }

    /// Compute the contents of frame `idx`.
    pub fn frame(&self, idx: usize) -> PlotResult<SweepFrame> {
        PlotError::check_frame(idx, self.frame_count())?;
        let n = QuantumNumber::new(idx as u32 + 1)?;
        let psi = model::psi_arr(&self.consts, n, self.grid.x());
        let density = psi.mapv(|pk| pk * pk);
        Ok(SweepFrame {
            n,
            title: format!("Particle in a Box: n = {}", n),
            psi: Curve {
                label: "Wavefunction ψ_n(x)".to_string(),
                y: psi,
                color: PSI_COLOR,
            },
            density: Curve {
                label: "Probability Density |ψ_n(x)|²".to_string(),
                y: density,
                color: DENSITY_COLOR,
            },
            energy: EnergyDiagram::up_to(&self.consts, n.get(), self.n_max.get()),
        })
    }
}

impl Animation for QuantumSweep {
    fn frame_count(&self) -> usize { self.n_max.get() as usize }

    fn frame_delay_ms(&self) -> u32 { self.frame_delay_ms }

    fn draw_frame<DB>(&self, root: &DrawingArea<DB, Shift>, idx: usize)
        -> PlotResult<()>
    where DB: DrawingBackend
    {
        let frame = self.frame(idx)?;
        let L = self.consts.length();
        let body = root.titled(&frame.title, (FONT, scaled(root, 24.0)))?;
        let panels = body.split_evenly((3, 1));
        let psi_axes = Axes {
            x_range: 0.0..L,
            y_range: -1.5..1.5,
            x_desc: "",
            y_desc: "ψ_n(x)",
        };
        draw_curves(
            &panels[0],
            self.grid.x(),
            std::slice::from_ref(&frame.psi),
            &psi_axes,
            None,
        )?;
        let density_axes = Axes {
            x_range: 0.0..L,
            y_range: 0.0..3.0,
            x_desc: "Position x",
            y_desc: "|ψ_n(x)|²",
        };
        draw_curves(
            &panels[1],
            self.grid.x(),
            std::slice::from_ref(&frame.density),
            &density_axes,
            None,
        )?;
        frame.energy.draw(&panels[2], "Energy E_n", None)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweep() -> QuantumSweep {
        let consts = PhysicalConstants::electron();
        let grid = SpatialGrid::new(&consts, 500).unwrap();
        QuantumSweep::new(consts, grid, 5).unwrap()
    }

    #[test]
    fn one_frame_per_state() {
        let anim = sweep();
        assert_eq!(anim.frame_count(), 5);
        assert_eq!(anim.frame_delay_ms(), 1000);
        assert_eq!(anim.clone().with_frame_delay(250).frame_delay_ms(), 250);
        assert!(matches!(anim.frame(5), Err(PlotError::FrameIndex(5, 5))));
    }

    #[test]
    fn ladder_fills_in_cumulatively() {
        let anim = sweep();
        let mut prev: Vec<(u32, f64)> = Vec::new();
        for idx in 0..anim.frame_count() {
            let frame = anim.frame(idx).unwrap();
            let n = frame.n.get();
            assert_eq!(n as usize, idx + 1);
            assert_eq!(frame.title, format!("Particle in a Box: n = {}", n));
            assert_eq!(frame.energy.levels.len(), n as usize + 1);
            assert_eq!(&frame.energy.levels[..prev.len()], prev.as_slice());
            assert_eq!(frame.energy.annotations.len(), n as usize);
            assert_eq!(frame.energy.ticks.len(), n as usize);
            assert_eq!(frame.energy.annotations.last().unwrap().text, format!("E_{}", n));
            prev = frame.energy.levels.clone();
        }
    }

    #[test]
    fn frame_shows_only_its_own_state() {
        let anim = sweep();
        let frame = anim.frame(2).unwrap();
        let consts = PhysicalConstants::electron();
        let grid = SpatialGrid::new(&consts, 500).unwrap();
        let expected = model::psi_arr(&consts, QuantumNumber::new(3).unwrap(), grid.x());
        assert_eq!(frame.psi.y, expected);
        assert!(frame.density.y.iter().zip(&expected)
            .all(|(rk, pk)| (rk - pk * pk).abs() < 1e-15));
    }
}
