//! Continuous time sweep: real and imaginary parts of Ψₙ(x, t) for
//! `n = 1..=n_max` in stacked panels, one frame per time sample.

use plotters::{ coord::Shift, prelude::* };
use crate::{
    error::PlotError,
    grid::{ SpatialGrid, TimeGrid },
    model::{ self, ModelResult, PhysicalConstants, QuantumNumber },
    plot::{
        anim::Animation,
        draw_curves,
        scaled,
        Axes,
        Curve,
        PlotResult,
        FONT,
    },
};

/// Default display time of each frame.
pub const DEF_FRAME_DELAY_MS: u32 = 50;

const RE_COLOR: RGBColor = RGBColor(0, 0, 255);
const IM_COLOR: RGBColor = RGBColor(255, 0, 0);

/// One panel of an [`EvolveFrame`].
#[derive(Clone, Debug, PartialEq)]
pub struct EvolvePanel {
    pub n: QuantumNumber,
    pub tag: String,
    pub re: Curve,
    pub im: Curve,
}

/// Everything drawn in a single frame of a [`TimeEvolution`].
#[derive(Clone, Debug, PartialEq)]
pub struct EvolveFrame {
    pub t: f64,
    pub panels: Vec<EvolvePanel>,
}

/// Animation of several eigenstates' phase rotation over a shared time grid.
#[derive(Clone, Debug)]
pub struct TimeEvolution {
    consts: PhysicalConstants,
    grid: SpatialGrid,
    tgrid: TimeGrid,
    n_max: QuantumNumber,
    frame_delay_ms: u32,
}

impl TimeEvolution {
    /// Create a new animation of states `1..=n_max`, one frame per entry of
    /// `tgrid`.
    pub fn new(
        consts: PhysicalConstants,
        grid: SpatialGrid,
        tgrid: TimeGrid,
        n_max: u32,
    ) -> ModelResult<Self>
    {
        let n_max = QuantumNumber::new(n_max)?;
        Ok(Self { consts, grid, tgrid, n_max, frame_delay_ms: DEF_FRAME_DELAY_MS })
    }

    /// Set the display time of each frame.
    pub fn with_frame_delay(mut self, ms: u32) -> Self {
        self.frame_delay_ms = ms;
        self
    }

    /// Figure title, shared by all frames.
    pub fn title(&self) -> String {
        let ns: Vec<String>
            = QuantumNumber::up_to(self.n_max.get())
            .map(|n| n.to_string())
            .collect();
        format!("Real and Imaginary Parts of Ψ_n(x, t) for n = {}", ns.join(", "))
    }

    /// Compute the contents of frame `idx`.
    pub fn frame(&self, idx: usize) -> PlotResult<EvolveFrame> {
        PlotError::check_frame(idx, self.frame_count())?;
        let t = self.tgrid.t()[idx];
        let x = self.grid.x();
        let panels: Vec<EvolvePanel>
            = QuantumNumber::up_to(self.n_max.get())
            .map(|n| EvolvePanel {
                n,
                tag: format!("n = {}", n),
                re: Curve {
                    label: "Re(Ψ_n(x, t))".to_string(),
                    y: model::real_part_arr(&self.consts, x, t, n),
                    color: RE_COLOR,
                },
                im: Curve {
                    label: "Im(Ψ_n(x, t))".to_string(),
                    y: model::imag_part_arr(&self.consts, x, t, n),
                    color: IM_COLOR,
                },
            })
            .collect();
        Ok(EvolveFrame { t, panels })
    }
}

impl Animation for TimeEvolution {
    fn frame_count(&self) -> usize { self.tgrid.len() }

    fn frame_delay_ms(&self) -> u32 { self.frame_delay_ms }

    fn draw_frame<DB>(&self, root: &DrawingArea<DB, Shift>, idx: usize)
        -> PlotResult<()>
    where DB: DrawingBackend
    {
        let frame = self.frame(idx)?;
        let body = root.titled(&self.title(), (FONT, scaled(root, 24.0)))?;
        let areas = body.split_evenly((frame.panels.len(), 1));
        let axes = Axes {
            x_range: 0.0..self.consts.length(),
            y_range: -2.0..2.0,
            x_desc: "Position (x)",
            y_desc: "Wavefunction",
        };
        for (area, panel) in areas.iter().zip(&frame.panels) {
            draw_curves(
                area,
                self.grid.x(),
                &[panel.re.clone(), panel.im.clone()],
                &axes,
                Some(panel.tag.as_str()),
            )?;
        }
        Ok(())
    }
}
