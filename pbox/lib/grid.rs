//! Evenly spaced sampling grids over the box and over time.

use ndarray as nd;
use crate::{
    error::ModelError,
    model::{ self, ModelResult, PhysicalConstants, QuantumNumber },
};

/// Evenly spaced positions covering `[0, L]`, endpoints included.
#[derive(Clone, Debug, PartialEq)]
pub struct SpatialGrid {
    x: nd::Array1<f64>,
    dx: f64,
}

impl SpatialGrid {
    /// Create a grid of `n` points over the box.
    pub fn new(consts: &PhysicalConstants, n: usize) -> ModelResult<Self> {
        ModelError::check_grid_size(n)?;
        let L = consts.length();
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, L, n);
        let dx = L / (n - 1) as f64;
        Ok(Self { x, dx })
    }

    /// Coordinate array.
    pub fn x(&self) -> &nd::Array1<f64> { &self.x }

    /// Grid spacing.
    pub fn dx(&self) -> f64 { self.dx }

    /// Number of points.
    pub fn len(&self) -> usize { self.x.len() }

    /// Always `false`; grids hold at least two points.
    pub fn is_empty(&self) -> bool { self.x.is_empty() }
}

/// Evenly spaced times covering `[0, t_max]`, endpoints included.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid {
    t: nd::Array1<f64>,
    t_max: f64,
}

impl TimeGrid {
    /// Create a grid of `n` times over `[0, t_max]`.
    pub fn new(t_max: f64, n: usize) -> ModelResult<Self> {
        ModelError::check_grid_size(n)?;
        let t_max = ModelError::check_positive(t_max, ModelError::BadTimeSpan)?;
        let t: nd::Array1<f64> = nd::Array1::linspace(0.0, t_max, n);
        Ok(Self { t, t_max })
    }

    /// Create a grid of `n` times spanning two full periods of the ground
    /// state, `t_max = 4πħ / E₁`.
    pub fn two_periods(consts: &PhysicalConstants, n: usize)
        -> ModelResult<Self>
    {
        let t_max = 2.0 * model::period(consts, QuantumNumber::GROUND);
        Self::new(t_max, n)
    }

    /// Time array.
    pub fn t(&self) -> &nd::Array1<f64> { &self.t }

    /// Final time.
    pub fn t_max(&self) -> f64 { self.t_max }

    /// Number of points.
    pub fn len(&self) -> usize { self.t.len() }

    /// Always `false`; grids hold at least two points.
    pub fn is_empty(&self) -> bool { self.t.is_empty() }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use super::*;

    #[test]
    fn spatial_grid_spans_box() {
        let consts = PhysicalConstants::new(3.0, 1.0, 1.0).unwrap();
        let grid = SpatialGrid::new(&consts, 500).unwrap();
        assert_eq!(grid.len(), 500);
        assert_eq!(grid.x()[0], 0.0);
        assert!((grid.x()[499] - 3.0).abs() < 1e-12);
        assert!((grid.dx() - 3.0 / 499.0).abs() < 1e-15);
    }

    #[test]
    fn rejects_degenerate_grids() {
        let consts = PhysicalConstants::natural();
        assert!(matches!(
            SpatialGrid::new(&consts, 1),
            Err(ModelError::GridSize(1)),
        ));
        assert!(matches!(
            TimeGrid::new(0.0, 10),
            Err(ModelError::BadTimeSpan(_)),
        ));
    }

    #[test]
    fn time_grid_covers_two_ground_periods() {
        let consts = PhysicalConstants::natural();
        let tgrid = TimeGrid::two_periods(&consts, 200).unwrap();
        let e1 = model::energy(&consts, 1);
        assert!((tgrid.t_max() - 4.0 * PI / e1).abs() < 1e-12);
        assert_eq!(tgrid.len(), 200);
        assert!((tgrid.t()[199] - tgrid.t_max()).abs() < 1e-12);
    }
}
