#![allow(non_snake_case)]

//! Closed-form eigenstates of a particle in a one-dimensional infinite square
//! well ("particle in a box"), along with the sampling and plotting machinery
//! needed to render them as static figures and animations.
//!
//! For a box of length *L* and a particle of mass *m*, the eigenstates are
//! ```text
//! ψₙ(x) = √(2/L) sin(nπx/L),    n = 1, 2, ...
//!
//!        n²π²ħ²
//! Eₙ   = ------
//!        2 m L²
//! ```
//! and evolve in time by a pure phase, Ψₙ(x, t) = ψₙ(x) exp(-i Eₙ t / ħ).
//!
//! Provides:
//! - [`model`]: evaluation of ψₙ, |ψₙ|², Eₙ, and Ψₙ(x, t)
//! - [`grid`]: spatial and temporal sampling grids
//! - [`timedep`]: whole-grid time evolution of stationary states
//! - [`plot`]: static figures and frame-by-frame animations via
//!   [`plotters`]
//!
//! ```
//! use pbox::{ grid::SpatialGrid, model, PhysicalConstants, QuantumNumber };
//!
//! let consts = PhysicalConstants::natural();
//! let grid = SpatialGrid::new(&consts, 500).unwrap();
//! let n = QuantumNumber::new(3).unwrap();
//! let psi = model::psi_arr(&consts, n, grid.x());
//! assert!(psi[0].abs() < 1e-12);
//! assert!((model::energy(&consts, 3) / model::energy(&consts, 1) - 9.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod units;
pub mod model;
pub mod grid;
pub mod timedep;
pub mod interp;
pub mod utils;
pub mod plot;

pub use model::{ PhysicalConstants, QuantumNumber };

/// Default number of points in a spatial grid.
pub const DEF_GRID_POINTS: usize = 500;

/// Default number of points in a time grid.
pub const DEF_TIME_POINTS: usize = 200;

/// Default maximum quantum number shown in figures.
pub const DEF_N_MAX: u32 = 5;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
