//! Time evolution of box eigenstates.
//!
//! Eigenstates are stationary, so evolution is a pure phase rotation,
//! ```text
//! Ψₙ(x, t) = ψₙ(x) exp(-i Eₙ t / ħ)
//! ```
//! and no numerical integration is needed.
//!
//! In all 2D arrays, the first (or zero-th) axis indexes time.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    Arr2,
    model::{ self, PhysicalConstants, QuantumNumber },
    utils::wf_norm_c,
};

/// Sample Ψₙ(x, t) over every combination of the time coordinates `t` and
/// space coordinates `x`.
pub fn evolve<S, T>(
    consts: &PhysicalConstants,
    n: QuantumNumber,
    x: &Arr1<S>,
    t: &Arr1<T>,
) -> nd::Array2<C64>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    let psi = model::psi_arr(consts, n, x);
    let w = model::angular_freq(consts, n);
    let mut q: nd::Array2<C64> = nd::Array2::zeros((t.len(), x.len()));
    for (mut qk, &tk) in q.axis_iter_mut(nd::Axis(0)).zip(t) {
        let phase = C64::cis(-w * tk);
        nd::Zip::from(&mut qk).and(&psi)
            .for_each(|qkj, &psij| { *qkj = psij * phase; });
    }
    q
}

/// Compute the norm of each time slice of an evolved state.
pub fn norms<S>(q: &Arr2<S>, dx: f64) -> nd::Array1<f64>
where S: nd::Data<Elem = C64>
{
    q.outer_iter()
        .map(|qk| wf_norm_c(&qk, dx))
        .collect()
}

/// Compute the probability density of each time slice of an evolved state.
pub fn densities<S>(q: &Arr2<S>) -> nd::Array2<f64>
where S: nd::Data<Elem = C64>
{
    q.mapv(|qkj| qkj.norm_sqr())
}
