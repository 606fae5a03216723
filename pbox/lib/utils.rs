//! Miscellaneous numerical tools for checking sampled wavefunctions.

use ndarray::{ self as nd, Ix1 };
use num_complex::Complex64 as C64;
use num_traits::Float;

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    let inner
        = y.slice(nd::s![1..n - 1]).iter()
        .fold(A::zero(), |acc, yk| acc + *yk);
    (dx / two) * (y[0] + two * inner + y[n - 1])
}

/// Calculate the norm of a real wavefunction with the trapezoidal rule.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    trapz(&q.mapv(|qk| qk * qk), dx)
}

/// Calculate the norm of a complex wavefunction with the trapezoidal rule.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm_c<S>(q: &nd::ArrayBase<S, Ix1>, dx: f64) -> f64
where S: nd::Data<Elem = C64>
{
    trapz(&q.mapv(|qk| qk.norm_sqr()), dx)
}

/// Calculate the norm of a real wavefunction as a plain Riemann sum,
/// `Σ q[i]² dx`.
///
/// This agrees with [`wf_norm`] whenever `q` vanishes at both ends of the
/// grid.
pub fn riemann_norm<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    q.iter().fold(A::zero(), |acc, qk| acc + *qk * *qk) * dx
}

/// Calculate the inner product of two real wavefunctions with the
/// trapezoidal rule.
///
/// *Panics if either array has length less than 2*.
pub fn wf_dot<S, T, A>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
    dx: A,
) -> A
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Float,
{
    let prod: nd::Array1<A>
        = q.iter().zip(p)
        .map(|(qk, pk)| *qk * *pk)
        .collect();
    trapz(&prod, dx)
}
