//! Closed-form eigenstates of the infinite square well.
//!
//! All functions here are pure and take the [`PhysicalConstants`] of the box
//! explicitly. Array versions act element-wise over a sampled coordinate
//! array.

use std::{ f64::consts::PI, fmt };
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    error::ModelError,
    interp::{ self, Zero },
    units::{ self, Units },
};

pub type ModelResult<T> = Result<T, ModelError>;

/// Box length, reduced Planck constant, and particle mass.
///
/// All three are strictly positive; this is checked on construction and
/// values cannot be changed afterward.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhysicalConstants {
    length: f64,
    hbar: f64,
    mass: f64,
}

impl PhysicalConstants {
    /// Create a new set of constants, checking that each is positive and
    /// finite.
    pub fn new(length: f64, hbar: f64, mass: f64) -> ModelResult<Self> {
        let length = ModelError::check_positive(length, ModelError::BadLength)?;
        let hbar = ModelError::check_positive(hbar, ModelError::BadHbar)?;
        let mass = ModelError::check_positive(mass, ModelError::BadMass)?;
        Ok(Self { length, hbar, mass })
    }

    /// `L = ħ = m = 1`.
    pub fn natural() -> Self { Self { length: 1.0, hbar: 1.0, mass: 1.0 } }

    /// An electron in a 1 m box, with CODATA 2014 values for ħ and the
    /// electron mass.
    pub fn electron() -> Self {
        Self { length: 1.0, hbar: units::hbar_2014, mass: units::me_2014 }
    }

    /// Box length.
    pub fn length(&self) -> f64 { self.length }

    /// Reduced Planck constant.
    pub fn hbar(&self) -> f64 { self.hbar }

    /// Particle mass.
    pub fn mass(&self) -> f64 { self.mass }

    /// Natural units associated with the box.
    pub fn units(&self) -> Units { Units::new(self.hbar, self.mass, self.length) }
}

/// Principal quantum number of a box eigenstate, always at least 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuantumNumber(u32);

impl QuantumNumber {
    /// The ground state.
    pub const GROUND: Self = Self(1);

    /// Create a new quantum number, checking that `n >= 1`.
    pub fn new(n: u32) -> ModelResult<Self> {
        (n >= 1).then_some(Self(n)).ok_or(ModelError::BadQuantumNumber(n))
    }

    /// Return the underlying integer.
    pub fn get(self) -> u32 { self.0 }

    /// Iterate over all quantum numbers from 1 to `n_max`, inclusive.
    pub fn up_to(n_max: u32) -> impl Iterator<Item = Self> {
        (1..=n_max).map(Self)
    }
}

impl fmt::Display for QuantumNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<QuantumNumber> for u32 {
    fn from(n: QuantumNumber) -> Self { n.0 }
}

/// Compute the value of the `n`-th eigenstate at a single point.
///
/// ```
/// use pbox::{ model, PhysicalConstants, QuantumNumber };
///
/// let consts = PhysicalConstants::natural();
/// let psi = model::psi(&consts, QuantumNumber::GROUND, 0.5);
/// assert!((psi - 2.0_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn psi(consts: &PhysicalConstants, n: QuantumNumber, x: f64) -> f64 {
    let L = consts.length;
    (2.0 / L).sqrt() * (f64::from(n.0) * PI * x / L).sin()
}

/// Like [`psi`], but for an array of coordinates.
pub fn psi_arr<S>(consts: &PhysicalConstants, n: QuantumNumber, x: &Arr1<S>)
    -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    x.mapv(|xk| psi(consts, n, xk))
}

/// Compute the probability density |ψₙ(x)|² at a single point.
pub fn density(consts: &PhysicalConstants, n: QuantumNumber, x: f64) -> f64 {
    psi(consts, n, x).powi(2)
}

/// Like [`density`], but for an array of coordinates.
pub fn density_arr<S>(consts: &PhysicalConstants, n: QuantumNumber, x: &Arr1<S>)
    -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    x.mapv(|xk| density(consts, n, xk))
}

/// Compute the energy of the `n`-th level.
///
/// `n = 0` is accepted and gives zero, which is convenient as an axis anchor
/// in energy diagrams; it does not correspond to a physical state.
pub fn energy(consts: &PhysicalConstants, n: u32) -> f64 {
    let PhysicalConstants { length: L, hbar, mass } = *consts;
    (f64::from(n) * PI * hbar).powi(2) / (2.0 * mass * L.powi(2))
}

/// Compute the energies of levels `0..=n_max`.
pub fn energies(consts: &PhysicalConstants, n_max: u32) -> nd::Array1<f64> {
    (0..=n_max).map(|n| energy(consts, n)).collect()
}

/// Angular frequency `Eₙ / ħ` of the `n`-th state's phase factor.
pub fn angular_freq(consts: &PhysicalConstants, n: QuantumNumber) -> f64 {
    energy(consts, n.0) / consts.hbar
}

/// Time for the `n`-th state's phase factor to complete one full cycle.
pub fn period(consts: &PhysicalConstants, n: QuantumNumber) -> f64 {
    2.0 * PI / angular_freq(consts, n)
}

/// Real part of Ψₙ(x, t) = ψₙ(x) exp(-i Eₙ t / ħ).
pub fn real_part(consts: &PhysicalConstants, x: f64, t: f64, n: QuantumNumber)
    -> f64
{
    psi(consts, n, x) * (angular_freq(consts, n) * t).cos()
}

/// Imaginary part of Ψₙ(x, t) = ψₙ(x) exp(-i Eₙ t / ħ).
pub fn imag_part(consts: &PhysicalConstants, x: f64, t: f64, n: QuantumNumber)
    -> f64
{
    -psi(consts, n, x) * (angular_freq(consts, n) * t).sin()
}

/// Full complex value of Ψₙ(x, t).
pub fn amplitude(consts: &PhysicalConstants, x: f64, t: f64, n: QuantumNumber)
    -> C64
{
    psi(consts, n, x) * C64::cis(-angular_freq(consts, n) * t)
}

/// Like [`real_part`], but for an array of coordinates.
pub fn real_part_arr<S>(
    consts: &PhysicalConstants,
    x: &Arr1<S>,
    t: f64,
    n: QuantumNumber,
) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    let phase = (angular_freq(consts, n) * t).cos();
    x.mapv(|xk| psi(consts, n, xk) * phase)
}

/// Like [`imag_part`], but for an array of coordinates.
pub fn imag_part_arr<S>(
    consts: &PhysicalConstants,
    x: &Arr1<S>,
    t: f64,
    n: QuantumNumber,
) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    let phase = -(angular_freq(consts, n) * t).sin();
    x.mapv(|xk| psi(consts, n, xk) * phase)
}

/// Like [`amplitude`], but for an array of coordinates.
pub fn amplitude_arr<S>(
    consts: &PhysicalConstants,
    x: &Arr1<S>,
    t: f64,
    n: QuantumNumber,
) -> nd::Array1<C64>
where S: nd::Data<Elem = f64>
{
    let phase = C64::cis(-angular_freq(consts, n) * t);
    x.mapv(|xk| psi(consts, n, xk) * phase)
}

/// Locate the interior nodes of the `n`-th eigenstate as sampled over `x`.
///
/// The endpoints of `x` are excluded, since every eigenstate vanishes at the
/// walls. Nodes are located by linear interpolation between samples, so
/// accuracy is limited by the grid spacing.
pub fn nodes<S>(consts: &PhysicalConstants, n: QuantumNumber, x: &Arr1<S>)
    -> ModelResult<Vec<f64>>
where S: nd::Data<Elem = f64>
{
    if x.len() < 3 { return Ok(Vec::new()); }
    let interior = x.slice(nd::s![1..x.len() - 1]);
    let y = psi_arr(consts, n, &interior);
    Ok(interp::find_zeros(&interior, &y, Zero::All)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: u32) -> QuantumNumber { QuantumNumber::new(n).unwrap() }

    #[test]
    fn rejects_bad_constants() {
        assert!(matches!(
            PhysicalConstants::new(0.0, 1.0, 1.0),
            Err(ModelError::BadLength(_)),
        ));
        assert!(matches!(
            PhysicalConstants::new(1.0, -1.0, 1.0),
            Err(ModelError::BadHbar(_)),
        ));
        assert!(matches!(
            PhysicalConstants::new(1.0, 1.0, f64::NAN),
            Err(ModelError::BadMass(_)),
        ));
        assert!(PhysicalConstants::new(2.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn rejects_zero_quantum_number() {
        assert!(matches!(
            QuantumNumber::new(0),
            Err(ModelError::BadQuantumNumber(0)),
        ));
        assert_eq!(QuantumNumber::new(4).unwrap().get(), 4);
        let ns: Vec<u32> = QuantumNumber::up_to(3).map(u32::from).collect();
        assert_eq!(ns, vec![1, 2, 3]);
    }

    #[test]
    fn ground_state_midpoint() {
        let consts = PhysicalConstants::natural();
        assert!((psi(&consts, q(1), 0.5) - 2.0_f64.sqrt()).abs() < 1e-12);
        assert!(psi(&consts, q(2), 0.5).abs() < 1e-12);
    }

    #[test]
    fn energy_zero_is_anchor() {
        let consts = PhysicalConstants::electron();
        assert_eq!(energy(&consts, 0), 0.0);
        let e = energies(&consts, 5);
        assert_eq!(e.len(), 6);
        assert_eq!(e[0], 0.0);
        assert!((e[5] / e[1] - 25.0).abs() < 1e-9);
    }

    #[test]
    fn natural_units_give_n_squared_pi_squared() {
        let consts = PhysicalConstants::new(2.0, 0.7, 3.0).unwrap();
        let uu = consts.units();
        for n in 1..=5_u32 {
            let e_nat: f64 = uu.to_nat_energy(energy(&consts, n));
            let expected = (f64::from(n) * PI).powi(2);
            assert!((e_nat / expected - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn period_matches_angular_freq() {
        let consts = PhysicalConstants::natural();
        let n = q(2);
        let w = angular_freq(&consts, n);
        assert!((w - 2.0 * PI * PI).abs() < 1e-12);
        assert!((period(&consts, n) * w - 2.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn amplitude_agrees_with_parts() {
        let consts = PhysicalConstants::natural();
        let n = q(3);
        for &(x, t) in &[(0.1, 0.0), (0.37, 0.25), (0.8, 1.9)] {
            let a = amplitude(&consts, x, t, n);
            assert!((a.re - real_part(&consts, x, t, n)).abs() < 1e-12);
            assert!((a.im - imag_part(&consts, x, t, n)).abs() < 1e-12);
        }
    }

    #[test]
    fn array_versions_agree_with_scalar() {
        let consts = PhysicalConstants::natural();
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 11);
        let n = q(2);
        let t = 0.3;
        let re = real_part_arr(&consts, &x, t, n);
        let im = imag_part_arr(&consts, &x, t, n);
        let amp = amplitude_arr(&consts, &x, t, n);
        let dens = density_arr(&consts, n, &x);
        for (k, &xk) in x.iter().enumerate() {
            assert!((re[k] - real_part(&consts, xk, t, n)).abs() < 1e-12);
            assert!((im[k] - imag_part(&consts, xk, t, n)).abs() < 1e-12);
            assert!((amp[k].re - re[k]).abs() < 1e-12);
            assert!((dens[k] - density(&consts, n, xk)).abs() < 1e-12);
        }
    }

    #[test]
    fn nodes_sit_at_fractions_of_length() {
        let consts = PhysicalConstants::new(2.0, 1.0, 1.0).unwrap();
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 2.0, 500);
        let dx = x[1] - x[0];
        assert!(nodes(&consts, q(1), &x).unwrap().is_empty());
        for n in 2..=5_u32 {
            let found = nodes(&consts, q(n), &x).unwrap();
            assert_eq!(found.len(), n as usize - 1);
            for (k, xk) in found.iter().enumerate() {
                let expected = 2.0 * (k + 1) as f64 / f64::from(n);
                assert!((xk - expected).abs() < dx);
            }
        }
    }
}
