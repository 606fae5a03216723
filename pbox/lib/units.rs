#![allow(non_upper_case_globals)]

//! Physical constants and conversion to the natural units of a box.
//!
//! Concrete physical constants are the CODATA 2014 values.

/// reduced Planck constant, CODATA 2014 (kg m^2 s^-1)
pub const hbar_2014: f64 = 1.0545718e-34;

/// electron mass, CODATA 2014 (kg)
pub const me_2014: f64 = 9.10938356e-31;

/// A collection of natural unit scaling factors for a particle of mass *m* in
/// a box of length *L*.
///
/// The energy unit is chosen so that the box eigenenergies are exactly
/// *n*²*π*² and the time unit so that the phase of Ψₙ advances by one radian
/// per unit of energy per unit of time:
/// ```text
///       ħ²
/// e = ------       t = ħ / e
///     2 m L²
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Units {
    /// Particle mass.
    pub m: f64,
    /// Base length scale.
    pub a: f64,
    /// Associated energy scale.
    pub e: f64,
    /// Associated (angular) time scale.
    pub t: f64,
}

impl Units {
    /// Construct from a reduced Planck constant, mass, and length scale, all
    /// given in the same base unit system.
    pub fn new(hbar_base: f64, mass: f64, a: f64) -> Self {
        let e_unit = hbar_base.powi(2) / 2.0 / mass / a.powi(2);
        let t_unit = hbar_base / e_unit;
        Self { m: mass, a, e: e_unit, t: t_unit }
    }

    /// Convert a quantity with dimensions of energy in the base unit system to
    /// natural units.
    pub fn to_nat_energy<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.e.recip()
    }

    /// Convert a quantity with dimensions of time in the base unit system to
    /// natural units.
    pub fn to_nat_time<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.t.recip()
    }
}
