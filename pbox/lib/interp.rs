//! Functions to find zeros in array-sampled (continuous) functions via linear
//! interpolation between adjacent samples.
//!
//! ```
//! use ndarray as nd;
//! use pbox::interp::{ Zero, find_zeros };
//!
//! let x: nd::Array1<f64> = nd::Array::linspace(-5.0, 5.0, 1000);
//! let y = x.mapv(|xk| (xk + 3.0) * (xk - 0.5) * (xk - 2.0));
//! let zeros = find_zeros(&x, &y, Zero::All).unwrap();
//! assert_eq!(zeros.len(), 3);
//! assert!(
//!     [-3.0, 0.5, 2.0].into_iter()
//!         .zip(zeros)
//!         .all(|(expected, computed)| (computed - expected).abs() < 1e-3)
//! )
//! ```

use ndarray as nd;
use num_traits::Float;
use crate::error::LengthError;

pub type InterpResult<T> = Result<T, LengthError>;

/// Specifies a set of zeros to look for in [`find_zeros`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Zero {
    /// Points at which a function changes from positive to negative.
    Falling,
    /// Points at which a function changes from negative to positive.
    Rising,
    /// Either/both of the above.
    All,
}

impl Zero {
    fn matches<A>(&self, a: &A, b: &A) -> bool
    where A: PartialEq + PartialOrd
    {
        match self {
            Self::Falling if a > b => true,
            Self::Rising if a < b => true,
            Self::All if a != b => true,
            _ => false,
        }
    }
}

// x-intercept of the line through (x0, y0) and (x1, y1)
fn secant_zero<A: Float>(x0: A, y0: A, x1: A, y1: A) -> A {
    x0 - y0 * (x1 - x0) / (y1 - y0)
}

/// Return a list of all zeros of a given kind in a sampled function, in
/// ascending order of `data_x`.
///
/// A sample that is exactly zero is reported as-is when its neighbors
/// (or the sample itself, at either end of the array) differ in the way
/// `kind` asks for; otherwise a zero is reported wherever adjacent samples
/// differ in sign. The function must be locally monotonic on the scale of the
/// grid spacing.
pub fn find_zeros<S, T, A>(
    data_x: &nd::ArrayBase<S, nd::Ix1>,
    data_y: &nd::ArrayBase<T, nd::Ix1>,
    kind: Zero,
) -> InterpResult<Vec<A>>
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Float,
{
    LengthError::check(data_x, data_y)?;
    let z = A::zero();
    let n = data_y.len();
    let exact
        = data_x.iter().zip(data_y).enumerate()
        .filter(|(i, (_, yi))| {
            let prev = if *i > 0 { &data_y[*i - 1] } else { *yi };
            let next = if *i + 1 < n { &data_y[*i + 1] } else { *yi };
            **yi == z && kind.matches(prev, next)
        })
        .map(|(i, (xi, _))| (i, *xi));
    let crossings
        = data_x.iter().zip(data_y)
        .zip(data_x.iter().zip(data_y).skip(1))
        .enumerate()
        .filter(|(_, ((_, yi), (_, yip1)))| {
            **yi * **yip1 < z && kind.matches(*yi, *yip1)
        })
        .map(|(i, ((xi, yi), (xip1, yip1)))| {
            (i, secant_zero(*xi, *yi, *xip1, *yip1))
        });
    let mut zeros: Vec<(usize, A)> = exact.chain(crossings).collect();
    zeros.sort_by_key(|(i, _)| *i);
    Ok(zeros.into_iter().map(|(_, x0)| x0).collect())
}
