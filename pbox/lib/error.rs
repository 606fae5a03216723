//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from constructors of the physical model and its sampling grids.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Returned when a box length is non-positive or non-finite.
    #[error("box length must be positive and finite; got {0}")]
    BadLength(f64),

    /// Returned when a reduced Planck constant is non-positive or non-finite.
    #[error("hbar must be positive and finite; got {0}")]
    BadHbar(f64),

    /// Returned when a particle mass is non-positive or non-finite.
    #[error("particle mass must be positive and finite; got {0}")]
    BadMass(f64),

    /// Returned when a quantum number less than 1 is encountered.
    #[error("quantum numbers must be at least 1; got {0}")]
    BadQuantumNumber(u32),

    /// Returned when a grid is requested with fewer than two points.
    #[error("grids must have at least 2 points; got {0}")]
    GridSize(usize),

    /// Returned when a time grid is requested with a non-positive span.
    #[error("time span must be positive and finite; got {0}")]
    BadTimeSpan(f64),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),
}

impl ModelError {
    pub(crate) fn check_positive(
        val: f64,
        err: fn(f64) -> Self,
    ) -> Result<f64, Self>
    {
        (val.is_finite() && val > 0.0).then_some(val).ok_or(err(val))
    }

    pub(crate) fn check_grid_size(n: usize) -> Result<(), Self> {
        (n >= 2).then_some(()).ok_or(Self::GridSize(n))
    }
}

/// Returned from figure and animation rendering.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Returned when a drawing operation fails on an existing backend.
    #[error("drawing error: {0}")]
    Drawing(String),

    /// Returned when an output backend cannot be created.
    #[error("backend error: {0}")]
    Backend(String),

    /// Returned when a frame index falls outside an animation.
    #[error("frame index {0} out of range for animation of {1} frames")]
    FrameIndex(usize, usize),

    /// [`ModelError`]
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl<E> From<DrawingAreaErrorKind<E>> for PlotError
where E: std::error::Error + Send + Sync
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Self::Drawing(err.to_string())
    }
}

impl PlotError {
    pub(crate) fn check_frame(idx: usize, count: usize) -> Result<(), Self> {
        (idx < count).then_some(()).ok_or(Self::FrameIndex(idx, count))
    }
}
