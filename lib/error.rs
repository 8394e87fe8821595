//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use std::borrow::Cow;
use ndarray as nd;
use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Returned when a configuration value lies outside of its allowed domain.
///
/// This is checked before any numerical work is done.
#[derive(Debug, Error)]
#[error("invalid parameter `{name}`: {reason}; got {value}")]
pub struct ParamError {
    /// Name of the offending parameter.
    pub name: &'static str,
    /// Offending value.
    pub value: f64,
    /// Constraint that was violated.
    pub reason: Cow<'static, str>,
}

impl ParamError {
    pub(crate) fn new<R>(name: &'static str, value: f64, reason: R) -> Self
    where R: Into<Cow<'static, str>>
    {
        Self { name, value, reason: reason.into() }
    }

    pub(crate) fn check_positive(name: &'static str, value: f64)
        -> Result<(), Self>
    {
        (value.is_finite() && value > 0.0).then_some(())
            .ok_or(Self::new(name, value, "must be finite and greater than 0"))
    }

    pub(crate) fn check_nonnegative(name: &'static str, value: f64)
        -> Result<(), Self>
    {
        (value.is_finite() && value >= 0.0).then_some(())
            .ok_or(Self::new(name, value, "must be finite and non-negative"))
    }

    pub(crate) fn check_finite(name: &'static str, value: f64)
        -> Result<(), Self>
    {
        value.is_finite().then_some(())
            .ok_or(Self::new(name, value, "must be finite"))
    }

    pub(crate) fn check_count(name: &'static str, value: usize, min: usize)
        -> Result<(), Self>
    {
        (value >= min).then_some(())
            .ok_or_else(|| {
                Self::new(name, value as f64, format!("must be at least {min}"))
            })
    }
}

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

/// Returned from the bound-state pipeline.
#[derive(Debug, Error)]
pub enum BError {
    /// [`ParamError`]
    #[error("{0}")]
    Param(#[from] ParamError),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),

    /// Returned when the iteration budget of the eigensolver is exhausted.
    #[error(
        "eigen::{stage}: failed to converge for eigenvalue index {index} \
        within {maxiters} iterations"
    )]
    Convergence {
        /// `"bisect"` or `"inverse_iter"`.
        stage: &'static str,
        index: usize,
        maxiters: usize,
    },

    /// Returned when a vector with zero (or non-finite) norm is passed to
    /// [`wf_normalize`][crate::utils::wf_normalize].
    #[error("cannot normalize a vector with norm {0}")]
    DegenerateEigenvector(f64),
}

impl BError {
    pub(crate) fn check_epsilon(epsilon: f64) -> Result<(), Self> {
        ParamError::check_positive("epsilon", epsilon).map_err(Self::from)
    }

    pub(crate) fn check_maxiters(maxiters: usize) -> Result<(), Self> {
        ParamError::check_count("maxiters", maxiters, 1).map_err(Self::from)
    }
}

/// Returned from the scattering pipeline.
#[derive(Debug, Error)]
pub enum SError {
    /// [`ParamError`]
    #[error("{0}")]
    Param(#[from] ParamError),

    /// Returned when the boundary-matching system is singular, either
    /// because the regional wavenumbers combine degenerately or because its
    /// solution is non-finite.
    #[error(
        "boundary-matching system is singular for k_left = {k_left}, \
        k_well = {k_well}"
    )]
    SingularMatching { k_left: f64, k_well: f64 },

    /// [`LinalgError`], returned when the LU factorization of the matching
    /// matrix fails.
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),
}
