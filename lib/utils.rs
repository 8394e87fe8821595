//! Trapezoidal-rule integration and wavefunction normalization on uniform
//! grids.

use std::ops::Add;
use ndarray::{ self as nd, Ix1 };
use ndarray_linalg::Scalar;
use num_traits::{ One, Zero };
use crate::error::{ BError, LengthError, ParamError };

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Scalar,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    (dx / two) * (y[0] + two * y.slice(nd::s![1..n - 1]).sum() + y[n - 1])
}

/// Calculate the norm of a wavefunction, i.e. the trapezoidal integral of its
/// squared magnitude.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A::Real) -> A::Real
where
    S: nd::Data<Elem = A>,
    A: Scalar,
{
    let n: usize = q.len();
    let two = <A as Scalar>::Real::one() + <A as Scalar>::Real::one();
    (dx / two) * (
        q[0].square()
        + two * q.iter().skip(1).take(n - 2).map(|qk| qk.square())
            .fold(<A as Scalar>::Real::zero(), <A as Scalar>::Real::add)
        + q[n - 1].square()
    )
}

/// Calculate the inner product of two wavefunctions.
///
/// Returns [`LengthError`] if the two arrays have different lengths.
///
/// *Panics if either array has length less than 2*.
pub fn wf_dot<S, T, A>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
    dx: A::Real,
) -> Result<A, LengthError>
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Scalar,
{
    LengthError::check(q, p)?;
    let n: usize = q.len();
    let two = A::one() + A::one();
    Ok(
        (A::from_real(dx) / two) * (
            q[0].conj() * p[0]
            + two * q.iter().zip(p).skip(1).take(n - 2)
                .fold(A::zero(), |acc, (qk, pk)| acc + qk.conj() * *pk)
            + q[n - 1].conj() * p[n - 1]
        )
    )
}

// compute the normalization constant for `q`, failing if it is zero or
// non-finite
fn wf_norm_checked<S>(q: &nd::ArrayBase<S, Ix1>, dx: f64) -> Result<f64, BError>
where S: nd::Data<Elem = f64>
{
    ParamError::check_count("nx", q.len(), 2)?;
    ParamError::check_positive("dx", dx)?;
    let norm = wf_norm(q, dx);
    if norm.is_finite() && norm > f64::MIN_POSITIVE {
        Ok(norm.sqrt())
    } else {
        Err(BError::DegenerateEigenvector(norm))
    }
}

/// Renormalize a wavefunction in place so that the trapezoidal integral of
/// its square is 1.
///
/// Returns [`BError::DegenerateEigenvector`] if `q` is (numerically) zero.
pub fn wf_normalize<S>(q: &mut nd::ArrayBase<S, Ix1>, dx: f64)
    -> Result<(), BError>
where S: nd::DataMut<Elem = f64>
{
    let norm = wf_norm_checked(q, dx)?;
    q.iter_mut().for_each(|qk| { *qk /= norm; });
    Ok(())
}

/// Return a normalized copy of a wavefunction.
///
/// Returns [`BError::DegenerateEigenvector`] if `q` is (numerically) zero.
pub fn wf_normalized<S>(q: &nd::ArrayBase<S, Ix1>, dx: f64)
    -> Result<nd::Array1<f64>, BError>
where S: nd::Data<Elem = f64>
{
    let norm = wf_norm_checked(q, dx)?;
    Ok(q.mapv(|qk| qk / norm))
}
