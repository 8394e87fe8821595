//! Selective eigensolver for real, symmetric tridiagonal matrices.
//!
//! Eigenvalues are located by bisection on Sturm sequence counts within the
//! Gershgorin interval, so that only the requested part of the spectrum is
//! computed. Eigenvectors are then found by inverse iteration on the shifted
//! matrix, factorized with partial pivoting. Vectors belonging to eigenvalues
//! closer together than `1e-3 ‖H‖` are re-orthogonalized against each other at
//! every step.
//!
//! Returned eigenvectors have unit Euclidean norm, with the sign chosen so
//! that the largest-magnitude component is positive.

use ndarray as nd;
use crate::{
    config::EigenOpts,
    error::{ BError, LengthError, ParamError },
    hamiltonian::Tridiagonal,
};

pub type BResult<T> = Result<T, BError>;

// eigenvalues closer than this (relative to ‖H‖) are treated as a cluster
const ORTHO_CLUSTER: f64 = 1e-3;

// check that `h` is well-formed and `(il, iu)` is a valid, inclusive range of
// eigenvalue indices
fn check_range(h: &Tridiagonal, range: (usize, usize)) -> BResult<()> {
    let n = h.len();
    ParamError::check_count("nx", n, 2)?;
    if h.off.len() != n - 1 {
        return Err(LengthError(h.off.len(), n - 1).into());
    }
    let (il, iu) = range;
    if il > iu {
        return Err(ParamError::new(
            "range", il as f64, "lower index exceeds upper index").into());
    }
    if iu >= n {
        return Err(ParamError::new(
            "n_states", (iu + 1) as f64, "must not exceed nx").into());
    }
    Ok(())
}

// locate the `k`-th (0-indexed, ascending) eigenvalue by bisection
fn bisect(h: &Tridiagonal, k: usize, bounds: (f64, f64), maxiters: usize)
    -> BResult<f64>
{
    let atol = f64::EPSILON * h.norm();
    let (mut a, mut b) = bounds;
    for _ in 0..maxiters {
        let tol = 2.0 * f64::EPSILON * a.abs().max(b.abs()) + atol;
        if b - a <= tol { return Ok((a + b) / 2.0); }
        let mid = (a + b) / 2.0;
        if h.sturm_count(mid) <= k { a = mid; } else { b = mid; }
    }
    Err(BError::Convergence { stage: "bisect", index: k, maxiters })
}

/// Compute the eigenvalues of `h` with indices in the inclusive range `(il,
/// iu)`, in ascending order.
pub fn eigvalsh_select(h: &Tridiagonal, range: (usize, usize), opts: EigenOpts)
    -> BResult<nd::Array1<f64>>
{
    check_range(h, range)?;
    BError::check_maxiters(opts.maxiters())?;
    let (lo, hi) = h.gershgorin();
    // widen slightly so that neither endpoint is an eigenvalue
    let pad = f64::EPSILON * h.norm().max(1.0) * h.len() as f64;
    let bounds = (lo - pad, hi + pad);
    let evals: nd::Array1<f64>
        = (range.0..=range.1)
        .map(|k| bisect(h, k, bounds, opts.maxiters()))
        .collect::<BResult<_>>()?;
    log::debug!(
        "eigen::eigvalsh_select: found {} eigenvalues in [{:e}, {:e}]",
        evals.len(), evals[0], evals[evals.len() - 1],
    );
    Ok(evals)
}

// LU factorization of `H - λ I` with partial pivoting, laid out like LAPACK's
// `?gttrf`: U has diagonals `d`, `du`, `du2`; L has unit diagonal and
// multipliers `dl`
struct ShiftedLU {
    d: Vec<f64>,
    dl: Vec<f64>,
    du: Vec<f64>,
    du2: Vec<f64>,
    swap: Vec<bool>,
}

impl ShiftedLU {
    // tiny pivots are replaced by ±`pivtol` so that the shifted system is
    // solvable even when `lambda` is an eigenvalue to machine precision
    fn factorize(h: &Tridiagonal, lambda: f64, pivtol: f64) -> Self {
        let n = h.len();
        let guard = |p: f64| if p.abs() < pivtol { pivtol.copysign(p) } else { p };
        let mut d: Vec<f64> = h.main.iter().map(|dk| dk - lambda).collect();
        let mut dl: Vec<f64> = h.off.to_vec();
        let mut du: Vec<f64> = h.off.to_vec();
        let mut du2: Vec<f64> = vec![0.0; n.saturating_sub(2)];
        let mut swap: Vec<bool> = vec![false; n - 1];
        for i in 0..n - 1 {
            if d[i].abs() >= dl[i].abs() {
                d[i] = guard(d[i]);
                let fact = dl[i] / d[i];
                dl[i] = fact;
                d[i + 1] -= fact * du[i];
            } else {
                let piv = guard(dl[i]);
                let fact = d[i] / piv;
                d[i] = piv;
                dl[i] = fact;
                let temp = du[i];
                du[i] = d[i + 1];
                d[i + 1] = temp - fact * d[i + 1];
                if i + 2 < n {
                    du2[i] = du[i + 1];
                    du[i + 1] *= -fact;
                }
                swap[i] = true;
            }
        }
        d[n - 1] = guard(d[n - 1]);
        Self { d, dl, du, du2, swap }
    }

    fn solve_inplace(&self, b: &mut nd::Array1<f64>) {
        let n = self.d.len();
        for i in 0..n - 1 {
            if self.swap[i] {
                let temp = b[i];
                b[i] = b[i + 1];
                b[i + 1] = temp - self.dl[i] * b[i];
            } else {
                b[i + 1] -= self.dl[i] * b[i];
            }
        }
        b[n - 1] /= self.d[n - 1];
        b[n - 2] = (b[n - 2] - self.du[n - 2] * b[n - 1]) / self.d[n - 2];
        for i in (0..n - 2).rev() {
            b[i] = (b[i] - self.du[i] * b[i + 1] - self.du2[i] * b[i + 2])
                / self.d[i];
        }
    }
}

// deterministic starting vector for inverse iteration; a linear congruential
// sequence mapped to [-1, 1)
fn start_vector(n: usize, seed: usize) -> nd::Array1<f64> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15 ^ (seed as u64 + 1);
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 11) as f64 / (1_u64 << 52) as f64 - 1.0
        })
        .collect()
}

// remove components along each vector in `basis`
fn orthogonalize(q: &mut nd::Array1<f64>, basis: &[nd::ArrayView1<f64>]) {
    for u in basis.iter() {
        let c = q.dot(u);
        q.scaled_add(-c, u);
    }
}

// find the eigenvector for eigenvalue `lambda` (index `k`) by inverse
// iteration, keeping it orthogonal to the vectors in `cluster`
fn inverse_iter(
    h: &Tridiagonal,
    lambda: f64,
    k: usize,
    cluster: &[nd::ArrayView1<f64>],
    epsilon: f64,
    maxiters: usize,
) -> BResult<nd::Array1<f64>>
{
    let n = h.len();
    let lu = ShiftedLU::factorize(h, lambda, f64::EPSILON * h.norm().max(1.0));
    let mut q = start_vector(n, k);
    orthogonalize(&mut q, cluster);
    q /= q.dot(&q).sqrt();
    for iter in 0..maxiters {
        let mut y = q.clone();
        lu.solve_inplace(&mut y);
        orthogonalize(&mut y, cluster);
        let norm = y.dot(&y).sqrt();
        if !norm.is_finite() || norm == 0.0 { break; }
        y /= norm;
        let s = y.dot(&q).signum();
        let delta
            = y.iter().zip(&q)
            .map(|(yk, qk)| (yk - s * qk).powi(2))
            .sum::<f64>()
            .sqrt();
        q = y;
        if delta <= epsilon {
            log::debug!(
                "eigen::inverse_iter: eigenvector {k} converged after {} \
                iterations",
                iter + 1,
            );
            let imax
                = q.iter().enumerate()
                .fold((0, 0.0), |(im, qm), (i, qi)| {
                    if qi.abs() > qm { (i, qi.abs()) } else { (im, qm) }
                })
                .0;
            if q[imax] < 0.0 { q.mapv_inplace(|qk| -qk); }
            return Ok(q);
        }
        if iter + 1 == maxiters / 2 {
            log::warn!(
                "eigen::inverse_iter: eigenvector {k} has used half of its \
                iteration budget"
            );
        }
    }
    Err(BError::Convergence { stage: "inverse_iter", index: k, maxiters })
}

/// Compute the eigenvalues and eigenvectors of `h` with indices in the
/// inclusive range `(il, iu)`.
///
/// Eigenvalues are returned in ascending order; the `j`-th column of the
/// returned matrix is the (unit Euclidean norm) eigenvector of the `j`-th
/// eigenvalue. Inverse iteration for a vector is considered converged when
/// successive iterates differ by less than `opts.epsilon()` in norm.
///
/// Returns [`BError::Convergence`] if either stage exhausts
/// `opts.maxiters()`, and [`BError::Param`] for an invalid index range.
///
/// ```
/// use ndarray as nd;
/// use sqwell::{ config::EigenOpts, eigen, hamiltonian::Tridiagonal };
///
/// // free particle on 100 points with unit spacing
/// let v: nd::Array1<f64> = nd::Array1::zeros(100);
/// let h = Tridiagonal::assemble(1.0, &v, 1.0).unwrap();
/// let (evals, evecs) = eigen::eigh_select(&h, (0, 2), EigenOpts::default()).unwrap();
/// let expected = |k: f64| 2.0 - 2.0 * (k * std::f64::consts::PI / 101.0).cos();
/// assert!((evals[0] - expected(1.0)).abs() < 1e-10);
/// assert!((evals[2] - expected(3.0)).abs() < 1e-10);
/// assert_eq!(evecs.shape(), &[100, 3]);
/// ```
pub fn eigh_select(h: &Tridiagonal, range: (usize, usize), opts: EigenOpts)
    -> BResult<(nd::Array1<f64>, nd::Array2<f64>)>
{
    BError::check_epsilon(opts.epsilon())?;
    let evals = eigvalsh_select(h, range, opts)?;
    let n = h.len();
    let m = evals.len();
    let cluster_width = ORTHO_CLUSTER * h.norm();
    let mut evecs: nd::Array2<f64> = nd::Array2::zeros((n, m));
    for (j, &ej) in evals.iter().enumerate() {
        let q = {
            let cluster: Vec<nd::ArrayView1<f64>>
                = (0..j)
                .filter(|&i| (ej - evals[i]).abs() <= cluster_width)
                .map(|i| evecs.column(i))
                .collect();
            inverse_iter(
                h, ej, range.0 + j, &cluster, opts.epsilon(), opts.maxiters())?
        };
        evecs.column_mut(j).assign(&q);
    }
    Ok((evals, evecs))
}
