//! Finite-difference representation of the Hamiltonian operator
//! -(ħ²/2m) ∂²/∂x² + V(x) as a real, symmetric tridiagonal matrix.
//!
//! The matrix is only ever stored as its main diagonal and (shared) off
//! diagonal.

use ndarray as nd;
use crate::{
    Arr1,
    error::{ BError, ParamError },
};

/// A real, symmetric tridiagonal matrix.
#[derive(Clone, Debug)]
pub struct Tridiagonal {
    /// Main diagonal, length `n`.
    pub main: nd::Array1<f64>,
    /// Sub- and super-diagonal, length `n - 1`.
    pub off: nd::Array1<f64>,
}

impl Tridiagonal {
    /// Assemble the three-point finite-difference Hamiltonian for a potential
    /// sampled over a uniform grid with spacing `dx`.
    ///
    /// ```text
    /// H[i, i]     = 2 p / dx² + V[i]
    /// H[i, i ± 1] =  -p / dx²
    /// ```
    /// where `p = ħ²/2m`. Wavefunctions are implicitly fixed to zero just
    /// outside either end of the grid.
    pub fn assemble<S>(dx: f64, V: &Arr1<S>, hbar2_2m: f64) -> Result<Self, BError>
    where S: nd::Data<Elem = f64>
    {
        ParamError::check_positive("dx", dx)?;
        ParamError::check_positive("hbar2_2m", hbar2_2m)?;
        ParamError::check_count("nx", V.len(), 2)?;
        let t = hbar2_2m / dx.powi(2);
        let main: nd::Array1<f64> = V.mapv(|vk| 2.0 * t + vk);
        let off: nd::Array1<f64> = nd::Array1::from_elem(V.len() - 1, -t);
        Ok(Self { main, off })
    }

    /// Get the size of the matrix.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.main.len() }

    /// Compute the matrix-vector product `H q`.
    pub fn apply<S>(&self, q: &Arr1<S>) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        let n = self.len();
        let mut hq: nd::Array1<f64> = &self.main * q;
        for (i, &ei) in self.off.iter().enumerate() {
            hq[i] += ei * q[i + 1];
            hq[i + 1] += ei * q[i];
        }
        debug_assert_eq!(hq.len(), n);
        hq
    }

    /// Return the interval containing the whole spectrum, via the Gershgorin
    /// circle theorem.
    pub fn gershgorin(&self) -> (f64, f64) {
        let n = self.len();
        (0..n).fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), i| {
            let r = if i > 0 { self.off[i - 1].abs() } else { 0.0 }
                + if i < n - 1 { self.off[i].abs() } else { 0.0 };
            (lo.min(self.main[i] - r), hi.max(self.main[i] + r))
        })
    }

    /// Return the maximum absolute row sum (the ∞-norm, equal to the 1-norm
    /// by symmetry).
    pub fn norm(&self) -> f64 {
        let n = self.len();
        (0..n)
            .map(|i| {
                self.main[i].abs()
                    + if i > 0 { self.off[i - 1].abs() } else { 0.0 }
                    + if i < n - 1 { self.off[i].abs() } else { 0.0 }
            })
            .fold(0.0, f64::max)
    }

    /// Count the eigenvalues strictly less than `lambda`.
    ///
    /// This is the number of negative pivots in the LDLᵀ factorization of
    /// `H - lambda I` (Sylvester's law of inertia).
    pub fn sturm_count(&self, lambda: f64) -> usize {
        let pivmin = f64::MIN_POSITIVE.sqrt() * self.norm().max(1.0);
        let mut count: usize = 0;
        let mut q = self.main[0] - lambda;
        if q < 0.0 { count += 1; }
        for (&dk, &ekm1) in self.main.iter().skip(1).zip(&self.off) {
            if q.abs() < pivmin { q = -pivmin; }
            q = (dk - lambda) - ekm1.powi(2) / q;
            if q < 0.0 { count += 1; }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laplacian(n: usize) -> Tridiagonal {
        // dx = 1, p = 1, V = 0 ⇒ tridiag(-1, 2, -1)
        let v: nd::Array1<f64> = nd::Array1::zeros(n);
        Tridiagonal::assemble(1.0, &v, 1.0).unwrap()
    }

    #[test]
    fn assemble_stencil() {
        let v = nd::array![0.0, -5.0, 0.0, 1.0];
        let h = Tridiagonal::assemble(0.5, &v, 2.0).unwrap();
        // p / dx² = 8
        assert_eq!(h.main.to_vec(), vec![16.0, 11.0, 16.0, 17.0]);
        assert_eq!(h.off.len(), 3);
        assert!(h.off.iter().all(|ek| *ek == -8.0));
    }

    #[test]
    fn assemble_rejects_bad_arguments() {
        let v = nd::array![0.0, 0.0, 0.0];
        assert!(matches!(
            Tridiagonal::assemble(0.0, &v, 1.0), Err(BError::Param(_))));
        assert!(matches!(
            Tridiagonal::assemble(0.1, &v, -1.0), Err(BError::Param(_))));
        assert!(matches!(
            Tridiagonal::assemble(0.1, &nd::array![1.0], 1.0),
            Err(BError::Param(_))
        ));
    }

    #[test]
    fn apply_matches_dense_product() {
        let h = laplacian(4);
        let q = nd::array![1.0, 2.0, 3.0, 4.0];
        // [2 -1 0 0; -1 2 -1 0; 0 -1 2 -1; 0 0 -1 2] q
        assert_eq!(h.apply(&q).to_vec(), vec![0.0, 0.0, 0.0, 5.0]);
    }

    #[test]
    fn sturm_count_laplacian() {
        // eigenvalues are 2 - 2 cos(kπ/(n+1)), k = 1..n
        let n = 6;
        let h = laplacian(n);
        let evals: Vec<f64>
            = (1..=n)
            .map(|k| 2.0 - 2.0 * (k as f64 * std::f64::consts::PI / (n + 1) as f64).cos())
            .collect();
        assert_eq!(h.sturm_count(evals[0] - 1e-3), 0);
        for (k, ek) in evals.iter().enumerate() {
            assert_eq!(h.sturm_count(ek + 1e-3), k + 1);
        }
        let (lo, hi) = h.gershgorin();
        assert_eq!(h.sturm_count(lo), 0);
        assert_eq!(h.sturm_count(hi + 1e-12), n);
        assert_eq!(h.norm(), 4.0);
    }
}
