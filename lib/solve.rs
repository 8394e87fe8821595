//! Functions to compute bound states of the one-dimensional, time-independent
//! Schrödinger equation (TISE) for a finite rectangular well, via the
//! finite-difference Hamiltonian and a selective tridiagonal eigensolver.

use std::cmp;
use ndarray as nd;
use crate::{
    Arr1,
    config::{ BoundConfig, EigenOpts },
    eigen,
    error::ParamError,
    grid::{ Grid, square_well },
    hamiltonian::Tridiagonal,
    utils::wf_normalize,
};

pub use crate::eigen::BResult;

/// A single solution to the TISE.
///
/// This struct is usually only returned by a solver function; you probably
/// won't ever instantiate it yourself. The wavefunction is allowed to be
/// missing in the case that `compute_wf = false` is passed to a solver
/// function.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Energy
    pub e: f64,
    /// Wavefunction, normalized such that the trapezoidal integral of its
    /// square over the grid is 1
    pub wf: Option<nd::Array1<f64>>,
}

impl Solution {
    /// Compare two `Solution`s by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<cmp::Ordering> {
        self.e.partial_cmp(&other.e)
    }
}

/// Compute the `n_states` lowest-energy solutions for a potential `V` sampled
/// over a uniform grid with spacing `dx`.
///
/// The Hamiltonian is [assembled][Tridiagonal::assemble] with kinetic
/// prefactor `hbar2_2m = ħ²/2m`, its lowest eigenpairs are found with
/// [`eigen::eigh_select`], and each wavefunction is then [normalized][wf_normalize].
///
/// Pass `compute_wf = false` to only calculate energies.
pub fn solve_tridiagonal<S>(
    dx: f64,
    V: &Arr1<S>,
    hbar2_2m: f64,
    n_states: usize,
    opts: EigenOpts,
    compute_wf: bool,
) -> BResult<Vec<Solution>>
where S: nd::Data<Elem = f64>
{
    ParamError::check_count("n_states", n_states, 1)?;
    if n_states > V.len() {
        return Err(ParamError::new(
            "n_states", n_states as f64, "must not exceed nx").into());
    }
    let h = Tridiagonal::assemble(dx, V, hbar2_2m)?;
    let range = (0, n_states - 1);
    if compute_wf {
        let (evals, evecs) = eigen::eigh_select(&h, range, opts)?;
        evals.into_iter().zip(evecs.columns())
            .map(|(e, v)| -> BResult<Solution> {
                let mut wf = v.to_owned();
                wf_normalize(&mut wf, dx)?;
                Ok(Solution { e, wf: Some(wf) })
            })
            .collect()
    } else {
        let evals = eigen::eigvalsh_select(&h, range, opts)?;
        Ok(evals.into_iter().map(|e| Solution { e, wf: None }).collect())
    }
}

/// Output of the bound-state pipeline.
///
/// Arrays borrowed from this type are guaranteed to have the same length, and
/// solutions are sorted by ascending energy.
#[derive(Clone, Debug)]
pub struct BoundStates {
    grid: Grid,
    V: nd::Array1<f64>,
    sols: Vec<Solution>,
}

impl BoundStates {
    /// Get a reference to the coordinate grid.
    pub fn get_grid(&self) -> &Grid { &self.grid }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { self.grid.get_x() }

    /// Get a reference to the potential array.
    pub fn get_V(&self) -> &nd::Array1<f64> { &self.V }

    /// Get a reference to all solutions.
    pub fn get_sols(&self) -> &[Solution] { &self.sols }

    /// Return an array of all energies.
    pub fn energies(&self) -> nd::Array1<f64> {
        self.sols.iter().map(|sol| sol.e).collect()
    }

    /// Stack all computed wavefunctions into a single array, with the first
    /// axis indexing the state.
    ///
    /// Returns `None` if wavefunctions were not computed.
    pub fn wavefunctions(&self) -> Option<nd::Array2<f64>> {
        let wfs: Vec<nd::ArrayView1<f64>>
            = self.sols.iter()
            .map(|sol| sol.wf.as_ref().map(|wf| wf.view()))
            .collect::<Option<_>>()?;
        nd::stack(nd::Axis(0), &wfs).ok()
    }
}

/// Run the full bound-state pipeline for a validated configuration.
///
/// ```
/// use sqwell::{ config::{ BoundConfig, EigenOpts }, solve };
///
/// let config = BoundConfig::default().with_grid(2.0, 400);
/// let states = solve::solve_bound(&config, EigenOpts::default(), true).unwrap();
/// let e = states.energies();
/// assert_eq!(e.len(), 5);
/// assert!(e[0] > -4000.0 && e[0] < 0.0);
/// ```
pub fn solve_bound(config: &BoundConfig, opts: EigenOpts, compute_wf: bool)
    -> BResult<BoundStates>
{
    config.validate()?;
    let grid = Grid::domain(config.length, config.nx)?;
    let V = square_well(&grid, config.v0, config.x0, config.width);
    let sols = solve_tridiagonal(
        grid.get_dx(),
        &V,
        config.hbar2_2m,
        config.n_states,
        opts,
        compute_wf,
    )?;
    log::debug!(
        "solve::solve_bound: ground state energy {:e} for v0 = {:e}",
        sols[0].e, config.v0,
    );
    Ok(BoundStates { grid, V, sols })
}

/// Energy of the `n`-th level (0-indexed) of an infinitely deep well of the
/// given width whose floor sits at `v0`.
///
/// This is the limit approached by [`solve_bound`] as `v0 → -∞` at fixed
/// width, when measured relative to `v0`.
pub fn infinite_well_energy(n: usize, width: f64, hbar2_2m: f64, v0: f64) -> f64 {
    let k = (n + 1) as f64 * std::f64::consts::PI / width;
    hbar2_2m * k.powi(2) + v0
}

impl From<BoundStates> for Vec<Solution> {
    fn from(states: BoundStates) -> Self { states.sols }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::BError,
        utils::{ wf_dot, wf_norm },
    };

    #[test]
    fn free_box_spectrum() {
        // no well: eigenstates of a box of length L + 2 dx with Dirichlet
        // walls just outside the grid
        let config = BoundConfig::default()
            .with_grid(1.0, 501)
            .with_v0(0.0)
            .with_n_states(3);
        let states = solve_bound(&config, EigenOpts::default(), true).unwrap();
        let dx = states.get_grid().get_dx();
        let box_len = 1.0 + 2.0 * dx;
        for (n, sol) in states.get_sols().iter().enumerate() {
            let k = (n + 1) as f64 * std::f64::consts::PI / box_len;
            // discrete kinetic energy of the three-point stencil
            let expected = 2.0 * (1.0 - (k * dx).cos()) / dx.powi(2);
            assert!((sol.e - expected).abs() < 1e-6 * expected);
        }
    }

    #[test]
    fn normalized_and_orthogonal() {
        let config = BoundConfig::default().with_grid(2.0, 600);
        let states = solve_bound(&config, EigenOpts::default(), true).unwrap();
        let dx = states.get_grid().get_dx();
        let sols = states.get_sols();
        for (j, sj) in sols.iter().enumerate() {
            let wj = sj.wf.as_ref().unwrap();
            assert!((wf_norm(wj, dx) - 1.0).abs() < 1e-6);
            for si in sols.iter().take(j) {
                let wi = si.wf.as_ref().unwrap();
                assert!(wf_dot(wi, wj, dx).unwrap().abs() < 1e-6);
            }
        }
        assert_eq!(states.wavefunctions().unwrap().shape(), &[5, 600]);
    }

    #[test]
    fn energies_only() {
        let config = BoundConfig::default().with_grid(2.0, 300);
        let with_wf = solve_bound(&config, EigenOpts::default(), true).unwrap();
        let without = solve_bound(&config, EigenOpts::default(), false).unwrap();
        assert!(without.get_sols().iter().all(|sol| sol.wf.is_none()));
        assert!(without.wavefunctions().is_none());
        assert!(
            with_wf.energies().iter().zip(without.energies().iter())
                .all(|(a, b)| (a - b).abs() < 1e-9)
        );
    }

    #[test]
    fn too_many_states() {
        let v: nd::Array1<f64> = nd::Array1::zeros(10);
        let res = solve_tridiagonal(0.1, &v, 1.0, 11, EigenOpts::default(), true);
        assert!(matches!(res, Err(BError::Param(ParamError { name: "n_states", .. }))));
        let res = solve_tridiagonal(0.1, &v, 1.0, 0, EigenOpts::default(), true);
        assert!(matches!(res, Err(BError::Param(_))));
        let config = BoundConfig::default().with_grid(2.0, 4);
        assert!(matches!(
            solve_bound(&config, EigenOpts::default(), true),
            Err(BError::Param(_))
        ));
    }

    #[test]
    fn infinite_well_levels() {
        let e0 = infinite_well_energy(0, 0.1, 1.0, -4000.0);
        assert!((e0 + 4000.0 - 100.0 * std::f64::consts::PI.powi(2)).abs() < 1e-9);
        assert!(
            (infinite_well_energy(2, 1.0, 1.0, 0.0) / infinite_well_energy(0, 1.0, 1.0, 0.0)
                - 9.0).abs() < 1e-12
        );
    }

    #[test]
    fn sorted_by_energy() {
        let config = BoundConfig::default().with_grid(2.0, 500);
        let sols: Vec<Solution>
            = solve_bound(&config, EigenOpts::default(), false).unwrap().into();
        assert!(
            sols.iter().zip(sols.iter().skip(1))
                .all(|(a, b)| a.cmp_energy(b) != Some(cmp::Ordering::Greater))
        );
    }
}
