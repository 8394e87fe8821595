//! Scattering of a plane wave from a finite square well, resolved analytically
//! by matching plane-wave solutions across the well edges.
//!
//! The well occupies `[-a, a]` and the wavefunction in each region is taken to
//! be
//! ```text
//! ψ(x) = A exp(i k x) + B exp(-i k x)
//! ```
//! with `A_left = 1` (unit incident wave) and `B_right = 0` (nothing incoming
//! from +∞). Continuity of ψ and ψ′ at `x = ±a` then gives four linear
//! equations in `B_left`, `A_well`, `B_well`, and `A_right`, which are solved
//! directly.
//!
//! ```
//! use sqwell::{ config::ScatterConfig, scatter };
//!
//! let sc = scatter::solve_scatter(&ScatterConfig::default()).unwrap();
//! let total = sc.transmission() + sc.reflection();
//! assert!((total - 1.0).abs() < 1e-10);
//! ```

use ndarray as nd;
use ndarray_linalg::{ error::LinalgError, Solve };
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    config::ScatterConfig,
    error::{ ParamError, SError },
    grid::{ Grid, square_well },
};

pub type SResult<T> = Result<T, SError>;

/// One of the three regions of the problem.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// `x ≤ -a`
    Left,
    /// `-a ≤ x ≤ a`
    Well,
    /// `x ≥ a`
    Right,
}

impl Region {
    /// Return the region a position belongs to, with the well taking both of
    /// its edges.
    pub fn locate(x: f64, half_width: f64) -> Self {
        if x < -half_width {
            Self::Left
        } else if x > half_width {
            Self::Right
        } else {
            Self::Well
        }
    }

    /// Return `true` if `x` lies in the closed support of `self`.
    ///
    /// Supports overlap at the well edges so that adjacent regions can be
    /// compared there.
    pub fn contains(&self, x: f64, half_width: f64) -> bool {
        match self {
            Self::Left => x <= -half_width,
            Self::Well => (-half_width..=half_width).contains(&x),
            Self::Right => x >= half_width,
        }
    }
}

/// Wavenumbers in each region.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Wavenumbers {
    /// Left of the well, `√(2 m E) / ħ`.
    pub left: f64,
    /// Inside the well, `√(2 m (E + V₀)) / ħ`.
    pub well: f64,
    /// Right of the well, equal to `left`.
    pub right: f64,
}

impl Wavenumbers {
    /// Compute wavenumbers for a particle of mass `mass` and incident kinetic
    /// energy `energy` over a well of depth `well_depth`.
    ///
    /// `well_depth` is positive for an attractive well; a negative value
    /// describes a barrier, which is only allowed while `energy` remains above
    /// its top.
    pub fn new(mass: f64, hbar: f64, energy: f64, well_depth: f64)
        -> SResult<Self>
    {
        ParamError::check_positive("mass", mass)?;
        ParamError::check_positive("hbar", hbar)?;
        ParamError::check_positive("energy", energy)?;
        ParamError::check_finite("well_depth", well_depth)?;
        let e_well = energy + well_depth;
        if e_well < 0.0 {
            return Err(ParamError::new(
                "well_depth",
                well_depth,
                "kinetic energy inside the well must be non-negative",
            ).into());
        }
        let left = (2.0 * mass * energy).sqrt() / hbar;
        let well = (2.0 * mass * e_well).sqrt() / hbar;
        Ok(Self { left, well, right: left })
    }

    /// Get the wavenumber for a region.
    pub fn get(&self, region: Region) -> f64 {
        match region {
            Region::Left => self.left,
            Region::Well => self.well,
            Region::Right => self.right,
        }
    }
}

/// Forward (`a_*`) and backward (`b_*`) amplitudes in each region.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Amplitudes {
    pub a_left: C64,
    pub b_left: C64,
    pub a_well: C64,
    pub b_well: C64,
    pub a_right: C64,
    pub b_right: C64,
}

impl Amplitudes {
    /// Solve for the amplitudes produced by a unit-amplitude wave incident
    /// from the left on a well of half-width `half_width`.
    ///
    /// Returns [`SError::SingularMatching`] if the system cannot be solved
    /// reliably, including when LAPACK finds an exactly singular matrix, and
    /// [`SError::Linalg`] for any other linear-algebra failure.
    pub fn solve(k: &Wavenumbers, half_width: f64) -> SResult<Self> {
        ParamError::check_positive("half_width", half_width)?;
        let singular = || SError::SingularMatching { k_left: k.left, k_well: k.well };
        let scale = k.left.abs().max(k.well.abs());
        if (k.left + k.well).abs() <= f64::EPSILON * scale
            || k.well == 0.0
            || k.left == 0.0
        {
            return Err(singular());
        }

        let a_left = C64::from(1.0);
        let b_right = C64::from(0.0);
        let a = half_width;
        let ex = |k: f64, x: f64| C64::cis(k * x);
        let (k1, k2, k3) = (k.left, k.well, k.right);
        // derivative equations are divided by i k_left to keep all rows of
        // comparable magnitude
        let (q, r) = (k2 / k1, k3 / k1);
        let zero = C64::from(0.0);

        // unknowns: [B_left, A_well, B_well, A_right]
        let m: nd::Array2<C64> = nd::array![
            // ψ at x = -a
            [ex(k1, a), -ex(k2, -a), -ex(k2, a), zero],
            // ψ′ at x = -a
            [-ex(k1, a), -q * ex(k2, -a), q * ex(k2, a), zero],
            // ψ at x = +a
            [zero, ex(k2, a), ex(k2, -a), -ex(k3, a)],
            // ψ′ at x = +a
            [zero, q * ex(k2, a), -q * ex(k2, -a), -r * ex(k3, a)],
        ];
        let rhs: nd::Array1<C64> = nd::array![
            -a_left * ex(k1, -a),
            -a_left * ex(k1, -a),
            b_right * ex(k3, -a),
            -r * b_right * ex(k3, -a),
        ];
        let u = m.solve_into(rhs)
            .map_err(|err| match err {
                // a zero pivot in the LU factorization
                LinalgError::Lapack(_) => singular(),
                other => SError::Linalg(other),
            })?;
        if u.iter().any(|uk| !uk.re.is_finite() || !uk.im.is_finite()) {
            return Err(singular());
        }
        Ok(Self {
            a_left,
            b_left: u[0],
            a_well: u[1],
            b_well: u[2],
            a_right: u[3],
            b_right,
        })
    }

    /// Get the `(forward, backward)` amplitude pair for a region.
    pub fn get(&self, region: Region) -> (C64, C64) {
        match region {
            Region::Left => (self.a_left, self.b_left),
            Region::Well => (self.a_well, self.b_well),
            Region::Right => (self.a_right, self.b_right),
        }
    }
}

/// Evaluate the complex wavefunction of a region at `x`, without checking
/// the region's support.
pub fn wf_complex(amps: &Amplitudes, k: &Wavenumbers, region: Region, x: f64)
    -> C64
{
    let (a, b) = amps.get(region);
    let kr = k.get(region);
    a * C64::cis(kr * x) + b * C64::cis(-kr * x)
}

/// Evaluate the real part of a region's wavefunction at `x`.
///
/// Returns [`SError::Param`] if `x` lies outside of the region's support.
pub fn eval_region(
    amps: &Amplitudes,
    k: &Wavenumbers,
    half_width: f64,
    region: Region,
    x: f64,
) -> SResult<f64>
{
    if !region.contains(x, half_width) {
        return Err(ParamError::new("x", x, "outside of the region's support").into());
    }
    Ok(wf_complex(amps, k, region, x).re)
}

/// Evaluate the real part of a region's wavefunction over an array of
/// positions.
///
/// Returns [`SError::Param`] if any position lies outside of the region's
/// support.
pub fn eval_region_arr<S>(
    amps: &Amplitudes,
    k: &Wavenumbers,
    half_width: f64,
    region: Region,
    x: &Arr1<S>,
) -> SResult<nd::Array1<f64>>
where S: nd::Data<Elem = f64>
{
    x.iter()
        .map(|xk| eval_region(amps, k, half_width, region, *xk))
        .collect()
}

/// Positions belonging to a single region and the wavefunction there.
#[derive(Clone, Debug)]
pub struct RegionSample {
    /// Positions.
    pub x: nd::Array1<f64>,
    /// Real part of the wavefunction.
    pub psi: nd::Array1<f64>,
}

/// A set of positions partitioned by region, with the wavefunction evaluated
/// in each.
#[derive(Clone, Debug)]
pub struct Sampled {
    pub left: RegionSample,
    pub well: RegionSample,
    pub right: RegionSample,
}

/// Output of the scattering pipeline.
#[derive(Copy, Clone, Debug)]
pub struct Scattering {
    half_width: f64,
    well_depth: f64,
    k: Wavenumbers,
    amps: Amplitudes,
}

impl Scattering {
    /// Get the regional wavenumbers.
    pub fn get_k(&self) -> &Wavenumbers { &self.k }

    /// Get the amplitudes.
    pub fn get_amps(&self) -> &Amplitudes { &self.amps }

    /// Get the well half-width.
    pub fn get_half_width(&self) -> f64 { self.half_width }

    /// Transmission probability `|A_right|² k_right / k_left`.
    pub fn transmission(&self) -> f64 {
        self.amps.a_right.norm_sqr() * self.k.right / self.k.left
    }

    /// Reflection probability `|B_left|²`.
    pub fn reflection(&self) -> f64 { self.amps.b_left.norm_sqr() }

    /// Evaluate the real part of a region's wavefunction at `x`.
    pub fn eval(&self, region: Region, x: f64) -> SResult<f64> {
        eval_region(&self.amps, &self.k, self.half_width, region, x)
    }

    /// Return a function evaluating the real part of a region's wavefunction.
    pub fn evaluator(&self, region: Region) -> impl Fn(f64) -> SResult<f64> {
        let Self { half_width, k, amps, .. } = *self;
        move |x| eval_region(&amps, &k, half_width, region, x)
    }

    /// Partition `x` by region and evaluate the wavefunction in each.
    ///
    /// Points at `x = ±a` are assigned to the well.
    pub fn sample<S>(&self, x: &Arr1<S>) -> SResult<Sampled>
    where S: nd::Data<Elem = f64>
    {
        let part = |region: Region| -> SResult<RegionSample> {
            let xr: nd::Array1<f64>
                = x.iter().copied()
                .filter(|xk| Region::locate(*xk, self.half_width) == region)
                .collect();
            let psi = eval_region_arr(
                &self.amps, &self.k, self.half_width, region, &xr)?;
            Ok(RegionSample { x: xr, psi })
        };
        Ok(Sampled {
            left: part(Region::Left)?,
            well: part(Region::Well)?,
            right: part(Region::Right)?,
        })
    }

    /// Sample the potential `-well_depth` on `|x| ≤ a` over a grid.
    pub fn potential(&self, grid: &Grid) -> nd::Array1<f64> {
        square_well(grid, -self.well_depth, -self.half_width, 2.0 * self.half_width)
    }
}

/// Run the full scattering pipeline for a validated configuration.
pub fn solve_scatter(config: &ScatterConfig) -> SResult<Scattering> {
    config.validate()?;
    let k = Wavenumbers::new(
        config.mass, config.hbar, config.energy, config.well_depth)?;
    let amps = Amplitudes::solve(&k, config.half_width)?;
    log::debug!(
        "scatter::solve_scatter: k = ({:e}, {:e}, {:e}); |B_left|² = {:e}",
        k.left, k.well, k.right, amps.b_left.norm_sqr(),
    );
    Ok(Scattering {
        half_width: config.half_width,
        well_depth: config.well_depth,
        k,
        amps,
    })
}

/// Closed-form transmission probability for a finite square well,
/// ```text
/// T = [1 + V₀² sin²(2 k_well a) / (4 E (E + V₀))]⁻¹
/// ```
pub fn transmission_exact(config: &ScatterConfig) -> SResult<f64> {
    config.validate()?;
    let k = Wavenumbers::new(
        config.mass, config.hbar, config.energy, config.well_depth)?;
    let E = config.energy;
    let V0 = config.well_depth;
    let s = (2.0 * k.well * config.half_width).sin();
    Ok((1.0 + V0.powi(2) * s.powi(2) / (4.0 * E * (E + V0))).recip())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units;

    fn natural(depth: f64, a: f64, e: f64) -> Scattering {
        solve_scatter(&ScatterConfig::natural(depth, a, e)).unwrap()
    }

    #[test]
    fn wavenumbers() {
        let k = Wavenumbers::new(0.5, 1.0, 4.0, 5.0).unwrap();
        assert!((k.left - 2.0).abs() < 1e-15);
        assert!((k.well - 3.0).abs() < 1e-15);
        assert_eq!(k.left, k.right);
        assert!(matches!(
            Wavenumbers::new(0.5, 1.0, 0.0, 5.0),
            Err(SError::Param(ParamError { name: "energy", .. }))
        ));
        assert!(matches!(
            Wavenumbers::new(0.5, 1.0, -1.0, 5.0),
            Err(SError::Param(ParamError { name: "energy", .. }))
        ));
        assert!(matches!(
            Wavenumbers::new(0.5, 1.0, 1.0, -2.0),
            Err(SError::Param(ParamError { name: "well_depth", .. }))
        ));
    }

    #[test]
    fn default_electron_is_unitary() {
        let sc = solve_scatter(&ScatterConfig::default()).unwrap();
        assert!((sc.transmission() + sc.reflection() - 1.0).abs() < 1e-10);
        assert_eq!(sc.get_amps().a_left, C64::from(1.0));
        assert_eq!(sc.get_amps().b_right, C64::from(0.0));
    }

    #[test]
    fn matches_closed_form() {
        for &(depth, a, e) in [(10.0, 1.0, 3.0), (50.0, 0.3, 1.0), (2.0, 2.5, 0.1)].iter() {
            let cfg = ScatterConfig::natural(depth, a, e);
            let sc = solve_scatter(&cfg).unwrap();
            let t = transmission_exact(&cfg).unwrap();
            assert!((sc.transmission() - t).abs() < 1e-10, "{depth} {a} {e}");
        }
        let cfg = ScatterConfig::default();
        let sc = solve_scatter(&cfg).unwrap();
        assert!((sc.transmission() - transmission_exact(&cfg).unwrap()).abs() < 1e-10);
    }

    #[test]
    fn free_particle() {
        let sc = natural(0.0, 1.0, 2.0);
        assert!(sc.get_amps().b_left.norm() < 1e-12);
        assert!((sc.get_amps().a_right.norm() - 1.0).abs() < 1e-12);
        assert!((sc.transmission() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn continuity_at_edges() {
        let sc = natural(20.0, 0.7, 1.3);
        let a = sc.get_half_width();
        for &(x, l, r) in [(-a, Region::Left, Region::Well), (a, Region::Well, Region::Right)].iter() {
            let psi_l = sc.eval(l, x).unwrap();
            let psi_r = sc.eval(r, x).unwrap();
            assert!((psi_l - psi_r).abs() < 1e-12);
            let cl = wf_complex(sc.get_amps(), sc.get_k(), l, x);
            let cr = wf_complex(sc.get_amps(), sc.get_k(), r, x);
            assert!((cl - cr).norm() < 1e-12);
        }
    }

    #[test]
    fn resonance_is_reflectionless() {
        // 2 k_well a = nπ ⇒ perfect transmission
        let a = 1.0;
        let depth = 10.0;
        let k_well = 4.0 * std::f64::consts::PI / (2.0 * a);
        let e = k_well.powi(2) - depth;
        let sc = natural(depth, a, e);
        assert!(sc.reflection() < 1e-16);
    }

    #[test]
    fn evaluation_outside_support() {
        let sc = natural(5.0, 1.0, 1.0);
        assert!(matches!(sc.eval(Region::Left, 0.0), Err(SError::Param(_))));
        assert!(matches!(sc.eval(Region::Well, 1.5), Err(SError::Param(_))));
        assert!(matches!(sc.eval(Region::Right, -3.0), Err(SError::Param(_))));
        let f = sc.evaluator(Region::Right);
        assert!(f(2.0).is_ok());
        assert!(f(0.5).is_err());
        let x = nd::array![-2.0, -1.5];
        assert_eq!(
            eval_region_arr(sc.get_amps(), sc.get_k(), 1.0, Region::Left, &x).unwrap().len(),
            2
        );
    }

    #[test]
    fn sample_partitions_grid() {
        let cfg = ScatterConfig::default();
        let sc = solve_scatter(&cfg).unwrap();
        let grid = Grid::symmetric(8.0 * cfg.half_width, 1000).unwrap();
        let s = sc.sample(grid.get_x()).unwrap();
        assert_eq!(s.left.x.len() + s.well.x.len() + s.right.x.len(), 1000);
        assert_eq!(s.left.x.len(), s.right.x.len());
        assert!(s.left.x.iter().all(|x| *x < -cfg.half_width));
        assert!(s.well.x.iter().all(|x| x.abs() <= cfg.half_width));
        // unit incident wave plus reflection bounds the left amplitude
        assert!(s.left.psi.iter().all(|p| p.abs() <= 1.0 + sc.get_amps().b_left.norm() + 1e-12));
        let v = sc.potential(&grid);
        assert_eq!(v.iter().filter(|vk| **vk == -10.0 * units::e).count(), s.well.x.len());
    }

    #[test]
    fn degenerate_wavenumbers() {
        let k = Wavenumbers { left: 1.0, well: -1.0, right: 1.0 };
        assert!(matches!(
            Amplitudes::solve(&k, 1.0),
            Err(SError::SingularMatching { .. })
        ));
        let k = Wavenumbers::new(0.5, 1.0, 1.0, -1.0).unwrap();
        assert_eq!(k.well, 0.0);
        assert!(matches!(
            Amplitudes::solve(&k, 1.0),
            Err(SError::SingularMatching { .. })
        ));
        // both k_well / k_left and k_well a underflow to zero, so the two well
        // columns of the matching matrix coincide exactly
        let k = Wavenumbers { left: 1e10, well: 5e-324, right: 1e10 };
        assert!(matches!(
            Amplitudes::solve(&k, 0.1),
            Err(SError::SingularMatching { .. })
        ));
    }
}
