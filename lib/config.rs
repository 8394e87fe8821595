//! Validated configuration values for both pipelines.
//!
//! Defaults reproduce the reference scenarios: a deep, narrow well in reduced
//! units for the bound-state pipeline, and a 50 eV electron incident on a
//! 10 eV, 2 Å wide well for the scattering pipeline.

use crate::{
    error::ParamError,
    units,
    DEF_EPSILON,
    DEF_MAXITERS,
};

/// Configuration for the [bound-state pipeline][crate::solve::solve_bound].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundConfig {
    /// Domain length `L`; the grid spans `[0, L]`.
    pub length: f64,
    /// Number of grid points.
    pub nx: usize,
    /// Well depth (negative for an attractive well).
    pub v0: f64,
    /// Well width.
    pub width: f64,
    /// Well starting position.
    pub x0: f64,
    /// Number of eigenpairs to compute, starting from the ground state.
    pub n_states: usize,
    /// Kinetic prefactor ħ²/2m.
    pub hbar2_2m: f64,
}

impl Default for BoundConfig {
    fn default() -> Self {
        Self {
            length: 2.0,
            nx: 1000,
            v0: -4000.0,
            width: 0.1,
            x0: 0.8,
            n_states: 5,
            hbar2_2m: 1.0,
        }
    }
}

impl BoundConfig {
    /// Check all values against their allowed domains.
    pub fn validate(&self) -> Result<(), ParamError> {
        ParamError::check_positive("length", self.length)?;
        ParamError::check_count("nx", self.nx, 2)?;
        ParamError::check_finite("v0", self.v0)?;
        ParamError::check_positive("width", self.width)?;
        if self.width > self.length {
            return Err(ParamError::new(
                "width", self.width, "must not exceed the domain length"));
        }
        ParamError::check_nonnegative("x0", self.x0)?;
        if self.x0 + self.width > self.length {
            return Err(ParamError::new(
                "x0", self.x0, "well must end within the domain"));
        }
        ParamError::check_count("n_states", self.n_states, 1)?;
        if self.n_states > self.nx {
            return Err(ParamError::new(
                "n_states", self.n_states as f64, "must not exceed nx"));
        }
        ParamError::check_positive("hbar2_2m", self.hbar2_2m)?;
        Ok(())
    }

    /// Set the well depth.
    pub fn with_v0(mut self, v0: f64) -> Self { self.v0 = v0; self }

    /// Set the well width and starting position.
    pub fn with_well(mut self, x0: f64, width: f64) -> Self {
        self.x0 = x0;
        self.width = width;
        self
    }

    /// Set the domain length and number of grid points.
    pub fn with_grid(mut self, length: f64, nx: usize) -> Self {
        self.length = length;
        self.nx = nx;
        self
    }

    /// Set the number of requested states.
    pub fn with_n_states(mut self, n_states: usize) -> Self {
        self.n_states = n_states;
        self
    }

    /// Set the kinetic prefactor.
    pub fn with_hbar2_2m(mut self, hbar2_2m: f64) -> Self {
        self.hbar2_2m = hbar2_2m;
        self
    }
}

/// Configuration for the [scattering pipeline][crate::scatter::solve_scatter].
///
/// All values are in a single consistent unit system (SI by default).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScatterConfig {
    /// Particle mass.
    pub mass: f64,
    /// Reduced Planck constant.
    pub hbar: f64,
    /// Magnitude of the (attractive) well depth.
    pub well_depth: f64,
    /// Well half-width `a`; the well occupies `[-a, a]`.
    pub half_width: f64,
    /// Incident kinetic energy.
    pub energy: f64,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            mass: units::me,
            hbar: units::hbar,
            well_depth: 10.0 * units::e,
            half_width: 1e-10,
            energy: 50.0 * units::e,
        }
    }
}

impl ScatterConfig {
    /// Configuration in natural units, where ħ = 1 and m = 1/2 so that the
    /// kinetic prefactor is 1.
    pub fn natural(well_depth: f64, half_width: f64, energy: f64) -> Self {
        Self { mass: 0.5, hbar: 1.0, well_depth, half_width, energy }
    }

    /// Check all values against their allowed domains.
    pub fn validate(&self) -> Result<(), ParamError> {
        ParamError::check_positive("mass", self.mass)?;
        ParamError::check_positive("hbar", self.hbar)?;
        ParamError::check_nonnegative("well_depth", self.well_depth)?;
        ParamError::check_positive("half_width", self.half_width)?;
        ParamError::check_positive("energy", self.energy)?;
        Ok(())
    }

    /// Natural units scaled to the well half-width.
    pub fn units(&self) -> units::Units {
        units::Units::with_hbar(self.hbar, self.mass, self.half_width)
    }

    /// Set the well depth.
    pub fn with_well_depth(mut self, well_depth: f64) -> Self {
        self.well_depth = well_depth;
        self
    }

    /// Set the well half-width.
    pub fn with_half_width(mut self, half_width: f64) -> Self {
        self.half_width = half_width;
        self
    }

    /// Set the incident energy.
    pub fn with_energy(mut self, energy: f64) -> Self {
        self.energy = energy;
        self
    }
}

/// Iteration controls for the [selective eigensolver][crate::eigen].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EigenOpts {
    /// Relative accuracy bound (default: `1e-6`).
    pub epsilon: Option<f64>,
    /// Maximum number of iterations (default: `1000`).
    pub maxiters: Option<usize>,
}

impl EigenOpts {
    /// Return the accuracy bound, falling back to the default.
    pub fn epsilon(&self) -> f64 { self.epsilon.unwrap_or(DEF_EPSILON) }

    /// Return the iteration budget, falling back to the default.
    pub fn maxiters(&self) -> usize { self.maxiters.unwrap_or(DEF_MAXITERS) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(BoundConfig::default().validate().is_ok());
        assert!(ScatterConfig::default().validate().is_ok());
    }

    #[test]
    fn bound_rejects_bad_values() {
        let base = BoundConfig::default();
        let err = base.with_n_states(base.nx + 1).validate().unwrap_err();
        assert_eq!(err.name, "n_states");
        assert_eq!(base.with_n_states(0).validate().unwrap_err().name, "n_states");
        assert_eq!(base.with_grid(2.0, 1).validate().unwrap_err().name, "nx");
        assert_eq!(base.with_grid(-1.0, 100).validate().unwrap_err().name, "length");
        assert_eq!(base.with_well(1.95, 0.1).validate().unwrap_err().name, "x0");
        assert_eq!(base.with_well(0.0, 3.0).validate().unwrap_err().name, "width");
        assert_eq!(base.with_hbar2_2m(0.0).validate().unwrap_err().name, "hbar2_2m");
        assert_eq!(base.with_v0(f64::NAN).validate().unwrap_err().name, "v0");
    }

    #[test]
    fn count_errors_name_the_minimum() {
        let base = BoundConfig::default();
        let err = base.with_grid(2.0, 1).validate().unwrap_err();
        assert_eq!(err.reason, "must be at least 2");
        assert_eq!(err.value, 1.0);
        let err = base.with_n_states(0).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid parameter `n_states`: must be at least 1; got 0"
        );
    }

    #[test]
    fn scatter_rejects_bad_values() {
        let base = ScatterConfig::default();
        let err = base.with_energy(0.0).validate().unwrap_err();
        assert_eq!(err.name, "energy");
        assert_eq!(err.value, 0.0);
        assert_eq!(base.with_energy(-1.0).validate().unwrap_err().name, "energy");
        assert_eq!(base.with_well_depth(-1.0).validate().unwrap_err().name, "well_depth");
        assert_eq!(base.with_half_width(0.0).validate().unwrap_err().name, "half_width");
    }

    #[test]
    fn natural_units_have_unit_prefactor() {
        let cfg = ScatterConfig::natural(1.0, 1.0, 1.0);
        assert!((cfg.hbar.powi(2) / 2.0 / cfg.mass - 1.0).abs() < 1e-15);
        assert!((cfg.units().e - 1.0).abs() < 1e-15);
    }
}
