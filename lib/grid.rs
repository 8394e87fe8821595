//! Uniform coordinate grids and rectangular well potentials sampled on them.

use ndarray as nd;
use crate::error::ParamError;

/// Simple record of a uniformly spaced coordinate array.
///
/// The coordinate array always contains both endpoints of the domain, so that
/// `dx = (end - start) / (n - 1)`.
#[derive(Clone, Debug)]
pub struct Grid {
    // coordinate array
    x: nd::Array1<f64>,
    // coordinate array grid spacing
    dx: f64,
    // array size
    n: usize,
}

impl Grid {
    /// Create a new `Grid` from "linspace-style" arguments (start, inclusive
    /// end, and an array length).
    pub fn new(start: f64, end: f64, n: usize) -> Result<Self, ParamError> {
        ParamError::check_finite("start", start)?;
        ParamError::check_finite("end", end)?;
        ParamError::check_positive("length", end - start)?;
        ParamError::check_count("nx", n, 2)?;
        let x: nd::Array1<f64> = nd::Array1::linspace(start, end, n);
        let dx = (end - start) / (n - 1) as f64;
        Ok(Self { x, dx, n })
    }

    /// Create a new `Grid` over `[0, length]`.
    pub fn domain(length: f64, n: usize) -> Result<Self, ParamError> {
        Self::new(0.0, length, n)
    }

    /// Create a new `Grid` over `[-half_extent, half_extent]`.
    pub fn symmetric(half_extent: f64, n: usize) -> Result<Self, ParamError> {
        ParamError::check_positive("half_extent", half_extent)?;
        Self::new(-half_extent, half_extent, n)
    }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the coordinate array grid spacing.
    pub fn get_dx(&self) -> f64 { self.dx }

    /// Get the length of the coordinate array.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n }

    /// Get the `(start, end)` coordinates of the grid.
    pub fn bounds(&self) -> (f64, f64) { (self.x[0], self.x[self.n - 1]) }
}

/// Sample a rectangular well of depth `v0` occupying `[start, start + width]`
/// (inclusive) on a grid.
///
/// A well lying entirely outside of the grid produces an all-zero potential.
pub fn square_well(grid: &Grid, v0: f64, start: f64, width: f64)
    -> nd::Array1<f64>
{
    let end = start + width;
    let (lo, hi) = grid.bounds();
    if end < lo || start > hi {
        log::warn!(
            "grid::square_well: well [{start:e}, {end:e}] lies outside the \
            grid [{lo:e}, {hi:e}]; potential is identically zero"
        );
    }
    grid.get_x().mapv(|xk| if (start..=end).contains(&xk) { v0 } else { 0.0 })
}
