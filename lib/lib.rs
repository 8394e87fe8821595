#![allow(non_snake_case)]

//! Provides functions and higher-level constructs for the solution of the
//! one-dimensional, time-independent Schrödinger equation for a particle
//! encountering a finite rectangular potential well.
//!
//! Two independent pipelines are provided:
//! - Bound states:
//!     - Uniform [grid][grid::Grid] and [square well][grid::square_well]
//!       construction
//!     - Finite-difference [tridiagonal Hamiltonian][hamiltonian::Tridiagonal]
//!     - Selective [tridiagonal eigensolver][eigen::eigh_select] (Sturm
//!       bisection and inverse iteration)
//!     - Trapezoidal [normalization][utils::wf_normalize]
//! - Scattering:
//!     - Regional [wavenumbers][scatter::Wavenumbers]
//!     - Plane-wave [amplitudes][scatter::Amplitudes] from continuity of ψ and
//!       ψ′ at both well edges
//!     - Per-region [wavefunction evaluation][scatter::eval_region]
//!
//! Both are driven from validated [configuration][config] values through
//! [`solve::solve_bound`] and [`scatter::solve_scatter`]. Independent runs can
//! be batched with [`sweep`].
//!
//! See [`docs`] for theoretical background.

pub mod config;
pub mod eigen;
pub mod error;
pub mod grid;
pub mod hamiltonian;
pub mod scatter;
pub mod solve;
pub mod sweep;
pub mod units;
pub mod utils;

pub mod docs;

pub(crate) const DEF_EPSILON: f64 = 1e-6;
pub(crate) const DEF_MAXITERS: usize = 1000;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
