//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Bound states](#bound-states)
//! - [Scattering](#scattering)
//! - [Units](#units)
//!
//! # Background
//! The one-dimensional time-independent Schrödinger equation (TISE) reads
//! ```text
//!      ħ²  ∂²ψ
//! - --- --- + V(x) ψ(x) = E ψ(x)
//!     2 m ∂x²
//! ```
//! Here *V*(*x*) is a finite rectangular well,
//! ```text
//! V(x) = V₀   for x in the well
//!        0    otherwise
//! ```
//! which admits two kinds of solution: normalizable bound states with
//! *V*₀ < *E* < 0 (for an attractive well, *V*₀ < 0), and unnormalizable
//! scattering states for *E* > 0. The two are handled by entirely separate
//! methods.
//!
//! # Bound states
//! Assuming a discretization over `[0, L]`
//! ```text
//! x[i] = i δx, i ∊ {0, ..., N - 1}, δx = L / (N - 1)
//! ψ[i] = ψ(x[i])
//! V[i] = V(x[i])
//! ```
//! the second derivative is replaced by the three-point stencil
//! ```text
//! ∂²ψ      ψ[i + 1] - 2 ψ[i] + ψ[i - 1]
//! --- |  ≈ ----------------------------
//! ∂x² |i               δx²
//! ```
//! with ψ\[-1\] = ψ\[N\] = 0, i.e. hard walls just outside either end of the
//! grid. The TISE then becomes the matrix eigenvalue problem *H* ψ = *E* ψ for
//! the real, symmetric, tridiagonal matrix
//! ```text
//! H[i, i]     = 2 p / δx² + V[i]
//! H[i, i ± 1] =  -p / δx²
//! p           = ħ² / 2 m
//! ```
//! which is never formed densely (see [`Tridiagonal`][crate::hamiltonian::Tridiagonal]).
//!
//! Only the lowest few eigenpairs are usually wanted, so these are computed
//! selectively. For any shift *λ*, the number of negative pivots *q*\[*i*\] in
//! the recurrence
//! ```text
//! q[0] = H[0, 0] - λ
//! q[i] = H[i, i] - λ - H[i, i - 1]² / q[i - 1]
//! ```
//! equals the number of eigenvalues below *λ* (Sylvester's law of inertia).
//! Bisection on this count within the Gershgorin interval isolates the *k*-th
//! eigenvalue to machine precision independently of all others. The
//! associated eigenvector is then recovered by inverse iteration,
//! ```text
//! (H - λ I) y = ψ_old,   ψ_new = y / |y|
//! ```
//! which converges in a step or two when *λ* is accurate, since the
//! component along the target eigenvector is amplified by
//! 1/|*λ* - *E*<sub>*k*</sub>| relative to the others.
//!
//! Finally, each eigenvector is rescaled so that the trapezoidal-rule integral
//! of ψ² over the grid is 1.
//!
//! As *V*₀ → -∞ at fixed width *a*, the bound energies relative to the floor of
//! the well approach those of an infinitely deep well,
//! ```text
//! E[n] - V₀ → p ((n + 1) π / a)²
//! ```
//!
//! # Scattering
//! For a well occupying `[-a, a]` with depth *V*₀ ≥ 0 (attractive) and an
//! incident energy *E* > 0, the solution in each region is a superposition of
//! plane waves,
//! ```text
//! ψ_L(x) = exp(i k₁ x) + B_L exp(-i k₁ x)      x ≤ -a
//! ψ_W(x) = A_W exp(i k₂ x) + B_W exp(-i k₂ x)  |x| ≤ a
//! ψ_R(x) = A_R exp(i k₁ x)                     x ≥ a
//!
//! k₁ = √(2 m E) / ħ
//! k₂ = √(2 m (E + V₀)) / ħ
//! ```
//! Requiring ψ and ψ′ to be continuous at *x* = ±*a* gives four linear equations
//! in the four unknown amplitudes, which are solved as an explicit 4×4 complex
//! system. The transmission and reflection probabilities are
//! ```text
//! T = |A_R|² k_R / k_L
//! R = |B_L|²
//! ```
//! with *T* + *R* = 1 by conservation of probability current. For reference,
//! the closed-form result is
//! ```text
//!      [     V₀² sin²(2 k₂ a) ]⁻¹
//! T =  [ 1 + ---------------- ]
//!      [      4 E (E + V₀)    ]
//! ```
//! so that the well is reflectionless whenever 2 *k*₂ *a* is a multiple of *π*.
//!
//! # Units
//! The bound-state pipeline works with the kinetic prefactor *p* = *ħ*²/2*m*
//! directly, and is usually run in reduced units where *p* = 1. Given a mass
//! *m* and a length scale *a*, the corresponding energy unit is
//! ```text
//! e = ħ² / 2 m a²
//! ```
//! (see [`Units`][crate::units::Units]). The scattering pipeline takes *m* and
//! *ħ* explicitly and defaults to SI values.
