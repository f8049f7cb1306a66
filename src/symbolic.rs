//! # Exact symbolic algebra
//!
//! Polynomials and rational functions with rational coefficients, and vectors and matrices of
//! them. Everything is exact: an expression is zero iff it is identically zero.
//!
//! # Example
//! ```
//! use RustedLieThe::symbolic::symbolic_engine::Expr;
//! let lambda = Expr::Var("lambda");
//! let e = (&lambda * &lambda - Expr::from_int(1)) / (&lambda - &Expr::from_int(1));
//! assert_eq!(e, lambda + Expr::from_int(1));
//! ```
/// sparse multivariate polynomials over the rationals
pub mod polynomial;
/// rational functions: numerator and monic denominator
pub mod symbolic_engine;
/// vectors and matrices of expressions
pub mod symbolic_vectors;
