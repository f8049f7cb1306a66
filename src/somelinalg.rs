//! exact linear algebra over symbolic expressions
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// Gauss-Jordan elimination over `Expr` with generic solutions
pub mod linear_system;
/// elimination for systems with parameters: solutions for some and for all parameter values
pub mod parametric_elimination;
