//! # Derivations of nilpotent Lie algebras
//!
//! Lie algebras are given by structure constants, possibly depending on parameters. The modules
//! compute
//! - the derivations, exactly or bracketed between two bounds for parametric families;
//! - the Nikolayevsky derivation and the affine space of Nikolayevsky-like derivations;
//! - the centralizer of the Nikolayevsky derivation;
//! - reports over the catalogs of 7-dimensional nilpotent Lie algebras.
/// errors of parsing and of linear algebra
pub mod error;
/// parser of the structure constants syntax `0,0,12,[lambda]*13`
pub mod structure_constants;
pub mod lie_algebra;
/// gl(n) as a vector space and as matrices
pub mod gl;
/// subspaces, bounds for subspaces and affine subspaces
pub mod vector_space;
pub mod derivations;
pub mod nikolayevsky;
pub mod centralizer;
/// catalogs of 7-dimensional nilpotent Lie algebras
pub mod classification;
/// reports on Lie algebras and runs over catalogs
pub mod study;
mod lie_tests;
