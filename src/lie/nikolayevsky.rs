//! # Nikolayevsky derivation
//!
//! The Nikolayevsky derivation of a nilpotent Lie algebra is the derivation N such that
//! `tr(N D) = tr(D)` for every derivation D. The trace identity is a linear system in the
//! coordinates of N; its solutions form an affine space `N + W` inside the space of derivations.
//! With parameters, N is sought in the larger bound for the derivations and the identity is
//! imposed against the smaller bound, so `N + W` may contain elements which are not derivations
//! for some parameter values; [`Nikolayevsky`] reports under which conditions N is a derivation.
use crate::lie::derivations::{derivation_when, derivations, derivations_parametric};
use crate::lie::error::LieResult;
use crate::lie::gl::GL;
use crate::lie::lie_algebra::LieAlgebra;
use crate::lie::vector_space::{AffineSpaceInGl, VectorSpace, VectorSpaceBetween};
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_vectors::{ExprMatrix, ExprVector};
use itertools::Itertools;
use log::info;
use std::fmt;
use strum_macros::{Display, EnumIter};

/// The equations `tr(N D) - tr(D) = 0` for D in `subspace`, without repetitions
pub fn nikolayevsky_equations(N: &ExprVector, subspace: &[ExprVector], gl: &GL) -> Vec<Expr> {
    let N_as_matrix = gl.gl_to_matrix(N);
    let mut equations: Vec<Expr> = Vec::new();
    for e in subspace {
        let M = gl.gl_to_matrix(e);
        let equation = (&(&N_as_matrix * &M) - &M).trace();
        if !equations.contains(&equation) {
            equations.push(equation);
        }
    }
    equations
}

/// Solves the trace identity for the generic element of `der`, imposing it for every element of
/// `constraints`
fn affine_space_of_trace_identity(
    der: &VectorSpace,
    constraints: &[ExprVector],
    gl: &GL,
) -> LieResult<AffineSpaceInGl> {
    let equations = nikolayevsky_equations(&der.generic_element(), constraints, gl);
    let (solutions, N) = der.get_solutions(&equations)?;
    Ok(AffineSpaceInGl::new(N, VectorSpace::new(gl.dimension(), solutions)))
}

/// The affine space of derivations satisfying `tr(N D) = tr(D)` for all derivations D, for a Lie
/// algebra without parameters
pub fn nikolayevsky_like_derivations(G: &LieAlgebra, gl: &GL) -> LieResult<AffineSpaceInGl> {
    let der = derivations(G, gl)?;
    affine_space_of_trace_identity(&der, der.e(), gl)
}

/// An affine space containing the Nikolayevsky derivation, for a Lie algebra with or without
/// parameters
pub fn nikolayevsky_like_derivations_parametric(
    G: &LieAlgebra,
    gl: &GL,
) -> LieResult<AffineSpaceInGl> {
    let bounds = derivations_parametric(G, gl)?;
    let result = nikolayevsky_like_derivations_between(&bounds, gl)?;
    info!(
        "{}: Nikolayevsky-like derivations form an affine space of dimension {}",
        G,
        result.dimension()
    );
    Ok(result)
}

/// N is sought in the larger bound, the trace identity is imposed against the smaller bound
pub fn nikolayevsky_like_derivations_between(
    bounds: &VectorSpaceBetween,
    gl: &GL,
) -> LieResult<AffineSpaceInGl> {
    affine_space_of_trace_identity(&bounds.larger(), &bounds.basis_of_smaller_space, gl)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum NikolayevskyKind {
    /// N is a derivation only if some expressions vanish
    #[strum(serialize = "conditional")]
    Conditional,
    #[strum(serialize = "diagonal")]
    Diagonal,
    /// N is a derivation but not diagonal
    #[strum(serialize = "if diagonalizable")]
    IfDiagonalizable,
}

/// A candidate Nikolayevsky derivation and the conditions under which it is a derivation
#[derive(Debug, Clone, PartialEq)]
pub struct Nikolayevsky {
    N: ExprMatrix,
    derivation_when: Vec<Expr>,
}

impl Nikolayevsky {
    pub fn new(G: &LieAlgebra, gl: &GL, nik: &ExprVector) -> Self {
        Self {
            N: gl.gl_to_matrix(nik),
            derivation_when: derivation_when(G, gl, nik),
        }
    }

    pub fn matrix(&self) -> &ExprMatrix {
        &self.N
    }

    pub fn derivation_when(&self) -> &[Expr] {
        &self.derivation_when
    }

    pub fn is_zero(&self) -> bool {
        self.N.is_zero()
    }

    pub fn is_diagonal(&self) -> bool {
        self.N.is_diagonal()
    }

    pub fn diagonal(&self) -> ExprVector {
        self.N.diagonal()
    }

    /// conditions first, then diagonality
    pub fn kind(&self) -> NikolayevskyKind {
        if !self.derivation_when.is_empty() {
            NikolayevskyKind::Conditional
        } else if self.is_diagonal() {
            NikolayevskyKind::Diagonal
        } else {
            NikolayevskyKind::IfDiagonalizable
        }
    }

    pub fn to_latex(&self) -> String {
        match self.kind() {
            NikolayevskyKind::Conditional => format!(
                "cannot compute; Nikolayevsky derivation takes the form {}, only derivation when the following are zero: {}",
                self.N.to_latex(),
                latex_set(&self.derivation_when)
            ),
            NikolayevskyKind::Diagonal => format!(
                "({})",
                self.diagonal().iter().map(Expr::to_latex).join(",")
            ),
            NikolayevskyKind::IfDiagonalizable => {
                format!("if diagonalizable, {}", self.N.to_latex())
            }
        }
    }
}

/// `{e1, e2, ...}`
pub fn plain_set(expressions: &[Expr]) -> String {
    format!("{{{}}}", expressions.iter().join(", "))
}

/// `\{e1, e2, ...\}`
pub fn latex_set(expressions: &[Expr]) -> String {
    format!(
        "\\{{{}\\}}",
        expressions.iter().map(Expr::to_latex).join(", ")
    )
}

impl fmt::Display for Nikolayevsky {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind() {
            NikolayevskyKind::Conditional => write!(
                f,
                "cannot compute; Nikolayevsky derivation takes the form {}, only derivation when the following are zero: {}",
                self.N,
                plain_set(&self.derivation_when)
            ),
            NikolayevskyKind::Diagonal => write!(f, "{}", self.diagonal()),
            NikolayevskyKind::IfDiagonalizable => write!(f, "if diagonalizable, {}", self.N),
        }
    }
}
