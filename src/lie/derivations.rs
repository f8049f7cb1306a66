//! # Derivations of a Lie algebra
//!
//! A matrix A is a derivation if `A[X,Y] = [AX,Y] + [X,AY]` for all X, Y. Writing A as the
//! generic element of gl(n), the identity on basis pairs `e_i, e_j` with i<j gives a
//! homogeneous linear system in the coordinates `a_i_j`.
//!
//! - [`derivations`] solves the system exactly (Lie algebras without parameters);
//! - [`derivations_parametric`] brackets the space of derivations of a family depending on
//!   parameters between the derivations for all parameter values and a space containing the
//!   derivations for each parameter value;
//! - [`derivation_when`] lists the conditions under which a given matrix is a derivation.
use crate::lie::error::LieResult;
use crate::lie::gl::GL;
use crate::lie::lie_algebra::LieAlgebra;
use crate::lie::vector_space::{VectorSpace, VectorSpaceBetween};
use crate::somelinalg::parametric_elimination::LinearEquationsWithParameters;
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_vectors::{ExprMatrix, ExprVector};
use itertools::Itertools;
use log::{info, warn};

/// `[A e_i, e_j] + [e_i, A e_j] - A [e_i, e_j]` (1-based)
pub fn xbracket(G: &LieAlgebra, gl: &GL, A: &ExprMatrix, i: usize, j: usize) -> ExprVector {
    let (x, y) = (G.e(i), G.e(j));
    let ax = gl.action(A, &x);
    let ay = gl.action(A, &y);
    let axy = gl.action(A, &G.lie_bracket(&x, &y));
    &(&G.lie_bracket(&ax, &y) + &G.lie_bracket(&x, &ay)) - &axy
}

/// `xbracket` for all pairs i<j
pub fn xbrackets(G: &LieAlgebra, gl: &GL, A: &ExprMatrix) -> Vec<ExprVector> {
    (1..=G.dimension())
        .tuple_combinations()
        .map(|(i, j)| xbracket(G, gl, A, i, j))
        .collect()
}

/// every coordinate of every `xbracket`
fn derivation_equations(G: &LieAlgebra, gl: &GL, A: &ExprMatrix) -> Vec<Expr> {
    xbrackets(G, gl, A)
        .into_iter()
        .flat_map(|v| v.data)
        .filter(|e| !e.is_zero())
        .collect()
}

/// The space of derivations as a subspace of gl(n).
///
/// The Lie algebra is expected to have no parameters; otherwise the result is the space of
/// derivations for a generic value of the parameters.
pub fn derivations(G: &LieAlgebra, gl: &GL) -> LieResult<VectorSpace> {
    if G.has_parameters() {
        warn!(
            "derivations of {} computed for generic values of the parameters {:?}",
            G,
            G.parameters()
        );
    }
    let forms = gl.forms();
    let generic_matrix = gl.gl_to_matrix(&forms.generic_element());
    let equations = derivation_equations(G, gl, &generic_matrix);
    let der = forms.subspace_from_equations(&equations)?;
    info!("{}: derivations of dimension {}", G, der.dimension());
    Ok(der)
}

/// Bounds for the space of derivations of a Lie algebra depending on parameters: the smaller
/// space consists of derivations for every value of the parameters, the larger space contains
/// the derivations for each value of the parameters.
pub fn derivations_parametric(G: &LieAlgebra, gl: &GL) -> LieResult<VectorSpaceBetween> {
    let forms = gl.forms();
    let generic_matrix = gl.gl_to_matrix(&forms.generic_element());
    let equations = derivation_equations(G, gl, &generic_matrix);
    let mut linear_eqns = LinearEquationsWithParameters::new(&equations, gl.coordinate_names());
    linear_eqns.eliminate_linear_equations()?;
    let (larger, _) = forms.get_solutions_from_generic_solution(&linear_eqns.solution())?;
    let (smaller, _) = forms.get_solutions_from_generic_solution(&linear_eqns.always_solution()?)?;
    info!(
        "{}: derivations between dimension {} and {}",
        G,
        smaller.len(),
        larger.len()
    );
    Ok(VectorSpaceBetween::new(gl.dimension(), smaller, larger))
}

/// The distinct non-zero coordinates of the derivation identity evaluated at `matrix`, an
/// element of gl(n). Empty iff `matrix` is a derivation.
pub fn derivation_when(G: &LieAlgebra, gl: &GL, matrix: &ExprVector) -> Vec<Expr> {
    let A = gl.gl_to_matrix(matrix);
    let mut conditions: Vec<Expr> = Vec::new();
    for e in derivation_equations(G, gl, &A) {
        if !conditions.contains(&e) {
            conditions.push(e);
        }
    }
    conditions
}
