use crate::lie::error::LieResult;
use crate::lie::gl::GL;
use crate::lie::vector_space::VectorSpace;
use crate::symbolic::symbolic_vectors::ExprVector;
use log::debug;

/// The elements of the subspace `W` of gl(n) whose matrix commutes with the matrix of `N`
pub fn centralizer(N: &ExprVector, W: &VectorSpace, gl: &GL) -> LieResult<VectorSpace> {
    let m = gl.gl_to_matrix(N);
    let w = gl.gl_to_matrix(&W.generic_element());
    let commutator = gl.matrix_to_gl(&m.commutator(&w));
    let result = W.subspace_from_equations(&commutator.data)?;
    debug!(
        "centralizer of dimension {} inside a space of dimension {}",
        result.dimension(),
        W.dimension()
    );
    Ok(result)
}
