//! gl(n): the Lie algebra of n×n matrices, as a vector space with coordinates `a_i_j` and as
//! matrices acting on a Lie algebra of dimension n.
use crate::lie::vector_space::VectorSpace;
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_vectors::{ExprMatrix, ExprVector};

/// gl(n) with coordinates `a_i_j` (row i, column j, 1-based), ordered row by row.
/// Column j of a matrix is the image of `e_j`.
#[derive(Debug, Clone, PartialEq)]
pub struct GL {
    n: usize,
    coordinates: Vec<String>,
}

impl GL {
    pub fn new(n: usize) -> Self {
        let coordinates = (1..=n)
            .flat_map(|i| (1..=n).map(move |j| format!("a_{}_{}", i, j)))
            .collect();
        Self { n, coordinates }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// n^2
    pub fn dimension(&self) -> usize {
        self.n * self.n
    }

    pub fn coordinate_names(&self) -> &[String] {
        &self.coordinates
    }

    /// gl(n) as a vector space: standard basis `E_ij`, generic element with entries `a_i_j`
    pub fn forms(&self) -> VectorSpace {
        let basis = (0..self.dimension())
            .map(|k| ExprVector::unit(self.dimension(), k))
            .collect();
        VectorSpace::with_coordinates(self.dimension(), basis, self.coordinates.clone())
    }

    pub fn generic_element(&self) -> ExprVector {
        ExprVector::from_variables(&self.coordinates)
    }

    /// the elementary matrix `E_ij` (1-based) as an element of gl(n)
    pub fn e(&self, i: usize, j: usize) -> ExprVector {
        ExprVector::unit(self.dimension(), (i - 1) * self.n + (j - 1))
    }

    pub fn gl_to_matrix(&self, element: &ExprVector) -> ExprMatrix {
        assert_eq!(element.len(), self.dimension(), "element must lie in gl(n)");
        ExprMatrix::new(
            element
                .data
                .chunks(self.n)
                .map(|row| row.to_vec())
                .collect(),
        )
    }

    pub fn matrix_to_gl(&self, matrix: &ExprMatrix) -> ExprVector {
        assert_eq!(matrix.shape(), (self.n, self.n), "matrix must be n×n");
        ExprVector::new(matrix.entries().cloned().collect())
    }

    /// action of a matrix on a vector of the Lie algebra
    pub fn action(&self, matrix: &ExprMatrix, vector: &ExprVector) -> ExprVector {
        matrix.mul_vector(vector)
    }

    /// trace of an element of gl(n)
    pub fn trace(&self, element: &ExprVector) -> Expr {
        (0..self.n).map(|i| element[i * self.n + i].clone()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_and_conversions() {
        let gl = GL::new(2);
        assert_eq!(gl.dimension(), 4);
        assert_eq!(gl.coordinate_names(), &["a_1_1", "a_1_2", "a_2_1", "a_2_2"]);
        let generic = gl.generic_element();
        let m = gl.gl_to_matrix(&generic);
        assert_eq!(m[(0, 1)], Expr::Var("a_1_2"));
        assert_eq!(m[(1, 0)], Expr::Var("a_2_1"));
        assert_eq!(gl.matrix_to_gl(&m), generic);
        assert_eq!(gl.trace(&generic), Expr::Var("a_1_1") + Expr::Var("a_2_2"));
    }

    #[test]
    fn test_action_columns_are_images() {
        let gl = GL::new(2);
        // E_21 maps e_1 to e_2
        let m = gl.gl_to_matrix(&gl.e(2, 1));
        let e1 = ExprVector::unit(2, 0);
        assert_eq!(gl.action(&m, &e1), ExprVector::unit(2, 1));
        assert!(gl.action(&m, &ExprVector::unit(2, 1)).is_zero());
    }

    #[test]
    fn test_forms() {
        let gl = GL::new(3);
        let forms = gl.forms();
        assert_eq!(forms.dimension(), 9);
        assert_eq!(forms.generic_element(), gl.generic_element());
    }
}
