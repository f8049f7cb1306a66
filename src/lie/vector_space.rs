//! Subspaces of a symbolic vector space, bracketing pairs of subspaces and affine subspaces.
//!
//! A [`VectorSpace`] is an ordered basis of vectors of a fixed ambient dimension together with
//! names for the coordinates of its generic element `Σ t_k b_k`. Linear equations in these
//! coordinates determine subspaces and affine subspaces.
use crate::lie::error::LieResult;
use crate::somelinalg::linear_system::{GenericSolution, LinearSystem, LinearSystemError};
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_vectors::ExprVector;
use itertools::Itertools;
use log::debug;
use num::Zero;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct VectorSpace {
    ambient_dimension: usize,
    basis: Vec<ExprVector>,
    coordinates: Vec<String>,
}

fn numbered(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|k| format!("{}{}", prefix, k)).collect()
}

impl VectorSpace {
    /// Subspace spanned by `basis`, which must be linearly independent; the coordinates of the
    /// generic element are `t1, t2, ...`
    pub fn new(ambient_dimension: usize, basis: Vec<ExprVector>) -> Self {
        let coordinates = numbered("t", basis.len());
        Self::with_coordinates(ambient_dimension, basis, coordinates)
    }

    pub fn with_coordinates(
        ambient_dimension: usize,
        basis: Vec<ExprVector>,
        coordinates: Vec<String>,
    ) -> Self {
        assert_eq!(basis.len(), coordinates.len(), "one coordinate per basis vector");
        assert!(
            basis.iter().all(|b| b.len() == ambient_dimension),
            "basis vectors must lie in the ambient space"
        );
        Self {
            ambient_dimension,
            basis,
            coordinates,
        }
    }

    /// the zero subspace
    pub fn zero(ambient_dimension: usize) -> Self {
        Self::new(ambient_dimension, Vec::new())
    }

    pub fn dimension(&self) -> usize {
        self.basis.len()
    }

    pub fn ambient_dimension(&self) -> usize {
        self.ambient_dimension
    }

    /// the basis
    pub fn e(&self) -> &[ExprVector] {
        &self.basis
    }

    pub fn coordinate_names(&self) -> &[String] {
        &self.coordinates
    }

    /// `Σ coefficients[k] * b_k`
    pub fn linear_combination(&self, coefficients: &[Expr]) -> ExprVector {
        assert_eq!(coefficients.len(), self.basis.len(), "one coefficient per basis vector");
        let mut result = ExprVector::zeros(self.ambient_dimension);
        for (c, b) in coefficients.iter().zip(self.basis.iter()) {
            if c.is_zero() {
                continue;
            }
            for (k, entry) in b.iter().enumerate() {
                if !entry.is_zero() {
                    result[k] += c * entry;
                }
            }
        }
        result
    }

    /// `Σ t_k b_k` with the coordinates as free variables
    pub fn generic_element(&self) -> ExprVector {
        let coordinates: Vec<Expr> = self.coordinates.iter().map(|c| Expr::Var(c)).collect();
        self.linear_combination(&coordinates)
    }

    /// Turns a solution over the coordinates of this space into a basis of the solution
    /// subspace and a particular solution.
    pub fn get_solutions_from_generic_solution(
        &self,
        solution: &GenericSolution,
    ) -> LieResult<(Vec<ExprVector>, ExprVector)> {
        let basis = solution
            .homogeneous_basis()?
            .iter()
            .map(|coefficients| self.linear_combination(coefficients))
            .collect();
        let particular = self.linear_combination(&solution.particular());
        Ok((basis, particular))
    }

    /// Solves linear equations in the coordinates of the generic element: returns a basis of
    /// the solutions of the associated homogeneous system and a particular solution (zero for
    /// homogeneous equations).
    pub fn get_solutions(&self, equations: &[Expr]) -> LieResult<(Vec<ExprVector>, ExprVector)> {
        let solution = LinearSystem::new(equations, &self.coordinates)?.solve()?;
        debug!(
            "{} equations on a space of dimension {}: {} free coordinates",
            equations.len(),
            self.dimension(),
            solution.free.len()
        );
        self.get_solutions_from_generic_solution(&solution)
    }

    /// Subspace of elements whose coordinates satisfy the homogeneous `equations`
    pub fn subspace_from_equations(&self, equations: &[Expr]) -> LieResult<VectorSpace> {
        let (basis, _) = self.get_solutions(equations)?;
        Ok(VectorSpace::new(self.ambient_dimension, basis))
    }

    /// Coordinates of `vector` in this basis, `None` if it is not in the span or has another
    /// length. Fails with `NonLinear` if the entries of `vector` are not linear in the coordinate
    /// names of this space.
    pub fn coordinates_of(&self, vector: &ExprVector) -> LieResult<Option<Vec<Expr>>> {
        if vector.len() != self.ambient_dimension {
            return Ok(None);
        }
        let difference = &self.generic_element() - vector;
        match LinearSystem::new(&difference.data, &self.coordinates)?.solve() {
            Ok(solution) => Ok(Some(solution.particular())),
            Err(LinearSystemError::Inconsistent(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn contains(&self, vector: &ExprVector) -> LieResult<bool> {
        Ok(self.coordinates_of(vector)?.is_some())
    }

    pub fn is_subspace_of(&self, other: &VectorSpace) -> LieResult<bool> {
        for b in &self.basis {
            if !other.contains(b)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn to_latex(&self) -> String {
        format!(
            "\\langle {} \\rangle",
            self.basis
                .iter()
                .map(|b| format!("({})", b.iter().map(Expr::to_latex).join(",")))
                .join(", ")
        )
    }
}

impl fmt::Display for VectorSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{}>", self.basis.iter().join(", "))
    }
}

/// A space sandwiched between two subspaces: `smaller ⊆ D ⊆ larger`
#[derive(Debug, Clone, PartialEq)]
pub struct VectorSpaceBetween {
    pub basis_of_smaller_space: Vec<ExprVector>,
    pub basis_of_larger_space: Vec<ExprVector>,
    ambient_dimension: usize,
}

impl VectorSpaceBetween {
    pub fn new(
        ambient_dimension: usize,
        basis_of_smaller_space: Vec<ExprVector>,
        basis_of_larger_space: Vec<ExprVector>,
    ) -> Self {
        Self {
            basis_of_smaller_space,
            basis_of_larger_space,
            ambient_dimension,
        }
    }

    pub fn smaller(&self) -> VectorSpace {
        VectorSpace::new(self.ambient_dimension, self.basis_of_smaller_space.clone())
    }

    pub fn larger(&self) -> VectorSpace {
        VectorSpace::new(self.ambient_dimension, self.basis_of_larger_space.clone())
    }

    /// true if both bounds have the same dimension, hence coincide
    pub fn is_exact(&self) -> bool {
        self.basis_of_smaller_space.len() == self.basis_of_larger_space.len()
    }
}

/// The affine space `N + W`
#[derive(Debug, Clone, PartialEq)]
pub struct AffineSpaceInGl {
    pub N: ExprVector,
    pub W: VectorSpace,
}

impl AffineSpaceInGl {
    pub fn new(N: ExprVector, W: VectorSpace) -> Self {
        assert_eq!(N.len(), W.ambient_dimension(), "N must lie in the ambient space of W");
        Self { N, W }
    }

    pub fn dimension(&self) -> usize {
        self.W.dimension()
    }

    /// `N + v + W`
    pub fn translate(&self, v: &ExprVector) -> AffineSpaceInGl {
        AffineSpaceInGl {
            N: &self.N + v,
            W: self.W.clone(),
        }
    }

    pub fn contains(&self, v: &ExprVector) -> LieResult<bool> {
        self.W.contains(&(v - &self.N))
    }

    /// Intersection of `N + W` with a linear subspace `U`; `None` if empty.
    pub fn intersection_with_subspace(
        &self,
        subspace: &VectorSpace,
    ) -> LieResult<Option<AffineSpaceInGl>> {
        // N + Σ t_k w_k = Σ u_l v_l
        let mut unknowns = self.W.coordinate_names().to_vec();
        let u_names = numbered("u", subspace.dimension());
        unknowns.extend(u_names.iter().cloned());
        let in_u = VectorSpace::with_coordinates(
            subspace.ambient_dimension(),
            subspace.e().to_vec(),
            u_names,
        );
        let equations = &(&self.N + &self.W.generic_element()) - &in_u.generic_element();
        let solution = match LinearSystem::new(&equations.data, &unknowns)?.solve() {
            Ok(solution) => solution,
            Err(LinearSystemError::Inconsistent(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let w_count = self.W.dimension();
        let particular = solution.particular();
        let N = &self.N + &self.W.linear_combination(&particular[..w_count]);
        let directions: Vec<ExprVector> = solution
            .homogeneous_basis()?
            .iter()
            .map(|h| self.W.linear_combination(&h[..w_count]))
            .filter(|w| !w.is_zero())
            .collect();
        Ok(Some(AffineSpaceInGl {
            N,
            W: VectorSpace::new(self.W.ambient_dimension(), directions),
        }))
    }
}

impl fmt::Display for AffineSpaceInGl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} + {}", self.N, self.W)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lie::error::LieError;

    fn v(entries: &[i64]) -> ExprVector {
        ExprVector::new(entries.iter().map(|&e| Expr::from_int(e)).collect())
    }

    #[test]
    fn test_generic_element_and_solutions() {
        let space = VectorSpace::new(3, vec![v(&[1, 0, 1]), v(&[0, 1, 0])]);
        assert_eq!(space.dimension(), 2);
        let generic = space.generic_element();
        assert_eq!(generic[0], Expr::Var("t1"));
        assert_eq!(generic[2], Expr::Var("t1"));
        // t1 = 2 t2
        let equation = Expr::Var("t1") - Expr::from_int(2) * Expr::Var("t2");
        let subspace = space.subspace_from_equations(&[equation]).unwrap();
        assert_eq!(subspace.dimension(), 1);
        assert!(subspace.contains(&v(&[2, 1, 2])).unwrap());
        assert!(!subspace.contains(&v(&[1, 1, 1])).unwrap());
        assert!(subspace.is_subspace_of(&space).unwrap());
        assert!(!space.is_subspace_of(&subspace).unwrap());
    }

    #[test]
    fn test_membership_of_malformed_vector_is_an_error() {
        let space = VectorSpace::new(2, vec![v(&[1, 0]), v(&[0, 1])]);
        let t1 = Expr::Var("t1");
        let quadratic = ExprVector::new(vec![&t1 * &t1, Expr::from_int(0)]);
        assert!(matches!(space.contains(&quadratic), Err(LieError::NonLinear(_))));
        assert!(matches!(space.coordinates_of(&quadratic), Err(LieError::NonLinear(_))));
        // wrong length is simply not in the space
        assert_eq!(space.coordinates_of(&v(&[1, 0, 0])).unwrap(), None);
        assert_eq!(
            space.coordinates_of(&v(&[3, 4])).unwrap(),
            Some(vec![Expr::from_int(3), Expr::from_int(4)])
        );
    }

    #[test]
    fn test_affine_solutions() {
        let space = VectorSpace::new(2, vec![v(&[1, 0]), v(&[0, 1])]);
        // t1 + t2 = 1
        let equation = Expr::Var("t1") + Expr::Var("t2") - Expr::from_int(1);
        let (basis, particular) = space.get_solutions(&[equation]).unwrap();
        assert_eq!(basis.len(), 1);
        let affine = AffineSpaceInGl::new(particular, VectorSpace::new(2, basis));
        assert!(affine.contains(&v(&[3, -2])).unwrap());
        assert!(!affine.contains(&v(&[0, 0])).unwrap());
        let moved = affine.translate(&v(&[-1, 0]));
        assert!(moved.contains(&v(&[0, 0])).unwrap());
    }

    #[test]
    fn test_intersection_with_subspace() {
        // the line x + y = 1 meets the line y = 0 in (1, 0)
        let line = AffineSpaceInGl::new(v(&[1, 0]), VectorSpace::new(2, vec![v(&[1, -1])]));
        let axis = VectorSpace::new(2, vec![v(&[1, 0])]);
        let point = line.intersection_with_subspace(&axis).unwrap().unwrap();
        assert_eq!(point.dimension(), 0);
        assert_eq!(point.N, v(&[1, 0]));
        // and misses the parallel line through the origin
        let parallel = VectorSpace::new(2, vec![v(&[1, -1])]);
        assert!(line.intersection_with_subspace(&parallel).unwrap().is_none());
    }

    #[test]
    fn test_between() {
        let between = VectorSpaceBetween::new(2, vec![v(&[1, 0])], vec![v(&[1, 0]), v(&[0, 1])]);
        assert!(!between.is_exact());
        assert!(between.smaller().is_subspace_of(&between.larger()).unwrap());
    }
}
