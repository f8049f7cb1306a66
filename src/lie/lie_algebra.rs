//! # Lie algebra given by structure constants
//!
//! A Lie algebra of dimension n with basis e_1..e_n is stored as the n two-forms
//! `d e^1, ..., d e^n`; the coefficient of `e^i ∧ e^j` (i<j) in `d e^k` is `c^k_ij`, and
//! `[e_i, e_j] = Σ_k c^k_ij e_k`.
//!
//! # Example
//! ```rust, ignore
//! use RustedLieThe::lie::lie_algebra::LieAlgebra;
//! let heisenberg = LieAlgebra::from_structure_constants("0,0,12").unwrap();
//! let bracket = heisenberg.bracket_of_basis(1, 2);
//! assert_eq!(bracket, heisenberg.e(3));
//! ```
use crate::lie::error::{LieError, LieResult};
use crate::lie::structure_constants::{
    TwoForm, parse_structure_constants, render_two_form, two_form_to_latex,
};
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_vectors::ExprVector;
use itertools::Itertools;
use log::debug;
use num::Zero;
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

/// coordinates of generic elements are named `t1, t2, ...`, `u1, u2, ...` and `a_i_j`
static RESERVED_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(t\d+|u\d+|a_\d+_\d+)$").expect("valid regex"));
static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"));

#[derive(Debug, Clone, PartialEq)]
pub struct LieAlgebra {
    dimension: usize,
    parameters: Vec<String>,
    differentials: Vec<TwoForm>,
}

impl LieAlgebra {
    /// Lie algebra without parameters, e.g. `"0,0,12,13"`
    pub fn from_structure_constants(structure_constants: &str) -> LieResult<Self> {
        Self::with_parameters(structure_constants, &[])
    }

    /// Lie algebra whose structure constants depend on the given parameters, which appear in
    /// square brackets: `"0,0,12,[lambda]*13"`
    pub fn with_parameters(structure_constants: &str, parameters: &[&str]) -> LieResult<Self> {
        for name in parameters {
            if RESERVED_NAME.is_match(name) {
                return Err(LieError::ReservedParameterName(name.to_string()));
            }
            if !IDENTIFIER.is_match(name) {
                return Err(LieError::Parse {
                    input: name.to_string(),
                    message: "parameter name must be an identifier".to_string(),
                });
            }
        }
        let parameter_set: BTreeSet<String> = parameters.iter().map(|p| p.to_string()).collect();
        let differentials = parse_structure_constants(structure_constants, &parameter_set)?;
        debug!(
            "parsed Lie algebra of dimension {} with parameters {:?}",
            differentials.len(),
            parameters
        );
        Ok(Self {
            dimension: differentials.len(),
            parameters: parameters.iter().map(|p| p.to_string()).collect(),
            differentials,
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    pub fn parameter_set(&self) -> BTreeSet<String> {
        self.parameters.iter().cloned().collect()
    }

    /// basis vector `e_i`, 1-based
    pub fn e(&self, i: usize) -> ExprVector {
        ExprVector::unit(self.dimension, i - 1)
    }

    pub fn basis(&self) -> Vec<ExprVector> {
        (1..=self.dimension).map(|i| self.e(i)).collect()
    }

    /// structure constant `c^k_ij`, 1-based, antisymmetric in i, j
    pub fn structure_constant(&self, k: usize, i: usize, j: usize) -> Expr {
        let form = &self.differentials[k - 1];
        if i < j {
            form.get(&(i, j)).cloned().unwrap_or_else(Expr::zero)
        } else if i > j {
            form.get(&(j, i)).map(|c| -c).unwrap_or_else(Expr::zero)
        } else {
            Expr::zero()
        }
    }

    /// `[e_i, e_j]`, 1-based
    pub fn bracket_of_basis(&self, i: usize, j: usize) -> ExprVector {
        ExprVector::new(
            (1..=self.dimension)
                .map(|k| self.structure_constant(k, i, j))
                .collect(),
        )
    }

    /// Lie bracket of two vectors given by their components in the basis e_1..e_n
    pub fn lie_bracket(&self, x: &ExprVector, y: &ExprVector) -> ExprVector {
        assert_eq!(x.len(), self.dimension, "vector dimension must match the Lie algebra");
        assert_eq!(y.len(), self.dimension, "vector dimension must match the Lie algebra");
        let components = self
            .differentials
            .iter()
            .map(|form| {
                let mut component = Expr::zero();
                for ((i, j), c) in form {
                    let (xi, xj, yi, yj) = (&x[i - 1], &x[j - 1], &y[i - 1], &y[j - 1]);
                    if (xi.is_zero() || yj.is_zero()) && (xj.is_zero() || yi.is_zero()) {
                        continue;
                    }
                    let wedge = &(xi * yj) - &(xj * yi);
                    component += c * &wedge;
                }
                component
            })
            .collect();
        ExprVector::new(components)
    }

    /// Non-zero components of the Jacobiator `[[e_i,e_j],e_k] + [[e_j,e_k],e_i] + [[e_k,e_i],e_j]`
    /// for i<j<k. Empty iff the structure constants satisfy the Jacobi identity.
    pub fn jacobi_defects(&self) -> Vec<Expr> {
        let mut defects: Vec<Expr> = Vec::new();
        for (i, j, k) in (1..=self.dimension).tuple_combinations() {
            let (ei, ej, ek) = (self.e(i), self.e(j), self.e(k));
            let jacobiator = &(&self.lie_bracket(&self.lie_bracket(&ei, &ej), &ek)
                + &self.lie_bracket(&self.lie_bracket(&ej, &ek), &ei))
                + &self.lie_bracket(&self.lie_bracket(&ek, &ei), &ej);
            for c in jacobiator.data {
                if !c.is_zero() && !defects.contains(&c) {
                    defects.push(c);
                }
            }
        }
        defects
    }

    /// components in the input syntax
    pub fn structure_constants(&self) -> Vec<String> {
        self.differentials.iter().map(render_two_form).collect()
    }

    /// structure constants joined by commas, accepted by [`LieAlgebra::with_parameters`]
    pub fn structure_constants_string(&self) -> String {
        self.structure_constants().join(",")
    }

    pub fn to_latex(&self) -> String {
        format!(
            "({})",
            self.differentials.iter().map(two_form_to_latex).join(",")
        )
    }
}

impl fmt::Display for LieAlgebra {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.structure_constants().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heisenberg_bracket() {
        let g = LieAlgebra::from_structure_constants("0,0,12").unwrap();
        assert_eq!(g.dimension(), 3);
        assert!(!g.has_parameters());
        assert_eq!(g.bracket_of_basis(1, 2), g.e(3));
        assert_eq!(g.bracket_of_basis(2, 1), g.e(3).scale(&Expr::from_int(-1)));
        assert!(g.bracket_of_basis(1, 3).is_zero());
        assert!(g.bracket_of_basis(2, 2).is_zero());
        assert_eq!(g.to_string(), "(0,0,12)");
    }

    #[test]
    fn test_bilinear_bracket() {
        let g = LieAlgebra::from_structure_constants("0,0,12,13").unwrap();
        let (x, y) = (Expr::Var("x"), Expr::Var("y"));
        let v = ExprVector::new(vec![x.clone(), Expr::zero(), y.clone(), Expr::zero()]);
        let w = g.e(2);
        // [x e1 + y e3, e2] = x e3
        let bracket = g.lie_bracket(&v, &w);
        assert_eq!(bracket, ExprVector::new(vec![Expr::zero(), Expr::zero(), x, Expr::zero()]));
        assert!(g.lie_bracket(&v, &v).is_zero());
    }

    #[test]
    fn test_jacobi() {
        let g = LieAlgebra::from_structure_constants("0,0,12,13,14+23").unwrap();
        assert!(g.jacobi_defects().is_empty());
        // [[e1,e2],e3] + [[e2,e3],e1] = [e4,e3] + [e4,e1] = e5
        let not_jacobi = LieAlgebra::from_structure_constants("0,0,0,12+23,14").unwrap();
        assert!(!not_jacobi.jacobi_defects().is_empty());
    }

    #[test]
    fn test_parameters() {
        let g = LieAlgebra::with_parameters("0,0,12,0,24+13,14,[1-lambda]*34 +15+[lambda]*26", &[
            "lambda",
        ])
        .unwrap();
        assert!(g.has_parameters());
        assert_eq!(g.structure_constant(7, 2, 6), Expr::Var("lambda"));
        assert_eq!(g.structure_constant(7, 4, 3), Expr::Var("lambda") - Expr::from_int(1));
        assert!(matches!(
            LieAlgebra::with_parameters("0,0,[t1]*12", &["t1"]),
            Err(LieError::ReservedParameterName(_))
        ));
        assert!(matches!(
            LieAlgebra::with_parameters("0,0,[a_1_2]*12", &["a_1_2"]),
            Err(LieError::ReservedParameterName(_))
        ));
        assert!(matches!(
            LieAlgebra::from_structure_constants("0,0,[lambda]*12"),
            Err(LieError::UnknownParameter(_))
        ));
    }

    #[test]
    fn test_round_trip() {
        for (input, params) in [
            ("0,0,12,0,13+24,14,15+23+1/2*(26+34)", vec![]),
            ("0,0,0,12,23,-13,[lambda]*26-15-[lambda-1]*34", vec!["lambda"]),
            ("0,0,12,13,23,-14-25,15-35+16+24+[lambda]*25", vec!["lambda"]),
        ] {
            let g = LieAlgebra::with_parameters(input, &params).unwrap();
            let again =
                LieAlgebra::with_parameters(&g.structure_constants_string(), &params).unwrap();
            assert_eq!(g, again);
            for (i, j) in (1..=g.dimension()).tuple_combinations() {
                assert_eq!(g.bracket_of_basis(i, j), again.bracket_of_basis(i, j));
            }
        }
    }
}
