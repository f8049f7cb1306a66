//! Exact linear systems over symbolic expressions.
//!
//! A system is given as a list of expressions which must vanish and a list of unknowns;
//! every expression must be affine in the unknowns. Coefficients may depend on other variables
//! (parameters), in which case the solution is the generic one, i.e. valid where the pivots
//! used along the way do not vanish.
use crate::symbolic::symbolic_engine::Expr;
use log::{debug, warn};
use nalgebra::DMatrix;
use num::Zero;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LinearSystemError {
    /// an equation is not affine in the unknowns
    NonLinear(String),
    /// a row reduced to `0 = c` with `c != 0`
    Inconsistent(String),
}

impl fmt::Display for LinearSystemError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinearSystemError::NonLinear(eq) => {
                write!(f, "equation is not linear in the unknowns: {} = 0", eq)
            }
            LinearSystemError::Inconsistent(c) => {
                write!(f, "linear system has no solution: reduced to 0 = {}", c)
            }
        }
    }
}

impl std::error::Error for LinearSystemError {}

/// Augmented matrix `[A | b]` of the system `A x = b`
#[derive(Debug, Clone)]
pub struct LinearSystem {
    unknowns: Vec<String>,
    augmented: DMatrix<Expr>,
}

impl LinearSystem {
    /// Builds the system `equations[k] = 0`. Identically zero equations are skipped.
    pub fn new(equations: &[Expr], unknowns: &[String]) -> Result<Self, LinearSystemError> {
        let n = unknowns.len();
        let mut rows: Vec<Vec<Expr>> = Vec::with_capacity(equations.len());
        for eq in equations.iter().filter(|eq| !eq.is_zero()) {
            let (mut coefficients, constant) = eq
                .coefficients_in(unknowns)
                .ok_or_else(|| LinearSystemError::NonLinear(eq.to_string()))?;
            coefficients.push(-constant);
            rows.push(coefficients);
        }
        let augmented =
            DMatrix::from_fn(rows.len(), n + 1, |i, j| rows[i][j].clone());
        Ok(Self {
            unknowns: unknowns.to_vec(),
            augmented,
        })
    }

    pub fn unknowns(&self) -> &[String] {
        &self.unknowns
    }

    /// number of equations kept
    pub fn number_of_equations(&self) -> usize {
        self.augmented.nrows()
    }

    /// Gauss-Jordan elimination to reduced row echelon form. Among the candidate pivots of a
    /// column a constant entry is preferred, so that no parameter appears in a denominator
    /// unless it is unavoidable.
    pub fn solve(&self) -> Result<GenericSolution, LinearSystemError> {
        let mut m = self.augmented.clone();
        let (rows, cols) = m.shape();
        let n = cols - 1;
        let mut pivots: Vec<(usize, usize)> = Vec::new(); // (column, row)
        let mut pivot_row = 0;
        for col in 0..n {
            if pivot_row == rows {
                break;
            }
            let candidate = (pivot_row..rows)
                .filter(|&r| !m[(r, col)].is_zero())
                .min_by_key(|&r| (!m[(r, col)].is_constant(), r));
            let Some(r) = candidate else {
                continue;
            };
            m.swap_rows(pivot_row, r);
            let pivot = m[(pivot_row, col)].clone();
            if !pivot.is_constant() {
                debug!("dividing by non-constant pivot {}", pivot);
            }
            for c in col..cols {
                m[(pivot_row, c)] = &m[(pivot_row, c)] / &pivot;
            }
            for r in 0..rows {
                if r == pivot_row || m[(r, col)].is_zero() {
                    continue;
                }
                let factor = m[(r, col)].clone();
                for c in col..cols {
                    if m[(pivot_row, c)].is_zero() {
                        continue;
                    }
                    m[(r, c)] = &m[(r, c)] - &(&factor * &m[(pivot_row, c)]);
                }
            }
            pivots.push((col, pivot_row));
            pivot_row += 1;
        }
        if let Some(r) = (pivot_row..rows).find(|&r| !m[(r, n)].is_zero()) {
            warn!(
                "The system has no solution. rank(A) = {} != rank([A b])",
                pivot_row
            );
            return Err(LinearSystemError::Inconsistent(m[(r, n)].to_string()));
        }

        let pivot_of: HashMap<usize, usize> = pivots.iter().cloned().collect();
        let free: Vec<usize> = (0..n).filter(|j| !pivot_of.contains_key(j)).collect();
        let values = (0..n)
            .map(|j| match pivot_of.get(&j) {
                Some(&row) => {
                    let mut value = m[(row, n)].clone();
                    for &f in &free {
                        if !m[(row, f)].is_zero() {
                            value -= &m[(row, f)] * &Expr::Var(&self.unknowns[f]);
                        }
                    }
                    value
                }
                None => Expr::Var(&self.unknowns[j]),
            })
            .collect();
        debug!(
            "solved {} equations in {} unknowns: rank {}, {} free",
            rows,
            n,
            pivots.len(),
            free.len()
        );
        Ok(GenericSolution {
            unknowns: self.unknowns.clone(),
            values,
            free: free.iter().map(|&f| self.unknowns[f].clone()).collect(),
        })
    }
}

/// Solution of a linear system: the value of each unknown as an affine expression in the free
/// unknowns.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericSolution {
    pub unknowns: Vec<String>,
    pub values: Vec<Expr>,
    pub free: Vec<String>,
}

impl GenericSolution {
    /// substitution unknown -> value
    pub fn as_map(&self) -> HashMap<String, Expr> {
        self.unknowns
            .iter()
            .cloned()
            .zip(self.values.iter().cloned())
            .collect()
    }

    /// values with all free unknowns set to zero
    pub fn particular(&self) -> Vec<Expr> {
        let zeros: HashMap<String, Expr> = self
            .free
            .iter()
            .map(|f| (f.clone(), Expr::zero()))
            .collect();
        self.values.iter().map(|v| v.substitute_map(&zeros)).collect()
    }

    /// One solution of the homogeneous system per free unknown: the coefficient of that free
    /// unknown in each value.
    pub fn homogeneous_basis(&self) -> Result<Vec<Vec<Expr>>, LinearSystemError> {
        let mut basis = vec![Vec::with_capacity(self.values.len()); self.free.len()];
        for value in &self.values {
            let (coefficients, _) = value
                .coefficients_in(&self.free)
                .ok_or_else(|| LinearSystemError::NonLinear(value.to_string()))?;
            for (k, c) in coefficients.into_iter().enumerate() {
                basis[k].push(c);
            }
        }
        Ok(basis)
    }
}
