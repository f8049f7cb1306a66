use crate::symbolic::symbolic_engine::Expr;

use itertools::Itertools;
use num::Zero;
use std::collections::HashMap;
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
#[derive(Clone, Debug, PartialEq)]
/// Symbolic vector
pub struct ExprVector {
    pub data: Vec<Expr>,
}

impl ExprVector {
    /// Create new symbolic vector
    pub fn new(data: Vec<Expr>) -> Self {
        Self { data }
    }

    /// Create zero vector of given size
    pub fn zeros(size: usize) -> Self {
        Self {
            data: vec![Expr::zero(); size],
        }
    }
    /// the `index`-th (0-based) vector of the standard basis
    pub fn unit(size: usize, index: usize) -> Self {
        let mut v = Self::zeros(size);
        v.data[index] = Expr::from_int(1);
        v
    }
    /// Create from variable names
    pub fn from_variables(vars: &[String]) -> Self {
        Self {
            data: vars.iter().map(|v| Expr::Var(v)).collect(),
        }
    }
    /// Get length
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Expr> {
        self.data.iter()
    }
    /// Element access
    pub fn get(&self, index: usize) -> Option<&Expr> {
        self.data.get(index)
    }

    /// true if every component is identically zero
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(Expr::is_zero)
    }

    /// Dot product (symbolic)
    pub fn dot(&self, other: &ExprVector) -> Expr {
        assert_eq!(self.len(), other.len(), "Vector dimensions must match");
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Scalar multiplication
    pub fn scale(&self, scalar: &Expr) -> ExprVector {
        ExprVector {
            data: self.data.iter().map(|expr| scalar * expr).collect(),
        }
    }

    /// Substitute variables
    pub fn substitute(&self, var: &str, value: &Expr) -> ExprVector {
        ExprVector {
            data: self
                .data
                .iter()
                .map(|expr| expr.substitute_variable(var, value))
                .collect(),
        }
    }
    pub fn substitute_map(&self, values: &HashMap<String, Expr>) -> ExprVector {
        ExprVector {
            data: self
                .data
                .iter()
                .map(|expr| expr.substitute_map(values))
                .collect(),
        }
    }
}

impl Index<usize> for ExprVector {
    type Output = Expr;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for ExprVector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<'a> Add<&'a ExprVector> for &'a ExprVector {
    type Output = ExprVector;

    fn add(self, other: &'a ExprVector) -> ExprVector {
        assert_eq!(self.len(), other.len(), "Vector dimensions must match");
        ExprVector {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a + b)
                .collect(),
        }
    }
}

impl<'a> Sub<&'a ExprVector> for &'a ExprVector {
    type Output = ExprVector;

    fn sub(self, other: &'a ExprVector) -> ExprVector {
        assert_eq!(self.len(), other.len(), "Vector dimensions must match");
        ExprVector {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a - b)
                .collect(),
        }
    }
}

impl Add for ExprVector {
    type Output = ExprVector;
    fn add(self, other: ExprVector) -> ExprVector {
        &self + &other
    }
}

impl Sub for ExprVector {
    type Output = ExprVector;
    fn sub(self, other: ExprVector) -> ExprVector {
        &self - &other
    }
}

impl Mul<ExprVector> for Expr {
    type Output = ExprVector;

    fn mul(self, vector: ExprVector) -> ExprVector {
        vector.scale(&self)
    }
}

impl fmt::Display for ExprVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.data.iter().join(","))
    }
}

/// Symbolic matrix, stored by rows
#[derive(Clone, Debug, PartialEq)]
pub struct ExprMatrix {
    pub data: Vec<Vec<Expr>>,
    nrows: usize,
    ncols: usize,
}

impl ExprMatrix {
    /// Create new symbolic matrix from rows
    pub fn new(data: Vec<Vec<Expr>>) -> Self {
        let nrows = data.len();
        let ncols = data.first().map_or(0, |row| row.len());
        assert!(
            data.iter().all(|row| row.len() == ncols),
            "All rows must have the same length"
        );
        Self { data, nrows, ncols }
    }

    /// Create zero matrix
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![vec![Expr::zero(); ncols]; nrows],
            nrows,
            ncols,
        }
    }

    /// Create identity matrix
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size, size);
        for i in 0..size {
            m.data[i][i] = Expr::from_int(1);
        }
        m
    }

    /// Create diagonal matrix from vector
    pub fn diagonal_matrix(diag: &ExprVector) -> Self {
        let mut m = Self::zeros(diag.len(), diag.len());
        for (i, d) in diag.iter().enumerate() {
            m.data[i][i] = d.clone();
        }
        m
    }

    /// Get matrix dimensions
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Element access
    pub fn get(&self, i: usize, j: usize) -> Option<&Expr> {
        self.data.get(i)?.get(j)
    }

    /// Get row as vector
    pub fn row(&self, i: usize) -> ExprVector {
        ExprVector::new(self.data[i].clone())
    }

    /// Get column as vector
    pub fn column(&self, j: usize) -> ExprVector {
        ExprVector::new(self.data.iter().map(|row| row[j].clone()).collect())
    }

    /// Matrix-vector multiplication
    pub fn mul_vector(&self, vec: &ExprVector) -> ExprVector {
        assert_eq!(self.ncols, vec.len(), "Matrix-vector dimensions must match");
        ExprVector::new(
            self.data
                .iter()
                .map(|row| row.iter().zip(vec.iter()).map(|(a, b)| a * b).sum())
                .collect(),
        )
    }

    /// Matrix trace (sum of diagonal elements)
    pub fn trace(&self) -> Expr {
        assert!(self.is_square(), "Trace only defined for square matrices");
        (0..self.nrows).map(|i| self.data[i][i].clone()).sum()
    }

    /// Scalar multiplication
    pub fn scale(&self, scalar: &Expr) -> ExprMatrix {
        self.map(|e| scalar * e)
    }

    /// Apply function to each element
    pub fn map<F>(&self, f: F) -> ExprMatrix
    where
        F: Fn(&Expr) -> Expr,
    {
        ExprMatrix {
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(&f).collect())
                .collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// all entries, row by row
    pub fn entries(&self) -> impl Iterator<Item = &Expr> {
        self.data.iter().flatten()
    }

    pub fn is_zero(&self) -> bool {
        self.entries().all(Expr::is_zero)
    }

    /// true if every off-diagonal entry is identically zero
    pub fn is_diagonal(&self) -> bool {
        (0..self.nrows).all(|i| {
            (0..self.ncols).all(|j| i == j || self.data[i][j].is_zero())
        })
    }

    /// diagonal entries
    pub fn diagonal(&self) -> ExprVector {
        ExprVector::new(
            (0..self.nrows.min(self.ncols))
                .map(|i| self.data[i][i].clone())
                .collect(),
        )
    }

    /// matrix commutator self*other - other*self
    pub fn commutator(&self, other: &ExprMatrix) -> ExprMatrix {
        &(self * other) - &(other * self)
    }

    pub fn substitute_map(&self, values: &HashMap<String, Expr>) -> ExprMatrix {
        self.map(|e| e.substitute_map(values))
    }

    /// LaTeX `pmatrix` rendering
    pub fn to_latex(&self) -> String {
        let rows = self
            .data
            .iter()
            .map(|row| row.iter().map(Expr::to_latex).join(" & "))
            .join("\\\\ ");
        format!("\\begin{{pmatrix}}{}\\end{{pmatrix}}", rows)
    }
}

impl Index<(usize, usize)> for ExprMatrix {
    type Output = Expr;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[i][j]
    }
}

impl IndexMut<(usize, usize)> for ExprMatrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.data[i][j]
    }
}

impl<'a> Mul<&'a ExprMatrix> for &'a ExprMatrix {
    type Output = ExprMatrix;

    fn mul(self, other: &'a ExprMatrix) -> ExprMatrix {
        assert_eq!(
            self.ncols, other.nrows,
            "Matrix dimensions incompatible for multiplication"
        );
        let mut result = ExprMatrix::zeros(self.nrows, other.ncols);
        for i in 0..self.nrows {
            for j in 0..other.ncols {
                result.data[i][j] = (0..self.ncols)
                    .filter(|&k| !self.data[i][k].is_zero() && !other.data[k][j].is_zero())
                    .map(|k| &self.data[i][k] * &other.data[k][j])
                    .sum();
            }
        }
        result
    }
}

impl<'a> Add<&'a ExprMatrix> for &'a ExprMatrix {
    type Output = ExprMatrix;

    fn add(self, other: &'a ExprMatrix) -> ExprMatrix {
        assert_eq!(self.shape(), other.shape(), "Matrix dimensions must match");
        let mut result = self.clone();
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                result.data[i][j] = &self.data[i][j] + &other.data[i][j];
            }
        }
        result
    }
}

impl<'a> Sub<&'a ExprMatrix> for &'a ExprMatrix {
    type Output = ExprMatrix;

    fn sub(self, other: &'a ExprMatrix) -> ExprMatrix {
        assert_eq!(self.shape(), other.shape(), "Matrix dimensions must match");
        let mut result = self.clone();
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                result.data[i][j] = &self.data[i][j] - &other.data[i][j];
            }
        }
        result
    }
}

impl Mul for ExprMatrix {
    type Output = ExprMatrix;
    fn mul(self, other: ExprMatrix) -> ExprMatrix {
        &self * &other
    }
}

impl Sub for ExprMatrix {
    type Output = ExprMatrix;
    fn sub(self, other: ExprMatrix) -> ExprMatrix {
        &self - &other
    }
}

impl fmt::Display for ExprMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = self
            .data
            .iter()
            .map(|row| format!("[{}]", row.iter().join(",")))
            .join(",");
        write!(f, "[{}]", rows)
    }
}
