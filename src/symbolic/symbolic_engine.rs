//! # Symbolic Engine Module
//!
//! This module provides the exact symbolic scalar used throughout the crate: a quotient of two
//! multivariate polynomials with rational coefficients. Unknowns (coordinates of generic
//! elements) and parameters of the structure constants are both plain named variables.
//!
//! ## Purpose
//!
//! The symbolic engine allows users to:
//! - Create variables, integer and rational constants
//! - Add, subtract, multiply and divide expressions exactly (no floating point anywhere)
//! - Substitute variables by expressions
//! - Split an expression which is linear in a list of unknowns into coefficients and constant term
//! - Render expressions as plain text (re-parsable) or LaTeX
//!
//! ## Main Structures and Methods
//!
//! ### `Expr`
//! - `num / den` with `den` normalised to be monic; `den == 1` for polynomials
//! - zero test is exact: an expression is zero iff its numerator is the zero polynomial
//! - equality is decided by cross multiplication, so different representations of the same
//!   rational function compare equal
//!
//! ### Key Methods
//! - `substitute_variable(var, expr)` - exact substitution
//! - `coefficients_in(unknowns)` - linear decomposition used to build linear systems
//!
//! ## Simplification
//! After every operation the fraction is normalised: constant denominators are absorbed in the
//! numerator, common factors are cancelled by a gcd when a single variable is involved, and by
//! monomial content and exact division otherwise.

#![allow(non_camel_case_types)]

use crate::symbolic::polynomial::Poly;
use num::BigRational;
use num_traits::{One, Zero};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Exact symbolic expression: a rational function with rational coefficients.
///
/// # Examples
/// ```rust, ignore
/// use RustedLieThe::symbolic::symbolic_engine::Expr;
/// let lambda = Expr::Var("lambda");
/// let e = (lambda.clone() - Expr::from_int(1)) / lambda;
/// assert!(!e.is_polynomial());
/// ```
#[derive(Clone, Debug)]
pub struct Expr {
    num: Poly,
    den: Poly,
}

impl Expr {
    /// BASIC FEATURES

    /// Builds `num / den` and normalises it.
    ///
    /// # Panics
    /// if `den` is the zero polynomial
    pub fn new(num: Poly, den: Poly) -> Expr {
        assert!(!den.is_zero(), "division by zero in symbolic expression");
        Expr::normalized(num, den)
    }
    pub fn from_poly(num: Poly) -> Expr {
        Expr { num, den: Poly::one() }
    }
    /// Numerical constant value
    pub fn Const(value: BigRational) -> Expr {
        Expr::from_poly(Poly::constant(value))
    }
    pub fn from_int(value: i64) -> Expr {
        Expr::from_poly(Poly::from_int(value))
    }
    /// `numer/denom`
    ///
    /// # Panics
    /// if `denom` is zero
    pub fn rational(numer: i64, denom: i64) -> Expr {
        Expr::Const(BigRational::new(numer.into(), denom.into()))
    }

    /// Symbolic variable with a name (e.g., "lambda", "a_1_2")
    pub fn Var(name: &str) -> Expr {
        Expr::from_poly(Poly::var(name))
    }

    fn normalized(num: Poly, den: Poly) -> Expr {
        if num.is_zero() {
            return Expr::from_poly(Poly::zero());
        }
        if let Some(c) = den.constant_value() {
            return Expr::from_poly(num.scale(&c.recip()));
        }
        let (mut num, mut den) = (num, den);
        if let Some(g) = num.gcd_univariate(&den) {
            if !g.is_constant() {
                if let (Some(n), Some(d)) = (num.div_exact(&g), den.div_exact(&g)) {
                    num = n;
                    den = d;
                }
            }
        } else {
            let common = num.monomial_content().gcd(&den.monomial_content());
            if !common.is_one() {
                let common_factor = Poly::from_term(common, BigRational::one());
                if let (Some(n), Some(d)) =
                    (num.div_exact(&common_factor), den.div_exact(&common_factor))
                {
                    num = n;
                    den = d;
                }
            }
            if let Some(q) = num.div_exact(&den) {
                return Expr::from_poly(q);
            }
        }
        if let Some(c) = den.constant_value() {
            return Expr::from_poly(num.scale(&c.recip()));
        }
        let lc = den.leading_coefficient();
        if !lc.is_one() {
            let inverse = lc.recip();
            num = num.scale(&inverse);
            den = den.scale(&inverse);
        }
        Expr { num, den }
    }

    pub fn numerator(&self) -> &Poly {
        &self.num
    }
    pub fn denominator(&self) -> &Poly {
        &self.den
    }

    /// Checks if expression is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
    pub fn is_one(&self) -> bool {
        self.num == self.den
    }
    /// true if the expression does not depend on any variable
    pub fn is_constant(&self) -> bool {
        self.num.is_constant() && self.den.is_constant()
    }
    pub fn constant_value(&self) -> Option<BigRational> {
        let n = self.num.constant_value()?;
        let d = self.den.constant_value()?;
        Some(n / d)
    }
    /// true if the denominator is a constant
    pub fn is_polynomial(&self) -> bool {
        self.den.is_constant()
    }

    /// all variables of the expression
    pub fn variables(&self) -> BTreeSet<String> {
        let mut vars = self.num.variables();
        vars.extend(self.den.variables());
        vars
    }
    /// check if the expression contains a variable
    pub fn contains_variable(&self, var_name: &str) -> bool {
        self.num.contains_variable(var_name) || self.den.contains_variable(var_name)
    }
    pub fn depends_on_any(&self, vars: &BTreeSet<String>) -> bool {
        vars.iter().any(|v| self.contains_variable(v))
    }

    /// substitute a variable with an expression
    pub fn substitute_variable(&self, var: &str, expr: &Expr) -> Expr {
        if !self.contains_variable(var) {
            return self.clone();
        }
        // clear the denominators of the substituted value: p/q^k -> p*q^(d-k) / q^d
        let degree = self.num.degree_in(var).max(self.den.degree_in(var));
        let homogenize = |poly: &Poly| -> Poly {
            let mut result = Poly::zero();
            for (monomial, coefficient) in poly.terms() {
                let k = monomial.exponent(var);
                let term = Poly::from_term(monomial.without(var), coefficient.clone());
                let factor = &expr.num.pow(k) * &expr.den.pow(degree - k);
                result = &result + &(&term * &factor);
            }
            result
        };
        Expr::new(homogenize(&self.num), homogenize(&self.den))
    }

    /// Substitutes several variables one after the other. The values must not contain
    /// variables which are themselves keys of the map (other than mapping to themselves).
    pub fn substitute_map(&self, values: &HashMap<String, Expr>) -> Expr {
        let mut result = self.clone();
        for (var, value) in values {
            if result.contains_variable(var) && *value != Expr::Var(var) {
                result = result.substitute_variable(var, value);
            }
        }
        result
    }

    /// Splits an expression which is affine in `unknowns` into the coefficient of each unknown
    /// and the constant term. Returns `None` if the expression is not affine in the unknowns
    /// (products of unknowns, powers, or unknowns in the denominator).
    pub fn coefficients_in(&self, unknowns: &[String]) -> Option<(Vec<Expr>, Expr)> {
        if unknowns.iter().any(|u| self.den.contains_variable(u)) {
            return None;
        }
        let index: HashMap<&str, usize> = unknowns
            .iter()
            .enumerate()
            .map(|(i, u)| (u.as_str(), i))
            .collect();
        let mut coefficients = vec![Poly::zero(); unknowns.len()];
        let mut constant = Poly::zero();
        for (monomial, coefficient) in self.num.terms() {
            let mut found: Option<usize> = None;
            for (var, exp) in monomial.powers() {
                if let Some(&i) = index.get(var.as_str()) {
                    if *exp > 1 || found.is_some() {
                        return None;
                    }
                    found = Some(i);
                }
            }
            match found {
                Some(i) => {
                    let rest = monomial.without(&unknowns[i]);
                    coefficients[i].add_term(rest, coefficient.clone());
                }
                None => constant.add_term(monomial.clone(), coefficient.clone()),
            }
        }
        let coefficients = coefficients
            .into_iter()
            .map(|c| Expr::new(c, self.den.clone()))
            .collect();
        Some((coefficients, Expr::new(constant, self.den.clone())))
    }

    /// Creates power expression self^exponent.
    pub fn pow(&self, exponent: u32) -> Expr {
        Expr::new(self.num.pow(exponent), self.den.pow(exponent))
    }

    /// LaTeX rendering
    pub fn to_latex(&self) -> String {
        if self.is_polynomial() {
            return self.num.to_latex();
        }
        format!("\\frac{{{}}}{{{}}}", self.num.to_latex(), self.den.to_latex())
    }
}

/// Display implementation for pretty printing symbolic expressions.
///
/// Polynomials are printed as sums of terms in decreasing monomial order, e.g.
/// `2*lambda^2 - 1/2*a_1_2 + 3`, which is also accepted by the parameter parser.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.den.is_constant() {
            return write!(f, "{}", self.num);
        }
        let wrap = |p: &Poly| {
            if p.len() > 1 {
                format!("({})", p)
            } else {
                p.to_string()
            }
        };
        write!(f, "{}/{}", wrap(&self.num), wrap(&self.den))
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        if self.den == other.den {
            return self.num == other.num;
        }
        &self.num * &other.den == &other.num * &self.den
    }
}

impl<'a> std::ops::Add<&'a Expr> for &'a Expr {
    type Output = Expr;
    fn add(self, rhs: &'a Expr) -> Expr {
        if self.den == rhs.den {
            return Expr::new(&self.num + &rhs.num, self.den.clone());
        }
        Expr::new(
            &(&self.num * &rhs.den) + &(&rhs.num * &self.den),
            &self.den * &rhs.den,
        )
    }
}

impl<'a> std::ops::Sub<&'a Expr> for &'a Expr {
    type Output = Expr;
    fn sub(self, rhs: &'a Expr) -> Expr {
        if self.den == rhs.den {
            return Expr::new(&self.num - &rhs.num, self.den.clone());
        }
        Expr::new(
            &(&self.num * &rhs.den) - &(&rhs.num * &self.den),
            &self.den * &rhs.den,
        )
    }
}

impl<'a> std::ops::Mul<&'a Expr> for &'a Expr {
    type Output = Expr;
    fn mul(self, rhs: &'a Expr) -> Expr {
        if self.is_zero() || rhs.is_zero() {
            return Expr::zero();
        }
        Expr::new(&self.num * &rhs.num, &self.den * &rhs.den)
    }
}

impl<'a> std::ops::Div<&'a Expr> for &'a Expr {
    type Output = Expr;
    /// # Panics
    /// on division by an expression which is identically zero
    fn div(self, rhs: &'a Expr) -> Expr {
        assert!(!rhs.is_zero(), "division by zero in symbolic expression");
        Expr::new(&self.num * &rhs.den, &self.den * &rhs.num)
    }
}

impl std::ops::Neg for &Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        Expr {
            num: -&self.num,
            den: self.den.clone(),
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl std::ops::AddAssign for Expr {
    fn add_assign(&mut self, rhs: Self) {
        *self = &*self + &rhs;
    }
}

impl std::ops::SubAssign for Expr {
    fn sub_assign(&mut self, rhs: Self) {
        *self = &*self - &rhs;
    }
}

impl std::ops::MulAssign for Expr {
    fn mul_assign(&mut self, rhs: Self) {
        *self = &*self * &rhs;
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl Zero for Expr {
    fn zero() -> Self {
        Expr::from_poly(Poly::zero())
    }
    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl One for Expr {
    fn one() -> Self {
        Expr::from_poly(Poly::one())
    }
}

impl std::iter::Sum for Expr {
    fn sum<I: Iterator<Item = Expr>>(iter: I) -> Expr {
        iter.fold(Expr::zero(), |acc, e| acc + e)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::from_int(value)
    }
}

impl From<BigRational> for Expr {
    fn from(value: BigRational) -> Self {
        Expr::Const(value)
    }
}
