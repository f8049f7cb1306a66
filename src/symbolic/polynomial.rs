//! # Exact multivariate polynomials
//!
//! Sparse polynomials with rational coefficients (`num::BigRational`) in named variables.
//! They are the numerator/denominator building block of [`Expr`](crate::symbolic::symbolic_engine::Expr).
//!
//! ## Main Structures and Methods
//! - `Monomial` - product of variables with positive exponents, ordered by graded lexicographic order
//!   (total degree first, then the exponent of the alphabetically first variable)
//! - `Poly` - map monomial -> non-zero coefficient
//! - `div_rem` - multivariate division by the leading term, used for exact division tests
//!   and for the Euclidean algorithm in one variable
//! - `expand_in` - groups the terms by the part of the monomial in a given set of variables,
//!   that is how coefficients of parameter monomials are collected

use num::BigRational;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// product of named variables, exponents are always positive
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Monomial(BTreeMap<String, u32>);

impl Monomial {
    /// the empty product
    pub fn one() -> Self {
        Monomial(BTreeMap::new())
    }
    pub fn var(name: &str) -> Self {
        let mut powers = BTreeMap::new();
        powers.insert(name.to_string(), 1);
        Monomial(powers)
    }
    pub fn is_one(&self) -> bool {
        self.0.is_empty()
    }
    /// total degree
    pub fn degree(&self) -> u32 {
        self.0.values().sum()
    }
    pub fn exponent(&self, var: &str) -> u32 {
        self.0.get(var).copied().unwrap_or(0)
    }
    pub fn variables(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }
    pub fn powers(&self) -> impl Iterator<Item = (&String, &u32)> {
        self.0.iter()
    }

    pub fn mul(&self, other: &Monomial) -> Monomial {
        let mut powers = self.0.clone();
        for (var, exp) in &other.0 {
            *powers.entry(var.clone()).or_insert(0) += exp;
        }
        Monomial(powers)
    }

    /// self / other, if other divides self
    pub fn divide(&self, other: &Monomial) -> Option<Monomial> {
        let mut powers = self.0.clone();
        for (var, exp) in &other.0 {
            let own = powers.get(var).copied().unwrap_or(0);
            if own < *exp {
                return None;
            }
            if own == *exp {
                powers.remove(var);
            } else {
                powers.insert(var.clone(), own - exp);
            }
        }
        Some(Monomial(powers))
    }

    pub fn gcd(&self, other: &Monomial) -> Monomial {
        let powers = self
            .0
            .iter()
            .filter_map(|(var, exp)| {
                let common = (*exp).min(other.exponent(var));
                (common > 0).then(|| (var.clone(), common))
            })
            .collect();
        Monomial(powers)
    }

    /// the monomial with `var` removed
    pub fn without(&self, var: &str) -> Monomial {
        let mut powers = self.0.clone();
        powers.remove(var);
        Monomial(powers)
    }

    /// splits into (part in `vars`, remaining part)
    pub fn split(&self, vars: &BTreeSet<String>) -> (Monomial, Monomial) {
        let (inside, outside): (BTreeMap<_, _>, BTreeMap<_, _>) = self
            .0
            .iter()
            .map(|(v, e)| (v.clone(), *e))
            .partition(|(v, _)| vars.contains(v));
        (Monomial(inside), Monomial(outside))
    }
}

impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        self.degree().cmp(&other.degree()).then_with(|| {
            let vars: BTreeSet<&String> = self.0.keys().chain(other.0.keys()).collect();
            for var in vars {
                let ordering = self.exponent(var).cmp(&other.exponent(var));
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            Ordering::Equal
        })
    }
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_one() {
            return write!(f, "1");
        }
        let factors: Vec<String> = self
            .0
            .iter()
            .map(|(var, exp)| {
                if *exp == 1 {
                    var.clone()
                } else {
                    format!("{}^{}", var, exp)
                }
            })
            .collect();
        write!(f, "{}", factors.join("*"))
    }
}

/// Sparse polynomial with exact rational coefficients. Zero coefficients are never stored,
/// so the zero polynomial is the empty map and structural equality is mathematical equality.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Poly {
    terms: BTreeMap<Monomial, BigRational>,
}

impl Poly {
    pub fn zero() -> Self {
        Poly {
            terms: BTreeMap::new(),
        }
    }
    pub fn one() -> Self {
        Poly::constant(BigRational::one())
    }
    pub fn constant(value: BigRational) -> Self {
        Poly::from_term(Monomial::one(), value)
    }
    pub fn from_int(value: i64) -> Self {
        Poly::constant(BigRational::from_integer(value.into()))
    }
    pub fn var(name: &str) -> Self {
        Poly::from_term(Monomial::var(name), BigRational::one())
    }
    pub fn from_term(monomial: Monomial, coefficient: BigRational) -> Self {
        let mut p = Poly::zero();
        p.add_term(monomial, coefficient);
        p
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
    /// true for constants, including zero
    pub fn is_constant(&self) -> bool {
        self.terms.keys().all(Monomial::is_one)
    }
    pub fn constant_value(&self) -> Option<BigRational> {
        if !self.is_constant() {
            return None;
        }
        Some(
            self.terms
                .get(&Monomial::one())
                .cloned()
                .unwrap_or_else(BigRational::zero),
        )
    }
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (&Monomial, &BigRational)> {
        self.terms.iter()
    }
    pub fn len(&self) -> usize {
        self.terms.len()
    }
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
    /// greatest term w.r.t. the monomial order
    pub fn leading_term(&self) -> Option<(&Monomial, &BigRational)> {
        self.terms.last_key_value()
    }
    pub fn leading_coefficient(&self) -> BigRational {
        self.leading_term()
            .map(|(_, c)| c.clone())
            .unwrap_or_else(BigRational::zero)
    }

    pub fn variables(&self) -> BTreeSet<String> {
        self.terms
            .keys()
            .flat_map(|m| m.variables().cloned())
            .collect()
    }
    pub fn contains_variable(&self, var: &str) -> bool {
        self.terms.keys().any(|m| m.exponent(var) > 0)
    }
    pub fn degree_in(&self, var: &str) -> u32 {
        self.terms.keys().map(|m| m.exponent(var)).max().unwrap_or(0)
    }

    /// adds `coefficient * monomial` in place, dropping the term if it cancels
    pub fn add_term(&mut self, monomial: Monomial, coefficient: BigRational) {
        if coefficient.is_zero() {
            return;
        }
        let entry = self
            .terms
            .entry(monomial.clone())
            .or_insert_with(BigRational::zero);
        *entry += coefficient;
        if entry.is_zero() {
            self.terms.remove(&monomial);
        }
    }

    pub fn scale(&self, factor: &BigRational) -> Poly {
        if factor.is_zero() {
            return Poly::zero();
        }
        Poly {
            terms: self
                .terms
                .iter()
                .map(|(m, c)| (m.clone(), c * factor))
                .collect(),
        }
    }

    pub fn mul_term(&self, monomial: &Monomial, coefficient: &BigRational) -> Poly {
        if coefficient.is_zero() {
            return Poly::zero();
        }
        Poly {
            terms: self
                .terms
                .iter()
                .map(|(m, c)| (m.mul(monomial), c * coefficient))
                .collect(),
        }
    }

    pub fn pow(&self, exponent: u32) -> Poly {
        let mut result = Poly::one();
        for _ in 0..exponent {
            result = &result * self;
        }
        result
    }

    /// replaces `var` by the polynomial `value`
    pub fn substitute(&self, var: &str, value: &Poly) -> Poly {
        if !self.contains_variable(var) {
            return self.clone();
        }
        let mut powers: Vec<Poly> = vec![Poly::one()];
        let mut result = Poly::zero();
        for (monomial, coefficient) in &self.terms {
            let exp = monomial.exponent(var) as usize;
            while powers.len() <= exp {
                let next = &powers[powers.len() - 1] * value;
                powers.push(next);
            }
            result = &result + &powers[exp].mul_term(&monomial.without(var), coefficient);
        }
        result
    }

    /// writes the polynomial as a sum of (monomial in `vars`) * (polynomial in the other variables)
    pub fn expand_in(&self, vars: &BTreeSet<String>) -> BTreeMap<Monomial, Poly> {
        let mut result: BTreeMap<Monomial, Poly> = BTreeMap::new();
        for (monomial, coefficient) in &self.terms {
            let (inside, outside) = monomial.split(vars);
            result
                .entry(inside)
                .or_insert_with(Poly::zero)
                .add_term(outside, coefficient.clone());
        }
        result.retain(|_, p| !p.is_zero());
        result
    }

    /// gcd of all monomials appearing in the polynomial
    pub fn monomial_content(&self) -> Monomial {
        let mut iter = self.terms.keys();
        match iter.next() {
            None => Monomial::one(),
            Some(first) => iter.fold(first.clone(), |acc, m| acc.gcd(m)),
        }
    }

    /// Division by the leading term of `divisor`. Returns (quotient, remainder) with
    /// `self = quotient * divisor + remainder` and no term of the remainder divisible
    /// by the leading monomial of the divisor.
    pub fn div_rem(&self, divisor: &Poly) -> (Poly, Poly) {
        let Some((lead_monomial, lead_coefficient)) = divisor.leading_term() else {
            return (Poly::zero(), self.clone());
        };
        let mut quotient = Poly::zero();
        let mut remainder = Poly::zero();
        let mut rest = self.clone();
        while let Some((monomial, coefficient)) = rest
            .leading_term()
            .map(|(m, c)| (m.clone(), c.clone()))
        {
            match monomial.divide(lead_monomial) {
                Some(factor) => {
                    let q = &coefficient / lead_coefficient;
                    rest = &rest - &divisor.mul_term(&factor, &q);
                    quotient.add_term(factor, q);
                }
                None => {
                    rest.terms.remove(&monomial);
                    remainder.add_term(monomial, coefficient);
                }
            }
        }
        (quotient, remainder)
    }

    /// self / divisor when the division is exact
    pub fn div_exact(&self, divisor: &Poly) -> Option<Poly> {
        if divisor.is_zero() {
            return None;
        }
        let (quotient, remainder) = self.div_rem(divisor);
        remainder.is_zero().then_some(quotient)
    }

    /// the same polynomial divided by its leading coefficient
    pub fn monic(&self) -> Poly {
        let lc = self.leading_coefficient();
        if lc.is_zero() || lc.is_one() {
            return self.clone();
        }
        self.scale(&lc.recip())
    }

    /// Monic gcd of two polynomials in (at most) one common variable, `None` when
    /// more than one variable is involved.
    pub fn gcd_univariate(&self, other: &Poly) -> Option<Poly> {
        let mut vars = self.variables();
        vars.extend(other.variables());
        if vars.len() > 1 {
            return None;
        }
        let (mut a, mut b) = (self.clone(), other.clone());
        while !b.is_zero() {
            let (_, r) = a.div_rem(&b);
            a = b;
            b = r;
        }
        Some(a.monic())
    }

    /// LaTeX rendering, variables are passed through `latex_symbol`
    pub fn to_latex(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut out = String::new();
        for (i, (monomial, coefficient)) in self.terms.iter().rev().enumerate() {
            let negative = coefficient.is_negative();
            let abs = coefficient.abs();
            if i == 0 {
                if negative {
                    out.push('-');
                }
            } else {
                out.push_str(if negative { " - " } else { " + " });
            }
            let factors: Vec<String> = monomial
                .powers()
                .map(|(var, exp)| {
                    if *exp == 1 {
                        latex_symbol(var)
                    } else {
                        format!("{}^{{{}}}", latex_symbol(var), exp)
                    }
                })
                .collect();
            if monomial.is_one() || !abs.is_one() {
                out.push_str(&latex_rational(&abs));
            }
            out.push_str(&factors.join(" "));
        }
        out
    }
}

const GREEK: [&str; 24] = [
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    "lambda", "mu", "nu", "xi", "pi", "rho", "sigma", "tau", "upsilon", "phi", "chi", "psi",
    "omega", "varphi",
];

/// `lambda` -> `\lambda`, `a_1_2` -> `a_{12}`
pub fn latex_symbol(name: &str) -> String {
    if GREEK.contains(&name) {
        return format!("\\{}", name);
    }
    match name.split_once('_') {
        Some((head, tail)) => format!("{}_{{{}}}", head, tail.replace('_', "")),
        None => name.to_string(),
    }
}

pub fn latex_rational(q: &BigRational) -> String {
    if q.is_integer() {
        q.to_string()
    } else {
        let sign = if q.is_negative() { "-" } else { "" };
        format!("{}\\frac{{{}}}{{{}}}", sign, q.numer().abs(), q.denom())
    }
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (i, (monomial, coefficient)) in self.terms.iter().rev().enumerate() {
            let negative = coefficient.is_negative();
            let abs = coefficient.abs();
            if i == 0 {
                if negative {
                    write!(f, "-")?;
                }
            } else {
                write!(f, "{}", if negative { " - " } else { " + " })?;
            }
            if monomial.is_one() {
                write!(f, "{}", abs)?;
            } else if abs.is_one() {
                write!(f, "{}", monomial)?;
            } else {
                write!(f, "{}*{}", abs, monomial)?;
            }
        }
        Ok(())
    }
}

impl<'a> std::ops::Add<&'a Poly> for &'a Poly {
    type Output = Poly;
    fn add(self, rhs: &'a Poly) -> Poly {
        let mut result = self.clone();
        for (m, c) in &rhs.terms {
            result.add_term(m.clone(), c.clone());
        }
        result
    }
}

impl<'a> std::ops::Sub<&'a Poly> for &'a Poly {
    type Output = Poly;
    fn sub(self, rhs: &'a Poly) -> Poly {
        let mut result = self.clone();
        for (m, c) in &rhs.terms {
            result.add_term(m.clone(), -c.clone());
        }
        result
    }
}

impl<'a> std::ops::Mul<&'a Poly> for &'a Poly {
    type Output = Poly;
    fn mul(self, rhs: &'a Poly) -> Poly {
        let mut result = Poly::zero();
        for (m1, c1) in &self.terms {
            for (m2, c2) in &rhs.terms {
                result.add_term(m1.mul(m2), c1 * c2);
            }
        }
        result
    }
}

impl std::ops::Neg for &Poly {
    type Output = Poly;
    fn neg(self) -> Poly {
        self.scale(&-BigRational::one())
    }
}

impl std::ops::Add for Poly {
    type Output = Poly;
    fn add(self, rhs: Poly) -> Poly {
        &self + &rhs
    }
}

impl std::ops::Sub for Poly {
    type Output = Poly;
    fn sub(self, rhs: Poly) -> Poly {
        &self - &rhs
    }
}

impl std::ops::Mul for Poly {
    type Output = Poly;
    fn mul(self, rhs: Poly) -> Poly {
        &self * &rhs
    }
}

impl std::ops::Neg for Poly {
    type Output = Poly;
    fn neg(self) -> Poly {
        -&self
    }
}
