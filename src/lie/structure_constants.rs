//! Parsing and rendering of structure constants.
//!
//! A Lie algebra of dimension n is written as n comma-separated components; the k-th component
//! is `d e^k`, a linear combination of pairs `ij` standing for `e^i ∧ e^j`, so that
//! `[e_i, e_j] = Σ_k c^k_ij e_k`. Examples:
//! ```text
//! 0,0,12
//! 0,0,12,0,13+24,14,15+23+1/2*(26+34)
//! 0,0,0,12,23,-13,[lambda]*26-15-[lambda-1]*34
//! ```
//! A run of digits is a pair when it has exactly two digits and is not followed by `*` or `/`;
//! otherwise it is a number. Coefficients depending on parameters are written inside square
//! brackets, where integers, rationals, identifiers, `+ - *`, parentheses and `^k` are allowed.
use crate::lie::error::{LieError, LieResult};
use crate::symbolic::symbolic_engine::Expr;
use itertools::Itertools;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, char, digit1, multispace0, one_of},
    combinator::{all_consuming, map_res, opt, recognize},
    error::{Error, ErrorKind},
    multi::many0,
    sequence::{delimited, pair, preceded, terminated},
};
use num::{BigInt, BigRational, One, Signed, Zero};
use std::collections::{BTreeMap, BTreeSet};

/// Coefficients of `d e^k` indexed by pairs `(i, j)` with `i < j` (1-based)
pub type TwoForm = BTreeMap<(usize, usize), Expr>;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Term {
    Pair(usize, usize),
    Number(BigInt, BigInt),
    Symbol(String),
    Power(Box<Term>, u32),
    Sum(Vec<Term>),
    Product(Vec<Term>),
    Neg(Box<Term>),
}

type Atom = fn(&str) -> IResult<&str, Term>;

fn integer(input: &str) -> IResult<&str, BigInt> {
    map_res(digit1, |d: &str| d.parse::<BigInt>()).parse(input)
}

/// `p` or `p/q`
fn rational_number(input: &str) -> IResult<&str, Term> {
    let (input, numer) = integer(input)?;
    let (input, denom) = opt(preceded(delimited(multispace0, char('/'), multispace0), integer))
        .parse(input)?;
    Ok((input, Term::Number(numer, denom.unwrap_or_else(BigInt::one))))
}

/// digits outside brackets: a pair `ij` or a numerical coefficient
pub(crate) fn number_or_pair(input: &str) -> IResult<&str, Term> {
    let (rest, digits) = digit1(input)?;
    let after = rest.trim_start();
    if after.starts_with('/') || after.starts_with('*') || digits.len() != 2 {
        return rational_number(input);
    }
    let b = digits.as_bytes();
    Ok((
        rest,
        Term::Pair((b[0] - b'0') as usize, (b[1] - b'0') as usize),
    ))
}

pub(crate) fn identifier(input: &str) -> IResult<&str, Term> {
    let (input, name) = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))
    .parse(input)?;
    Ok((input, Term::Symbol(name.to_string())))
}

fn parameter_atom(input: &str) -> IResult<&str, Term> {
    alt((rational_number, identifier)).parse(input)
}

fn bracketed_coefficient(input: &str) -> IResult<&str, Term> {
    delimited(
        terminated(char('['), multispace0),
        |i| sum(i, parameter_atom),
        preceded(multispace0, char(']')),
    )
    .parse(input)
}

fn base(input: &str, atom: Atom) -> IResult<&str, Term> {
    alt((
        delimited(
            terminated(char('('), multispace0),
            |i| sum(i, atom),
            preceded(multispace0, char(')')),
        ),
        bracketed_coefficient,
        atom,
    ))
    .parse(input)
}

fn power(input: &str, atom: Atom) -> IResult<&str, Term> {
    let (input, b) = base(input, atom)?;
    let exponent = preceded(
        delimited(multispace0, char('^'), multispace0),
        map_res(digit1, |d: &str| d.parse::<u32>()),
    );
    let (input, exp) = opt(exponent).parse(input)?;
    Ok((
        input,
        match exp {
            Some(k) => Term::Power(Box::new(b), k),
            None => b,
        },
    ))
}

fn product(input: &str, atom: Atom) -> IResult<&str, Term> {
    let (input, first) = power(input, atom)?;
    let (input, mut rest) = many0(preceded(
        delimited(multispace0, char('*'), multispace0),
        |i| power(i, atom),
    ))
    .parse(input)?;
    if rest.is_empty() {
        return Ok((input, first));
    }
    rest.insert(0, first);
    Ok((input, Term::Product(rest)))
}

fn sum(input: &str, atom: Atom) -> IResult<&str, Term> {
    let (input, sign) = opt(terminated(one_of("+-"), multispace0)).parse(input)?;
    let (input, first) = product(input, atom)?;
    let first = match sign {
        Some('-') => Term::Neg(Box::new(first)),
        _ => first,
    };
    let (input, rest) = many0(pair(
        delimited(multispace0, one_of("+-"), multispace0),
        |i| product(i, atom),
    ))
    .parse(input)?;
    if rest.is_empty() {
        return Ok((input, first));
    }
    let mut terms = vec![first];
    for (op, term) in rest {
        terms.push(if op == '-' {
            Term::Neg(Box::new(term))
        } else {
            term
        });
    }
    Ok((input, Term::Sum(terms)))
}

fn parse_with(input: &str, atom: Atom) -> LieResult<Term> {
    let mut parser = all_consuming(delimited(multispace0, |i| sum(i, atom), multispace0));
    match parser.parse(input) {
        Ok((_, term)) => Ok(term),
        Err(e) => {
            let message = match e {
                nom::Err::Error(Error { input: at, code })
                | nom::Err::Failure(Error { input: at, code }) => {
                    if code == ErrorKind::Eof {
                        format!("unexpected '{}'", at)
                    } else {
                        format!("syntax error at '{}'", at)
                    }
                }
                nom::Err::Incomplete(_) => "incomplete input".to_string(),
            };
            Err(LieError::Parse {
                input: input.to_string(),
                message,
            })
        }
    }
}

enum Value {
    Scalar(Expr),
    Form(TwoForm),
}

struct Evaluator<'a> {
    component: &'a str,
    dimension: usize,
    parameters: &'a BTreeSet<String>,
}

impl Evaluator<'_> {
    fn not_a_form(&self) -> LieError {
        LieError::NotATwoForm(self.component.trim().to_string())
    }

    fn index(&self, index: usize) -> LieResult<usize> {
        if index == 0 || index > self.dimension {
            return Err(LieError::IndexOutOfRange {
                index,
                dimension: self.dimension,
            });
        }
        Ok(index)
    }

    fn evaluate(&self, term: &Term) -> LieResult<Value> {
        match term {
            Term::Pair(i, j) => {
                let (i, j) = (self.index(*i)?, self.index(*j)?);
                let mut form = TwoForm::new();
                if i < j {
                    form.insert((i, j), Expr::from_int(1));
                } else if i > j {
                    form.insert((j, i), Expr::from_int(-1));
                }
                Ok(Value::Form(form))
            }
            Term::Number(p, q) => {
                if q.is_zero() {
                    return Err(LieError::ZeroDenominator(self.component.trim().to_string()));
                }
                Ok(Value::Scalar(Expr::Const(BigRational::new(
                    p.clone(),
                    q.clone(),
                ))))
            }
            Term::Symbol(name) => {
                if !self.parameters.contains(name) {
                    return Err(LieError::UnknownParameter(name.clone()));
                }
                Ok(Value::Scalar(Expr::Var(name)))
            }
            Term::Power(b, k) => match self.evaluate(b)? {
                Value::Scalar(s) => Ok(Value::Scalar(s.pow(*k))),
                Value::Form(_) => Err(self.not_a_form()),
            },
            Term::Neg(t) => Ok(match self.evaluate(t)? {
                Value::Scalar(s) => Value::Scalar(-s),
                Value::Form(f) => Value::Form(scale(&f, &Expr::from_int(-1))),
            }),
            Term::Sum(terms) => {
                let mut acc = Value::Scalar(Expr::zero());
                for t in terms {
                    acc = self.add(acc, self.evaluate(t)?)?;
                }
                Ok(acc)
            }
            Term::Product(factors) => {
                let mut acc = Value::Scalar(Expr::from_int(1));
                for t in factors {
                    acc = match (acc, self.evaluate(t)?) {
                        (Value::Scalar(a), Value::Scalar(b)) => Value::Scalar(a * b),
                        (Value::Scalar(a), Value::Form(f)) | (Value::Form(f), Value::Scalar(a)) => {
                            Value::Form(scale(&f, &a))
                        }
                        (Value::Form(_), Value::Form(_)) => return Err(self.not_a_form()),
                    };
                }
                Ok(acc)
            }
        }
    }

    fn add(&self, a: Value, b: Value) -> LieResult<Value> {
        Ok(match (a, b) {
            (Value::Scalar(a), Value::Scalar(b)) => Value::Scalar(a + b),
            (Value::Form(mut f), Value::Form(g)) => {
                for (pair, c) in g {
                    let sum = match f.remove(&pair) {
                        Some(old) => old + c,
                        None => c,
                    };
                    if !sum.is_zero() {
                        f.insert(pair, sum);
                    }
                }
                Value::Form(f)
            }
            (Value::Scalar(s), Value::Form(f)) | (Value::Form(f), Value::Scalar(s)) => {
                if !s.is_zero() {
                    return Err(self.not_a_form());
                }
                Value::Form(f)
            }
        })
    }
}

fn scale(form: &TwoForm, factor: &Expr) -> TwoForm {
    form.iter()
        .map(|(pair, c)| (*pair, factor * c))
        .filter(|(_, c)| !c.is_zero())
        .collect()
}

/// Parses one component of the structure constants as a two-form on a Lie algebra of the given
/// dimension.
pub fn parse_two_form(
    component: &str,
    dimension: usize,
    parameters: &BTreeSet<String>,
) -> LieResult<TwoForm> {
    let term = parse_with(component, number_or_pair)?;
    let evaluator = Evaluator {
        component,
        dimension,
        parameters,
    };
    match evaluator.evaluate(&term)? {
        Value::Form(form) => Ok(form),
        Value::Scalar(s) if s.is_zero() => Ok(TwoForm::new()),
        Value::Scalar(_) => Err(evaluator.not_a_form()),
    }
}

/// Parses a comma-separated list of components; the number of components is the dimension.
pub fn parse_structure_constants(
    input: &str,
    parameters: &BTreeSet<String>,
) -> LieResult<Vec<TwoForm>> {
    let components: Vec<&str> = input.split(',').collect();
    let dimension = components.len();
    components
        .iter()
        .map(|c| parse_two_form(c, dimension, parameters))
        .collect()
}

/// Parses a polynomial in the given parameters, e.g. `lambda^2 - 1/2*lambda + 1`.
pub fn parse_parameter_polynomial(input: &str, parameters: &BTreeSet<String>) -> LieResult<Expr> {
    let term = parse_with(input, parameter_atom)?;
    let evaluator = Evaluator {
        component: input,
        dimension: 0,
        parameters,
    };
    match evaluator.evaluate(&term)? {
        Value::Scalar(s) => Ok(s),
        Value::Form(_) => Err(evaluator.not_a_form()),
    }
}

fn render_term(pair: &(usize, usize), coefficient: &Expr) -> String {
    let label = format!("{}{}", pair.0, pair.1);
    match coefficient.constant_value() {
        Some(c) if c.is_one() => label,
        Some(c) if (-c.clone()).is_one() => format!("-{}", label),
        Some(c) => format!("{}*{}", c, label),
        None if coefficient.is_polynomial() => {
            let poly = coefficient.numerator();
            // a single negative term keeps its sign outside the brackets
            match poly.leading_term() {
                Some((_, lc)) if poly.len() == 1 && lc.is_negative() => {
                    format!("-[{}]*{}", -poly, label)
                }
                _ => format!("[{}]*{}", poly, label),
            }
        }
        None => format!("[{}]*{}", coefficient, label),
    }
}

/// Renders a two-form in the input syntax, e.g. `14+[lambda]*23-25`, or `0` if empty.
pub fn render_two_form(form: &TwoForm) -> String {
    if form.is_empty() {
        return "0".to_string();
    }
    let mut out = String::new();
    for (k, (pair, coefficient)) in form.iter().enumerate() {
        let term = render_term(pair, coefficient);
        if k > 0 && !term.starts_with('-') {
            out.push('+');
        }
        out.push_str(&term);
    }
    out
}

/// LaTeX rendering of a two-form: `e^{12}+\lambda e^{23}`
pub fn two_form_to_latex(form: &TwoForm) -> String {
    if form.is_empty() {
        return "0".to_string();
    }
    form.iter()
        .map(|((i, j), c)| {
            let label = format!("e^{{{}{}}}", i, j);
            if c.is_one() {
                label
            } else if (-c).is_one() {
                format!("-{}", label)
            } else if c.numerator().len() > 1 {
                format!("({}) {}", c.to_latex(), label)
            } else {
                format!("{} {}", c.to_latex(), label)
            }
        })
        .join("+")
        .replace("+-", "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_digits_are_pairs_or_numbers() {
        assert_eq!(number_or_pair("12+3").unwrap(), ("+3", Term::Pair(1, 2)));
        assert_eq!(
            number_or_pair("2*26").unwrap(),
            ("*26", Term::Number(2.into(), 1.into()))
        );
        assert_eq!(
            number_or_pair("1/2*(26+34)").unwrap(),
            ("*(26+34)", Term::Number(1.into(), 2.into()))
        );
        assert_eq!(number_or_pair("0").unwrap(), ("", Term::Number(0.into(), 1.into())));
    }

    #[test]
    fn test_parse_simple_forms() {
        let none = params(&[]);
        let form = parse_two_form("13+42", 4, &none).unwrap();
        assert_eq!(form.len(), 2);
        assert_eq!(form[&(1, 3)], Expr::from_int(1));
        assert_eq!(form[&(2, 4)], Expr::from_int(-1));
        assert!(parse_two_form("0", 4, &none).unwrap().is_empty());
        assert!(parse_two_form("11", 4, &none).unwrap().is_empty());
        let form = parse_two_form("-13", 4, &none).unwrap();
        assert_eq!(form[&(1, 3)], Expr::from_int(-1));
    }

    #[test]
    fn test_parse_rational_group() {
        let form = parse_two_form("15+23+1/2*(26+34)", 7, &params(&[])).unwrap();
        assert_eq!(form[&(2, 6)], Expr::rational(1, 2));
        assert_eq!(form[&(3, 4)], Expr::rational(1, 2));
        assert_eq!(form[&(1, 5)], Expr::from_int(1));
    }

    #[test]
    fn test_parse_parametric_forms() {
        let lambda = params(&["lambda"]);
        let form = parse_two_form("[1-lambda]*34 +15+[lambda]*26", 7, &lambda).unwrap();
        assert_eq!(form[&(3, 4)], Expr::from_int(1) - Expr::Var("lambda"));
        assert_eq!(form[&(2, 6)], Expr::Var("lambda"));
        let form = parse_two_form("[-lambda]*16+[lambda]*25+2*26-2*34", 7, &lambda).unwrap();
        assert_eq!(form[&(1, 6)], -Expr::Var("lambda"));
        assert_eq!(form[&(3, 4)], Expr::from_int(-2));
    }

    #[test]
    fn test_parse_errors() {
        let none = params(&[]);
        assert!(matches!(
            parse_two_form("18", 7, &none),
            Err(LieError::IndexOutOfRange { index: 8, dimension: 7 })
        ));
        assert!(matches!(
            parse_two_form("[mu]*12", 7, &none),
            Err(LieError::UnknownParameter(name)) if name == "mu"
        ));
        assert!(matches!(
            parse_two_form("(12+13)*14", 7, &none),
            Err(LieError::NotATwoForm(_))
        ));
        assert!(matches!(parse_two_form("3", 7, &none), Err(LieError::NotATwoForm(_))));
        assert!(matches!(parse_two_form("1/0*12", 7, &none), Err(LieError::ZeroDenominator(_))));
        assert!(matches!(parse_two_form("12+", 7, &none), Err(LieError::Parse { .. })));
        assert!(matches!(parse_two_form("", 7, &none), Err(LieError::Parse { .. })));
    }

    #[test]
    fn test_render_round_trip() {
        let lambda = params(&["lambda"]);
        for input in [
            "0",
            "12",
            "-13+24",
            "1/2*26+1/2*34",
            "[lambda]*25-[lambda - 1]*34+16",
            "-2*16+[lambda^2 + 1]*25",
        ] {
            let form = parse_two_form(input, 7, &lambda).unwrap();
            let rendered = render_two_form(&form);
            assert_eq!(parse_two_form(&rendered, 7, &lambda).unwrap(), form, "{}", rendered);
        }
        let form = parse_two_form("16-[lambda]*25", 7, &lambda).unwrap();
        assert_eq!(render_two_form(&form), "16-[lambda]*25");
    }

    #[test]
    fn test_parameter_polynomial() {
        let lambda = params(&["lambda"]);
        let p = parse_parameter_polynomial("(lambda - 1)^2", &lambda).unwrap();
        let l = Expr::Var("lambda");
        assert_eq!(p, &(&l * &l) - &(Expr::from_int(2) * l.clone()) + Expr::from_int(1));
    }

    #[test]
    fn test_two_form_latex() {
        let lambda = params(&["lambda"]);
        let form = parse_two_form("12-[lambda]*34", 4, &lambda).unwrap();
        assert_eq!(two_form_to_latex(&form), "e^{12}-\\lambda e^{34}");
    }
}
