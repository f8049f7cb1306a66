//! Linear systems whose coefficients depend on parameters.
//!
//! The unknowns are eliminated only through equations where they appear with a non-zero
//! *constant* coefficient, so that no expression in the parameters is ever used as a divisor.
//! After elimination two solution sets are available:
//! - [`LinearEquationsWithParameters::solution`]: the remaining equations are ignored; this
//!   contains the solutions for every value of the parameters;
//! - [`LinearEquationsWithParameters::always_solution`]: the remaining equations are also
//!   imposed, coefficient by coefficient in the parameter monomials; these are solutions for all
//!   values of the parameters at once.
//!
//! Both are computed from the same elimination, so the second is contained in the first.
use crate::somelinalg::linear_system::{GenericSolution, LinearSystem, LinearSystemError};
use crate::symbolic::symbolic_engine::Expr;
use log::{debug, info};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone)]
pub struct LinearEquationsWithParameters {
    unknowns: Vec<String>,
    parameters: BTreeSet<String>,
    equations: Vec<Expr>,
    /// unknown = value, values expressed through the unknowns not yet eliminated
    eliminated: Vec<(String, Expr)>,
}

impl LinearEquationsWithParameters {
    /// Every variable occurring in the equations which is not an unknown is a parameter.
    pub fn new(equations: &[Expr], unknowns: &[String]) -> Self {
        let mut parameters: BTreeSet<String> = equations
            .iter()
            .flat_map(|eq| eq.variables())
            .collect();
        for u in unknowns {
            parameters.remove(u);
        }
        Self {
            unknowns: unknowns.to_vec(),
            parameters,
            equations: equations.iter().filter(|eq| !eq.is_zero()).cloned().collect(),
            eliminated: Vec::new(),
        }
    }

    pub fn parameters(&self) -> &BTreeSet<String> {
        &self.parameters
    }

    /// equations left after elimination: every coefficient depends on the parameters
    pub fn residual_equations(&self) -> &[Expr] {
        &self.equations
    }

    /// unknowns not eliminated so far
    pub fn free_unknowns(&self) -> Vec<String> {
        let eliminated: BTreeSet<&String> = self.eliminated.iter().map(|(u, _)| u).collect();
        self.unknowns
            .iter()
            .filter(|u| !eliminated.contains(u))
            .cloned()
            .collect()
    }

    /// Repeatedly solves one equation for an unknown with a non-zero constant coefficient and
    /// substitutes the result everywhere.
    pub fn eliminate_linear_equations(&mut self) -> Result<(), LinearSystemError> {
        loop {
            let free = self.free_unknowns();
            let mut step: Option<(usize, String, Expr)> = None;
            'search: for (k, eq) in self.equations.iter().enumerate() {
                let (coefficients, constant) = eq
                    .coefficients_in(&free)
                    .ok_or_else(|| LinearSystemError::NonLinear(eq.to_string()))?;
                if coefficients.iter().all(|c| c.is_zero()) {
                    if !constant.is_zero() && !constant.depends_on_any(&self.parameters) {
                        return Err(LinearSystemError::Inconsistent(constant.to_string()));
                    }
                    continue;
                }
                for (i, c) in coefficients.iter().enumerate() {
                    if c.is_zero() || !c.is_constant() {
                        continue;
                    }
                    // u = -(eq - c*u)/c
                    let u = &free[i];
                    let rest = eq - &(c * &Expr::Var(u));
                    let value = &(-rest) / c;
                    step = Some((k, u.clone(), value));
                    break 'search;
                }
            }
            let Some((k, unknown, value)) = step else {
                break;
            };
            debug!("eliminating {} = {}", unknown, value);
            self.equations.remove(k);
            self.equations = self
                .equations
                .iter()
                .map(|eq| eq.substitute_variable(&unknown, &value))
                .filter(|eq| !eq.is_zero())
                .collect();
            for (_, v) in self.eliminated.iter_mut() {
                *v = v.substitute_variable(&unknown, &value);
            }
            self.eliminated.push((unknown, value));
        }
        info!(
            "eliminated {} of {} unknowns, {} equations depend on the parameters {:?}",
            self.eliminated.len(),
            self.unknowns.len(),
            self.equations.len(),
            self.parameters
        );
        Ok(())
    }

    /// Generic solution of the eliminated equations, ignoring the residual ones.
    pub fn solution(&self) -> GenericSolution {
        let values: HashMap<&String, &Expr> =
            self.eliminated.iter().map(|(u, v)| (u, v)).collect();
        GenericSolution {
            unknowns: self.unknowns.clone(),
            values: self
                .unknowns
                .iter()
                .map(|u| match values.get(u) {
                    Some(v) => (*v).clone(),
                    None => Expr::Var(u),
                })
                .collect(),
            free: self.free_unknowns(),
        }
    }

    /// Generic solution of the system for all values of the parameters: the residual equations
    /// are split by parameter monomials and every coefficient must vanish.
    pub fn always_solution(&self) -> Result<GenericSolution, LinearSystemError> {
        let free = self.free_unknowns();
        let mut split_equations = Vec::new();
        for eq in &self.equations {
            for coefficient in eq.numerator().expand_in(&self.parameters).into_values() {
                split_equations.push(Expr::from_poly(coefficient));
            }
        }
        let reduced = LinearSystem::new(&split_equations, &free)?.solve()?;
        let reduced_values = reduced.as_map();
        let outer = self.solution();
        Ok(GenericSolution {
            unknowns: outer.unknowns,
            values: outer
                .values
                .iter()
                .map(|v| v.substitute_map(&reduced_values))
                .collect(),
            free: reduced.free,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &str) -> Vec<String> {
        list.split(',').map(|s| s.trim().to_string()).collect()
    }

    #[test]
    fn test_without_parameters_matches_exact_solver() {
        let (x, y, z) = (Expr::Var("x"), Expr::Var("y"), Expr::Var("z"));
        let eqs = vec![&x + &y, &y - &(Expr::from_int(3) * z.clone())];
        let mut system = LinearEquationsWithParameters::new(&eqs, &names("x,y,z"));
        system.eliminate_linear_equations().unwrap();
        assert!(system.residual_equations().is_empty());
        let outer = system.solution();
        let inner = system.always_solution().unwrap();
        assert_eq!(outer.free, inner.free);
        assert_eq!(outer.values, inner.values);
        assert_eq!(outer.free.len(), 1);
    }

    #[test]
    fn test_bounds_for_parametric_equation() {
        // lambda*x + y = 0 ; x - z = 0 (in the unknowns x, y, z)
        let (x, y, z, lambda) = (
            Expr::Var("x"),
            Expr::Var("y"),
            Expr::Var("z"),
            Expr::Var("lambda"),
        );
        let eqs = vec![&(&lambda * &x) + &y, &x - &z];
        let mut system = LinearEquationsWithParameters::new(&eqs, &names("x,y,z"));
        assert!(system.parameters().contains("lambda"));
        system.eliminate_linear_equations().unwrap();
        assert!(system.residual_equations().is_empty());
        let outer = system.solution();
        assert_eq!(outer.free.len(), 1);
    }

    #[test]
    fn test_residual_equation_is_split() {
        // lambda*x + lambda^2*y = 0 cannot be used for elimination
        let (x, y, lambda) = (Expr::Var("x"), Expr::Var("y"), Expr::Var("lambda"));
        let eqs = vec![&(&lambda * &x) + &(&lambda.pow(2) * &y)];
        let mut system = LinearEquationsWithParameters::new(&eqs, &names("x,y"));
        system.eliminate_linear_equations().unwrap();
        assert_eq!(system.residual_equations().len(), 1);
        let outer = system.solution();
        assert_eq!(outer.free, names("x,y"));
        let inner = system.always_solution().unwrap();
        assert!(inner.free.is_empty());
        assert!(inner.values.iter().all(Expr::is_zero));
        let basis = inner.homogeneous_basis().unwrap();
        assert!(basis.is_empty());
        assert!(outer.particular().iter().all(|v| v.is_zero()));
    }
}
