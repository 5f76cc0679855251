use crate::domain::{
    models::{OptimizationProblem, Solution as DomainSolution, SolverStatistics},
    solver_service::{Result, SolverError, SolverService},
    value_objects::{ConstraintType, OptimizationType, SolutionStatus, VariableType},
};
use good_lp::{
    solvers::coin_cbc, variable, variables, Expression, ResolutionError,
    Solution as GoodLpSolutionTrait, SolverModel, Variable as GoodLpVariable,
};
use std::time::Instant;

pub struct CoinCbcSolver;

impl CoinCbcSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CoinCbcSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for CoinCbcSolver {
    fn solve(&self, problem: &OptimizationProblem) -> Result<DomainSolution> {
        self.validate(problem)?;

        let start_time = Instant::now();
        let num_vars = problem.num_variables();

        let mut vars = variables!();
        let mut lp_variables: Vec<GoodLpVariable> = Vec::new();

        for var_def in problem.variables.iter() {
            let lower = var_def.lower_bound;
            let upper = var_def.upper_bound.unwrap_or(f64::INFINITY);

            let var = match var_def.variable_type {
                VariableType::Binary | VariableType::Integer => {
                    vars.add(variable().integer().min(lower).max(upper))
                }
                VariableType::Continuous => vars.add(variable().min(lower).max(upper)),
            };
            lp_variables.push(var);
        }

        // good_lp minimizes; negate coefficients for maximization
        let is_maximize = problem.objective.optimization_type == OptimizationType::Maximize;
        let mut obj_expr: Expression = 0.into();

        for (i, &coeff) in problem.objective.coefficients.iter().enumerate() {
            if coeff != 0.0 {
                let c = if is_maximize { -coeff } else { coeff };
                obj_expr += c * lp_variables[i];
            }
        }

        let mut lp_model = vars.minimise(obj_expr).using(coin_cbc::coin_cbc);

        for constraint in &problem.constraints {
            let mut lhs: Expression = 0.into();
            for (i, &coeff) in constraint.coefficients.iter().enumerate() {
                if coeff != 0.0 {
                    lhs += coeff * lp_variables[i];
                }
            }

            match constraint.constraint_type {
                ConstraintType::LessThanOrEqual => {
                    lp_model = lp_model.with(lhs.leq(constraint.bound));
                }
                ConstraintType::Equal => {
                    lp_model = lp_model.with(lhs.eq(constraint.bound));
                }
                ConstraintType::GreaterThanOrEqual => {
                    lp_model = lp_model.with(lhs.geq(constraint.bound));
                }
            }
        }

        if let Some(limit) = problem.solver_config.time_limit {
            lp_model.set_parameter("sec", &limit.to_string());
        }
        if !problem.solver_config.verbose {
            lp_model.set_parameter("log", "0");
        }

        let solution_result = lp_model.solve();
        let solve_time = start_time.elapsed().as_secs_f64() * 1000.0;

        let statistics = SolverStatistics {
            solve_time_ms: solve_time,
            num_variables: num_vars as u32,
            num_constraints: problem.constraints.len() as u32,
            num_integer_vars: problem.num_integer_variables() as u32,
        };

        match solution_result {
            Ok(sol) => {
                let mut variable_values = vec![0.0; num_vars];
                for (i, &var) in lp_variables.iter().enumerate() {
                    variable_values[i] = sol.value(var);
                }

                // objective value recomputed in the original orientation
                let mut objective_value = 0.0;
                for (i, &coeff) in problem.objective.coefficients.iter().enumerate() {
                    objective_value += coeff * variable_values[i];
                }

                let mut solution = DomainSolution::optimal(objective_value, variable_values);
                solution.message = format!("Optimal solution found for '{}'", problem.name);
                Ok(solution.with_statistics(statistics))
            }
            Err(ResolutionError::Infeasible) => Ok(DomainSolution::terminal(
                SolutionStatus::Infeasible,
                "Problem is infeasible: no solution satisfies all constraints",
            )
            .with_statistics(statistics)),
            Err(ResolutionError::Unbounded) => Ok(DomainSolution::terminal(
                SolutionStatus::Unbounded,
                "Problem is unbounded: objective can be improved infinitely",
            )
            .with_statistics(statistics)),
            Err(e) => Err(SolverError::ExecutionFailed(format!("{:?}", e))),
        }
    }

    fn name(&self) -> &str {
        "COIN-OR CBC"
    }

    fn supports_mip(&self) -> bool {
        true
    }
}
