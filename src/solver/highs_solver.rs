// HiGHS solver adapter: translates the domain problem to the HiGHS
// row-problem API and maps its model status back onto the domain taxonomy.

use crate::domain::{
    models::{OptimizationProblem, Solution as DomainSolution, SolverStatistics},
    solver_service::{Result, SolverError, SolverService},
    value_objects::{ConstraintType, OptimizationType, SolutionStatus, VariableType},
};
use std::time::Instant;

pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for HighsSolver {
    fn solve(&self, problem: &OptimizationProblem) -> Result<DomainSolution> {
        self.validate(problem)?;

        let start_time = Instant::now();
        let num_vars = problem.num_variables();

        use highs::{HighsModelStatus, RowProblem, Sense};

        let mut pb = RowProblem::default();
        let mut vars = Vec::new();

        // Variables first (objective coefficient attached per column)
        for var_def in &problem.variables {
            let lower = var_def.lower_bound;
            let upper = var_def.upper_bound.unwrap_or(f64::INFINITY);
            let obj_coeff = problem
                .objective
                .coefficients
                .get(vars.len())
                .copied()
                .unwrap_or(0.0);

            let col = match var_def.variable_type {
                VariableType::Integer | VariableType::Binary => {
                    pb.add_integer_column(obj_coeff, lower..upper)
                }
                VariableType::Continuous => pb.add_column(obj_coeff, lower..upper),
            };
            vars.push(col);
        }

        for constraint in &problem.constraints {
            let mut terms = Vec::new();
            for (i, &coeff) in constraint.coefficients.iter().enumerate() {
                if coeff != 0.0 && i < vars.len() {
                    terms.push((vars[i], coeff));
                }
            }

            match constraint.constraint_type {
                ConstraintType::LessThanOrEqual => {
                    pb.add_row(..=constraint.bound, &terms);
                }
                ConstraintType::Equal => {
                    pb.add_row(constraint.bound..=constraint.bound, &terms);
                }
                ConstraintType::GreaterThanOrEqual => {
                    pb.add_row(constraint.bound.., &terms);
                }
            }
        }

        let sense = if problem.objective.optimization_type == OptimizationType::Maximize {
            Sense::Maximise
        } else {
            Sense::Minimise
        };

        let mut model = pb.optimise(sense);
        model.set_option("output_flag", problem.solver_config.verbose);
        if let Some(limit) = problem.solver_config.time_limit {
            model.set_option("time_limit", limit);
        }

        let solved = model.solve();
        let solve_time = start_time.elapsed().as_secs_f64() * 1000.0;

        let statistics = SolverStatistics {
            solve_time_ms: solve_time,
            num_variables: num_vars as u32,
            num_constraints: problem.constraints.len() as u32,
            num_integer_vars: problem.num_integer_variables() as u32,
        };

        match solved.status() {
            HighsModelStatus::Optimal => {
                let solution_data = solved.get_solution();
                let variable_values = solution_data.columns().to_vec();

                let mut objective_value = 0.0;
                for (i, &val) in variable_values.iter().enumerate() {
                    if let Some(&coeff) = problem.objective.coefficients.get(i) {
                        objective_value += coeff * val;
                    }
                }

                let mut solution = DomainSolution::optimal(objective_value, variable_values);
                solution.message = format!("Optimal solution found for '{}'", problem.name);
                Ok(solution.with_statistics(statistics))
            }
            HighsModelStatus::Infeasible => Ok(DomainSolution::terminal(
                SolutionStatus::Infeasible,
                "Problem is infeasible: no solution satisfies all constraints",
            )
            .with_statistics(statistics)),
            HighsModelStatus::Unbounded | HighsModelStatus::UnboundedOrInfeasible => {
                Ok(DomainSolution::terminal(
                    SolutionStatus::Unbounded,
                    "Problem is unbounded: objective can be improved infinitely",
                )
                .with_statistics(statistics))
            }
            HighsModelStatus::ReachedTimeLimit => Ok(DomainSolution::terminal(
                SolutionStatus::TimeLimit,
                "Time limit reached before an optimality proof",
            )
            .with_statistics(statistics)),
            status => Err(SolverError::ExecutionFailed(format!(
                "HiGHS solver returned status: {:?}",
                status
            ))),
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }

    fn supports_mip(&self) -> bool {
        true
    }
}
