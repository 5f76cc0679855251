// Domain service interface for solving optimization problems.
// Any MIP backend that can answer "optimal, infeasible, or other" for a
// linear model with integer variables can stand behind this trait.

use super::models::{OptimizationProblem, Solution};

/// Error types for the solver service
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    #[error("Solver execution failed: {0}")]
    ExecutionFailed(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Contract consumed by the model-building side: one blocking solve, a
/// terminal status, and (when optimal) a value for every variable.
///
/// `Optimal` must mean the assignment satisfies every constraint within
/// solver tolerance and the objective value is the global minimum (or
/// maximum) over all feasible assignments.
pub trait SolverService: Send + Sync {
    /// Solve an optimization problem
    fn solve(&self, problem: &OptimizationProblem) -> Result<Solution>;

    /// Structural validation of a problem before handing it to the backend.
    fn validate(&self, problem: &OptimizationProblem) -> Result<()> {
        let mut errors = Vec::new();

        if problem.variables.is_empty() {
            errors.push("Problem must declare at least one variable".to_string());
        }

        let num_vars = problem.num_variables();

        if problem.objective.coefficients.len() != num_vars {
            errors.push(format!(
                "Objective has {} coefficients but problem has {} variables",
                problem.objective.coefficients.len(),
                num_vars
            ));
        }

        for (i, constraint) in problem.constraints.iter().enumerate() {
            if constraint.num_variables() != num_vars {
                errors.push(format!(
                    "Constraint {} '{}' has {} coefficients but problem has {} variables",
                    i,
                    constraint.name,
                    constraint.num_variables(),
                    num_vars
                ));
            }
        }

        for (i, var) in problem.variables.iter().enumerate() {
            if let Some(upper) = var.upper_bound {
                if var.lower_bound > upper {
                    errors.push(format!(
                        "Variable {} '{}' has lower bound ({}) > upper bound ({})",
                        i, var.name, var.lower_bound, upper
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SolverError::InvalidProblem(errors.join("; ")))
        }
    }

    /// Get the name of this solver backend
    fn name(&self) -> &str;

    /// Check if this solver supports mixed-integer programming
    fn supports_mip(&self) -> bool;
}
