use super::value_objects::{
    ConstraintType, OptimizationType, SolutionStatus, SolverBackend, VariableType,
};

/// Decision variable in an optimization problem
#[derive(Debug, Clone)]
pub struct Variable {
    pub variable_type: VariableType,
    pub lower_bound: f64,
    pub upper_bound: Option<f64>,
    pub name: String,
}

impl Variable {
    /// Nonnegative continuous variable, unbounded above.
    pub fn continuous(name: impl Into<String>) -> Self {
        Self {
            variable_type: VariableType::Continuous,
            lower_bound: 0.0,
            upper_bound: None,
            name: name.into(),
        }
    }

    /// Binary 0/1 variable.
    pub fn binary(name: impl Into<String>) -> Self {
        Self {
            variable_type: VariableType::Binary,
            lower_bound: 0.0,
            upper_bound: Some(1.0),
            name: name.into(),
        }
    }

    pub fn with_bounds(mut self, lower: f64, upper: Option<f64>) -> Self {
        self.lower_bound = lower;
        self.upper_bound = upper;
        self
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self.variable_type,
            VariableType::Integer | VariableType::Binary
        )
    }
}

/// Linear objective over the problem's variables, in variable order.
#[derive(Debug, Clone)]
pub struct ObjectiveFunction {
    pub optimization_type: OptimizationType,
    pub coefficients: Vec<f64>,
}

impl ObjectiveFunction {
    pub fn minimize(coefficients: Vec<f64>) -> Self {
        Self {
            optimization_type: OptimizationType::Minimize,
            coefficients,
        }
    }

    pub fn maximize(coefficients: Vec<f64>) -> Self {
        Self {
            optimization_type: OptimizationType::Maximize,
            coefficients,
        }
    }
}

/// Linear constraint: `coefficients · x  (≤ | = | ≥)  bound`.
/// Coefficient rows are dense, in variable order.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub constraint_type: ConstraintType,
    pub coefficients: Vec<f64>,
    pub bound: f64,
    pub name: String,
}

impl Constraint {
    pub fn at_most(coefficients: Vec<f64>, bound: f64) -> Self {
        Self::new(ConstraintType::LessThanOrEqual, coefficients, bound)
    }

    pub fn exactly(coefficients: Vec<f64>, bound: f64) -> Self {
        Self::new(ConstraintType::Equal, coefficients, bound)
    }

    pub fn at_least(coefficients: Vec<f64>, bound: f64) -> Self {
        Self::new(ConstraintType::GreaterThanOrEqual, coefficients, bound)
    }

    fn new(constraint_type: ConstraintType, coefficients: Vec<f64>, bound: f64) -> Self {
        Self {
            constraint_type,
            coefficients,
            bound,
            name: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }
}

/// Configuration for the solver backend. Time limit and verbosity are
/// backend concerns; the model itself never sees them.
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    pub backend: SolverBackend,
    pub time_limit: Option<f64>,
    pub verbose: bool,
}

/// Complete optimization problem
#[derive(Debug, Clone)]
pub struct OptimizationProblem {
    pub name: String,
    pub objective: ObjectiveFunction,
    pub constraints: Vec<Constraint>,
    pub variables: Vec<Variable>,
    pub solver_config: SolverConfig,
}

impl OptimizationProblem {
    pub fn new(objective: ObjectiveFunction) -> Self {
        Self {
            name: String::new(),
            objective,
            constraints: Vec::new(),
            variables: Vec::new(),
            solver_config: SolverConfig::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn add_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_variables(mut self, variables: Vec<Variable>) -> Self {
        self.variables = variables;
        self
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.solver_config = config;
        self
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_integer_variables(&self) -> usize {
        self.variables.iter().filter(|v| v.is_integer()).count()
    }

    pub fn is_mixed_integer(&self) -> bool {
        self.num_integer_variables() > 0
    }
}

/// Statistics about the solve process
#[derive(Debug, Clone, Default)]
pub struct SolverStatistics {
    pub solve_time_ms: f64,
    pub num_variables: u32,
    pub num_constraints: u32,
    pub num_integer_vars: u32,
}

/// Solution to an optimization problem. `variable_values` is populated only
/// when the status is `Optimal`, in the problem's variable order.
#[derive(Debug, Clone)]
pub struct Solution {
    pub status: SolutionStatus,
    pub objective_value: Option<f64>,
    pub variable_values: Vec<f64>,
    pub message: String,
    pub statistics: SolverStatistics,
}

impl Solution {
    pub fn optimal(objective_value: f64, variable_values: Vec<f64>) -> Self {
        Self {
            status: SolutionStatus::Optimal,
            objective_value: Some(objective_value),
            variable_values,
            message: "Optimal solution found".to_string(),
            statistics: SolverStatistics::default(),
        }
    }

    /// A terminal status with no usable assignment (infeasible, unbounded, ...).
    pub fn terminal(status: SolutionStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            objective_value: None,
            variable_values: Vec::new(),
            message: message.into(),
            statistics: SolverStatistics::default(),
        }
    }

    pub fn with_statistics(mut self, statistics: SolverStatistics) -> Self {
        self.statistics = statistics;
        self
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_variables_make_a_problem_mixed_integer() {
        let problem = OptimizationProblem::new(ObjectiveFunction::minimize(vec![1.0]))
            .with_variables(vec![Variable::continuous("delta")]);
        assert!(!problem.is_mixed_integer());

        let problem = OptimizationProblem::new(ObjectiveFunction::minimize(vec![0.0, 1.0]))
            .with_variables(vec![Variable::binary("x"), Variable::continuous("delta")]);
        assert!(problem.is_mixed_integer());
        assert_eq!(problem.num_integer_variables(), 1);
    }

    #[test]
    fn constraint_constructors_carry_comparison_type() {
        assert_eq!(
            Constraint::at_most(vec![1.0], 2.0).constraint_type,
            ConstraintType::LessThanOrEqual
        );
        assert_eq!(
            Constraint::exactly(vec![1.0], 1.0).constraint_type,
            ConstraintType::Equal
        );
        assert_eq!(
            Constraint::at_least(vec![1.0], 1.0).constraint_type,
            ConstraintType::GreaterThanOrEqual
        );
    }
}
