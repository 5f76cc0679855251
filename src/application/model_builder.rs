// Translates a roster and a team count into a mixed-integer program.
//
// One binary variable per (developer, team) pair plus a single continuous
// `delta`. The objective is min-max in disguise: instead of a quadratic
// variance term, `delta` bounds every team's absolute deviation from the
// global average productivity and the solver minimizes that bound. The
// model stays linear and the band `average ± delta` tightens as far as the
// composition constraints allow.

use tracing::debug;

use crate::domain::{
    Constraint, Developer, InputError, ObjectiveFunction, OptimizationProblem, Roster,
    SolverConfig, Variable,
};

/// Maximum number of frontend (and, separately, backend) specialists a team
/// may contain.
pub const SPECIALIST_CAP: f64 = 2.0;

/// Minimum number of full-stack, senior, junior, and international members
/// each team must contain.
pub const COVERAGE_FLOOR: f64 = 1.0;

/// Flat index of the assignment variable X[developer, team].
///
/// Assignment variables are laid out row-major (developer-major) with the
/// single `delta` variable last; the interpreter relies on this layout.
pub fn assignment_index(developer: usize, team: usize, team_count: usize) -> usize {
    developer * team_count + team
}

/// Flat index of the `delta` variable.
pub fn deviation_index(developer_count: usize, team_count: usize) -> usize {
    developer_count * team_count
}

/// Builds the assignment MIP for one formation run.
pub struct TeamModelBuilder<'a> {
    roster: &'a Roster,
    team_count: usize,
    config: SolverConfig,
}

impl<'a> TeamModelBuilder<'a> {
    pub fn new(roster: &'a Roster, team_count: usize) -> Self {
        Self {
            roster,
            team_count,
            config: SolverConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Constructs the full model: variables, objective, and the nine
    /// constraint families. Rejects a zero team count before building
    /// anything. An unsatisfiable tag distribution is NOT rejected here;
    /// that surfaces as solver infeasibility, which is a legitimate outcome.
    pub fn build(self) -> Result<OptimizationProblem, InputError> {
        if self.team_count == 0 {
            return Err(InputError::InvalidTeamCount(self.team_count));
        }

        let developers = self.roster.developers();
        let num_assignments = developers.len() * self.team_count;
        let num_vars = num_assignments + 1;
        let average = self.roster.average_productivity();

        let mut variables = Vec::with_capacity(num_vars);
        for i in 0..developers.len() {
            for j in 0..self.team_count {
                variables.push(Variable::binary(format!("x[{i},{j}]")));
            }
        }
        variables.push(Variable::continuous("delta"));

        // Minimize delta; assignment variables carry no objective weight.
        let mut objective_coefficients = vec![0.0; num_vars];
        objective_coefficients[num_assignments] = 1.0;

        let mut problem = OptimizationProblem::new(ObjectiveFunction::minimize(
            objective_coefficients,
        ))
        .with_name("balanced-team-formation")
        .with_variables(variables)
        .with_config(self.config);

        // Each developer lands on exactly one team.
        for i in 0..developers.len() {
            let mut row = vec![0.0; num_vars];
            for j in 0..self.team_count {
                row[assignment_index(i, j, self.team_count)] = 1.0;
            }
            problem = problem
                .add_constraint(Constraint::exactly(row, 1.0).with_name(format!("assign_one[{i}]")));
        }

        for j in 0..self.team_count {
            let frontend = self.team_row(j, num_vars, |d| if d.is_frontend() { 1.0 } else { 0.0 });
            let backend = self.team_row(j, num_vars, |d| if d.is_backend() { 1.0 } else { 0.0 });
            let full_stack =
                self.team_row(j, num_vars, |d| if d.is_full_stack() { 1.0 } else { 0.0 });
            let senior = self.team_row(j, num_vars, |d| if d.is_senior() { 1.0 } else { 0.0 });
            let junior = self.team_row(j, num_vars, |d| if d.is_junior() { 1.0 } else { 0.0 });
            let international =
                self.team_row(j, num_vars, |d| if d.international { 1.0 } else { 0.0 });

            problem = problem
                .add_constraint(
                    Constraint::at_most(frontend, SPECIALIST_CAP)
                        .with_name(format!("frontend_cap[{j}]")),
                )
                .add_constraint(
                    Constraint::at_most(backend, SPECIALIST_CAP)
                        .with_name(format!("backend_cap[{j}]")),
                )
                .add_constraint(
                    Constraint::at_least(full_stack, COVERAGE_FLOOR)
                        .with_name(format!("full_stack_floor[{j}]")),
                )
                .add_constraint(
                    Constraint::at_least(senior, COVERAGE_FLOOR)
                        .with_name(format!("senior_floor[{j}]")),
                )
                .add_constraint(
                    Constraint::at_least(junior, COVERAGE_FLOOR)
                        .with_name(format!("junior_floor[{j}]")),
                )
                .add_constraint(
                    Constraint::at_least(international, COVERAGE_FLOOR)
                        .with_name(format!("international_floor[{j}]")),
                );

            // Σ productivity·X[i,j] − delta ≤ average  and
            // Σ productivity·X[i,j] + delta ≥ average: together they keep
            // every team's load inside the band average ± delta.
            let mut upper = self.team_row(j, num_vars, |d| d.productivity);
            upper[num_assignments] = -1.0;
            let mut lower = self.team_row(j, num_vars, |d| d.productivity);
            lower[num_assignments] = 1.0;
            problem = problem
                .add_constraint(
                    Constraint::at_most(upper, average).with_name(format!("load_upper[{j}]")),
                )
                .add_constraint(
                    Constraint::at_least(lower, average).with_name(format!("load_lower[{j}]")),
                );
        }

        debug!(
            developers = developers.len(),
            teams = self.team_count,
            variables = problem.num_variables(),
            constraints = problem.constraints.len(),
            average,
            "assignment model built"
        );

        Ok(problem)
    }

    /// Dense coefficient row weighting each developer's assignment variable
    /// for one team; all other entries (including delta) are zero.
    fn team_row(
        &self,
        team: usize,
        num_vars: usize,
        weight: impl Fn(&Developer) -> f64,
    ) -> Vec<f64> {
        let mut coefficients = vec![0.0; num_vars];
        for (i, developer) in self.roster.developers().iter().enumerate() {
            coefficients[assignment_index(i, team, self.team_count)] = weight(developer);
        }
        coefficients
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConstraintType, OptimizationType, Role, Seniority, VariableType};

    fn small_roster() -> Roster {
        Roster::new(vec![
            Developer::new(10.0, Role::Frontend, Seniority::Senior).international(),
            Developer::new(20.0, Role::Backend, Seniority::Junior),
            Developer::new(30.0, Role::FullStack, Seniority::Senior).international(),
        ])
        .unwrap()
    }

    #[test]
    fn zero_teams_is_rejected_before_building() {
        let roster = small_roster();
        let err = TeamModelBuilder::new(&roster, 0).build().unwrap_err();
        assert_eq!(err, InputError::InvalidTeamCount(0));
    }

    #[test]
    fn variable_layout_is_assignments_then_delta() {
        let roster = small_roster();
        let problem = TeamModelBuilder::new(&roster, 2).build().unwrap();

        assert_eq!(problem.num_variables(), 3 * 2 + 1);
        assert_eq!(problem.num_integer_variables(), 6);
        assert!(problem.is_mixed_integer());

        let delta = &problem.variables[deviation_index(3, 2)];
        assert_eq!(delta.variable_type, VariableType::Continuous);
        assert_eq!(delta.name, "delta");
        assert_eq!(delta.lower_bound, 0.0);
        assert_eq!(delta.upper_bound, None);

        assert_eq!(problem.variables[assignment_index(2, 1, 2)].name, "x[2,1]");
    }

    #[test]
    fn objective_minimizes_delta_alone() {
        let roster = small_roster();
        let problem = TeamModelBuilder::new(&roster, 2).build().unwrap();

        assert_eq!(
            problem.objective.optimization_type,
            OptimizationType::Minimize
        );
        let coefficients = &problem.objective.coefficients;
        assert_eq!(coefficients[deviation_index(3, 2)], 1.0);
        assert!(coefficients[..deviation_index(3, 2)].iter().all(|&c| c == 0.0));
    }

    #[test]
    fn constraint_count_is_developers_plus_eight_per_team() {
        let roster = small_roster();
        let problem = TeamModelBuilder::new(&roster, 2).build().unwrap();
        // 3 partition rows + per team: 2 caps, 4 floors, 2 balance bounds
        assert_eq!(problem.constraints.len(), 3 + 8 * 2);
    }

    #[test]
    fn partition_rows_sum_each_developer_over_teams() {
        let roster = small_roster();
        let problem = TeamModelBuilder::new(&roster, 2).build().unwrap();

        let row = problem
            .constraints
            .iter()
            .find(|c| c.name == "assign_one[1]")
            .unwrap();
        assert_eq!(row.constraint_type, ConstraintType::Equal);
        assert_eq!(row.bound, 1.0);
        assert_eq!(row.coefficients[assignment_index(1, 0, 2)], 1.0);
        assert_eq!(row.coefficients[assignment_index(1, 1, 2)], 1.0);
        assert_eq!(row.coefficients[assignment_index(0, 0, 2)], 0.0);
        assert_eq!(row.coefficients.iter().sum::<f64>(), 2.0);
    }

    #[test]
    fn frontend_cap_only_weights_frontend_developers() {
        let roster = small_roster();
        let problem = TeamModelBuilder::new(&roster, 2).build().unwrap();

        let cap = problem
            .constraints
            .iter()
            .find(|c| c.name == "frontend_cap[1]")
            .unwrap();
        assert_eq!(cap.constraint_type, ConstraintType::LessThanOrEqual);
        assert_eq!(cap.bound, SPECIALIST_CAP);
        assert_eq!(cap.coefficients[assignment_index(0, 1, 2)], 1.0);
        assert_eq!(cap.coefficients[assignment_index(1, 1, 2)], 0.0);
        assert_eq!(cap.coefficients[assignment_index(2, 1, 2)], 0.0);
        // team 0's column must not leak into team 1's row
        assert_eq!(cap.coefficients[assignment_index(0, 0, 2)], 0.0);
    }

    #[test]
    fn balance_bounds_couple_productivity_with_delta() {
        let roster = small_roster();
        let problem = TeamModelBuilder::new(&roster, 2).build().unwrap();
        let average = roster.average_productivity();
        let delta = deviation_index(3, 2);

        let upper = problem
            .constraints
            .iter()
            .find(|c| c.name == "load_upper[0]")
            .unwrap();
        assert_eq!(upper.constraint_type, ConstraintType::LessThanOrEqual);
        assert_eq!(upper.bound, average);
        assert_eq!(upper.coefficients[assignment_index(0, 0, 2)], 10.0);
        assert_eq!(upper.coefficients[assignment_index(1, 0, 2)], 20.0);
        assert_eq!(upper.coefficients[assignment_index(2, 0, 2)], 30.0);
        assert_eq!(upper.coefficients[delta], -1.0);

        let lower = problem
            .constraints
            .iter()
            .find(|c| c.name == "load_lower[0]")
            .unwrap();
        assert_eq!(lower.constraint_type, ConstraintType::GreaterThanOrEqual);
        assert_eq!(lower.bound, average);
        assert_eq!(lower.coefficients[delta], 1.0);
    }

    #[test]
    fn international_floor_follows_the_free_tag() {
        let roster = small_roster();
        let problem = TeamModelBuilder::new(&roster, 2).build().unwrap();

        let floor = problem
            .constraints
            .iter()
            .find(|c| c.name == "international_floor[0]")
            .unwrap();
        assert_eq!(floor.bound, COVERAGE_FLOOR);
        assert_eq!(floor.coefficients[assignment_index(0, 0, 2)], 1.0);
        assert_eq!(floor.coefficients[assignment_index(1, 0, 2)], 0.0);
        assert_eq!(floor.coefficients[assignment_index(2, 0, 2)], 1.0);
    }
}
