// Use-case orchestration: validate → build → solve → interpret, one
// blocking pass. A non-optimal status is a definitive outcome, not a
// transient failure, so there are no retries and no constraint relaxation.

use std::sync::Arc;

use tracing::info;

use crate::domain::{InputError, Roster, SolverBackend, SolverConfig, SolverError, SolverService};
use crate::solver::SolverFactory;

use super::interpreter::{interpret, FormationOutcome};
use super::model_builder::TeamModelBuilder;

/// Errors terminating a formation run before a solver verdict exists.
#[derive(Debug, thiserror::Error)]
pub enum FormationError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Partitions rosters into balanced teams using one solver backend.
pub struct TeamFormation {
    solver: Arc<dyn SolverService>,
    config: SolverConfig,
}

impl TeamFormation {
    pub fn new(solver: Arc<dyn SolverService>) -> Self {
        Self {
            solver,
            config: SolverConfig::default(),
        }
    }

    /// Selects the backend through the factory.
    pub fn with_backend(backend: SolverBackend) -> Self {
        let config = SolverConfig {
            backend,
            ..SolverConfig::default()
        };
        Self {
            solver: SolverFactory::create_from_backend(backend),
            config,
        }
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs one formation: builds the assignment MIP for `roster` and
    /// `team_count`, solves it, and interprets the result. Malformed input
    /// fails fast as `Err`; infeasibility and other solver verdicts come
    /// back inside the `FormationOutcome`.
    pub fn partition(
        &self,
        roster: &Roster,
        team_count: usize,
    ) -> Result<FormationOutcome, FormationError> {
        let problem = TeamModelBuilder::new(roster, team_count)
            .with_config(self.config.clone())
            .build()?;

        if problem.is_mixed_integer() && !self.solver.supports_mip() {
            return Err(SolverError::InvalidProblem(format!(
                "solver '{}' does not support mixed-integer problems",
                self.solver.name()
            ))
            .into());
        }

        let solution = self.solver.solve(&problem)?;
        info!(
            solver = self.solver.name(),
            status = %solution.status,
            solve_time_ms = solution.statistics.solve_time_ms,
            "solve finished"
        );

        Ok(interpret(&solution, roster, team_count))
    }
}

impl Default for TeamFormation {
    fn default() -> Self {
        Self::new(SolverFactory::default_solver())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Developer, OptimizationProblem, Role, Seniority, Solution, SolutionStatus,
    };

    /// Test double standing in for a real backend: hands back a canned
    /// solution after recording nothing.
    struct CannedSolver(SolutionStatus);

    impl SolverService for CannedSolver {
        fn solve(&self, problem: &OptimizationProblem) -> crate::domain::Result<Solution> {
            self.validate(problem)?;
            Ok(match self.0 {
                SolutionStatus::Optimal => {
                    // both developers on team 0, delta 0
                    let mut values = vec![1.0, 0.0, 1.0, 0.0];
                    values.push(0.0);
                    Solution::optimal(0.0, values)
                }
                status => Solution::terminal(status, "canned"),
            })
        }

        fn name(&self) -> &str {
            "canned"
        }

        fn supports_mip(&self) -> bool {
            true
        }
    }

    fn tiny_roster() -> Roster {
        Roster::new(vec![
            Developer::new(50.0, Role::FullStack, Seniority::Senior).international(),
            Developer::new(50.0, Role::FullStack, Seniority::Junior).international(),
        ])
        .unwrap()
    }

    #[test]
    fn infeasible_verdict_flows_through_as_outcome() {
        let formation = TeamFormation::new(Arc::new(CannedSolver(SolutionStatus::Infeasible)));
        let outcome = formation.partition(&tiny_roster(), 2).unwrap();
        assert_eq!(outcome, FormationOutcome::Infeasible);
    }

    #[test]
    fn optimal_verdict_becomes_balanced_assignment() {
        let formation = TeamFormation::new(Arc::new(CannedSolver(SolutionStatus::Optimal)));
        let outcome = formation.partition(&tiny_roster(), 2).unwrap();
        let FormationOutcome::Balanced(assignment) = outcome else {
            panic!("expected balanced outcome");
        };
        assert_eq!(assignment.teams, vec![vec![0, 1], vec![]]);
        assert_eq!(assignment.delta, 0.0);
    }

    #[test]
    fn bad_team_count_fails_before_the_solver_runs() {
        let formation = TeamFormation::new(Arc::new(CannedSolver(SolutionStatus::Optimal)));
        let err = formation.partition(&tiny_roster(), 0).unwrap_err();
        assert!(matches!(
            err,
            FormationError::Input(InputError::InvalidTeamCount(0))
        ));
    }
}
