// Turns a solved assignment model back into team memberships.
//
// Solvers hand binary variables back as floats, so membership is read with
// a 0.5 threshold; a truly binary-optimal solution never lands near it.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{Roster, Solution, SolutionStatus};

use super::model_builder::assignment_index;

/// Threshold separating "assigned" from "not assigned" in relaxed solver
/// output.
const ASSIGNMENT_THRESHOLD: f64 = 0.5;

/// A solved partition: the minimized deviation bound plus, per team, the
/// member indices in ascending roster order and the team's productivity sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAssignment {
    /// Minimized maximum absolute deviation of any team's productivity sum
    /// from the global per-developer average.
    pub delta: f64,
    /// Developer indices per team, ascending within each team.
    pub teams: Vec<Vec<usize>>,
    /// Productivity sum per team, parallel to `teams`.
    pub team_productivity: Vec<f64>,
}

/// Terminal outcome of a formation run. `Infeasible` is a proof that the
/// composition rules cannot be met; `Inconclusive` is everything else the
/// solver may report short of optimality and is never collapsed into
/// infeasibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormationOutcome {
    Balanced(TeamAssignment),
    Infeasible,
    Inconclusive(String),
}

impl FormationOutcome {
    pub fn is_balanced(&self) -> bool {
        matches!(self, FormationOutcome::Balanced(_))
    }
}

/// Reads team memberships and the achieved delta out of a solver result.
///
/// Expects the variable layout produced by the model builder: assignment
/// binaries in developer-major order, delta last. Any non-optimal status
/// yields a non-`Balanced` outcome with no partial membership output.
pub fn interpret(solution: &Solution, roster: &Roster, team_count: usize) -> FormationOutcome {
    match solution.status {
        SolutionStatus::Optimal => {}
        SolutionStatus::Infeasible => return FormationOutcome::Infeasible,
        status => {
            warn!(%status, "solver finished without an optimality proof");
            return FormationOutcome::Inconclusive(status.to_string());
        }
    }

    let delta = match solution.objective_value {
        Some(value) => value,
        None => {
            warn!("optimal solution carried no objective value");
            return FormationOutcome::Inconclusive(SolutionStatus::Error.to_string());
        }
    };

    let expected_values = roster.len() * team_count;
    if solution.variable_values.len() < expected_values {
        warn!(
            got = solution.variable_values.len(),
            expected = expected_values,
            "solution does not cover the assignment grid"
        );
        return FormationOutcome::Inconclusive(SolutionStatus::Error.to_string());
    }

    let mut teams = vec![Vec::new(); team_count];
    let mut team_productivity = vec![0.0; team_count];
    for (i, developer) in roster.developers().iter().enumerate() {
        for (j, members) in teams.iter_mut().enumerate() {
            let value = solution.variable_values[assignment_index(i, j, team_count)];
            if value > ASSIGNMENT_THRESHOLD {
                members.push(i);
                team_productivity[j] += developer.productivity;
            }
        }
    }

    FormationOutcome::Balanced(TeamAssignment {
        delta,
        teams,
        team_productivity,
    })
}
