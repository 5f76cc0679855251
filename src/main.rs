use teamopt::{FormationOutcome, Roster, RosterColumns, SolverBackend, TeamFormation};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Motivating instance: 15 developers into 5 teams.
    let roster = Roster::from_columns(RosterColumns {
        productivity: &[
            85.0, 75.0, 90.0, 70.0, 80.0, 65.0, 88.0, 72.0, 95.0, 68.0, 85.0, 78.0, 82.0, 70.0,
            88.0,
        ],
        frontend: &[1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0],
        backend: &[0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0],
        full_stack: &[0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1],
        senior: &[1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
        junior: &[0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0],
        international: &[1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0],
    })?;

    let formation = TeamFormation::with_backend(SolverBackend::Auto);
    let outcome = formation.partition(&roster, 5)?;

    match outcome {
        FormationOutcome::Balanced(assignment) => {
            println!("Solution:");
            println!("Minimum delta: {}", assignment.delta);
            for (j, members) in assignment.teams.iter().enumerate() {
                println!(
                    "Team {} (productivity {}):",
                    j + 1,
                    assignment.team_productivity[j]
                );
                for &i in members {
                    println!("  Developer {}", i + 1);
                }
            }
        }
        FormationOutcome::Infeasible => {
            println!("No feasible balanced partition exists for this roster.");
        }
        FormationOutcome::Inconclusive(status) => {
            println!("The problem does not have an optimal solution (status: {status}).");
        }
    }

    Ok(())
}
