//! Balanced team formation via mixed-integer programming.
//!
//! Given a roster of developers (productivity score plus role, seniority,
//! and diversity tags) and a team count, builds a MIP whose binary
//! variables assign each developer to exactly one team and whose single
//! continuous variable `delta` bounds every team's absolute deviation from
//! the global average productivity. Minimizing `delta` balances the teams
//! as far as the composition rules (specialist caps, coverage floors)
//! allow. Solving is delegated to a pluggable backend (HiGHS or COIN-OR
//! CBC) behind the [`SolverService`] trait.

// Domain layer: input records, MIP primitives, solver contract
pub mod domain;

// Application layer: model building, solving orchestration, interpretation
pub mod application;

// Solver adapters: concrete implementations of SolverService
pub mod solver;

// Re-export commonly used types
pub use domain::{
    Constraint, ConstraintType, Developer, InputError, ObjectiveFunction, OptimizationProblem,
    OptimizationType, Role, Roster, RosterColumns, Seniority, Solution, SolutionStatus,
    SolverBackend, SolverConfig, SolverError, SolverService, Variable, VariableType,
};

pub use application::{
    FormationError, FormationOutcome, TeamAssignment, TeamFormation, TeamModelBuilder,
};

pub use solver::{CoinCbcSolver, HighsSolver, SolverFactory};
