// Application module: use cases mapping rosters onto the MIP layer and back

pub mod formation;
pub mod interpreter;
pub mod model_builder;

pub use formation::{FormationError, TeamFormation};
pub use interpreter::{interpret, FormationOutcome, TeamAssignment};
pub use model_builder::{TeamModelBuilder, COVERAGE_FLOOR, SPECIALIST_CAP};
