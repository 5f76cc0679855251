// Domain module: input records, MIP primitives, and the solver contract

pub mod models;
pub mod roster;
pub mod solver_service;
pub mod value_objects;

pub use models::*;
pub use roster::*;
pub use solver_service::*;
pub use value_objects::*;
