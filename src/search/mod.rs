pub mod generator;
pub mod heuristics;
pub mod search_engines;
pub mod transition;

mod action;
mod grid;
mod instance;
mod plan;
mod problem;
mod state;
mod validate;

pub use action::{JointAction, TaxiAction};
pub use grid::{Cell, Coord, GridMap};
pub use heuristics::{Heuristic, HeuristicName, HeuristicValue};
pub use instance::{Instance, PassengerSpec, TaxiSpec};
pub use plan::Plan;
pub use problem::{MalformedInstance, PassengerData, TaxiData, TaxiProblem};
pub use state::{PassengerId, PassengerStatus, TaxiId, TaxiState, WorldState};
pub use validate::validate;
