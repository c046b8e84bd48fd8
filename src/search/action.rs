//! Actions. Each taxi performs exactly one atomic action per time step; a
//! [`JointAction`] bundles one atomic action per taxi, all executed
//! simultaneously.

use crate::search::{Coord, PassengerId, TaxiId, TaxiProblem, WorldState};
use itertools::Itertools;
use smallvec::SmallVec;

/// An atomic per-taxi action, as a closed variant interpreted by the
/// transition function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxiAction {
    /// Drive to an adjacent passable cell, consuming one unit of fuel.
    Move(Coord),
    /// Take a waiting passenger aboard at its origin cell.
    PickUp(PassengerId),
    /// Deliver an aboard passenger at its destination cell.
    DropOff(PassengerId),
    /// Refill the tank to the taxi's maximum. Only legal on a gas station.
    Refuel,
    /// Do nothing for one step.
    Wait,
}

impl TaxiAction {
    /// The cell the taxi occupies after this action: the move target for a
    /// move, the current cell otherwise.
    pub fn post_location(&self, current: Coord) -> Coord {
        match self {
            TaxiAction::Move(target) => *target,
            _ => current,
        }
    }
}

/// One atomic action per taxi, indexed by [`TaxiId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JointAction {
    actions: SmallVec<[TaxiAction; 2]>,
}

impl JointAction {
    pub fn new(actions: SmallVec<[TaxiAction; 2]>) -> Self {
        Self { actions }
    }

    pub fn action(&self, taxi: TaxiId) -> TaxiAction {
        self.actions[taxi.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = (TaxiId, TaxiAction)> + '_ {
        self.actions
            .iter()
            .enumerate()
            .map(|(index, &action)| (TaxiId(index), action))
    }

    pub fn num_taxis(&self) -> usize {
        self.actions.len()
    }

    /// The taxi-location multiset after this joint action is applied to
    /// `state`. The generator rejects candidates with duplicates in here.
    pub fn post_locations(&self, state: &WorldState) -> SmallVec<[Coord; 2]> {
        self.iter()
            .map(|(taxi, action)| action.post_location(state.taxi(taxi).location))
            .collect()
    }

    pub fn to_string(&self, problem: &TaxiProblem) -> String {
        let parts = self.iter().map(|(taxi, action)| {
            let taxi_name = problem.taxi(taxi).name.as_str();
            match action {
                TaxiAction::Move(target) => format!("(move {} {})", taxi_name, target),
                TaxiAction::PickUp(passenger) => format!(
                    "(pick-up {} {})",
                    taxi_name,
                    problem.passenger(passenger).name
                ),
                TaxiAction::DropOff(passenger) => format!(
                    "(drop-off {} {})",
                    taxi_name,
                    problem.passenger(passenger).name
                ),
                TaxiAction::Refuel => format!("(refuel {})", taxi_name),
                TaxiAction::Wait => format!("(wait {})", taxi_name),
            }
        });
        format!("({})", parts.format(" "))
    }
}
