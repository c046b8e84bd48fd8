use crate::search::{Heuristic, HeuristicValue, TaxiProblem, WorldState};

/// Counts the discrete actions still owed: every waiting passenger needs a
/// pick-up and a drop-off, every aboard passenger needs a drop-off. At most
/// one atomic action happens per taxi per joint step, so dividing the count
/// by the fleet size keeps the estimate a lower bound.
#[derive(Debug)]
pub struct ActionCountHeuristic;

impl ActionCountHeuristic {
    pub fn new() -> Self {
        ActionCountHeuristic {}
    }
}

impl Heuristic for ActionCountHeuristic {
    fn evaluate(&mut self, state: &WorldState, problem: &TaxiProblem) -> HeuristicValue {
        let unpicked = state.num_unpicked() as f64;
        let aboard = state.num_aboard() as f64;
        ((2.0 * unpicked + aboard) / problem.num_taxis() as f64).into()
    }
}
