use crate::search::{Heuristic, HeuristicValue, TaxiProblem, WorldState};

/// Estimates 0 everywhere. Running A* with it degenerates to uniform-cost
/// search, which is handy as a slow-but-trusted baseline.
#[derive(Debug)]
pub struct ZeroHeuristic;

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl Heuristic for ZeroHeuristic {
    fn evaluate(&mut self, _state: &WorldState, _problem: &TaxiProblem) -> HeuristicValue {
        0.0.into()
    }
}
