use crate::search::heuristics::{
    ActionCountHeuristic, CombinedHeuristic, ManhattanHeuristic, ZeroHeuristic,
};
use crate::search::{TaxiProblem, WorldState};
use ordered_float::OrderedFloat;
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

/// An estimator of the number of joint steps remaining to the goal. The
/// engines consume it as the h in f = g + h; the optimality argument of A*
/// requires the estimate to never exceed the true remaining cost.
pub trait Heuristic: Debug {
    /// Evaluate the given state with respect to the given problem.
    fn evaluate(&mut self, state: &WorldState, problem: &TaxiProblem) -> HeuristicValue;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[clap(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(help = "Counts the remaining pick-up and drop-off actions, divided by \
        the fleet size. Weak but cheap.")]
    ActionCount,
    #[clap(help = "Sums Manhattan distances of undelivered passengers to their \
        destinations, divided by the fleet size.")]
    Manhattan,
    #[clap(help = "Adds pick-up travel and capacity pressure to the distance \
        estimate. The most informed of the three.")]
    Combined,
    #[clap(name = "zero", help = "The zero heuristic. Turns A* into uniform-cost \
        search.")]
    ZeroHeuristic,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::ActionCount => Box::new(ActionCountHeuristic::new()),
            HeuristicName::Manhattan => Box::new(ManhattanHeuristic::new()),
            HeuristicName::Combined => Box::new(CombinedHeuristic::new()),
            HeuristicName::ZeroHeuristic => Box::new(ZeroHeuristic::new()),
        }
    }
}
