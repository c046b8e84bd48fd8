use crate::search::{Heuristic, HeuristicValue, PassengerStatus, TaxiProblem, WorldState};

/// Estimates remaining travel by Manhattan distance: the origin-to-
/// destination leg for every waiting passenger plus the current-location-to-
/// destination leg for every undelivered passenger, divided by the fleet
/// size. Manhattan distance ignores walls and fuel, so each leg is an
/// optimistic bound on the moves it stands for. Delivered passengers
/// contribute nothing, so the estimate vanishes at the goal.
#[derive(Debug)]
pub struct ManhattanHeuristic;

impl ManhattanHeuristic {
    pub fn new() -> Self {
        ManhattanHeuristic {}
    }
}

impl Heuristic for ManhattanHeuristic {
    fn evaluate(&mut self, state: &WorldState, problem: &TaxiProblem) -> HeuristicValue {
        let mut sum_of_distances = 0usize;
        for passenger in problem.passenger_ids() {
            let data = problem.passenger(passenger);
            match state.passenger_status(passenger) {
                PassengerStatus::Waiting => {
                    sum_of_distances += 2 * data.origin.manhattan_distance(data.destination);
                }
                PassengerStatus::Aboard(taxi) => {
                    sum_of_distances += state
                        .taxi(taxi)
                        .location
                        .manhattan_distance(data.destination);
                }
                PassengerStatus::Delivered => {}
            }
        }
        (sum_of_distances as f64 / problem.num_taxis() as f64).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{PassengerId, TaxiId};
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn sums_travel_legs() {
        let problem = problem_from_text(EXAMPLE_INSTANCE_TEXT);
        let mut heuristic = ManhattanHeuristic::new();

        // all four waiting: both legs coincide, distances 5 + 1 + 1 + 2
        let value = heuristic.evaluate(problem.initial_state(), &problem);
        assert_approx_eq!(value.into_inner(), 9.0);
    }

    #[test]
    fn aboard_passengers_count_from_their_taxi() {
        let problem = problem_from_text(EXAMPLE_INSTANCE_TEXT);
        let mut state = problem.initial_state().clone();
        // Iris aboard taxi 1 at (2, 0); her destination is (1, 4)
        state.passengers[PassengerId(0).0] = PassengerStatus::Aboard(TaxiId(0));
        state.taxis[0].load = 1;

        let mut heuristic = ManhattanHeuristic::new();
        // Iris contributes 5 once; Tomer, Sahar and Yarin still twice
        let value = heuristic.evaluate(&state, &problem);
        assert_approx_eq!(value.into_inner(), (5.0 + 2.0 * 4.0) / 2.0);
    }

    #[test]
    fn zero_at_goal() {
        let problem = problem_from_text(EXAMPLE_INSTANCE_TEXT);
        let mut state = problem.initial_state().clone();
        for status in state.passengers.iter_mut() {
            *status = PassengerStatus::Delivered;
        }
        let mut heuristic = ManhattanHeuristic::new();
        assert_eq!(heuristic.evaluate(&state, &problem).into_inner(), 0.0);
    }
}
