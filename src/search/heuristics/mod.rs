mod action_count;
mod combined;
mod heuristic;
mod manhattan;
mod zero_heuristic;

pub use action_count::ActionCountHeuristic;
pub use combined::CombinedHeuristic;
pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use manhattan::ManhattanHeuristic;
pub use zero_heuristic::ZeroHeuristic;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    /// Check every reachable state of an instance against brute-force ground
    /// truth: no heuristic may exceed the true remaining cost. States from
    /// which the goal is unreachable put no bound on the estimate.
    fn assert_admissible_everywhere(text: &str) {
        let problem = problem_from_text(text);
        let mut heuristics: Vec<Box<dyn Heuristic>> = vec![
            Box::new(ActionCountHeuristic::new()),
            Box::new(ManhattanHeuristic::new()),
            Box::new(CombinedHeuristic::new()),
        ];
        let mut checked = 0;
        for (state, true_cost) in optimal_remaining_costs(&problem) {
            let Some(true_cost) = true_cost else {
                continue;
            };
            checked += 1;
            for heuristic in heuristics.iter_mut() {
                let value = heuristic.evaluate(&state, &problem).into_inner();
                assert!(
                    value <= true_cost as f64,
                    "{:?} overestimates: {} > {} in {:?}",
                    heuristic,
                    value,
                    true_cost,
                    state
                );
            }
        }
        assert!(checked > 0);
    }

    #[test]
    fn admissible_on_two_taxi_instance() {
        assert_admissible_everywhere(TWO_TAXIS_INSTANCE_TEXT);
    }

    #[test]
    fn admissible_on_refuel_corridor() {
        assert_admissible_everywhere(REFUEL_CORRIDOR_INSTANCE_TEXT);
    }

    #[test]
    fn admissible_on_single_corridor() {
        assert_admissible_everywhere(CORRIDOR_INSTANCE_TEXT);
    }
}
