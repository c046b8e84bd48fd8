//! This module implements the A* search algorithm.

use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;

use crate::search::{
    search_engines::{
        SearchEngine, SearchNodeStatus, SearchResult, SearchSpace, SearchStatistics,
        TerminationCondition,
    },
    Heuristic, TaxiProblem,
};
use std::cmp::Reverse;

/// Best-first search on f = g + h, expanding the frontier in order of
/// estimated total plan cost. Returns a cost-optimal plan whenever the
/// heuristic never overestimates; nodes reached again on a cheaper path are
/// reopened, so an inconsistent heuristic costs time, not correctness.
#[derive(Debug)]
pub struct AStar {}

impl AStar {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for AStar {
    fn search(
        &mut self,
        problem: &TaxiProblem,
        mut heuristic: Box<dyn Heuristic>,
        mut termination: TerminationCondition,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut frontier = PriorityQueue::new();
        let mut search_space = SearchSpace::new(problem.initial_state().clone());

        let heuristic = heuristic.as_mut();
        let root_h = heuristic.evaluate(problem.initial_state(), problem);
        let root_node = search_space.get_root_node_mut();
        root_node.open(OrderedFloat(0.), root_h);
        frontier.push(root_node.get_state_id(), Reverse(root_node.get_f()));

        while let Some((sid, _)) = frontier.pop() {
            termination.log_if_needed();
            if let Some(result) = termination.should_terminate() {
                termination.finalise();
                return (result, statistics);
            }

            let node = search_space.get_node_mut(sid);
            if node.get_status() == SearchNodeStatus::Closed {
                continue;
            }
            node.close();
            let g_value = node.get_g();
            statistics.increment_expanded_nodes();

            let state = search_space.get_state(sid).clone();
            // The goal test happens when a node is expanded, not when it is
            // generated: only then is its g-value known to be optimal.
            if problem.is_goal(&state) {
                let goal_node = search_space.get_node(sid);
                return (
                    SearchResult::Success(search_space.extract_plan(goal_node)),
                    statistics,
                );
            }

            let successors = problem.successors(&state);
            statistics.increment_generated_actions(successors.len());

            let mut new_nodes = vec![];
            let mut possibly_reopened_nodes = vec![];
            for (action, successor, cost) in successors {
                let child_g = g_value + f64::from(cost);
                let child_node = search_space.insert_or_get_node(successor.clone(), action, sid);
                if child_node.get_status() == SearchNodeStatus::New {
                    new_nodes.push((child_node.get_state_id(), successor, child_g));
                } else {
                    possibly_reopened_nodes.push((child_node.get_state_id(), child_g));
                }
            }
            statistics.increment_generated_nodes(new_nodes.len());

            for (child_id, successor, child_g) in new_nodes {
                let h_value = heuristic.evaluate(&successor, problem);
                statistics.increment_evaluated_nodes();
                let child_node = search_space.get_node_mut(child_id);
                child_node.open(child_g, h_value);
                frontier.push(child_id, Reverse(child_node.get_f()));
            }

            for (child_id, child_g) in possibly_reopened_nodes {
                let child_node = search_space.get_node_mut(child_id);
                if child_g < child_node.get_g() {
                    statistics.increment_reopened_nodes();
                    child_node.open(child_g, child_node.get_h());
                    frontier.push(child_id, Reverse(child_node.get_f()));
                }
            }
        }

        (SearchResult::ProvablyUnsolvable, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{validate, HeuristicName, TaxiAction};
    use crate::test_utils::*;

    fn solve(instance_text: &str, heuristic: HeuristicName) -> (SearchResult, TaxiProblem) {
        let problem = problem_from_text(instance_text);
        let (result, _) = AStar::new().search(
            &problem,
            heuristic.create(),
            TerminationCondition::none(),
        );
        (result, problem)
    }

    fn expect_plan(result: SearchResult) -> crate::search::Plan {
        match result {
            SearchResult::Success(plan) => plan,
            other => panic!("expected a plan, got {:?}", other),
        }
    }

    #[test]
    fn solves_corridor_optimally_with_every_heuristic() {
        for heuristic in [
            HeuristicName::ActionCount,
            HeuristicName::Manhattan,
            HeuristicName::Combined,
            HeuristicName::ZeroHeuristic,
        ] {
            let (result, problem) = solve(CORRIDOR_INSTANCE_TEXT, heuristic);
            let plan = expect_plan(result);
            assert_eq!(plan.len(), 5, "with {:?}", heuristic);
            assert!(validate(&plan, &problem).is_ok());
        }
    }

    #[test]
    fn solves_two_taxi_instance_optimally() {
        let (result, problem) = solve(TWO_TAXIS_INSTANCE_TEXT, HeuristicName::Combined);
        let plan = expect_plan(result);
        assert_eq!(plan.len(), 6);
        assert!(validate(&plan, &problem).is_ok());
    }

    #[test]
    fn refuels_when_the_tank_runs_dry() {
        let (result, problem) = solve(REFUEL_CORRIDOR_INSTANCE_TEXT, HeuristicName::Combined);
        let plan = expect_plan(result);
        assert_eq!(plan.len(), 7);
        assert!(plan
            .steps()
            .iter()
            .any(|step| step.iter().any(|(_, action)| action == TaxiAction::Refuel)));
        assert!(validate(&plan, &problem).is_ok());
    }

    #[test]
    fn reports_exhaustion_on_unsolvable_instance() {
        let (result, _) = solve(UNSOLVABLE_INSTANCE_TEXT, HeuristicName::Combined);
        assert_eq!(result, SearchResult::ProvablyUnsolvable);
    }

    #[test]
    fn solves_documented_example_in_thirteen_steps() {
        let (result, problem) = solve(EXAMPLE_INSTANCE_TEXT, HeuristicName::ActionCount);
        let plan = expect_plan(result);
        assert_eq!(plan.len(), 13);
        assert!(validate(&plan, &problem).is_ok());
    }

    #[test]
    fn informed_heuristics_still_reach_the_example_goal() {
        for heuristic in [HeuristicName::Manhattan, HeuristicName::Combined] {
            let (result, problem) = solve(EXAMPLE_INSTANCE_TEXT, heuristic);
            let plan = expect_plan(result);
            assert!(validate(&plan, &problem).is_ok());
            assert!(plan.len() >= 13, "no plan can beat the optimum");
        }
    }

    #[test]
    fn time_limit_is_reported_as_an_outcome() {
        let problem = problem_from_text(EXAMPLE_INSTANCE_TEXT);
        let termination =
            TerminationCondition::new(Some(std::time::Duration::from_secs(0)), None);
        let (result, _) = AStar::new().search(
            &problem,
            HeuristicName::ActionCount.create(),
            termination,
        );
        assert_eq!(result, SearchResult::TimeLimitExceeded);
    }
}
