//! Breadth first search

use ordered_float::OrderedFloat;

use crate::search::{
    search_engines::{
        SearchEngine, SearchNodeStatus, SearchResult, SearchSpace, SearchStatistics,
        TerminationCondition,
    },
    Heuristic, Plan, TaxiProblem,
};
use std::collections::VecDeque;

/// Uninformed baseline. Every joint step costs one, so the first goal state
/// reached layer by layer is optimal; the heuristic is ignored.
#[derive(Debug)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for BFS {
    fn search(
        &mut self,
        problem: &TaxiProblem,
        _heuristic: Box<dyn Heuristic>,
        mut termination: TerminationCondition,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut queue = VecDeque::new();
        let mut search_space = SearchSpace::new(problem.initial_state().clone());
        let root_node = search_space.get_root_node_mut();

        root_node.open_with_f(OrderedFloat(0.));
        queue.push_back(root_node.get_state_id());

        if problem.is_goal(problem.initial_state()) {
            return (SearchResult::Success(Plan::empty()), statistics);
        }

        while let Some(sid) = queue.pop_front() {
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
            let f_value = node.get_f();
            statistics.increment_expanded_nodes();

            let state = search_space.get_state(sid).clone();
            let successors = problem.successors(&state);
            statistics.increment_generated_actions(successors.len());

            for (action, successor, _cost) in successors {
                let child_node = search_space.insert_or_get_node(successor.clone(), action, sid);
                if child_node.get_status() == SearchNodeStatus::New {
                    statistics.increment_generated_nodes(1);
                    child_node.open_with_f(f_value + 1.);
                    if problem.is_goal(&successor) {
                        // clone to satisfy the borrow checker
                        let goal_node = child_node.clone();
                        return (
                            SearchResult::Success(search_space.extract_plan(&goal_node)),
                            statistics,
                        );
                    }
                    queue.push_back(child_node.get_state_id());
                }
            }
        }

        (SearchResult::ProvablyUnsolvable, statistics)
    }
}
