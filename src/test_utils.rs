use crate::search::{Instance, TaxiProblem, WorldState};
use std::collections::{HashMap, HashSet, VecDeque};

pub const EXAMPLE_INSTANCE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/instances/example.json"
));

pub const CORRIDOR_INSTANCE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/instances/corridor.json"
));

pub const TWO_TAXIS_INSTANCE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/instances/two_taxis.json"
));

pub const REFUEL_CORRIDOR_INSTANCE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/instances/refuel_corridor.json"
));

pub const UNSOLVABLE_INSTANCE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/instances/unsolvable.json"
));

pub fn problem_from_text(text: &str) -> TaxiProblem {
    let instance = Instance::from_text(text).expect("instance should parse");
    TaxiProblem::new(&instance).expect("instance should be well formed")
}

/// Every state reachable from the initial state, in breadth-first order.
pub fn reachable_states(problem: &TaxiProblem) -> Vec<WorldState> {
    let mut states = vec![problem.initial_state().clone()];
    let mut seen: HashSet<WorldState> = HashSet::new();
    seen.insert(problem.initial_state().clone());
    let mut next = 0;
    while next < states.len() {
        let state = states[next].clone();
        next += 1;
        for (_action, successor, _cost) in problem.successors(&state) {
            if seen.insert(successor.clone()) {
                states.push(successor);
            }
        }
    }
    states
}

/// Brute-force ground truth: the true optimal number of joint steps from
/// every reachable state to the goal, or [`None`] where the goal is
/// unreachable. Computed with one forward sweep over the reachable state
/// graph followed by a backward breadth-first pass from the goal states.
pub fn optimal_remaining_costs(problem: &TaxiProblem) -> Vec<(WorldState, Option<u32>)> {
    let mut index: HashMap<WorldState, usize> = HashMap::new();
    let mut states: Vec<WorldState> = vec![problem.initial_state().clone()];
    let mut predecessors: Vec<Vec<usize>> = vec![vec![]];
    index.insert(problem.initial_state().clone(), 0);

    let mut current = 0;
    while current < states.len() {
        let state = states[current].clone();
        for (_action, successor, _cost) in problem.successors(&state) {
            let successor_index = match index.get(&successor) {
                Some(&i) => i,
                None => {
                    let i = states.len();
                    index.insert(successor.clone(), i);
                    states.push(successor);
                    predecessors.push(vec![]);
                    i
                }
            };
            predecessors[successor_index].push(current);
        }
        current += 1;
    }

    let mut costs: Vec<Option<u32>> = vec![None; states.len()];
    let mut queue = VecDeque::new();
    for (i, state) in states.iter().enumerate() {
        if problem.is_goal(state) {
            costs[i] = Some(0);
            queue.push_back(i);
        }
    }
    while let Some(i) = queue.pop_front() {
        let cost = costs[i].expect("queued states have a cost");
        for &predecessor in &predecessors[i] {
            if costs[predecessor].is_none() {
                costs[predecessor] = Some(cost + 1);
                queue.push_back(predecessor);
            }
        }
    }

    states.into_iter().zip(costs).collect()
}
