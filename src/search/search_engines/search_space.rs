use crate::search::{search_engines::SearchNode, JointAction, Plan, WorldState};
use segvec::{Linear, SegVec};
use std::collections::HashMap;

/// Identifier of a state in one [`SearchSpace`], doubling as its index into
/// the node and state storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateId(usize);

pub const NO_STATE: StateId = StateId(usize::MAX);

/// The set of states discovered so far, deduplicated by full state equality:
/// two snapshots with the same taxi locations, fuel, loads and passenger
/// statuses are the same search node.
pub struct SearchSpace {
    root_state_id: StateId,
    nodes: SegVec<SearchNode, Linear>,
    states: SegVec<WorldState, Linear>,
    registered_states: HashMap<WorldState, StateId>,
}

impl SearchSpace {
    pub fn new(initial_state: WorldState) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();
        let mut registered_states = HashMap::new();

        let root_state_id = StateId(0);
        registered_states.insert(initial_state.clone(), root_state_id);
        nodes.push(SearchNode::new_without_parent(root_state_id));
        states.push(initial_state);

        Self {
            root_state_id,
            nodes,
            states,
            registered_states,
        }
    }

    /// Register a successor state, returning its node. If an equal state was
    /// seen before, its existing node is returned and `action`/`parent_id`
    /// are ignored; the engines decide whether the new path is better.
    pub fn insert_or_get_node(
        &mut self,
        state: WorldState,
        action: JointAction,
        parent_id: StateId,
    ) -> &mut SearchNode {
        match self.registered_states.get(&state) {
            Some(&state_id) => self.get_node_mut(state_id),
            None => {
                let state_id = StateId(self.nodes.len());
                self.registered_states.insert(state.clone(), state_id);
                self.states.push(state);
                self.nodes
                    .push(SearchNode::new_with_parent(state_id, parent_id, action));
                self.get_node_mut(state_id)
            }
        }
    }

    /// Walk the parent chain from a goal node back to the root, collecting
    /// the joint actions in execution order.
    pub fn extract_plan(&self, goal_node: &SearchNode) -> Plan {
        let mut steps = vec![];
        let mut current_node = goal_node;
        while NO_STATE != current_node.get_parent_id() {
            steps.push(
                current_node
                    .get_action()
                    .expect("non-root nodes carry the action that reached them")
                    .clone(),
            );
            current_node = self.get_node(current_node.get_parent_id());
        }
        steps.reverse();
        Plan::new(steps)
    }

    pub fn get_root_node_mut(&mut self) -> &mut SearchNode {
        self.get_node_mut(self.root_state_id)
    }

    pub fn get_node(&self, state_id: StateId) -> &SearchNode {
        self.nodes.get(state_id.0).expect("Invalid state id")
    }

    pub fn get_node_mut(&mut self, state_id: StateId) -> &mut SearchNode {
        self.nodes.get_mut(state_id.0).expect("Invalid state id")
    }

    pub fn get_state(&self, state_id: StateId) -> &WorldState {
        self.states.get(state_id.0).expect("Invalid state id")
    }

    pub fn len(&self) -> usize {
        self.registered_states.len()
    }
}
