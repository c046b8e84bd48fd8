use crate::search::{
    search_engines::{StateId, NO_STATE},
    HeuristicValue, JointAction,
};
use ordered_float::Float;

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is in the open list
    Open,
    /// Node is in the closed list
    Closed,
}

/// A node in the search space: the search-specific bookkeeping for one
/// [`crate::search::WorldState`], such as cost estimates and the parent it
/// was first reached from.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Unique identifier of the state
    state_id: StateId,
    /// Status of the node
    status: SearchNodeStatus,
    /// F-value of the node, different depending on the search algorithm.
    f: HeuristicValue,
    /// G-value of the node, i.e. the cost to reach this node.
    g: HeuristicValue,
    /// H-value of the node, i.e. the heuristic estimate of the cost to reach
    /// the goal.
    h: HeuristicValue,
    /// Joint action that led to this node; [`None`] only for the root.
    action: Option<JointAction>,
    /// Parent state
    parent_id: StateId,
}

impl SearchNode {
    /// Create the root node of a search space. For non-root nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_without_parent(state_id: StateId) -> Self {
        Self {
            state_id,
            status: SearchNodeStatus::New,
            f: HeuristicValue::infinity(),
            g: HeuristicValue::infinity(),
            h: HeuristicValue::infinity(),
            action: None,
            parent_id: NO_STATE,
        }
    }

    /// Create a node reached from `parent_id` via `action`.
    pub fn new_with_parent(state_id: StateId, parent_id: StateId, action: JointAction) -> Self {
        Self {
            state_id,
            status: SearchNodeStatus::New,
            f: HeuristicValue::infinity(),
            g: HeuristicValue::infinity(),
            h: HeuristicValue::infinity(),
            action: Some(action),
            parent_id,
        }
    }

    pub fn open(&mut self, g: HeuristicValue, h: HeuristicValue) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
        self.f = g + h;
    }

    pub fn open_with_f(&mut self, f: HeuristicValue) {
        self.status = SearchNodeStatus::Open;
        self.f = f;
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_state_id(&self) -> StateId {
        self.state_id
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.f
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_parent_id(&self) -> StateId {
        self.parent_id
    }

    pub fn get_action(&self) -> Option<&JointAction> {
        self.action.as_ref()
    }
}
