//! Joint-action generation. Legal actions are enumerated per taxi, then
//! combined into joint actions via a cross-product that is pruned while it is
//! being built: a partial combination is abandoned as soon as two taxis would
//! end the step on the same cell. Generation is the sole legality gatekeeper;
//! the transition function assumes pre-validated input.

use crate::search::{Coord, JointAction, PassengerStatus, TaxiAction, TaxiId, TaxiProblem, WorldState};
use smallvec::SmallVec;

/// All legal atomic actions for one taxi in `state`. Waiting is always
/// legal, so the result is never empty.
pub fn taxi_actions(problem: &TaxiProblem, state: &WorldState, taxi: TaxiId) -> Vec<TaxiAction> {
    let taxi_state = state.taxi(taxi);
    let location = taxi_state.location;
    let mut actions = vec![TaxiAction::Wait];

    if taxi_state.fuel > 0 {
        for target in problem.grid().passable_neighbours(location) {
            actions.push(TaxiAction::Move(target));
        }
    }

    if taxi_state.load < problem.taxi(taxi).capacity {
        for passenger in problem.passenger_ids() {
            if state.passenger_status(passenger) == PassengerStatus::Waiting
                && problem.passenger(passenger).origin == location
            {
                actions.push(TaxiAction::PickUp(passenger));
            }
        }
    }

    for passenger in problem.passenger_ids() {
        if state.passenger_status(passenger) == PassengerStatus::Aboard(taxi)
            && problem.passenger(passenger).destination == location
        {
            actions.push(TaxiAction::DropOff(passenger));
        }
    }

    if problem.grid().is_gas_station(location) {
        actions.push(TaxiAction::Refuel);
    }

    actions
}

/// All legal joint actions in `state`: one atomic action per taxi, rejecting
/// every combination whose post-move taxi-location multiset contains a
/// duplicate. Non-empty for every reachable state, since taxis start on
/// distinct cells and the all-wait combination preserves that.
pub fn joint_actions(problem: &TaxiProblem, state: &WorldState) -> Vec<JointAction> {
    let per_taxi: Vec<Vec<TaxiAction>> = problem
        .taxi_ids()
        .map(|taxi| taxi_actions(problem, state, taxi))
        .collect();

    let mut result = Vec::new();
    let mut chosen: SmallVec<[TaxiAction; 2]> = SmallVec::new();
    let mut occupied: SmallVec<[Coord; 2]> = SmallVec::new();
    extend_joint(state, &per_taxi, &mut chosen, &mut occupied, &mut result);
    result
}

fn extend_joint(
    state: &WorldState,
    per_taxi: &[Vec<TaxiAction>],
    chosen: &mut SmallVec<[TaxiAction; 2]>,
    occupied: &mut SmallVec<[Coord; 2]>,
    result: &mut Vec<JointAction>,
) {
    let index = chosen.len();
    if index == per_taxi.len() {
        result.push(JointAction::new(chosen.clone()));
        return;
    }

    let current = state.taxi(TaxiId(index)).location;
    for &action in &per_taxi[index] {
        let post = action.post_location(current);
        if occupied.contains(&post) {
            continue;
        }
        chosen.push(action);
        occupied.push(post);
        extend_joint(state, per_taxi, chosen, occupied, result);
        chosen.pop();
        occupied.pop();
    }
}
