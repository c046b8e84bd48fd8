//! The transition function. Applies a joint action to a state, producing the
//! successor state and the unit step cost. All taxis act within the same
//! discrete step; an idle taxi still waits for one step, so the cost is 1
//! regardless of what the individual taxis do.
//!
//! Legality is the generator's responsibility. The pre-conditions asserted
//! here only guard against callers bypassing the generator; a violation
//! panics instead of silently corrupting the state.

use crate::search::{JointAction, PassengerStatus, TaxiAction, TaxiId, TaxiProblem, WorldState};

/// Every joint step costs one time unit.
pub const STEP_COST: u32 = 1;

/// Apply a joint action, returning the successor state and the step cost.
/// The input state is left untouched.
pub fn apply_joint_action(
    problem: &TaxiProblem,
    state: &WorldState,
    action: &JointAction,
) -> (WorldState, u32) {
    assert_eq!(
        action.num_taxis(),
        state.num_taxis(),
        "joint action must cover every taxi"
    );

    let mut next = state.clone();
    for (taxi, taxi_action) in action.iter() {
        apply_taxi_action(problem, &mut next, taxi, taxi_action);
    }
    (next, STEP_COST)
}

/// Apply one taxi's atomic action to `next`. Each taxi appears exactly once
/// per joint action, so its own entries in `next` are still untouched when
/// its action is applied, and the per-taxi applications commute.
fn apply_taxi_action(
    problem: &TaxiProblem,
    next: &mut WorldState,
    taxi: TaxiId,
    action: TaxiAction,
) {
    match action {
        TaxiAction::Move(target) => {
            let taxi_state = &mut next.taxis[taxi.0];
            assert!(taxi_state.fuel > 0, "move with an empty tank");
            assert_eq!(
                taxi_state.location.manhattan_distance(target),
                1,
                "move target must be adjacent"
            );
            assert!(problem.grid().is_passable(target), "move into a wall");
            taxi_state.location = target;
            taxi_state.fuel -= 1;
        }
        TaxiAction::PickUp(passenger) => {
            assert_eq!(
                next.passengers[passenger.0],
                PassengerStatus::Waiting,
                "picked passenger must be waiting"
            );
            assert_eq!(
                next.taxis[taxi.0].location,
                problem.passenger(passenger).origin,
                "pick-up away from the passenger's origin"
            );
            assert!(
                next.taxis[taxi.0].load < problem.taxi(taxi).capacity,
                "pick-up with a full taxi"
            );
            next.passengers[passenger.0] = PassengerStatus::Aboard(taxi);
            next.taxis[taxi.0].load += 1;
        }
        TaxiAction::DropOff(passenger) => {
            assert_eq!(
                next.passengers[passenger.0],
                PassengerStatus::Aboard(taxi),
                "dropped passenger must be aboard this taxi"
            );
            assert_eq!(
                next.taxis[taxi.0].location,
                problem.passenger(passenger).destination,
                "drop-off away from the passenger's destination"
            );
            next.passengers[passenger.0] = PassengerStatus::Delivered;
            next.taxis[taxi.0].load -= 1;
        }
        TaxiAction::Refuel => {
            assert!(
                problem.grid().is_gas_station(next.taxis[taxi.0].location),
                "refuel away from a gas station"
            );
            next.taxis[taxi.0].fuel = problem.taxi(taxi).max_fuel;
        }
        TaxiAction::Wait => {}
    }
}
