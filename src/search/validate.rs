use crate::search::{generator, transition, Plan, TaxiProblem};

/// Replay a plan from the initial state. Every step must be one of the joint
/// actions the generator produces for the current state, and the final state
/// must satisfy the goal.
pub fn validate(plan: &Plan, problem: &TaxiProblem) -> Result<(), String> {
    let mut cur_state = problem.initial_state().clone();
    for action in plan.steps() {
        let applicable_actions = generator::joint_actions(problem, &cur_state);
        if !applicable_actions.contains(action) {
            return Err(format!(
                "Joint action {} is not applicable in state {:?}",
                action.to_string(problem),
                cur_state
            ));
        }

        let (next_state, _cost) = transition::apply_joint_action(problem, &cur_state, action);
        cur_state = next_state;
    }

    if !problem.is_goal(&cur_state) {
        return Err(format!(
            "Plan does not reach a goal state, final state is: {:?}",
            cur_state
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Coord, Instance, JointAction, TaxiAction};
    use crate::test_utils::*;
    use smallvec::smallvec;

    fn corridor_problem() -> TaxiProblem {
        TaxiProblem::new(&Instance::from_text(CORRIDOR_INSTANCE_TEXT).unwrap()).unwrap()
    }

    fn joint(action: TaxiAction) -> JointAction {
        JointAction::new(smallvec![action])
    }

    fn good_plan() -> Plan {
        Plan::new(vec![
            joint(TaxiAction::Move(Coord::new(0, 1))),
            joint(TaxiAction::PickUp(crate::search::PassengerId(0))),
            joint(TaxiAction::Move(Coord::new(0, 2))),
            joint(TaxiAction::Move(Coord::new(0, 3))),
            joint(TaxiAction::DropOff(crate::search::PassengerId(0))),
        ])
    }

    #[test]
    fn validate_good_plan_ok() {
        assert!(validate(&good_plan(), &corridor_problem()).is_ok());
    }

    #[test]
    fn validate_bad_plan_not_applicable() {
        let mut steps = good_plan().steps().to_vec();
        // jumping two cells is never generated
        steps[0] = joint(TaxiAction::Move(Coord::new(0, 2)));
        assert!(validate(&Plan::new(steps), &corridor_problem()).is_err());
    }

    #[test]
    fn validate_bad_plan_incomplete() {
        let mut steps = good_plan().steps().to_vec();
        steps.pop();
        assert!(validate(&Plan::new(steps), &corridor_problem()).is_err());
    }
}
