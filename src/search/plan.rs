//! A plan is the ordered sequence of joint actions a search engine returns:
//! one joint action per time step, so the plan length is the total step
//! count being minimized.

use crate::search::{JointAction, TaxiProblem};
use itertools::Itertools;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<JointAction>,
}

impl Plan {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<JointAction>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[JointAction] {
        &self.steps
    }

    /// Total number of joint steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// One joint action per line, in execution order.
    pub fn to_string(&self, problem: &TaxiProblem) -> String {
        self.steps
            .iter()
            .map(|step| step.to_string(problem))
            .join("\n")
    }
}
