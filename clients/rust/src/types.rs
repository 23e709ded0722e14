use borsh::{BorshDeserialize, BorshSerialize};

#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Eq, PartialEq)]
pub enum GoalState {
    Created,
    Betting,
    Decided,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Judge verdicts accepted by `approve`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Decision {
    Success = 1,
    Failure = 2,
}

impl From<Decision> for u8 {
    fn from(decision: Decision) -> Self {
        decision as u8
    }
}
