//! Client for the `goalify` program: account mirrors, instruction builders,
//! PDA helpers and error decoding for front ends and tests.

pub mod accounts;
pub mod errors;
pub mod instructions;
pub mod pda;
pub mod programs;
pub mod types;

pub use accounts::*;
pub use errors::GoalifyError;
pub use pda::*;
pub use programs::GOALIFY_ID as ID;
pub use programs::*;
pub use types::*;
