#![allow(dead_code)]
pub mod fixture;
pub mod helpers;
pub mod instructions;

pub use accounts::*;
pub use fixture::*;
pub use helpers::*;
pub use instructions::*;
